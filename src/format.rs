//! Plain-text rendering of lookup results for tool and CLI output.

use crate::types::{Location, LookupHit};
use std::fmt::Write as _;

/// Render primary lookup results, one numbered line per location.
pub fn format_lookup_results(query: &str, hits: &[LookupHit], min_query_length: usize) -> String {
    if hits.is_empty() {
        return no_results(query, min_query_length);
    }

    let mut output = format!("Locations matching '{}':\n\n", query);
    for (idx, hit) in hits.iter().enumerate() {
        write_location(&mut output, idx + 1, &hit.location);
        if let Some(weight) = hit.weight {
            let _ = write!(output, " weight={}", weight);
        }
        let _ = writeln!(output, " rank={}", hit.location.rank());
    }
    output
}

/// Render aggregate lookup rows.
pub fn format_aggregate_results(query: &str, rows: &[Location], min_query_length: usize) -> String {
    if rows.is_empty() {
        return no_results(query, min_query_length);
    }

    let mut output = format!("Locations matching '{}' on any field:\n\n", query);
    for (idx, row) in rows.iter().enumerate() {
        write_location(&mut output, idx + 1, row);
        output.push('\n');
    }
    output
}

fn write_location(output: &mut String, position: usize, location: &Location) {
    let _ = write!(
        output,
        "{}. {} [{}] {}, {} ({}) city={}",
        position,
        location.airport_iata_code,
        location.kind,
        location.airport_name,
        location.city_name,
        location.country_code,
        location.city_code
    );
}

fn no_results(query: &str, min_query_length: usize) -> String {
    let mut msg = format!("No locations found for '{}'.\n", query);
    if query.chars().count() < min_query_length {
        let _ = writeln!(
            msg,
            "\nQueries need at least {} characters.",
            min_query_length
        );
    } else {
        msg.push_str("\nSearch tips:\n");
        msg.push_str("• Try an airport code like 'JFK' or a city code like 'NYC'\n");
        msg.push_str("• Try the start of a city or airport name like 'New Y'\n");
    }
    msg
}
