//! Candidate ranking, deduplication and composable comparators.

use crate::types::{Keyed, LookupHit};
use ahash::AHashSet;
use std::cmp::Ordering;

/// A single sort key.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// Combine comparators left to right; the first non-equal result wins.
pub fn chain<T>(comparators: &[Comparator<T>]) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| {
        comparators
            .iter()
            .map(|compare| compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Higher pagerank first; non-numeric pagerank counts as 0 and `-0.0` ties with `0.0`.
pub fn by_pagerank(a: &LookupHit, b: &LookupHit) -> Ordering {
    compare_rank(b.location.rank(), a.location.rank())
}

/// Numeric order of two finite ranks, with signed zeros equal.
pub(crate) fn compare_rank(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Descending comparison of the type name, so METROPOLITAN sorts before AIRPORT.
pub fn by_type(a: &LookupHit, b: &LookupHit) -> Ordering {
    b.location.kind.as_str().cmp(a.location.kind.as_str())
}

/// Heavier weight first; unweighted entries count as 0.
pub fn by_weight(a: &LookupHit, b: &LookupHit) -> Ordering {
    b.weight.unwrap_or(0).cmp(&a.weight.unwrap_or(0))
}

/// Airport name ascending, ignoring case first.
pub fn by_airport_name(a: &LookupHit, b: &LookupHit) -> Ordering {
    let (left, right) = (&a.location.airport_name, &b.location.airport_name);
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}

/// Presentation order: type, then weight, then airport name.
pub const DISPLAY_ORDER: [Comparator<LookupHit>; 3] = [by_type, by_weight, by_airport_name];

/// Re-sort lookup results for display. Not part of the lookup pipeline.
pub fn sort_for_display(hits: &mut [LookupHit]) {
    hits.sort_by(chain(&DISPLAY_ORDER));
}

/// Keep the first item for each `(airport_iata_code, type)`, preserving order.
pub fn dedupe<T: Keyed>(items: Vec<T>) -> Vec<T> {
    let mut seen = AHashSet::with_capacity(items.len());
    let keep: Vec<bool> = items.iter().map(|item| seen.insert(item.dedup_key())).collect();
    drop(seen);

    items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect()
}

/// Rank strategy hits into the candidate set.
///
/// Stable sort by pagerank only (the strategy weight is carried along but is
/// not a key), then dedupe so the highest-ranked copy of each location wins,
/// then keep the first `max` entries.
pub(crate) fn rank_candidates(mut hits: Vec<LookupHit>, max: usize) -> Vec<LookupHit> {
    hits.sort_by(by_pagerank);
    let mut candidates = dedupe(hits);
    candidates.truncate(max);
    candidates
}
