//! Location records and the per-request hit wrapper.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Kind of a location record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    #[default]
    Airport,
    Metropolitan,
}

impl LocationType {
    /// Name as stored in the dataset.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Airport => "AIRPORT",
            Self::Metropolitan => "METROPOLITAN",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single airport or metropolitan-area record.
///
/// Records are read-only: the store hands out clones and nothing on the lookup
/// path writes back. Missing string fields deserialize to `""`, a missing
/// `type` to [`LocationType::Airport`] and an unusable `pagerank` to `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    pub city_name: String,
    /// Grouping key shared by a metropolitan record and its airports.
    #[serde(deserialize_with = "null_as_default")]
    pub city_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub airport_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub airport_iata_code: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: LocationType,
    #[serde(deserialize_with = "null_as_default")]
    pub country_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(deserialize_with = "lenient_rank")]
    pub pagerank: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub belongs_to_metropolitan: bool,
}

impl Location {
    /// Pagerank with anything non-finite treated as 0.
    pub fn rank(&self) -> f64 {
        if self.pagerank.is_finite() {
            self.pagerank
        } else {
            0.0
        }
    }

    /// True for an airport that should be expanded into its metropolitan group.
    pub fn is_metro_member(&self) -> bool {
        self.kind == LocationType::Airport && self.belongs_to_metropolitan
    }
}

/// Identity of a location for uniqueness purposes: `(airport_iata_code, type)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DedupKey<'a> {
    pub iata: &'a str,
    pub kind: LocationType,
}

/// Anything that can be deduplicated by [`DedupKey`].
pub trait Keyed {
    fn dedup_key(&self) -> DedupKey<'_>;
}

impl Keyed for Location {
    fn dedup_key(&self) -> DedupKey<'_> {
        DedupKey {
            iata: &self.airport_iata_code,
            kind: self.kind,
        }
    }
}

/// A location as returned by a lookup, with the weight of the strategy that
/// matched it.
///
/// The wrapped record is an owned copy; attaching a weight never touches the
/// store's records. Entries added by metropolitan expansion carry no weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupHit {
    #[serde(flatten)]
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl LookupHit {
    pub const fn weighted(location: Location, weight: u32) -> Self {
        Self {
            location,
            weight: Some(weight),
        }
    }

    pub const fn unweighted(location: Location) -> Self {
        Self {
            location,
            weight: None,
        }
    }
}

impl Keyed for LookupHit {
    fn dedup_key(&self) -> DedupKey<'_> {
        self.location.dedup_key()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts numbers, numeric strings, null, or anything else (which becomes 0).
fn lenient_rank<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRank {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let rank = match Option::<RawRank>::deserialize(deserializer)? {
        Some(RawRank::Number(n)) => n,
        Some(RawRank::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(RawRank::Other(_)) | None => 0.0,
    };
    Ok(if rank.is_finite() { rank } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let loc: Location = serde_json::from_str(r#"{"airport_iata_code": "JFK"}"#).unwrap();
        assert_eq!(loc.kind, LocationType::Airport);
        assert_eq!(loc.pagerank, 0.0);
        assert!(!loc.belongs_to_metropolitan);
        assert_eq!(loc.city_code, "");
        assert!(loc.timezone.is_none());
    }

    #[test]
    fn pagerank_is_coerced() {
        let parse = |raw: &str| {
            let json = format!(r#"{{"pagerank": {raw}}}"#);
            serde_json::from_str::<Location>(&json).unwrap().pagerank
        };
        assert_eq!(parse("12.5"), 12.5);
        assert_eq!(parse(r#""7""#), 7.0);
        assert_eq!(parse(r#""high""#), 0.0);
        assert_eq!(parse("null"), 0.0);
        assert_eq!(parse("true"), 0.0);
        assert_eq!(parse("{}"), 0.0);
    }

    #[test]
    fn null_type_means_airport() {
        let loc: Location = serde_json::from_str(r#"{"type": null, "city_name": null}"#).unwrap();
        assert_eq!(loc.kind, LocationType::Airport);
        assert_eq!(loc.city_name, "");
    }

    #[test]
    fn metropolitan_type_round_trips_by_name() {
        let loc: Location = serde_json::from_str(r#"{"type": "METROPOLITAN"}"#).unwrap();
        assert_eq!(loc.kind, LocationType::Metropolitan);
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(json["type"], "METROPOLITAN");
    }

    #[test]
    fn dedup_key_ignores_descriptive_fields() {
        let a = Location {
            airport_iata_code: "NYC".into(),
            kind: LocationType::Metropolitan,
            pagerank: 3.0,
            ..Location::default()
        };
        let b = Location {
            airport_name: "Metropolitan Area".into(),
            ..a.clone()
        };
        let c = Location {
            kind: LocationType::Airport,
            ..a.clone()
        };
        assert_eq!(a.dedup_key(), b.dedup_key());
        assert_ne!(a.dedup_key(), c.dedup_key());
    }

    #[test]
    fn hit_serializes_flat_and_omits_missing_weight() {
        let loc = Location {
            airport_iata_code: "LGA".into(),
            ..Location::default()
        };
        let weighted = serde_json::to_value(LookupHit::weighted(loc.clone(), 25)).unwrap();
        assert_eq!(weighted["airport_iata_code"], "LGA");
        assert_eq!(weighted["weight"], 25);

        let plain = serde_json::to_value(LookupHit::unweighted(loc)).unwrap();
        assert!(plain.get("weight").is_none());
    }
}
