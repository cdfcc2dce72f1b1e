//! Location store capability consumed by the lookup engine.
//!
//! The engine never owns a connection: a store is injected as
//! `Arc<dyn LocationStore>` and the surrounding service controls its lifecycle.

pub(crate) mod memory;

pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::lookup::ranking::compare_rank;
use crate::types::{Location, LocationType};
use futures::future::BoxFuture;
use std::cmp::Ordering;

/// Result of a single store query.
pub type StoreResult = Result<Vec<Location>, StoreError>;

/// Field a prefix query matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixField {
    AirportIataCode,
    CityCode,
    AirportName,
    CityName,
}

impl PrefixField {
    /// Every prefix-searchable field.
    pub const ALL: [Self; 4] = [
        Self::AirportIataCode,
        Self::CityCode,
        Self::AirportName,
        Self::CityName,
    ];

    /// Dataset field name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AirportIataCode => "airport_iata_code",
            Self::CityCode => "city_code",
            Self::AirportName => "airport_name",
            Self::CityName => "city_name",
        }
    }

    /// Value of this field on a record.
    pub fn value(self, location: &Location) -> &str {
        match self {
            Self::AirportIataCode => &location.airport_iata_code,
            Self::CityCode => &location.city_code,
            Self::AirportName => &location.airport_name,
            Self::CityName => &location.city_name,
        }
    }
}

/// Sort a store applies before returning records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Pagerank descending, then city name ascending.
    RankThenCityName,
}

impl SortOrder {
    pub fn compare(self, a: &Location, b: &Location) -> Ordering {
        match self {
            Self::RankThenCityName => compare_rank(b.rank(), a.rank())
                .then_with(|| a.city_name.cmp(&b.city_name)),
        }
    }
}

/// Read-only query capability over the location dataset.
///
/// Implementations return owned records; callers are free to wrap or move
/// them without affecting what the store holds.
pub trait LocationStore: Send + Sync + std::fmt::Debug {
    /// Case-insensitive "starts with `prefix`" match on one field.
    fn query_prefix<'a>(
        &'a self,
        field: PrefixField,
        prefix: &'a str,
        sort: Option<SortOrder>,
    ) -> BoxFuture<'a, StoreResult>;

    /// Records of the given type whose `city_code` equals `city_code` exactly.
    fn query_exact<'a>(
        &'a self,
        kind: LocationType,
        city_code: &'a str,
        sort: Option<SortOrder>,
    ) -> BoxFuture<'a, StoreResult>;

    /// Records matching `prefix` on any [`PrefixField`], one row per
    /// `(airport_iata_code, type)` holding the first descriptive values seen,
    /// sorted by city name ascending.
    fn query_grouped<'a>(&'a self, prefix: &'a str) -> BoxFuture<'a, StoreResult>;
}
