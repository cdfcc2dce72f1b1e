//! Shared test fixtures and stores for integration tests.
//!
//! # Available Fixtures
//!
//! - `nyc_store`: the New York metropolitan group plus a standalone airport
//! - `nyc_engine`: a [`LookupEngine`] over `nyc_store`
//! - `bundled_store`: the sample dataset shipped in `data/airports.json`
//!
//! # Test Stores
//!
//! - [`CountingStore`] wraps a store and counts every query it receives
//! - [`FailingStore`] answers normally except for the queries it is told to refuse

use airport_lookup::store::StoreResult;
use airport_lookup::{
    Location, LocationStore, LocationType, LookupEngine, MemoryStore, PrefixField, SortOrder,
    StoreError,
};
use futures::FutureExt;
use futures::future::BoxFuture;
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Returns the project root directory (where Cargo.toml lives).
#[allow(dead_code)] // Used across different integration test crates
pub(crate) fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Builds a location record with the fields lookups care about.
#[allow(dead_code)]
pub(crate) fn location(
    iata: &str,
    city_code: &str,
    kind: LocationType,
    in_metro: bool,
    pagerank: f64,
) -> Location {
    Location {
        city_name: "New York".to_string(),
        city_code: city_code.to_string(),
        country_code: "US".to_string(),
        airport_name: format!("{iata} Airport"),
        airport_iata_code: iata.to_string(),
        kind,
        country_name: "United States".to_string(),
        timezone: None,
        pagerank,
        belongs_to_metropolitan: in_metro,
    }
}

/// EWR, SWF, LGA, JFK in the NYC metro, the NYC metro record itself, and NYS,
/// a standalone airport that shares the city code.
#[allow(dead_code)]
pub(crate) fn nyc_records() -> Vec<Location> {
    vec![
        location("EWR", "NYC", LocationType::Airport, true, 4.0),
        location("SWF", "NYC", LocationType::Airport, true, 1.0),
        location("LGA", "NYC", LocationType::Airport, true, 3.0),
        Location {
            airport_name: "John F Kennedy Intl".to_string(),
            ..location("JFK", "NYC", LocationType::Airport, true, 5.0)
        },
        Location {
            airport_name: "Metropolitan Area".to_string(),
            ..location("NYC", "NYC", LocationType::Metropolitan, false, 2.0)
        },
        Location {
            airport_name: "Skyports SPB".to_string(),
            ..location("NYS", "NYC", LocationType::Airport, false, 0.0)
        },
    ]
}

#[fixture]
pub(crate) fn nyc_store() -> MemoryStore {
    MemoryStore::new(nyc_records())
}

#[fixture]
pub(crate) fn nyc_engine(nyc_store: MemoryStore) -> LookupEngine {
    LookupEngine::new(Arc::new(nyc_store))
}

#[allow(dead_code)]
#[fixture]
pub(crate) fn bundled_store() -> MemoryStore {
    let path = project_root().join("data").join("airports.json");
    let bytes = std::fs::read(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    let records: Vec<Location> = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
    MemoryStore::new(records)
}

/// IATA codes of a result list, in order.
#[allow(dead_code)]
pub(crate) fn iatas<'a, I>(locations: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Location>,
{
    locations
        .into_iter()
        .map(|l| l.airport_iata_code.clone())
        .collect()
}

/// A store wrapper that counts queries.
#[allow(dead_code)]
#[derive(Debug)]
pub(crate) struct CountingStore {
    inner: MemoryStore,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl CountingStore {
    pub(crate) fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LocationStore for CountingStore {
    fn query_prefix<'a>(
        &'a self,
        field: PrefixField,
        prefix: &'a str,
        sort: Option<SortOrder>,
    ) -> BoxFuture<'a, StoreResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.query_prefix(field, prefix, sort)
    }

    fn query_exact<'a>(
        &'a self,
        kind: LocationType,
        city_code: &'a str,
        sort: Option<SortOrder>,
    ) -> BoxFuture<'a, StoreResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.query_exact(kind, city_code, sort)
    }

    fn query_grouped<'a>(&'a self, prefix: &'a str) -> BoxFuture<'a, StoreResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.query_grouped(prefix)
    }
}

/// Which queries a [`FailingStore`] refuses.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    /// Prefix queries on one field.
    Field(PrefixField),
    /// Exact city-code queries, used only by metropolitan expansion.
    Exact,
    /// Every query.
    All,
}

/// A store that answers from an inner [`MemoryStore`] but refuses some queries.
#[derive(Debug)]
pub(crate) struct FailingStore {
    inner: MemoryStore,
    failure: Failure,
}

#[allow(dead_code)]
impl FailingStore {
    pub(crate) fn on_field(inner: MemoryStore, field: PrefixField) -> Self {
        Self {
            inner,
            failure: Failure::Field(field),
        }
    }

    /// Prefix queries succeed, so lookups get as far as expansion.
    pub(crate) fn on_exact(inner: MemoryStore) -> Self {
        Self {
            inner,
            failure: Failure::Exact,
        }
    }

    pub(crate) fn always(inner: MemoryStore) -> Self {
        Self {
            inner,
            failure: Failure::All,
        }
    }

    fn unavailable(what: &str) -> BoxFuture<'static, StoreResult> {
        let message = format!("{what} query refused");
        async move { Err(StoreError::Unavailable(message)) }.boxed()
    }
}

impl LocationStore for FailingStore {
    fn query_prefix<'a>(
        &'a self,
        field: PrefixField,
        prefix: &'a str,
        sort: Option<SortOrder>,
    ) -> BoxFuture<'a, StoreResult> {
        let refused = match self.failure {
            Failure::Field(failing) => failing == field,
            Failure::Exact => false,
            Failure::All => true,
        };
        if refused {
            return Self::unavailable(field.as_str());
        }
        self.inner.query_prefix(field, prefix, sort)
    }

    fn query_exact<'a>(
        &'a self,
        kind: LocationType,
        city_code: &'a str,
        sort: Option<SortOrder>,
    ) -> BoxFuture<'a, StoreResult> {
        if matches!(self.failure, Failure::All | Failure::Exact) {
            return Self::unavailable("exact");
        }
        self.inner.query_exact(kind, city_code, sort)
    }

    fn query_grouped<'a>(&'a self, prefix: &'a str) -> BoxFuture<'a, StoreResult> {
        if self.failure == Failure::All {
            return Self::unavailable("grouped");
        }
        self.inner.query_grouped(prefix)
    }
}

/// A temporary directory holding dataset and config files.
#[allow(dead_code)]
pub(crate) struct TempFiles {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl TempFiles {
    pub(crate) fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.root
    }

    /// Writes a file and returns its full path.
    pub(crate) fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(name);
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", name, e));
        full_path
    }
}
