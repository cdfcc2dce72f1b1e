//! In-memory location store backed by a JSON dataset.

use super::{LocationStore, PrefixField, SortOrder, StoreResult};
use crate::error::StoreError;
use crate::types::{Location, LocationType};
use ahash::AHashSet;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::path::Path;
use std::sync::Arc;

/// A read-only set of location records held in memory.
///
/// Cloning is cheap: clones share the same record slice.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<[Location]>,
}

impl MemoryStore {
    pub fn new(records: Vec<Location>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Load a dataset file containing a JSON array of location records.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<Location> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("Loaded {} location records from {}", records.len(), path.display());
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Location] {
        &self.records
    }

    fn prefix_matches(
        &self,
        field: PrefixField,
        prefix: &str,
        sort: Option<SortOrder>,
    ) -> Vec<Location> {
        let needle = prefix.to_lowercase();
        let mut out: Vec<Location> = self
            .records
            .iter()
            .filter(|r| starts_with_folded(field.value(r), &needle))
            .cloned()
            .collect();
        if let Some(order) = sort {
            out.sort_by(|a, b| order.compare(a, b));
        }
        out
    }

    fn exact_matches(
        &self,
        kind: LocationType,
        city_code: &str,
        sort: Option<SortOrder>,
    ) -> Vec<Location> {
        let mut out: Vec<Location> = self
            .records
            .iter()
            .filter(|r| r.kind == kind && r.city_code == city_code)
            .cloned()
            .collect();
        if let Some(order) = sort {
            out.sort_by(|a, b| order.compare(a, b));
        }
        out
    }

    fn grouped_matches(&self, prefix: &str) -> Vec<Location> {
        let needle = prefix.to_lowercase();
        let mut seen: AHashSet<(&str, LocationType)> = AHashSet::new();
        let mut out = Vec::new();

        for record in self.records.iter() {
            let matched = PrefixField::ALL
                .iter()
                .any(|field| starts_with_folded(field.value(record), &needle));
            if !matched {
                continue;
            }
            let key = (record.airport_iata_code.as_str(), record.kind);
            if !seen.insert(key) {
                continue;
            }
            // Grouped rows only project the descriptive fields.
            out.push(Location {
                city_name: record.city_name.clone(),
                city_code: record.city_code.clone(),
                country_code: record.country_code.clone(),
                airport_name: record.airport_name.clone(),
                airport_iata_code: record.airport_iata_code.clone(),
                kind: record.kind,
                country_name: record.country_name.clone(),
                timezone: record.timezone.clone(),
                pagerank: 0.0,
                belongs_to_metropolitan: false,
            });
        }

        out.sort_by(|a, b| a.city_name.cmp(&b.city_name));
        out
    }
}

impl LocationStore for MemoryStore {
    fn query_prefix<'a>(
        &'a self,
        field: PrefixField,
        prefix: &'a str,
        sort: Option<SortOrder>,
    ) -> BoxFuture<'a, StoreResult> {
        async move { Ok(self.prefix_matches(field, prefix, sort)) }.boxed()
    }

    fn query_exact<'a>(
        &'a self,
        kind: LocationType,
        city_code: &'a str,
        sort: Option<SortOrder>,
    ) -> BoxFuture<'a, StoreResult> {
        async move { Ok(self.exact_matches(kind, city_code, sort)) }.boxed()
    }

    fn query_grouped<'a>(&'a self, prefix: &'a str) -> BoxFuture<'a, StoreResult> {
        async move { Ok(self.grouped_matches(prefix)) }.boxed()
    }
}

/// Case-insensitive prefix test; `needle` must already be lowercase.
fn starts_with_folded(value: &str, needle: &str) -> bool {
    value.to_lowercase().starts_with(needle)
}
