//! Type-ahead location lookup.
//!
//! The primary pipeline turns a partial query into a ranked list of airports
//! and metropolitan areas:
//!
//! 1. four prefix strategies run concurrently, each tagging its hits with a
//!    weight ([`strategy`]),
//! 2. hits are ranked by pagerank, deduplicated and cut to a small candidate
//!    set ([`ranking`]),
//! 3. candidates are expanded into their metropolitan groups and
//!    deduplicated again ([`expand`]).
//!
//! [`LookupEngine::lookup_aggregate`] is a separate, flatter mode: one grouped
//! store query, no weighting, ranking or expansion.

pub(crate) mod expand;
pub mod ranking;
pub mod strategy;

pub use ranking::{Comparator, DISPLAY_ORDER, chain, dedupe, sort_for_display};
pub use strategy::Strategy;

use crate::config::LookupConfig;
use crate::error::LookupError;
use crate::store::LocationStore;
use crate::types::{Location, LookupHit};
use std::sync::Arc;

/// Lookup engine over an injected location store.
///
/// Cheap to clone; clones share the store.
#[derive(Debug, Clone)]
pub struct LookupEngine {
    store: Arc<dyn LocationStore>,
    config: LookupConfig,
}

impl LookupEngine {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self::with_config(store, LookupConfig::default())
    }

    pub fn with_config(store: Arc<dyn LocationStore>, config: LookupConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Whether `query` is long enough to reach the store.
    pub fn is_searchable(&self, query: &str) -> bool {
        strategy::is_searchable(query, self.config.min_query_length)
    }

    /// Resolve a partial query into ranked, metro-expanded locations.
    ///
    /// Returns an empty list without touching the store when the query is
    /// shorter than the configured minimum. Any store failure fails the
    /// whole call.
    pub async fn lookup(&self, query: &str) -> Result<Vec<LookupHit>, LookupError> {
        if !self.is_searchable(query) {
            return Ok(vec![]);
        }

        let candidates = self.candidates(query).await?;
        let results = expand::expand_candidates(self.store.as_ref(), candidates).await?;

        tracing::debug!("lookup({}) ==> {} results", query, results.len());
        Ok(results)
    }

    /// The ranked candidate set that feeds metropolitan expansion.
    ///
    /// At most `max_candidates` entries, unique by `(airport_iata_code, type)`.
    pub async fn candidates(&self, query: &str) -> Result<Vec<LookupHit>, LookupError> {
        if !self.is_searchable(query) {
            return Ok(vec![]);
        }

        let hits = strategy::run_strategies(self.store.as_ref(), query, &self.config).await?;
        let total = hits.len();
        let candidates = ranking::rank_candidates(hits, self.config.max_candidates);

        tracing::debug!(
            "lookup({}) ranked {} strategy hits into {} candidates",
            query,
            total,
            candidates.len()
        );
        Ok(candidates)
    }

    /// One row per `(airport_iata_code, type)` matching the prefix on any
    /// field, sorted by city name.
    pub async fn lookup_aggregate(&self, query: &str) -> Result<Vec<Location>, LookupError> {
        if !self.is_searchable(query) {
            return Ok(vec![]);
        }

        let rows = self.store.query_grouped(query).await?;
        tracing::debug!("lookup_aggregate({}) ==> {} rows", query, rows.len());
        Ok(rows)
    }
}
