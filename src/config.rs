//! Lookup tuning: query gate, candidate bound, and strategy weights.
//!
//! Every field has a default, so an empty or partial TOML file is valid:
//!
//! ```toml
//! min_query_length = 3
//! max_candidates = 5
//!
//! [weights]
//! city_name = 10
//! airport_name = 20
//! city_code = 25
//! airport_code = 30
//! ```

use crate::error::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shortest query any strategy will send to the store.
pub const MIN_QUERY_LENGTH: usize = 3;

/// Number of ranked candidates kept before metropolitan expansion.
pub const MAX_CANDIDATES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupConfig {
    /// Queries shorter than this (in characters) return no results.
    pub min_query_length: usize,
    /// Candidates kept after ranking and before expansion.
    pub max_candidates: usize,
    pub weights: StrategyWeights,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            min_query_length: MIN_QUERY_LENGTH,
            max_candidates: MAX_CANDIDATES,
            weights: StrategyWeights::default(),
        }
    }
}

/// Fixed weight per search strategy; more specific matches weigh more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrategyWeights {
    pub city_name: u32,
    pub airport_name: u32,
    pub city_code: u32,
    /// Not attached to any hit: airport-code hits report `airport_name`.
    /// Kept so the full weight table can be read and configured.
    pub airport_code: u32,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            city_name: 10,
            airport_name: 20,
            city_code: 25,
            airport_code: 30,
        }
    }
}

impl LookupConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse lookup config")
    }

    /// Read a TOML config file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_toml_str(&content)
    }
}
