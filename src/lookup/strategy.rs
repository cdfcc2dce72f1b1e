//! The four prefix-search strategies and their concurrent fan-out.

use crate::config::{LookupConfig, StrategyWeights};
use crate::error::StoreError;
use crate::store::{LocationStore, PrefixField, SortOrder};
use crate::types::LookupHit;
use futures::future::try_join_all;

/// A single prefix-search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    AirportCode,
    CityCode,
    AirportName,
    CityName,
}

impl Strategy {
    /// Declaration order; strategy outputs are concatenated in this order.
    pub const ORDER: [Self; 4] = [
        Self::AirportCode,
        Self::CityCode,
        Self::AirportName,
        Self::CityName,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::AirportCode => "airport_code",
            Self::CityCode => "city_code",
            Self::AirportName => "airport_name",
            Self::CityName => "city_name",
        }
    }

    pub const fn field(self) -> PrefixField {
        match self {
            Self::AirportCode => PrefixField::AirportIataCode,
            Self::CityCode => PrefixField::CityCode,
            Self::AirportName => PrefixField::AirportName,
            Self::CityName => PrefixField::CityName,
        }
    }

    /// The weight configured for this strategy.
    pub const fn weight(self, weights: &StrategyWeights) -> u32 {
        match self {
            Self::AirportCode => weights.airport_code,
            Self::CityCode => weights.city_code,
            Self::AirportName => weights.airport_name,
            Self::CityName => weights.city_name,
        }
    }

    /// The weight actually attached to this strategy's hits.
    ///
    /// Airport-code hits are decorated with the airport-name weight, not the
    /// airport-code weight. Ranking ignores weights, so this only shows up in
    /// the returned hits and in display ordering.
    pub const fn hit_weight(self, weights: &StrategyWeights) -> u32 {
        match self {
            Self::AirportCode => weights.airport_name,
            other => other.weight(weights),
        }
    }
}

/// Whether `query` is long enough to be sent to the store.
pub(crate) fn is_searchable(query: &str, min_len: usize) -> bool {
    query.chars().count() >= min_len
}

/// Run one strategy, returning weight-decorated copies of its hits.
pub(crate) async fn run_strategy(
    store: &dyn LocationStore,
    strategy: Strategy,
    query: &str,
    config: &LookupConfig,
) -> Result<Vec<LookupHit>, StoreError> {
    if !is_searchable(query, config.min_query_length) {
        return Ok(vec![]);
    }

    let records = store
        .query_prefix(strategy.field(), query, Some(SortOrder::RankThenCityName))
        .await?;

    let weight = strategy.hit_weight(&config.weights);
    let hits: Vec<LookupHit> = records
        .into_iter()
        .map(|record| LookupHit::weighted(record, weight))
        .collect();

    tracing::debug!(
        "strategy {}({}) ==> {} hits",
        strategy.name(),
        query,
        hits.len()
    );
    for hit in &hits {
        tracing::trace!(
            "\t{} [iata={} city={} type={}] [W:{:?}] [RANK:{}]",
            hit.location.airport_name,
            hit.location.airport_iata_code,
            hit.location.city_code,
            hit.location.kind,
            hit.weight,
            hit.location.rank()
        );
    }

    Ok(hits)
}

/// Run all four strategies concurrently.
///
/// Waits for every strategy; the first failure fails the whole call. Output
/// is the concatenation of each strategy's hits in [`Strategy::ORDER`].
pub(crate) async fn run_strategies(
    store: &dyn LocationStore,
    query: &str,
    config: &LookupConfig,
) -> Result<Vec<LookupHit>, StoreError> {
    let per_strategy = try_join_all(
        Strategy::ORDER
            .into_iter()
            .map(|strategy| run_strategy(store, strategy, query, config)),
    )
    .await?;

    Ok(per_strategy.concat())
}
