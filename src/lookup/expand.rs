//! Metropolitan-area expansion of ranked candidates.

use super::ranking::dedupe;
use crate::error::StoreError;
use crate::store::{LocationStore, SortOrder};
use crate::types::{Location, LocationType, LookupHit};
use futures::future::try_join_all;

/// Expand every candidate into its output block and merge the blocks.
///
/// Blocks are fetched concurrently, but `try_join_all` yields them in
/// candidate order, so each block lands where its seed candidate ranked.
/// The merged list is deduplicated again and is not truncated.
pub(crate) async fn expand_candidates(
    store: &dyn LocationStore,
    candidates: Vec<LookupHit>,
) -> Result<Vec<LookupHit>, StoreError> {
    let blocks = try_join_all(
        candidates
            .into_iter()
            .map(|candidate| expand_candidate(store, candidate)),
    )
    .await?;

    Ok(dedupe(blocks.into_iter().flatten().collect()))
}

/// Output block for a single candidate.
async fn expand_candidate(
    store: &dyn LocationStore,
    candidate: LookupHit,
) -> Result<Vec<LookupHit>, StoreError> {
    match candidate.location.kind {
        LocationType::Metropolitan => {
            let airports = airports_of_city(store, &candidate.location.city_code).await?;
            let mut block = Vec::with_capacity(airports.len() + 1);
            block.push(candidate);
            block.extend(airports);
            Ok(block)
        }
        LocationType::Airport if candidate.location.belongs_to_metropolitan => {
            let Some(metro) = metropolitan_area(store, &candidate.location.city_code).await? else {
                tracing::warn!(
                    "Airport {} belongs to a metropolitan area but none exists for city {}",
                    candidate.location.airport_iata_code,
                    candidate.location.city_code
                );
                return Ok(vec![]);
            };
            let airports = airports_of_city(store, &metro.city_code).await?;
            let mut block = Vec::with_capacity(airports.len() + 1);
            block.push(LookupHit::unweighted(metro));
            block.extend(airports);
            Ok(block)
        }
        LocationType::Airport => Ok(vec![candidate]),
    }
}

/// The metropolitan record for a city code, if any.
async fn metropolitan_area(
    store: &dyn LocationStore,
    city_code: &str,
) -> Result<Option<Location>, StoreError> {
    let records = store
        .query_exact(LocationType::Metropolitan, city_code, None)
        .await?;
    Ok(records.into_iter().next())
}

/// Every airport sharing a city code, best ranked first.
async fn airports_of_city(
    store: &dyn LocationStore,
    city_code: &str,
) -> Result<Vec<LookupHit>, StoreError> {
    let records = store
        .query_exact(
            LocationType::Airport,
            city_code,
            Some(SortOrder::RankThenCityName),
        )
        .await?;
    tracing::debug!("city {} has {} airports", city_code, records.len());
    Ok(records.into_iter().map(LookupHit::unweighted).collect())
}
