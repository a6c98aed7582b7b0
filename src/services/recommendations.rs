use tracing::instrument;

use crate::error::{AppError, AppResult};
use crate::models::Recommendation;
use crate::services::similarity::SimilarityRanker;
use crate::store::FeatureStore;

/// Recommends catalog items similar to the given title
///
/// Resolves the title against the catalog, ranks every other row by feature
/// similarity, and attaches display fields and scores to the surviving top
/// `k` rows. Failures from either stage propagate unchanged: an unknown
/// title is `NotFound`, never an empty result.
#[instrument(skip(store, ranker))]
pub fn recommend(
    store: &FeatureStore,
    ranker: &dyn SimilarityRanker,
    title: &str,
    k: usize,
) -> AppResult<Vec<Recommendation>> {
    let query = store
        .catalog
        .resolve(title)
        .ok_or_else(|| AppError::NotFound(title.to_string()))?;

    let hits = ranker.rank(query, k)?;

    let mut results = Vec::with_capacity(hits.len());
    for hit in hits {
        let item = store.catalog.item(hit.index).ok_or(AppError::InvalidIndex {
            index: hit.index,
            len: store.catalog.len(),
        })?;
        results.push(Recommendation::from_item(item, hit.score));
    }
    Ok(results)
}
