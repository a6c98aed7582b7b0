use std::sync::Arc;

use crate::services::similarity::{FlatRanker, SimilarityRanker};
use crate::store::FeatureStore;

/// Shared application state
///
/// The store is immutable after load, so it is shared without locking and
/// every handler invocation reads the same snapshot.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FeatureStore>,
    pub ranker: Arc<dyn SimilarityRanker>,
    pub default_top_k: usize,
}

impl AppState {
    /// Wraps a loaded store with the exact flat ranker
    pub fn new(store: FeatureStore, default_top_k: usize) -> Self {
        let store = Arc::new(store);
        let ranker = Arc::new(FlatRanker::new(store.matrix.clone()));
        Self {
            store,
            ranker,
            default_top_k,
        }
    }
}
