//! Similarity ranking over the feature matrix
//!
//! The ranker is the only piece with a real algorithmic contract: score every
//! row against the query row, sort, exclude the query, keep the top `k`.
//! It sits behind a trait so an approximate nearest-neighbor index can be
//! swapped in later without touching callers.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::store::SparseMatrix;

/// A scored candidate row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub score: f32,
}

/// Ranks catalog rows by similarity to a query row
///
/// Implementations return at most `k` hits sorted by score descending, never
/// including `query` itself. Ties keep catalog order so repeated identical
/// queries return identical results.
pub trait SimilarityRanker: Send + Sync {
    fn rank(&self, query: usize, k: usize) -> AppResult<Vec<Hit>>;
}

/// Exhaustive dot-product ranker over the full matrix
///
/// Exact and stateless: O(rows · nonzeros) per call with nothing cached
/// across calls. Rows are unit-length, so the dot product is their cosine
/// similarity.
pub struct FlatRanker {
    matrix: Arc<SparseMatrix>,
}

impl FlatRanker {
    pub fn new(matrix: Arc<SparseMatrix>) -> Self {
        Self { matrix }
    }
}

impl SimilarityRanker for FlatRanker {
    fn rank(&self, query: usize, k: usize) -> AppResult<Vec<Hit>> {
        let n = self.matrix.rows();
        if n == 0 {
            return Err(AppError::EmptyCatalog);
        }
        if query >= n {
            return Err(AppError::InvalidIndex {
                index: query,
                len: n,
            });
        }

        let mut hits: Vec<Hit> = (0..n)
            .map(|j| Hit {
                index: j,
                score: self.matrix.dot(query, j),
            })
            .collect();

        // Stable sort: tied scores keep catalog order.
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Exclude the query by index, not by position: another row can tie
        // the self-similarity score and sort ahead of it.
        hits.retain(|h| h.index != query);
        hits.truncate(k);
        Ok(hits)
    }
}
