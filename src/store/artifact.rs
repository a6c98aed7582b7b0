//! Loading the prebuilt feature artifacts
//!
//! The external feature builder exports two JSON files: the catalog table and
//! the sparse TF-IDF matrix. Both are read once at startup and assembled into
//! an immutable [`FeatureStore`]; inconsistencies fail fast here rather than
//! surfacing per query.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::CatalogItem;

use super::catalog::Catalog;
use super::matrix::{SparseMatrix, SparseRow};

/// On-disk layout of the matrix artifact
#[derive(Debug, Deserialize)]
struct MatrixArtifact {
    dim: usize,
    rows: Vec<SparseRow>,
}

/// The immutable in-memory store assembled from the feature builder's artifacts
///
/// Shared read-only across request handlers for the process lifetime; the
/// matrix is held behind an `Arc` so the ranker can keep its own handle.
#[derive(Debug)]
pub struct FeatureStore {
    pub catalog: Catalog,
    pub matrix: Arc<SparseMatrix>,
}

impl FeatureStore {
    /// Assembles a store from already-parsed parts, validating consistency
    pub fn from_parts(
        items: Vec<CatalogItem>,
        dim: usize,
        rows: Vec<SparseRow>,
    ) -> AppResult<Self> {
        if rows.len() != items.len() {
            return Err(AppError::CorruptArtifact(format!(
                "feature matrix has {} rows but catalog has {} items",
                rows.len(),
                items.len()
            )));
        }

        let mut matrix = SparseMatrix::new(dim);
        for (i, row) in rows.iter().enumerate() {
            if row.indices.len() != row.values.len() {
                return Err(AppError::CorruptArtifact(format!(
                    "row {i}: {} indices but {} values",
                    row.indices.len(),
                    row.values.len()
                )));
            }
            if !row.indices.windows(2).all(|w| w[0] < w[1]) {
                return Err(AppError::CorruptArtifact(format!(
                    "row {i}: indices not strictly increasing"
                )));
            }
            if row.indices.last().is_some_and(|&ix| ix as usize >= dim) {
                return Err(AppError::CorruptArtifact(format!(
                    "row {i}: index out of vocabulary dimension {dim}"
                )));
            }
            matrix.push_row(&row.indices, &row.values);
        }

        Ok(Self {
            catalog: Catalog::new(items),
            matrix: Arc::new(matrix),
        })
    }

    /// Loads the catalog and feature matrix artifacts from disk
    pub fn load(catalog_path: &Path, matrix_path: &Path) -> AppResult<Self> {
        let items: Vec<CatalogItem> =
            serde_json::from_reader(BufReader::new(File::open(catalog_path)?))?;
        let artifact: MatrixArtifact =
            serde_json::from_reader(BufReader::new(File::open(matrix_path)?))?;
        info!(
            items = items.len(),
            dim = artifact.dim,
            "loaded feature artifacts"
        );
        Self::from_parts(items, artifact.dim, artifact.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentType;

    fn item(title: &str) -> CatalogItem {
        CatalogItem {
            title: title.to_string(),
            platform: "Netflix".to_string(),
            content_type: ContentType::Movie,
            description: String::new(),
            release_year: 2021,
            duration: "100 min".to_string(),
            listed_in: "Dramas".to_string(),
        }
    }

    fn row(indices: Vec<u32>, values: Vec<f32>) -> SparseRow {
        SparseRow { indices, values }
    }

    #[test]
    fn test_from_parts_builds_store() {
        let store = FeatureStore::from_parts(
            vec![item("A"), item("B")],
            3,
            vec![row(vec![0], vec![1.0]), row(vec![1, 2], vec![0.6, 0.8])],
        )
        .unwrap();
        assert_eq!(store.catalog.len(), 2);
        assert_eq!(store.matrix.rows(), 2);
        assert_eq!(store.matrix.dim(), 3);
    }

    #[test]
    fn test_row_count_mismatch_is_corrupt() {
        let err = FeatureStore::from_parts(
            vec![item("A"), item("B"), item("C")],
            3,
            vec![row(vec![0], vec![1.0]), row(vec![1], vec![1.0])],
        )
        .unwrap_err();
        assert!(matches!(err, AppError::CorruptArtifact(_)));
    }

    #[test]
    fn test_index_value_skew_is_corrupt() {
        let err = FeatureStore::from_parts(
            vec![item("A")],
            3,
            vec![row(vec![0, 1], vec![1.0])],
        )
        .unwrap_err();
        assert!(matches!(err, AppError::CorruptArtifact(_)));
    }

    #[test]
    fn test_unsorted_indices_are_corrupt() {
        let err = FeatureStore::from_parts(
            vec![item("A")],
            3,
            vec![row(vec![2, 0], vec![0.5, 0.5])],
        )
        .unwrap_err();
        assert!(matches!(err, AppError::CorruptArtifact(_)));
    }

    #[test]
    fn test_index_beyond_dim_is_corrupt() {
        let err = FeatureStore::from_parts(
            vec![item("A")],
            2,
            vec![row(vec![0, 5], vec![0.5, 0.5])],
        )
        .unwrap_err();
        assert!(matches!(err, AppError::CorruptArtifact(_)));
    }

    #[test]
    fn test_empty_catalog_loads() {
        let store = FeatureStore::from_parts(Vec::new(), 4, Vec::new()).unwrap();
        assert!(store.catalog.is_empty());
        assert_eq!(store.matrix.rows(), 0);
    }
}
