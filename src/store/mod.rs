pub mod artifact;
pub mod catalog;
pub mod matrix;

pub use artifact::FeatureStore;
pub use catalog::{Catalog, CatalogStats, GenreCount, PlatformCount, YearPlatformCount};
pub use matrix::{SparseMatrix, SparseRow};
