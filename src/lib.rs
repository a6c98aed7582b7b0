//! Content-based recommendation service for a multi-platform streaming
//! catalog.
//!
//! A prebuilt artifact (catalog table + sparse TF-IDF matrix) is loaded once
//! at startup into an immutable [`store::FeatureStore`]; per query, the
//! [`services::similarity::FlatRanker`] scores every row against the chosen
//! title's row and the facade in [`services::recommendations`] returns the
//! top-k rows with display fields attached.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;
