use serde::{Deserialize, Serialize};

/// Type of content in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Movie,
    TvShow,
}

/// One catalog entry: a movie or TV show carried by a streaming platform
///
/// Display metadata is passed through to the client unchanged; only `title`
/// participates in lookup and the row position ties the item to its feature
/// vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Name of the movie or TV show, the human-facing lookup key
    pub title: String,
    /// Streaming platform carrying the item (e.g. "Netflix", "Hulu")
    pub platform: String,
    /// Type of content (movie or TV show)
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub description: String,
    pub release_year: i32,
    /// Runtime for movies, season count for shows (e.g. "148 min")
    pub duration: String,
    /// Comma-separated genre list (e.g. "Dramas, Thrillers")
    pub listed_in: String,
}

impl CatalogItem {
    /// First genre in the comma-separated `listed_in` list
    pub fn main_genre(&self) -> &str {
        self.listed_in.split(',').next().unwrap_or_default().trim()
    }
}

/// A ranked recommendation row returned to the client
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub platform: String,
    pub description: String,
    pub release_year: i32,
    pub duration: String,
    pub listed_in: String,
    /// Similarity to the query item's feature vector
    pub score: f32,
}

impl Recommendation {
    /// Attaches a similarity score to an item's display fields
    pub fn from_item(item: &CatalogItem, score: f32) -> Self {
        Self {
            title: item.title.clone(),
            platform: item.platform.clone(),
            description: item.description.clone(),
            release_year: item.release_year,
            duration: item.duration.clone(),
            listed_in: item.listed_in.clone(),
            score,
        }
    }
}
