use std::collections::HashMap;

use serde::Serialize;

use crate::models::{CatalogItem, ContentType};

/// Read-only catalog with a title index built once at load time
///
/// The title index maps each title to its row position; duplicate titles
/// resolve to the first occurrence so repeated lookups are deterministic.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    title_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut title_index = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            // first occurrence wins for duplicate titles
            title_index.entry(item.title.clone()).or_insert(idx);
        }
        Self { items, title_index }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolves a title to its row index, exact match only
    pub fn resolve(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    pub fn item(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    /// All titles in catalog order, duplicates included
    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|item| item.title.as_str())
    }

    /// Summary aggregates consumed by the market-analysis dashboard
    pub fn stats(&self) -> CatalogStats {
        let movies = self
            .items
            .iter()
            .filter(|i| i.content_type == ContentType::Movie)
            .count();

        let mut by_platform: HashMap<&str, usize> = HashMap::new();
        let mut by_genre: HashMap<&str, usize> = HashMap::new();
        let mut by_year: HashMap<(i32, &str), usize> = HashMap::new();
        for item in &self.items {
            *by_platform.entry(item.platform.as_str()).or_default() += 1;
            *by_genre.entry(item.main_genre()).or_default() += 1;
            if item.release_year >= YEARLY_FROM {
                *by_year
                    .entry((item.release_year, item.platform.as_str()))
                    .or_default() += 1;
            }
        }

        let mut platforms: Vec<PlatformCount> = by_platform
            .into_iter()
            .map(|(platform, count)| PlatformCount {
                platform: platform.to_string(),
                count,
            })
            .collect();
        platforms.sort_by(|a, b| b.count.cmp(&a.count).then(a.platform.cmp(&b.platform)));

        let mut top_genres: Vec<GenreCount> = by_genre
            .into_iter()
            .map(|(genre, count)| GenreCount {
                genre: genre.to_string(),
                count,
            })
            .collect();
        top_genres.sort_by(|a, b| b.count.cmp(&a.count).then(a.genre.cmp(&b.genre)));
        top_genres.truncate(TOP_GENRES);

        let mut yearly: Vec<YearPlatformCount> = by_year
            .into_iter()
            .map(|((year, platform), count)| YearPlatformCount {
                year,
                platform: platform.to_string(),
                count,
            })
            .collect();
        yearly.sort_by(|a, b| a.year.cmp(&b.year).then(a.platform.cmp(&b.platform)));

        CatalogStats {
            total: self.items.len(),
            movies,
            tv_shows: self.items.len() - movies,
            platforms,
            top_genres,
            yearly,
        }
    }
}

/// Genres reported by `Catalog::stats`
const TOP_GENRES: usize = 20;

/// Oldest release year included in the yearly counts
const YEARLY_FROM: i32 = 2010;

/// Catalog summary for the dashboard's KPI cards and charts
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogStats {
    pub total: usize,
    pub movies: usize,
    pub tv_shows: usize,
    /// Per-platform item counts, largest first
    pub platforms: Vec<PlatformCount>,
    /// Most common first-listed genres, largest first
    pub top_genres: Vec<GenreCount>,
    /// Per-platform item counts by release year (2010 onward), sorted by
    /// year then platform
    pub yearly: Vec<YearPlatformCount>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlatformCount {
    pub platform: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearPlatformCount {
    pub year: i32,
    pub platform: String,
    pub count: usize,
}
