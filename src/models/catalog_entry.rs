use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Media category of a catalog entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Manga,
    Book,
    Tv,
    Movie,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Manga, Category::Book, Category::Tv, Category::Movie];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Manga => "manga",
            Category::Book => "book",
            Category::Tv => "tv",
            Category::Movie => "movie",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recommendable title in the catalog
///
/// Entries are immutable once loaded. The title is the identity of an entry
/// and is compared case-insensitively for lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    pub title: String,
    pub category: Category,
    pub year: i32,
    pub genres: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    /// Case-insensitive title comparison
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}
