use serde::Serialize;
use std::sync::Arc;

use super::CatalogEntry;

/// Frequency of a single genre across the favorites
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreStat {
    pub genre: String,
    pub count: usize,
    /// Share of all genre occurrences, rounded to a whole percent
    pub percentage: u32,
}

/// Ranked genre frequency table, most frequent first
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct GenreDistribution {
    pub genres: Vec<GenreStat>,
    /// Sum of genre occurrences over all favorites
    pub total: usize,
}

impl GenreDistribution {
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn top_genre(&self) -> Option<&str> {
        self.genres.first().map(|g| g.genre.as_str())
    }

    /// The first `n` genres in rank order
    pub fn top(&self, n: usize) -> impl Iterator<Item = &str> {
        self.genres.iter().take(n).map(|g| g.genre.as_str())
    }

    /// Raw occurrence count for a genre, if any favorite carries it
    pub fn count_of(&self, genre: &str) -> Option<usize> {
        self.genres
            .iter()
            .find(|g| g.genre == genre)
            .map(|g| g.count)
    }
}

/// A catalog entry ranked against the user's genre preferences
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecommendation {
    #[serde(flatten)]
    pub entry: Arc<CatalogEntry>,
    pub score: f64,
    /// Genres of the entry that also appear among the favorites, in entry order
    pub matched_genres: Vec<String>,
}

/// "Because you like X, try Y" suggestion across categories
#[derive(Debug, Clone, Serialize)]
pub struct CrossRecommendation {
    #[serde(flatten)]
    pub entry: Arc<CatalogEntry>,
    pub shared_with: Arc<CatalogEntry>,
    pub shared_genres: Vec<String>,
    pub overlap: usize,
}

/// Descriptive label for the user's dominant taste
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ProfileLabel {
    pub label: &'static str,
    pub icon: &'static str,
}

/// Every derived view of a session, recomputed in one pass
#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    pub favorites_count: usize,
    pub genres: GenreDistribution,
    pub top_genre: Option<String>,
    pub profile_label: Option<ProfileLabel>,
    pub recommendations: Vec<ScoredRecommendation>,
    pub cross_recommendations: Vec<CrossRecommendation>,
}
