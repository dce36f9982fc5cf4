use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    catalog::Catalog,
    models::{CatalogEntry, Category, ScoredRecommendation},
    services::{favorites::FavoritesSet, genres},
};

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 12;

const GENRE_MATCH_WEIGHT: f64 = 2.0;
const THREE_MATCH_BONUS: f64 = 5.0;
const FOUR_MATCH_BONUS: f64 = 8.0;
const NEW_CATEGORY_BONUS: f64 = 3.0;

/// Ranks non-favorited catalog entries against the favorites' genre mix
///
/// Each matching genre adds twice its count among favorites. Entries matching
/// three or more genres get a bonus (a larger one from four), and entries from
/// a category with no favorites get a small exploration bonus. The total is
/// divided by the square root of the entry's genre count so heavily tagged
/// entries don't dominate.
///
/// Entries without genres carry no taste signal and are skipped. Ties keep
/// catalog order.
pub fn recommend(
    catalog: &Catalog,
    favorites: &FavoritesSet,
    limit: usize,
) -> Vec<ScoredRecommendation> {
    if favorites.is_empty() {
        return Vec::new();
    }

    let distribution = genres::analyze(favorites);
    let genre_weights: HashMap<&str, usize> = distribution
        .genres
        .iter()
        .map(|g| (g.genre.as_str(), g.count))
        .collect();

    let mut category_counts: HashMap<Category, usize> = HashMap::new();
    for favorite in favorites.iter() {
        *category_counts.entry(favorite.category).or_insert(0) += 1;
    }

    let mut scored: Vec<ScoredRecommendation> = catalog
        .entries()
        .iter()
        .filter(|entry| !favorites.contains_exact(&entry.title))
        .filter_map(|entry| score_entry(entry, &genre_weights, &category_counts))
        .filter(|rec| rec.score > 0.0)
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);

    tracing::debug!(
        favorites = favorites.len(),
        returned = scored.len(),
        "Computed recommendations"
    );

    scored
}

/// Ranks a pool of `pool` recommendations, then keeps the first `limit` in `category`
///
/// The filter applies to the ranked pool rather than the whole catalog, so a
/// category may come back short even when the catalog holds more matches.
pub fn recommend_in_category(
    catalog: &Catalog,
    favorites: &FavoritesSet,
    category: Category,
    pool: usize,
    limit: usize,
) -> Vec<ScoredRecommendation> {
    recommend(catalog, favorites, pool)
        .into_iter()
        .filter(|rec| rec.entry.category == category)
        .take(limit)
        .collect()
}

fn score_entry(
    entry: &Arc<CatalogEntry>,
    genre_weights: &HashMap<&str, usize>,
    category_counts: &HashMap<Category, usize>,
) -> Option<ScoredRecommendation> {
    if entry.genres.is_empty() {
        return None;
    }

    let matched_genres: Vec<String> = entry
        .genres
        .iter()
        .filter(|genre| genre_weights.contains_key(genre.as_str()))
        .cloned()
        .collect();

    let mut score: f64 = matched_genres
        .iter()
        .map(|genre| genre_weights[genre.as_str()] as f64 * GENRE_MATCH_WEIGHT)
        .sum();

    if matched_genres.len() >= 3 {
        score += THREE_MATCH_BONUS;
    }
    if matched_genres.len() >= 4 {
        score += FOUR_MATCH_BONUS;
    }

    if !category_counts.contains_key(&entry.category) {
        score += NEW_CATEGORY_BONUS;
    }

    score /= (entry.genres.len() as f64).sqrt();

    Some(ScoredRecommendation {
        entry: Arc::clone(entry),
        score,
        matched_genres,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::*;

    fn titles(recs: &[ScoredRecommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.entry.title.as_str()).collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_no_favorites_no_recommendations() {
        let catalog = three_title_catalog();
        assert!(recommend(&catalog, &FavoritesSet::new(), 12).is_empty());
    }

    #[test]
    fn test_shared_genre_ranks_above_unrelated() {
        let catalog = three_title_catalog();
        let favorites = FavoritesSet::restore(&catalog, &["A"]);

        let recs = recommend(&catalog, &favorites, 12);
        assert_eq!(titles(&recs), vec!["B", "C"]);
        // B: action weight 1 * 2 + new category 3
        assert_close(recs[0].score, 5.0);
        assert_eq!(recs[0].matched_genres, vec!["action"]);
        // C: only the new category bonus
        assert_close(recs[1].score, 3.0);
        assert!(recs[1].matched_genres.is_empty());
    }

    #[test]
    fn test_favorites_are_never_recommended() {
        let catalog = three_title_catalog();
        let favorites = FavoritesSet::restore(&catalog, &["A", "C"]);

        let recs = recommend(&catalog, &favorites, 12);
        assert_eq!(titles(&recs), vec!["B"]);
    }

    #[test]
    fn test_zero_score_entries_are_dropped() {
        let catalog = catalog(vec![
            entry("Fav", Category::Movie, &["horror"]),
            entry("Same Category Unrelated", Category::Movie, &["comedy"]),
        ]);
        let favorites = FavoritesSet::restore(&catalog, &["Fav"]);

        assert!(recommend(&catalog, &favorites, 12).is_empty());
    }

    #[test]
    fn test_match_bonuses_and_normalization() {
        let catalog = catalog(vec![
            entry("Fav", Category::Book, &["a", "b", "c", "d"]),
            entry("Three", Category::Book, &["a", "b", "c", "x"]),
            entry("Four", Category::Book, &["a", "b", "c", "d"]),
        ]);
        let favorites = FavoritesSet::restore(&catalog, &["Fav"]);

        let recs = recommend(&catalog, &favorites, 12);
        assert_eq!(titles(&recs), vec!["Four", "Three"]);
        // 4 matches * 2 + 5 + 8, over sqrt(4)
        assert_close(recs[0].score, 21.0 / 2.0);
        // 3 matches * 2 + 5, over sqrt(4)
        assert_close(recs[1].score, 11.0 / 2.0);
    }

    #[test]
    fn test_weights_use_raw_counts() {
        let catalog = catalog(vec![
            entry("One", Category::Tv, &["drama", "crime"]),
            entry("Two", Category::Tv, &["drama"]),
            entry("Candidate", Category::Tv, &["drama"]),
        ]);
        let favorites = FavoritesSet::restore(&catalog, &["One", "Two"]);

        let recs = recommend(&catalog, &favorites, 12);
        assert_eq!(titles(&recs), vec!["Candidate"]);
        assert_close(recs[0].score, 4.0);
    }

    #[test]
    fn test_repeated_genre_counts_twice() {
        let catalog = catalog(vec![
            entry("Fav", Category::Manga, &["action"]),
            entry("Echo", Category::Manga, &["action", "action"]),
        ]);
        let favorites = FavoritesSet::restore(&catalog, &["Fav"]);

        let recs = recommend(&catalog, &favorites, 12);
        assert_eq!(recs[0].matched_genres, vec!["action", "action"]);
        assert_close(recs[0].score, 4.0 / 2f64.sqrt());
    }

    #[test]
    fn test_entries_without_genres_are_skipped() {
        let catalog = catalog(vec![
            entry("Fav", Category::Movie, &["action"]),
            entry("Untagged", Category::Book, &[]),
        ]);
        let favorites = FavoritesSet::restore(&catalog, &["Fav"]);

        assert!(recommend(&catalog, &favorites, 12).is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order_and_limit_applies() {
        let catalog = catalog(vec![
            entry("Fav", Category::Movie, &["action"]),
            entry("Zeta", Category::Movie, &["action"]),
            entry("Alpha", Category::Movie, &["action"]),
            entry("Mid", Category::Movie, &["action"]),
        ]);
        let favorites = FavoritesSet::restore(&catalog, &["Fav"]);

        let recs = recommend(&catalog, &favorites, 2);
        assert_eq!(titles(&recs), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_recommend_in_category_filters_the_pool() {
        let catalog = catalog(vec![
            entry("Fav", Category::Movie, &["action", "drama"]),
            entry("Strong Tv", Category::Tv, &["action", "drama"]),
            entry("Weak Book", Category::Book, &["drama", "x", "y", "z"]),
            entry("Movie", Category::Movie, &["action"]),
        ]);
        let favorites = FavoritesSet::restore(&catalog, &["Fav"]);

        let books = recommend_in_category(&catalog, &favorites, Category::Book, 20, 12);
        assert_eq!(titles(&books), vec!["Weak Book"]);

        // Pool of one only holds the top-ranked tv entry
        let books = recommend_in_category(&catalog, &favorites, Category::Book, 1, 12);
        assert!(books.is_empty());
    }
}
