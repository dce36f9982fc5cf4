use std::collections::HashMap;

use crate::{
    models::{GenreDistribution, GenreStat},
    services::favorites::FavoritesSet,
};

/// Aggregates genre frequency across favorites
///
/// Every genre tag counts, so an entry with N genres adds N to the total.
/// Genres with equal counts keep the order they were first seen in.
pub fn analyze(favorites: &FavoritesSet) -> GenreDistribution {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut total = 0;

    for favorite in favorites.iter() {
        for genre in &favorite.genres {
            match index.get(genre.as_str()) {
                Some(&idx) => counts[idx].1 += 1,
                None => {
                    index.insert(genre.as_str(), counts.len());
                    counts.push((genre.clone(), 1));
                }
            }
            total += 1;
        }
    }

    // Stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let genres = counts
        .into_iter()
        .map(|(genre, count)| GenreStat {
            genre,
            count,
            percentage: percentage(count, total),
        })
        .collect();

    GenreDistribution { genres, total }
}

/// Most frequent genre among the favorites
pub fn top_genre(favorites: &FavoritesSet) -> Option<String> {
    analyze(favorites).top_genre().map(str::to_string)
}

fn percentage(count: usize, total: usize) -> u32 {
    (count as f64 / total as f64 * 100.0).round() as u32
}
