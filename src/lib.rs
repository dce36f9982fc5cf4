pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use catalog::Catalog;
pub use services::{FavoritesSet, RecommendationSession};
