pub mod cross_recommendations;
pub mod favorites;
pub mod genres;
pub mod profile_label;
pub mod profiles;
pub mod recommendations;
pub mod search;
pub mod session;

pub use favorites::FavoritesSet;
pub use session::RecommendationSession;
