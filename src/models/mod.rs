pub mod catalog_entry;
pub mod profile;
pub mod recommendation;

pub use catalog_entry::{CatalogEntry, Category};
pub use profile::{Profile, ProfileImport};
pub use recommendation::{
    CrossRecommendation, GenreDistribution, GenreStat, Insights, ProfileLabel,
    ScoredRecommendation,
};
