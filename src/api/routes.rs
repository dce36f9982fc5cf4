use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
}

/// Routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/catalog", get(handlers::get_catalog))
        // Sessions
        .route("/sessions", post(handlers::create_session))
        .route("/sessions/:session_id", delete(handlers::delete_session))
        .route(
            "/sessions/:session_id/favorites",
            get(handlers::get_favorites).post(handlers::add_favorite),
        )
        .route(
            "/sessions/:session_id/favorites/:title",
            delete(handlers::remove_favorite),
        )
        .route("/sessions/:session_id/search", get(handlers::search))
        // Derived views
        .route("/sessions/:session_id/genres", get(handlers::get_genres))
        .route(
            "/sessions/:session_id/recommendations",
            get(handlers::get_recommendations),
        )
        .route(
            "/sessions/:session_id/cross-recommendations",
            get(handlers::get_cross_recommendations),
        )
        .route(
            "/sessions/:session_id/profile-label",
            get(handlers::get_profile_label),
        )
        .route("/sessions/:session_id/insights", get(handlers::get_insights))
        // Persistence
        .route(
            "/sessions/:session_id/save/:profile_id",
            post(handlers::save_session),
        )
        .route(
            "/sessions/:session_id/load/:profile_id",
            post(handlers::load_session),
        )
        // Profiles
        .route(
            "/profiles",
            get(handlers::list_profiles).post(handlers::create_profile),
        )
        .route("/profiles/import", post(handlers::import_profile))
        .route(
            "/profiles/:profile_id",
            get(handlers::get_profile).delete(handlers::delete_profile),
        )
        .route("/profiles/:profile_id/theme", put(handlers::update_theme))
        .route("/profiles/:profile_id/avatar", put(handlers::update_avatar))
        .route("/profiles/:profile_id/export", get(handlers::export_profile))
}
