use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        CatalogEntry, Category, CrossRecommendation, GenreDistribution, Insights, Profile,
        ProfileLabel, ScoredRecommendation,
    },
    services::{profile_label, profiles, recommendations},
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<Category>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub limit: Option<usize>,
    pub category: Option<Category>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct AddFavoriteResponse {
    /// The favorited entry, or null when unknown or already a favorite
    pub added: Option<Arc<CatalogEntry>>,
}

#[derive(Debug, Serialize)]
pub struct RemoveFavoriteResponse {
    pub removed: bool,
}

#[derive(Debug, Serialize)]
pub struct GenresResponse {
    #[serde(flatten)]
    pub distribution: GenreDistribution,
    pub top_genre: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateThemeRequest {
    pub theme: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAvatarRequest {
    pub avatar: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// List the catalog, optionally narrowed to one category
pub async fn get_catalog(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Json<Vec<Arc<CatalogEntry>>> {
    let entries = match query.category {
        Some(category) => state.catalog.by_category(category).cloned().collect(),
        None => state.catalog.entries().to_vec(),
    };
    Json(entries)
}

/// Start a new favorites session
pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionResponse>) {
    let session_id = state.create_session().await;
    (StatusCode::CREATED, Json(SessionResponse { session_id }))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.delete_session(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_favorites(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<CategoryQuery>,
) -> AppResult<Json<Vec<Arc<CatalogEntry>>>> {
    let favorites: Vec<Arc<CatalogEntry>> = state
        .read_session(session_id, |session| match query.category {
            Some(category) => session.favorites().by_category(category).cloned().collect(),
            None => session.favorites().iter().cloned().collect(),
        })
        .await?;
    Ok(Json(favorites))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddFavoriteRequest>,
) -> AppResult<Json<AddFavoriteResponse>> {
    let added = state
        .write_session(session_id, |session| session.add_favorite(&request.title))
        .await?;
    Ok(Json(AddFavoriteResponse { added }))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((session_id, title)): Path<(Uuid, String)>,
) -> AppResult<Json<RemoveFavoriteResponse>> {
    let removed = state
        .write_session(session_id, |session| session.remove_favorite(&title))
        .await?;
    Ok(Json(RemoveFavoriteResponse { removed }))
}

/// Search the catalog for titles not yet favorited
pub async fn search(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<Arc<CatalogEntry>>>> {
    let limit = params.limit.unwrap_or(state.limits.search);
    let query = params.q.trim();
    let results = state
        .read_session(session_id, |session| session.search(query, limit))
        .await?;
    Ok(Json(results))
}

pub async fn get_genres(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<GenresResponse>> {
    let distribution = state
        .read_session(session_id, |session| session.analyze_genres())
        .await?;
    let top_genre = distribution.top_genre().map(str::to_string);
    Ok(Json(GenresResponse {
        distribution,
        top_genre,
    }))
}

pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<Vec<ScoredRecommendation>>> {
    let limit = query.limit.unwrap_or(state.limits.recommendations);
    let pool = state.limits.recommendation_pool;
    let recs = state
        .read_session(session_id, |session| match query.category {
            Some(category) => recommendations::recommend_in_category(
                session.catalog(),
                session.favorites(),
                category,
                pool,
                limit,
            ),
            None => session.recommend(limit),
        })
        .await?;
    Ok(Json(recs))
}

pub async fn get_cross_recommendations(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<Vec<CrossRecommendation>>> {
    let recs = state
        .read_session(session_id, |session| session.cross_recommend())
        .await?;
    Ok(Json(recs))
}

pub async fn get_profile_label(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<Option<ProfileLabel>>> {
    let label = state
        .read_session(session_id, |session| {
            profile_label::profile_label(session.favorites())
        })
        .await?;
    Ok(Json(label))
}

/// Every derived view of the session in one response
pub async fn get_insights(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<Insights>> {
    let limit = state.limits.recommendations;
    let insights = state
        .read_session(session_id, |session| session.insights(limit))
        .await?;
    Ok(Json(insights))
}

/// Persist the session's favorites into a profile
pub async fn save_session(
    State(state): State<AppState>,
    Path((session_id, profile_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<Profile>> {
    let favorites = state
        .read_session(session_id, |session| session.favorites().clone())
        .await?;
    let profile = profiles::save_favorites(state.profiles.as_ref(), profile_id, &favorites).await?;
    Ok(Json(profile))
}

/// Replace the session's favorites with a profile's saved list
pub async fn load_session(
    State(state): State<AppState>,
    Path((session_id, profile_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<Vec<Arc<CatalogEntry>>>> {
    let favorites =
        profiles::restore_favorites(state.profiles.as_ref(), profile_id, &state.catalog).await?;
    let loaded: Vec<Arc<CatalogEntry>> = state
        .write_session(session_id, |session| {
            session.replace_favorites(favorites);
            session.favorites().iter().cloned().collect()
        })
        .await?;
    Ok(Json(loaded))
}

pub async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> AppResult<(StatusCode, Json<Profile>)> {
    let profile =
        profiles::create_profile(state.profiles.as_ref(), &request.name, request.avatar).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

pub async fn list_profiles(State(state): State<AppState>) -> AppResult<Json<Vec<Profile>>> {
    Ok(Json(profiles::list_profiles(state.profiles.as_ref()).await?))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> AppResult<Json<Profile>> {
    Ok(Json(
        profiles::get_profile(state.profiles.as_ref(), profile_id).await?,
    ))
}

pub async fn delete_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if profiles::delete_profile(state.profiles.as_ref(), profile_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Profile {}", profile_id)))
    }
}

pub async fn update_theme(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
    Json(request): Json<UpdateThemeRequest>,
) -> AppResult<Json<Profile>> {
    let profile =
        profiles::save_theme(state.profiles.as_ref(), profile_id, &request.theme).await?;
    Ok(Json(profile))
}

pub async fn update_avatar(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
    Json(request): Json<UpdateAvatarRequest>,
) -> AppResult<Json<Profile>> {
    let profile =
        profiles::save_avatar(state.profiles.as_ref(), profile_id, &request.avatar).await?;
    Ok(Json(profile))
}

pub async fn export_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let json = profiles::export_profile(state.profiles.as_ref(), profile_id).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], json))
}

/// Import a previously exported profile document
pub async fn import_profile(
    State(state): State<AppState>,
    body: String,
) -> AppResult<(StatusCode, Json<Profile>)> {
    let profile = profiles::import_profile(state.profiles.as_ref(), &body).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}
