use uuid::Uuid;

use crate::{
    catalog::Catalog,
    db::ProfileStore,
    error::{AppError, AppResult},
    models::{profile::DEFAULT_THEME, Profile, ProfileImport},
    services::favorites::FavoritesSet,
};

/// Creates and stores a new profile
pub async fn create_profile(
    store: &dyn ProfileStore,
    name: &str,
    avatar: Option<String>,
) -> AppResult<Profile> {
    let name = validate_name(Some(name))?;
    let profile = Profile::new(name, avatar);
    store.put(&profile).await?;

    tracing::info!(profile_id = %profile.id, store = store.name(), "Profile created");
    Ok(profile)
}

/// All profiles, newest first
pub async fn list_profiles(store: &dyn ProfileStore) -> AppResult<Vec<Profile>> {
    let mut profiles = store.list().await?;
    profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(profiles)
}

pub async fn get_profile(store: &dyn ProfileStore, id: Uuid) -> AppResult<Profile> {
    store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {}", id)))
}

pub async fn delete_profile(store: &dyn ProfileStore, id: Uuid) -> AppResult<bool> {
    let deleted = store.delete(id).await?;
    if deleted {
        tracing::info!(profile_id = %id, "Profile deleted");
    }
    Ok(deleted)
}

/// Persists the favorites as a flat title list
pub async fn save_favorites(
    store: &dyn ProfileStore,
    id: Uuid,
    favorites: &FavoritesSet,
) -> AppResult<Profile> {
    let mut profile = get_profile(store, id).await?;
    profile.favorites = favorites.titles();
    store.put(&profile).await?;

    tracing::info!(profile_id = %id, favorites = profile.favorites.len(), "Favorites saved");
    Ok(profile)
}

/// Rebuilds a favorites set from a profile's saved titles
pub async fn restore_favorites(
    store: &dyn ProfileStore,
    id: Uuid,
    catalog: &Catalog,
) -> AppResult<FavoritesSet> {
    let profile = get_profile(store, id).await?;
    let favorites = FavoritesSet::restore(catalog, &profile.favorites);

    if favorites.len() < profile.favorites.len() {
        tracing::warn!(
            profile_id = %id,
            saved = profile.favorites.len(),
            restored = favorites.len(),
            "Some saved favorites are no longer in the catalog"
        );
    }

    Ok(favorites)
}

pub async fn save_theme(store: &dyn ProfileStore, id: Uuid, theme: &str) -> AppResult<Profile> {
    let theme = theme.trim();
    if theme.is_empty() {
        return Err(AppError::InvalidInput("Theme name must not be empty".to_string()));
    }

    let mut profile = get_profile(store, id).await?;
    profile.theme = theme.to_string();
    store.put(&profile).await?;
    Ok(profile)
}

pub async fn save_avatar(store: &dyn ProfileStore, id: Uuid, avatar: &str) -> AppResult<Profile> {
    let avatar = avatar.trim();
    if avatar.is_empty() {
        return Err(AppError::InvalidInput("Avatar must not be empty".to_string()));
    }

    let mut profile = get_profile(store, id).await?;
    profile.avatar = avatar.to_string();
    store.put(&profile).await?;
    Ok(profile)
}

/// Pretty-printed JSON document for a profile
pub async fn export_profile(store: &dyn ProfileStore, id: Uuid) -> AppResult<String> {
    let profile = get_profile(store, id).await?;
    Ok(serde_json::to_string_pretty(&profile)?)
}

/// Stores an exported profile under a fresh id and creation time
pub async fn import_profile(store: &dyn ProfileStore, json: &str) -> AppResult<Profile> {
    let import: ProfileImport = serde_json::from_str(json)
        .map_err(|e| AppError::InvalidInput(format!("Invalid profile data: {}", e)))?;
    let name = validate_name(import.name.as_deref())?;

    let mut profile = Profile::new(name, import.avatar);
    profile.favorites = import.favorites;
    profile.theme = import.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
    store.put(&profile).await?;

    tracing::info!(profile_id = %profile.id, favorites = profile.favorites.len(), "Profile imported");
    Ok(profile)
}

fn validate_name(name: Option<&str>) -> AppResult<String> {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(AppError::InvalidInput("Profile name must not be empty".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::*;
    use crate::db::profile_store::MockProfileStore;
    use crate::db::InMemoryProfileStore;
    use chrono::Duration;

    #[tokio::test]
    async fn test_create_profile_trims_name() {
        let store = InMemoryProfileStore::new();
        let profile = create_profile(&store, "  Juno  ", None).await.unwrap();

        assert_eq!(profile.name, "Juno");
        assert_eq!(get_profile(&store, profile.id).await.unwrap(), profile);
    }

    #[tokio::test]
    async fn test_create_profile_rejects_blank_name() {
        let mut store = MockProfileStore::new();
        store.expect_put().never();

        let result = create_profile(&store, "   ", None).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_list_profiles_newest_first() {
        let mut older = Profile::new("Older".to_string(), None);
        older.created_at = older.created_at - Duration::hours(1);
        let newer = Profile::new("Newer".to_string(), None);

        let mut store = MockProfileStore::new();
        let stored = vec![older.clone(), newer.clone()];
        store.expect_list().returning(move || Ok(stored.clone()));

        let profiles = list_profiles(&store).await.unwrap();
        assert_eq!(profiles, vec![newer, older]);
    }

    #[tokio::test]
    async fn test_get_missing_profile_is_not_found() {
        let mut store = MockProfileStore::new();
        store.expect_get().returning(|_| Ok(None));

        let result = get_profile(&store, Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_save_favorites_stores_titles_in_order() {
        let catalog = three_title_catalog();
        let favorites = FavoritesSet::restore(&catalog, &["c", "a"]);
        let profile = Profile::new("Kai".to_string(), None);
        let id = profile.id;

        let mut store = MockProfileStore::new();
        store
            .expect_get()
            .withf(move |requested| *requested == id)
            .returning(move |_| Ok(Some(profile.clone())));
        store
            .expect_put()
            .withf(|p| p.favorites == vec!["C".to_string(), "A".to_string()])
            .times(1)
            .returning(|_| Ok(()));

        let saved = save_favorites(&store, id, &favorites).await.unwrap();
        assert_eq!(saved.favorites, vec!["C", "A"]);
    }

    #[tokio::test]
    async fn test_restore_favorites_skips_missing_titles() {
        let catalog = three_title_catalog();
        let store = InMemoryProfileStore::new();
        let mut profile = Profile::new("Kai".to_string(), None);
        profile.favorites = vec!["B".to_string(), "Gone".to_string(), "A".to_string()];
        store.put(&profile).await.unwrap();

        let favorites = restore_favorites(&store, profile.id, &catalog).await.unwrap();
        assert_eq!(favorites.titles(), vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_save_theme() {
        let store = InMemoryProfileStore::new();
        let profile = create_profile(&store, "Kai", None).await.unwrap();

        let updated = save_theme(&store, profile.id, "midnight").await.unwrap();
        assert_eq!(updated.theme, "midnight");
        assert!(matches!(
            save_theme(&store, profile.id, " ").await,
            Err(AppError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_save_avatar() {
        let store = InMemoryProfileStore::new();
        let profile = create_profile(&store, "Kai", None).await.unwrap();

        let updated = save_avatar(&store, profile.id, "🐙").await.unwrap();
        assert_eq!(updated.avatar, "🐙");
        assert_eq!(get_profile(&store, profile.id).await.unwrap().avatar, "🐙");
        assert!(matches!(
            save_avatar(&store, profile.id, "  ").await,
            Err(AppError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_export_then_import_creates_new_profile() {
        let store = InMemoryProfileStore::new();
        let mut original = create_profile(&store, "Kai", Some("🦊".to_string())).await.unwrap();
        original.favorites = vec!["Dune".to_string()];
        store.put(&original).await.unwrap();

        let json = export_profile(&store, original.id).await.unwrap();
        let imported = import_profile(&store, &json).await.unwrap();

        assert_ne!(imported.id, original.id);
        assert_eq!(imported.name, "Kai");
        assert_eq!(imported.avatar, "🦊");
        assert_eq!(imported.favorites, vec!["Dune"]);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_import_requires_name() {
        let store = InMemoryProfileStore::new();

        let missing = import_profile(&store, r#"{"favorites": []}"#).await;
        assert!(matches!(missing, Err(AppError::InvalidInput(_))));

        let malformed = import_profile(&store, "not json").await;
        assert!(matches!(malformed, Err(AppError::InvalidInput(_))));
    }
}
