use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_AVATAR: &str = "😊";
pub const DEFAULT_THEME: &str = "light";

/// A saved user profile holding a favorites list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
    /// Favorite titles in insertion order
    pub favorites: Vec<String>,
    pub theme: String,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Creates an empty profile with a fresh id
    pub fn new(name: String, avatar: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            avatar: avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            favorites: Vec::new(),
            theme: DEFAULT_THEME.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Profile document accepted by import
///
/// Exported profiles carry an id and creation time; both are replaced on import.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileImport {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_defaults() {
        let profile = Profile::new("Mika".to_string(), None);
        assert_eq!(profile.name, "Mika");
        assert_eq!(profile.avatar, DEFAULT_AVATAR);
        assert_eq!(profile.theme, DEFAULT_THEME);
        assert!(profile.favorites.is_empty());
    }

    #[test]
    fn test_profile_import_tolerates_missing_fields() {
        let import: ProfileImport = serde_json::from_str(r#"{"favorites":["Dune"]}"#).unwrap();
        assert_eq!(import.name, None);
        assert_eq!(import.favorites, vec!["Dune".to_string()]);
    }

    #[test]
    fn test_exported_profile_is_importable() {
        let mut profile = Profile::new("Rin".to_string(), Some("🐱".to_string()));
        profile.favorites = vec!["Berserk".to_string()];

        let json = serde_json::to_string_pretty(&profile).unwrap();
        let import: ProfileImport = serde_json::from_str(&json).unwrap();

        assert_eq!(import.name.as_deref(), Some("Rin"));
        assert_eq!(import.avatar.as_deref(), Some("🐱"));
        assert_eq!(import.favorites, profile.favorites);
    }
}
