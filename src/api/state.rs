use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    catalog::Catalog,
    config::Limits,
    db::{InMemoryProfileStore, ProfileStore},
    error::{AppError, AppResult},
    services::RecommendationSession,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sessions: Arc<RwLock<HashMap<Uuid, RecommendationSession>>>,
    pub profiles: Arc<dyn ProfileStore>,
    pub limits: Limits,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, profiles: Arc<dyn ProfileStore>, limits: Limits) -> Self {
        Self {
            catalog,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            profiles,
            limits,
        }
    }

    /// State with in-memory profile storage and default limits
    pub fn in_memory(catalog: Catalog) -> Self {
        Self::new(
            Arc::new(catalog),
            Arc::new(InMemoryProfileStore::new()),
            Limits::default(),
        )
    }

    /// Starts an empty favorites session
    pub async fn create_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        let session = RecommendationSession::new(Arc::clone(&self.catalog));
        self.sessions.write().await.insert(id, session);
        tracing::info!(session_id = %id, "Session created");
        id
    }

    /// Drops a session and its favorites
    pub async fn delete_session(&self, id: Uuid) -> AppResult<()> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| session_not_found(id))?;
        tracing::info!(session_id = %id, "Session deleted");
        Ok(())
    }

    /// Runs `f` against a session without mutating it
    pub async fn read_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&RecommendationSession) -> T,
    ) -> AppResult<T> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
        Ok(f(session))
    }

    /// Runs `f` against a session with exclusive access
    pub async fn write_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut RecommendationSession) -> T,
    ) -> AppResult<T> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        Ok(f(session))
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {}", id))
}
