use tokio::task;

use super::Database;

impl Database {
    /// Persist the signed-in user's id.
    ///
    /// Best-effort: failures are logged, never raised.
    pub async fn save_session(&self, user_id: &str) {
        let sessions = self.sessions();
        let id = user_id.to_string();
        match task::spawn_blocking(move || sessions.save(&id)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("Error saving session: {}", e),
            Err(e) => tracing::error!("Session save task failed: {}", e),
        }
    }

    /// The persisted session user id, if any. Failures read as no session.
    pub async fn get_session(&self) -> Option<String> {
        let sessions = self.sessions();
        match task::spawn_blocking(move || sessions.load()).await {
            Ok(Ok(id)) => id,
            Ok(Err(e)) => {
                tracing::error!("Error getting session: {}", e);
                None
            }
            Err(e) => {
                tracing::error!("Session load task failed: {}", e);
                None
            }
        }
    }

    /// Remove the persisted session. Best-effort, like [`Self::save_session`].
    pub async fn clear_session(&self) {
        let sessions = self.sessions();
        match task::spawn_blocking(move || sessions.clear()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("Error clearing session: {}", e),
            Err(e) => tracing::error!("Session clear task failed: {}", e),
        }
    }
}
