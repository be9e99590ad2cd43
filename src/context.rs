//! Signed-in state held for the UI tree.

use crate::error::Result;
use crate::models::PublicUser;
use crate::ops::Database;

/// Signed-in state as seen by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Startup state until [`AuthContext::restore`] resolves it
    Loading,
    SignedIn(PublicUser),
    SignedOut,
}

/// Holds the current signed-in state and drives the database operations
/// behind sign-up, sign-in, and sign-out
pub struct AuthContext {
    db: Database,
    state: AuthState,
}

impl AuthContext {
    /// New context in the `Loading` state; call [`Self::restore`] to
    /// resolve it from the persisted session
    pub fn new(db: Database) -> Self {
        Self {
            db,
            state: AuthState::Loading,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&PublicUser> {
        match &self.state {
            AuthState::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.state, AuthState::SignedIn(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, AuthState::Loading)
    }

    /// Resolve the startup state from the persisted session.
    ///
    /// A session id that no longer resolves to a user is stale: the slot is
    /// cleared (best-effort) and the context lands in `SignedOut`.
    pub async fn restore(&mut self) {
        self.db.initialize().await;

        match self.db.get_session().await {
            Some(user_id) => match self.db.get_user_by_id(&user_id).await {
                Ok(user) => self.state = AuthState::SignedIn(user),
                Err(e) => {
                    tracing::warn!("Failed to restore session for {}: {}", user_id, e);
                    self.db.clear_session().await;
                    self.state = AuthState::SignedOut;
                }
            },
            None => self.state = AuthState::SignedOut,
        }
    }

    /// Create an account and sign it in.
    ///
    /// On error the state is unchanged and the error is returned for the
    /// caller to surface.
    pub async fn sign_up(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<PublicUser> {
        let user = self.db.create_user(username, email, password).await?;
        self.db.save_session(&user.id).await;
        self.state = AuthState::SignedIn(user.clone());
        Ok(user)
    }

    /// Authenticate and sign in. State semantics match [`Self::sign_up`].
    pub async fn sign_in(&mut self, username: &str, password: &str) -> Result<PublicUser> {
        let user = self.db.authenticate_user(username, password).await?;
        self.db.save_session(&user.id).await;
        self.state = AuthState::SignedIn(user.clone());
        Ok(user)
    }

    /// Clear the session and sign out. Always reaches `SignedOut`; session
    /// clearing is best-effort.
    pub async fn sign_out(&mut self) {
        self.db.clear_session().await;
        self.state = AuthState::SignedOut;
    }
}
