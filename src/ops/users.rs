use chrono::{SecondsFormat, Utc};

use crate::error::{AppError, Result};
use crate::id::generate_id;
use crate::models::{PublicUser, User};
use crate::security::{hash_password, verify_password};

use super::validation::validate_signup;
use super::Database;

impl Database {
    /// Create a new account and return its redacted view.
    ///
    /// Fails with `DuplicateAccount` when any existing user holds the same
    /// username or the same email; the two cases are deliberately not
    /// distinguished.
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<PublicUser> {
        validate_signup(username, email, password)?;

        self.initialize().await;
        tracing::info!("Creating user: {}", username);
        let mut users = self.load_users().await?;

        if users
            .iter()
            .any(|u| u.username == username || u.email == email)
        {
            tracing::info!("Duplicate username or email: {}", username);
            return Err(AppError::DuplicateAccount);
        }

        let user = User {
            id: generate_id(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let public = user.redacted();

        users.push(user);
        self.store_users(users).await?;
        tracing::info!("User saved to storage");

        Ok(public)
    }

    /// Authenticate by username and password, returning the redacted view
    pub async fn authenticate_user(&self, username: &str, password: &str) -> Result<PublicUser> {
        self.initialize().await;
        tracing::info!("Authenticating user: {}", username);
        let users = self.load_users().await?;

        let user = users.iter().find(|u| u.username == username).ok_or_else(|| {
            tracing::info!("No user found with username: {}", username);
            AppError::UserNotFound
        })?;

        if !verify_password(password, &user.password_hash) {
            tracing::info!("Password mismatch for user: {}", username);
            return Err(AppError::InvalidPassword);
        }

        Ok(user.redacted())
    }

    /// Look up a user by id, returning the redacted view
    pub async fn get_user_by_id(&self, user_id: &str) -> Result<PublicUser> {
        let users = self.load_users().await?;
        users
            .iter()
            .find(|u| u.id == user_id)
            .map(User::redacted)
            .ok_or(AppError::UserNotFound)
    }
}
