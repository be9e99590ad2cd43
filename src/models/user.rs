use serde::{Deserialize, Serialize};

/// User record as persisted in the users collection
///
/// The password digest never crosses the facade boundary; callers receive
/// a [`PublicUser`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique id, assigned at creation
    pub id: String,
    /// Unique across all users, compared case-sensitively
    pub username: String,
    pub email: String,
    /// Salted checksum digest, `<salt>$<hex>`
    pub password_hash: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

/// Redacted user view returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl User {
    /// Redacted view with the password digest stripped
    pub fn redacted(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}
