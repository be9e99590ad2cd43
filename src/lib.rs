//! EMG Local Store Library
//!
//! On-device persistence and account layer for the EMG monitor app: a
//! two-collection JSON record store (users, readings), a salted password
//! digest, a single-slot session store, and the async facade the UI calls.

pub mod config;
pub mod constants;
pub mod context;
pub mod db;
pub mod error;
pub mod id;
pub mod models;
pub mod ops;
pub mod security;
pub mod session;

pub use config::{Config, StorageKind};
pub use context::{AuthContext, AuthState};
pub use db::{open_record_store, RecordStore};
pub use error::{AppError, Result};
pub use models::{PublicUser, Reading, User};
pub use ops::Database;
pub use session::{open_session_store, SessionStore};
