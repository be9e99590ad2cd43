use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Username or email already exists")]
    DuplicateAccount,

    #[error("User not found")]
    UserNotFound,

    #[error("Incorrect password")]
    InvalidPassword,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Message shown at the UI boundary for this error.
    ///
    /// Domain failures surface verbatim; storage and internal failures are
    /// logged with full detail here and collapsed into a generic message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Io(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                "Failed to save data".to_string()
            }
            AppError::Serialization(ref e) => {
                tracing::error!("Serialization error: {:?}", e);
                "Failed to save data".to_string()
            }
            AppError::TaskJoin(ref e) => {
                tracing::error!("Task join error: {:?}", e);
                "Internal error".to_string()
            }
            AppError::DuplicateAccount => "Username or email already exists".to_string(),
            AppError::UserNotFound => "User not found".to_string(),
            AppError::InvalidPassword => "Incorrect password".to_string(),
            AppError::InvalidInput(ref msg) => msg.clone(),
        }
    }

    /// Whether the user can fix this error by correcting their input
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            AppError::DuplicateAccount
                | AppError::UserNotFound
                | AppError::InvalidPassword
                | AppError::InvalidInput(_)
        )
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
