/// Name of the JSON document holding the users collection
pub const USERS_FILE_NAME: &str = "users.json";

/// Name of the JSON document holding the readings collection
pub const DATA_FILE_NAME: &str = "data.json";

/// Name of the session slot file (raw user id, no JSON wrapper)
pub const SESSION_FILE_NAME: &str = "session";

/// Key for the users document in the in-memory fallback backend
pub const LOCAL_USERS_KEY: &str = "emg_users";

/// Key for the readings document in the in-memory fallback backend
pub const LOCAL_DATA_KEY: &str = "emg_data";

/// Key for the session slot in the in-memory fallback backend
pub const LOCAL_SESSION_KEY: &str = "emg_user_session";

/// Muscle group label applied when a reading is recorded without one
pub const DEFAULT_MUSCLE_GROUP: &str = "General";

/// Number of readings returned by the latest-readings query when no
/// explicit limit is given
pub const DEFAULT_LATEST_LIMIT: usize = 10;

/// Minimum accepted username length at signup
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum accepted password length at signup
pub const MIN_PASSWORD_LEN: usize = 6;

/// Number of characters in a password digest's salt prefix
pub const SALT_LEN: usize = 10;

/// Number of random base-36 characters appended to an identifier's
/// timestamp prefix
pub const ID_RANDOM_LEN: usize = 11;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a too-short username at signup
pub const ERR_USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";

/// Error message for a syntactically invalid email at signup
pub const ERR_INVALID_EMAIL: &str = "Please enter a valid email address";

/// Error message for a too-short password at signup
pub const ERR_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
