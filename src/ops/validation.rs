use crate::constants::{
    ERR_INVALID_EMAIL, ERR_PASSWORD_TOO_SHORT, ERR_USERNAME_TOO_SHORT, MIN_PASSWORD_LEN,
    MIN_USERNAME_LEN,
};
use crate::error::{AppError, Result};

/// Validate signup input against the account form's limits
pub fn validate_signup(username: &str, email: &str, password: &str) -> Result<()> {
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(AppError::InvalidInput(ERR_USERNAME_TOO_SHORT.to_string()));
    }

    if !is_valid_email(email) {
        return Err(AppError::InvalidInput(ERR_INVALID_EMAIL.to_string()));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::InvalidInput(ERR_PASSWORD_TOO_SHORT.to_string()));
    }

    Ok(())
}

/// Minimal syntactic email check: no whitespace, exactly one `@` with a
/// non-empty local part, and a domain containing an interior dot
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
