//! Authentication error types.

use crate::storage::StorageError;
use thiserror::Error;

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Store write failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Username already exists (case-insensitive)
    #[error("Username already exists.")]
    DuplicateUser,

    /// Password shorter than the configured minimum
    #[error("Password must be at least {min_len} characters.")]
    WeakPassword { min_len: usize },

    /// No user with the given username
    #[error("User not found. Please register first.")]
    UserNotFound,

    /// Password does not match the stored one
    #[error("Invalid password.")]
    InvalidCredentials,

    /// Session token could not be encoded
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl AuthError {
    /// Get a message suitable for showing inline next to the form
    ///
    /// Storage errors are replaced with a generic message so file paths and
    /// parser details stay out of the UI.
    pub fn client_message(&self) -> String {
        match self {
            AuthError::Storage(_) => "Unable to save changes, please try again".to_string(),
            AuthError::Token(_) => "Unable to start a session, please try again".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Reasons a session token is rejected or cannot be encoded.
///
/// Decoding failures are never surfaced to callers: they collapse to
/// "no session".
#[derive(Debug, Error)]
pub enum TokenError {
    /// Not valid base64
    #[error("Token is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// Decoded bytes are not a claims payload
    #[error("Token payload is malformed: {0}")]
    Payload(#[from] serde_json::Error),

    /// Expiry instant is not in the future
    #[error("Token expired at {exp}")]
    Expired { exp: i64 },
}
