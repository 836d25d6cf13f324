//! Mock authentication: user directory and a single pseudo-token session.
//!
//! This module provides:
//! - Registration with a case-insensitive unique username
//! - Login by exact plaintext password comparison
//! - One active session token, expiring 24 hours after issue by default
//! - Lazy expiry: tokens are only checked when read
//!
//! None of this is secure. Passwords are stored as entered and tokens are
//! base64-encoded JSON without a signature.
//!
//! ## Example
//!
//! ```
//! use stockroom::auth::{LoginRequest, RegisterRequest, Role, SessionManager};
//! use stockroom::config::DashboardConfig;
//! use stockroom::storage::MemoryStore;
//! use std::sync::Arc;
//!
//! let auth = SessionManager::new(Arc::new(MemoryStore::new()), &DashboardConfig::default());
//!
//! auth.register(RegisterRequest {
//!     name: "Jane Doe".to_string(),
//!     username: "jane".to_string(),
//!     email: "jane@example.com".to_string(),
//!     password: "hunter22".to_string(),
//!     role: Role::Manager,
//! })
//! .unwrap();
//! auth.logout().unwrap();
//!
//! auth.login(LoginRequest {
//!     username: "JANE".to_string(),
//!     password: "hunter22".to_string(),
//! })
//! .unwrap();
//! assert_eq!(auth.current_user().unwrap().name, "Jane Doe");
//! ```

pub mod errors;
pub mod manager;
pub mod models;
pub mod token;

pub use errors::{AuthError, AuthResult, TokenError};
pub use manager::SessionManager;
pub use models::{
    LoginRequest, RegisterRequest, Role, SessionClaims, SessionToken, TokenPayload, User,
};
