//! Session manager implementation.

use super::{
    errors::{AuthError, AuthResult},
    models::{LoginRequest, RegisterRequest, Role, SessionClaims, SessionToken, TokenPayload, User},
    token,
};
use crate::{
    config::DashboardConfig,
    storage::{self, KeyValueStore, TOKEN_KEY, USERS_KEY},
};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

/// Session manager
///
/// Owns the user directory and the single active session token, both kept
/// in the shared store.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    token_ttl: Duration,
    min_password_len: usize,
}

impl SessionManager {
    /// Create a new session manager
    ///
    /// # Arguments
    ///
    /// * `store` - Shared key-value store
    /// * `config` - Token lifetime and password policy
    pub fn new(store: Arc<dyn KeyValueStore>, config: &DashboardConfig) -> Self {
        Self {
            store,
            token_ttl: config.token_ttl,
            min_password_len: config.min_password_len,
        }
    }

    /// Register a new user and start a session for them
    ///
    /// # Errors
    ///
    /// * `AuthError::DuplicateUser` - Username already exists (case-insensitive)
    /// * `AuthError::WeakPassword` - Password shorter than the configured minimum
    /// * `AuthError::Token` - Session token could not be encoded
    /// * `AuthError::Storage` - Store write failed
    pub fn register(&self, request: RegisterRequest) -> AuthResult<SessionToken> {
        if self.find_user(&request.username).is_some() {
            log::debug!("Registration rejected, username '{}' taken", request.username);
            return Err(AuthError::DuplicateUser);
        }

        self.validate_password(&request.password)?;

        let user = User::from(request);
        self.save_user(user.clone())?;
        log::info!("Registered user '{}' with role {}", user.username, user.role);

        self.start_session(&user.claims())
    }

    /// Log a user in, replacing any active session
    ///
    /// # Errors
    ///
    /// * `AuthError::UserNotFound` - No user with that username
    /// * `AuthError::InvalidCredentials` - Password does not match
    /// * `AuthError::Token` - Session token could not be encoded
    /// * `AuthError::Storage` - Store write failed
    pub fn login(&self, request: LoginRequest) -> AuthResult<SessionToken> {
        let user = self
            .find_user(&request.username)
            .ok_or(AuthError::UserNotFound)?;

        if user.password != request.password {
            log::warn!("Failed login for '{}'", user.username);
            return Err(AuthError::InvalidCredentials);
        }

        log::info!("User '{}' logged in", user.username);
        self.start_session(&user.claims())
    }

    /// Claims of the active session, if any
    ///
    /// Absent, malformed and expired tokens all read as no session.
    pub fn current_user(&self) -> Option<SessionClaims> {
        self.current_user_at(Utc::now())
    }

    /// Claims of the session active at `now`
    pub fn current_user_at(&self, now: DateTime<Utc>) -> Option<SessionClaims> {
        let stored = self.store.get_item(TOKEN_KEY)?;
        token::decode_token(&stored, now).map(|payload| payload.claims)
    }

    /// End the active session; a no-op when there is none
    pub fn logout(&self) -> AuthResult<()> {
        self.store.remove_item(TOKEN_KEY)?;
        log::info!("Session cleared");
        Ok(())
    }

    /// Encode `claims` into a token expiring one TTL from now
    pub fn issue_token(&self, claims: &SessionClaims) -> AuthResult<SessionToken> {
        Ok(token::issue_token(claims, self.token_ttl, Utc::now())?)
    }

    /// Decode a token, returning `None` if it is malformed or expired
    pub fn decode_token(&self, token: &str) -> Option<TokenPayload> {
        token::decode_token(token, Utc::now())
    }

    /// All users in insertion order; a corrupt directory reads as empty
    pub fn users(&self) -> Vec<User> {
        storage::read_json(self.store.as_ref(), USERS_KEY).unwrap_or_default()
    }

    /// Look a user up by username (case-insensitive)
    pub fn find_user(&self, username: &str) -> Option<User> {
        self.users().into_iter().find(|u| u.has_username(username))
    }

    /// Insert `user`, or replace the user with the same username
    pub fn save_user(&self, user: User) -> AuthResult<()> {
        let mut users = self.users();
        match users.iter_mut().find(|u| u.has_username(&user.username)) {
            Some(existing) => *existing = user,
            None => users.push(user),
        }

        storage::write_json(self.store.as_ref(), USERS_KEY, &users)?;
        Ok(())
    }

    /// Create the demo administrator when the directory is empty
    ///
    /// # Returns
    ///
    /// * `AuthResult<bool>` - Whether the demo user was created
    pub fn seed_demo_user(&self) -> AuthResult<bool> {
        if !self.users().is_empty() {
            return Ok(false);
        }

        self.save_user(User {
            name: "Demo Admin".to_string(),
            username: "admin".to_string(),
            email: "admin@demo.com".to_string(),
            password: "admin123".to_string(),
            role: Role::Admin,
        })?;
        log::info!("Seeded demo admin account");
        Ok(true)
    }

    fn start_session(&self, claims: &SessionClaims) -> AuthResult<SessionToken> {
        let token = self.issue_token(claims)?;
        self.store.set_item(TOKEN_KEY, token.as_str())?;
        Ok(token)
    }

    fn validate_password(&self, password: &str) -> AuthResult<()> {
        if password.chars().count() < self.min_password_len {
            return Err(AuthError::WeakPassword {
                min_len: self.min_password_len,
            });
        }
        Ok(())
    }
}
