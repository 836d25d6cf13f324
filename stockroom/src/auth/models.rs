//! Authentication data models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User role.
///
/// Roles form an open set: any string is accepted and kept verbatim, the
/// well-known ones get their own variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Manager,
    Staff,
    Other(String),
}

impl Role {
    /// Role name as stored and displayed
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Staff => "Staff",
            Role::Other(name) => name,
        }
    }

    /// Whether this is the administrator role
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Admin" => Role::Admin,
            "Manager" => Role::Manager,
            "Staff" => Role::Staff,
            _ => Role::Other(name),
        }
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Role::from(name.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User record as persisted in the user directory.
///
/// The password is kept in plaintext; this layer is a mock and provides
/// no real security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl User {
    /// Case-insensitive username comparison
    pub fn has_username(&self, username: &str) -> bool {
        self.username.to_lowercase() == username.to_lowercase()
    }

    /// Claims carried by a session for this user
    pub fn claims(&self) -> SessionClaims {
        SessionClaims {
            username: self.username.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

/// User registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl From<RegisterRequest> for User {
    fn from(request: RegisterRequest) -> Self {
        Self {
            name: request.name,
            username: request.username,
            email: request.email,
            password: request.password,
            role: request.role,
        }
    }
}

/// User login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Identity carried by a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub username: String,
    pub name: String,
    pub role: Role,
}

impl SessionClaims {
    /// Name to greet the user with, falling back to the username
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.username
        } else {
            &self.name
        }
    }
}

/// Decoded token payload: the claims plus the expiry instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    #[serde(flatten)]
    pub claims: SessionClaims,

    /// Expiry, milliseconds since the Unix epoch
    pub exp: i64,
}

/// Opaque session token as kept in the store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap an encoded token string
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the encoded token text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_string() {
        assert_eq!(Role::from("Admin"), Role::Admin);
        assert_eq!(Role::from("Auditor"), Role::Other("Auditor".to_string()));
        assert_eq!(String::from(Role::Staff), "Staff");

        let json = serde_json::to_string(&Role::Other("Auditor".to_string())).unwrap();
        assert_eq!(json, "\"Auditor\"");
        let role: Role = serde_json::from_str("\"Manager\"").unwrap();
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn test_role_is_case_sensitive() {
        assert_eq!(Role::from("admin"), Role::Other("admin".to_string()));
        assert!(!Role::from("admin").is_admin());
    }

    #[test]
    fn test_has_username_ignores_case() {
        let user = User {
            name: "Demo".to_string(),
            username: "Demo".to_string(),
            email: "d@e.com".to_string(),
            password: "abcdef".to_string(),
            role: Role::Staff,
        };
        assert!(user.has_username("DEMO"));
        assert!(!user.has_username("demo2"));
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let claims = SessionClaims {
            username: "jdoe".to_string(),
            name: String::new(),
            role: Role::Staff,
        };
        assert_eq!(claims.display_name(), "jdoe");
    }

    #[test]
    fn test_payload_json_layout() {
        let payload = TokenPayload {
            claims: SessionClaims {
                username: "admin".to_string(),
                name: "Demo Admin".to_string(),
                role: Role::Admin,
            },
            exp: 42,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"username":"admin","name":"Demo Admin","role":"Admin","exp":42}"#
        );
    }
}
