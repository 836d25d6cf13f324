//! Session token encoding.
//!
//! A token is the standard base64 encoding of the UTF-8 JSON payload
//! `{"username", "name", "role", "exp"}`. It is reversible and carries no
//! signature: anyone who can write to the store can mint a valid token.
//! Expiry is checked only when a token is decoded.

use super::{
    errors::TokenError,
    models::{SessionClaims, SessionToken, TokenPayload},
};
use base64::{Engine, engine::general_purpose::STANDARD as B64};
use chrono::{DateTime, Duration, Utc};

/// Encode `claims` into a token that expires `ttl` after `now`
pub fn issue_token(
    claims: &SessionClaims,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<SessionToken, TokenError> {
    let expires_at = now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
    let payload = TokenPayload {
        claims: claims.clone(),
        exp: expires_at.timestamp_millis(),
    };

    let json = serde_json::to_vec(&payload)?;
    Ok(SessionToken::new(B64.encode(json)))
}

/// Decode `token`, rejecting it when it is malformed or expired at `now`
pub fn try_decode_token(token: &str, now: DateTime<Utc>) -> Result<TokenPayload, TokenError> {
    let bytes = B64.decode(token.trim())?;
    let payload: TokenPayload = serde_json::from_slice(&bytes)?;

    if payload.exp <= now.timestamp_millis() {
        return Err(TokenError::Expired { exp: payload.exp });
    }

    Ok(payload)
}

/// Decode `token`, treating any failure as "no session"
pub fn decode_token(token: &str, now: DateTime<Utc>) -> Option<TokenPayload> {
    match try_decode_token(token, now) {
        Ok(payload) => Some(payload),
        Err(e) => {
            log::debug!("Ignoring session token: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;

    fn claims() -> SessionClaims {
        SessionClaims {
            username: "admin".to_string(),
            name: "Demo Admin".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_round_trip_within_ttl() {
        let now = Utc::now();
        let token = issue_token(&claims(), Duration::hours(24), now).unwrap();

        let payload = decode_token(token.as_str(), now + Duration::hours(23)).unwrap();
        assert_eq!(payload.claims, claims());
        assert_eq!(payload.exp, (now + Duration::hours(24)).timestamp_millis());
    }

    #[test]
    fn test_expired_at_exact_boundary() {
        let now = Utc::now();
        let ttl = Duration::hours(24);
        let token = issue_token(&claims(), ttl, now).unwrap();

        assert!(decode_token(token.as_str(), now + ttl).is_none());
        assert!(matches!(
            try_decode_token(token.as_str(), now + ttl + Duration::seconds(1)),
            Err(TokenError::Expired { .. })
        ));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let now = Utc::now();
        assert!(decode_token("not-a-token", now).is_none());
        assert!(decode_token("", now).is_none());
        assert!(matches!(
            try_decode_token("not-a-token", now),
            Err(TokenError::Encoding(_))
        ));

        let not_claims = B64.encode(br#"{"hello":"world"}"#);
        assert!(matches!(
            try_decode_token(&not_claims, now),
            Err(TokenError::Payload(_))
        ));
    }

    #[test]
    fn test_missing_expiry_is_rejected() {
        let no_exp = B64.encode(br#"{"username":"a","name":"A","role":"Staff"}"#);
        assert!(decode_token(&no_exp, Utc::now()).is_none());
    }

    #[test]
    fn test_hand_written_token_is_accepted() {
        let exp = (Utc::now() + Duration::hours(1)).timestamp_millis();
        let forged = B64.encode(format!(
            r#"{{"username":"mallory","name":"Mallory","role":"Admin","exp":{}}}"#,
            exp
        ));

        let payload = decode_token(&forged, Utc::now()).unwrap();
        assert_eq!(payload.claims.username, "mallory");
        assert!(payload.claims.role.is_admin());
    }

    #[test]
    fn test_non_ascii_claims_survive() {
        let now = Utc::now();
        let claims = SessionClaims {
            username: "zoë".to_string(),
            name: "Zoë Ångström".to_string(),
            role: Role::Other("Gérant".to_string()),
        };
        let token = issue_token(&claims, Duration::hours(1), now).unwrap();
        assert_eq!(decode_token(token.as_str(), now).unwrap().claims, claims);
    }
}
