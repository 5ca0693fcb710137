//! Session token persistence and claims decoding.
//!
//! Tokens live in LocalStorage under the same keys the backend's other
//! clients use. Access is funneled through the [`TokenStore`] trait so the
//! refresh interceptor can be exercised in tests with an in-memory store.
//!
//! The access token payload is decoded without signature verification; the
//! client only reads the subject and role for display and ownership checks,
//! and the backend remains the authority on every request.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::models::TokenPair;
use crate::web::LocalStorage;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Storage for the bearer token pair.
pub trait TokenStore {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn store(&self, pair: &TokenPair);
    fn clear(&self);
}

/// Production store backed by LocalStorage.
#[derive(Clone, Copy, Default)]
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn access_token(&self) -> Option<String> {
        LocalStorage::get(ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        LocalStorage::get(REFRESH_TOKEN_KEY)
    }

    fn store(&self, pair: &TokenPair) {
        LocalStorage::set(ACCESS_TOKEN_KEY, &pair.access_token);
        LocalStorage::set(REFRESH_TOKEN_KEY, &pair.refresh_token);
    }

    fn clear(&self) {
        LocalStorage::delete(ACCESS_TOKEN_KEY);
        LocalStorage::delete(REFRESH_TOKEN_KEY);
    }
}

/// Claims carried in the access token payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccessClaims {
    /// Numeric user id.
    pub sub: i64,
    #[serde(default)]
    pub role: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

/// Decode the payload segment of a JWT. Returns `None` for anything that is
/// not three dot-separated base64url segments around a JSON object.
pub fn decode_claims(token: &str) -> Option<AccessClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Claims of the currently stored access token, if any.
pub fn current_user() -> Option<AccessClaims> {
    let token = BrowserTokens.access_token()?;
    decode_claims(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forge_token(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decodes_subject_and_role() {
        let token = forge_token(serde_json::json!({
            "sub": 42,
            "role": "ORGANIZER",
            "iat": 1_700_000_000,
            "exp": 1_700_003_600
        }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role.as_deref(), Some("ORGANIZER"));
    }

    #[test]
    fn tolerates_missing_role() {
        let token = forge_token(serde_json::json!({
            "sub": 7,
            "iat": 0,
            "exp": 1
        }));
        let claims = decode_claims(&token).unwrap();
        assert!(claims.role.is_none());
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(decode_claims("").is_none());
        assert!(decode_claims("only-one-segment").is_none());
        assert!(decode_claims("a.!!!not-base64!!!.c").is_none());
        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"plain text"));
        assert!(decode_claims(&not_json).is_none());
    }
}
