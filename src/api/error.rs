//! API error carrier.
//!
//! Per-call errors are logged where they happen and shown inline; there is
//! no deeper taxonomy. The `Server` variant keeps the few structured fields
//! the UI actually branches on (the backend's `error` code and the `email`
//! echoed back by signin).

use serde::Deserialize;
use thiserror::Error;

use super::client::HttpResponse;

/// Body shape the backend uses for non-2xx responses. Every field is
/// optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
struct ServerErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("Erreur réseau : {0}")]
    Network(String),
    /// A 2xx body that did not match the expected shape.
    #[error("Réponse invalide du serveur : {0}")]
    Decode(String),
    /// A non-2xx response, with whatever the backend put in the body.
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        code: Option<String>,
        email: Option<String>,
    },
}

impl ApiError {
    /// Build the `Server` variant from a non-2xx response.
    pub fn from_response(response: &HttpResponse) -> Self {
        let body: ServerErrorBody =
            serde_json::from_str(&response.body).unwrap_or_default();
        ApiError::Server {
            status: response.status,
            message: body
                .message
                .unwrap_or_else(|| format!("Erreur serveur ({})", response.status)),
            code: body.error,
            email: body.email,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend error code, e.g. `ACCOUNT_NOT_ACTIVATED` or `TOKEN_EXPIRED`.
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Server { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Email echoed back by the backend alongside some signin errors.
    pub fn email(&self) -> Option<&str> {
        match self {
            ApiError::Server { email, .. } => email.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
            total_count: None,
        }
    }

    #[test]
    fn server_error_carries_backend_fields() {
        let err = ApiError::from_response(&response(
            403,
            r#"{"message":"Compte non activé","error":"ACCOUNT_NOT_ACTIVATED","email":"a@b.fr"}"#,
        ));
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.code(), Some("ACCOUNT_NOT_ACTIVATED"));
        assert_eq!(err.email(), Some("a@b.fr"));
        assert_eq!(err.to_string(), "Compte non activé");
    }

    #[test]
    fn unparseable_body_falls_back_to_status_message() {
        let err = ApiError::from_response(&response(500, "<html>oops</html>"));
        assert_eq!(err.to_string(), "Erreur serveur (500)");
        assert_eq!(err.code(), None);
    }

    #[test]
    fn network_and_decode_have_no_status() {
        assert_eq!(ApiError::Network("offline".into()).status(), None);
        assert_eq!(ApiError::Decode("eof".into()).email(), None);
    }
}
