use serde::{Deserialize, Serialize};

use super::profile::Role;

/// Access/refresh token pair returned by `auth/signin` and
/// `auth/refreshToken`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Signup form payload. The backend revalidates everything, confirmation
/// field included.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub lastname: String,
    pub firstname: String,
    pub email: String,
    pub role: Role,
    pub password: String,
    pub confirm_password: String,
}

/// Generic `{ "message": ... }` acknowledgment body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub new_password: String,
    pub repeat_new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_pair_parses_camel_case() {
        let json = r#"{"accessToken":"aaa","refreshToken":"rrr"}"#;
        let pair: TokenPair = serde_json::from_str(json).unwrap();
        assert_eq!(pair.access_token, "aaa");
        assert_eq!(pair.refresh_token, "rrr");
    }

    #[test]
    fn signup_request_serializes_role_and_confirmation() {
        let req = SignupRequest {
            lastname: "Martin".into(),
            firstname: "Paul".into(),
            email: "paul@example.fr".into(),
            role: Role::Participant,
            password: "Secret123".into(),
            confirm_password: "Secret123".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["role"], "PARTICIPANT");
        assert_eq!(v["confirmPassword"], "Secret123");
    }
}
