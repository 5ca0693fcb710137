//! `auth/*` endpoints. The refresh call itself lives in the interceptor.

use crate::config::api_url;
use crate::models::TokenPair;
use crate::models::auth::{ApiMessage, EmailRequest, ResetPasswordRequest, SigninRequest, SignupRequest};
use crate::token::TokenStore;

use super::client::{ApiClient, HttpClient, HttpRequest};
use super::error::ApiError;

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    /// `POST auth/signin`. The caller inspects the error's code for the
    /// not-activated branch.
    pub async fn signin(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        let body = SigninRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.request(HttpRequest::post(api_url("auth/signin")).with_json(&body)?)
            .await
    }

    /// `POST auth/signup`.
    pub async fn signup(&self, body: &SignupRequest) -> Result<ApiMessage, ApiError> {
        self.request(HttpRequest::post(api_url("auth/signup")).with_json(body)?)
            .await
    }

    /// `DELETE auth/logout`. Best effort; the caller clears tokens anyway.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.authorized_unit(HttpRequest::delete(api_url("auth/logout")))
            .await
    }

    /// `PUT auth/activate-account/:token`.
    pub async fn activate_account(&self, token: &str) -> Result<ApiMessage, ApiError> {
        self.request(HttpRequest::put(api_url(&format!(
            "auth/activate-account/{token}"
        ))))
        .await
    }

    /// `POST auth/resend-verification`.
    pub async fn resend_verification(&self, email: &str) -> Result<ApiMessage, ApiError> {
        let body = EmailRequest {
            email: email.to_string(),
        };
        self.request(HttpRequest::post(api_url("auth/resend-verification")).with_json(&body)?)
            .await
    }

    /// `POST auth/forgot-password`.
    pub async fn forgot_password(&self, email: &str) -> Result<ApiMessage, ApiError> {
        let body = EmailRequest {
            email: email.to_string(),
        };
        self.request(HttpRequest::post(api_url("auth/forgot-password")).with_json(&body)?)
            .await
    }

    /// `PUT auth/reset-password/:token`.
    pub async fn reset_password(
        &self,
        token: &str,
        body: &ResetPasswordRequest,
    ) -> Result<ApiMessage, ApiError> {
        self.request(
            HttpRequest::put(api_url(&format!("auth/reset-password/{token}"))).with_json(body)?,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::config::api_url;

    #[test]
    fn token_paths_embed_the_token() {
        assert!(api_url("auth/activate-account/abc").ends_with("/auth/activate-account/abc"));
        assert!(api_url("auth/reset-password/xyz").ends_with("/auth/reset-password/xyz"));
    }
}
