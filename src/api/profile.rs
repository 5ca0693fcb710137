//! `profile/*` endpoints.

use crate::config::api_url;
use crate::models::Role;
use crate::models::profile::{BasicProfile, ChangeEmailRequest, ChangePasswordRequest, UserProfile};
use crate::token::TokenStore;

use super::client::{ApiClient, HttpClient, HttpRequest, MultipartPart};
use super::error::ApiError;

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    /// `GET profile/basic`: the session identity. This is the call the
    /// startup check rides through the interceptor.
    pub async fn basic_profile(&self) -> Result<BasicProfile, ApiError> {
        self.authorized(HttpRequest::get(api_url("profile/basic")))
            .await
    }

    /// `GET profile`.
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.authorized(HttpRequest::get(api_url("profile"))).await
    }

    /// `PUT profile`, multipart: names, role, optional new avatar.
    pub async fn update_profile(
        &self,
        firstname: &str,
        lastname: &str,
        role: Role,
        image: Option<web_sys::File>,
    ) -> Result<(), ApiError> {
        let mut parts = vec![
            MultipartPart::text("firstname", firstname),
            MultipartPart::text("lastname", lastname),
            MultipartPart::text("role", role.as_str()),
        ];
        if let Some(file) = image {
            parts.push(MultipartPart::file("image", file));
        }
        self.authorized_unit(HttpRequest::put(api_url("profile")).with_multipart(parts))
            .await
    }

    /// `PUT profile/change-password`.
    pub async fn change_password(&self, body: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.authorized_unit(HttpRequest::put(api_url("profile/change-password")).with_json(body)?)
            .await
    }

    /// `PUT profile/change-email`.
    pub async fn change_email(&self, body: &ChangeEmailRequest) -> Result<(), ApiError> {
        self.authorized_unit(HttpRequest::put(api_url("profile/change-email")).with_json(body)?)
            .await
    }

    /// `DELETE profile`.
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.authorized_unit(HttpRequest::delete(api_url("profile")))
            .await
    }
}
