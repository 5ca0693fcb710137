//! `participation/*` endpoints for the two dashboards.

use crate::config::api_url;
use crate::models::ParticipationStatus;
use crate::models::participation::{OrganizerRequest, ParticipantRequest, ParticipationDecision};
use crate::token::TokenStore;

use super::client::{ApiClient, HttpClient, HttpRequest};
use super::error::ApiError;

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    /// `GET participation/my-events-requests`: requests received on the
    /// caller's events.
    pub async fn organizer_requests(&self) -> Result<Vec<OrganizerRequest>, ApiError> {
        self.authorized(HttpRequest::get(api_url("participation/my-events-requests")))
            .await
    }

    /// `GET participation/organizer/history/filtered[?status=]`: decided
    /// requests, optionally narrowed to one status.
    pub async fn filtered_history(
        &self,
        status: Option<ParticipationStatus>,
    ) -> Result<Vec<OrganizerRequest>, ApiError> {
        let path = match status {
            Some(status) => format!(
                "participation/organizer/history/filtered?status={}",
                status.as_str()
            ),
            None => "participation/organizer/history/filtered".to_string(),
        };
        self.authorized(HttpRequest::get(api_url(&path))).await
    }

    /// `PATCH participation/accept`.
    pub async fn accept_participation(
        &self,
        decision: &ParticipationDecision,
    ) -> Result<(), ApiError> {
        self.authorized_unit(HttpRequest::patch(api_url("participation/accept")).with_json(decision)?)
            .await
    }

    /// `PATCH participation/reject`.
    pub async fn reject_participation(
        &self,
        decision: &ParticipationDecision,
    ) -> Result<(), ApiError> {
        self.authorized_unit(HttpRequest::patch(api_url("participation/reject")).with_json(decision)?)
            .await
    }

    /// `GET participation/my-requests`: the caller's own reservations.
    pub async fn my_requests(&self) -> Result<Vec<ParticipantRequest>, ApiError> {
        self.authorized(HttpRequest::get(api_url("participation/my-requests")))
            .await
    }
}
