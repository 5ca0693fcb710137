//! Interceptor and route suite: scripted mock client + in-memory token
//! store, also used to pin the endpoint paths to the backend's routes.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::*;
use crate::models::event::PersonalNote;
use crate::models::profile::ChangePasswordRequest;
use crate::models::{ParticipationStatus, Role};

/// Replays a scripted sequence of responses and records every request.
struct MockHttpClient {
    responses: RefCell<VecDeque<HttpResponse>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockHttpClient {
    fn new() -> Self {
        Self {
            responses: RefCell::new(VecDeque::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn script(&self, status: u16, body: serde_json::Value) {
        self.responses.borrow_mut().push_back(HttpResponse {
            status,
            body: body.to_string(),
            total_count: None,
        });
    }

    fn script_raw(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(HttpResponse {
            status,
            body: body.to_string(),
            total_count: None,
        });
    }

    fn sent(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for &MockHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(req);
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ApiError::Network("script épuisé".to_string()))
    }
}

#[derive(Default)]
struct MemoryTokens {
    access: RefCell<Option<String>>,
    refresh: RefCell<Option<String>>,
}

impl MemoryTokens {
    fn with(access: &str, refresh: &str) -> Self {
        Self {
            access: RefCell::new(Some(access.to_string())),
            refresh: RefCell::new(Some(refresh.to_string())),
        }
    }
}

impl TokenStore for &MemoryTokens {
    fn access_token(&self) -> Option<String> {
        self.access.borrow().clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.refresh.borrow().clone()
    }

    fn store(&self, pair: &TokenPair) {
        *self.access.borrow_mut() = Some(pair.access_token.clone());
        *self.refresh.borrow_mut() = Some(pair.refresh_token.clone());
    }

    fn clear(&self) {
        *self.access.borrow_mut() = None;
        *self.refresh.borrow_mut() = None;
    }
}

fn client<'a>(
    http: &'a MockHttpClient,
    tokens: &'a MemoryTokens,
) -> ApiClient<&'a MockHttpClient, &'a MemoryTokens> {
    ApiClient::new(http, tokens)
}

#[tokio::test]
async fn attaches_bearer_when_a_token_is_stored() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::with("access-1", "refresh-1");
    http.script(200, serde_json::json!({"ok": true}));

    let res = client(&http, &tokens)
        .send_authorized(HttpRequest::get("http://api/event".into()))
        .await
        .unwrap();

    assert_eq!(res.status, 200);
    let sent = http.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].bearer_token(), Some("access-1"));
}

#[tokio::test]
async fn sends_without_bearer_when_no_token_is_stored() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::default();
    http.script(200, serde_json::json!([]));

    client(&http, &tokens)
        .send_authorized(HttpRequest::get("http://api/event".into()))
        .await
        .unwrap();

    assert_eq!(http.sent()[0].bearer_token(), None);
}

#[tokio::test]
async fn non_401_failures_pass_through_untouched() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::with("access-1", "refresh-1");
    http.script(500, serde_json::json!({"message": "boom"}));

    let res = client(&http, &tokens)
        .send_authorized(HttpRequest::get("http://api/event".into()))
        .await
        .unwrap();

    assert_eq!(res.status, 500);
    assert_eq!(http.sent().len(), 1);
}

#[tokio::test]
async fn refreshes_and_retries_exactly_once_on_401() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::with("stale", "refresh-1");
    http.script(401, serde_json::json!({"message": "expiré"}));
    http.script(
        200,
        serde_json::json!({"accessToken": "fresh", "refreshToken": "refresh-2"}),
    );
    http.script(200, serde_json::json!({"ok": true}));

    let res = client(&http, &tokens)
        .send_authorized(HttpRequest::get("http://api/profile".into()))
        .await
        .unwrap();

    assert_eq!(res.status, 200);
    let sent = http.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0].bearer_token(), Some("stale"));
    // The refresh call carries the refresh token as bearer, empty body.
    assert_eq!(sent[1].method, HttpMethod::Post);
    assert!(sent[1].url.ends_with("auth/refreshToken"));
    assert_eq!(sent[1].bearer_token(), Some("refresh-1"));
    assert!(matches!(sent[1].body, HttpBody::Empty));
    // The retry targets the original URL with the new access token.
    assert_eq!(sent[2].url, "http://api/profile");
    assert_eq!(sent[2].bearer_token(), Some("fresh"));
    // And the new pair was persisted.
    assert_eq!(tokens.access.borrow().as_deref(), Some("fresh"));
    assert_eq!(tokens.refresh.borrow().as_deref(), Some("refresh-2"));
}

#[tokio::test]
async fn returns_the_401_when_no_refresh_token_exists() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::default();
    *tokens.access.borrow_mut() = Some("stale".to_string());
    http.script(401, serde_json::json!({"message": "expiré"}));

    let res = client(&http, &tokens)
        .send_authorized(HttpRequest::get("http://api/profile".into()))
        .await
        .unwrap();

    assert_eq!(res.status, 401);
    assert_eq!(http.sent().len(), 1);
}

#[tokio::test]
async fn failed_refresh_surfaces_the_original_401_and_keeps_tokens() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::with("stale", "refresh-1");
    http.script(401, serde_json::json!({"message": "expiré"}));
    http.script(401, serde_json::json!({"message": "refresh expiré"}));

    let res = client(&http, &tokens)
        .send_authorized(HttpRequest::get("http://api/profile".into()))
        .await
        .unwrap();

    assert_eq!(res.status, 401);
    assert_eq!(http.sent().len(), 2);
    // Tokens are cleared by logout or the startup check, never here.
    assert_eq!(tokens.access.borrow().as_deref(), Some("stale"));
    assert_eq!(tokens.refresh.borrow().as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn unreadable_refresh_body_surfaces_the_original_401() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::with("stale", "refresh-1");
    http.script(401, serde_json::json!({"message": "expiré"}));
    http.script_raw(200, "not json at all");

    let res = client(&http, &tokens)
        .send_authorized(HttpRequest::get("http://api/profile".into()))
        .await
        .unwrap();

    assert_eq!(res.status, 401);
    assert_eq!(http.sent().len(), 2);
}

#[tokio::test]
async fn authorized_maps_failures_to_server_errors() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::with("access-1", "refresh-1");
    http.script(
        404,
        serde_json::json!({"message": "Événement introuvable"}),
    );

    let err = client(&http, &tokens)
        .authorized::<serde_json::Value>(HttpRequest::get("http://api/event/9".into()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Événement introuvable");
}

#[tokio::test]
async fn participation_count_reads_the_event_scoped_route() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::with("a", "r");
    http.script(200, serde_json::json!({"count": 4}));

    let count = client(&http, &tokens).participation_count(7).await.unwrap();

    assert_eq!(count, 4);
    let sent = http.sent();
    assert_eq!(sent[0].method, HttpMethod::Get);
    assert!(sent[0].url.ends_with("/event/7/participation-count"));
}

#[tokio::test]
async fn publish_toggle_patches_the_publishing_route() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::with("a", "r");
    http.script(200, serde_json::json!({}));

    client(&http, &tokens).set_published(7, true).await.unwrap();

    let sent = http.sent();
    assert_eq!(sent[0].method, HttpMethod::Patch);
    assert!(sent[0].url.ends_with("/event/7/publishing"));
    match &sent[0].body {
        HttpBody::Json(json) => assert!(json.contains("\"isPublished\":true")),
        other => panic!("corps inattendu: {other:?}"),
    }
}

#[tokio::test]
async fn personal_note_rides_the_event_scoped_routes() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::with("a", "r");
    http.script(
        200,
        serde_json::json!({"id": 1, "userId": 3, "eventId": 7, "content": "x"}),
    );
    http.script(404, serde_json::json!({"message": "pas de note"}));
    http.script(200, serde_json::json!({}));

    let api = client(&http, &tokens);
    let note = api.personal_note(7, 3).await.unwrap().unwrap();
    assert_eq!(note.content, "x");
    assert!(api.personal_note(8, 3).await.unwrap().is_none());
    api.save_personal_note(&PersonalNote {
        id: None,
        user_id: 3,
        event_id: 7,
        content: "y".into(),
    })
    .await
    .unwrap();

    let sent = http.sent();
    assert!(sent[0].url.ends_with("/event/7/personal-note?userId=3"));
    assert!(sent[1].url.ends_with("/event/8/personal-note?userId=3"));
    assert_eq!(sent[2].method, HttpMethod::Post);
    assert!(sent[2].url.ends_with("/event/7/personal-note"));
}

#[tokio::test]
async fn my_events_passes_page_and_limit() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::with("a", "r");
    http.script(200, serde_json::json!([]));

    let (items, total) = client(&http, &tokens).my_events(3, 2, 9).await.unwrap();

    assert!(items.is_empty());
    assert_eq!(total, 0);
    assert!(http.sent()[0].url.ends_with("/event/user/3?page=2&limit=9"));
}

#[tokio::test]
async fn organizer_requests_and_history_use_their_own_routes() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::with("a", "r");
    http.script(200, serde_json::json!([]));
    http.script(200, serde_json::json!([]));
    http.script(200, serde_json::json!([]));

    let api = client(&http, &tokens);
    api.organizer_requests().await.unwrap();
    api.filtered_history(None).await.unwrap();
    api.filtered_history(Some(ParticipationStatus::Accepted))
        .await
        .unwrap();

    let sent = http.sent();
    assert!(sent[0].url.ends_with("/participation/my-events-requests"));
    assert!(
        sent[1]
            .url
            .ends_with("/participation/organizer/history/filtered")
    );
    assert!(
        sent[2]
            .url
            .ends_with("/participation/organizer/history/filtered?status=ACCEPTED")
    );
}

#[tokio::test]
async fn profile_changes_go_through_put() {
    let http = MockHttpClient::new();
    let tokens = MemoryTokens::with("a", "r");
    http.script(200, serde_json::json!({}));
    http.script(200, serde_json::json!({}));

    let api = client(&http, &tokens);
    api.update_profile("Ana", "Blanc", Role::Participant, None)
        .await
        .unwrap();
    api.change_password(&ChangePasswordRequest {
        old_password: "old".into(),
        new_password: "new".into(),
    })
    .await
    .unwrap();

    let sent = http.sent();
    assert_eq!(sent[0].method, HttpMethod::Put);
    assert!(sent[0].url.ends_with("/profile"));
    match &sent[0].body {
        HttpBody::Multipart(parts) => {
            let names: Vec<&str> = parts
                .iter()
                .map(|p| match p {
                    MultipartPart::Text { name, .. } => name.as_str(),
                    MultipartPart::File { name, .. } => name.as_str(),
                })
                .collect();
            assert_eq!(names, ["firstname", "lastname", "role"]);
        }
        other => panic!("corps inattendu: {other:?}"),
    }
    assert_eq!(sent[1].method, HttpMethod::Put);
    assert!(sent[1].url.ends_with("/profile/change-password"));
}

#[tokio::test]
async fn with_bearer_replaces_any_previous_authorization() {
    let req = HttpRequest::get("http://api/x".into())
        .with_bearer("one")
        .with_bearer("two");
    assert_eq!(req.bearer_token(), Some("two"));
    assert_eq!(
        req.headers
            .iter()
            .filter(|(k, _)| k == "Authorization")
            .count(),
        1
    );
}
