//! HTTP client wrapper and token-refresh interceptor.
//!
//! Requests are described by [`HttpRequest`] and executed through the
//! [`HttpClient`] trait; production traffic goes through gloo-net, tests
//! script a mock. [`ApiClient::send_authorized`] attaches the bearer token
//! and, on a 401, refreshes the pair and retries the original request
//! exactly once. No backoff, no queuing of concurrent 401s.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config;
use crate::log::log_warn;
use crate::models::TokenPair;
use crate::token::TokenStore;

use super::error::ApiError;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// One part of a multipart body. Parts are kept as descriptors rather than
/// a built `FormData` so a retried request can rebuild its body.
#[derive(Debug, Clone)]
pub enum MultipartPart {
    Text { name: String, value: String },
    File { name: String, file: web_sys::File },
}

impl MultipartPart {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        MultipartPart::Text {
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn file(name: &str, file: web_sys::File) -> Self {
        MultipartPart::File {
            name: name.to_string(),
            file,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum HttpBody {
    #[default]
    Empty,
    Json(String),
    Multipart(Vec<MultipartPart>),
}

/// Request description, cloneable so the interceptor can retry it.
#[derive(Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: HttpBody,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: String) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: HttpBody::Empty,
        }
    }

    pub fn get(url: String) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn post(url: String) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    pub fn put(url: String) -> Self {
        Self::new(HttpMethod::Put, url)
    }

    pub fn patch(url: String) -> Self {
        Self::new(HttpMethod::Patch, url)
    }

    pub fn delete(url: String) -> Self {
        Self::new(HttpMethod::Delete, url)
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    /// Set (or replace) the `Authorization: Bearer ...` header.
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.headers.retain(|(k, _)| k != "Authorization");
        self.headers
            .push(("Authorization".to_string(), format!("Bearer {token}")));
        self
    }

    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = HttpBody::Json(json);
        Ok(self)
    }

    pub fn with_multipart(mut self, parts: Vec<MultipartPart>) -> Self {
        self.body = HttpBody::Multipart(parts);
        self
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == "Authorization")
            .and_then(|(_, v)| v.strip_prefix("Bearer "))
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
    /// Value of the `x-total-count` header, when the endpoint pages.
    pub total_count: Option<u32>,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Production client over the browser fetch API.
#[derive(Clone, Copy, Default)]
pub struct FetchHttpClient;

#[cfg(target_arch = "wasm32")]
fn build_form_data(parts: &[MultipartPart]) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("FormData indisponible".to_string()))?;
    for part in parts {
        let appended = match part {
            MultipartPart::Text { name, value } => form.append_with_str(name, value),
            MultipartPart::File { name, file } => form.append_with_blob(name, file),
        };
        appended.map_err(|_| ApiError::Network("Construction du formulaire impossible".into()))?;
    }
    Ok(form)
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(target_arch = "wasm32")]
        {
            use gloo_net::http::{Method, RequestBuilder};

            let method = match req.method {
                HttpMethod::Get => Method::GET,
                HttpMethod::Post => Method::POST,
                HttpMethod::Put => Method::PUT,
                HttpMethod::Patch => Method::PATCH,
                HttpMethod::Delete => Method::DELETE,
            };
            let mut builder = RequestBuilder::new(&req.url).method(method);
            for (key, value) in &req.headers {
                builder = builder.header(key, value);
            }
            let request = match &req.body {
                HttpBody::Empty => builder.build(),
                HttpBody::Json(json) => builder
                    .header("Content-Type", "application/json")
                    .body(json.clone()),
                // The browser sets the multipart boundary itself.
                HttpBody::Multipart(parts) => builder.body(build_form_data(parts)?),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let total_count = response
                .headers()
                .get("x-total-count")
                .and_then(|v| v.parse().ok());
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(HttpResponse {
                status,
                body,
                total_count,
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = req;
            Err(ApiError::Network(
                "fetch n'est disponible que dans le navigateur".to_string(),
            ))
        }
    }
}

/// API entry point: an [`HttpClient`] plus a [`TokenStore`].
#[derive(Clone, Copy, Default)]
pub struct ApiClient<C: HttpClient, S: TokenStore> {
    http: C,
    tokens: S,
}

/// Client used by the running application.
pub type Api = ApiClient<FetchHttpClient, crate::token::BrowserTokens>;

/// Build the production client. Cheap; pages create one per call site.
pub fn api() -> Api {
    ApiClient::new(FetchHttpClient, crate::token::BrowserTokens)
}

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    pub fn new(http: C, tokens: S) -> Self {
        Self { http, tokens }
    }

    /// Send without touching tokens (signin, signup, password flows).
    pub async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.http.send(req).await
    }

    /// Send with the stored access token attached; on a 401, refresh the
    /// pair and retry the original request exactly once.
    ///
    /// A failed refresh surfaces the original 401 and leaves the stored
    /// tokens in place: clearing the session is an explicit decision taken
    /// by logout or the startup identity check, not by this layer.
    pub async fn send_authorized(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let first = match self.tokens.access_token() {
            Some(token) => req.clone().with_bearer(&token),
            None => req.clone(),
        };
        let response = self.http.send(first).await?;
        if response.status != 401 {
            return Ok(response);
        }

        let Some(refresh) = self.tokens.refresh_token() else {
            return Ok(response);
        };
        let refresh_req =
            HttpRequest::post(config::api_url("auth/refreshToken")).with_bearer(&refresh);
        let refreshed = match self.http.send(refresh_req).await {
            Ok(r) => r,
            Err(e) => {
                log_warn!("refresh du jeton impossible: {e}");
                return Ok(response);
            }
        };
        if !refreshed.ok() {
            return Ok(response);
        }
        let Ok(pair) = refreshed.json::<TokenPair>() else {
            log_warn!("réponse de refresh illisible");
            return Ok(response);
        };
        self.tokens.store(&pair);
        self.http.send(req.with_bearer(&pair.access_token)).await
    }

    fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
        if response.ok() {
            response.json()
        } else {
            Err(ApiError::from_response(&response))
        }
    }

    /// Unauthenticated request expecting a JSON body.
    pub async fn request<T: DeserializeOwned>(&self, req: HttpRequest) -> Result<T, ApiError> {
        Self::decode(self.send(req).await?)
    }

    /// Authenticated request expecting a JSON body.
    pub async fn authorized<T: DeserializeOwned>(&self, req: HttpRequest) -> Result<T, ApiError> {
        Self::decode(self.send_authorized(req).await?)
    }

    /// Authenticated request where only success matters.
    pub async fn authorized_unit(&self, req: HttpRequest) -> Result<(), ApiError> {
        let response = self.send_authorized(req).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::from_response(&response))
        }
    }

    /// Authenticated request keeping the raw response, for endpoints that
    /// page through `x-total-count`.
    pub async fn authorized_raw(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self.send_authorized(req).await?;
        if response.ok() {
            Ok(response)
        } else {
            Err(ApiError::from_response(&response))
        }
    }
}
