//! Application configuration.
//!
//! The backend base URL can be baked in at compile time via the
//! `API_BASE_URL` environment variable; otherwise the local development
//! default applies.

/// Default backend root used when no `API_BASE_URL` is provided at build time.
const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Events fetched per page on list screens.
pub const EVENTS_PAGE_SIZE: u32 = 9;

/// Maximum accepted size for an uploaded event or profile image, in bytes.
pub const MAX_IMAGE_SIZE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Backend root URL, without a trailing slash.
pub fn api_base_url() -> &'static str {
    option_env!("API_BASE_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
}

/// Join an endpoint path onto the backend root.
pub fn api_url(path: &str) -> String {
    format!("{}/{}", api_base_url(), path.trim_start_matches('/'))
}

/// Public URL of an uploaded media file, from the filename the backend stores.
pub fn media_url(img: &str) -> String {
    format!("{}/media/uploads/{}", api_base_url(), img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_with_single_slash() {
        let base = api_base_url();
        assert!(!base.ends_with('/'));
        assert_eq!(api_url("auth/signin"), format!("{base}/auth/signin"));
        assert_eq!(api_url("/auth/signin"), format!("{base}/auth/signin"));
    }

    #[test]
    fn media_url_points_into_uploads() {
        assert!(media_url("a.png").ends_with("/media/uploads/a.png"));
    }
}
