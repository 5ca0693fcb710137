//! Session state.
//!
//! The router only ever sees the [`AuthState`] signal; everything that
//! mutates it lives here. The startup check and signin both load the basic
//! profile through the interceptor, so an expired access token is silently
//! refreshed before the app decides the visitor is signed out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::api::client::HttpRequest;
use crate::config::{api_url, media_url};
use crate::log::log_warn;
use crate::models::profile::BasicProfile;
use crate::models::{Role, TokenPair};
use crate::token::{BrowserTokens, TokenStore};

#[derive(Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    /// True while the startup identity check is in flight. Route guards
    /// hold off until this settles.
    pub is_loading: bool,
    pub firstname: String,
    pub role: Option<Role>,
    pub avatar_url: Option<String>,
}

impl AuthState {
    fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    fn signed_out() -> Self {
        Self::default()
    }

    fn signed_in(profile: BasicProfile) -> Self {
        Self {
            is_authenticated: true,
            is_loading: false,
            firstname: profile.firstname,
            role: Some(profile.role),
            avatar_url: profile.profile_img.map(|img| media_url(&img)),
        }
    }

    pub fn can_manage_events(&self) -> bool {
        self.role.is_some_and(|r| r.can_manage_events())
    }
}

/// Read/write signal pair shared through the component tree.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::loading());
        Self { state, set_state }
    }

    /// Snapshot signal injected into the router for its guards.
    pub fn state_signal(&self) -> Signal<AuthState> {
        self.state.into()
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided at the app root")
}

/// Startup check. With no stored token the visitor is signed out at once;
/// otherwise the basic profile decides, and a failed check clears the
/// stored pair.
pub fn init_auth(ctx: &AuthContext) {
    let set_state = ctx.set_state;
    if BrowserTokens.access_token().is_none() {
        set_state.set(AuthState::signed_out());
        return;
    }
    spawn_local(async move {
        match api().basic_profile().await {
            Ok(profile) => set_state.set(AuthState::signed_in(profile)),
            Err(e) => {
                log_warn!("session invalide au démarrage: {e}");
                BrowserTokens.clear();
                set_state.set(AuthState::signed_out());
            }
        }
    });
}

/// Store a fresh token pair (from signin) and load the identity behind it.
pub async fn establish_session(ctx: AuthContext, pair: TokenPair) {
    BrowserTokens.store(&pair);
    match api().basic_profile().await {
        Ok(profile) => ctx.set_state.set(AuthState::signed_in(profile)),
        Err(e) => {
            // The pair is valid (it was just issued); keep the session and
            // let the navbar render without an identity.
            log_warn!("profil indisponible après connexion: {e}");
            ctx.set_state.set(AuthState {
                is_authenticated: true,
                is_loading: false,
                ..AuthState::default()
            });
        }
    }
}

/// Fire-and-forget server-side logout, then local reset. Redirecting is the
/// router's job, via its auth-change effect.
pub fn logout(ctx: &AuthContext) {
    let request = HttpRequest::delete(api_url("auth/logout"));
    let request = match BrowserTokens.access_token() {
        Some(token) => request.with_bearer(&token),
        None => request,
    };
    spawn_local(async move {
        if let Err(e) = api().send(request).await {
            log_warn!("déconnexion côté serveur ignorée: {e}");
        }
    });
    BrowserTokens.clear();
    ctx.set_state.set(AuthState::signed_out());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_in_state_resolves_avatar_through_media_base() {
        let state = AuthState::signed_in(BasicProfile {
            firstname: "Marie".into(),
            role: Role::Organizer,
            profile_img: Some("avatar.png".into()),
        });
        assert!(state.is_authenticated);
        assert!(!state.is_loading);
        assert!(
            state
                .avatar_url
                .as_deref()
                .unwrap()
                .ends_with("/media/uploads/avatar.png")
        );
        assert!(state.can_manage_events());
    }

    #[test]
    fn participants_do_not_manage_events() {
        let state = AuthState::signed_in(BasicProfile {
            firstname: "Paul".into(),
            role: Role::Participant,
            profile_img: None,
        });
        assert!(!state.can_manage_events());
        assert!(state.avatar_url.is_none());
    }

    #[test]
    fn default_state_is_signed_out_and_settled() {
        let state = AuthState::signed_out();
        assert!(!state.is_authenticated);
        assert!(!state.is_loading);
        assert!(!state.can_manage_events());
    }
}
