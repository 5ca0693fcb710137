//! Route table.
//!
//! Pure domain logic: no DOM, no web_sys. Each variant knows its path, its
//! guard requirements and whether the navbar/footer chrome shows around it.

use std::fmt::Display;

use crate::auth::AuthState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Home,
    Signin,
    Signup,
    /// Carries the activation token from the email link.
    ActivateAccount(String),
    ForgotPassword,
    /// Carries the reset token from the email link.
    ResetPassword(String),
    /// Optional `?email=` prefill handed over by the signin page.
    ResendConfirmation(Option<String>),
    EventList,
    EventDetail(i64),
    EventCreate,
    EventEdit(i64),
    /// Carries the raw query string, parsed by the page into filters.
    Search(Option<String>),
    MyEvents,
    Category(i64),
    Profile,
    OrganizerDashboard,
    ParticipantDashboard,
    Legal,
    NotFound,
}

impl AppRoute {
    /// Parse a location (`pathname` plus optional `?query`).
    pub fn from_path(location: &str) -> Self {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (location, None),
        };
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["signin"] => Self::Signin,
            ["signup"] => Self::Signup,
            ["activate-account", token] => Self::ActivateAccount((*token).to_string()),
            ["forgot-password"] => Self::ForgotPassword,
            ["reset-password", token] => Self::ResetPassword((*token).to_string()),
            ["resend-confirmation-email"] => {
                let email = query.and_then(|q| {
                    q.split('&').find_map(|pair| {
                        let value = pair.strip_prefix("email=")?;
                        urlencoding::decode(value).ok().map(|v| v.into_owned())
                    })
                });
                Self::ResendConfirmation(email.filter(|e| !e.is_empty()))
            }
            ["eventlist"] => Self::EventList,
            ["event", "edit", id] => match id.parse() {
                Ok(id) => Self::EventEdit(id),
                Err(_) => Self::NotFound,
            },
            ["event", id] => match id.parse() {
                Ok(id) => Self::EventDetail(id),
                Err(_) => Self::NotFound,
            },
            ["eventform"] => Self::EventCreate,
            ["search"] => Self::Search(query.filter(|q| !q.is_empty()).map(str::to_string)),
            ["my-events"] => Self::MyEvents,
            ["category", id] => match id.parse() {
                Ok(id) => Self::Category(id),
                Err(_) => Self::NotFound,
            },
            ["my_profile"] => Self::Profile,
            ["organizer"] => Self::OrganizerDashboard,
            ["participant"] => Self::ParticipantDashboard,
            ["legal"] => Self::Legal,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Signin => "/signin".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::ActivateAccount(token) => format!("/activate-account/{token}"),
            Self::ForgotPassword => "/forgot-password".to_string(),
            Self::ResetPassword(token) => format!("/reset-password/{token}"),
            Self::ResendConfirmation(None) => "/resend-confirmation-email".to_string(),
            Self::ResendConfirmation(Some(email)) => {
                format!("/resend-confirmation-email?email={}", urlencoding::encode(email))
            }
            Self::EventList => "/eventlist".to_string(),
            Self::EventDetail(id) => format!("/event/{id}"),
            Self::EventCreate => "/eventform".to_string(),
            Self::EventEdit(id) => format!("/event/edit/{id}"),
            Self::Search(None) => "/search".to_string(),
            Self::Search(Some(query)) => format!("/search?{query}"),
            Self::MyEvents => "/my-events".to_string(),
            Self::Category(id) => format!("/category/{id}"),
            Self::Profile => "/my_profile".to_string(),
            Self::OrganizerDashboard => "/organizer".to_string(),
            Self::ParticipantDashboard => "/participant".to_string(),
            Self::Legal => "/legal".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::EventCreate
                | Self::EventEdit(_)
                | Self::MyEvents
                | Self::Profile
                | Self::OrganizerDashboard
                | Self::ParticipantDashboard
        )
    }

    /// Organizer space; admins pass the same check.
    pub fn requires_event_management(&self) -> bool {
        matches!(
            self,
            Self::EventCreate | Self::EventEdit(_) | Self::MyEvents | Self::OrganizerDashboard
        )
    }

    /// Auth pages bounce visitors who already have a session.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Signin | Self::Signup)
    }

    /// Auth pages render without the navbar and footer.
    pub fn hides_chrome(&self) -> bool {
        matches!(
            self,
            Self::Signin
                | Self::Signup
                | Self::ActivateAccount(_)
                | Self::ForgotPassword
                | Self::ResetPassword(_)
                | Self::ResendConfirmation(_)
        )
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(AppRoute),
}

/// Guard pipeline: auth check, then role check, then the
/// authenticated-redirect for auth pages.
///
/// While the startup identity check is still loading the navigation is let
/// through; the router re-applies the guards once the state settles.
pub fn resolve_guards(route: &AppRoute, auth: &AuthState) -> GuardDecision {
    if auth.is_loading {
        return GuardDecision::Allow;
    }
    if route.requires_auth() && !auth.is_authenticated {
        return GuardDecision::Redirect(AppRoute::Signin);
    }
    if route.requires_event_management() && !auth.can_manage_events() {
        return GuardDecision::Redirect(AppRoute::Home);
    }
    if route.should_redirect_when_authenticated() && auth.is_authenticated {
        return GuardDecision::Redirect(AppRoute::Home);
    }
    GuardDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn auth(is_authenticated: bool, role: Option<Role>) -> AuthState {
        AuthState {
            is_authenticated,
            is_loading: false,
            firstname: String::new(),
            role,
            avatar_url: None,
        }
    }

    #[test]
    fn static_paths_round_trip() {
        for path in [
            "/",
            "/signin",
            "/signup",
            "/forgot-password",
            "/resend-confirmation-email",
            "/eventlist",
            "/eventform",
            "/search",
            "/my-events",
            "/my_profile",
            "/organizer",
            "/participant",
            "/legal",
        ] {
            let route = AppRoute::from_path(path);
            assert_ne!(route, AppRoute::NotFound, "{path}");
            assert_eq!(route.to_path(), path);
        }
    }

    #[test]
    fn parameterized_paths_round_trip() {
        assert_eq!(AppRoute::from_path("/event/42"), AppRoute::EventDetail(42));
        assert_eq!(AppRoute::EventDetail(42).to_path(), "/event/42");
        assert_eq!(AppRoute::from_path("/event/edit/7"), AppRoute::EventEdit(7));
        assert_eq!(AppRoute::from_path("/category/3"), AppRoute::Category(3));
        assert_eq!(
            AppRoute::from_path("/activate-account/tok-123"),
            AppRoute::ActivateAccount("tok-123".to_string())
        );
        assert_eq!(
            AppRoute::from_path("/reset-password/tok-456").to_path(),
            "/reset-password/tok-456"
        );
    }

    #[test]
    fn resend_confirmation_reads_the_email_prefill() {
        assert_eq!(
            AppRoute::from_path("/resend-confirmation-email"),
            AppRoute::ResendConfirmation(None)
        );
        let route = AppRoute::from_path("/resend-confirmation-email?email=a%40b.fr");
        assert_eq!(route, AppRoute::ResendConfirmation(Some("a@b.fr".into())));
        assert_eq!(route.to_path(), "/resend-confirmation-email?email=a%40b.fr");
    }

    #[test]
    fn search_keeps_its_query_string() {
        let route = AppRoute::from_path("/search?term=jazz&city=Lyon");
        assert_eq!(route, AppRoute::Search(Some("term=jazz&city=Lyon".into())));
        assert_eq!(route.to_path(), "/search?term=jazz&city=Lyon");
        assert_eq!(AppRoute::from_path("/search?"), AppRoute::Search(None));
    }

    #[test]
    fn bad_ids_and_unknown_paths_fall_through() {
        assert_eq!(AppRoute::from_path("/event/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/event/edit/x"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/event"), AppRoute::NotFound);
    }

    #[test]
    fn trailing_slashes_are_tolerated() {
        assert_eq!(AppRoute::from_path("/eventlist/"), AppRoute::EventList);
        assert_eq!(AppRoute::from_path("/event/42/"), AppRoute::EventDetail(42));
    }

    #[test]
    fn guard_flags_cover_the_private_space() {
        assert!(AppRoute::EventCreate.requires_auth());
        assert!(AppRoute::EventEdit(1).requires_event_management());
        assert!(AppRoute::MyEvents.requires_event_management());
        assert!(AppRoute::OrganizerDashboard.requires_event_management());
        assert!(AppRoute::ParticipantDashboard.requires_auth());
        assert!(!AppRoute::ParticipantDashboard.requires_event_management());
        assert!(!AppRoute::EventDetail(1).requires_auth());
        assert!(!AppRoute::Home.requires_auth());
    }

    #[test]
    fn chrome_hides_on_auth_pages_only() {
        assert!(AppRoute::Signin.hides_chrome());
        assert!(AppRoute::ResetPassword("t".into()).hides_chrome());
        assert!(!AppRoute::Home.hides_chrome());
        assert!(!AppRoute::EventList.hides_chrome());
    }

    #[test]
    fn unauthenticated_visitors_are_sent_to_signin() {
        let decision = resolve_guards(&AppRoute::MyEvents, &auth(false, None));
        assert_eq!(decision, GuardDecision::Redirect(AppRoute::Signin));
        assert_eq!(
            resolve_guards(&AppRoute::EventList, &auth(false, None)),
            GuardDecision::Allow
        );
    }

    #[test]
    fn participants_cannot_enter_the_organizer_space() {
        let participant = auth(true, Some(Role::Participant));
        assert_eq!(
            resolve_guards(&AppRoute::EventCreate, &participant),
            GuardDecision::Redirect(AppRoute::Home)
        );
        assert_eq!(
            resolve_guards(&AppRoute::ParticipantDashboard, &participant),
            GuardDecision::Allow
        );
    }

    #[test]
    fn organizers_and_admins_pass_the_role_check() {
        for role in [Role::Organizer, Role::Admin] {
            assert_eq!(
                resolve_guards(&AppRoute::OrganizerDashboard, &auth(true, Some(role))),
                GuardDecision::Allow
            );
        }
    }

    #[test]
    fn authenticated_visitors_leave_the_auth_pages() {
        let signed_in = auth(true, Some(Role::Participant));
        assert_eq!(
            resolve_guards(&AppRoute::Signin, &signed_in),
            GuardDecision::Redirect(AppRoute::Home)
        );
        assert_eq!(
            resolve_guards(&AppRoute::Signup, &signed_in),
            GuardDecision::Redirect(AppRoute::Home)
        );
    }

    #[test]
    fn guards_defer_while_the_startup_check_is_loading() {
        let loading = AuthState {
            is_loading: true,
            ..AuthState::default()
        };
        assert_eq!(
            resolve_guards(&AppRoute::MyEvents, &loading),
            GuardDecision::Allow
        );
    }
}
