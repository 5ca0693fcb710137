//! History-API router.
//!
//! All `window.history` access is concentrated here. Navigation follows a
//! request → guard → load flow; the same guards run again on popstate and
//! whenever the injected auth signal changes.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::auth::AuthState;
use crate::log::log_info;

use super::route::{AppRoute, GuardDecision, resolve_guards};

/// Current `pathname` plus `?query`, so query-carrying routes survive.
fn current_location() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    match location.search() {
        Ok(search) if !search.is_empty() => format!("{path}{search}"),
        _ => path,
    }
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router service, shared through context. Signal-driven; the auth state
/// is injected so this module never touches the auth machinery directly.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    auth: Signal<AuthState>,
}

impl RouterService {
    fn new(auth: Signal<AuthState>) -> Self {
        let initial = AppRoute::from_path(&current_location());
        let (current_route, set_route) = signal(initial);
        Self {
            current_route,
            set_route,
            auth,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigate with the guard pipeline applied.
    pub fn navigate(&self, route: AppRoute) {
        self.apply(route, true);
    }

    pub fn navigate_path(&self, path: &str) {
        self.navigate(AppRoute::from_path(path));
    }

    fn apply(&self, target: AppRoute, use_push: bool) {
        let auth = self.auth.get_untracked();
        let route = match resolve_guards(&target, &auth) {
            GuardDecision::Allow => target,
            GuardDecision::Redirect(redirect) => {
                log_info!("[router] {} refusé, redirection vers {}", target, redirect);
                redirect
            }
        };
        if use_push {
            push_history_state(&route.to_path());
        } else {
            replace_history_state(&route.to_path());
        }
        self.set_route.set(route);
    }

    /// Back/forward buttons run through the same guards, replacing instead
    /// of pushing so history stays linear.
    fn init_popstate_listener(&self) {
        let service = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            service.apply(AppRoute::from_path(&current_location()), false);
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }
        // Keep the listener alive for the app's lifetime.
        closure.forget();
    }

    /// Re-apply the guards whenever the auth state settles or changes:
    /// a logout on a private page bounces to signin, a login on an auth
    /// page bounces home, and navigations deferred during the startup
    /// check get their verdict.
    fn setup_auth_effect(&self) {
        let service = *self;
        let auth = self.auth;
        Effect::new(move |_| {
            let state = auth.get();
            if state.is_loading {
                return;
            }
            let route = service.current_route.get_untracked();
            if let GuardDecision::Redirect(redirect) = resolve_guards(&route, &state) {
                log_info!("[router] état de session changé, redirection vers {redirect}");
                push_history_state(&redirect.to_path());
                service.set_route.set(redirect);
            }
        });
    }
}

fn provide_router(auth: Signal<AuthState>) -> RouterService {
    let router = RouterService::new(auth);
    router.init_popstate_listener();
    router.setup_auth_effect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>().expect("RouterService should be provided by <Router>")
}

/// Root component providing the router context.
#[component]
pub fn Router(
    /// Auth snapshot signal driving the guards.
    auth: Signal<AuthState>,
    children: Children,
) -> impl IntoView {
    provide_router(auth);
    children()
}

/// Renders the view matched to the current route.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    move || matcher(router.current_route().get())
}

/// Anchor that navigates through the router instead of reloading.
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_path(&to);
    };
    view! {
        <a href=href class=class.unwrap_or_default() on:click=on_click>
            {children()}
        </a>
    }
}
