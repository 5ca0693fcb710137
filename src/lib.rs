//! Joinly frontend.
//!
//! Context-driven layout:
//! - `web::route` / `web::router`: route table and history-API router
//! - `auth`: session state behind the guards
//! - `api`: typed backend client with the token-refresh interceptor
//! - `components` / `pages`: UI layer

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod date;
pub mod log;
pub mod models;
pub mod pages;
pub mod token;
pub mod validate;
pub mod web;

use leptos::prelude::*;

use crate::auth::{AuthContext, init_auth};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::activate_account::ActivateAccountPage;
use crate::pages::category::CategoryPage;
use crate::pages::event_create::EventCreatePage;
use crate::pages::event_detail::EventDetailPage;
use crate::pages::event_edit::EventEditPage;
use crate::pages::event_list::EventListPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::home::HomePage;
use crate::pages::legal::LegalPage;
use crate::pages::my_events::MyEventsPage;
use crate::pages::organizer::OrganizerDashboardPage;
use crate::pages::participant::ParticipantDashboardPage;
use crate::pages::profile::ProfilePage;
use crate::pages::resend_confirmation::ResendConfirmationPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::search::SearchPage;
use crate::pages::signin::SigninPage;
use crate::pages::signup::SignupPage;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet, use_router};

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Signin => view! { <SigninPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::ActivateAccount(token) => {
            view! { <ActivateAccountPage token=token /> }.into_any()
        }
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        AppRoute::ResetPassword(token) => view! { <ResetPasswordPage token=token /> }.into_any(),
        AppRoute::ResendConfirmation(None) => view! { <ResendConfirmationPage /> }.into_any(),
        AppRoute::ResendConfirmation(Some(email)) => {
            view! { <ResendConfirmationPage email=email /> }.into_any()
        }
        AppRoute::EventList => view! { <EventListPage /> }.into_any(),
        AppRoute::EventDetail(id) => view! { <EventDetailPage id=id /> }.into_any(),
        AppRoute::EventCreate => view! { <EventCreatePage /> }.into_any(),
        AppRoute::EventEdit(id) => view! { <EventEditPage id=id /> }.into_any(),
        AppRoute::Search(None) => view! { <SearchPage /> }.into_any(),
        AppRoute::Search(Some(query)) => view! { <SearchPage query=query /> }.into_any(),
        AppRoute::MyEvents => view! { <MyEventsPage /> }.into_any(),
        AppRoute::Category(id) => view! { <CategoryPage id=id /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::OrganizerDashboard => view! { <OrganizerDashboardPage /> }.into_any(),
        AppRoute::ParticipantDashboard => view! { <ParticipantDashboardPage /> }.into_any(),
        AppRoute::Legal => view! { <LegalPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page introuvable"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// Page body with the navbar and footer, hidden on the auth pages.
#[component]
fn Chrome() -> impl IntoView {
    let router = use_router();
    let with_chrome = Signal::derive(move || !router.current_route().get().hides_chrome());

    view! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <Show when=move || with_chrome.get()>
                <Navbar />
            </Show>
            <main class="grow">
                <RouterOutlet matcher=route_matcher />
            </main>
            <Show when=move || with_chrome.get()>
                <Footer />
            </Show>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // Startup identity check; the guards defer until it settles.
    init_auth(&auth_ctx);

    view! {
        <Router auth=auth_ctx.state_signal()>
            <Chrome />
        </Router>
    }
}
