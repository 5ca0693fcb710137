//! Signin page. A not-activated account branches to the resend page with
//! the email carried along.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::auth::{establish_session, use_auth};
use crate::log::log_error;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

#[component]
pub fn SigninPage() -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Veuillez remplir tous les champs".to_string()));
            return;
        }
        set_submitting.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api().signin(email.get().trim(), &password.get()).await {
                Ok(pair) => {
                    establish_session(ctx, pair).await;
                    router.navigate(AppRoute::Home);
                }
                Err(e) if e.code() == Some("ACCOUNT_NOT_ACTIVATED") => {
                    let prefill = e
                        .email()
                        .map(str::to_string)
                        .or_else(|| Some(email.get_untracked().trim().to_string()));
                    router.navigate(AppRoute::ResendConfirmation(prefill));
                }
                Err(e) => {
                    log_error!("connexion refusée: {e}");
                    set_error_msg.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Connexion"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <div class="form-control">
                            <label class="label" for="signin-email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="signin-email"
                                type="email"
                                class="input input-bordered"
                                prop:value=email
                                on:input=move |ev| email.set(event_target_value(&ev))
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="signin-password">
                                <span class="label-text">"Mot de passe"</span>
                            </label>
                            <input
                                id="signin-password"
                                type="password"
                                class="input input-bordered"
                                prop:value=password
                                on:input=move |ev| password.set(event_target_value(&ev))
                                required
                            />
                            <Link to="/forgot-password" class="label-text-alt link link-hover mt-1">
                                "Mot de passe oublié ?"
                            </Link>
                        </div>
                        <div class="form-control mt-4">
                            <button class="btn btn-primary" disabled=move || submitting.get()>
                                {move || if submitting.get() { "Connexion..." } else { "Se connecter" }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "Pas encore de compte ? "
                            <Link to="/signup" class="link link-primary">"S'inscrire"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
