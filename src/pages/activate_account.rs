//! Account activation landing page, reached from the email link.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::log::log_error;
use crate::web::router::Link;

#[derive(Clone, PartialEq)]
enum ActivationState {
    Pending,
    Success,
    /// The link expired; the backend told us which email to resend to.
    Expired(Option<String>),
    Failed(String),
}

#[component]
pub fn ActivateAccountPage(token: String) -> impl IntoView {
    let (state, set_state) = signal(ActivationState::Pending);
    let (resent, set_resent) = signal(false);

    Effect::new({
        let token = token.clone();
        move |_| {
            let token = token.clone();
            spawn_local(async move {
                match api().activate_account(&token).await {
                    Ok(_) => set_state.set(ActivationState::Success),
                    Err(e) if e.code() == Some("TOKEN_EXPIRED") => {
                        set_state.set(ActivationState::Expired(e.email().map(str::to_string)));
                    }
                    Err(e) => {
                        log_error!("activation impossible: {e}");
                        set_state.set(ActivationState::Failed(e.to_string()));
                    }
                }
            });
        }
    });

    let resend = move |email: String| {
        spawn_local(async move {
            match api().resend_verification(&email).await {
                Ok(_) => set_resent.set(true),
                Err(e) => log_error!("renvoi de l'email impossible: {e}"),
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md text-center">
                <div class="card w-full shadow-2xl bg-base-100">
                    <div class="card-body">
                        {move || match state.get() {
                            ActivationState::Pending => view! {
                                <span class="loading loading-spinner loading-lg mx-auto"></span>
                                <p>"Activation du compte en cours..."</p>
                            }
                            .into_any(),
                            ActivationState::Success => view! {
                                <h2 class="card-title justify-center">"Compte activé !"</h2>
                                <p>"Vous pouvez maintenant vous connecter."</p>
                                <Link to="/signin" class="btn btn-primary mt-2">"Se connecter"</Link>
                            }
                            .into_any(),
                            ActivationState::Expired(email) => view! {
                                <h2 class="card-title justify-center">"Lien expiré"</h2>
                                <p>"Ce lien d'activation n'est plus valide."</p>
                                {match email {
                                    Some(email) if !resent.get() => view! {
                                        <button
                                            class="btn btn-primary mt-2"
                                            on:click=move |_| resend(email.clone())
                                        >
                                            "Renvoyer l'email d'activation"
                                        </button>
                                    }
                                    .into_any(),
                                    Some(_) => view! {
                                        <p class="text-success">"Un nouvel email vient d'être envoyé."</p>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <Link to="/resend-confirmation-email" class="btn btn-primary mt-2">
                                            "Demander un nouvel email"
                                        </Link>
                                    }
                                    .into_any(),
                                }}
                            }
                            .into_any(),
                            ActivationState::Failed(message) => view! {
                                <h2 class="card-title justify-center text-error">"Activation impossible"</h2>
                                <p>{message}</p>
                                <Link to="/" class="btn mt-2">"Retour à l'accueil"</Link>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
