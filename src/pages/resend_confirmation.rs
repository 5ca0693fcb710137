//! Resend the activation email; the signin page lands here with the email
//! prefilled when the account is not activated yet.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::log::log_error;
use crate::validate;
use crate::web::router::Link;

#[component]
pub fn ResendConfirmationPage(#[prop(optional)] email: Option<String>) -> impl IntoView {
    let email = RwSignal::new(email.unwrap_or_default());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (sent, set_sent) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(message) = validate::validate_email(&email.get()) {
            set_error_msg.set(Some(message));
            return;
        }
        set_submitting.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api().resend_verification(email.get_untracked().trim()).await {
                Ok(_) => set_sent.set(true),
                Err(e) => {
                    log_error!("renvoi de l'email impossible: {e}");
                    set_error_msg.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Email de confirmation"</h1>
                <p class="text-center opacity-70">
                    "Votre compte doit être activé avant la première connexion."
                </p>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <Show
                        when=move || !sent.get()
                        fallback=|| {
                            view! {
                                <div class="card-body text-center">
                                    <p>"Un nouvel email d'activation vient d'être envoyé."</p>
                                    <Link to="/signin" class="btn btn-primary mt-2">"Retour à la connexion"</Link>
                                </div>
                            }
                        }
                    >
                        <form class="card-body" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>
                            <div class="form-control">
                                <label class="label" for="resend-email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="resend-email"
                                    type="email"
                                    class="input input-bordered"
                                    prop:value=email
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control mt-4">
                                <button class="btn btn-primary" disabled=move || submitting.get()>
                                    {move || if submitting.get() { "Envoi..." } else { "Renvoyer l'email" }}
                                </button>
                            </div>
                        </form>
                    </Show>
                </div>
            </div>
        </div>
    }
}
