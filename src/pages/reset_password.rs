use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::log::log_error;
use crate::models::auth::ResetPasswordRequest;
use crate::validate;
use crate::web::router::Link;

#[component]
pub fn ResetPasswordPage(token: String) -> impl IntoView {
    // Copyable handle so the submit handler stays reusable.
    let token = StoredValue::new(token);
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (done, set_done) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let check = validate::validate_password(&password.get()).and_then(|()| {
            validate::validate_password_confirmation(&password.get(), &confirm.get())
        });
        if let Err(message) = check {
            set_error_msg.set(Some(message));
            return;
        }
        set_submitting.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            let body = ResetPasswordRequest {
                new_password: password.get_untracked(),
                repeat_new_password: confirm.get_untracked(),
            };
            match api().reset_password(&token.get_value(), &body).await {
                Ok(_) => set_done.set(true),
                Err(e) => {
                    log_error!("réinitialisation impossible: {e}");
                    set_error_msg.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Nouveau mot de passe"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <Show
                        when=move || !done.get()
                        fallback=|| {
                            view! {
                                <div class="card-body text-center">
                                    <p>"Votre mot de passe a été mis à jour."</p>
                                    <Link to="/signin" class="btn btn-primary mt-2">"Se connecter"</Link>
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
                                <label class="label" for="reset-password">
                                    <span class="label-text">"Nouveau mot de passe"</span>
                                </label>
                                <input
                                    id="reset-password"
                                    type="password"
                                    class="input input-bordered"
                                    prop:value=password
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="reset-confirm">
                                    <span class="label-text">"Confirmation"</span>
                                </label>
                                <input
                                    id="reset-confirm"
                                    type="password"
                                    class="input input-bordered"
                                    prop:value=confirm
                                    on:input=move |ev| confirm.set(event_target_value(&ev))
                                    required
                                />
                            </div>
                            <div class="form-control mt-4">
                                <button class="btn btn-primary" disabled=move || submitting.get()>
                                    {move || if submitting.get() { "Mise à jour..." } else { "Mettre à jour" }}
                                </button>
                            </div>
                        </form>
                    </Show>
                </div>
            </div>
        </div>
    }
}
