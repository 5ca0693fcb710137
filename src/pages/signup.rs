//! Signup page: role choice, schema validation, then a check-your-inbox
//! panel instead of an immediate session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::log::log_error;
use crate::models::Role;
use crate::models::auth::SignupRequest;
use crate::validate;
use crate::web::router::Link;

#[derive(Clone, Copy, Default)]
struct SignupErrors {
    firstname: RwSignal<Option<String>>,
    lastname: RwSignal<Option<String>>,
    email: RwSignal<Option<String>>,
    password: RwSignal<Option<String>>,
    confirm: RwSignal<Option<String>>,
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Participant);
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = SignupErrors::default();

    let (submitting, set_submitting) = signal(false);
    let (server_error, set_server_error) = signal(Option::<String>::None);
    let (registered, set_registered) = signal(false);

    let validate_all = move || {
        errors
            .firstname
            .set(validate::validate_firstname(&firstname.get_untracked()).err());
        errors
            .lastname
            .set(validate::validate_lastname(&lastname.get_untracked()).err());
        errors
            .email
            .set(validate::validate_email(&email.get_untracked()).err());
        errors
            .password
            .set(validate::validate_password(&password.get_untracked()).err());
        errors.confirm.set(
            validate::validate_password_confirmation(
                &password.get_untracked(),
                &confirm.get_untracked(),
            )
            .err(),
        );
        [
            errors.firstname,
            errors.lastname,
            errors.email,
            errors.password,
            errors.confirm,
        ]
        .iter()
        .all(|e| e.get_untracked().is_none())
            && validate::validate_signup_role(role.get_untracked()).is_ok()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !validate_all() {
            return;
        }
        set_submitting.set(true);
        set_server_error.set(None);
        spawn_local(async move {
            let body = SignupRequest {
                lastname: lastname.get_untracked().trim().to_string(),
                firstname: firstname.get_untracked().trim().to_string(),
                email: email.get_untracked().trim().to_string(),
                role: role.get_untracked(),
                password: password.get_untracked(),
                confirm_password: confirm.get_untracked(),
            };
            match api().signup(&body).await {
                Ok(_) => set_registered.set(true),
                Err(e) => {
                    log_error!("inscription refusée: {e}");
                    set_server_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    let field = move |id: &'static str,
                      label: &'static str,
                      input_type: &'static str,
                      value: RwSignal<String>,
                      error: RwSignal<Option<String>>| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=input_type
                    class="input input-bordered"
                    prop:value=value
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="text-error text-sm mt-1">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Inscription"</h1>
                <Show
                    when=move || !registered.get()
                    fallback=|| {
                        view! {
                            <div class="card w-full shadow-2xl bg-base-100">
                                <div class="card-body text-center">
                                    <h2 class="card-title justify-center">"Compte créé !"</h2>
                                    <p>
                                        "Un email de confirmation vient de vous être envoyé. "
                                        "Activez votre compte avant de vous connecter."
                                    </p>
                                    <Link to="/signin" class="btn btn-primary mt-2">"Aller à la connexion"</Link>
                                </div>
                            </div>
                        }
                    }
                >
                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <Show when=move || server_error.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || server_error.get().unwrap_or_default()}</span>
                                </div>
                            </Show>
                            {field("signup-firstname", "Prénom", "text", firstname, errors.firstname)}
                            {field("signup-lastname", "Nom", "text", lastname, errors.lastname)}
                            {field("signup-email", "Email", "email", email, errors.email)}
                            <div class="form-control">
                                <label class="label" for="signup-role">
                                    <span class="label-text">"Je souhaite"</span>
                                </label>
                                <select
                                    id="signup-role"
                                    class="select select-bordered"
                                    on:change=move |ev| {
                                        role.set(
                                            Role::parse(&event_target_value(&ev))
                                                .unwrap_or(Role::Participant),
                                        );
                                    }
                                >
                                    <option
                                        value="PARTICIPANT"
                                        selected=move || role.get() == Role::Participant
                                    >
                                        "Participer à des événements"
                                    </option>
                                    <option
                                        value="ORGANIZER"
                                        selected=move || role.get() == Role::Organizer
                                    >
                                        "Organiser des événements"
                                    </option>
                                </select>
                            </div>
                            {field("signup-password", "Mot de passe", "password", password, errors.password)}
                            {field("signup-confirm", "Confirmation", "password", confirm, errors.confirm)}
                            <div class="form-control mt-4">
                                <button class="btn btn-primary" disabled=move || submitting.get()>
                                    {move || if submitting.get() { "Création..." } else { "Créer mon compte" }}
                                </button>
                            </div>
                            <p class="text-sm text-center mt-2">
                                "Déjà inscrit ? "
                                <Link to="/signin" class="link link-primary">"Se connecter"</Link>
                            </p>
                        </form>
                    </div>
                </Show>
            </div>
        </div>
    }
}
