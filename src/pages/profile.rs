//! Profile page: identity, avatar, password and email changes, account
//! deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::auth::{init_auth, logout, use_auth};
use crate::components::alert::{Alert, AlertMessage};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::config::media_url;
use crate::log::log_error;
use crate::models::Role;
use crate::models::profile::{ChangeEmailRequest, ChangePasswordRequest, UserProfile};
use crate::validate;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();

    let (profile, set_profile) = signal(Option::<UserProfile>::None);
    let (alert, set_alert) = signal(Option::<AlertMessage>::None);

    // Identity form.
    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let firstname_error = RwSignal::new(Option::<String>::None);
    let lastname_error = RwSignal::new(Option::<String>::None);
    let avatar: RwSignal<Option<web_sys::File>, LocalStorage> = RwSignal::new_local(None);
    let avatar_error = RwSignal::new(Option::<String>::None);

    // Password form.
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_error = RwSignal::new(Option::<String>::None);

    // Email form.
    let new_email = RwSignal::new(String::new());
    let email_password = RwSignal::new(String::new());
    let email_error = RwSignal::new(Option::<String>::None);

    let confirm_delete = RwSignal::new(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api().profile().await {
                Ok(loaded) => {
                    firstname.set(loaded.firstname.clone());
                    lastname.set(loaded.lastname.clone());
                    set_profile.set(Some(loaded));
                }
                Err(e) => {
                    log_error!("chargement du profil impossible: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
        });
    });

    let on_avatar = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        match input.files().and_then(|files| files.get(0)) {
            None => {
                avatar.set(None);
                avatar_error.set(None);
            }
            Some(file) => match validate::validate_image(&file.type_(), file.size()) {
                Ok(()) => {
                    avatar.set(Some(file));
                    avatar_error.set(None);
                }
                Err(message) => {
                    avatar.set(None);
                    avatar_error.set(Some(message));
                }
            },
        }
    };

    let on_save_identity = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        firstname_error.set(validate::validate_firstname(&firstname.get_untracked()).err());
        lastname_error.set(validate::validate_lastname(&lastname.get_untracked()).err());
        if firstname_error.get_untracked().is_some()
            || lastname_error.get_untracked().is_some()
            || avatar_error.get_untracked().is_some()
        {
            return;
        }
        let role = profile
            .get_untracked()
            .map(|p| p.role)
            .unwrap_or(Role::Participant);
        spawn_local(async move {
            let outcome = api()
                .update_profile(
                    firstname.get_untracked().trim(),
                    lastname.get_untracked().trim(),
                    role,
                    avatar.get_untracked(),
                )
                .await;
            match outcome {
                Ok(()) => {
                    set_alert.set(Some(AlertMessage::success("Profil mis à jour.")));
                    avatar.set(None);
                    // Refresh the navbar identity and the displayed profile.
                    init_auth(&ctx);
                    if let Ok(reloaded) = api().profile().await {
                        set_profile.set(Some(reloaded));
                    }
                }
                Err(e) => {
                    log_error!("mise à jour du profil impossible: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
        });
    };

    let on_change_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new = new_password.get_untracked();
        let check = validate::validate_password(&new).err().or_else(|| {
            validate::validate_password_confirmation(&new, &confirm_password.get_untracked()).err()
        });
        password_error.set(check);
        if password_error.get_untracked().is_some() {
            return;
        }
        spawn_local(async move {
            let body = ChangePasswordRequest {
                old_password: old_password.get_untracked(),
                new_password: new_password.get_untracked(),
            };
            match api().change_password(&body).await {
                Ok(()) => {
                    set_alert.set(Some(AlertMessage::success("Mot de passe modifié.")));
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(e) => {
                    log_error!("changement de mot de passe impossible: {e}");
                    password_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let on_change_email = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        email_error.set(validate::validate_email(&new_email.get_untracked()).err());
        if email_error.get_untracked().is_some() {
            return;
        }
        spawn_local(async move {
            let body = ChangeEmailRequest {
                new_email: new_email.get_untracked().trim().to_string(),
                password: email_password.get_untracked(),
            };
            match api().change_email(&body).await {
                Ok(()) => {
                    set_alert.set(Some(AlertMessage::success(
                        "Adresse email modifiée. Un email de confirmation vous a été envoyé.",
                    )));
                    new_email.set(String::new());
                    email_password.set(String::new());
                    if let Ok(reloaded) = api().profile().await {
                        set_profile.set(Some(reloaded));
                    }
                }
                Err(e) => {
                    log_error!("changement d'email impossible: {e}");
                    email_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let on_delete_account = move |()| {
        spawn_local(async move {
            match api().delete_account().await {
                Ok(()) => {
                    logout(&ctx);
                    router.navigate(AppRoute::Home);
                }
                Err(e) => {
                    log_error!("suppression du compte impossible: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
        });
    };

    let field_error = |error: RwSignal<Option<String>>| {
        view! {
            <Show when=move || error.get().is_some()>
                <p class="text-error text-sm mt-1">{move || error.get().unwrap_or_default()}</p>
            </Show>
        }
    };

    view! {
        <div class="max-w-2xl mx-auto p-4 space-y-6">
            <h1 class="text-3xl font-bold">"Mon profil"</h1>
            <Alert message=alert set_message=set_alert />

            <Show
                when=move || profile.get().is_some()
                fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg"></span>
                    </div>
                }
            >
                <form class="card bg-base-100 shadow" on:submit=on_save_identity>
                    <div class="card-body space-y-2">
                        <h2 class="card-title">"Informations"</h2>
                        <div class="flex items-center gap-4">
                            {move || profile.get().and_then(|p| p.profile_img).map(|img| view! {
                                <div class="avatar">
                                    <div class="w-16 rounded-full">
                                        <img src=media_url(&img) alt="Avatar" />
                                    </div>
                                </div>
                            })}
                            <div>
                                <p class="font-semibold">
                                    {move || profile.get().map(|p| p.email).unwrap_or_default()}
                                </p>
                                <p class="text-sm opacity-60">
                                    {move || {
                                        profile
                                            .get()
                                            .map(|p| match p.role {
                                                Role::Participant => "Participant",
                                                Role::Organizer => "Organisateur",
                                                Role::Admin => "Administrateur",
                                            })
                                            .unwrap_or_default()
                                    }}
                                </p>
                            </div>
                        </div>
                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label" for="profile-firstname">
                                    <span class="label-text">"Prénom"</span>
                                </label>
                                <input
                                    id="profile-firstname"
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=firstname
                                    on:input=move |ev| firstname.set(event_target_value(&ev))
                                />
                                {field_error(firstname_error)}
                            </div>
                            <div class="form-control">
                                <label class="label" for="profile-lastname">
                                    <span class="label-text">"Nom"</span>
                                </label>
                                <input
                                    id="profile-lastname"
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=lastname
                                    on:input=move |ev| lastname.set(event_target_value(&ev))
                                />
                                {field_error(lastname_error)}
                            </div>
                        </div>
                        <div class="form-control">
                            <label class="label" for="profile-avatar">
                                <span class="label-text">"Photo de profil (5 Mo max)"</span>
                            </label>
                            <input
                                id="profile-avatar"
                                type="file"
                                accept="image/*"
                                class="file-input file-input-bordered"
                                on:change=on_avatar
                            />
                            {field_error(avatar_error)}
                        </div>
                        <div class="card-actions justify-end">
                            <button type="submit" class="btn btn-primary">"Enregistrer"</button>
                        </div>
                    </div>
                </form>

                <form class="card bg-base-100 shadow" on:submit=on_change_password>
                    <div class="card-body space-y-2">
                        <h2 class="card-title">"Changer le mot de passe"</h2>
                        <input
                            type="password"
                            class="input input-bordered"
                            placeholder="Mot de passe actuel"
                            prop:value=old_password
                            on:input=move |ev| old_password.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            class="input input-bordered"
                            placeholder="Nouveau mot de passe"
                            prop:value=new_password
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            class="input input-bordered"
                            placeholder="Confirmer le nouveau mot de passe"
                            prop:value=confirm_password
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                        {field_error(password_error)}
                        <div class="card-actions justify-end">
                            <button type="submit" class="btn btn-outline">"Modifier"</button>
                        </div>
                    </div>
                </form>

                <form class="card bg-base-100 shadow" on:submit=on_change_email>
                    <div class="card-body space-y-2">
                        <h2 class="card-title">"Changer l'adresse email"</h2>
                        <input
                            type="email"
                            class="input input-bordered"
                            placeholder="Nouvelle adresse email"
                            prop:value=new_email
                            on:input=move |ev| new_email.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            class="input input-bordered"
                            placeholder="Mot de passe"
                            prop:value=email_password
                            on:input=move |ev| email_password.set(event_target_value(&ev))
                        />
                        {field_error(email_error)}
                        <div class="card-actions justify-end">
                            <button type="submit" class="btn btn-outline">"Modifier"</button>
                        </div>
                    </div>
                </form>

                <div class="card bg-base-100 shadow border border-error/40">
                    <div class="card-body">
                        <h2 class="card-title text-error">"Supprimer mon compte"</h2>
                        <p class="text-sm opacity-70">
                            "Votre compte, vos événements et vos réservations seront "
                            "définitivement supprimés."
                        </p>
                        <div class="card-actions justify-end">
                            <button
                                class="btn btn-error btn-outline"
                                on:click=move |_| confirm_delete.set(true)
                            >
                                "Supprimer"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <ConfirmDialog
                open=confirm_delete
                title="Supprimer le compte"
                message="Cette action est définitive et supprime toutes vos données."
                on_confirm=on_delete_account
            />
        </div>
    }
}
