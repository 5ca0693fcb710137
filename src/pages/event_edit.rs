use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::components::alert::{Alert, AlertMessage};
use crate::components::event_form::{EventFormFields, EventFormState};
use crate::log::log_error;
use crate::models::{Category, Role};
use crate::token::current_user;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn EventEditPage(id: i64) -> impl IntoView {
    let router = use_router();
    let state = EventFormState::new();
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (loaded, set_loaded) = signal(false);
    let (alert, set_alert) = signal(Option::<AlertMessage>::None);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api().categories().await {
                Ok(list) => set_categories.set(list),
                Err(e) => log_error!("chargement des catégories impossible: {e}"),
            }
        });
        spawn_local(async move {
            match api().event(id).await {
                Ok(event) => {
                    // Only the owner or an admin may land here.
                    let allowed = current_user().is_some_and(|claims| {
                        claims.sub == event.user_id
                            || claims.role.as_deref().and_then(Role::parse) == Some(Role::Admin)
                    });
                    if !allowed {
                        router.navigate(AppRoute::Home);
                        return;
                    }
                    state.load(&event);
                    set_loaded.set(true);
                }
                Err(e) => {
                    log_error!("événement {id} introuvable: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !state.validate_for_edit() {
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            match api().update_event(id, state.to_update_parts()).await {
                Ok(()) => router.navigate(AppRoute::EventDetail(id)),
                Err(e) => {
                    log_error!("mise à jour de l'événement impossible: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto p-4 space-y-4">
            <h1 class="text-3xl font-bold">"Modifier l'événement"</h1>
            <Alert message=alert set_message=set_alert />
            <Show
                when=move || loaded.get()
                fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg"></span>
                    </div>
                }
            >
                <form class="card bg-base-100 shadow" on:submit=on_submit>
                    <div class="card-body space-y-2">
                        <EventFormFields state=state categories=categories.into() />
                        <div class="form-control">
                            <label class="label cursor-pointer justify-start gap-3">
                                <input
                                    type="checkbox"
                                    class="toggle toggle-primary"
                                    prop:checked=state.is_published
                                    on:change=move |ev| {
                                        state.is_published.set(event_target_checked(&ev));
                                    }
                                />
                                <span class="label-text">"Événement publié"</span>
                            </label>
                        </div>
                        <div class="card-actions justify-end">
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || submitting.get()
                            >
                                <Show when=move || submitting.get()>
                                    <span class="loading loading-spinner loading-sm"></span>
                                </Show>
                                "Enregistrer"
                            </button>
                        </div>
                    </div>
                </form>
            </Show>
        </div>
    }
}
