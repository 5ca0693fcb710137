use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::components::alert::{Alert, AlertMessage};
use crate::components::event_form::{EventFormFields, EventFormState};
use crate::log::log_error;
use crate::models::Category;
use crate::token::current_user;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn EventCreatePage() -> impl IntoView {
    let router = use_router();
    let state = EventFormState::new();
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (alert, set_alert) = signal(Option::<AlertMessage>::None);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api().categories().await {
                Ok(list) => set_categories.set(list),
                Err(e) => log_error!("chargement des catégories impossible: {e}"),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !state.validate(Local::now().naive_local()) {
            return;
        }
        let Some(claims) = current_user() else {
            return;
        };
        let Some(request) = state.to_create_request(claims.sub) else {
            return;
        };
        set_submitting.set(true);
        spawn_local(async move {
            match api().create_event(&request).await {
                Ok(created) => {
                    if let Some(file) = state.image.get_untracked() {
                        if let Err(e) = api()
                            .upload_event_media(file, claims.sub, created.id)
                            .await
                        {
                            log_error!("envoi de l'image impossible: {e}");
                            set_alert.set(Some(AlertMessage::warning(
                                "Événement créé, mais l'image n'a pas pu être envoyée.",
                            )));
                        }
                    }
                    router.navigate(AppRoute::EventDetail(created.id));
                }
                Err(e) => {
                    log_error!("création de l'événement impossible: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto p-4 space-y-4">
            <h1 class="text-3xl font-bold">"Créer un événement"</h1>
            <Alert message=alert set_message=set_alert />
            <form class="card bg-base-100 shadow" on:submit=on_submit>
                <div class="card-body space-y-2">
                    <EventFormFields state=state categories=categories.into() />
                    <p class="text-sm opacity-60">
                        "L'événement est créé en brouillon ; vous pourrez le publier "
                        "depuis la page « Mes événements »."
                    </p>
                    <div class="card-actions justify-end">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || submitting.get()
                        >
                            <Show when=move || submitting.get()>
                                <span class="loading loading-spinner loading-sm"></span>
                            </Show>
                            "Créer l'événement"
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
