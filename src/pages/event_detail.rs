//! Event detail: schedule, reservation, owner actions, personal note.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::auth::use_auth;
use crate::components::alert::{Alert, AlertMessage};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::config::media_url;
use crate::date::{format_duration, format_event_date, is_event_passed, to_local_naive};
use crate::log::log_error;
use crate::models::{Event, Role};
use crate::models::event::PersonalNote;
use crate::token::current_user;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

/// Owner-or-admin check, from the decoded access token.
fn can_edit(event: &Event) -> bool {
    let Some(claims) = current_user() else {
        return false;
    };
    claims.sub == event.user_id
        || claims.role.as_deref().and_then(Role::parse) == Some(Role::Admin)
}

#[component]
pub fn EventDetailPage(id: i64) -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();

    let (event, set_event) = signal(Option::<Event>::None);
    let (count, set_count) = signal(0u32);
    let (reserved, set_reserved) = signal(false);
    let (reserving, set_reserving) = signal(false);
    let (note, set_note) = signal(String::new());
    let (note_id, set_note_id) = signal(Option::<i64>::None);
    let (alert, set_alert) = signal(Option::<AlertMessage>::None);
    let confirm_delete = RwSignal::new(false);

    // Event, media and count race independently; the reservation check and
    // note only run for signed-in visitors.
    Effect::new(move |_| {
        spawn_local(async move {
            match api().event(id).await {
                Ok(mut loaded) => {
                    if let Ok(media) = api().event_media(id).await {
                        if !media.is_empty() {
                            loaded.media = media;
                        }
                    }
                    set_event.set(Some(loaded));
                }
                Err(e) => {
                    log_error!("événement {id} introuvable: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
        });
        spawn_local(async move {
            if let Ok(counted) = api().participation_count(id).await {
                set_count.set(counted);
            }
        });
        if let Some(claims) = current_user() {
            spawn_local(async move {
                if let Ok(has) = api().check_reservation(id).await {
                    set_reserved.set(has);
                }
            });
            spawn_local(async move {
                match api().personal_note(id, claims.sub).await {
                    Ok(Some(existing)) => {
                        set_note.set(existing.content);
                        set_note_id.set(existing.id);
                    }
                    Ok(None) => {}
                    Err(e) => log_error!("note indisponible: {e}"),
                }
            });
        }
    });

    let on_reserve = move |_| {
        set_reserving.set(true);
        spawn_local(async move {
            match api().reserve(id).await {
                Ok(()) => {
                    set_reserved.set(true);
                    set_count.update(|c| *c += 1);
                    set_alert.set(Some(AlertMessage::success(
                        "Votre demande de réservation a été envoyée.",
                    )));
                }
                Err(e) => {
                    log_error!("réservation impossible: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
            set_reserving.set(false);
        });
    };

    let on_delete = move |()| {
        spawn_local(async move {
            match api().delete_event(id).await {
                Ok(()) => router.navigate(AppRoute::EventList),
                Err(e) => {
                    log_error!("suppression impossible: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
        });
    };

    let on_save_note = move |_| {
        let Some(claims) = current_user() else {
            return;
        };
        spawn_local(async move {
            let body = PersonalNote {
                id: note_id.get_untracked(),
                user_id: claims.sub,
                event_id: id,
                content: note.get_untracked(),
            };
            match api().save_personal_note(&body).await {
                Ok(()) => set_alert.set(Some(AlertMessage::success("Note enregistrée."))),
                Err(e) => {
                    log_error!("enregistrement de la note impossible: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
        });
    };

    let reserve_section = move |event: &Event| {
        let full = event.is_full(count.get());
        let passed = is_event_passed(&event.end_date);
        let authenticated = ctx.state.get().is_authenticated;
        if passed {
            view! { <button class="btn" disabled=true>"Événement terminé"</button> }.into_any()
        } else if !authenticated {
            view! {
                <Link to="/signin" class="btn btn-primary">"Se connecter pour réserver"</Link>
            }
            .into_any()
        } else if reserved.get() {
            view! { <button class="btn btn-success" disabled=true>"Déjà réservé"</button> }
                .into_any()
        } else if full {
            view! { <button class="btn" disabled=true>"Complet"</button> }.into_any()
        } else {
            view! {
                <button class="btn btn-primary" disabled=move || reserving.get() on:click=on_reserve>
                    "Réserver"
                </button>
            }
            .into_any()
        }
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 space-y-4">
            <Alert message=alert set_message=set_alert />
            {move || match event.get() {
                None => view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg"></span>
                    </div>
                }
                .into_any(),
                Some(event) => {
                    let start = to_local_naive(&event.start_date);
                    let end = to_local_naive(&event.end_date);
                    let schedule = format_event_date(&start, &end);
                    let duration = format_duration(&start, &end);
                    let image = event.first_image().map(media_url);
                    let category = event.category_name().map(str::to_string);
                    let editable = can_edit(&event);
                    let edit_path = format!("/event/edit/{}", event.id);
                    let budget = event.budget.map(|b| format!("{b} €"));
                    let place = format!(
                        "{}, {} {}",
                        event.address, event.postal_code, event.city
                    );
                    let reserve = reserve_section(&event);
                    view! {
                        <div class="card bg-base-100 shadow">
                            {image.map(|src| view! {
                                <figure class="max-h-80 overflow-hidden">
                                    <img src=src alt=event.name.clone() class="w-full object-cover" />
                                </figure>
                            })}
                            <div class="card-body space-y-2">
                                <div class="flex items-start justify-between">
                                    <h1 class="card-title text-3xl">{event.name.clone()}</h1>
                                    {category.map(|name| view! { <span class="badge badge-outline">{name}</span> })}
                                </div>
                                <p>{event.description.clone()}</p>
                                <p class="text-sm">{schedule} " · " {duration}</p>
                                <p class="text-sm opacity-70">{place}</p>
                                {budget.map(|b| view! { <p class="text-sm">"Budget : " {b}</p> })}
                                <p class="text-sm">
                                    {move || count.get()} "/" {event.number_place} " places réservées"
                                </p>
                                <div class="card-actions items-center gap-2">
                                    {reserve}
                                    <Show when=move || editable>
                                        <Link to=edit_path.clone() class="btn btn-outline">"Modifier"</Link>
                                        <button
                                            class="btn btn-outline btn-error"
                                            on:click=move |_| confirm_delete.set(true)
                                        >
                                            "Supprimer"
                                        </button>
                                    </Show>
                                </div>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}

            <Show when=move || ctx.state.get().is_authenticated && event.get().is_some()>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title text-lg">"Ma note personnelle"</h2>
                        <textarea
                            class="textarea textarea-bordered"
                            placeholder="Visible uniquement par vous"
                            prop:value=note
                            on:input=move |ev| set_note.set(event_target_value(&ev))
                        ></textarea>
                        <div class="card-actions justify-end">
                            <button class="btn btn-sm" on:click=on_save_note>"Enregistrer"</button>
                        </div>
                    </div>
                </div>
            </Show>

            <ConfirmDialog
                open=confirm_delete
                title="Supprimer l'événement"
                message="Cette action est définitive. Les participations associées seront perdues."
                on_confirm=on_delete
            />
        </div>
    }
}
