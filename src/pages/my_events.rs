//! The organizer's own events, drafts included, with publish toggles.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::components::alert::{Alert, AlertMessage};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::stats::StatsRow;
use crate::config::{EVENTS_PAGE_SIZE, media_url};
use crate::date::{format_short_event_date, is_event_passed, to_local_naive};
use crate::log::log_error;
use crate::models::Event;
use crate::models::event::EventStatistics;
use crate::token::current_user;
use crate::web::router::Link;

#[component]
pub fn MyEventsPage() -> impl IntoView {
    let (events, set_events) = signal(Vec::<Event>::new());
    let (stats, set_stats) = signal(Option::<EventStatistics>::None);
    let (page, set_page) = signal(1u32);
    let (has_more, set_has_more) = signal(false);
    let (loading, set_loading) = signal(true);
    let (alert, set_alert) = signal(Option::<AlertMessage>::None);
    let confirm_delete = RwSignal::new(false);
    let (pending_delete, set_pending_delete) = signal(Option::<i64>::None);

    let load_page = move || {
        let Some(claims) = current_user() else {
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let current = page.get_untracked();
            match api().my_events(claims.sub, current, EVENTS_PAGE_SIZE).await {
                Ok((items, _total)) => {
                    set_has_more.set(items.len() as u32 == EVENTS_PAGE_SIZE);
                    set_page.set(current + 1);
                    let detailed = api().with_details(items).await;
                    set_events.update(|list| {
                        for event in detailed {
                            if !list.iter().any(|e| e.id == event.id) {
                                list.push(event);
                            }
                        }
                    });
                }
                Err(e) => {
                    log_error!("chargement de mes événements impossible: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                    set_has_more.set(false);
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if page.get_untracked() == 1 && events.get_untracked().is_empty() {
            load_page();
        }
        spawn_local(async move {
            match api().statistics().await {
                Ok(fetched) => set_stats.set(Some(fetched)),
                Err(e) => log_error!("statistiques indisponibles: {e}"),
            }
        });
    });

    let toggle_published = move |id: i64, publish: bool| {
        spawn_local(async move {
            match api().set_published(id, publish).await {
                Ok(()) => {
                    set_events.update(|list| {
                        if let Some(event) = list.iter_mut().find(|e| e.id == id) {
                            event.is_published = publish;
                        }
                    });
                    let text = if publish {
                        "Événement publié."
                    } else {
                        "Événement repassé en brouillon."
                    };
                    set_alert.set(Some(AlertMessage::success(text)));
                }
                Err(e) => {
                    log_error!("changement de publication impossible: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
        });
    };

    let on_delete = move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api().delete_event(id).await {
                Ok(()) => {
                    set_events.update(|list| list.retain(|e| e.id != id));
                    set_alert.set(Some(AlertMessage::success("Événement supprimé.")));
                }
                Err(e) => {
                    log_error!("suppression impossible: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
            set_pending_delete.set(None);
        });
    };


    view! {
        <div class="max-w-5xl mx-auto p-4 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Mes événements"</h1>
                <Link to="/eventform" class="btn btn-primary">"Créer un événement"</Link>
            </div>
            <Alert message=alert set_message=set_alert />

            {move || stats.get().map(|s| view! { <StatsRow stats=s /> })}

            <Show when=move || loading.get()>
                <div class="flex justify-center py-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            </Show>

            <Show when=move || !loading.get() && events.get().is_empty()>
                <p class="opacity-60 text-center py-8">
                    "Vous n'avez pas encore créé d'événement."
                </p>
            </Show>

            <div class="space-y-3">
                <For
                    each=move || events.get()
                    key=|e| e.id
                    children=move |event| {
                        let id = event.id;
                        let published = event.is_published;
                        let passed = is_event_passed(&event.end_date);
                        let date = format_short_event_date(
                            &to_local_naive(&event.start_date),
                            &to_local_naive(&event.end_date),
                        );
                        let count = event.participation_count.unwrap_or(0);
                        let image = event.first_image().map(media_url);
                        let detail_path = format!("/event/{id}");
                        let edit_path = format!("/event/edit/{id}");
                        view! {
                            <div class="card card-side bg-base-100 shadow">
                                {image.map(|src| view! {
                                    <figure class="w-32 shrink-0">
                                        <img src=src alt="" class="h-full w-full object-cover" />
                                    </figure>
                                })}
                                <div class="card-body py-4">
                                    <div class="flex flex-wrap items-center gap-2">
                                        <Link to=detail_path class="card-title link link-hover">
                                            {event.name.clone()}
                                        </Link>
                                        {if published {
                                            view! { <span class="badge badge-success">"Publié"</span> }
                                                .into_any()
                                        } else {
                                            view! { <span class="badge badge-ghost">"Brouillon"</span> }
                                                .into_any()
                                        }}
                                        <Show when=move || passed>
                                            <span class="badge badge-neutral">"Terminé"</span>
                                        </Show>
                                    </div>
                                    <p class="text-sm opacity-70">
                                        {date} " · " {event.city.clone()} " · " {count} "/"
                                        {event.number_place} " places"
                                    </p>
                                    <div class="card-actions items-center">
                                        <label class="label cursor-pointer gap-2">
                                            <input
                                                type="checkbox"
                                                class="toggle toggle-sm toggle-primary"
                                                prop:checked=published
                                                on:change=move |ev| {
                                                    toggle_published(id, event_target_checked(&ev));
                                                }
                                            />
                                            <span class="label-text text-sm">"Publié"</span>
                                        </label>
                                        <Link to=edit_path class="btn btn-sm btn-outline">
                                            "Modifier"
                                        </Link>
                                        <button
                                            class="btn btn-sm btn-outline btn-error"
                                            on:click=move |_| {
                                                set_pending_delete.set(Some(id));
                                                confirm_delete.set(true);
                                            }
                                        >
                                            "Supprimer"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || has_more.get() && !loading.get()>
                <div class="flex justify-center">
                    <button class="btn btn-outline" on:click=move |_| load_page()>
                        "Afficher plus"
                    </button>
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
