//! Organizer dashboard: pending reservation requests and decision history.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::components::alert::{Alert, AlertMessage};
use crate::log::log_error;
use crate::models::ParticipationStatus;
use crate::models::participation::{OrganizerRequest, ParticipationDecision};
use crate::web::router::Link;

fn status_badge(status: ParticipationStatus) -> &'static str {
    match status {
        ParticipationStatus::Pending => "badge badge-warning",
        ParticipationStatus::Accepted => "badge badge-success",
        ParticipationStatus::Rejected => "badge badge-error",
    }
}

#[component]
pub fn OrganizerDashboardPage() -> impl IntoView {
    let (pending, set_pending) = signal(Vec::<OrganizerRequest>::new());
    let (history, set_history) = signal(Vec::<OrganizerRequest>::new());
    let (history_filter, set_history_filter) = signal(Option::<ParticipationStatus>::None);
    let (loading, set_loading) = signal(true);
    let (alert, set_alert) = signal(Option::<AlertMessage>::None);

    let load_pending = move || {
        spawn_local(async move {
            match api().organizer_requests().await {
                Ok(rows) => set_pending.set(
                    rows.into_iter()
                        .filter(|r| r.status == ParticipationStatus::Pending)
                        .collect(),
                ),
                Err(e) => {
                    log_error!("chargement des demandes impossible: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
            set_loading.set(false);
        });
    };

    let load_history = move || {
        spawn_local(async move {
            match api().filtered_history(history_filter.get_untracked()).await {
                Ok(rows) => set_history.set(rows),
                Err(e) => log_error!("chargement de l'historique impossible: {e}"),
            }
        });
    };

    Effect::new(move |_| {
        load_pending();
    });
    Effect::new(move |_| {
        // Re-runs when the filter changes.
        history_filter.track();
        load_history();
    });

    let decide = move |row: &OrganizerRequest, accept: bool| {
        let decision = ParticipationDecision {
            event_id: row.event_id,
            participant_id: row.participant_id,
        };
        spawn_local(async move {
            let outcome = if accept {
                api().accept_participation(&decision).await
            } else {
                api().reject_participation(&decision).await
            };
            match outcome {
                Ok(()) => {
                    let text = if accept {
                        "Demande acceptée."
                    } else {
                        "Demande refusée."
                    };
                    set_alert.set(Some(AlertMessage::success(text)));
                    load_pending();
                    load_history();
                }
                Err(e) => {
                    log_error!("décision impossible: {e}");
                    set_alert.set(Some(AlertMessage::error(e.to_string())));
                }
            }
        });
    };

    let filter_button = move |label: &'static str, value: Option<ParticipationStatus>| {
        view! {
            <button
                class=move || {
                    if history_filter.get() == value {
                        "btn btn-sm btn-primary"
                    } else {
                        "btn btn-sm btn-ghost"
                    }
                }
                on:click=move |_| set_history_filter.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="max-w-4xl mx-auto p-4 space-y-6">
            <h1 class="text-3xl font-bold">"Demandes reçues"</h1>
            <Alert message=alert set_message=set_alert />

            <Show when=move || loading.get()>
                <div class="flex justify-center py-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"En attente"</h2>
                    <Show when=move || !loading.get() && pending.get().is_empty()>
                        <p class="opacity-60">"Aucune demande en attente."</p>
                    </Show>
                    <For
                        each=move || pending.get()
                        key=|r| (r.event_id, r.participant_id)
                        children=move |row| {
                            let accept_row = row.clone();
                            let reject_row = row.clone();
                            let event_path = format!("/event/{}", row.event_id);
                            view! {
                                <div class="flex flex-wrap items-center gap-3 py-2 border-b border-base-200 last:border-0">
                                    <div class="grow">
                                        <p class="font-semibold">{row.participant_name.clone()}</p>
                                        <Link to=event_path class="text-sm link link-hover opacity-70">
                                            {row.event_name.clone()}
                                        </Link>
                                    </div>
                                    <button
                                        class="btn btn-sm btn-success"
                                        on:click=move |_| decide(&accept_row, true)
                                    >
                                        "Accepter"
                                    </button>
                                    <button
                                        class="btn btn-sm btn-error btn-outline"
                                        on:click=move |_| decide(&reject_row, false)
                                    >
                                        "Refuser"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex flex-wrap items-center justify-between gap-2">
                        <h2 class="card-title">"Historique"</h2>
                        <div class="join">
                            {filter_button("Tous", None)}
                            {filter_button("Acceptées", Some(ParticipationStatus::Accepted))}
                            {filter_button("Refusées", Some(ParticipationStatus::Rejected))}
                        </div>
                    </div>
                    <Show when=move || history.get().is_empty()>
                        <p class="opacity-60">"Aucune décision pour le moment."</p>
                    </Show>
                    <For
                        each=move || history.get()
                        key=|r| (r.event_id, r.participant_id, r.status.as_str())
                        children=move |row| {
                            let event_path = format!("/event/{}", row.event_id);
                            view! {
                                <div class="flex flex-wrap items-center gap-3 py-2 border-b border-base-200 last:border-0">
                                    <div class="grow">
                                        <p class="font-semibold">{row.participant_name.clone()}</p>
                                        <Link to=event_path class="text-sm link link-hover opacity-70">
                                            {row.event_name.clone()}
                                        </Link>
                                    </div>
                                    <span class=status_badge(row.status)>
                                        {row.status.label_fr()}
                                    </span>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
