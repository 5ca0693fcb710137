//! Participant dashboard: the caller's reservation requests by status.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::log::log_error;
use crate::models::ParticipationStatus;
use crate::models::participation::ParticipantRequest;
use crate::web::router::Link;

fn status_badge(status: ParticipationStatus) -> &'static str {
    match status {
        ParticipationStatus::Pending => "badge badge-warning",
        ParticipationStatus::Accepted => "badge badge-success",
        ParticipationStatus::Rejected => "badge badge-error",
    }
}

#[component]
pub fn ParticipantDashboardPage() -> impl IntoView {
    let (requests, set_requests) = signal(Vec::<ParticipantRequest>::new());
    let (filter, set_filter) = signal(Option::<ParticipationStatus>::None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api().my_requests().await {
                Ok(rows) => set_requests.set(rows),
                Err(e) => log_error!("chargement de mes réservations impossible: {e}"),
            }
            set_loading.set(false);
        });
    });

    let shown = Signal::derive(move || {
        let wanted = filter.get();
        requests
            .get()
            .into_iter()
            .filter(|r| wanted.is_none_or(|status| r.status == status))
            .collect::<Vec<_>>()
    });

    let tab = move |label: &'static str, value: Option<ParticipationStatus>| {
        view! {
            <button
                class=move || {
                    if filter.get() == value {
                        "tab tab-active"
                    } else {
                        "tab"
                    }
                }
                on:click=move |_| set_filter.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="max-w-4xl mx-auto p-4 space-y-6">
            <h1 class="text-3xl font-bold">"Mes réservations"</h1>

            <div class="tabs tabs-boxed w-fit">
                {tab("Toutes", None)}
                {tab("En attente", Some(ParticipationStatus::Pending))}
                {tab("Acceptées", Some(ParticipationStatus::Accepted))}
                {tab("Refusées", Some(ParticipationStatus::Rejected))}
            </div>

            <Show when=move || loading.get()>
                <div class="flex justify-center py-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            </Show>

            <Show when=move || !loading.get() && shown.get().is_empty()>
                <p class="opacity-60 text-center py-8">"Aucune réservation dans cette catégorie."</p>
            </Show>

            <div class="space-y-3">
                <For
                    each=move || shown.get()
                    key=|r| (r.event_id, r.status.as_str())
                    children=move |row| {
                        let event_path = format!("/event/{}", row.event_id);
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body py-4">
                                    <div class="flex flex-wrap items-center gap-2">
                                        <Link to=event_path class="card-title link link-hover">
                                            {row.event_name.clone()}
                                        </Link>
                                        <span class=status_badge(row.status)>
                                            {row.status.label_fr()}
                                        </span>
                                    </div>
                                    <p class="text-sm opacity-70">{row.event_description.clone()}</p>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
