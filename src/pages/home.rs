//! Landing page: hero, category chips, general statistics and a preview of
//! upcoming published events.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::components::category_chips::CategoryChips;
use crate::components::event_card::EventCard;
use crate::components::stats::StatsRow;
use crate::config::EVENTS_PAGE_SIZE;
use crate::date::is_event_passed;
use crate::log::log_error;
use crate::models::Event;
use crate::models::event::EventStatistics;
use crate::web::router::Link;

const PREVIEW_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let (stats, set_stats) = signal(Option::<EventStatistics>::None);
    let (preview, set_preview) = signal(Vec::<Event>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match api().statistics().await {
                Ok(loaded) => set_stats.set(Some(loaded)),
                Err(e) => log_error!("statistiques indisponibles: {e}"),
            }
        });
        spawn_local(async move {
            match api().events_page(1, EVENTS_PAGE_SIZE).await {
                Ok(page) => {
                    let upcoming: Vec<Event> = page
                        .items
                        .into_iter()
                        .filter(|e| e.is_published && !is_event_passed(&e.end_date))
                        .take(PREVIEW_COUNT)
                        .collect();
                    set_preview.set(api().with_details(upcoming).await);
                }
                Err(e) => log_error!("aperçu des événements indisponible: {e}"),
            }
        });
    });

    view! {
        <div class="max-w-5xl mx-auto p-4 space-y-8">
            <div class="hero bg-base-100 rounded-box shadow py-12">
                <div class="hero-content text-center flex-col">
                    <h1 class="text-4xl font-bold">"Trouvez votre prochain événement"</h1>
                    <p class="opacity-70 max-w-xl">
                        "Concerts, ateliers, rencontres : réservez votre place ou organisez le vôtre."
                    </p>
                    <div class="flex gap-2 mt-4">
                        <Link to="/eventlist" class="btn btn-primary">"Parcourir les événements"</Link>
                        <Link to="/search" class="btn btn-outline">"Recherche avancée"</Link>
                    </div>
                </div>
            </div>

            <CategoryChips />

            {move || stats.get().map(|stats| view! { <StatsRow stats=stats /> })}

            <div>
                <h2 class="text-2xl font-bold mb-4">"Prochainement"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <For
                        each=move || preview.get()
                        key=|e| e.id
                        children=move |event| view! { <EventCard event=event /> }
                    />
                </div>
            </div>
        </div>
    }
}
