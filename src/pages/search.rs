//! Search page. The filters live in the URL query string: submitting the
//! bar navigates, and navigation re-renders this page with new filters.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::components::event_card::EventCard;
use crate::components::search_bar::SearchBar;
use crate::log::log_error;
use crate::models::Event;
use crate::models::event::SearchFilters;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn SearchPage(#[prop(optional)] query: Option<String>) -> impl IntoView {
    let router = use_router();
    let filters = SearchFilters::from_query(query.as_deref().unwrap_or_default());
    let has_filters = !filters.is_empty();

    let (results, set_results) = signal(Vec::<Event>::new());
    let (loading, set_loading) = signal(false);
    let (searched, set_searched) = signal(false);

    Effect::new({
        let filters = filters.clone();
        move |_| {
            if !has_filters {
                return;
            }
            let filters = filters.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api().search_events(&filters).await {
                    Ok(found) => {
                        let published: Vec<Event> =
                            found.into_iter().filter(|e| e.is_published).collect();
                        set_results.set(api().with_details(published).await);
                    }
                    Err(e) => log_error!("recherche impossible: {e}"),
                }
                set_searched.set(true);
                set_loading.set(false);
            });
        }
    });

    let on_search = move |filters: SearchFilters| {
        let query = filters.to_query();
        let route = if query.is_empty() {
            AppRoute::Search(None)
        } else {
            AppRoute::Search(Some(query))
        };
        router.navigate(route);
    };

    view! {
        <div class="max-w-5xl mx-auto p-4 space-y-6">
            <h1 class="text-3xl font-bold">"Rechercher un événement"</h1>
            <SearchBar initial=filters on_search=on_search />

            <Show when=move || loading.get()>
                <div class="flex justify-center py-8">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            </Show>

            <Show when=move || searched.get() && !loading.get() && results.get().is_empty()>
                <p class="opacity-60 text-center py-8">"Aucun événement ne correspond à ces critères."</p>
            </Show>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <For
                    each=move || results.get()
                    key=|e| e.id
                    children=move |event| view! { <EventCard event=event /> }
                />
            </div>
        </div>
    }
}
