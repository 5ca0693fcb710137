//! Published events, nine at a time, with an IntersectionObserver sentinel
//! driving the infinite scroll.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

use crate::api::api;
use crate::components::event_card::EventCard;
use crate::config::EVENTS_PAGE_SIZE;
use crate::date::is_event_passed;
use crate::log::log_error;
use crate::models::Event;

/// Pages can overlap when events are created while scrolling; ids already
/// shown are dropped.
fn append_new(list: &mut Vec<Event>, incoming: Vec<Event>) {
    for event in incoming {
        if !list.iter().any(|e| e.id == event.id) {
            list.push(event);
        }
    }
}

#[component]
pub fn EventListPage() -> impl IntoView {
    let (events, set_events) = signal(Vec::<Event>::new());
    let (page, set_page) = signal(1u32);
    let (has_more, set_has_more) = signal(true);
    let (loading, set_loading) = signal(false);
    let sentinel = NodeRef::<leptos::html::Div>::new();
    let observed = StoredValue::new(false);

    let load_more = move || {
        if loading.get_untracked() || !has_more.get_untracked() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let current = page.get_untracked();
            match api().events_page(current, EVENTS_PAGE_SIZE).await {
                Ok(fetched) => {
                    set_has_more.set(fetched.has_more);
                    set_page.set(current + 1);
                    let published: Vec<Event> = fetched
                        .items
                        .into_iter()
                        .filter(|e| e.is_published)
                        .collect();
                    let detailed = api().with_details(published).await;
                    set_events.update(|list| append_new(list, detailed));
                }
                Err(e) => {
                    log_error!("chargement des événements impossible: {e}");
                    set_has_more.set(false);
                }
            }
            set_loading.set(false);
        });
    };

    // First page.
    Effect::new(move |_| {
        if page.get_untracked() == 1 && events.get_untracked().is_empty() {
            load_more();
        }
    });

    // Observe the sentinel once it is in the DOM.
    Effect::new(move |_| {
        let Some(element) = sentinel.get() else {
            return;
        };
        if observed.get_value() {
            return;
        }
        observed.set_value(true);
        let closure = Closure::<dyn Fn(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<web_sys::IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if intersecting {
                load_more();
            }
        });
        match web_sys::IntersectionObserver::new(closure.as_ref().unchecked_ref()) {
            Ok(observer) => observer.observe(&element),
            Err(_) => log_error!("IntersectionObserver indisponible"),
        }
        closure.forget();
    });

    let upcoming = Signal::derive(move || {
        events
            .get()
            .into_iter()
            .filter(|e| !is_event_passed(&e.end_date))
            .collect::<Vec<_>>()
    });
    let past = Signal::derive(move || {
        events
            .get()
            .into_iter()
            .filter(|e| is_event_passed(&e.end_date))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="max-w-5xl mx-auto p-4 space-y-8">
            <h1 class="text-3xl font-bold">"Tous les événements"</h1>

            <div>
                <h2 class="text-xl font-bold mb-4">"À venir"</h2>
                <Show when=move || upcoming.get().is_empty() && !loading.get()>
                    <p class="opacity-60">"Aucun événement à venir pour le moment."</p>
                </Show>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <For
                        each=move || upcoming.get()
                        key=|e| e.id
                        children=move |event| view! { <EventCard event=event /> }
                    />
                </div>
            </div>

            <Show when=move || !past.get().is_empty()>
                <div>
                    <h2 class="text-xl font-bold mb-4">"Événements passés"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <For
                            each=move || past.get()
                            key=|e| e.id
                            children=move |event| view! { <EventCard event=event /> }
                        />
                    </div>
                </div>
            </Show>

            <div node_ref=sentinel class="h-8 flex justify-center">
                <Show when=move || loading.get()>
                    <span class="loading loading-spinner loading-md"></span>
                </Show>
                <Show when=move || !has_more.get() && !events.get().is_empty()>
                    <p class="text-sm opacity-50">"Fin de la liste"</p>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: i64) -> Event {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": "n",
            "description": "d",
            "startDate": "2026-01-01T10:00:00Z",
            "endDate": "2026-01-01T12:00:00Z",
            "address": "a",
            "postalCode": "75000",
            "city": "Paris",
            "numberPlace": 10,
            "userId": 1
        }))
        .unwrap()
    }

    #[test]
    fn appending_drops_already_listed_ids() {
        let mut list = vec![event(1), event(2)];
        append_new(&mut list, vec![event(2), event(3)]);
        let ids: Vec<i64> = list.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
