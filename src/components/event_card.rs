//! Card for the list, search and category grids.

use leptos::prelude::*;

use crate::config::media_url;
use crate::date::{format_short_event_date, is_event_passed, to_local_naive};
use crate::models::Event;
use crate::web::router::Link;

/// Capacity badge shown from 70% fill onwards.
pub fn fill_badge(event: &Event, count: u32) -> Option<(&'static str, &'static str)> {
    if event.is_full(count) {
        return Some(("Complet", "badge badge-error"));
    }
    let rate = event.fill_rate(count);
    if rate >= 90.0 {
        Some(("Presque complet", "badge badge-error badge-outline"))
    } else if rate >= 70.0 {
        Some(("Se remplit vite", "badge badge-warning"))
    } else {
        None
    }
}

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let date = format_short_event_date(
        &to_local_naive(&event.start_date),
        &to_local_naive(&event.end_date),
    );
    let passed = is_event_passed(&event.end_date);
    let image = event.first_image().map(media_url);
    let category = event.category_name().map(str::to_string);
    let badge = event
        .participation_count
        .and_then(|count| fill_badge(&event, count));
    let places = event
        .participation_count
        .map(|count| format!("{count}/{} places", event.number_place));

    view! {
        <Link
            to=format!("/event/{}", event.id)
            class=if passed { "card bg-base-100 shadow opacity-60" } else { "card bg-base-100 shadow hover:shadow-lg" }
        >
            {image.map(|src| view! {
                <figure class="h-40 overflow-hidden">
                    <img src=src alt=event.name.clone() class="w-full object-cover" />
                </figure>
            })}
            <div class="card-body">
                <h3 class="card-title">{event.name.clone()}</h3>
                <p class="text-sm opacity-70">{date} " · " {event.city.clone()}</p>
                <div class="card-actions items-center">
                    {category.map(|name| view! { <span class="badge badge-outline">{name}</span> })}
                    {badge.map(|(label, class)| view! { <span class=class>{label}</span> })}
                    {places.map(|label| view! { <span class="text-xs opacity-60">{label}</span> })}
                    {passed.then(|| view! { <span class="badge badge-neutral">"Terminé"</span> })}
                </div>
            </div>
        </Link>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(places: u32) -> Event {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "n",
            "description": "d",
            "startDate": "2026-01-01T10:00:00Z",
            "endDate": "2026-01-01T12:00:00Z",
            "address": "a",
            "postalCode": "75000",
            "city": "Paris",
            "numberPlace": places,
            "userId": 1
        }))
        .unwrap()
    }

    #[test]
    fn badge_thresholds_at_70_90_and_full() {
        let e = event(100);
        assert_eq!(fill_badge(&e, 50), None);
        assert_eq!(fill_badge(&e, 70).unwrap().0, "Se remplit vite");
        assert_eq!(fill_badge(&e, 90).unwrap().0, "Presque complet");
        assert_eq!(fill_badge(&e, 100).unwrap().0, "Complet");
        assert_eq!(fill_badge(&e, 120).unwrap().0, "Complet");
    }
}
