//! Thin redirect onto the search page pre-filtered by category.

use leptos::prelude::*;

use crate::models::event::SearchFilters;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn CategoryPage(id: i64) -> impl IntoView {
    let router = use_router();

    Effect::new(move |_| {
        let query = SearchFilters::for_category(id).to_query();
        router.navigate(AppRoute::Search(Some(query)));
    });

    view! {
        <div class="flex items-center justify-center min-h-[40vh]">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}
