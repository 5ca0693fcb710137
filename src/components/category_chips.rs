//! Category chips linking into the pre-filtered search.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::log::log_error;
use crate::models::Category;
use crate::web::router::Link;

#[component]
pub fn CategoryChips() -> impl IntoView {
    let (categories, set_categories) = signal(Vec::<Category>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match api().categories().await {
                Ok(list) => set_categories.set(list),
                Err(e) => log_error!("chargement des catégories impossible: {e}"),
            }
        });
    });

    view! {
        <div class="flex flex-wrap gap-2">
            <For
                each=move || categories.get()
                key=|c| c.id
                children=move |category| {
                    view! {
                        <Link to=format!("/category/{}", category.id) class="badge badge-lg badge-outline">
                            {category.name}
                        </Link>
                    }
                }
            />
        </div>
    }
}
