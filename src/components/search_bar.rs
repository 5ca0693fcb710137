//! Search filter bar: term, city, category, date range.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::api;
use crate::log::log_error;
use crate::models::Category;
use crate::models::event::SearchFilters;

#[component]
pub fn SearchBar(
    initial: SearchFilters,
    #[prop(into)] on_search: Callback<SearchFilters>,
) -> impl IntoView {
    let term = RwSignal::new(initial.term.clone().unwrap_or_default());
    let city = RwSignal::new(initial.city.clone().unwrap_or_default());
    let category_id = RwSignal::new(initial.category_id);
    let start_date = RwSignal::new(initial.start_date.clone().unwrap_or_default());
    let end_date = RwSignal::new(initial.end_date.clone().unwrap_or_default());
    let (categories, set_categories) = signal(Vec::<Category>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match api().categories().await {
                Ok(list) => set_categories.set(list),
                Err(e) => log_error!("chargement des catégories impossible: {e}"),
            }
        });
    });

    let build_filters = move || {
        let non_empty = |s: String| {
            let trimmed = s.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        };
        SearchFilters {
            term: non_empty(term.get_untracked()),
            city: non_empty(city.get_untracked()),
            category_id: category_id.get_untracked(),
            start_date: non_empty(start_date.get_untracked()),
            end_date: non_empty(end_date.get_untracked()),
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(build_filters());
    };

    view! {
        <form class="flex flex-wrap items-end gap-2 bg-base-100 p-4 rounded-box shadow" on:submit=on_submit>
            <div class="form-control">
                <label class="label" for="search-term">
                    <span class="label-text">"Mot-clé"</span>
                </label>
                <input
                    id="search-term"
                    type="text"
                    class="input input-bordered input-sm"
                    prop:value=term
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <label class="label" for="search-city">
                    <span class="label-text">"Ville"</span>
                </label>
                <input
                    id="search-city"
                    type="text"
                    class="input input-bordered input-sm"
                    prop:value=city
                    on:input=move |ev| city.set(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <label class="label" for="search-category">
                    <span class="label-text">"Catégorie"</span>
                </label>
                <select
                    id="search-category"
                    class="select select-bordered select-sm"
                    on:change=move |ev| category_id.set(event_target_value(&ev).parse().ok())
                >
                    <option value="" selected=move || category_id.get().is_none()>
                        "Toutes"
                    </option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id
                        children=move |category| {
                            let id = category.id;
                            view! {
                                <option
                                    value=id.to_string()
                                    selected=move || category_id.get() == Some(id)
                                >
                                    {category.name}
                                </option>
                            }
                        }
                    />
                </select>
            </div>
            <div class="form-control">
                <label class="label" for="search-start">
                    <span class="label-text">"À partir du"</span>
                </label>
                <input
                    id="search-start"
                    type="date"
                    class="input input-bordered input-sm"
                    prop:value=start_date
                    on:input=move |ev| start_date.set(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <label class="label" for="search-end">
                    <span class="label-text">"Jusqu'au"</span>
                </label>
                <input
                    id="search-end"
                    type="date"
                    class="input input-bordered input-sm"
                    prop:value=end_date
                    on:input=move |ev| end_date.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-primary btn-sm">"Rechercher"</button>
        </form>
    }
}
