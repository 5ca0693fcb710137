//! Event form: one state struct shared by the create and edit pages.
//!
//! `RwSignal` fields travel as props; a parallel errors struct carries the
//! per-field messages filled by `validate`.

use chrono::NaiveDateTime;
use leptos::prelude::*;

use crate::api::client::MultipartPart;
use crate::date::{local_naive_to_utc, parse_datetime_local, to_datetime_local_value};
use crate::models::Category;
use crate::models::event::{CreateEventRequest, Event};
use crate::validate;

#[derive(Clone, Copy, Default)]
pub struct EventFormErrors {
    pub name: RwSignal<Option<String>>,
    pub description: RwSignal<Option<String>>,
    pub category: RwSignal<Option<String>>,
    pub start: RwSignal<Option<String>>,
    pub end: RwSignal<Option<String>>,
    pub address: RwSignal<Option<String>>,
    pub city: RwSignal<Option<String>>,
    pub postal_code: RwSignal<Option<String>>,
    pub budget: RwSignal<Option<String>>,
    pub number_place: RwSignal<Option<String>>,
    pub image: RwSignal<Option<String>>,
}

#[derive(Clone, Copy)]
pub struct EventFormState {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub category_id: RwSignal<Option<i64>>,
    /// `datetime-local` input values.
    pub start: RwSignal<String>,
    pub end: RwSignal<String>,
    pub address: RwSignal<String>,
    pub city: RwSignal<String>,
    pub postal_code: RwSignal<String>,
    pub budget: RwSignal<String>,
    pub number_place: RwSignal<String>,
    pub image: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub is_published: RwSignal<bool>,
    pub errors: EventFormErrors,
}

impl EventFormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            category_id: RwSignal::new(None),
            start: RwSignal::new(String::new()),
            end: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            postal_code: RwSignal::new(String::new()),
            budget: RwSignal::new(String::new()),
            number_place: RwSignal::new(String::new()),
            image: RwSignal::new_local(None),
            is_published: RwSignal::new(false),
            errors: EventFormErrors::default(),
        }
    }

    /// Prefill from an existing event, for the edit page.
    pub fn load(&self, event: &Event) {
        self.name.set(event.name.clone());
        self.description.set(event.description.clone());
        self.category_id.set(event.categories.first().map(|c| c.id));
        self.start.set(to_datetime_local_value(&event.start_date));
        self.end.set(to_datetime_local_value(&event.end_date));
        self.address.set(event.address.clone());
        self.city.set(event.city.clone());
        self.postal_code.set(event.postal_code.clone());
        self.budget
            .set(event.budget.map(|b| b.to_string()).unwrap_or_default());
        self.number_place.set(event.number_place.to_string());
        self.is_published.set(event.is_published);
    }

    /// Store a picked file if it passes the image checks.
    pub fn set_image(&self, file: Option<web_sys::File>) {
        match file {
            None => {
                self.image.set(None);
                self.errors.image.set(None);
            }
            Some(file) => match validate::validate_image(&file.type_(), file.size()) {
                Ok(()) => {
                    self.image.set(Some(file));
                    self.errors.image.set(None);
                }
                Err(message) => {
                    self.image.set(None);
                    self.errors.image.set(Some(message));
                }
            },
        }
    }

    fn start_value(&self) -> Option<NaiveDateTime> {
        parse_datetime_local(&self.start.get_untracked())
    }

    fn end_value(&self) -> Option<NaiveDateTime> {
        parse_datetime_local(&self.end.get_untracked())
    }

    /// Run every field rule for a new event; fills the error signals and
    /// reports whether the form may be submitted.
    pub fn validate(&self, now: NaiveDateTime) -> bool {
        self.run_validation(Some(now))
    }

    /// Same rules for an existing event, except the future-start check:
    /// an event that already started must stay editable.
    pub fn validate_for_edit(&self) -> bool {
        self.run_validation(None)
    }

    fn run_validation(&self, create_after: Option<NaiveDateTime>) -> bool {
        let errors = self.errors;
        errors
            .name
            .set(validate::validate_event_name(&self.name.get_untracked()).err());
        errors.description.set(
            validate::validate_event_description(&self.description.get_untracked()).err(),
        );
        errors
            .category
            .set(validate::validate_event_category(self.category_id.get_untracked()).err());
        let start = self.start_value();
        let end = self.end_value();
        errors.start.set(match create_after {
            Some(now) => validate::validate_event_start(start, now).err(),
            None => validate::validate_event_start_edit(start).err(),
        });
        errors.end.set(validate::validate_event_end(end, start).err());
        errors
            .address
            .set(validate::validate_event_address(&self.address.get_untracked()).err());
        errors
            .city
            .set(validate::validate_event_city(&self.city.get_untracked()).err());
        errors
            .postal_code
            .set(validate::validate_postal_code(&self.postal_code.get_untracked()).err());
        errors
            .budget
            .set(validate::validate_budget(&self.budget.get_untracked()).err());
        errors
            .number_place
            .set(validate::validate_number_place(&self.number_place.get_untracked()).err());

        [
            errors.name,
            errors.description,
            errors.category,
            errors.start,
            errors.end,
            errors.address,
            errors.city,
            errors.postal_code,
            errors.budget,
            errors.number_place,
            errors.image,
        ]
        .iter()
        .all(|e| e.get_untracked().is_none())
    }

    /// Build the `POST event` body. Only meaningful after `validate`.
    pub fn to_create_request(&self, user_id: i64) -> Option<CreateEventRequest> {
        let start = self.start_value()?;
        let end = self.end_value()?;
        let category_id = self.category_id.get_untracked()?;
        let budget = validate::validate_budget(&self.budget.get_untracked()).ok()?;
        let number_place = validate::validate_number_place(&self.number_place.get_untracked()).ok()?;
        Some(CreateEventRequest {
            name: self.name.get_untracked().trim().to_string(),
            description: self.description.get_untracked().trim().to_string(),
            category_id,
            start_date: local_naive_to_utc(start),
            end_date: local_naive_to_utc(end),
            address: self.address.get_untracked().trim().to_string(),
            city: self.city.get_untracked().trim().to_string(),
            postal_code: self.postal_code.get_untracked().trim().to_string(),
            budget,
            number_place,
            user_id,
        })
    }

    /// Build the multipart body for `PATCH event/edit/:id`.
    pub fn to_update_parts(&self) -> Vec<MultipartPart> {
        let mut parts = vec![
            MultipartPart::text("name", self.name.get_untracked().trim().to_string()),
            MultipartPart::text(
                "description",
                self.description.get_untracked().trim().to_string(),
            ),
            MultipartPart::text("address", self.address.get_untracked().trim().to_string()),
            MultipartPart::text("city", self.city.get_untracked().trim().to_string()),
            MultipartPart::text(
                "postalCode",
                self.postal_code.get_untracked().trim().to_string(),
            ),
            MultipartPart::text(
                "isPublished",
                if self.is_published.get_untracked() { "true" } else { "false" },
            ),
        ];
        if let Some(category_id) = self.category_id.get_untracked() {
            parts.push(MultipartPart::text("categoryId", category_id.to_string()));
        }
        if let Some(start) = self.start_value() {
            parts.push(MultipartPart::text(
                "startDate",
                local_naive_to_utc(start).to_rfc3339(),
            ));
        }
        if let Some(end) = self.end_value() {
            parts.push(MultipartPart::text(
                "endDate",
                local_naive_to_utc(end).to_rfc3339(),
            ));
        }
        if let Ok(Some(budget)) = validate::validate_budget(&self.budget.get_untracked()) {
            parts.push(MultipartPart::text("budget", budget.to_string()));
        }
        if let Ok(places) = validate::validate_number_place(&self.number_place.get_untracked()) {
            parts.push(MultipartPart::text("numberPlace", places.to_string()));
        }
        if let Some(file) = self.image.get_untracked() {
            parts.push(MultipartPart::file("image", file));
        }
        parts
    }
}

impl Default for EventFormState {
    fn default() -> Self {
        Self::new()
    }
}

fn field_error(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="text-error text-sm mt-1">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}

/// The shared input block of the create and edit pages.
#[component]
pub fn EventFormFields(
    state: EventFormState,
    categories: Signal<Vec<Category>>,
) -> impl IntoView {
    let errors = state.errors;
    let on_file = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        state.set_image(input.files().and_then(|files| files.get(0)));
    };

    view! {
        <div class="form-control">
            <label class="label" for="event-name">
                <span class="label-text">"Nom de l'événement"</span>
            </label>
            <input
                id="event-name"
                type="text"
                class="input input-bordered"
                prop:value=state.name
                on:input=move |ev| state.name.set(event_target_value(&ev))
            />
            {field_error(errors.name)}
        </div>

        <div class="form-control">
            <label class="label" for="event-description">
                <span class="label-text">"Description"</span>
            </label>
            <textarea
                id="event-description"
                class="textarea textarea-bordered"
                prop:value=state.description
                on:input=move |ev| state.description.set(event_target_value(&ev))
            ></textarea>
            {field_error(errors.description)}
        </div>

        <div class="form-control">
            <label class="label" for="event-category">
                <span class="label-text">"Catégorie"</span>
            </label>
            <select
                id="event-category"
                class="select select-bordered"
                on:change=move |ev| {
                    state.category_id.set(event_target_value(&ev).parse().ok());
                }
            >
                <option value="" selected=move || state.category_id.get().is_none()>
                    "Choisir une catégorie"
                </option>
                <For
                    each=move || categories.get()
                    key=|c| c.id
                    children=move |category| {
                        let id = category.id;
                        view! {
                            <option
                                value=id.to_string()
                                selected=move || state.category_id.get() == Some(id)
                            >
                                {category.name}
                            </option>
                        }
                    }
                />
            </select>
            {field_error(errors.category)}
        </div>

        <div class="grid grid-cols-2 gap-4">
            <div class="form-control">
                <label class="label" for="event-start">
                    <span class="label-text">"Début"</span>
                </label>
                <input
                    id="event-start"
                    type="datetime-local"
                    class="input input-bordered"
                    prop:value=state.start
                    on:input=move |ev| state.start.set(event_target_value(&ev))
                />
                {field_error(errors.start)}
            </div>
            <div class="form-control">
                <label class="label" for="event-end">
                    <span class="label-text">"Fin"</span>
                </label>
                <input
                    id="event-end"
                    type="datetime-local"
                    class="input input-bordered"
                    prop:value=state.end
                    on:input=move |ev| state.end.set(event_target_value(&ev))
                />
                {field_error(errors.end)}
            </div>
        </div>

        <div class="form-control">
            <label class="label" for="event-address">
                <span class="label-text">"Adresse"</span>
            </label>
            <input
                id="event-address"
                type="text"
                class="input input-bordered"
                prop:value=state.address
                on:input=move |ev| state.address.set(event_target_value(&ev))
            />
            {field_error(errors.address)}
        </div>

        <div class="grid grid-cols-2 gap-4">
            <div class="form-control">
                <label class="label" for="event-city">
                    <span class="label-text">"Ville"</span>
                </label>
                <input
                    id="event-city"
                    type="text"
                    class="input input-bordered"
                    prop:value=state.city
                    on:input=move |ev| state.city.set(event_target_value(&ev))
                />
                {field_error(errors.city)}
            </div>
            <div class="form-control">
                <label class="label" for="event-postal-code">
                    <span class="label-text">"Code postal"</span>
                </label>
                <input
                    id="event-postal-code"
                    type="text"
                    class="input input-bordered"
                    prop:value=state.postal_code
                    on:input=move |ev| state.postal_code.set(event_target_value(&ev))
                />
                {field_error(errors.postal_code)}
            </div>
        </div>

        <div class="grid grid-cols-2 gap-4">
            <div class="form-control">
                <label class="label" for="event-budget">
                    <span class="label-text">"Budget (optionnel)"</span>
                </label>
                <input
                    id="event-budget"
                    type="text"
                    class="input input-bordered"
                    prop:value=state.budget
                    on:input=move |ev| state.budget.set(event_target_value(&ev))
                />
                {field_error(errors.budget)}
            </div>
            <div class="form-control">
                <label class="label" for="event-places">
                    <span class="label-text">"Nombre de places"</span>
                </label>
                <input
                    id="event-places"
                    type="number"
                    min="1"
                    class="input input-bordered"
                    prop:value=state.number_place
                    on:input=move |ev| state.number_place.set(event_target_value(&ev))
                />
                {field_error(errors.number_place)}
            </div>
        </div>

        <div class="form-control">
            <label class="label" for="event-image">
                <span class="label-text">"Image (5 Mo max)"</span>
            </label>
            <input
                id="event-image"
                type="file"
                accept="image/*"
                class="file-input file-input-bordered"
                on:change=on_file
            />
            {field_error(errors.image)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn filled() -> EventFormState {
        let state = EventFormState::new();
        state.name.set("Concert".into());
        state.description.set("Plein air".into());
        state.category_id.set(Some(2));
        state.start.set("2026-07-14T18:00".into());
        state.end.set("2026-07-14T23:00".into());
        state.address.set("1 rue des Lilas".into());
        state.city.set("Paris".into());
        state.postal_code.set("75012".into());
        state.budget.set("150".into());
        state.number_place.set("120".into());
        state
    }

    #[test]
    fn a_complete_form_validates_and_builds_the_request() {
        let state = filled();
        assert!(state.validate(now()));
        let request = state.to_create_request(9).unwrap();
        assert_eq!(request.name, "Concert");
        assert_eq!(request.category_id, 2);
        assert_eq!(request.budget, Some(150.0));
        assert_eq!(request.number_place, 120);
        assert_eq!(request.user_id, 9);
        assert!(request.end_date > request.start_date);
    }

    #[test]
    fn missing_fields_fill_their_error_slots() {
        let state = EventFormState::new();
        assert!(!state.validate(now()));
        assert!(state.errors.name.get_untracked().is_some());
        assert!(state.errors.category.get_untracked().is_some());
        assert!(state.errors.start.get_untracked().is_some());
        assert!(state.errors.postal_code.get_untracked().is_some());
        assert!(state.to_create_request(1).is_none());
    }

    #[test]
    fn past_start_date_is_refused() {
        let state = filled();
        state.start.set("2026-05-01T10:00".into());
        assert!(!state.validate(now()));
        assert_eq!(
            state.errors.start.get_untracked().as_deref(),
            Some("La date de début doit être dans le futur")
        );
    }

    #[test]
    fn a_started_event_still_validates_for_edit() {
        let state = filled();
        state.start.set("2026-05-01T10:00".into());
        state.end.set("2026-05-01T12:00".into());
        // Creation refuses a past start; editing must not.
        assert!(!state.validate(now()));
        assert!(state.validate_for_edit());
    }

    #[test]
    fn edit_validation_still_requires_a_start() {
        let state = filled();
        state.start.set(String::new());
        assert!(!state.validate_for_edit());
        assert!(state.errors.start.get_untracked().is_some());
    }

    #[test]
    fn update_parts_carry_the_publication_flag_and_skip_empty_budget() {
        let state = filled();
        state.budget.set(String::new());
        state.is_published.set(true);
        let parts = state.to_update_parts();
        let text = |name: &str| {
            parts.iter().find_map(|p| match p {
                MultipartPart::Text { name: n, value } if n == name => Some(value.clone()),
                _ => None,
            })
        };
        assert_eq!(text("isPublished").as_deref(), Some("true"));
        assert_eq!(text("name").as_deref(), Some("Concert"));
        assert_eq!(text("numberPlace").as_deref(), Some("120"));
        assert_eq!(text("budget"), None);
        assert!(text("startDate").unwrap().starts_with("2026-07-14T"));
    }

    #[test]
    fn load_prefills_from_the_wire_event() {
        let event: Event = serde_json::from_value(serde_json::json!({
            "id": 5,
            "name": "Brocante",
            "description": "d",
            "startDate": "2026-07-14T18:00:00Z",
            "endDate": "2026-07-14T23:00:00Z",
            "address": "a",
            "postalCode": "75000",
            "city": "Paris",
            "budget": 40.0,
            "numberPlace": 30,
            "userId": 1,
            "isPublished": true,
            "categories": [{"id": 7, "name": "Marché"}]
        }))
        .unwrap();
        let state = EventFormState::new();
        state.load(&event);
        assert_eq!(state.name.get_untracked(), "Brocante");
        assert_eq!(state.category_id.get_untracked(), Some(7));
        assert_eq!(state.budget.get_untracked(), "40");
        assert!(state.is_published.get_untracked());
        assert!(!state.start.get_untracked().is_empty());
    }
}
