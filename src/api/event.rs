//! `event`, `category`, `media`, `note` and reservation endpoints.

use crate::config::api_url;
use crate::models::event::{
    CreateEventRequest, Event, EventStatistics, MediaItem, MyEventsResponse, ParticipationCount,
    PersonalNote, ReservationCheck, SearchFilters,
};
use crate::models::{Category, participation::ReserveRequest};
use crate::token::TokenStore;

use super::client::{ApiClient, HttpClient, HttpRequest, MultipartPart};
use super::error::ApiError;

/// One page of the event list.
#[derive(Debug, Clone)]
pub struct EventPage {
    pub items: Vec<Event>,
    /// From `x-total-count`, when the backend sends it.
    pub total: Option<u32>,
    pub has_more: bool,
}

impl EventPage {
    /// A full page means there may be another one behind it.
    fn assemble(items: Vec<Event>, total: Option<u32>, limit: u32) -> Self {
        let has_more = items.len() as u32 == limit;
        Self {
            items,
            total,
            has_more,
        }
    }
}

impl<C: HttpClient, S: TokenStore> ApiClient<C, S> {
    /// `GET event?page=&limit=`.
    pub async fn events_page(&self, page: u32, limit: u32) -> Result<EventPage, ApiError> {
        let response = self
            .authorized_raw(HttpRequest::get(api_url(&format!(
                "event?page={page}&limit={limit}"
            ))))
            .await?;
        let items: Vec<Event> = response.json()?;
        Ok(EventPage::assemble(items, response.total_count, limit))
    }

    /// `GET event/:id`.
    pub async fn event(&self, id: i64) -> Result<Event, ApiError> {
        self.authorized(HttpRequest::get(api_url(&format!("event/{id}"))))
            .await
    }

    /// `GET event/search?...`.
    pub async fn search_events(&self, filters: &SearchFilters) -> Result<Vec<Event>, ApiError> {
        let query = filters.to_query();
        let path = if query.is_empty() {
            "event/search".to_string()
        } else {
            format!("event/search?{query}")
        };
        self.authorized(HttpRequest::get(api_url(&path))).await
    }

    /// `POST event`.
    pub async fn create_event(&self, body: &CreateEventRequest) -> Result<Event, ApiError> {
        self.authorized(HttpRequest::post(api_url("event")).with_json(body)?)
            .await
    }

    /// `PATCH event/edit/:id`, multipart. The parts are descriptors so the
    /// interceptor can rebuild the form on a retried request.
    pub async fn update_event(&self, id: i64, parts: Vec<MultipartPart>) -> Result<(), ApiError> {
        self.authorized_unit(
            HttpRequest::patch(api_url(&format!("event/edit/{id}"))).with_multipart(parts),
        )
        .await
    }

    /// `DELETE event/:id`.
    pub async fn delete_event(&self, id: i64) -> Result<(), ApiError> {
        self.authorized_unit(HttpRequest::delete(api_url(&format!("event/{id}"))))
            .await
    }

    /// `GET category`.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.authorized(HttpRequest::get(api_url("category"))).await
    }

    /// `GET media/event/:id`.
    pub async fn event_media(&self, event_id: i64) -> Result<Vec<MediaItem>, ApiError> {
        self.authorized(HttpRequest::get(api_url(&format!("media/event/{event_id}"))))
            .await
    }

    /// `POST media/upload`, multipart.
    pub async fn upload_event_media(
        &self,
        file: web_sys::File,
        user_id: i64,
        event_id: i64,
    ) -> Result<(), ApiError> {
        let parts = vec![
            MultipartPart::file("file", file),
            MultipartPart::text("userId", user_id.to_string()),
            MultipartPart::text("eventId", event_id.to_string()),
            MultipartPart::text("type", "EVENT_PHOTO"),
        ];
        self.authorized_unit(HttpRequest::post(api_url("media/upload")).with_multipart(parts))
            .await
    }

    /// `GET event/user/:id?page=&limit=`. Older backends answer a bare
    /// array, newer ones `{items, total}`; both come back as
    /// `(items, total)`.
    pub async fn my_events(
        &self,
        user_id: i64,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<Event>, u32), ApiError> {
        let response: MyEventsResponse = self
            .authorized(HttpRequest::get(api_url(&format!(
                "event/user/{user_id}?page={page}&limit={limit}"
            ))))
            .await?;
        Ok(response.into_parts())
    }

    /// `GET event/category/:id`.
    pub async fn events_by_category(&self, category_id: i64) -> Result<Vec<Event>, ApiError> {
        self.authorized(HttpRequest::get(api_url(&format!(
            "event/category/{category_id}"
        ))))
        .await
    }

    /// `PATCH event/:id/publishing`.
    pub async fn set_published(&self, id: i64, is_published: bool) -> Result<(), ApiError> {
        let body = serde_json::json!({ "isPublished": is_published });
        self.authorized_unit(
            HttpRequest::patch(api_url(&format!("event/{id}/publishing"))).with_json(&body)?,
        )
        .await
    }

    /// `GET event/:id/participation-count`.
    pub async fn participation_count(&self, event_id: i64) -> Result<u32, ApiError> {
        let counted: ParticipationCount = self
            .authorized(HttpRequest::get(api_url(&format!(
                "event/{event_id}/participation-count"
            ))))
            .await?;
        Ok(counted.count)
    }

    /// `GET event/stats/general`.
    pub async fn statistics(&self) -> Result<EventStatistics, ApiError> {
        self.authorized(HttpRequest::get(api_url("event/stats/general")))
            .await
    }

    /// `GET event/:id/personal-note?userId=`. A 404 just means no note yet.
    pub async fn personal_note(
        &self,
        event_id: i64,
        user_id: i64,
    ) -> Result<Option<PersonalNote>, ApiError> {
        match self
            .authorized::<PersonalNote>(HttpRequest::get(api_url(&format!(
                "event/{event_id}/personal-note?userId={user_id}"
            ))))
            .await
        {
            Ok(note) => Ok(Some(note)),
            Err(e) if e.status() == Some(404) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// `POST event/:id/personal-note`.
    pub async fn save_personal_note(&self, note: &PersonalNote) -> Result<(), ApiError> {
        self.authorized_unit(
            HttpRequest::post(api_url(&format!("event/{}/personal-note", note.event_id)))
                .with_json(note)?,
        )
        .await
    }

    /// `POST participation/reserve`.
    pub async fn reserve(&self, event_id: i64) -> Result<(), ApiError> {
        let body = ReserveRequest { event_id };
        self.authorized_unit(HttpRequest::post(api_url("participation/reserve")).with_json(&body)?)
            .await
    }

    /// `GET participation/check/:eventId`.
    pub async fn check_reservation(&self, event_id: i64) -> Result<bool, ApiError> {
        let checked: ReservationCheck = self
            .authorized(HttpRequest::get(api_url(&format!(
                "participation/check/{event_id}"
            ))))
            .await?;
        Ok(checked.has_participation)
    }

    /// Attach media and participation counts to a batch of events. The
    /// per-event fetches all race independently; a failed fetch leaves the
    /// event as the list endpoint returned it.
    pub async fn with_details(&self, events: Vec<Event>) -> Vec<Event> {
        let detailed = events.into_iter().map(|mut event| async move {
            let (media, count) = futures::future::join(
                self.event_media(event.id),
                self.participation_count(event.id),
            )
            .await;
            if let Ok(media) = media {
                if !media.is_empty() {
                    event.media = media;
                }
            }
            if let Ok(count) = count {
                event.participation_count = Some(count);
            }
            event
        });
        futures::future::join_all(detailed).await
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
    fn full_pages_announce_more_and_short_pages_do_not() {
        let full = EventPage::assemble(vec![event(1), event(2), event(3)], Some(12), 3);
        assert!(full.has_more);
        assert_eq!(full.total, Some(12));

        let last = EventPage::assemble(vec![event(10)], None, 3);
        assert!(!last.has_more);

        let empty = EventPage::assemble(Vec::new(), Some(0), 3);
        assert!(!empty.has_more);
    }
}
