use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// One uploaded media row. The backend stores a filename; the public URL is
/// built through [`crate::config::media_url`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub img: String,
}

/// Event as returned by the list, detail, search and category endpoints.
///
/// Categories, media and the participation count are embedded by some
/// endpoints and absent from others, so they all default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    #[serde(default)]
    pub budget: Option<f64>,
    pub number_place: u32,
    pub user_id: i64,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub participation_count: Option<u32>,
}

impl Event {
    /// Filename of the first attached image, if any.
    pub fn first_image(&self) -> Option<&str> {
        self.media.first().map(|m| m.img.as_str())
    }

    pub fn category_name(&self) -> Option<&str> {
        self.categories.first().map(|c| c.name.as_str())
    }

    /// Fill rate in percent, clamped to 100.
    pub fn fill_rate(&self, count: u32) -> f64 {
        if self.number_place == 0 {
            return 100.0;
        }
        (f64::from(count) * 100.0 / f64::from(self.number_place)).min(100.0)
    }

    pub fn is_full(&self, count: u32) -> bool {
        count >= self.number_place
    }
}

/// `POST event` body. The owner id comes from the decoded access token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    pub description: String,
    pub category_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub budget: Option<f64>,
    pub number_place: u32,
    pub user_id: i64,
}

/// Private note a signed-in user keeps on an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalNote {
    #[serde(default)]
    pub id: Option<i64>,
    pub user_id: i64,
    pub event_id: i64,
    pub content: String,
}

/// `GET event/stats/general` body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStatistics {
    pub total_events: u32,
    pub total_participants: u32,
    pub active_events: u32,
    pub average_fill_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParticipationCount {
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCheck {
    pub has_participation: bool,
}

/// `GET event/user/:id` answers either a paged object or a bare array
/// depending on the backend version; both are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MyEventsResponse {
    Paged { items: Vec<Event>, total: u32 },
    Plain(Vec<Event>),
}

impl MyEventsResponse {
    pub fn into_parts(self) -> (Vec<Event>, u32) {
        match self {
            MyEventsResponse::Paged { items, total } => (items, total),
            MyEventsResponse::Plain(items) => {
                let total = items.len() as u32;
                (items, total)
            }
        }
    }
}

/// Search criteria carried in the `/search` query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub term: Option<String>,
    pub city: Option<String>,
    pub category_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl SearchFilters {
    pub fn for_category(category_id: i64) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_none()
            && self.city.is_none()
            && self.category_id.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Encode as a query string, without the leading `?`. Parameters with no
    /// value are omitted, matching the original request builder.
    pub fn to_query(&self) -> String {
        fn push(pairs: &mut Vec<String>, key: &str, value: &str) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                pairs.push(format!("{key}={}", urlencoding::encode(trimmed)));
            }
        }
        let mut pairs: Vec<String> = Vec::new();
        if let Some(term) = &self.term {
            push(&mut pairs, "term", term);
        }
        if let Some(city) = &self.city {
            push(&mut pairs, "city", city);
        }
        if let Some(id) = self.category_id {
            push(&mut pairs, "categoryId", &id.to_string());
        }
        if let Some(start) = &self.start_date {
            push(&mut pairs, "startDate", start);
        }
        if let Some(end) = &self.end_date {
            push(&mut pairs, "endDate", end);
        }
        pairs.join("&")
    }

    /// Parse a query string (no leading `?`). Unknown keys are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut filters = Self::default();
        for pair in query.split('&') {
            let Some((key, raw)) = pair.split_once('=') else {
                continue;
            };
            let value = match urlencoding::decode(raw) {
                Ok(v) => v.into_owned(),
                Err(_) => continue,
            };
            if value.is_empty() {
                continue;
            }
            match key {
                "term" => filters.term = Some(value),
                "city" => filters.city = Some(value),
                "categoryId" => filters.category_id = value.parse().ok(),
                "startDate" => filters.start_date = Some(value),
                "endDate" => filters.end_date = Some(value),
                _ => {}
            }
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event_json() -> &'static str {
        r#"{
            "id": 12,
            "name": "Concert au parc",
            "description": "Plein air",
            "startDate": "2026-07-14T18:00:00.000Z",
            "endDate": "2026-07-14T23:00:00.000Z",
            "address": "1 rue des Lilas",
            "postalCode": "75012",
            "city": "Paris",
            "budget": null,
            "numberPlace": 120,
            "userId": 3,
            "isPublished": true,
            "categories": [{"id": 2, "name": "Musique"}],
            "media": [{"img": "abc.png"}],
            "participationCount": 30
        }"#
    }

    #[test]
    fn event_parses_wire_shape() {
        let event: Event = serde_json::from_str(sample_event_json()).unwrap();
        assert_eq!(event.id, 12);
        assert_eq!(event.city, "Paris");
        assert_eq!(event.first_image(), Some("abc.png"));
        assert_eq!(event.category_name(), Some("Musique"));
        assert!(event.budget.is_none());
        assert!(event.is_published);
    }

    #[test]
    fn event_tolerates_missing_embedded_collections() {
        let json = r#"{
            "id": 1,
            "name": "n",
            "description": "d",
            "startDate": "2026-01-01T10:00:00Z",
            "endDate": "2026-01-01T12:00:00Z",
            "address": "a",
            "postalCode": "75000",
            "city": "Paris",
            "numberPlace": 10,
            "userId": 1
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.categories.is_empty());
        assert!(event.media.is_empty());
        assert!(event.participation_count.is_none());
        assert!(!event.is_published);
    }

    #[test]
    fn fill_rate_clamps_and_handles_zero_capacity() {
        let mut event: Event = serde_json::from_str(sample_event_json()).unwrap();
        assert_eq!(event.fill_rate(30), 25.0);
        assert_eq!(event.fill_rate(500), 100.0);
        assert!(!event.is_full(119));
        assert!(event.is_full(120));
        event.number_place = 0;
        assert_eq!(event.fill_rate(0), 100.0);
    }

    #[test]
    fn create_request_serializes_camel_case() {
        let req = CreateEventRequest {
            name: "n".into(),
            description: "d".into(),
            category_id: 4,
            start_date: "2026-07-14T18:00:00Z".parse().unwrap(),
            end_date: "2026-07-14T23:00:00Z".parse().unwrap(),
            address: "a".into(),
            city: "Paris".into(),
            postal_code: "75012".into(),
            budget: Some(100.0),
            number_place: 50,
            user_id: 9,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["categoryId"], 4);
        assert_eq!(v["numberPlace"], 50);
        assert_eq!(v["userId"], 9);
        assert!(v["startDate"].as_str().unwrap().starts_with("2026-07-14T18"));
    }

    #[test]
    fn my_events_accepts_both_response_shapes() {
        let paged = format!(r#"{{"items":[{}],"total":7}}"#, sample_event_json());
        let (items, total) = serde_json::from_str::<MyEventsResponse>(&paged)
            .unwrap()
            .into_parts();
        assert_eq!(items.len(), 1);
        assert_eq!(total, 7);

        let plain = format!("[{}]", sample_event_json());
        let (items, total) = serde_json::from_str::<MyEventsResponse>(&plain)
            .unwrap()
            .into_parts();
        assert_eq!(items.len(), 1);
        assert_eq!(total, 1);
    }

    #[test]
    fn search_filters_round_trip_through_query() {
        let filters = SearchFilters {
            term: Some("fête de l'été".into()),
            city: Some("Lyon".into()),
            category_id: Some(3),
            start_date: Some("2026-06-01".into()),
            end_date: None,
        };
        let query = filters.to_query();
        assert!(query.contains("categoryId=3"));
        assert!(!query.contains("endDate"));
        assert_eq!(SearchFilters::from_query(&query), filters);
    }

    #[test]
    fn fully_filled_filters_encode_every_pair_in_order() {
        let filters = SearchFilters {
            term: Some("jazz".into()),
            city: Some("Nice".into()),
            category_id: Some(8),
            start_date: Some("2026-06-01".into()),
            end_date: Some("2026-06-30".into()),
        };
        assert_eq!(
            filters.to_query(),
            "term=jazz&city=Nice&categoryId=8&startDate=2026-06-01&endDate=2026-06-30"
        );
        assert_eq!(SearchFilters::from_query(&filters.to_query()), filters);
    }

    #[test]
    fn search_filters_ignore_unknown_and_empty_params() {
        let filters = SearchFilters::from_query("term=&junk=1&city=Nice");
        assert_eq!(filters.city.as_deref(), Some("Nice"));
        assert!(filters.term.is_none());
        assert!(!filters.is_empty());
        assert!(SearchFilters::from_query("").is_empty());
    }
}
