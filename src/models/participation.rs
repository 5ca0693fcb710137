use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ParticipationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipationStatus::Pending => "PENDING",
            ParticipationStatus::Accepted => "ACCEPTED",
            ParticipationStatus::Rejected => "REJECTED",
        }
    }

    /// Label shown in the dashboards.
    pub fn label_fr(&self) -> &'static str {
        match self {
            ParticipationStatus::Pending => "En attente",
            ParticipationStatus::Accepted => "Acceptée",
            ParticipationStatus::Rejected => "Refusée",
        }
    }
}

/// Flat row from `participation/my-events-requests` and the organizer
/// history endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerRequest {
    pub organizer_id: i64,
    pub event_id: i64,
    pub event_name: String,
    pub status: ParticipationStatus,
    pub participant_id: i64,
    pub participant_name: String,
}

/// Flat row from `participation/my-requests`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRequest {
    pub event_id: i64,
    pub event_name: String,
    pub event_description: String,
    pub status: ParticipationStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveRequest {
    pub event_id: i64,
}

/// `PATCH participation/accept` and `participation/reject` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationDecision {
    pub event_id: i64,
    pub participant_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organizer_row_parses_flat_wire_shape() {
        let json = r#"{
            "organizerId": 1,
            "eventId": 8,
            "eventName": "Atelier cuisine",
            "status": "PENDING",
            "participantId": 22,
            "participantName": "Lucie Bernard"
        }"#;
        let row: OrganizerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(row.event_id, 8);
        assert_eq!(row.status, ParticipationStatus::Pending);
        assert_eq!(row.participant_name, "Lucie Bernard");
    }

    #[test]
    fn participant_row_parses_flat_wire_shape() {
        let json = r#"{
            "eventId": 8,
            "eventName": "Atelier cuisine",
            "eventDescription": "Cuisine de saison",
            "status": "ACCEPTED"
        }"#;
        let row: ParticipantRequest = serde_json::from_str(json).unwrap();
        assert_eq!(row.status, ParticipationStatus::Accepted);
        assert_eq!(row.status.label_fr(), "Acceptée");
    }

    #[test]
    fn decision_serializes_camel_case() {
        let body = ParticipationDecision {
            event_id: 8,
            participant_id: 22,
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["eventId"], 8);
        assert_eq!(v["participantId"], 22);
    }
}
