use serde::{Deserialize, Serialize};

/// User role as issued by the backend.
///
/// `Admin` is never offered at signup; it only ever arrives in tokens and
/// profiles, and passes every role check an organizer would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Participant,
    Organizer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Participant => "PARTICIPANT",
            Role::Organizer => "ORGANIZER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PARTICIPANT" => Some(Role::Participant),
            "ORGANIZER" => Some(Role::Organizer),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Whether this role may create, edit and publish events.
    pub fn can_manage_events(&self) -> bool {
        matches!(self, Role::Organizer | Role::Admin)
    }
}

/// Minimal identity returned by `profile/basic`, used for the session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicProfile {
    pub firstname: String,
    pub role: Role,
    #[serde(default)]
    pub profile_img: Option<String>,
}

/// Full profile returned by `profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub profile_img: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEmailRequest {
    pub new_email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_names() {
        for role in [Role::Participant, Role::Organizer, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("SUPERUSER"), None);
    }

    #[test]
    fn admin_and_organizer_manage_events() {
        assert!(Role::Organizer.can_manage_events());
        assert!(Role::Admin.can_manage_events());
        assert!(!Role::Participant.can_manage_events());
    }

    #[test]
    fn basic_profile_parses_wire_shape() {
        let json = r#"{"firstname":"Marie","role":"ORGANIZER","profileImg":null}"#;
        let p: BasicProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.firstname, "Marie");
        assert_eq!(p.role, Role::Organizer);
        assert!(p.profile_img.is_none());
    }

    #[test]
    fn change_email_serializes_camel_case() {
        let req = ChangeEmailRequest {
            new_email: "a@b.fr".into(),
            password: "pw".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["newEmail"], "a@b.fr");
        assert_eq!(v["password"], "pw");
    }
}
