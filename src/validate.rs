//! Field validators for the signup, signin and event forms.
//!
//! Each rule returns `Ok(())` or the message displayed under the field. The
//! backend revalidates everything; these checks only exist to give immediate
//! feedback.

use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::models::Role;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    })
}

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z]+$").expect("Failed to compile name regex"))
}

fn postal_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{5}$").expect("Failed to compile postal code regex"))
}

fn validate_person_name(value: &str, label: &str, required_msg: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(required_msg.to_string());
    }
    if value.chars().count() < 2 {
        return Err(format!("{label} doit comporter au moins 2 caractères"));
    }
    if !name_regex().is_match(value) {
        return Err(format!("{label} ne peut pas contenir de chiffres"));
    }
    Ok(())
}

pub fn validate_firstname(value: &str) -> Result<(), String> {
    validate_person_name(value, "Le prénom", "Le prénom est requis")
}

pub fn validate_lastname(value: &str) -> Result<(), String> {
    validate_person_name(value, "Le nom de famille", "Le nom de famille est requis")
}

pub fn validate_email(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("L'email est requis".to_string());
    }
    if !email_regex().is_match(value) {
        return Err("Format d'email invalide".to_string());
    }
    Ok(())
}

/// Signup only offers participant and organizer; anything else is refused.
pub fn validate_signup_role(role: Role) -> Result<(), String> {
    if matches!(role, Role::Participant | Role::Organizer) {
        Ok(())
    } else {
        Err("La role doit être \"Participant\" ou \"Organisateur\"".to_string())
    }
}

pub fn validate_password(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Le mot de passe est requis".to_string());
    }
    if value.chars().count() < 8 {
        return Err("Le mot de passe doit comporter au moins 8 caractères".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Le mot de passe doit contenir au moins une lettre minuscule".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Le mot de passe doit contenir au moins une lettre majuscule".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err("Le mot de passe doit contenir au moins un chiffre".to_string());
    }
    Ok(())
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<(), String> {
    if confirmation.is_empty() {
        return Err("La confirmation du mot de passe est requise".to_string());
    }
    if password != confirmation {
        return Err("Les mots de passe doivent correspondre".to_string());
    }
    Ok(())
}

pub fn validate_event_name(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("Le nom de l'événement est obligatoire.".to_string())
    } else {
        Ok(())
    }
}

pub fn validate_event_description(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("La description est obligatoire.".to_string())
    } else {
        Ok(())
    }
}

pub fn validate_event_category(category_id: Option<i64>) -> Result<(), String> {
    if category_id.is_some() {
        Ok(())
    } else {
        Err("La catégorie est obligatoire.".to_string())
    }
}

pub fn validate_event_start(start: Option<NaiveDateTime>, now: NaiveDateTime) -> Result<(), String> {
    let Some(start) = start else {
        return Err("La date et l'heure de début sont obligatoires.".to_string());
    };
    if start <= now {
        return Err("La date de début doit être dans le futur".to_string());
    }
    Ok(())
}

/// Edit-form start rule: presence only. An already-started event keeps its
/// original date and must remain editable.
pub fn validate_event_start_edit(start: Option<NaiveDateTime>) -> Result<(), String> {
    if start.is_some() {
        Ok(())
    } else {
        Err("La date et l'heure de début sont obligatoires.".to_string())
    }
}

pub fn validate_event_end(
    end: Option<NaiveDateTime>,
    start: Option<NaiveDateTime>,
) -> Result<(), String> {
    let Some(end) = end else {
        return Err("La date et l'heure de fin sont obligatoires.".to_string());
    };
    if let Some(start) = start {
        if end <= start {
            return Err("La date de fin doit être après la date de début".to_string());
        }
    }
    Ok(())
}

pub fn validate_event_address(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("L'adresse est obligatoire.".to_string())
    } else {
        Ok(())
    }
}

pub fn validate_event_city(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("La ville est obligatoire.".to_string())
    } else {
        Ok(())
    }
}

pub fn validate_postal_code(value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Le code postal est obligatoire.".to_string());
    }
    if !postal_code_regex().is_match(value) {
        return Err("Le code postal doit comporter exactement 5 chiffres.".to_string());
    }
    Ok(())
}

/// Budget is optional; when given it must parse and be non-negative. Returns
/// the parsed value so the form can build its request from it.
pub fn validate_budget(value: &str) -> Result<Option<f64>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.replace(',', ".").parse::<f64>() {
        Ok(budget) if budget >= 0.0 => Ok(Some(budget)),
        _ => Err("Le budget doit être supérieur ou égal à 0.".to_string()),
    }
}

pub fn validate_number_place(value: &str) -> Result<u32, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Le nombre de places est obligatoire.".to_string());
    }
    match value.parse::<u32>() {
        Ok(places) if places >= 1 => Ok(places),
        _ => Err("Le nombre de places doit être au moins 1".to_string()),
    }
}

/// Image constraints shared by the event and profile forms.
pub fn validate_image(mime_type: &str, size_bytes: f64) -> Result<(), String> {
    if !mime_type.starts_with("image") {
        return Err("Veuillez sélectionner un fichier image valide.".to_string());
    }
    if size_bytes > crate::config::MAX_IMAGE_SIZE_BYTES {
        return Err("La taille de l'image ne doit pas dépasser 5 Mo.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn firstname_rules_apply_in_order() {
        assert_eq!(
            validate_firstname(""),
            Err("Le prénom est requis".to_string())
        );
        assert_eq!(
            validate_firstname("a"),
            Err("Le prénom doit comporter au moins 2 caractères".to_string())
        );
        assert_eq!(
            validate_firstname("jean3"),
            Err("Le prénom ne peut pas contenir de chiffres".to_string())
        );
        assert!(validate_firstname("Jean").is_ok());
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate_email(" "), Err("L'email est requis".to_string()));
        assert_eq!(
            validate_email("not-an-email"),
            Err("Format d'email invalide".to_string())
        );
        assert!(validate_email("jean.dupont@example.fr").is_ok());
    }

    #[test]
    fn password_rules_apply_in_order() {
        assert!(validate_password("").is_err());
        assert_eq!(
            validate_password("Ab1"),
            Err("Le mot de passe doit comporter au moins 8 caractères".to_string())
        );
        assert_eq!(
            validate_password("ABCDEFG1"),
            Err("Le mot de passe doit contenir au moins une lettre minuscule".to_string())
        );
        assert_eq!(
            validate_password("abcdefg1"),
            Err("Le mot de passe doit contenir au moins une lettre majuscule".to_string())
        );
        assert_eq!(
            validate_password("Abcdefgh"),
            Err("Le mot de passe doit contenir au moins un chiffre".to_string())
        );
        assert!(validate_password("Abcdefg1").is_ok());
    }

    #[test]
    fn confirmation_must_match() {
        assert!(validate_password_confirmation("Abcdefg1", "").is_err());
        assert_eq!(
            validate_password_confirmation("Abcdefg1", "Abcdefg2"),
            Err("Les mots de passe doivent correspondre".to_string())
        );
        assert!(validate_password_confirmation("Abcdefg1", "Abcdefg1").is_ok());
    }

    #[test]
    fn signup_role_refuses_admin() {
        assert!(validate_signup_role(Role::Participant).is_ok());
        assert!(validate_signup_role(Role::Organizer).is_ok());
        assert!(validate_signup_role(Role::Admin).is_err());
    }

    #[test]
    fn event_dates_must_be_future_and_ordered() {
        let now = at(2026, 7, 1, 12);
        assert!(validate_event_start(None, now).is_err());
        assert_eq!(
            validate_event_start(Some(at(2026, 6, 30, 12)), now),
            Err("La date de début doit être dans le futur".to_string())
        );
        assert!(validate_event_start(Some(at(2026, 7, 2, 12)), now).is_ok());

        assert!(validate_event_end(None, Some(now)).is_err());
        assert_eq!(
            validate_event_end(Some(at(2026, 7, 2, 11)), Some(at(2026, 7, 2, 12))),
            Err("La date de fin doit être après la date de début".to_string())
        );
        assert!(validate_event_end(Some(at(2026, 7, 2, 13)), Some(at(2026, 7, 2, 12))).is_ok());

        // The edit rule only requires a start; a past one is fine.
        assert!(validate_event_start_edit(None).is_err());
        assert!(validate_event_start_edit(Some(at(2026, 6, 30, 12))).is_ok());
    }

    #[test]
    fn postal_code_is_exactly_five_digits() {
        assert!(validate_postal_code("").is_err());
        assert_eq!(
            validate_postal_code("7501"),
            Err("Le code postal doit comporter exactement 5 chiffres.".to_string())
        );
        assert!(validate_postal_code("75012").is_ok());
    }

    #[test]
    fn budget_is_optional_but_non_negative() {
        assert_eq!(validate_budget(""), Ok(None));
        assert_eq!(validate_budget("120"), Ok(Some(120.0)));
        assert_eq!(validate_budget("12,50"), Ok(Some(12.5)));
        assert!(validate_budget("-3").is_err());
        assert!(validate_budget("abc").is_err());
    }

    #[test]
    fn number_place_requires_at_least_one() {
        assert!(validate_number_place("").is_err());
        assert!(validate_number_place("0").is_err());
        assert_eq!(validate_number_place("25"), Ok(25));
    }

    #[test]
    fn image_checks_type_then_size() {
        assert_eq!(
            validate_image("application/pdf", 1000.0),
            Err("Veuillez sélectionner un fichier image valide.".to_string())
        );
        assert_eq!(
            validate_image("image/png", 6.0 * 1024.0 * 1024.0),
            Err("La taille de l'image ne doit pas dépasser 5 Mo.".to_string())
        );
        assert!(validate_image("image/jpeg", 1024.0).is_ok());
    }
}
