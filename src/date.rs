//! French date formatting for event schedules.
//!
//! Formatting works on naive local datetimes so the output is deterministic;
//! the UTC wire values are converted to the browser's local time at the call
//! site with [`to_local_naive`].

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike, Utc};

const MONTHS_FULL: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const MONTHS_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

fn month_full(dt: &NaiveDateTime) -> &'static str {
    MONTHS_FULL[dt.month0() as usize]
}

fn month_short(dt: &NaiveDateTime) -> &'static str {
    MONTHS_SHORT[dt.month0() as usize]
}

fn same_day(a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
    a.date() == b.date()
}

fn same_month(a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Full date range, e.g. `14 juillet 2026 de 18:00 à 23:00`,
/// `Du 02 au 04 juillet 2026`, `Du 28 juin au 02 juillet 2026`.
pub fn format_event_date(start: &NaiveDateTime, end: &NaiveDateTime) -> String {
    if same_day(start, end) {
        return format!(
            "{:02} {} {} de {:02}:{:02} à {:02}:{:02}",
            start.day(),
            month_full(start),
            start.year(),
            start.hour(),
            start.minute(),
            end.hour(),
            end.minute()
        );
    }
    if same_month(start, end) {
        return format!(
            "Du {:02} au {:02} {} {}",
            start.day(),
            end.day(),
            month_full(end),
            end.year()
        );
    }
    format!(
        "Du {:02} {} au {:02} {} {}",
        start.day(),
        month_full(start),
        end.day(),
        month_full(end),
        end.year()
    )
}

/// Compact range for cards, e.g. `14 juil. 2026`, `02 - 04 juil. 2026`,
/// `28 juin - 02 juil. 2026`.
pub fn format_short_event_date(start: &NaiveDateTime, end: &NaiveDateTime) -> String {
    if same_day(start, end) {
        return format!(
            "{:02} {} {}",
            start.day(),
            month_short(start),
            start.year()
        );
    }
    if same_month(start, end) {
        return format!(
            "{:02} - {:02} {} {}",
            start.day(),
            end.day(),
            month_short(end),
            end.year()
        );
    }
    format!(
        "{:02} {} - {:02} {} {}",
        start.day(),
        month_short(start),
        end.day(),
        month_short(end),
        end.year()
    )
}

/// Duration between two datetimes: `3h`, `2j`, or `2j 5h`.
pub fn format_duration(start: &NaiveDateTime, end: &NaiveDateTime) -> String {
    let minutes = end.signed_duration_since(*start).num_minutes().max(0);
    let hours = minutes as f64 / 60.0;
    if hours < 24.0 {
        return format!("{}h", hours.round() as i64);
    }
    let days = (hours / 24.0).floor() as i64;
    let remaining = (hours % 24.0).round() as i64;
    if remaining > 0 {
        format!("{days}j {remaining}h")
    } else {
        format!("{days}j")
    }
}

/// Split date and time labels, e.g. (`14 juillet 2026`, `18:00`). The day is
/// not zero padded here, matching the locale-style rendering it replaces.
pub fn format_date_time(dt: &NaiveDateTime) -> (String, String) {
    (
        format!("{} {} {}", dt.day(), month_full(dt), dt.year()),
        format!("{:02}:{:02}", dt.hour(), dt.minute()),
    )
}

pub fn is_event_passed_at(end: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    end < now
}

/// Whether the event already ended.
pub fn is_event_passed(end: &DateTime<Utc>) -> bool {
    is_event_passed_at(end, &Utc::now())
}

/// Convert a wire datetime to the browser's local naive time for display.
pub fn to_local_naive(dt: &DateTime<Utc>) -> NaiveDateTime {
    dt.with_timezone(&Local).naive_local()
}

/// Parse the value of an `<input type="datetime-local">`.
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Render a wire datetime as an `<input type="datetime-local">` value.
pub fn to_datetime_local_value(dt: &DateTime<Utc>) -> String {
    to_local_naive(dt).format("%Y-%m-%dT%H:%M").to_string()
}

/// Interpret a naive local datetime (form input) as a UTC instant.
pub fn local_naive_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&naive),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn single_day_event_shows_time_range() {
        let start = naive(2026, 7, 14, 18, 0);
        let end = naive(2026, 7, 14, 23, 30);
        assert_eq!(
            format_event_date(&start, &end),
            "14 juillet 2026 de 18:00 à 23:30"
        );
    }

    #[test]
    fn same_month_event_collapses_the_month() {
        let start = naive(2026, 7, 2, 9, 0);
        let end = naive(2026, 7, 4, 18, 0);
        assert_eq!(format_event_date(&start, &end), "Du 02 au 04 juillet 2026");
    }

    #[test]
    fn cross_month_event_spells_both_months() {
        let start = naive(2026, 6, 28, 9, 0);
        let end = naive(2026, 7, 2, 18, 0);
        assert_eq!(
            format_event_date(&start, &end),
            "Du 28 juin au 02 juillet 2026"
        );
    }

    #[test]
    fn cross_year_event_uses_the_cross_month_form() {
        let start = naive(2026, 12, 30, 9, 0);
        let end = naive(2027, 1, 2, 18, 0);
        assert_eq!(
            format_event_date(&start, &end),
            "Du 30 décembre au 02 janvier 2027"
        );
    }

    #[test]
    fn short_formats_abbreviate_months() {
        let start = naive(2026, 7, 14, 18, 0);
        assert_eq!(format_short_event_date(&start, &start), "14 juil. 2026");

        let end = naive(2026, 7, 16, 18, 0);
        assert_eq!(
            format_short_event_date(&start, &end),
            "14 - 16 juil. 2026"
        );

        let far = naive(2026, 8, 2, 18, 0);
        assert_eq!(
            format_short_event_date(&start, &far),
            "14 juil. - 02 août 2026"
        );
    }

    #[test]
    fn durations_round_to_hours_and_split_days() {
        let start = naive(2026, 7, 14, 10, 0);
        assert_eq!(format_duration(&start, &naive(2026, 7, 14, 13, 0)), "3h");
        assert_eq!(format_duration(&start, &naive(2026, 7, 14, 13, 40)), "4h");
        assert_eq!(format_duration(&start, &naive(2026, 7, 16, 10, 0)), "2j");
        assert_eq!(format_duration(&start, &naive(2026, 7, 16, 15, 0)), "2j 5h");
    }

    #[test]
    fn date_time_split_uses_unpadded_day() {
        let (date, time) = format_date_time(&naive(2026, 3, 5, 9, 5));
        assert_eq!(date, "5 mars 2026");
        assert_eq!(time, "09:05");
    }

    #[test]
    fn passed_check_compares_end_against_now() {
        let end: DateTime<Utc> = "2026-07-14T23:00:00Z".parse().unwrap();
        let before: DateTime<Utc> = "2026-07-14T22:00:00Z".parse().unwrap();
        let after: DateTime<Utc> = "2026-07-15T00:00:00Z".parse().unwrap();
        assert!(!is_event_passed_at(&end, &before));
        assert!(is_event_passed_at(&end, &after));
    }

    #[test]
    fn datetime_local_values_parse() {
        assert_eq!(
            parse_datetime_local("2026-07-14T18:00"),
            Some(naive(2026, 7, 14, 18, 0))
        );
        assert!(parse_datetime_local("14/07/2026").is_none());
    }
}
