use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// Parse the timestamp shapes found in record data:
/// `2024-01-15 14:23:45`, `2023-11-01T14:32:00`, or a bare `2023-10-15`.
pub fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    let spaced = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let iso = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let date_only = format_description!("[year]-[month]-[day]");

    PrimitiveDateTime::parse(raw, spaced)
        .or_else(|_| PrimitiveDateTime::parse(raw, iso))
        .ok()
        .or_else(|| {
            Date::parse(raw, date_only)
                .ok()
                .map(|d| PrimitiveDateTime::new(d, Time::MIDNIGHT))
        })
}

/// Normalized display form; unparseable input ("2 hours ago") is shown as-is.
pub fn display_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            dt.year(),
            u8::from(dt.month()),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        ),
        None => raw.to_string(),
    }
}

/// Current UTC time of day as `HH:MM:SS`.
pub fn utc_time_of_day() -> String {
    let now = OffsetDateTime::now_utc();
    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
}
