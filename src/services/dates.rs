use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const DATE_FALLBACK: &str = "Date coming soon";

/// Parses the date strings the API hands out.
///
/// Accepts RFC 3339, RFC 2822 (`Tue, 05 Mar 2024 10:00:00 GMT`), naive
/// date-times with a space or `T` separator, and bare dates. Naive values are
/// read as UTC.
pub fn parse_api_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// "January 5, 2024"
pub fn format_long_date(value: Option<&str>) -> String {
    value
        .and_then(parse_api_date)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| DATE_FALLBACK.to_string())
}

/// "Monday, January 5, 2024"
pub fn format_weekday_date(value: Option<&str>) -> String {
    value
        .and_then(parse_api_date)
        .map(|d| d.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|| DATE_FALLBACK.to_string())
}

/// "18:30"; `None` when the value has no parsable time.
pub fn format_time(value: Option<&str>) -> Option<String> {
    value
        .and_then(parse_api_date)
        .map(|d| d.format("%H:%M").to_string())
}
