use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

fn parse(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// `Dec 23, 2024`; `N/A` when absent, `Invalid Date` when unparseable.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return "N/A".to_string();
    };
    match parse(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Age of a posting in whole days, rounded up.
pub fn days_ago(raw: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return "N/A".to_string();
    };
    let Some(date) = parse(raw) else {
        return "Invalid Date".to_string();
    };
    let millis = (now - date).num_milliseconds().abs();
    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    match days {
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        n => format!("{n} days ago"),
    }
}
