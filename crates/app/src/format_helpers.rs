//! Display formatting shared by the portal screens.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use shared_types::{CaseStatus, StatusTone};
use shared_ui::BadgeVariant;

/// Format a backend timestamp as "Jan 20, 2026".
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` and bare dates.
/// Anything else is shown as received.
pub fn format_date_human(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Label and badge style for a case status.
pub fn status_badge(status: CaseStatus) -> (&'static str, BadgeVariant) {
    let variant = match status.tone() {
        StatusTone::Warning => BadgeVariant::Warning,
        StatusTone::Info => BadgeVariant::Info,
        StatusTone::Success => BadgeVariant::Success,
        StatusTone::Neutral => BadgeVariant::Neutral,
    };
    (status.label(), variant)
}

/// Last path segment, used as the link text for an attachment.
pub fn file_name(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
}
