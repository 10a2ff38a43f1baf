//! Timestamp formatting
//!
//! The backend sends RFC 3339 timestamps. Exports and tables use one fixed
//! display rule; anything unparseable passes through untouched so a bad
//! timestamp never hides a record.

use chrono::DateTime;

/// Fixed display format for record timestamps
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format an optional RFC 3339 timestamp for display
///
/// Missing timestamps render as the empty string.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339() {
        assert_eq!(
            format_timestamp(Some("2026-03-01T18:45:12+00:00")),
            "2026-03-01 18:45"
        );
    }

    #[test]
    fn missing_is_empty_and_garbage_passes_through() {
        assert_eq!(format_timestamp(None), "");
        assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
    }
}
