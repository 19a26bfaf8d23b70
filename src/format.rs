//! Display Formatting
//!
//! Swedish date formats, percentages and status colors.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::models::FeatureStatus;

const MONTHS_SV: [&str; 12] = [
    "januari", "februari", "mars", "april", "maj", "juni",
    "juli", "augusti", "september", "oktober", "november", "december",
];

/// Parse an API timestamp down to its calendar date.
///
/// Accepts RFC 3339 (date taken in the timestamp's own offset), naive ISO
/// date-times as produced by `datetime.utcnow().isoformat()`, and bare dates.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// sv-SE short date, `2024-02-20`. Unparseable input is shown as-is.
pub fn short_date(value: &str) -> String {
    parse_date(value)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Swedish long date, `20 februari 2024`
pub fn long_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS_SV[date.month0() as usize],
            date.year()
        ),
        None => value.to_string(),
    }
}

/// Completion ratio as a percentage with one decimal, `0.456` → `45.6%`
pub fn completion_rate(rate: f64) -> String {
    format!("{:.1}%", (rate * 1000.0).round() / 10.0)
}

/// Clamp a percentage to [0, 100] for progress bar display
pub fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Inline style for a progress bar fill
pub fn progress_width_style(percentage: f64) -> String {
    format!("width: {}%", clamp_percentage(percentage))
}

/// `aria-valuenow` for a progress bar, same value as the width
pub fn progress_value_attr(percentage: f64) -> String {
    clamp_percentage(percentage).to_string()
}

/// Tailwind classes for a status badge
pub fn status_badge_class(status: &FeatureStatus) -> &'static str {
    match status {
        FeatureStatus::Active => "bg-green-100 text-green-800",
        FeatureStatus::Inactive => "bg-red-100 text-red-800",
        _ => "bg-yellow-100 text-yellow-800",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-02-20T10:30:00Z"), "2024-02-20");
        assert_eq!(short_date("2024-02-20T10:30:00.123456"), "2024-02-20");
        assert_eq!(short_date("2024-02-20"), "2024-02-20");
        assert_eq!(short_date("2024-02-20T23:30:00-02:00"), "2024-02-20");
        assert_eq!(short_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_long_date_swedish() {
        assert_eq!(long_date("2024-02-20T15:45:00Z"), "20 februari 2024");
        assert_eq!(long_date("2023-12-01T00:00:00"), "1 december 2023");
        assert_eq!(long_date("2025-05-09"), "9 maj 2025");
    }

    #[test]
    fn test_completion_rate() {
        assert_eq!(completion_rate(0.456), "45.6%");
        assert_eq!(completion_rate(0.0), "0.0%");
        assert_eq!(completion_rate(1.0), "100.0%");
        assert_eq!(completion_rate(0.714), "71.4%");
    }

    #[test]
    fn test_completion_rate_ties_round_up() {
        // 1 of 16, 1 of 80, 1 of 400
        assert_eq!(completion_rate(0.0625), "6.3%");
        assert_eq!(completion_rate(0.0125), "1.3%");
        assert_eq!(completion_rate(0.0025), "0.3%");
    }

    #[test]
    fn test_clamp_percentage() {
        assert_eq!(clamp_percentage(50.0), 50.0);
        assert_eq!(clamp_percentage(-3.0), 0.0);
        assert_eq!(clamp_percentage(140.0), 100.0);
        assert_eq!(clamp_percentage(f64::NAN), 0.0);
    }

    #[test]
    fn test_progress_bar_attributes_agree() {
        assert_eq!(progress_width_style(50.0), "width: 50%");
        assert_eq!(progress_value_attr(50.0), "50");
        assert_eq!(progress_width_style(33.5), "width: 33.5%");
        assert_eq!(progress_value_attr(33.5), "33.5");
        assert_eq!(progress_width_style(120.0), "width: 100%");
        assert_eq!(progress_value_attr(120.0), "100");
        assert_eq!(progress_value_attr(-1.0), "0");
    }

    #[test]
    fn test_status_badge_class() {
        assert_eq!(status_badge_class(&FeatureStatus::Active), "bg-green-100 text-green-800");
        assert_eq!(status_badge_class(&FeatureStatus::Inactive), "bg-red-100 text-red-800");
        assert_eq!(status_badge_class(&FeatureStatus::Pending), "bg-yellow-100 text-yellow-800");
        assert_eq!(
            status_badge_class(&FeatureStatus::Other("deprecated".into())),
            "bg-yellow-100 text-yellow-800"
        );
    }
}
