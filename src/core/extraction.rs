//! Direct date extraction from free-text answers such as "26 october" or "oct 26".

use crate::core::dates::DateSequence;
use chrono::Month;
use regex::Regex;
use std::sync::LazyLock;

static DAY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})\b").expect("day pattern is valid"));

/// Months in calendar order.
fn calendar_months() -> impl Iterator<Item = Month> {
    (1u8..=12).filter_map(|n| Month::try_from(n).ok())
}

/// First standalone one or two digit number. Not checked against month length.
pub fn extract_day(text: &str) -> Option<u32> {
    DAY_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Full month names are tried before three-letter abbreviations, each in
/// calendar order; the first substring hit wins.
pub fn extract_month(text: &str) -> Option<Month> {
    let text = text.to_lowercase();

    calendar_months()
        .find(|month| text.contains(&month.name().to_lowercase()))
        .or_else(|| {
            calendar_months().find(|month| text.contains(&month.name()[..3].to_lowercase()))
        })
}

/// Index of the spoken date in `dates`, if the text names both a day and a month
/// that exist together in the reference year.
pub fn parse_date_from_text(text: &str, dates: &DateSequence) -> Option<usize> {
    if text.is_empty() {
        return None;
    }

    let day = extract_day(text)?;
    let month = extract_month(text)?;
    dates.position(month, day)
}
