//! Display-date helpers.
//!
//! The monitoring service formats dates as `DD.MM.YYYY`; the same format is
//! used locally when a fallback date has to be produced client-side.

use chrono::{Local, NaiveDate};

/// Formats a date as `DD.MM.YYYY` with zero-padded day and month.
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Today's date in display format.
#[must_use]
pub fn today_display_date() -> String {
    format_display_date(Local::now().date_naive())
}
