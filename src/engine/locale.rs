//! Locale hooks for bucket labels and search folding.

use chrono::NaiveDate;

/// Locale-dependent text used by the engine.
pub trait Locale {
    /// Label of the bucket holding today's check-ins.
    fn today(&self) -> &str;
    /// Label of the bucket holding yesterday's check-ins.
    fn yesterday(&self) -> &str;
    /// Absolute label for any other calendar day.
    fn format_day(&self, day: NaiveDate) -> String;
    /// Normalization applied to both sides of a text search.
    fn fold_case(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

/// English (United States): `"Jan 10, 2024"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnUs;

impl Locale for EnUs {
    fn today(&self) -> &str {
        "Today"
    }

    fn yesterday(&self) -> &str {
        "Yesterday"
    }

    fn format_day(&self, day: NaiveDate) -> String {
        day.format("%b %-d, %Y").to_string()
    }
}
