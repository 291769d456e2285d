//! Port for locale-aware date and time rendering.

use chrono::NaiveDateTime;

/// Renders timestamps for view models.
#[cfg_attr(test, mockall::automock)]
pub trait UiFormatter: Send + Sync {
    /// Date and time, e.g. `01 Mar 2024 09:30`.
    fn format_datetime(&self, value: NaiveDateTime) -> String;

    /// Date only, e.g. `01/03/2024`.
    fn format_date(&self, value: NaiveDateTime) -> String;

    /// Time only, e.g. `09:30 AM`.
    fn format_time(&self, value: NaiveDateTime) -> String;
}
