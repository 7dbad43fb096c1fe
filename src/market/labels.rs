use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Short US-style date label ("3/7/2025") for an epoch-millisecond timestamp.
///
/// Returns `None` for timestamps chrono cannot represent.
pub fn date_label<Tz>(epoch_millis: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateTime::from_timestamp_millis(epoch_millis)
        .map(|utc| utc.with_timezone(tz).format("%-m/%-d/%Y").to_string())
}
