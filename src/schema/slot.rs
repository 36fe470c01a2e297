// src/schema/slot.rs
use chrono::Weekday;

use super::ClockRange;

/// One comma-separated entry of a time cell. `range` is `None` when the text
/// could not be read as a time range; the label is kept either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: String,
    pub weekday: Option<Weekday>,
    pub range: Option<ClockRange>,
}

impl TimeSlot {
    pub fn is_parsed(&self) -> bool { self.range.is_some() }
}
