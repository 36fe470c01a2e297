// src/parse/caption.rs
//
// Helpers for the text around a schedule table: section titles, table
// captions, day headers and the comma-separated time cells.

use chrono::Weekday;

use crate::config::ParseOptions;
use crate::config::consts::{GROUP_TITLE_PREFIX, NOT_APPLICABLE, SCHEDULE_SUFFIX, WEEKDAY_NAMES};
use crate::core::{normalize_text, strip_spaces, title_case};
use crate::parse::{cut_date_range, parse_clock_range_with};
use crate::schema::{TimeSlot, WEEKDAYS};

/// "Drop-in schedules - swimming and aquafit" → "Swimming And Aquafit"
pub fn schedule_group_title(label: &str) -> String {
    let title = normalize_text(label, false, true);
    let title = title.strip_prefix(GROUP_TITLE_PREFIX).unwrap_or(&title);
    let title = title.strip_prefix("s ").unwrap_or(title);
    title_case(title.trim_matches(['-', ' ']))
}

/// Split a table caption into the schedule name and its date phrase, if any.
/// The name is lowercased with the facility name and a trailing " schedule"
/// removed:
///
/// `("Jack Purcell - swim and aquafit - January 6 to April 6", "Jack Purcell Community Centre")`
/// → `("swim and aquafit", Some("January 6 to April 6"))`
pub fn schedule_name(caption: &str, facility: &str) -> (String, Option<String>) {
    let caption = normalize_text(caption, false, false);
    let (prefix, date) = match cut_date_range(&caption) {
        Some((prefix, date)) => (prefix, Some(date)),
        None => (caption, None),
    };

    let lower = prefix.to_lowercase();
    let mut name = lower.strip_suffix(SCHEDULE_SUFFIX).unwrap_or(&lower).trim();

    let facility = facility.to_lowercase();
    if let Some(rest) = name.strip_prefix(facility.as_str()) {
        name = rest;
    } else if let Some((head, rest)) = name.split_once('-') {
        // "Jack Purcell - ..." under "Jack Purcell Community Centre"
        if facility.starts_with(head) {
            name = rest.trim();
        }
    }
    (s!(name.trim_start_matches([' ', '-'])), date)
}

/// The weekday named in a column header ("Monday", "Tue Jan 7"), matched on
/// three-letter abbreviations. `None` when zero or several weekdays match.
pub fn header_weekday(header: &str) -> Option<Weekday> {
    let header = normalize_text(header, false, true);
    let mut found = WEEKDAY_NAMES
        .iter()
        .zip(WEEKDAYS)
        .filter(|(name, _)| header.contains(name[..3].to_ascii_lowercase().as_str()))
        .map(|(_, wd)| wd);
    match (found.next(), found.next()) {
        (Some(wd), None) => Some(wd),
        _ => None,
    }
}

/// Split a time cell on commas. `n/a` entries are skipped; the rest keep
/// their text as a label and carry the parsed range when there is one.
pub fn split_time_cell(cell: &str, opts: &ParseOptions) -> Vec<TimeSlot> {
    cell.split(',')
        .filter(|piece| strip_spaces(&normalize_text(piece, false, true)) != NOT_APPLICABLE)
        .filter_map(|piece| {
            let label = normalize_text(piece, false, false);
            if label.is_empty() {
                return None;
            }
            Some(TimeSlot { range: parse_clock_range_with(piece, opts), label, weekday: None })
        })
        .collect()
}
