// src/schedule.rs
//
// One schedule table (caption, day header row, one row per activity) turned
// into typed activities and time slots. A cell that does not parse becomes a
// warning on the schedule; only a broken table shape fails the whole thing.

use chrono::Weekday;
use tracing::{debug, warn};

use crate::config::ParseOptions;
use crate::core::normalize_text;
use crate::error::TableError;
use crate::parse::{
    clean_activity_name, header_weekday, parse_date_range, schedule_name, split_time_cell,
};
use crate::schema::{DateRange, TimeSlot};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    pub caption: String,
    /// Lowercased caption minus facility name, " schedule" and the dates.
    pub name: String,
    /// Date phrase cut from the caption, as written.
    pub date: Option<String>,
    pub dates: Option<DateRange>,
    /// Day column headers, whitespace collapsed.
    pub days: Vec<String>,
    pub activities: Vec<Activity>,
    pub warnings: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Activity {
    pub label: String,
    pub name: String,
    /// One entry per day column, possibly empty.
    pub days: Vec<ActivityDay>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityDay {
    pub times: Vec<TimeSlot>,
}

impl Activity {
    /// `name`, or the raw label when cleaning left nothing.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { &self.label } else { &self.name }
    }

    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|d| d.times.len()).sum()
    }
}

impl Schedule {
    /// Assemble a schedule from table rows. `rows[0]` is the day header (its
    /// first cell is ignored); every further row is `label, cell per day`.
    pub fn from_table(
        caption: &str,
        facility: &str,
        rows: &[Vec<String>],
        opts: &ParseOptions,
    ) -> Result<Schedule, TableError> {
        let caption = normalize_text(caption, false, false);
        let mut warnings = Vec::new();

        let (name, date) = schedule_name(&caption, facility);
        let mut dates = None;
        if let Some(date) = &date {
            dates = parse_date_range(date);
            if dates.is_none() {
                warn!(schedule = %caption, date = %date, "failed to parse date range");
                warnings.push(format!("schedule {caption:?}: failed to parse date range {date:?}"));
            }
        }

        let (header, body) = rows.split_first().ok_or(TableError::MissingHeader)?;
        let days: Vec<String> = header
            .iter()
            .skip(1)
            .map(|h| h.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect();
        if days.is_empty() {
            return Err(TableError::InvalidLayout);
        }

        let weekdays: Vec<Option<Weekday>> = days
            .iter()
            .map(|hdr| {
                let wd = header_weekday(hdr);
                if wd.is_none() {
                    warn!(schedule = %caption, header = %hdr, "no single weekday in header");
                    warnings.push(format!("warning: failed to parse weekday from header {hdr:?}"));
                }
                wd
            })
            .collect();

        let mut activities = Vec::with_capacity(body.len());
        for (i, row) in body.iter().enumerate() {
            if row.len() != days.len() + 1 {
                return Err(TableError::RowSizeMismatch {
                    row: i + 1,
                    expected: days.len() + 1,
                    found: row.len(),
                });
            }
            let (label, cells) = (&row[0], &row[1..]);

            let mut act_days = Vec::with_capacity(cells.len());
            for (cell, weekday) in cells.iter().zip(&weekdays) {
                let mut times = split_time_cell(cell, opts);
                for slot in &mut times {
                    slot.weekday = *weekday;
                    if !slot.is_parsed() {
                        warn!(range = %slot.label, "failed to parse time range");
                        warnings.push(format!("warning: failed to parse time range {:?}", slot.label));
                    }
                }
                act_days.push(ActivityDay { times });
            }

            activities.push(Activity {
                label: normalize_text(label, false, false),
                name: clean_activity_name(label),
                days: act_days,
            });
        }
        if activities.is_empty() {
            return Err(TableError::InvalidLayout);
        }

        debug!(schedule = %caption, activities = activities.len(), warnings = warnings.len(), "assembled schedule");
        Ok(Schedule { caption, name, date, dates, days, activities, warnings })
    }

    /// Keep the time slots `keep(activity name, weekday, slot)` accepts and
    /// drop activities left without any. Returns whether anything remains.
    pub fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&str, Option<Weekday>, &TimeSlot) -> bool,
    {
        for act in &mut self.activities {
            let Activity { label, name, days } = act;
            let name = if name.is_empty() { label.as_str() } else { name.as_str() };
            for day in days.iter_mut() {
                day.times.retain(|t| keep(name, t.weekday, t));
            }
        }
        self.activities.retain(|a| a.slot_count() > 0);
        !self.activities.is_empty()
    }

    pub fn slot_count(&self) -> usize {
        self.activities.iter().map(Activity::slot_count).sum()
    }
}
