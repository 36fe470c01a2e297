// src/textconv.rs
//
// Plain-text rendering of assembled schedules, one line per time slot, so two
// scrapes can be compared with an ordinary line diff.
//
//   &  Pool - lane swim - January 6 to April 6
//   - warning: failed to parse time range "closed"
//       ~ [MO 07:00 - 08:30] lane swim
//       ~ [TU "closed"] lane swim

use std::fmt::Write;

use chrono::Weekday;

use crate::config::RenderOptions;
use crate::schedule::Schedule;
use crate::schema::date::weekday_name;

/// "MO", "TU", ...
pub fn weekday_short(w: Weekday) -> String {
    weekday_name(w)[..2].to_ascii_uppercase()
}

pub fn render_schedule(schedule: &Schedule, opts: &RenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  &  {}", schedule.caption);
    for w in &schedule.warnings {
        let _ = writeln!(out, "- {w}");
    }
    for act in &schedule.activities {
        for (di, day) in act.days.iter().enumerate() {
            for slot in &day.times {
                let wd = match slot.weekday {
                    Some(w) => weekday_short(w),
                    None => schedule.days.get(di).cloned().unwrap_or_default(),
                };
                let when = match slot.range {
                    Some(r) => r.format(opts.ampm),
                    None => format!("{:?}", slot.label),
                };
                let _ = writeln!(out, "    ~ [{wd} {when}] {}", act.display_name());
            }
        }
    }
    out
}

/// Render several schedules separated by blank lines.
pub fn render_all(schedules: &[Schedule], opts: &RenderOptions) -> String {
    schedules
        .iter()
        .map(|s| render_schedule(s, opts))
        .collect::<Vec<_>>()
        .join("\n")
}
