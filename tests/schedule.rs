// tests/schedule.rs
//
// Tests for assembling schedule tables and rendering them as text.
//
use chrono::Weekday;
use pretty_assertions::assert_eq;

use rec_schedules::config::{ParseOptions, RenderOptions};
use rec_schedules::parse::schedule_group_title;
use rec_schedules::schema::{Date, DateRange};
use rec_schedules::textconv::render_schedule;
use rec_schedules::{Schedule, TableError};

const CAPTION: &str = "Bearbrook Outdoor Pool - swimming - August 2 to 4";
const FACILITY: &str = "Bearbrook Outdoor Pool";

fn rows(cells: &[&[&str]]) -> Vec<Vec<String>> {
    cells.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect()
}

fn sample() -> Schedule {
    let table = rows(&[
        &["", "Monday", "Tuesday", "Holiday"],
        &["Lane Swim (18+)", "7 - 8:30 am, 6 - 7 pm", "n/a", "noon - 1pm"],
        &["Public Skating", "", "closed", "9-10"],
    ]);
    Schedule::from_table(CAPTION, FACILITY, &table, &ParseOptions::default()).unwrap()
}

#[test]
fn caption_fields() {
    let s = sample();
    assert_eq!(s.caption, CAPTION);
    assert_eq!(s.name, "swimming");
    assert_eq!(s.date.as_deref(), Some("August 2 to 4"));
    assert_eq!(s.dates, Some(DateRange::new(Date::from_md(8, 2), Date::from_md(8, 4))));
    assert_eq!(s.days, vec!["Monday", "Tuesday", "Holiday"]);
}

#[test]
fn activities_and_slots() {
    let s = sample();
    assert_eq!(s.activities.len(), 2);
    let swim = &s.activities[0];
    assert_eq!(swim.label, "Lane Swim (18+)");
    assert_eq!(swim.name, "lane swim 18+");
    assert_eq!(swim.days.len(), 3);
    assert_eq!(swim.days[0].times.len(), 2);
    assert!(swim.days[1].times.is_empty());
    assert_eq!(swim.days[0].times[1].weekday, Some(Weekday::Mon));
    assert_eq!(s.slot_count(), 5);
}

#[test]
fn bad_cells_become_warnings() {
    let s = sample();
    assert_eq!(
        s.warnings,
        vec![
            "warning: failed to parse weekday from header \"Holiday\"".to_string(),
            "warning: failed to parse time range \"closed\"".to_string(),
        ]
    );
}

#[test]
fn unparsed_date_phrase_is_a_warning() {
    let table = rows(&[&["", "Monday"], &["Swim", "9-10"]]);
    let s = Schedule::from_table("Pool - swim - August 40 to 41", "Pool", &table, &ParseOptions::default())
        .unwrap();
    assert_eq!(s.dates, None);
    assert_eq!(s.date.as_deref(), Some("August 40 to 41"));
    assert_eq!(
        s.warnings,
        vec!["schedule \"Pool - swim - August 40 to 41\": failed to parse date range \"August 40 to 41\"".to_string()]
    );
}

#[test]
fn row_width_must_match_header() {
    let table = rows(&[&["", "Monday", "Tuesday"], &["Swim", "9-10", "9-10"], &["Skate", "1-2pm"]]);
    assert_eq!(
        Schedule::from_table(CAPTION, FACILITY, &table, &ParseOptions::default()),
        Err(TableError::RowSizeMismatch { row: 2, expected: 3, found: 2 })
    );
}

#[test]
fn render_24h() {
    let text = render_schedule(&sample(), &RenderOptions::default());
    assert_eq!(
        text,
        "  &  Bearbrook Outdoor Pool - swimming - August 2 to 4\n\
         - warning: failed to parse weekday from header \"Holiday\"\n\
         - warning: failed to parse time range \"closed\"\n\
         \x20   ~ [MO 07:00 - 08:30] lane swim 18+\n\
         \x20   ~ [MO 18:00 - 19:00] lane swim 18+\n\
         \x20   ~ [Holiday 12:00 - 13:00] lane swim 18+\n\
         \x20   ~ [TU \"closed\"] public skate\n\
         \x20   ~ [Holiday 09:00 - 10:00] public skate\n"
    );
}

#[test]
fn render_12h_shares_suffix() {
    let text = render_schedule(&sample(), &RenderOptions { ampm: true });
    let lines: Vec<&str> = text.lines().filter(|l| l.starts_with("    ~")).collect();
    assert_eq!(lines[0], "    ~ [MO 7:00 - 8:30am] lane swim 18+");
    assert_eq!(lines[2], "    ~ [Holiday 12:00 - 1:00pm] lane swim 18+");
}

#[test]
fn retain_prunes_empty_activities() {
    let mut s = sample();
    assert!(s.retain(|_, wd, _| wd == Some(Weekday::Mon)));
    assert_eq!(s.activities.len(), 1);
    assert_eq!(s.slot_count(), 2);

    let mut s = sample();
    assert!(s.retain(|name, _, slot| name.contains("skate") && slot.is_parsed()));
    assert_eq!(s.slot_count(), 1);

    let mut s = sample();
    assert!(!s.retain(|_, _, _| false));
}

#[test]
fn group_titles() {
    assert_eq!(schedule_group_title("Drop-in schedules \u{2013} swimming and aquafit"), "Swimming And Aquafit");
}
