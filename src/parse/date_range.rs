// src/parse/date_range.rs
//
// Date ranges trailing schedule captions:
//   "Pool - lane swim - January 6 to April 6"
//   "... - starting September 3", "... - until June 20, 2025"
//   "... - August 30 and 31", "... - Monday, August 4"

use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::{
    DAY_MAX_TRANSIENT, MONTH_NAMES, WEEKDAY_NAMES, YEAR_MAX_EXCLUSIVE, YEAR_MIN_EXCLUSIVE,
};
use crate::core::{cut_first, normalize_text};
use crate::schema::{Date, DateRange, WEEKDAYS};

/// `<prefix> <spaces/dashes around a dash> [modifier] <month|weekday>[ ,$]<rest>`
///
/// The prefix is lazy, so the split lands on the first dash that is followed
/// by something date-like and no piece of the date is left in the prefix.
static CUT_DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    let alternatives = |names: &[&str]| {
        names.iter().map(|n| join!(&n[..3], "|", n)).collect::<Vec<_>>().join("|")
    };
    let pattern = format!(
        r"(?i)^\s*(.+?)[ -]*-[ -]*((?:[a-z]+)?\s*(?:(?:{})(?:$|[ ,])|(?:{})(?:$|[ ,])).*)\s*$",
        alternatives(&MONTH_NAMES),
        alternatives(&WEEKDAY_NAMES),
    );
    Regex::new(&pattern).unwrap()
});

/// Split a caption into `(prefix, date phrase)`. `None` when the caption has
/// no trailing date phrase, in which case the whole caption is the prefix.
pub fn cut_date_range(text: &str) -> Option<(String, String)> {
    let s = normalize_text(text, false, false);
    let caps = CUT_DATE_RANGE_RE.captures(&s)?;
    Some((s!(caps.get(1)?.as_str()), s!(caps.get(2)?.as_str())))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Modifier {
    Starting,
    Until,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Split {
    To,
    And,
}

/// Parse a date phrase. On success at least one side carries a month and day.
pub fn parse_date_range(text: &str) -> Option<DateRange> {
    let s = normalize_text(text, false, true);

    let (s, modifier) = if let Some(rest) = s.strip_prefix("starting ") {
        (rest, Some(Modifier::Starting))
    } else if let Some(rest) = s.strip_prefix("until ") {
        (rest, Some(Modifier::Until))
    } else {
        (s.as_str(), None)
    };

    let (left_str, split) = match s.split_once(" to ") {
        Some((l, r)) => (l, Some((Split::To, r))),
        None => match s.split_once(" and ") {
            Some((l, r)) => (l, Some((Split::And, r))),
            None => (s, None),
        },
    };
    if modifier.is_some() && split.is_some() {
        return unparsed!(text, "both a range and one-sided");
    }

    let Some(left) = parse_loose_date(left_str) else {
        return unparsed!(text, "invalid start date");
    };

    let Some((kind, right_str)) = split else {
        return Some(match modifier {
            Some(Modifier::Starting) => DateRange::starting(left),
            Some(Modifier::Until) => DateRange::until(left),
            None => DateRange::single(left),
        });
    };

    if kind == Split::And && left.year().is_some() {
        return unparsed!(text, "year on an \"and\" range");
    }
    let right = match right_str.parse::<i64>() {
        Ok(day) if (1..=DAY_MAX_TRANSIENT).contains(&day) => {
            if kind == Split::And && left.day().map(|d| i64::from(d) + 1) != Some(day) {
                return unparsed!(text, "\"and\" days are not consecutive");
            }
            // "August 2 to 4": the end borrows the start's year and month
            Date::new(left.year(), left.month(), Some(day as u32), None)
        }
        _ if kind == Split::And => return unparsed!(text, "\"and\" needs a bare day"),
        _ => match parse_loose_date(right_str) {
            Some(d) => d,
            None => return unparsed!(text, "invalid end date"),
        },
    };
    if !right.is_valid() {
        return unparsed!(text, "invalid end date");
    }
    Some(DateRange::new(left, right))
}

/// `[weekday[,]] month day[,] [year]`, tokens split on commas and spaces.
fn parse_loose_date(s: &str) -> Option<Date> {
    let (tok, rest) = next_token(s);
    let weekday = lookup_weekday(tok);
    let (month, rest) = match weekday {
        Some(_) => {
            let (tok, rest) = next_token(rest);
            (lookup_month(tok)?, rest)
        }
        None => (lookup_month(tok)?, rest),
    };

    let (tok, mut rest) = next_token(rest);
    let day = tok.parse::<i64>().ok().filter(|d| (1..=DAY_MAX_TRANSIENT).contains(d))?;

    let mut year = None;
    if !rest.is_empty() {
        let (tok, r) = next_token(rest);
        let y = tok
            .parse::<i64>()
            .ok()
            .filter(|y| *y > YEAR_MIN_EXCLUSIVE && *y < YEAR_MAX_EXCLUSIVE)?;
        year = Some(y as u32);
        rest = r;
    }
    if !rest.is_empty() {
        return None; // trailing junk
    }

    let date = Date::new(year, Some(month), Some(day as u32), weekday);
    date.is_valid().then_some(date)
}

/// Cut the next token at the first comma or space.
fn next_token(s: &str) -> (&str, &str) {
    let s = s.trim();
    match cut_first(s, &[",", " "]) {
        Some((tok, rest)) => (tok.trim(), rest),
        None => (s, ""),
    }
}

fn name_matches(tok: &str, name: &str) -> bool {
    tok.eq_ignore_ascii_case(name) || tok.eq_ignore_ascii_case(&name[..3])
}

fn lookup_weekday(tok: &str) -> Option<Weekday> {
    WEEKDAY_NAMES.iter().position(|n| name_matches(tok, n)).map(|i| WEEKDAYS[i])
}

fn lookup_month(tok: &str) -> Option<u32> {
    MONTH_NAMES.iter().position(|n| name_matches(tok, n)).map(|i| i as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_date_shapes() {
        assert_eq!(parse_loose_date("august 2"), Some(Date::from_md(8, 2)));
        assert_eq!(parse_loose_date("aug 2, 2025"), Some(Date::from_ymd(2025, 8, 2)));
        assert_eq!(
            parse_loose_date("sat, aug 2, 2025"),
            Some(Date::new(Some(2025), Some(8), Some(2), Some(Weekday::Sat)))
        );
        assert_eq!(
            parse_loose_date("monday august 4"),
            Some(Date::new(None, Some(8), Some(4), Some(Weekday::Mon)))
        );
    }

    #[test]
    fn loose_date_rejects() {
        assert_eq!(parse_loose_date("2 august"), None);
        assert_eq!(parse_loose_date("monday 4"), None);
        assert_eq!(parse_loose_date("august"), None);
        assert_eq!(parse_loose_date("august 32"), None);
        assert_eq!(parse_loose_date("august 2 1999"), None);
        assert_eq!(parse_loose_date("august 2 2025 extra"), None);
        // Aug 4 2025 is a Monday
        assert_eq!(parse_loose_date("tue, aug 4, 2025"), None);
        assert!(parse_loose_date("mon, aug 4, 2025").is_some());
    }

    #[test]
    fn lookups_take_abbreviations() {
        assert_eq!(lookup_month("SEP"), Some(9));
        assert_eq!(lookup_month("sept"), None);
        assert_eq!(lookup_weekday("thu"), Some(Weekday::Thu));
        assert_eq!(lookup_weekday("may"), None);
    }
}
