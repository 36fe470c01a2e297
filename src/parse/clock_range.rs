// src/parse/clock_range.rs
//
// Time ranges as humans type them into schedule tables:
//   "9:30 - 11am", "5pm-3am", "noon to midnight", "0930-1100", "17h00-19h30"
// A string parses into exactly one range or not at all.

use crate::config::ParseOptions;
use crate::core::{cut_first, normalize_text, strip_spaces};
use crate::schema::{ClockRange, ClockTime};

const SEPARATORS: &[&str] = &["-", "to"];

/// What one side of the range said about am/pm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Meridiem {
    /// Plain `H[:MM]`; 24h unless the other side lends it am/pm.
    Bare,
    /// Military (`HHMM`) or French (`HhMM`); always 24h.
    Fixed,
    Am,
    Pm,
}

impl Meridiem {
    fn is_12h(self) -> bool { matches!(self, Meridiem::Am | Meridiem::Pm) }
}

/// Parse with the default (lenient) options.
pub fn parse_clock_range(text: &str) -> Option<ClockRange> {
    parse_clock_range_with(text, &ParseOptions::default())
}

pub fn parse_clock_range_with(text: &str, opts: &ParseOptions) -> Option<ClockRange> {
    let s = strip_spaces(&normalize_text(text, false, true));
    if s.is_empty() {
        return unparsed!(text, "empty");
    }

    let Some((left, mut right)) = cut_first(&s, SEPARATORS) else {
        return unparsed!(text, "single time");
    };
    if !opts.strict {
        // "1 - - 2", "1 to - 2": extra separators with nothing between them
        while let Some((junk, rest)) = cut_first(right, SEPARATORS) {
            if !junk.trim().is_empty() || rest.trim().is_empty() {
                break;
            }
            right = rest;
        }
    }
    if left.is_empty() || right.is_empty() {
        return unparsed!(text, "open range");
    }

    let Some((mut t1, m1)) = parse_side(left, Meridiem::Bare, opts) else {
        return unparsed!(text, "invalid start");
    };
    let Some((t2, m2)) = parse_side(right, Meridiem::Bare, opts) else {
        return unparsed!(text, "invalid end");
    };
    if m1.is_12h() && m2 == Meridiem::Bare {
        return unparsed!(text, "12h start with ambiguous end");
    }
    if m1 == Meridiem::Bare && m2.is_12h() {
        // "3-5pm": the start borrows the end's am/pm
        let Some((t, _)) = parse_side(left, m2, opts) else {
            return unparsed!(text, "start invalid as 12h");
        };
        t1 = t;
    }
    if t1 == t2 {
        return unparsed!(text, "zero-length range");
    }
    let t2 = if t1 > t2 { t2.next_day() } else { t2 };
    Some(ClockRange { start: t1, end: t2 })
}

/// Parse one endpoint (already lowercased, spaces removed). `default` is the
/// meridiem assumed for a bare `H[:MM]`.
fn parse_side(s: &str, default: Meridiem, opts: &ParseOptions) -> Option<(ClockTime, Meridiem)> {
    match s {
        "midnight" => return Some((ClockTime::new(0, 0), Meridiem::Am)),
        "noon" => return Some((ClockTime::new(12, 0), Meridiem::Pm)),
        _ => {}
    }

    let (hh, mm, meridiem) = if let Some((hh, mm)) = s.split_once('h') {
        (hh, mm, Meridiem::Fixed)
    } else if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        (&s[..2], &s[2..], Meridiem::Fixed)
    } else {
        let (rest, meridiem) = match cut_meridiem(s, "pm", opts) {
            Some(rest) => (rest, Meridiem::Pm),
            None => match cut_meridiem(s, "am", opts) {
                Some(rest) => (rest, Meridiem::Am),
                None => (s, default),
            },
        };
        match rest.split_once(':') {
            Some((hh, mm)) => (hh, mm, meridiem),
            None => (rest, "00", meridiem),
        }
    };

    if hh.len() > 2 || mm.len() > 2 {
        return None;
    }
    let mut hh: i32 = hh.parse().ok()?;
    let mm: i32 = mm.parse().ok()?;
    match meridiem {
        Meridiem::Am | Meridiem::Pm => {
            if !(1..=12).contains(&hh) {
                return None;
            }
            if meridiem == Meridiem::Pm && hh < 12 { hh += 12; }
            if meridiem == Meridiem::Am && hh == 12 { hh = 0; }
        }
        Meridiem::Bare | Meridiem::Fixed => {
            if !(0..=23).contains(&hh) {
                return None;
            }
        }
    }
    if !(0..=59).contains(&mm) {
        return None;
    }
    Some((ClockTime::new(hh, mm), meridiem))
}

/// Strip an `am`/`pm` suffix. Lenient mode also eats repeats of the same
/// suffix ("11amam"); a mixed or partial repeat ("11aam") is left in place
/// and fails later as a bad minute/hour.
fn cut_meridiem<'a>(s: &'a str, suffix: &str, opts: &ParseOptions) -> Option<&'a str> {
    let mut rest = s.strip_suffix(suffix)?;
    if !opts.strict {
        while let Some(x) = rest.trim_end().strip_suffix(suffix) {
            rest = x;
        }
    }
    Some(rest)
}
