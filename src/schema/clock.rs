// src/schema/clock.rs
//
// Time of day as minutes since 00:00 of a reference day. Values past 1440
// belong to following days, which is how a range crossing midnight is kept
// ordered. Negative means invalid/unset.

use std::fmt::{self, Write};

use crate::config::consts::{MINUTES_PER_DAY, MINUTES_PER_HOUR};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(i32);

impl ClockTime {
    pub const INVALID: ClockTime = ClockTime(-1);

    /// Build from hour/minute. Either being negative yields `INVALID`.
    /// Hours past 23 roll into the following day(s).
    pub fn new(hh: i32, mm: i32) -> Self {
        if hh < 0 || mm < 0 {
            return Self::INVALID;
        }
        ClockTime(hh.saturating_mul(MINUTES_PER_HOUR).saturating_add(mm))
    }

    #[inline] pub fn minutes(self) -> i32 { self.0 }
    #[inline] pub fn is_valid(self) -> bool { self.0 >= 0 }

    /// Number of midnights between the reference day and this time.
    pub fn day_offset(self) -> i32 {
        if self.is_valid() { self.0 / MINUTES_PER_DAY } else { 0 }
    }

    /// The same wall-clock time on the reference day.
    pub fn time_of_day(self) -> ClockTime {
        if self.is_valid() { ClockTime(self.0 % MINUTES_PER_DAY) } else { self }
    }

    /// `(day offset, hour, minute)`; all zero when invalid.
    pub fn split(self) -> (i32, i32, i32) {
        if !self.is_valid() {
            return (0, 0, 0);
        }
        let t = self.0 % MINUTES_PER_DAY;
        (self.day_offset(), t / MINUTES_PER_HOUR, t % MINUTES_PER_HOUR)
    }

    /// The same time one day later.
    pub fn next_day(self) -> ClockTime {
        if self.is_valid() { ClockTime(self.0.saturating_add(MINUTES_PER_DAY)) } else { self }
    }

    /// `HH:MM` (24h) or `H:MMam`/`H:MMpm` (12h), prefixed with one `>` per
    /// day offset.
    pub fn format(self, ampm: bool) -> String {
        if !self.is_valid() {
            return s!("invalid");
        }
        let (days, mut hh, mm) = self.split();
        let mut out = String::with_capacity(8 + days as usize);
        let mut meridiem = 'a';
        if ampm && hh >= 12 {
            meridiem = 'p';
            hh -= 12;
        }
        for _ in 0..days {
            out.push('>');
        }
        let _ = match (ampm, hh) {
            (true, 0) => write!(out, "12:{mm:02}"),
            (true, _) => write!(out, "{hh}:{mm:02}"),
            (false, _) => write!(out, "{hh:02}:{mm:02}"),
        };
        if ampm {
            out.push(meridiem);
            out.push('m');
        }
        out
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(true))
    }
}

/// Inclusive range of clock times. Valid when both ends are valid and
/// `start < end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockRange {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl ClockRange {
    /// An end before the start is taken to be on the next day.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        let end = if start.is_valid() && end.is_valid() && end < start { end.next_day() } else { end };
        Self { start, end }
    }

    pub fn from_hm(hh1: i32, mm1: i32, hh2: i32, mm2: i32) -> Self {
        Self::new(ClockTime::new(hh1, mm1), ClockTime::new(hh2, mm2))
    }

    pub fn is_valid(&self) -> bool {
        self.start.is_valid() && self.end.is_valid() && self.start < self.end
    }

    /// Length in minutes (0 when invalid).
    pub fn duration(&self) -> i32 {
        if self.is_valid() { self.end.minutes() - self.start.minutes() } else { 0 }
    }

    /// Whether the range reaches past midnight of its start day.
    pub fn crosses_midnight(&self) -> bool {
        self.is_valid() && self.end.day_offset() > self.start.day_offset()
    }

    /// Closed-interval intersection; false unless both ranges are valid.
    pub fn overlaps(&self, other: &ClockRange) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.start <= other.end
            && other.start <= self.end
    }

    /// Render both ends. For a range under a day starting on the reference
    /// day the end loses its leading `>`, and a shared am/pm suffix is only
    /// printed once: `12:00 - 1:00am`.
    pub fn format(&self, ampm: bool) -> String {
        if !self.is_valid() {
            return s!("invalid");
        }
        let mut x = self.start.format(ampm);
        let mut y = self.end.format(ampm);
        if self.duration() < MINUTES_PER_DAY && self.start.minutes() < MINUTES_PER_DAY {
            if let Some(rest) = y.strip_prefix('>') {
                y = rest.to_string();
            }
            if ampm && x.as_bytes()[x.len() - 2] == y.as_bytes()[y.len() - 2] {
                x.truncate(x.len() - 2);
            }
        }
        join!(&x, " - ", &y)
    }
}

impl fmt::Display for ClockRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(true))
    }
}
