// src/schema/date.rs
//
// Partially specified calendar dates packed into one integer, YYYYMMDDW:
// year*100000 + month*1000 + day*10 + weekday (Sunday=1..Saturday=7).
// A zero digit group means "not specified". The integer order is the order
// of the (year, month, day, weekday) tuple, so packed dates sort and diff
// naturally.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::consts::{
    DATE_DAY_UNIT, DATE_MAX, DATE_MONTH_UNIT, DATE_YEAR_UNIT, MONTH_NAMES, WEEKDAY_NAMES,
};

/// Weekdays in packed-digit order (digit = index + 1).
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Wed,
    Weekday::Thu, Weekday::Fri, Weekday::Sat,
];

/// Leap year used to size February when no year is given.
const ANY_LEAP_YEAR: i32 = 2024;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    pub const ZERO: Date = Date(0);

    /// Pack the given components. Oversized values saturate to the width of
    /// their digit group (9999 / 99 / 99) and are then caught by `is_valid`.
    pub fn new(year: Option<u32>, month: Option<u32>, day: Option<u32>, weekday: Option<Weekday>) -> Self {
        let mut x = 0i32;
        if let Some(y) = year.filter(|&y| y > 0) {
            x += y.min(9999) as i32 * DATE_YEAR_UNIT;
        }
        if let Some(m) = month.filter(|&m| m > 0) {
            x += m.min(99) as i32 * DATE_MONTH_UNIT;
        }
        if let Some(d) = day.filter(|&d| d > 0) {
            x += d.min(99) as i32 * DATE_DAY_UNIT;
        }
        if let Some(w) = weekday {
            x += weekday_digit(w);
        }
        Date(x)
    }

    pub fn from_ymd(year: u32, month: u32, day: u32) -> Self {
        Self::new(Some(year), Some(month), Some(day), None)
    }

    pub fn from_md(month: u32, day: u32) -> Self {
        Self::new(None, Some(month), Some(day), None)
    }

    pub fn from_raw(raw: i32) -> Self { Date(raw) }
    #[inline] pub fn raw(self) -> i32 { self.0 }
    #[inline] pub fn is_zero(self) -> bool { self.0 == 0 }

    fn group(self, unit: i32, width: i32) -> i32 {
        if self.0 > 0 { self.0 / unit % width } else { 0 }
    }

    pub fn year(self) -> Option<u32> {
        match self.group(DATE_YEAR_UNIT, 1_0000) {
            0 => None,
            y => Some(y as u32),
        }
    }

    pub fn month(self) -> Option<u32> {
        match self.group(DATE_MONTH_UNIT, 1_00) {
            m @ 1..=12 => Some(m as u32),
            _ => None,
        }
    }

    pub fn day(self) -> Option<u32> {
        match self.group(DATE_DAY_UNIT, 1_00) {
            d @ 1..=31 => Some(d as u32),
            _ => None,
        }
    }

    pub fn weekday(self) -> Option<Weekday> {
        match self.group(1, 1_0) {
            w @ 1..=7 => Some(WEEKDAYS[(w - 1) as usize]),
            _ => None,
        }
    }

    /// Non-zero, every specified component in range, the day fits the month
    /// (a leap year is assumed when the year is missing), and a full date's
    /// weekday matches the calendar.
    pub fn is_valid(self) -> bool {
        if self.0 <= 0 || i64::from(self.0) >= DATE_MAX {
            return false;
        }
        let (month, day, weekday) = (self.month(), self.day(), self.weekday());
        if month.is_none() && self.group(DATE_MONTH_UNIT, 1_00) != 0 { return false; }
        if day.is_none() && self.group(DATE_DAY_UNIT, 1_00) != 0 { return false; }
        if weekday.is_none() && self.group(1, 1_0) != 0 { return false; }

        let year = self.year();
        if let Some(m) = month {
            let days = days_in_month(year.map_or(ANY_LEAP_YEAR, |y| y as i32), m);
            if day.unwrap_or(0) > days {
                return false;
            }
        }
        if let (Some(y), Some(m), Some(d), Some(w)) = (year, month, day, weekday) {
            return NaiveDate::from_ymd_opt(y as i32, m, d).is_some_and(|nd| nd.weekday() == w);
        }
        true
    }
}

pub fn weekday_digit(w: Weekday) -> i32 {
    w.num_days_from_sunday() as i32 + 1
}

pub fn weekday_name(w: Weekday) -> &'static str {
    WEEKDAY_NAMES[w.num_days_from_sunday() as usize]
}

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get((month as usize).checked_sub(1)?).copied()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .map_or(31, |d| d.day())
}

impl fmt::Display for Date {
    /// `Wednesday, January 3, 2024`, leaving out whatever is not specified.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return Ok(());
        }
        let (weekday, year, month, day) = (self.weekday(), self.year(), self.month(), self.day());
        if let Some(w) = weekday {
            f.write_str(weekday_name(w))?;
        }
        if let Some(name) = month.and_then(month_name) {
            if weekday.is_some() { f.write_str(", ")?; }
            f.write_str(name)?;
            if day.is_some() || year.is_some() { f.write_str(" ")?; }
            if let Some(d) = day { write!(f, "{d}")?; }
        }
        if let Some(y) = year {
            if weekday.is_some() || (month.is_some() && day.is_some()) {
                f.write_str(", ")?;
            }
            write!(f, "{y}")?;
        }
        Ok(())
    }
}

/// Inclusive range of dates. A zero side is open: `until to` / `starting
/// from`. Equal non-zero sides are a single day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateRange {
    pub from: Date,
    pub to: Date,
}

impl DateRange {
    pub fn new(from: Date, to: Date) -> Self { Self { from, to } }
    pub fn single(date: Date) -> Self { Self { from: date, to: date } }
    pub fn starting(from: Date) -> Self { Self { from, to: Date::ZERO } }
    pub fn until(to: Date) -> Self { Self { from: Date::ZERO, to } }

    pub fn is_single(&self) -> bool { !self.from.is_zero() && self.from == self.to }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (has_from, has_to) = (!self.from.is_zero(), !self.to.is_zero());
        if !has_from && !has_to {
            return Ok(());
        }
        if self.is_single() {
            return write!(f, "{}", self.from);
        }
        let side = |d: Date, f: &mut fmt::Formatter<'_>| -> fmt::Result {
            if d.is_valid() { write!(f, "{d}") } else { f.write_str("<invalid>") }
        };
        match (has_from, has_to) {
            (true, false) => { f.write_str("starting ")?; side(self.from, f) }
            (false, true) => { f.write_str("until ")?; side(self.to, f) }
            _ => {
                side(self.from, f)?;
                f.write_str(" to ")?;
                side(self.to, f)
            }
        }
    }
}
