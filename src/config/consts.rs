// src/config/consts.rs

// Clock
pub const MINUTES_PER_HOUR: i32 = 60;
pub const MINUTES_PER_DAY: i32 = 24 * MINUTES_PER_HOUR;

// Calendar names. Abbreviations are always the first three letters.
pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

// Packed date digit groups (YYYYMMDDW)
pub const DATE_YEAR_UNIT: i32 = 1_00_00_0;
pub const DATE_MONTH_UNIT: i32 = 1_00_0;
pub const DATE_DAY_UNIT: i32 = 1_0;
pub const DATE_MAX: i64 = 9999_99_99_9;

// Loose date parsing
pub const DAY_MAX_TRANSIENT: i64 = 32;
pub const YEAR_MIN_EXCLUSIVE: i64 = 2000;
pub const YEAR_MAX_EXCLUSIVE: i64 = 4000;

// Activity names
pub const AGE_MAX_EXCLUSIVE: u32 = 150;

/// Trailing `*` clauses meaning "reservations not required".
pub const RESERVATION_NOT_REQUIRED: &[&str] = &[
    "reservations not required",
    "reservation not required",
];

/// Trailing `*` clauses meaning "reservations required".
pub const RESERVATION_REQUIRED: &[&str] = &[
    "reservations required",
    "reservation required",
    "requires reservations",
    "requires reservation",
];

/// Vocabulary fixes for activity names, applied in a single left-to-right
/// pass. At each position the first matching entry wins.
pub const ACTIVITY_REPLACEMENTS: &[(&str, &str)] = &[
    ("swimming", "swim"),
    ("aqualite", "aqua lite"),
    ("skating", "skate"),
    ("pick up ", "pick-up "),
    ("pickup ", "pick-up "),
    ("sport ", "sports "),
    (" - courts", " court"),
    (" - court", " court"),
    ("®", ""),
];

pub const REDUCED_CAPACITY_SUFFIX: &str = " - reduced capacity";

// Captions
pub const GROUP_TITLE_PREFIX: &str = "drop-in schedule";
pub const SCHEDULE_SUFFIX: &str = " schedule";
pub const NOT_APPLICABLE: &str = "n/a";

// Logging
pub const LOG_ENV: &str = "REC_SCHED_LOG";
