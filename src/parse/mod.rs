// src/parse/mod.rs
pub mod activity;
pub mod caption;
pub mod clock_range;
pub mod date_range;

pub use activity::clean_activity_name;
pub use caption::{header_weekday, schedule_group_title, schedule_name, split_time_cell};
pub use clock_range::{parse_clock_range, parse_clock_range_with};
pub use date_range::{cut_date_range, parse_date_range};
