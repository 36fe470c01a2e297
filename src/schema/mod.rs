// src/schema/mod.rs
pub mod clock;
pub mod date;
pub mod slot;

pub use clock::{ClockRange, ClockTime};
pub use date::{Date, DateRange, WEEKDAYS};
pub use slot::TimeSlot;
