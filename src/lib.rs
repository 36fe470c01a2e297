// src/lib.rs
// #![allow(dead_code)]

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod params;
pub mod parse;
pub mod schedule;
pub mod schema;
pub mod textconv;

#[cfg(feature = "cli")]
pub mod log;

pub use error::{Error, Result, TableError};
pub use parse::{clean_activity_name, cut_date_range, parse_clock_range, parse_date_range};
pub use schedule::Schedule;
