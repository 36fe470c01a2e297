// src/params.rs
use std::path::PathBuf;

use crate::config::{ParseOptions, RenderOptions, TableFormat};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Normalize(String),
    Clock(String),
    Date(String),
    Activity(String),
    Table(Vec<PathBuf>),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub command: Command,
    pub strict: bool,                // reject typo'd ranges instead of repairing them
    pub ampm: bool,                  // 12h output
    pub lower: bool,                 // normalize: also lowercase
    pub facility: String,            // table: facility name stripped from captions
    pub format: Option<TableFormat>, // table: None = guess from extension
    pub verbosity: u8,               // -v / -vv
}

impl Params {
    pub fn new() -> Self {
        Self {
            command: Command::Help,
            strict: false,
            ampm: false,
            lower: false,
            facility: s!(),
            format: None,
            verbosity: 0,
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions { strict: self.strict }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { ampm: self.ampm }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
