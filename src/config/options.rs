// src/config/options.rs
use crate::csv::Delim;

/// Leniency knobs for the parsers. Passed explicitly; nothing is read from
/// ambient state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject typo'd input the lenient mode would repair: duplicated am/pm
    /// suffixes ("11am am") and doubled separators ("1 - - 2").
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self { Self { strict: true } }
    pub fn lenient() -> Self { Self { strict: false } }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// 12-hour clock with am/pm suffixes instead of 24-hour.
    pub ampm: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableFormat {
    #[default]
    Csv,
    Tsv,
}

impl TableFormat {
    pub fn delim(self) -> Delim {
        match self { TableFormat::Csv => Delim::Csv, TableFormat::Tsv => Delim::Tsv }
    }

    /// Guess from a file extension; anything but `.tsv`/`.tab` is CSV.
    pub fn from_ext(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "tsv" | "tab" => TableFormat::Tsv,
            _ => TableFormat::Csv,
        }
    }
}
