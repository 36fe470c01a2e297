// src/cli.rs
use std::{fs, io::Write, path::{Path, PathBuf}};

use tracing::debug;

use crate::config::TableFormat;
use crate::core::normalize_text;
use crate::csv::{parse_rows, split_caption};
use crate::error::{Error, Result, TableError};
use crate::params::{Command, Params};
use crate::parse::{clean_activity_name, cut_date_range, parse_clock_range_with, parse_date_range};
use crate::schedule::Schedule;
use crate::textconv::render_all;

fn usage(msg: impl Into<String>) -> Error {
    Error::Usage(msg.into())
}

/// Parse command-line arguments (program name already skipped). Flags may
/// appear anywhere; everything after the command word is its argument.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Params> {
    let mut params = Params::new();
    let mut command: Option<String> = None;
    let mut rest = Vec::new();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--strict" => params.strict = true,
            "--ampm" => params.ampm = true,
            "--lower" => params.lower = true,
            "--facility" => {
                params.facility = args.next().ok_or_else(|| usage("Missing value for --facility"))?;}
            "--format" => {
                let v = args.next().ok_or_else(|| usage("Missing value for --format"))?;
                params.format = Some(match v.to_ascii_lowercase().as_str() {
                    "csv" => TableFormat::Csv,
                    "tsv" => TableFormat::Tsv,
                    other => return Err(usage(format!("Unknown format: {}", other))),
                });}
            "-v" => params.verbosity = params.verbosity.saturating_add(1),
            "-vv" => params.verbosity = params.verbosity.saturating_add(2),
            "-h" | "--help" => {
                params.command = Command::Help;
                return Ok(params);
            }
            "--" => rest.extend(args.by_ref()),
            _ if command.is_none() => {
                if a.starts_with('-') { return Err(usage(format!("Unknown arg: {}", a))); }
                command = Some(a);
            }
            _ => rest.push(a),
        }
    }

    let Some(cmd) = command else {
        return Ok(params); // nothing to do: help
    };
    if rest.is_empty() {
        return Err(usage(format!("Missing argument for {}", cmd)));
    }
    let text = rest.join(" ");
    params.command = match cmd.as_str() {
        "normalize" => Command::Normalize(text),
        "clock" => Command::Clock(text),
        "date" => Command::Date(text),
        "activity" => Command::Activity(text),
        "table" => Command::Table(rest.into_iter().map(PathBuf::from).collect()),
        other => return Err(usage(format!("Unknown command: {}", other))),
    };
    Ok(params)
}

pub fn run(params: &Params) -> Result<()> {
    let stdout = std::io::stdout();
    run_to(params, &mut stdout.lock())
}

/// Execute `params.command`, writing results to `out`. A value that does not
/// parse prints `unparsed`; only I/O and table shape problems are errors.
pub fn run_to<W: Write>(params: &Params, out: &mut W) -> Result<()> {
    let opts = params.parse_options();
    match &params.command {
        Command::Help => write!(out, "{}", include_str!("cli_help.txt"))?,
        Command::Normalize(text) => writeln!(out, "{}", normalize_text(text, false, params.lower))?,
        Command::Clock(text) => match parse_clock_range_with(text, &opts) {
            Some(r) => writeln!(out, "{}", r.format(params.ampm))?,
            None => writeln!(out, "unparsed")?,
        },
        Command::Date(text) => {
            let phrase = match cut_date_range(text) {
                Some((prefix, phrase)) => {
                    writeln!(out, "prefix: {}", prefix)?;
                    phrase
                }
                None => s!(text.as_str()),
            };
            writeln!(out, "date:   {}", phrase)?;
            match parse_date_range(&phrase) {
                Some(r) => writeln!(out, "range:  {}", r)?,
                None => writeln!(out, "range:  unparsed")?,
            }
        }
        Command::Activity(text) => writeln!(out, "{}", clean_activity_name(text))?,
        Command::Table(paths) => {
            let schedules = paths
                .iter()
                .map(|p| load_schedule(p, params))
                .collect::<Result<Vec<_>>>()?;
            write!(out, "{}", render_all(&schedules, &params.render_options()))?;
        }
    }
    Ok(())
}

/// Read one table file: caption row, day header row, activity rows.
pub fn load_schedule(path: &Path, params: &Params) -> Result<Schedule> {
    let text = fs::read_to_string(path)?;
    let format = params.format.unwrap_or_else(|| {
        TableFormat::from_ext(path.extension().and_then(|e| e.to_str()).unwrap_or(""))
    });
    debug!(path = %path.display(), ?format, "loading table");

    let rows = parse_rows(&text, format.delim());
    let (caption, rows) = split_caption(rows).ok_or(TableError::InvalidLayout)?;
    Ok(Schedule::from_table(&caption, &params.facility, &rows, &params.parse_options())?)
}
