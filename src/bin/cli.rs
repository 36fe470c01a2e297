// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};

use rec_schedules::{cli, log};

fn main() -> Result<()> {
    color_eyre::install()?;

    let params = cli::parse_args(std::env::args().skip(1))?;
    log::init(params.verbosity).map_err(|e| eyre!(e))?;

    cli::run(&params)?;
    Ok(())
}
