//! floorplan - apartment area report
//!
//! Reads apartment records from stdin and prints the detail listing and
//! the summary table to stdout. Diagnostics go to stderr.

use floorplan_model::{Error, FloorPlanParser, Result};
use floorplan_parser::PlanParser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

/// Log level for stderr diagnostics
const LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Main entry point
fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("{err}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr logger
fn init_logging() -> Result<()> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    WriteLogger::init(LOG_LEVEL, config, io::stderr())
        .map_err(|e| Error::other(format!("Failed to initialize logger: {e}")))
}

/// Read, report, release
fn run() -> Result<()> {
    let building = PlanParser::new().parse_reader(&mut io::stdin().lock())?;

    let mut out = BufWriter::new(io::stdout().lock());
    let rendered = floorplan_report::write_report(&mut out, &building);
    let flushed = out.flush();

    let released = building.release();
    log::debug!(
        "Released {} apartments, {} rooms",
        released.apartments,
        released.rooms
    );

    rendered?;
    flushed?;
    Ok(())
}
