//! Command-line interface for converting boundary catalogs into GeoJSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod convert;
mod error;

pub use error::CliError;

use convert::{ConvertArgs, run_convert};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_REPAIR: &str = "repair";
pub(crate) const ENV_CATALOG: &str = "SKYCHART_CMDS_CONVERT_CATALOG";
pub(crate) const ENV_OUTPUT: &str = "SKYCHART_CMDS_CONVERT_OUTPUT";

/// Log level used when `RUST_LOG` is unset.
const DEFAULT_LOG_SPEC: &str = "info";

/// Run the skychart CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or the conversion fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Convert(args) => {
            run_convert(args)?;
        }
    }
    Ok(())
}

/// Install a stderr logger honouring `RUST_LOG`.
///
/// Region diagnostics are emitted as log records, so they reach stderr and
/// never mix with the output document.
///
/// # Errors
/// Returns [`CliError::Logging`] when the log specification is invalid or a
/// logger is already installed.
pub fn init_logging() -> Result<flexi_logger::LoggerHandle, CliError> {
    let handle = flexi_logger::Logger::try_with_env_or_str(DEFAULT_LOG_SPEC)?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}

#[derive(Debug, Parser)]
#[command(
    name = "skychart",
    about = "Build region polygons from celestial boundary catalogs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a boundary catalog into a GeoJSON feature collection.
    Convert(ConvertArgs),
}

#[cfg(test)]
mod tests;
