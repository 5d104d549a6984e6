//! Error types emitted by the skychart CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use skychart_data::ConvertError;
use thiserror::Error;

/// Errors emitted by the skychart CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The logger could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The output path names an existing directory.
    #[error("output path {path:?} is a directory")]
    OutputIsDirectory { path: Utf8PathBuf },
    /// The conversion itself failed.
    #[error("conversion failed: {0}")]
    Convert(#[from] ConvertError),
}
