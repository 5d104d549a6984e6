//! Convert command implementation for the skychart CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use skychart_core::{
    DiagnosticSink, GeometryRepair, LogSink, NoRepair, PolygonBuilder, ZeroBufferRepair,
};
use skychart_data::{ConversionSummary, ConvertOptions, convert};

use crate::{ARG_CATALOG, ARG_OUTPUT, ARG_REPAIR, CliError, ENV_CATALOG, ENV_OUTPUT};

/// Catalog path used when none is configured.
pub(crate) const DEFAULT_CATALOG: &str = "constbnd.dat";
/// Output path used when none is configured.
pub(crate) const DEFAULT_OUTPUT: &str = "const.geojson";

/// Repair strategy applied to polygons that fail validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum RepairMode {
    /// Rebuild the outline with a zero-distance buffer.
    #[default]
    ZeroBuffer,
    /// Reject invalid polygons without attempting a repair.
    None,
}

impl RepairMode {
    pub(crate) fn strategy(self) -> Box<dyn GeometryRepair> {
        match self {
            Self::ZeroBuffer => Box::new(ZeroBufferRepair),
            Self::None => Box::new(NoRepair),
        }
    }
}

/// CLI arguments for the `convert` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read a celestial boundary catalog, group its vertices by \
                 region code, build one validated polygon per region and \
                 write them as a GeoJSON FeatureCollection. Regions that \
                 cannot form a valid polygon are reported on stderr and \
                 left out of the document.",
    about = "Convert a boundary catalog into GeoJSON"
)]
#[ortho_config(prefix = "SKYCHART")]
pub(crate) struct ConvertArgs {
    /// Path to the boundary catalog (defaults to `constbnd.dat`).
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Destination for the GeoJSON document (defaults to `const.geojson`).
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Repair strategy for invalid polygons.
    #[arg(long = ARG_REPAIR, value_enum, value_name = "mode")]
    #[serde(default)]
    pub(crate) repair: Option<RepairMode>,
}

impl ConvertArgs {
    pub(crate) fn into_config(self) -> Result<ConvertConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ConvertConfig::try_from(merged)
    }
}

/// Resolved `convert` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConvertConfig {
    /// Path to the boundary catalog.
    pub(crate) catalog: Utf8PathBuf,
    /// Path the GeoJSON document is written to.
    pub(crate) output: Utf8PathBuf,
    /// Repair strategy for invalid polygons.
    pub(crate) repair: RepairMode,
}

impl ConvertConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.catalog, ARG_CATALOG)?;
        Self::require_writable_target(&self.output)
    }

    pub(crate) fn options(&self) -> ConvertOptions {
        ConvertOptions {
            catalog: self.catalog.clone(),
            output: self.output.clone(),
        }
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match skychart_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn require_writable_target(path: &Utf8Path) -> Result<(), CliError> {
        match skychart_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::OutputIsDirectory {
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_OUTPUT,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ConvertArgs> for ConvertConfig {
    type Error = CliError;

    fn try_from(args: ConvertArgs) -> Result<Self, Self::Error> {
        let catalog = args
            .catalog
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG));
        let output = args
            .output
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT));
        if output.as_str().is_empty() {
            return Err(CliError::MissingArgument {
                field: ARG_OUTPUT,
                env: ENV_OUTPUT,
            });
        }
        if catalog.as_str().is_empty() {
            return Err(CliError::MissingArgument {
                field: ARG_CATALOG,
                env: ENV_CATALOG,
            });
        }
        Ok(Self {
            catalog,
            output,
            repair: args.repair.unwrap_or_default(),
        })
    }
}

pub(super) fn run_convert(args: ConvertArgs) -> Result<ConversionSummary, CliError> {
    let mut sink = LogSink;
    run_convert_with(args, &mut sink)
}

pub(super) fn run_convert_with(
    args: ConvertArgs,
    sink: &mut dyn DiagnosticSink,
) -> Result<ConversionSummary, CliError> {
    let config = args.into_config()?;
    execute_convert(&config, sink)
}

pub(super) fn execute_convert(
    config: &ConvertConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<ConversionSummary, CliError> {
    config.validate_sources()?;
    let builder = PolygonBuilder::new(config.repair.strategy());
    info!(
        "converting {} into {} using {} repair",
        config.catalog,
        config.output,
        builder.repair_strategy().name()
    );
    let summary = convert(&config.options(), &builder, sink)?;
    Ok(summary)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ConvertConfig, CliError> {
    let merged = ConvertArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ConvertConfig::try_from(merged)
}
