//! File-to-file conversion: catalog in, feature collection out.

use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use skychart_core::{DiagnosticSink, GeometryRepair, PolygonBuilder, SkipDiagnostic};
use skychart_fs::replace_utf8_file;
use thiserror::Error;

use crate::{CatalogError, EmitError, emit, read_catalog, render};

/// Input and output locations for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Boundary catalog to read.
    pub catalog: Utf8PathBuf,
    /// Destination of the GeoJSON document.
    pub output: Utf8PathBuf,
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Distinct region codes found in the catalog.
    pub regions: usize,
    /// Regions written to the document.
    pub features: usize,
    /// Regions reported as skipped.
    pub skipped: usize,
    /// Where the document was written.
    pub output: Utf8PathBuf,
}

/// Fatal conversion failures.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The catalog could not be read.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The document could not be produced.
    #[error(transparent)]
    Emit(#[from] EmitError),
    /// The document could not be written.
    #[error("failed to write feature collection to {path:?}: {source}")]
    Write {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Forwards diagnostics while counting them.
struct CountingSink<'a> {
    inner: &'a mut dyn DiagnosticSink,
    count: usize,
}

impl DiagnosticSink for CountingSink<'_> {
    fn record(&mut self, diagnostic: SkipDiagnostic) {
        self.count += 1;
        self.inner.record(diagnostic);
    }
}

/// Convert the catalog named in `options` into a GeoJSON document.
///
/// Skipped regions go to `sink`; they never fail the run. The document is
/// rendered in full before the output file is touched, so a failed run
/// leaves no partial document behind.
///
/// # Errors
/// Returns [`ConvertError`] when the catalog cannot be read or the document
/// cannot be rendered or written.
pub fn convert<R>(
    options: &ConvertOptions,
    builder: &PolygonBuilder<R>,
    sink: &mut dyn DiagnosticSink,
) -> Result<ConversionSummary, ConvertError>
where
    R: GeometryRepair,
{
    let groups = read_catalog(&options.catalog)?;
    let mut counting = CountingSink {
        inner: sink,
        count: 0,
    };
    let features = builder.build(&groups, &mut counting);
    let payload = render(&emit(&features))?;
    write_document(&options.output, &payload)?;

    let summary = ConversionSummary {
        regions: groups.len(),
        features: features.len(),
        skipped: counting.count,
        output: options.output.clone(),
    };
    info!(
        "wrote {} region features to {} ({} skipped)",
        summary.features, summary.output, summary.skipped
    );
    Ok(summary)
}

fn write_document(path: &Utf8Path, payload: &str) -> Result<(), ConvertError> {
    replace_utf8_file(path, payload.as_bytes()).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}
