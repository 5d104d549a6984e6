//! Boundary catalog parsing.
//!
//! Each line reads `<ra_hours> <dec_degrees> <code> [<code> ...]`. Lines that
//! are blank, have fewer than three fields or carry non-numeric coordinates
//! are noise (headers, footers, comments) and are dropped without error.

use std::io::{BufRead, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use skychart_core::{BoundaryPoint, RegionGroups, boundary_point};
use skychart_fs::open_utf8_file;
use thiserror::Error;

/// A usable catalog line: one point shared by one or more regions.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLine<'a> {
    /// The converted boundary point.
    pub point: BoundaryPoint,
    /// Region codes the point borders, in line order.
    pub codes: Vec<&'a str>,
}

/// Errors that abort catalog parsing.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened.
    #[error("failed to open catalog at {path:?}: {source}")]
    Open {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading from the catalog stream failed.
    #[error("failed to read catalog line {line}: {source}")]
    Read {
        /// One-based number of the line being read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading from the catalog file failed.
    #[error("failed to read catalog {path:?} at line {line}: {source}")]
    ReadFile {
        /// Catalog path.
        path: Utf8PathBuf,
        /// One-based number of the line being read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Parse a single catalog line.
///
/// Returns `None` for lines that carry no usable point.
///
/// # Examples
/// ```
/// use skychart_data::parse_line;
///
/// let line = parse_line("1.0 0.0 A B").expect("usable line");
/// assert_eq!((line.point.x, line.point.y), (15.0, 0.0));
/// assert_eq!(line.codes, ["A", "B"]);
///
/// assert!(parse_line("abc 0.0 X Y").is_none());
/// assert!(parse_line("1.0 0.0").is_none());
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Option<CatalogLine<'_>> {
    let mut fields = line.split_whitespace();
    let ra_field = fields.next()?;
    let dec_field = fields.next()?;
    let codes: Vec<&str> = fields.collect();
    if codes.is_empty() {
        return None;
    }
    let ra_hours: f64 = ra_field.parse().ok()?;
    let dec_degrees: f64 = dec_field.parse().ok()?;
    Some(CatalogLine {
        point: boundary_point(ra_hours, dec_degrees),
        codes,
    })
}

/// Group catalog points by region code, preserving catalog order.
///
/// # Errors
/// Returns [`CatalogError::Read`] when the underlying reader fails, including
/// on invalid UTF-8.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use skychart_data::parse_catalog;
///
/// # fn main() -> Result<(), skychart_data::CatalogError> {
/// let catalog = Cursor::new("0.0 0.0 Tri\n1.0 0.0 Tri\n\nheader line\n1.0 1.0 Tri\n");
/// let groups = parse_catalog(catalog)?;
/// assert_eq!(groups.get("Tri").map(|group| group.len()), Some(3));
/// # Ok(())
/// # }
/// ```
pub fn parse_catalog<R>(mut reader: R) -> Result<RegionGroups, CatalogError>
where
    R: BufRead,
{
    let mut groups = RegionGroups::default();
    let mut line = String::new();
    let mut line_number = 0usize;
    let mut ignored = 0usize;

    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => line_number += 1,
            Err(source) => {
                return Err(CatalogError::Read {
                    line: line_number + 1,
                    source,
                });
            }
        }
        if line.trim().is_empty() {
            continue;
        }
        let Some(parsed) = parse_line(&line) else {
            ignored += 1;
            continue;
        };
        for code in parsed.codes {
            groups.push(code, parsed.point);
        }
    }

    debug!(
        "read {line_number} catalog lines into {} regions ({ignored} lines ignored)",
        groups.len()
    );
    Ok(groups)
}

/// Open and parse the catalog at `path`.
///
/// The file handle is dropped before returning, on success and on error.
///
/// # Errors
/// Returns [`CatalogError::Open`] when the file cannot be opened and
/// [`CatalogError::ReadFile`] when reading fails part-way through.
pub fn read_catalog(path: &Utf8Path) -> Result<RegionGroups, CatalogError> {
    let file = open_utf8_file(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(BufReader::new(file)).map_err(|err| match err {
        CatalogError::Read { line, source } => CatalogError::ReadFile {
            path: path.to_path_buf(),
            line,
            source,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests;
