//! GeoJSON feature collection output.
//!
//! Field order is fixed by the struct definitions and the document is
//! pretty-printed with two-space indentation, so unchanged input yields a
//! byte-identical document that diffs cleanly between runs.

use geo::{CoordsIter, Polygon};
use serde::{Deserialize, Serialize};
use skychart_core::RegionFeature;
use thiserror::Error;

/// Key of the region-code property on every feature.
///
/// Keep in step with the `serde(rename)` on [`Properties::code`].
pub const PROPERTY_KEY: &str = "iau";

/// Literal `"FeatureCollection"` type tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionType {
    /// The only allowed value.
    #[default]
    FeatureCollection,
}

/// Literal `"Feature"` type tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    /// The only allowed value.
    #[default]
    Feature,
}

/// Top-level output document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Always `"FeatureCollection"`.
    #[serde(rename = "type")]
    pub kind: CollectionType,
    /// Accepted regions in builder order.
    pub features: Vec<Feature>,
}

/// A tagged region geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Always `"Feature"`.
    #[serde(rename = "type")]
    pub kind: FeatureType,
    /// Region tag.
    pub properties: Properties,
    /// Region outline.
    pub geometry: Geometry,
}

/// The single property carried by each feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    /// Region code (historically the IAU constellation abbreviation),
    /// serialised under [`PROPERTY_KEY`].
    #[serde(rename = "iau")]
    pub code: String,
}

/// GeoJSON geometry encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Polygon rings as `[x, y]` positions; the first ring is the exterior.
    Polygon {
        /// Closed rings.
        coordinates: Vec<Vec<[f64; 2]>>,
    },
}

impl From<&Polygon<f64>> for Geometry {
    fn from(polygon: &Polygon<f64>) -> Self {
        let ring = |line: &geo::LineString<f64>| -> Vec<[f64; 2]> {
            line.coords_iter().map(|coord| [coord.x, coord.y]).collect()
        };
        let coordinates = std::iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .map(ring)
            .collect();
        Self::Polygon { coordinates }
    }
}

impl From<&RegionFeature> for Feature {
    fn from(feature: &RegionFeature) -> Self {
        Self {
            kind: FeatureType::Feature,
            properties: Properties {
                code: feature.code().to_owned(),
            },
            geometry: Geometry::from(feature.polygon()),
        }
    }
}

/// Errors raised while producing the output document.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Encoding the collection as JSON failed.
    #[error("failed to serialise feature collection: {0}")]
    Serialise(#[source] serde_json::Error),
}

/// Wrap accepted features into a collection, preserving their order.
///
/// # Examples
/// ```
/// use geo::polygon;
/// use skychart_core::RegionFeature;
/// use skychart_data::emit;
///
/// # fn main() -> Result<(), skychart_core::RegionFeatureError> {
/// let triangle = polygon![(x: 0.0, y: 0.0), (x: 15.0, y: 0.0), (x: 15.0, y: 15.0)];
/// let collection = emit(&[RegionFeature::new("Tri", triangle)?]);
/// assert_eq!(collection.features[0].properties.code, "Tri");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn emit(features: &[RegionFeature]) -> FeatureCollection {
    FeatureCollection {
        kind: CollectionType::FeatureCollection,
        features: features.iter().map(Feature::from).collect(),
    }
}

/// Render a collection as pretty-printed JSON followed by a newline.
///
/// # Errors
/// Returns [`EmitError::Serialise`] when JSON encoding fails.
pub fn render(collection: &FeatureCollection) -> Result<String, EmitError> {
    let mut payload = serde_json::to_string_pretty(collection).map_err(EmitError::Serialise)?;
    payload.push('\n');
    Ok(payload)
}
