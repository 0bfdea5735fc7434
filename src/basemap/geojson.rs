//! Minimal GeoJSON reader for base-map layers.
//!
//! Only geometry is read. Positions may carry a third (altitude) value,
//! which is ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

pub type Ring = Vec<(f64, f64)>;

/// Geometry extracted from one GeoJSON document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerGeometry {
    /// Open polylines (LineString, MultiLineString).
    pub lines: Vec<Ring>,
    /// Polygon rings (exterior and holes).
    pub rings: Vec<Ring>,
}

impl LayerGeometry {
    /// Everything that can be stroked: polylines plus ring boundaries.
    pub fn outlines(&self) -> impl Iterator<Item = &Ring> {
        self.lines.iter().chain(self.rings.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rings.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<Feature>,
    #[serde(default)]
    geometry: Option<Geometry>,
    #[serde(default)]
    coordinates: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
    #[serde(default)]
    geometries: Vec<Geometry>,
}

/// Parse a FeatureCollection, Feature or bare geometry.
pub fn parse_layer(text: &str) -> Result<LayerGeometry, AppError> {
    let doc: Document =
        serde_json::from_str(text).map_err(|e| AppError::config(format!("Invalid GeoJSON: {e}")))?;

    let mut out = LayerGeometry::default();
    match doc.kind.as_str() {
        "FeatureCollection" => {
            for feature in &doc.features {
                if let Some(geometry) = &feature.geometry {
                    collect(geometry, &mut out)?;
                }
            }
        }
        "Feature" => {
            if let Some(geometry) = &doc.geometry {
                collect(geometry, &mut out)?;
            }
        }
        kind => {
            let geometry = Geometry {
                kind: kind.to_string(),
                coordinates: doc.coordinates.unwrap_or(Value::Null),
                geometries: Vec::new(),
            };
            collect(&geometry, &mut out)?;
        }
    }
    Ok(out)
}

fn collect(geometry: &Geometry, out: &mut LayerGeometry) -> Result<(), AppError> {
    match geometry.kind.as_str() {
        "LineString" => out.lines.push(line(&geometry.coordinates)?),
        "MultiLineString" => {
            for part in coords::<Vec<Vec<Vec<f64>>>>(&geometry.coordinates)? {
                out.lines.push(to_ring(&part)?);
            }
        }
        "Polygon" => {
            for ring in coords::<Vec<Vec<Vec<f64>>>>(&geometry.coordinates)? {
                out.rings.push(to_ring(&ring)?);
            }
        }
        "MultiPolygon" => {
            for polygon in coords::<Vec<Vec<Vec<Vec<f64>>>>>(&geometry.coordinates)? {
                for ring in polygon {
                    out.rings.push(to_ring(&ring)?);
                }
            }
        }
        "GeometryCollection" => {
            for child in &geometry.geometries {
                collect(child, out)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn coords<T: serde::de::DeserializeOwned>(value: &Value) -> Result<T, AppError> {
    T::deserialize(value).map_err(|e| AppError::config(format!("Invalid GeoJSON coordinates: {e}")))
}

fn line(value: &Value) -> Result<Ring, AppError> {
    to_ring(&coords::<Vec<Vec<f64>>>(value)?)
}

fn to_ring(positions: &[Vec<f64>]) -> Result<Ring, AppError> {
    positions
        .iter()
        .map(|p| match p.as_slice() {
            [lon, lat, ..] => Ok((*lon, *lat)),
            _ => Err(AppError::config("GeoJSON position needs at least two values.")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_collection_lines_and_polygons() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {}, "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1, 12.5]]}},
                {"type": "Feature", "properties": {}, "geometry": {"type": "MultiPolygon", "coordinates": [[[[0,0],[1,0],[1,1],[0,0]]]]}},
                {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [3, 4]}},
                {"type": "Feature", "properties": {}, "geometry": null}
            ]
        }"#;
        let layer = parse_layer(text).unwrap();
        assert_eq!(layer.lines, vec![vec![(0.0, 0.0), (1.0, 1.0)]]);
        assert_eq!(layer.rings.len(), 1);
        assert_eq!(layer.rings[0].len(), 4);
        assert_eq!(layer.outlines().count(), 2);
    }

    #[test]
    fn bare_geometry() {
        let layer = parse_layer(r#"{"type": "MultiLineString", "coordinates": [[[0,0],[2,2]], [[5,5],[6,6]]]}"#).unwrap();
        assert_eq!(layer.lines.len(), 2);
        assert!(layer.rings.is_empty());
    }

    #[test]
    fn malformed_input_is_a_config_error() {
        assert_eq!(parse_layer("not json").unwrap_err().exit_code(), crate::error::EXIT_CONFIG);
        let short = parse_layer(r#"{"type": "LineString", "coordinates": [[1]]}"#).unwrap_err();
        assert!(short.message().contains("two values"));
    }
}
