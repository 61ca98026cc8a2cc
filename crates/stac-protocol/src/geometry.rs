//! GeoJSON geometry for the `intersects` search filter.
//!
//! The upstream catalogue takes spatial filters as well-known text, so the
//! only operation needed here besides (de)serialization is WKT rendering.

use serde::{Deserialize, Serialize};

/// A GeoJSON geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A single position.
    Point {
        /// Coordinates as [longitude, latitude, (altitude)].
        coordinates: Vec<f64>,
    },

    /// Multiple positions.
    MultiPoint {
        coordinates: Vec<Vec<f64>>,
    },

    /// A line of positions.
    LineString {
        coordinates: Vec<Vec<f64>>,
    },

    /// Multiple lines.
    MultiLineString {
        coordinates: Vec<Vec<Vec<f64>>>,
    },

    /// An array of linear rings (first is the exterior, rest are holes).
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },

    /// Multiple polygons.
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
}

impl Geometry {
    /// Render the geometry as well-known text.
    pub fn to_wkt(&self) -> String {
        match self {
            Geometry::Point { coordinates } => {
                format!("POINT ({})", wkt_position(coordinates))
            }
            Geometry::MultiPoint { coordinates } => {
                let points: Vec<String> = coordinates
                    .iter()
                    .map(|p| format!("({})", wkt_position(p)))
                    .collect();
                format!("MULTIPOINT ({})", points.join(", "))
            }
            Geometry::LineString { coordinates } => {
                format!("LINESTRING {}", wkt_ring(coordinates))
            }
            Geometry::MultiLineString { coordinates } => {
                let lines: Vec<String> = coordinates.iter().map(|l| wkt_ring(l)).collect();
                format!("MULTILINESTRING ({})", lines.join(", "))
            }
            Geometry::Polygon { coordinates } => {
                format!("POLYGON {}", wkt_rings(coordinates))
            }
            Geometry::MultiPolygon { coordinates } => {
                let polygons: Vec<String> = coordinates.iter().map(|p| wkt_rings(p)).collect();
                format!("MULTIPOLYGON ({})", polygons.join(", "))
            }
        }
    }
}

fn wkt_position(position: &[f64]) -> String {
    position
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn wkt_ring(ring: &[Vec<f64>]) -> String {
    let positions: Vec<String> = ring.iter().map(|p| wkt_position(p)).collect();
    format!("({})", positions.join(", "))
}

fn wkt_rings(rings: &[Vec<Vec<f64>>]) -> String {
    let parts: Vec<String> = rings.iter().map(|r| wkt_ring(r)).collect();
    format!("({})", parts.join(", "))
}
