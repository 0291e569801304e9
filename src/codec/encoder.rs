//! Geometry to GeoJSON encoding
//!
//! Members are inserted in the order `type`, `bbox`, then `coordinates` or
//! `geometries`, so equal geometries always serialize to identical bytes.

use std::io::Write;

use log::debug;
use serde_json::{Map, Value};

use super::errors::GeoJsonResult;
use super::number::CoordinateFormatter;
use super::sequence::{coordinate_to_list, sequence_to_list};
use crate::config::CodecConfig;
use crate::coordinate::bbox::{bounding_box, BoundingBox};
use crate::geometry::{Geometry, LineString, Polygon};

/// Encodes geometries as GeoJSON geometry objects
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryEncoder {
    formatter: CoordinateFormatter,
}

impl GeometryEncoder {
    pub fn new(formatter: CoordinateFormatter) -> Self {
        GeometryEncoder { formatter }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::new(CoordinateFormatter::from_config(config))
    }

    pub fn formatter(&self) -> &CoordinateFormatter {
        &self.formatter
    }

    /// Encode a geometry as a JSON object
    ///
    /// With `with_bbox`, a `bbox` member computed over the same geometry is
    /// added unless the geometry has no set coordinate. Collection members
    /// are encoded without their own `bbox`.
    pub fn encode(&self, geometry: &Geometry, with_bbox: bool) -> Map<String, Value> {
        let geometry_type = geometry.geometry_type();
        debug!("Encoding {} (bbox: {})", geometry_type, with_bbox);

        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(geometry_type.name().to_string()));

        if with_bbox {
            if let Some(bbox) = bounding_box(geometry).and_then(|b| self.bbox_to_json(&b)) {
                map.insert("bbox".to_string(), bbox);
            }
        }

        match geometry {
            Geometry::GeometryCollection(gc) => {
                let members = gc
                    .geometries
                    .iter()
                    .map(|member| Value::Object(self.encode(member, false)))
                    .collect();
                map.insert("geometries".to_string(), Value::Array(members));
            },
            other => {
                map.insert("coordinates".to_string(), self.coordinates(other));
            },
        }

        map
    }

    /// Encode a geometry as a JSON value
    pub fn encode_value(&self, geometry: &Geometry, with_bbox: bool) -> Value {
        Value::Object(self.encode(geometry, with_bbox))
    }

    /// Encode a geometry as a compact JSON string
    pub fn encode_to_string(&self, geometry: &Geometry, with_bbox: bool) -> GeoJsonResult<String> {
        Ok(serde_json::to_string(&self.encode(geometry, with_bbox))?)
    }

    /// Write a geometry as compact JSON
    pub fn encode_to_writer<W: Write>(&self, writer: W, geometry: &Geometry, with_bbox: bool) -> GeoJsonResult<()> {
        serde_json::to_writer(writer, &self.encode(geometry, with_bbox))?;
        Ok(())
    }

    /// A bbox as a JSON array of 4 or 6 numbers
    ///
    /// `None` if any bound cannot be written as a JSON number; a shorter
    /// array is never produced.
    pub fn bbox_to_json(&self, bbox: &BoundingBox) -> Option<Value> {
        bbox.to_vec()
            .into_iter()
            .map(|v| self.formatter.round_to_json(v))
            .collect::<Option<Vec<Value>>>()
            .map(Value::Array)
    }

    /// The `coordinates` member of a non-collection geometry
    fn coordinates(&self, geometry: &Geometry) -> Value {
        let f = &self.formatter;
        match geometry {
            Geometry::Point(p) => Value::Array(coordinate_to_list(f, &p.coord)),
            Geometry::LineString(ls) => self.line(ls),
            Geometry::Polygon(poly) => self.polygon(poly),
            Geometry::MultiPoint(mp) => Value::Array(
                mp.points
                    .iter()
                    .map(|p| Value::Array(coordinate_to_list(f, &p.coord)))
                    .collect(),
            ),
            Geometry::MultiLineString(mls) => {
                Value::Array(mls.lines.iter().map(|l| self.line(l)).collect())
            },
            Geometry::MultiPolygon(mp) => {
                Value::Array(mp.polygons.iter().map(|p| self.polygon(p)).collect())
            },
            Geometry::GeometryCollection(_) => Value::Array(Vec::new()),
        }
    }

    fn line(&self, line: &LineString) -> Value {
        Value::Array(sequence_to_list(&self.formatter, &line.coords))
    }

    /// `[exterior, hole1, hole2, ...]`, or `[]` for an empty polygon
    fn polygon(&self, polygon: &Polygon) -> Value {
        if polygon.exterior.coords.is_empty() && polygon.holes.is_empty() {
            return Value::Array(Vec::new());
        }
        Value::Array(polygon.rings().map(|ring| self.line(ring)).collect())
    }
}
