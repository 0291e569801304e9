//! Geometry type discriminator

use std::fmt;
use std::str::FromStr;

use crate::codec::errors::{GeoJsonError, GeoJsonResult};

/// The seven GeoJSON geometry kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// The value of the `type` member for this kind
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }

    /// Array nesting depth of the `coordinates` member below the position level
    ///
    /// `None` for collections, which carry `geometries` instead.
    pub fn coordinate_depth(&self) -> Option<usize> {
        match self {
            GeometryType::Point => Some(0),
            GeometryType::LineString | GeometryType::MultiPoint => Some(1),
            GeometryType::Polygon | GeometryType::MultiLineString => Some(2),
            GeometryType::MultiPolygon => Some(3),
            GeometryType::GeometryCollection => None,
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeometryType {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> GeoJsonResult<Self> {
        match s {
            "Point" => Ok(GeometryType::Point),
            "LineString" => Ok(GeometryType::LineString),
            "Polygon" => Ok(GeometryType::Polygon),
            "MultiPoint" => Ok(GeometryType::MultiPoint),
            "MultiLineString" => Ok(GeometryType::MultiLineString),
            "MultiPolygon" => Ok(GeometryType::MultiPolygon),
            "GeometryCollection" => Ok(GeometryType::GeometryCollection),
            other => Err(GeoJsonError::UnsupportedGeometryType(other.to_string())),
        }
    }
}
