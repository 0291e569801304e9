//! Geometry model
//!
//! This module provides the in-memory geometry types the codec reads
//! and writes, plus tree walks over their coordinates.

mod coordinate;
mod geometry_type;
mod types;
pub mod walk;

pub use self::coordinate::Coordinate;
pub use self::geometry_type::GeometryType;
pub use self::types::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
pub use self::walk::{apply_filter, for_each_coord, map_coords};
