//! Coordinate reference systems and bounding boxes
//!
//! This module provides CRS identification, the WGS84/Web Mercator
//! coordinate filters, and bounding box calculation over geometries.

pub mod bbox;
pub mod transform;
mod crs;

// Re-export key types
pub use self::bbox::{bounding_box, bounding_box_of, box_as_polygon, BoundingBox};
pub use self::transform::{
    CoordinateFilter, CoordinateTransformer, FilterChain, MercatorToWgs84, SwapAxes, Wgs84ToMercator,
};
pub use self::crs::{CoordinateSystem, CoordinateSystemFactory};
