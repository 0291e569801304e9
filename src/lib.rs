pub mod geometry;
pub mod codec;
pub mod coordinate;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::GeoKit;

pub use codec::{Feature, FeatureCollection, GeoJsonError, GeoJsonResult, GeometryDecoder, GeometryEncoder};
pub use config::CodecConfig;
pub use coordinate::{bounding_box, BoundingBox, CoordinateSystem, CoordinateTransformer};
pub use geometry::{Coordinate, Geometry, GeometryType};
