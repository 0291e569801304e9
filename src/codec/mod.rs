//! GeoJSON geometry codec
//!
//! This module provides the conversion between [`Geometry`](crate::geometry::Geometry)
//! values and GeoJSON, in both directions, plus the feature wrappers.

pub mod errors;
pub mod number;
pub mod sequence;
pub mod encoder;
pub mod token;
pub mod stream;
pub mod decoder;
pub mod feature;
#[cfg(test)]
mod tests;

pub use errors::{GeoJsonError, GeoJsonResult};
pub use number::{CoordinateFormatter, FormattedNumber};
pub use sequence::{coordinate_to_list, list_to_coordinate, sequence_to_list, CoordinateTree};
pub use encoder::GeometryEncoder;
pub use token::{Token, TokenSource, ValueTokenSource, VecTokenSource};
pub use stream::decode_geometry_stream;
pub use decoder::{GeometryDecoder, GeometryStateMachine, State};
pub use feature::{Feature, FeatureCollection};
