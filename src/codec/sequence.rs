//! Coordinate and coordinate-sequence conversion
//!
//! Encoding turns coordinates into nested JSON number arrays; decoding goes
//! through [`CoordinateTree`], a nested list that mirrors the arrays found
//! under a `coordinates` member before the geometry type gives them meaning.

use serde_json::Value;

use super::errors::{GeoJsonError, GeoJsonResult};
use super::number::CoordinateFormatter;
use crate::geometry::Coordinate;

/// Encode one coordinate as `[x, y]`, `[x, y, z]`, or `[]` when it is not set
pub fn coordinate_to_list(formatter: &CoordinateFormatter, coord: &Coordinate) -> Vec<Value> {
    let (x, y) = match (formatter.round_to_json(coord.x), formatter.round_to_json(coord.y)) {
        (Some(x), Some(y)) => (x, y),
        _ => return Vec::new(),
    };

    let mut list = vec![x, y];
    if let Some(z) = coord.finite_z().and_then(|z| formatter.round_to_json(z)) {
        list.push(z);
    }
    list
}

/// Encode a sequence of coordinates; an empty sequence gives an empty list
pub fn sequence_to_list(formatter: &CoordinateFormatter, coords: &[Coordinate]) -> Vec<Value> {
    coords
        .iter()
        .map(|c| Value::Array(coordinate_to_list(formatter, c)))
        .collect()
}

/// Build a coordinate from decoded ordinates
///
/// Missing `x`/`y` default to `NaN`, never to zero. `z` is only present
/// when the list has a third element; further ordinates are dropped.
pub fn list_to_coordinate(ordinates: &[f64]) -> Coordinate {
    Coordinate {
        x: ordinates.first().copied().unwrap_or(f64::NAN),
        y: ordinates.get(1).copied().unwrap_or(f64::NAN),
        z: ordinates.get(2).copied(),
    }
}

/// Parse the textual form of an ordinate (float, fixed-point or long decimal)
///
/// Values that overflow an f64 are rejected rather than read as infinity.
pub fn parse_ordinate(text: &str) -> GeoJsonResult<f64> {
    let trimmed = text.trim();
    // f64::from_str also accepts "NaN" and "inf", which are not numbers here
    let numeric = !trimmed.is_empty()
        && trimmed.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    match trimmed.parse::<f64>() {
        Ok(v) if numeric && v.is_finite() => Ok(v),
        _ => Err(GeoJsonError::MalformedNumber(text.to_string())),
    }
}

/// Nested arrays collected from a `coordinates` member
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateTree {
    Leaf(f64),
    Node(Vec<CoordinateTree>),
}

impl CoordinateTree {
    fn children(&self, context: &str) -> GeoJsonResult<&[CoordinateTree]> {
        match self {
            CoordinateTree::Node(children) => Ok(children),
            CoordinateTree::Leaf(v) => Err(GeoJsonError::DecodeError(format!(
                "expected an array for {}, found number {}", context, v
            ))),
        }
    }

    /// Interpret as a single position (depth 0)
    pub fn to_coordinate(&self, context: &str) -> GeoJsonResult<Coordinate> {
        let ordinates = self
            .children(context)?
            .iter()
            .map(|child| match child {
                CoordinateTree::Leaf(v) => Ok(*v),
                CoordinateTree::Node(_) => Err(GeoJsonError::DecodeError(format!(
                    "expected a position for {}, found a nested array", context
                ))),
            })
            .collect::<GeoJsonResult<Vec<f64>>>()?;
        Ok(list_to_coordinate(&ordinates))
    }

    /// Interpret as a list of positions (depth 1)
    pub fn to_sequence(&self, context: &str) -> GeoJsonResult<Vec<Coordinate>> {
        self.children(context)?
            .iter()
            .map(|child| child.to_coordinate(context))
            .collect()
    }

    /// Interpret as a list of position lists (depth 2)
    pub fn to_sequences(&self, context: &str) -> GeoJsonResult<Vec<Vec<Coordinate>>> {
        self.children(context)?
            .iter()
            .map(|child| child.to_sequence(context))
            .collect()
    }

    /// Interpret as a list of lists of position lists (depth 3)
    pub fn to_sequence_groups(&self, context: &str) -> GeoJsonResult<Vec<Vec<Vec<Coordinate>>>> {
        self.children(context)?
            .iter()
            .map(|child| child.to_sequences(context))
            .collect()
    }
}
