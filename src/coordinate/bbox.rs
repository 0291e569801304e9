//! Bounding box calculation
//!
//! Boxes follow the GeoJSON member layout: `[minx, miny, maxx, maxy]` in 2D
//! and `[minx, miny, minz, maxx, maxy, maxz]` when any scanned coordinate
//! carries a finite z.

use log::debug;

use crate::geometry::{for_each_coord, Coordinate, Geometry, LineString, Polygon};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
    /// Z bounds, present only for 3D boxes
    pub z_range: Option<(f64, f64)>,
}

impl BoundingBox {
    /// Create a new 2D bounding box
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
            z_range: None,
        }
    }

    /// Create a new 3D bounding box
    pub fn new_3d(min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
            z_range: Some((min_z, max_z)),
        }
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> Result<Self, String> {
        let values = bbox_str
            .split(',')
            .map(|part| part.trim().parse::<f64>().map_err(|_| format!("Invalid bounding box value: {}", part.trim())))
            .collect::<Result<Vec<f64>, String>>()?;

        match values.len() {
            4 | 6 => Self::from_slice(&values).ok_or_else(|| "Invalid bounding box".to_string()),
            _ => Err("Bounding box must have 4 or 6 comma-separated values".to_string()),
        }
    }

    /// Read a GeoJSON-style bbox array
    ///
    /// Four or five entries are read as 2D, six or more as 3D; fewer than
    /// four give `None`.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match values.len() {
            0..=3 => None,
            4 | 5 => Some(Self::new(values[0], values[1], values[2], values[3])),
            _ => Some(Self::new_3d(values[0], values[1], values[2], values[3], values[4], values[5])),
        }
    }

    /// The box as 4 or 6 numbers
    pub fn to_vec(&self) -> Vec<f64> {
        match self.z_range {
            Some((min_z, max_z)) => vec![self.min_x, self.min_y, min_z, self.max_x, self.max_y, max_z],
            None => vec![self.min_x, self.min_y, self.max_x, self.max_y],
        }
    }

    pub fn is_3d(&self) -> bool {
        self.z_range.is_some()
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Get the center of the bounding box
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// Check if this bounding box contains a coordinate
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.x >= self.min_x && coord.x <= self.max_x &&
            coord.y >= self.min_y && coord.y <= self.max_y
    }

    pub fn south_west(&self) -> Coordinate {
        Coordinate::new(self.min_x, self.min_y)
    }

    pub fn south_east(&self) -> Coordinate {
        Coordinate::new(self.max_x, self.min_y)
    }

    pub fn north_east(&self) -> Coordinate {
        Coordinate::new(self.max_x, self.max_y)
    }

    pub fn north_west(&self) -> Coordinate {
        Coordinate::new(self.min_x, self.max_y)
    }

    /// The box outline as a closed ring `[SW, SE, NE, NW, SW]`
    pub fn as_polygon(&self) -> Polygon {
        let sw = self.south_west();
        let exterior = LineString::new(vec![sw, self.south_east(), self.north_east(), self.north_west(), sw]);
        Polygon::new(exterior, Vec::new())
    }
}

/// South-west corner of a bbox array; `None` with fewer than four entries
pub fn south_west(bbox: &[f64]) -> Option<Coordinate> {
    BoundingBox::from_slice(bbox).map(|b| b.south_west())
}

/// South-east corner of a bbox array; `None` with fewer than four entries
pub fn south_east(bbox: &[f64]) -> Option<Coordinate> {
    BoundingBox::from_slice(bbox).map(|b| b.south_east())
}

/// North-east corner of a bbox array; `None` with fewer than four entries
pub fn north_east(bbox: &[f64]) -> Option<Coordinate> {
    BoundingBox::from_slice(bbox).map(|b| b.north_east())
}

/// North-west corner of a bbox array; `None` with fewer than four entries
pub fn north_west(bbox: &[f64]) -> Option<Coordinate> {
    BoundingBox::from_slice(bbox).map(|b| b.north_west())
}

/// Rectangle polygon for a bbox array; `None` with fewer than four entries
pub fn box_as_polygon(bbox: &[f64]) -> Option<Polygon> {
    BoundingBox::from_slice(bbox).map(|b| b.as_polygon())
}

/// Running bounds over a coordinate scan
#[derive(Debug, Clone, Copy)]
struct BoundsAccumulator {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    z_range: Option<(f64, f64)>,
    seen: bool,
}

impl BoundsAccumulator {
    fn new() -> Self {
        BoundsAccumulator {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
            z_range: None,
            seen: false,
        }
    }

    fn update(&mut self, coord: &Coordinate) {
        if !coord.is_set() {
            return;
        }
        self.seen = true;
        self.min_x = self.min_x.min(coord.x);
        self.min_y = self.min_y.min(coord.y);
        self.max_x = self.max_x.max(coord.x);
        self.max_y = self.max_y.max(coord.y);

        if let Some(z) = coord.finite_z() {
            self.z_range = Some(match self.z_range {
                Some((min_z, max_z)) => (min_z.min(z), max_z.max(z)),
                None => (z, z),
            });
        }
    }

    fn finish(self) -> Option<BoundingBox> {
        if !self.seen {
            return None;
        }
        Some(BoundingBox {
            min_x: self.min_x,
            min_y: self.min_y,
            max_x: self.max_x,
            max_y: self.max_y,
            z_range: self.z_range,
        })
    }
}

/// Minimal box enclosing every set coordinate of `geometry`
///
/// Returns `None` when no coordinate has both `x` and `y`.
pub fn bounding_box(geometry: &Geometry) -> Option<BoundingBox> {
    bounding_box_of(std::slice::from_ref(geometry))
}

/// Minimal box enclosing every set coordinate of all `geometries`
pub fn bounding_box_of<'a, I>(geometries: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = &'a Geometry>,
{
    let mut bounds = BoundsAccumulator::new();
    for geometry in geometries {
        for_each_coord(geometry, |c| bounds.update(c));
    }
    let bbox = bounds.finish();
    debug!("Computed bounding box: {:?}", bbox.map(|b| b.to_vec()));
    bbox
}
