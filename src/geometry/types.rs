//! Geometry value types
//!
//! One struct per GeoJSON geometry kind, tied together by the closed
//! [`Geometry`] enum.

use super::coordinate::Coordinate;
use super::geometry_type::GeometryType;

/// A single position
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    pub coord: Coordinate,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { coord: Coordinate::new(x, y) }
    }

    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Point { coord: Coordinate::new_3d(x, y, z) }
    }

    /// A point with no position
    pub fn empty() -> Self {
        Point { coord: Coordinate::empty() }
    }

    pub fn is_empty(&self) -> bool {
        !self.coord.is_set()
    }
}

impl From<Coordinate> for Point {
    fn from(coord: Coordinate) -> Self {
        Point { coord }
    }
}

/// An ordered sequence of coordinates
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    pub coords: Vec<Coordinate>,
}

impl LineString {
    pub fn new(coords: Vec<Coordinate>) -> Self {
        LineString { coords }
    }

    /// Whether the first and last coordinates are equal
    ///
    /// Polygon rings are expected to be closed; nothing in the codec
    /// enforces it.
    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }
}

impl From<Vec<(f64, f64)>> for LineString {
    fn from(coords: Vec<(f64, f64)>) -> Self {
        LineString::new(coords.into_iter().map(Coordinate::from).collect())
    }
}

/// A closed line string used as a polygon boundary
pub type LinearRing = LineString;

/// A polygon with an exterior ring and zero or more holes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub exterior: LinearRing,
    pub holes: Vec<LinearRing>,
}

impl Polygon {
    pub fn new(exterior: LinearRing, holes: Vec<LinearRing>) -> Self {
        Polygon { exterior, holes }
    }

    /// Exterior ring followed by the holes, in order
    pub fn rings(&self) -> impl Iterator<Item = &LinearRing> {
        std::iter::once(&self.exterior).chain(self.holes.iter())
    }

    pub(crate) fn rings_mut(&mut self) -> impl Iterator<Item = &mut LinearRing> {
        std::iter::once(&mut self.exterior).chain(self.holes.iter_mut())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint {
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString {
    pub lines: Vec<LineString>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon {
    pub polygons: Vec<Polygon>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    pub geometries: Vec<Geometry>,
}

/// Any GeoJSON geometry
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The kind of this geometry
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Number of leaf coordinates, including unset ones
    pub fn coord_count(&self) -> usize {
        let mut count = 0;
        super::walk::for_each_coord(self, |_| count += 1);
        count
    }

    /// True when no coordinate in the geometry is set
    pub fn is_empty(&self) -> bool {
        let mut empty = true;
        super::walk::for_each_coord(self, |c| {
            if c.is_set() {
                empty = false;
            }
        });
        empty
    }

    /// Number of direct members for multi-geometries and collections, 1 otherwise
    pub fn member_count(&self) -> usize {
        match self {
            Geometry::MultiPoint(mp) => mp.points.len(),
            Geometry::MultiLineString(mls) => mls.lines.len(),
            Geometry::MultiPolygon(mp) => mp.polygons.len(),
            Geometry::GeometryCollection(gc) => gc.geometries.len(),
            _ => 1,
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Geometry::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);
