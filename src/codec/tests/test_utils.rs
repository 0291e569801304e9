use crate::geometry::{
    Coordinate, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

/// A closed square ring with its lower-left corner at (x, y)
pub fn square_ring(x: f64, y: f64, size: f64) -> LineString {
    LineString::from(vec![
        (x, y),
        (x + size, y),
        (x + size, y + size),
        (x, y + size),
        (x, y),
    ])
}

/// One geometry of every kind, with a hole and a 3D point in the mix
pub fn sample_geometries() -> Vec<Geometry> {
    let polygon = Polygon::new(square_ring(0.0, 0.0, 10.0), vec![square_ring(2.0, 2.0, 2.0)]);
    vec![
        Geometry::Point(Point::new(102.0, 0.5)),
        Geometry::Point(Point::new_3d(-71.06, 42.36, 12.5)),
        Geometry::LineString(LineString::from(vec![(102.0, 0.0), (103.0, 1.0), (104.0, 0.0)])),
        Geometry::Polygon(polygon.clone()),
        Geometry::MultiPoint(MultiPoint {
            points: vec![Point::new(10.0, 40.0), Point::new(40.0, 30.0)],
        }),
        Geometry::MultiLineString(MultiLineString {
            lines: vec![
                LineString::from(vec![(10.0, 10.0), (20.0, 20.0)]),
                LineString::from(vec![(40.0, 40.0), (30.0, 30.0), (40.0, 20.0)]),
            ],
        }),
        Geometry::MultiPolygon(MultiPolygon {
            polygons: vec![polygon, Polygon::new(square_ring(20.0, 20.0, 5.0), Vec::new())],
        }),
        Geometry::GeometryCollection(GeometryCollection {
            geometries: vec![
                Geometry::Point(Point::from(Coordinate::new(1.0, 2.0))),
                Geometry::LineString(LineString::from(vec![(1.0, 2.0), (3.0, 4.0)])),
            ],
        }),
    ]
}
