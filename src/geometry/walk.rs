//! Coordinate tree walks
//!
//! Every geometry is a tree whose leaves are coordinates. These helpers
//! visit each leaf in document order, either read-only, in place, or by
//! building a transformed copy.

use super::coordinate::Coordinate;
use super::types::*;

/// Visit every leaf coordinate of `geometry` in document order
pub fn for_each_coord<F>(geometry: &Geometry, mut visit: F)
where
    F: FnMut(&Coordinate),
{
    walk(geometry, &mut visit);
}

fn walk<F: FnMut(&Coordinate)>(geometry: &Geometry, visit: &mut F) {
    match geometry {
        Geometry::Point(p) => visit(&p.coord),
        Geometry::LineString(ls) => ls.coords.iter().for_each(|c| visit(c)),
        Geometry::Polygon(poly) => {
            for ring in poly.rings() {
                ring.coords.iter().for_each(|c| visit(c));
            }
        },
        Geometry::MultiPoint(mp) => mp.points.iter().for_each(|p| visit(&p.coord)),
        Geometry::MultiLineString(mls) => {
            for line in &mls.lines {
                line.coords.iter().for_each(|c| visit(c));
            }
        },
        Geometry::MultiPolygon(mp) => {
            for ring in mp.polygons.iter().flat_map(|p| p.rings()) {
                ring.coords.iter().for_each(|c| visit(c));
            }
        },
        Geometry::GeometryCollection(gc) => {
            for member in &gc.geometries {
                walk(member, visit);
            }
        },
    }
}

/// Apply `filter` to every leaf coordinate of `geometry`, rewriting it in place
pub fn apply_filter<F>(geometry: &mut Geometry, mut filter: F)
where
    F: FnMut(&mut Coordinate),
{
    walk_mut(geometry, &mut filter);
}

fn walk_mut<F: FnMut(&mut Coordinate)>(geometry: &mut Geometry, filter: &mut F) {
    match geometry {
        Geometry::Point(p) => filter(&mut p.coord),
        Geometry::LineString(ls) => ls.coords.iter_mut().for_each(|c| filter(c)),
        Geometry::Polygon(poly) => {
            for ring in poly.rings_mut() {
                ring.coords.iter_mut().for_each(|c| filter(c));
            }
        },
        Geometry::MultiPoint(mp) => mp.points.iter_mut().for_each(|p| filter(&mut p.coord)),
        Geometry::MultiLineString(mls) => {
            for line in &mut mls.lines {
                line.coords.iter_mut().for_each(|c| filter(c));
            }
        },
        Geometry::MultiPolygon(mp) => {
            for ring in mp.polygons.iter_mut().flat_map(|p| p.rings_mut()) {
                ring.coords.iter_mut().for_each(|c| filter(c));
            }
        },
        Geometry::GeometryCollection(gc) => {
            for member in &mut gc.geometries {
                walk_mut(member, filter);
            }
        },
    }
}

/// Build a copy of `geometry` with `map_op` applied to every coordinate
///
/// The source geometry is left untouched.
pub fn map_coords<F>(geometry: &Geometry, mut map_op: F) -> Geometry
where
    F: FnMut(&Coordinate) -> Coordinate,
{
    let mut copy = geometry.clone();
    apply_filter(&mut copy, |c| *c = map_op(c));
    copy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Geometry {
        Geometry::GeometryCollection(GeometryCollection {
            geometries: vec![
                Geometry::Point(Point::new(1.0, 2.0)),
                Geometry::Polygon(Polygon::new(
                    LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)]),
                    vec![LineString::from(vec![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)])],
                )),
            ],
        })
    }

    #[test]
    fn test_visits_in_document_order() {
        let mut xs = Vec::new();
        for_each_coord(&sample(), |c| xs.push(c.x));
        assert_eq!(xs, vec![1.0, 0.0, 4.0, 4.0, 0.0, 1.0, 2.0, 2.0, 1.0]);
    }

    #[test]
    fn test_map_coords_leaves_source_untouched() {
        let source = sample();
        let shifted = map_coords(&source, |c| Coordinate::new(c.x + 10.0, c.y));

        let mut first = None;
        for_each_coord(&shifted, |c| {
            first.get_or_insert(c.x);
        });
        assert_eq!(first, Some(11.0));
        assert_eq!(source, sample());
    }

    #[test]
    fn test_apply_filter_in_place() {
        let mut geometry = sample();
        apply_filter(&mut geometry, |c| c.y = -c.y);
        let mut ys = Vec::new();
        for_each_coord(&geometry, |c| ys.push(c.y));
        assert_eq!(ys[0], -2.0);
        assert_eq!(geometry.coord_count(), 9);
    }
}
