//! Coordinate transformation functionality
//!
//! CRS filters rewrite coordinates one at a time. Applied through
//! [`CoordinateTransformer`] they visit every leaf coordinate of a geometry,
//! either on a copy (the default) or in place when the caller owns the
//! geometry and opts in.

use std::f64::consts::PI;

use log::debug;

use super::bbox::BoundingBox;
use super::crs::CoordinateSystem;
use crate::codec::errors::{GeoJsonError, GeoJsonResult};
use crate::config::CodecConfig;
use crate::geometry::{apply_filter, Coordinate, Geometry};

/// Earth radius in meters used by the spherical Mercator formulas
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Latitude bound of the Web Mercator square, in degrees
pub const MAX_MERCATOR_LATITUDE: f64 = 85.05112878;

/// A per-coordinate rewrite
pub trait CoordinateFilter {
    fn filter(&self, coord: &mut Coordinate);
}

/// WGS84 degrees to spherical Mercator meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wgs84ToMercator {
    pub earth_radius: f64,
}

/// Spherical Mercator meters to WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorToWgs84 {
    pub earth_radius: f64,
}

/// Exchanges x and y, for axis-order mismatches between CRS definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwapAxes;

impl Wgs84ToMercator {
    pub fn new(earth_radius: f64) -> Self {
        Wgs84ToMercator { earth_radius }
    }
}

impl Default for Wgs84ToMercator {
    fn default() -> Self {
        Self::new(EARTH_RADIUS)
    }
}

impl MercatorToWgs84 {
    pub fn new(earth_radius: f64) -> Self {
        MercatorToWgs84 { earth_radius }
    }
}

impl Default for MercatorToWgs84 {
    fn default() -> Self {
        Self::new(EARTH_RADIUS)
    }
}

impl CoordinateFilter for Wgs84ToMercator {
    fn filter(&self, coord: &mut Coordinate) {
        if !coord.x.is_nan() {
            coord.x = coord.x * self.earth_radius * PI / 180.0;
        }
        if !coord.y.is_nan() {
            // Clamp so the poles do not project to infinity
            let lat = coord.y.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
            coord.y = self.earth_radius * f64::ln(f64::tan(PI / 4.0 + lat.to_radians() / 2.0));
        }
    }
}

impl CoordinateFilter for MercatorToWgs84 {
    fn filter(&self, coord: &mut Coordinate) {
        if !coord.x.is_nan() {
            coord.x = (coord.x * 180.0) / (self.earth_radius * PI);
        }
        if !coord.y.is_nan() {
            coord.y = (2.0 * f64::atan(f64::exp(coord.y / self.earth_radius)) - PI / 2.0).to_degrees();
        }
    }
}

impl CoordinateFilter for SwapAxes {
    fn filter(&self, coord: &mut Coordinate) {
        coord.swap_axes();
    }
}

/// Filters applied one after another to each coordinate
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn CoordinateFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        FilterChain { filters: Vec::new() }
    }

    pub fn then<F: CoordinateFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl CoordinateFilter for FilterChain {
    fn filter(&self, coord: &mut Coordinate) {
        for f in &self.filters {
            f.filter(coord);
        }
    }
}

/// Transformer for converting geometries between coordinate systems
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransformer {
    earth_radius: f64,
}

impl Default for CoordinateTransformer {
    fn default() -> Self {
        CoordinateTransformer::new(EARTH_RADIUS)
    }
}

impl CoordinateTransformer {
    pub fn new(earth_radius: f64) -> Self {
        CoordinateTransformer { earth_radius }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::new(config.earth_radius_meters)
    }

    /// Convert from WGS84 (EPSG:4326) to Web Mercator (EPSG:3857)
    pub fn wgs84_to_web_mercator(&self, lon: f64, lat: f64) -> Coordinate {
        let mut coord = Coordinate::new(lon, lat);
        Wgs84ToMercator::new(self.earth_radius).filter(&mut coord);
        coord
    }

    /// Convert from Web Mercator (EPSG:3857) to WGS84 (EPSG:4326)
    pub fn web_mercator_to_wgs84(&self, x: f64, y: f64) -> Coordinate {
        let mut coord = Coordinate::new(x, y);
        MercatorToWgs84::new(self.earth_radius).filter(&mut coord);
        coord
    }

    /// The filter converting `from_crs` coordinates to `to_crs`
    ///
    /// `None` when both systems are the same.
    pub fn filter_for(&self, from_crs: &CoordinateSystem, to_crs: &CoordinateSystem) -> GeoJsonResult<Option<Box<dyn CoordinateFilter>>> {
        if from_crs == to_crs {
            return Ok(None);
        }

        match (from_crs, to_crs) {
            (CoordinateSystem::WGS84, CoordinateSystem::WebMercator) => {
                Ok(Some(Box::new(Wgs84ToMercator::new(self.earth_radius))))
            },
            (CoordinateSystem::WebMercator, CoordinateSystem::WGS84) => {
                Ok(Some(Box::new(MercatorToWgs84::new(self.earth_radius))))
            },
            _ => Err(GeoJsonError::UnsupportedTransform {
                from: from_crs.description(),
                to: to_crs.description(),
            }),
        }
    }

    /// Transform a coordinate between coordinate systems
    pub fn transform_point(&self, coord: &Coordinate, from_crs: &CoordinateSystem, to_crs: &CoordinateSystem) -> GeoJsonResult<Coordinate> {
        let mut out = *coord;
        if let Some(filter) = self.filter_for(from_crs, to_crs)? {
            filter.filter(&mut out);
        }
        Ok(out)
    }

    /// Transform a geometry in place
    pub fn transform_in_place(&self, geometry: &mut Geometry, from_crs: &CoordinateSystem, to_crs: &CoordinateSystem) -> GeoJsonResult<()> {
        if let Some(filter) = self.filter_for(from_crs, to_crs)? {
            debug!("Reprojecting {} from {} to {}",
                   geometry.geometry_type(), from_crs.description(), to_crs.description());
            apply_filter(geometry, |c| filter.filter(c));
        }
        Ok(())
    }

    /// Transformed copy of a geometry; the source is left unchanged
    pub fn transform_geometry(&self, geometry: &Geometry, from_crs: &CoordinateSystem, to_crs: &CoordinateSystem) -> GeoJsonResult<Geometry> {
        let mut copy = geometry.clone();
        self.transform_in_place(&mut copy, from_crs, to_crs)?;
        Ok(copy)
    }

    /// Transform a bounding box between coordinate systems
    ///
    /// Both projections are monotonic per axis, so mapping the two corners
    /// is enough.
    pub fn transform_bbox(&self, bbox: &BoundingBox, from_crs: &CoordinateSystem, to_crs: &CoordinateSystem) -> GeoJsonResult<BoundingBox> {
        let min = self.transform_point(&bbox.south_west(), from_crs, to_crs)?;
        let max = self.transform_point(&bbox.north_east(), from_crs, to_crs)?;

        Ok(BoundingBox {
            min_x: min.x,
            min_y: min.y,
            max_x: max.x,
            max_y: max.y,
            z_range: bbox.z_range,
        })
    }
}

/// Apply a filter to every coordinate of `geometry`, in place
pub fn apply_in_place<F: CoordinateFilter + ?Sized>(geometry: &mut Geometry, filter: &F) {
    apply_filter(geometry, |c| filter.filter(c));
}

/// Copy of `geometry` with `filter` applied to every coordinate
pub fn filtered<F: CoordinateFilter + ?Sized>(geometry: &Geometry, filter: &F) -> Geometry {
    let mut copy = geometry.clone();
    apply_in_place(&mut copy, filter);
    copy
}
