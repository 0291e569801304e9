//! Coordinate Reference System handling

use lazy_static::lazy_static;
use regex::Regex;

use crate::codec::errors::{GeoJsonError, GeoJsonResult};

lazy_static! {
    // EPSG:3857, urn:ogc:def:crs:EPSG::3857, urn:ogc:def:crs:EPSG:6.6:3857
    static ref EPSG_PATTERN: Regex =
        Regex::new(r"^(?:URN:OGC:DEF:CRS:)?EPSG:(?:[0-9.]*:)?(\d+)$").expect("valid EPSG pattern");
    // urn:ogc:def:crs:OGC:1.3:CRS84, OGC:CRS84, CRS84
    static ref CRS84_PATTERN: Regex =
        Regex::new(r"^(?:URN:OGC:DEF:CRS:)?(?:OGC:(?:[0-9.]*:)?)?CRS84$").expect("valid CRS84 pattern");
}

/// Identifier for the supported coordinate systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// WGS 84 (EPSG:4326)
    WGS84,
    /// Web Mercator (EPSG:3857)
    WebMercator,
    /// Other EPSG code
    Other(u32),
}

impl CoordinateSystem {
    /// Get the EPSG code for this coordinate system
    pub fn epsg_code(&self) -> u32 {
        match self {
            CoordinateSystem::WGS84 => 4326,
            CoordinateSystem::WebMercator => 3857,
            CoordinateSystem::Other(code) => *code,
        }
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> String {
        match self {
            CoordinateSystem::WGS84 => "WGS 84 (EPSG:4326)".to_string(),
            CoordinateSystem::WebMercator => "Web Mercator (EPSG:3857)".to_string(),
            CoordinateSystem::Other(code) => format!("EPSG:{}", code),
        }
    }
}

/// Factory for creating coordinate systems
pub struct CoordinateSystemFactory;

impl CoordinateSystemFactory {
    /// Create a coordinate system from an EPSG code
    pub fn from_epsg(epsg: u32) -> CoordinateSystem {
        match epsg {
            4326 => CoordinateSystem::WGS84,
            // 3785 and 900913 are retired aliases of the same projection
            3857 | 3785 | 900913 => CoordinateSystem::WebMercator,
            _ => CoordinateSystem::Other(epsg),
        }
    }

    /// Parse a coordinate system from a string
    ///
    /// Accepts `EPSG:4326`, a bare code such as `3857`, and the OGC URN forms
    /// `urn:ogc:def:crs:EPSG::3857` and `urn:ogc:def:crs:OGC:1.3:CRS84`.
    pub fn from_string(crs_str: &str) -> GeoJsonResult<CoordinateSystem> {
        let crs_str = crs_str.trim().to_uppercase();

        if let Ok(epsg) = crs_str.parse::<u32>() {
            return Ok(Self::from_epsg(epsg));
        }
        if CRS84_PATTERN.is_match(&crs_str) {
            return Ok(CoordinateSystem::WGS84);
        }
        if let Some(captures) = EPSG_PATTERN.captures(&crs_str) {
            let code = &captures[1];
            return code
                .parse::<u32>()
                .map(Self::from_epsg)
                .map_err(|_| GeoJsonError::GenericError(format!("Invalid EPSG code: {}", code)));
        }
        Err(GeoJsonError::GenericError(format!("Unsupported CRS format: {}", crs_str)))
    }
}
