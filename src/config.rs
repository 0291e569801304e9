//! Codec configuration
//!
//! Defaults live in `default_config.toml`, embedded at build time. A user
//! TOML file only needs to name the keys it changes.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use serde::Deserialize;

use crate::codec::errors::{GeoJsonError, GeoJsonResult};

lazy_static! {
    static ref DEFAULT_TABLE: toml::Table = {
        toml::from_str(include_str!("../default_config.toml")).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse default codec configuration: {}", e);
            toml::Table::new()
        })
    };
    static ref DEFAULT_CONFIG: CodecConfig = toml::Value::Table(DEFAULT_TABLE.clone())
        .try_into()
        .unwrap_or_else(|e| {
            eprintln!("Warning: Invalid default codec configuration: {}", e);
            CodecConfig::builtin()
        });
}

/// Settings shared by the formatter, encoder and CRS filters
///
/// Keys missing from a TOML document take their value from the embedded
/// defaults; keys missing from those fall back to [`CodecConfig::builtin`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default = "CodecConfig::builtin", deny_unknown_fields)]
pub struct CodecConfig {
    /// Emit exact decimals instead of 64-bit floats
    pub arbitrary_precision: bool,
    /// Maximum digits before the decimal point
    pub max_integer_digits: u32,
    /// Maximum digits after the decimal point
    pub max_fraction_digits: u32,
    /// Sphere radius for the Mercator filters
    pub earth_radius_meters: f64,
    /// Whether encoded geometries carry a `bbox` member
    pub with_bbox: bool,
}

impl CodecConfig {
    /// Hard-coded fallback used if the embedded defaults cannot be parsed
    fn builtin() -> Self {
        CodecConfig {
            arbitrary_precision: false,
            max_integer_digits: 17,
            max_fraction_digits: 9,
            earth_radius_meters: 6378137.0,
            with_bbox: false,
        }
    }

    /// Parse a configuration from TOML, filling missing keys from the defaults
    pub fn from_str(content: &str) -> GeoJsonResult<Self> {
        let overrides: toml::Table = toml::from_str(content)?;
        let mut merged = DEFAULT_TABLE.clone();
        merged.extend(overrides);
        let config: CodecConfig = toml::Value::Table(merged).try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> GeoJsonResult<Self> {
        let path = path.as_ref();
        debug!("Loading codec configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            GeoJsonError::ConfigError(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_str(&content)
    }

    fn validate(&self) -> GeoJsonResult<()> {
        if self.max_integer_digits == 0 {
            return Err(GeoJsonError::ConfigError("max_integer_digits must be at least 1".to_string()));
        }
        // rust_decimal carries at most 28 fractional digits
        if self.max_fraction_digits > 28 {
            return Err(GeoJsonError::ConfigError(format!(
                "max_fraction_digits must not exceed 28, got {}", self.max_fraction_digits
            )));
        }
        if !(self.earth_radius_meters.is_finite() && self.earth_radius_meters > 0.0) {
            return Err(GeoJsonError::ConfigError(format!(
                "earth_radius_meters must be a positive number, got {}", self.earth_radius_meters
            )));
        }
        Ok(())
    }

    pub fn with_arbitrary_precision(mut self, enabled: bool) -> Self {
        self.arbitrary_precision = enabled;
        self
    }

    pub fn with_bbox(mut self, enabled: bool) -> Self {
        self.with_bbox = enabled;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}
