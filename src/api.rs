use std::io::Read;
use log::info;
use serde_json::Value;
use crate::codec::errors::GeoJsonResult;
use crate::codec::{FeatureCollection, GeometryDecoder, GeometryEncoder};
use crate::config::CodecConfig;
use crate::coordinate::{bounding_box, BoundingBox, CoordinateSystemFactory, CoordinateTransformer, SwapAxes};
use crate::coordinate::transform::apply_in_place;
use crate::geometry::Geometry;

/// Main interface to the GeoKit library
#[derive(Debug, Clone)]
pub struct GeoKit {
    config: CodecConfig,
    encoder: GeometryEncoder,
    decoder: GeometryDecoder,
    transformer: CoordinateTransformer,
}

impl GeoKit {
    /// Create a GeoKit instance from a configuration
    pub fn new(config: CodecConfig) -> Self {
        GeoKit {
            encoder: GeometryEncoder::from_config(&config),
            decoder: GeometryDecoder::new(),
            transformer: CoordinateTransformer::from_config(&config),
            config,
        }
    }

    /// Create a GeoKit instance from a TOML configuration file
    ///
    /// # Arguments
    /// * `config_path` - Optional path to a config file; the embedded defaults apply otherwise
    pub fn from_config_file(config_path: Option<&str>) -> GeoJsonResult<Self> {
        let config = match config_path {
            Some(path) => CodecConfig::load(path)?,
            None => CodecConfig::default(),
        };
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encoder(&self) -> &GeometryEncoder {
        &self.encoder
    }

    pub fn decoder(&self) -> &GeometryDecoder {
        &self.decoder
    }

    /// Decode a geometry from a JSON string
    pub fn decode_str(&self, json: &str) -> GeoJsonResult<Geometry> {
        self.decoder.decode_str(json)
    }

    /// Decode a geometry by streaming from a reader
    pub fn decode_reader<R: Read>(&self, reader: R) -> GeoJsonResult<Geometry> {
        self.decoder.decode_reader(reader)
    }

    /// Decode a Feature or FeatureCollection from a JSON string
    pub fn decode_features_str(&self, json: &str) -> GeoJsonResult<FeatureCollection> {
        let value: Value = serde_json::from_str(json)?;
        self.decoder.decode_features(&value)
    }

    /// Encode a geometry, adding `bbox` if the configuration asks for it
    pub fn encode_to_string(&self, geometry: &Geometry) -> GeoJsonResult<String> {
        self.encoder.encode_to_string(geometry, self.config.with_bbox)
    }

    /// Encode a feature collection, adding `bbox` if the configuration asks for it
    pub fn encode_features_to_string(&self, collection: &FeatureCollection) -> GeoJsonResult<String> {
        let map = self.encoder.encode_feature_collection(collection, self.config.with_bbox);
        Ok(serde_json::to_string(&map)?)
    }

    pub fn bounding_box(&self, geometry: &Geometry) -> Option<BoundingBox> {
        bounding_box(geometry)
    }

    /// Reproject a geometry in place
    ///
    /// # Arguments
    /// * `geometry` - Geometry to rewrite
    /// * `from` - Source CRS, e.g. "EPSG:4326"
    /// * `to` - Target CRS, e.g. "EPSG:3857"
    /// * `swap_axes` - Exchange x and y after reprojecting
    pub fn reproject(&self, geometry: &mut Geometry, from: &str, to: &str, swap_axes: bool) -> GeoJsonResult<()> {
        let from_crs = CoordinateSystemFactory::from_string(from)?;
        let to_crs = CoordinateSystemFactory::from_string(to)?;
        info!("Reprojecting from {} to {}", from_crs.description(), to_crs.description());

        self.transformer.transform_in_place(geometry, &from_crs, &to_crs)?;
        if swap_axes {
            apply_in_place(geometry, &SwapAxes);
        }
        Ok(())
    }
}

impl Default for GeoKit {
    fn default() -> Self {
        GeoKit::new(CodecConfig::default())
    }
}
