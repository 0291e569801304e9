//! Feature and FeatureCollection wrappers
//!
//! A feature embeds an encoded geometry under `geometry`, next to `id` and
//! `properties`. Its `bbox` is computed independently of the geometry
//! encoding; a collection's box spans all member geometries.

use log::debug;
use serde_json::{Map, Value};

use super::decoder::GeometryDecoder;
use super::encoder::GeometryEncoder;
use super::errors::{GeoJsonError, GeoJsonResult};
use crate::coordinate::bbox::{bounding_box_of, BoundingBox};
use crate::geometry::Geometry;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    pub id: Option<Value>,
    pub geometry: Option<Geometry>,
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Feature {
            id: None,
            geometry: Some(geometry),
            properties: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        bounding_box_of(self.geometry.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection { features }
    }

    /// Box over every member geometry, without building a GeometryCollection
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        bounding_box_of(self.features.iter().filter_map(|f| f.geometry.as_ref()))
    }
}

impl GeometryEncoder {
    /// Encode a feature; `bbox` is added when requested and defined
    pub fn encode_feature(&self, feature: &Feature, with_bbox: bool) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String("Feature".to_string()));
        if let Some(id) = &feature.id {
            map.insert("id".to_string(), id.clone());
        }
        if with_bbox {
            if let Some(bbox) = feature.bounding_box().and_then(|b| self.bbox_to_json(&b)) {
                map.insert("bbox".to_string(), bbox);
            }
        }
        let geometry = feature
            .geometry
            .as_ref()
            .map_or(Value::Null, |g| self.encode_value(g, false));
        map.insert("geometry".to_string(), geometry);
        map.insert("properties".to_string(), Value::Object(feature.properties.clone()));
        map
    }

    /// Encode a feature collection; member features never carry their own `bbox`
    pub fn encode_feature_collection(&self, collection: &FeatureCollection, with_bbox: bool) -> Map<String, Value> {
        debug!("Encoding FeatureCollection with {} features", collection.features.len());
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String("FeatureCollection".to_string()));
        if with_bbox {
            if let Some(bbox) = collection.bounding_box().and_then(|b| self.bbox_to_json(&b)) {
                map.insert("bbox".to_string(), bbox);
            }
        }
        let features = collection
            .features
            .iter()
            .map(|f| Value::Object(self.encode_feature(f, false)))
            .collect();
        map.insert("features".to_string(), Value::Array(features));
        map
    }
}

impl GeometryDecoder {
    /// Decode a `Feature` object from a parsed value
    pub fn decode_feature(&self, value: &Value) -> GeoJsonResult<Feature> {
        let map = expect_object(value, "Feature")?;
        expect_type(map, "Feature")?;

        let geometry = match map.get("geometry") {
            None | Some(Value::Null) => None,
            Some(g) => Some(self.decode_value(g)?),
        };
        let properties = match map.get("properties") {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(props)) => props.clone(),
            Some(_) => {
                return Err(GeoJsonError::DecodeError("'properties' must be an object or null".to_string()))
            },
        };

        Ok(Feature {
            id: map.get("id").cloned(),
            geometry,
            properties,
        })
    }

    /// Decode a `FeatureCollection` object from a parsed value
    pub fn decode_feature_collection(&self, value: &Value) -> GeoJsonResult<FeatureCollection> {
        let map = expect_object(value, "FeatureCollection")?;
        expect_type(map, "FeatureCollection")?;

        let features = map
            .get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| GeoJsonError::DecodeError("FeatureCollection has no 'features' array".to_string()))?
            .iter()
            .map(|f| self.decode_feature(f))
            .collect::<GeoJsonResult<Vec<Feature>>>()?;

        Ok(FeatureCollection { features })
    }

    /// Decode a Feature or FeatureCollection, always yielding a collection
    pub fn decode_features(&self, value: &Value) -> GeoJsonResult<FeatureCollection> {
        match value.get("type").and_then(Value::as_str) {
            Some("Feature") => Ok(FeatureCollection::new(vec![self.decode_feature(value)?])),
            _ => self.decode_feature_collection(value),
        }
    }
}

fn expect_object<'a>(value: &'a Value, what: &str) -> GeoJsonResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| GeoJsonError::DecodeError(format!("a {} must be a JSON object", what)))
}

fn expect_type(map: &Map<String, Value>, expected: &str) -> GeoJsonResult<()> {
    match map.get("type").and_then(Value::as_str) {
        Some(t) if t == expected => Ok(()),
        Some(t) => Err(GeoJsonError::DecodeError(format!("expected type \"{}\", found \"{}\"", expected, t))),
        None => Err(GeoJsonError::DecodeError(format!("{} has no 'type'", expected))),
    }
}
