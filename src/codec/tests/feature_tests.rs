//! Tests for Feature and FeatureCollection handling

extern crate std;

use serde_json::{json, Value};

use crate::codec::decoder::GeometryDecoder;
use crate::codec::encoder::GeometryEncoder;
use crate::codec::feature::{Feature, FeatureCollection};
use crate::geometry::{Geometry, LineString, Point};

fn sample_collection() -> FeatureCollection {
    FeatureCollection::new(vec![
        Feature::new(Geometry::Point(Point::new(1.0, 2.0)))
            .with_id("a")
            .with_property("name", "first"),
        Feature::new(Geometry::LineString(LineString::from(vec![(-3.0, 4.0), (5.0, -6.0)])))
            .with_id(7)
            .with_property("length", 2),
        Feature::default(),
    ])
}

#[test]
fn test_encode_feature_member_order() {
    let encoder = GeometryEncoder::default();
    let feature = Feature::new(Geometry::Point(Point::new(1.0, 2.0))).with_id(1);
    let map = encoder.encode_feature(&feature, true);
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    std::assert_eq!(keys, vec!["type", "id", "bbox", "geometry", "properties"]);
    std::assert!(map["geometry"].get("bbox").is_none());
}

#[test]
fn test_feature_without_geometry_encodes_null() {
    let encoder = GeometryEncoder::default();
    let map = encoder.encode_feature(&Feature::default(), true);
    std::assert_eq!(map["geometry"], Value::Null);
    std::assert!(map.get("bbox").is_none());
}

#[test]
fn test_collection_bbox_spans_all_features() {
    let collection = sample_collection();
    let bbox = collection.bounding_box().unwrap();
    std::assert_eq!(bbox.to_vec(), vec![-3.0, -6.0, 5.0, 4.0]);

    let encoder = GeometryEncoder::default();
    let map = encoder.encode_feature_collection(&collection, true);
    std::assert!(map.contains_key("bbox"));
    for feature in map["features"].as_array().unwrap() {
        std::assert!(feature.get("bbox").is_none());
    }
}

#[test]
fn test_feature_collection_round_trip() {
    let encoder = GeometryEncoder::default();
    let decoder = GeometryDecoder::new();
    let collection = sample_collection();

    let value = Value::Object(encoder.encode_feature_collection(&collection, true));
    let decoded = decoder.decode_feature_collection(&value).unwrap();

    std::assert_eq!(decoded.features.len(), 3);
    std::assert_eq!(decoded.features[0].geometry, collection.features[0].geometry);
    std::assert_eq!(decoded.features[1].geometry, collection.features[1].geometry);
    std::assert_eq!(decoded.features[0].id, Some(Value::from("a")));
    std::assert_eq!(decoded.features[0].properties["name"], Value::from("first"));
    std::assert!(decoded.features[2].geometry.is_none());
}

#[test]
fn test_single_feature_decodes_as_collection() {
    let decoder = GeometryDecoder::new();
    let value = json!({
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [3, 4]},
        "properties": null
    });
    let collection = decoder.decode_features(&value).unwrap();
    std::assert_eq!(collection.features.len(), 1);
    std::assert!(collection.features[0].properties.is_empty());
    std::assert_eq!(collection.features[0].geometry, Some(Geometry::Point(Point::new(3.0, 4.0))));
}

#[test]
fn test_feature_decoding_errors() {
    let decoder = GeometryDecoder::new();
    std::assert!(decoder.decode_feature(&json!({"type": "Point", "coordinates": [0, 0]})).is_err());
    std::assert!(decoder.decode_feature(&json!({"type": "Feature", "geometry": null, "properties": 3})).is_err());
    std::assert!(decoder.decode_feature_collection(&json!({"type": "FeatureCollection"})).is_err());
    std::assert!(decoder.decode_features(&json!([1, 2])).is_err());
}
