//! Tests for streaming decode and token sources

extern crate std;

use serde_json::json;

use super::test_utils::sample_geometries;
use crate::codec::decoder::GeometryDecoder;
use crate::codec::encoder::GeometryEncoder;
use crate::codec::errors::GeoJsonError;
use crate::codec::stream::decode_geometry_stream;
use crate::codec::token::{Token, TokenSource, ValueTokenSource};
use crate::geometry::{Geometry, Point};

fn assert_syntax_error(json: &str) {
    match decode_geometry_stream(json.as_bytes()) {
        Err(GeoJsonError::DecodeError(_)) => {},
        other => std::panic!("expected {:?} to be rejected, got {:?}", json, other),
    }
}

#[test]
fn test_value_source_token_order() {
    let value = json!({"type": "Point", "coordinates": [1, 2.5], "extra": {"a": [true, null]}});
    let mut source = ValueTokenSource::new(&value);
    let mut tokens = Vec::new();
    while let Some(token) = source.next_token().unwrap() {
        tokens.push(token);
    }
    std::assert_eq!(
        tokens,
        vec![
            Token::ObjectStart,
            Token::Key("type".to_string()),
            Token::String("Point".to_string()),
            Token::Key("coordinates".to_string()),
            Token::ArrayStart,
            Token::Number("1".to_string()),
            Token::Number("2.5".to_string()),
            Token::ArrayEnd,
            Token::Key("extra".to_string()),
            Token::ObjectStart,
            Token::Key("a".to_string()),
            Token::ArrayStart,
            Token::Bool(true),
            Token::Null,
            Token::ArrayEnd,
            Token::ObjectEnd,
            Token::ObjectEnd,
        ]
    );
}

#[test]
fn test_stream_matches_tree_for_every_kind() {
    let encoder = GeometryEncoder::default();
    let decoder = GeometryDecoder::new();
    for geometry in sample_geometries() {
        let json = encoder.encode_to_string(&geometry, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let streamed = decode_geometry_stream(json.as_bytes()).unwrap();
        std::assert_eq!(streamed, decoder.decode_value(&value).unwrap(), "{}", json);
    }
}

#[test]
fn test_rejects_misplaced_commas() {
    assert_syntax_error(r#"{"type":"Point",,"coordinates":[1,2]}"#);
    assert_syntax_error(r#"{"type":"Point","coordinates":[1,2,]}"#);
    assert_syntax_error(r#"{"type":"Point","coordinates":[1,2],}"#);
    assert_syntax_error(r#"{"type":"Point",,"coordinates":[1,2,],}"#);
    assert_syntax_error(r#"{"type":"Point","coordinates":[1,,2]}"#);
}

#[test]
fn test_rejects_missing_separators() {
    assert_syntax_error(r#"{"type" "Point","coordinates":[1,2]}"#);
    assert_syntax_error(r#"{"type":"Point" "coordinates":[1,2]}"#);
    assert_syntax_error(r#"{"type":"Point","coordinates":[1 2]}"#);
}

#[test]
fn test_rejects_invalid_number_text() {
    assert_syntax_error(r#"{"type":"Point","coordinates":[01, 2]}"#);
    assert_syntax_error(r#"{"type":"Point","coordinates":[-, 2]}"#);
    assert_syntax_error(r#"{"type":"Point","coordinates":[1., 2]}"#);
    assert_syntax_error(r#"{"type":"Point","coordinates":[+1, 2]}"#);
}

#[test]
fn test_rejects_trailing_content() {
    assert_syntax_error(r#"{"type":"Point","coordinates":[1,2]} x"#);
    assert_syntax_error(r#"{"type":"Point","coordinates":[1,2]}{}"#);
    let geometry = decode_geometry_stream(&b"  {\"type\":\"Point\",\"coordinates\":[1,2]}\n"[..]).unwrap();
    std::assert_eq!(geometry, Geometry::Point(Point::new(1.0, 2.0)));
}

#[test]
fn test_truncated_input_reports_mid_object() {
    match decode_geometry_stream(&br#"{"type":"LineString","coordinates":[[1,2],"#[..]) {
        Err(GeoJsonError::DecodeError(msg)) => std::assert!(msg.contains("ended mid-object"), "{}", msg),
        other => std::panic!("expected a decode error, got {:?}", other),
    }
}

#[test]
fn test_structure_errors_keep_their_kind() {
    match decode_geometry_stream(&br#"{"type":"Circle","coordinates":[1,2]}"#[..]) {
        Err(GeoJsonError::UnsupportedGeometryType(name)) => std::assert_eq!(name, "Circle"),
        other => std::panic!("expected an unsupported type, got {:?}", other),
    }
    std::assert!(matches!(
        decode_geometry_stream(&br#"{"type":"Point","coordinates":[1,false]}"#[..]),
        Err(GeoJsonError::MalformedNumber(_))
    ));
}

#[test]
fn test_overflowing_ordinate_is_malformed() {
    let json = r#"{"type":"Point","coordinates":[1e400, 1]}"#;
    std::assert!(matches!(
        decode_geometry_stream(json.as_bytes()),
        Err(GeoJsonError::MalformedNumber(_))
    ));
    std::assert!(matches!(
        decode_geometry_stream(&br#"{"type":"Point","coordinates":[1, "-1e999"]}"#[..]),
        Err(GeoJsonError::MalformedNumber(_))
    ));
}

#[test]
fn test_long_number_text_is_read() {
    let json = r#"{"type":"Point","coordinates":[12.345678901234567890123, -0.5e1]}"#;
    let geometry = decode_geometry_stream(json.as_bytes()).unwrap();
    match geometry {
        Geometry::Point(point) => {
            std::assert!((point.coord.x - 12.345678901234567).abs() < 1e-12);
            std::assert_eq!(point.coord.y, -5.0);
        },
        other => std::panic!("expected a point, got {:?}", other),
    }
}

#[test]
fn test_escapes_in_skipped_members() {
    let json = r#"{"name":"café \"quoted\"","type":"Point","meta":{"k":["\n",1e5,{}]},"coordinates":[3,4]}"#;
    let geometry = decode_geometry_stream(json.as_bytes()).unwrap();
    std::assert_eq!(geometry, Geometry::Point(Point::new(3.0, 4.0)));
}
