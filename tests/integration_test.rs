//! Integration tests for the GeoKit library

extern crate std;

use approx::assert_abs_diff_eq;
use clap::{Arg, ArgAction, Command as ClapCommand};

use geokit::commands::{BboxCommand, Command, GeoInput};
use geokit::coordinate::{CoordinateSystem, CoordinateTransformer};
use geokit::geometry::walk::for_each_coord;
use geokit::{CodecConfig, GeoKit, Geometry, GeometryType};

const POLYGON_JSON: &str = r#"{"type":"Polygon","coordinates":[[[8.456,3.567],[9.0,3.567],[9.0,4.0],[8.456,3.567]]]}"#;

fn temp_file(name: &str, content: &str) -> String {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_complete_geojson_workflow() {
    let kit = GeoKit::default();

    let geometry = kit.decode_str(POLYGON_JSON).unwrap();
    std::assert_eq!(geometry.geometry_type(), GeometryType::Polygon);
    std::assert_eq!(geometry.coord_count(), 4);

    let bbox = kit.bounding_box(&geometry).unwrap();
    std::assert_eq!(bbox.to_vec(), vec![8.456, 3.567, 9.0, 4.0]);

    let encoded = kit.encode_to_string(&geometry).unwrap();
    std::assert_eq!(encoded, POLYGON_JSON);

    let streamed = kit.decode_reader(encoded.as_bytes()).unwrap();
    std::assert_eq!(streamed, geometry);
}

#[test]
fn test_bbox_from_configuration() {
    let config = CodecConfig::from_str("with_bbox = true").unwrap();
    let kit = GeoKit::new(config);
    let geometry = kit.decode_str(r#"{"type":"MultiPoint","coordinates":[[1,2],[10,20]]}"#).unwrap();

    let encoded = kit.encode_to_string(&geometry).unwrap();
    std::assert_eq!(
        encoded,
        r#"{"type":"MultiPoint","bbox":[1.0,2.0,10.0,20.0],"coordinates":[[1.0,2.0],[10.0,20.0]]}"#
    );
}

#[test]
fn test_reprojection_round_trip() {
    let kit = GeoKit::default();
    let original = kit.decode_str(POLYGON_JSON).unwrap();

    let mut geometry = original.clone();
    kit.reproject(&mut geometry, "EPSG:4326", "EPSG:3857", false).unwrap();
    let mut first = None;
    for_each_coord(&geometry, |c| {
        if first.is_none() {
            first = Some(*c);
        }
    });
    let first = first.unwrap();
    assert_abs_diff_eq!(first.x, 941_317.614, epsilon = 1e-2);
    assert_abs_diff_eq!(first.y, 397_333.370, epsilon = 1e-2);

    kit.reproject(&mut geometry, "urn:ogc:def:crs:EPSG::3857", "CRS84", false).unwrap();
    let mut restored = Vec::new();
    for_each_coord(&geometry, |c| restored.push(*c));
    let mut expected = Vec::new();
    for_each_coord(&original, |c| expected.push(*c));
    for (r, e) in restored.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(r.x, e.x, epsilon = 1e-9);
        assert_abs_diff_eq!(r.y, e.y, epsilon = 1e-9);
    }
}

#[test]
fn test_unsupported_reprojection() {
    let kit = GeoKit::default();
    let mut geometry = kit.decode_str(POLYGON_JSON).unwrap();
    std::assert!(kit.reproject(&mut geometry, "EPSG:4326", "EPSG:32632", false).is_err());
    std::assert!(kit.reproject(&mut geometry, "EPSG:4326", "not a crs", false).is_err());

    let transformer = CoordinateTransformer::default();
    std::assert!(transformer
        .filter_for(&CoordinateSystem::WGS84, &CoordinateSystem::WGS84)
        .unwrap()
        .is_none());
}

#[test]
fn test_swap_axes() {
    let kit = GeoKit::default();
    let mut geometry = kit.decode_str(r#"{"type":"Point","coordinates":[1,2,3]}"#).unwrap();
    kit.reproject(&mut geometry, "EPSG:4326", "EPSG:4326", true).unwrap();
    std::assert_eq!(kit.encode_to_string(&geometry).unwrap(), r#"{"type":"Point","coordinates":[2.0,1.0,3.0]}"#);
}

#[test]
fn test_feature_input_file() {
    let kit = GeoKit::default();
    let path = temp_file(
        "geokit_features_test.json",
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","id":1,"geometry":{"type":"Point","coordinates":[1,2]},"properties":{}},
            {"type":"Feature","geometry":null,"properties":{"name":"nothing"}},
            {"type":"Feature","geometry":{"type":"LineString","coordinates":[[5,6],[-1,0]]},"properties":{}}
        ]}"#,
    );

    let input = GeoInput::load(&path, true, &kit).unwrap();
    std::assert_eq!(input.geometries().len(), 2);
    std::assert_eq!(input.bounding_box().unwrap().to_vec(), vec![-1.0, 0.0, 5.0, 6.0]);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_bbox_command_renders_polygon() {
    let kit = GeoKit::default();
    let path = temp_file("geokit_bbox_test.json", r#"{"type":"LineString","coordinates":[[1,2],[10,20]]}"#);

    let matches = ClapCommand::new("geokit")
        .arg(Arg::new("input").index(1))
        .arg(Arg::new("output").long("output"))
        .arg(Arg::new("as-polygon").long("as-polygon").action(ArgAction::SetTrue))
        .arg(Arg::new("features").long("features").action(ArgAction::SetTrue))
        .get_matches_from(vec!["geokit", path.as_str(), "--as-polygon"]);

    let command = BboxCommand::new(&matches, &kit).unwrap();
    let input = GeoInput::load(&path, false, &kit).unwrap();
    let rendered = command.render(&input).unwrap();
    std::assert_eq!(
        rendered,
        r#"{"type":"Polygon","coordinates":[[[1.0,2.0],[10.0,2.0],[10.0,20.0],[1.0,20.0],[1.0,2.0]]]}"#
    );

    let output = std::env::temp_dir().join("geokit_bbox_out.json");
    let output_str = output.to_str().unwrap().to_string();
    let matches = ClapCommand::new("geokit")
        .arg(Arg::new("input").index(1))
        .arg(Arg::new("output").long("output"))
        .arg(Arg::new("as-polygon").long("as-polygon").action(ArgAction::SetTrue))
        .arg(Arg::new("features").long("features").action(ArgAction::SetTrue))
        .get_matches_from(vec!["geokit", path.as_str(), "--output", output_str.as_str()]);
    BboxCommand::new(&matches, &kit).unwrap().execute().unwrap();
    std::assert_eq!(std::fs::read_to_string(&output).unwrap(), "[1.0,2.0,10.0,20.0]\n");

    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(&output);
}

#[test]
fn test_empty_geometry_has_no_bbox() {
    let kit = GeoKit::default();
    let geometry = kit.decode_str(r#"{"type":"GeometryCollection","geometries":[]}"#).unwrap();
    std::assert!(kit.bounding_box(&geometry).is_none());
    std::assert!(matches!(geometry, Geometry::GeometryCollection(_)));
}
