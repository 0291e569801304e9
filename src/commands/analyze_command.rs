//! GeoJSON structure analysis command
//!
//! This module implements the command for summarising a GeoJSON
//! geometry or feature document.

use clap::ArgMatches;
use log::{debug, info};

use crate::api::GeoKit;
use crate::codec::errors::GeoJsonResult;
use crate::commands::command_traits::Command;
use crate::commands::input::{input_path, GeoInput};
use crate::geometry::walk::for_each_coord;
use crate::geometry::Geometry;

/// Command for analyzing GeoJSON structure
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Treat the input as a Feature/FeatureCollection
    features: bool,
    /// Whether to enable verbose output
    verbose: bool,
    /// Configured codec facade
    kit: &'a GeoKit,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Configured codec facade
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a GeoKit) -> GeoJsonResult<Self> {
        Ok(AnalyzeCommand {
            input_file: input_path(args)?,
            features: args.get_flag("features"),
            verbose: args.get_flag("verbose"),
            kit,
        })
    }

    /// Build the summary lines for one geometry
    fn describe_geometry(&self, geometry: &Geometry, indent: usize) -> Vec<String> {
        let pad = " ".repeat(indent);
        let mut lines = Vec::new();

        let mut has_z = false;
        for_each_coord(geometry, |coord| has_z |= coord.has_z());

        lines.push(format!("{}Type: {}", pad, geometry.geometry_type()));
        lines.push(format!("{}Members: {}", pad, geometry.member_count()));
        lines.push(format!("{}Coordinates: {}", pad, geometry.coord_count()));
        lines.push(format!("{}Dimensions: {}", pad, if has_z { 3 } else { 2 }));
        match self.kit.bounding_box(geometry) {
            Some(bbox) => lines.push(format!("{}BBox: {:?}", pad, bbox.to_vec())),
            None => lines.push(format!("{}BBox: (empty)", pad)),
        }

        if self.verbose {
            if let Geometry::GeometryCollection(collection) = geometry {
                for (index, member) in collection.geometries.iter().enumerate() {
                    lines.push(format!("{}Member {}:", pad, index));
                    lines.extend(self.describe_geometry(member, indent + 2));
                }
            }
        }
        lines
    }

    /// Build the summary lines for an input document
    pub fn describe(&self, input: &GeoInput) -> Vec<String> {
        match input {
            GeoInput::Geometry(geometry) => self.describe_geometry(geometry, 0),
            GeoInput::Features(collection) => {
                let mut lines = vec![format!("Features: {}", collection.features.len())];
                match collection.bounding_box() {
                    Some(bbox) => lines.push(format!("BBox: {:?}", bbox.to_vec())),
                    None => lines.push("BBox: (empty)".to_string()),
                }
                for (index, feature) in collection.features.iter().enumerate() {
                    let id = feature.id.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
                    lines.push(format!("Feature {} (id {}):", index, id));
                    match &feature.geometry {
                        Some(geometry) => lines.extend(self.describe_geometry(geometry, 2)),
                        None => lines.push("  Geometry: null".to_string()),
                    }
                    if self.verbose {
                        lines.push(format!("  Properties: {}", feature.properties.len()));
                    }
                }
                lines
            },
        }
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> GeoJsonResult<()> {
        info!("Analyzing file: {}", self.input_file);

        let input = GeoInput::load(&self.input_file, self.features, self.kit)?;
        for line in self.describe(&input) {
            println!("{}", line);
        }

        debug!("Analysis completed successfully");
        Ok(())
    }
}
