//! Bounding box command
//!
//! Prints the bounding box of a GeoJSON document, either as a bbox
//! array or as a rectangle Polygon.

use clap::ArgMatches;
use log::{info, warn};
use serde_json::Value;

use crate::api::GeoKit;
use crate::codec::errors::GeoJsonResult;
use crate::commands::command_traits::Command;
use crate::commands::input::{input_path, write_output, GeoInput};
use crate::geometry::Geometry;

/// Command for computing a bounding box
pub struct BboxCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file, stdout when absent
    output_file: Option<String>,
    /// Print the box as a GeoJSON Polygon
    as_polygon: bool,
    /// Treat the input as a Feature/FeatureCollection
    features: bool,
    /// Configured codec facade
    kit: &'a GeoKit,
}

impl<'a> BboxCommand<'a> {
    /// Create a new bbox command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Configured codec facade
    pub fn new(args: &ArgMatches, kit: &'a GeoKit) -> GeoJsonResult<Self> {
        Ok(BboxCommand {
            input_file: input_path(args)?,
            output_file: args.get_one::<String>("output").cloned(),
            as_polygon: args.get_flag("as-polygon"),
            features: args.get_flag("features"),
            kit,
        })
    }

    /// Render the bounding box of an input; `null` when it has no coordinates
    pub fn render(&self, input: &GeoInput) -> GeoJsonResult<String> {
        let bbox = match input.bounding_box() {
            Some(bbox) => bbox,
            None => {
                warn!("Input has no coordinates, bounding box is undefined");
                return Ok(Value::Null.to_string());
            },
        };

        if self.as_polygon {
            let polygon = Geometry::Polygon(bbox.as_polygon());
            self.kit.encoder().encode_to_string(&polygon, false)
        } else {
            let json = self.kit.encoder().bbox_to_json(&bbox).unwrap_or(Value::Null);
            Ok(json.to_string())
        }
    }
}

impl<'a> Command for BboxCommand<'a> {
    fn execute(&self) -> GeoJsonResult<()> {
        info!("Computing bounding box of {}", self.input_file);

        let input = GeoInput::load(&self.input_file, self.features, self.kit)?;
        let rendered = self.render(&input)?;
        write_output(self.output_file.as_deref(), &rendered)
    }
}
