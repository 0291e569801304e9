//! GeoJSON conversion command
//!
//! This module implements the command for re-encoding a GeoJSON
//! document, optionally reprojecting it between WGS84 and Web Mercator.

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::info;

use crate::api::GeoKit;
use crate::codec::errors::{GeoJsonError, GeoJsonResult};
use crate::commands::command_traits::Command;
use crate::commands::input::{input_path, write_output, GeoInput};
use crate::config::CodecConfig;

/// Command for re-encoding and reprojecting GeoJSON
pub struct ConvertCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file, stdout when absent
    output_file: Option<String>,
    /// Source CRS
    from_crs: String,
    /// Target CRS, no reprojection when absent
    to_crs: Option<String>,
    /// Exchange x and y after reprojecting
    swap_axes: bool,
    /// Treat the input as a Feature/FeatureCollection
    features: bool,
    /// Facade used for encoding, carrying the bbox override
    kit: GeoKit,
    /// Facade used for decoding
    base: &'a GeoKit,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Configured codec facade
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a GeoKit) -> GeoJsonResult<Self> {
        let from_crs = args.get_one::<String>("from")
            .cloned()
            .unwrap_or_else(|| "EPSG:4326".to_string());
        let to_crs = args.get_one::<String>("to").cloned();
        let swap_axes = args.get_flag("swap-axes");

        if to_crs.is_none() && !swap_axes && args.value_source("from") == Some(ValueSource::CommandLine) {
            return Err(GeoJsonError::GenericError("--from requires --to".to_string()));
        }

        let with_bbox = args.get_flag("bbox") || kit.config().with_bbox;
        let config: CodecConfig = kit.config().clone().with_bbox(with_bbox);


        Ok(ConvertCommand {
            input_file: input_path(args)?,
            output_file: args.get_one::<String>("output").cloned(),
            from_crs,
            to_crs,
            swap_axes,
            features: args.get_flag("features"),
            kit: GeoKit::new(config),
            base: kit,
        })
    }

    /// Apply the requested reprojection and axis swap
    pub fn transform(&self, input: &mut GeoInput) -> GeoJsonResult<()> {
        let to_crs = match &self.to_crs {
            Some(to) => to.as_str(),
            None if self.swap_axes => self.from_crs.as_str(),
            None => return Ok(()),
        };
        for geometry in input.geometries_mut() {
            self.base.reproject(geometry, &self.from_crs, to_crs, self.swap_axes)?;
        }
        Ok(())
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> GeoJsonResult<()> {
        info!("Converting file {}", self.input_file);

        let mut input = GeoInput::load(&self.input_file, self.features, self.base)?;
        self.transform(&mut input)?;
        let json = input.encode(&self.kit)?;
        write_output(self.output_file.as_deref(), &json)?;

        if let Some(output) = &self.output_file {
            info!("Wrote {}", output);
        }
        Ok(())
    }
}
