//! Input loading and output writing shared by the commands

use std::fs::{self, File};
use std::io::{self, Write};

use log::debug;

use crate::api::GeoKit;
use crate::codec::errors::{GeoJsonError, GeoJsonResult};
use crate::codec::FeatureCollection;
use crate::coordinate::{bounding_box_of, BoundingBox};
use crate::geometry::Geometry;

/// A decoded input document
#[derive(Debug, Clone)]
pub enum GeoInput {
    /// A bare geometry object
    Geometry(Geometry),
    /// A Feature or FeatureCollection
    Features(FeatureCollection),
}

impl GeoInput {
    /// Read an input file
    ///
    /// Bare geometries are streamed from the file; feature documents are
    /// read whole and decoded from the parsed tree.
    ///
    /// # Arguments
    /// * `path` - File to read
    /// * `features` - Treat the document as a Feature/FeatureCollection
    /// * `kit` - Facade used for decoding
    pub fn load(path: &str, features: bool, kit: &GeoKit) -> GeoJsonResult<Self> {
        if features {
            let text = fs::read_to_string(path)?;
            let collection = kit.decode_features_str(&text)?;
            debug!("Decoded {} features from {}", collection.features.len(), path);
            Ok(GeoInput::Features(collection))
        } else {
            let file = File::open(path)?;
            let geometry = kit.decode_reader(file)?;
            debug!("Decoded {} from {}", geometry.geometry_type(), path);
            Ok(GeoInput::Geometry(geometry))
        }
    }

    /// All geometries held by this input
    pub fn geometries(&self) -> Vec<&Geometry> {
        match self {
            GeoInput::Geometry(geometry) => vec![geometry],
            GeoInput::Features(collection) => collection
                .features
                .iter()
                .filter_map(|feature| feature.geometry.as_ref())
                .collect(),
        }
    }

    /// Mutable access to all geometries held by this input
    pub fn geometries_mut(&mut self) -> Vec<&mut Geometry> {
        match self {
            GeoInput::Geometry(geometry) => vec![geometry],
            GeoInput::Features(collection) => collection
                .features
                .iter_mut()
                .filter_map(|feature| feature.geometry.as_mut())
                .collect(),
        }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        bounding_box_of(self.geometries())
    }

    /// Encode with the facade's encoder
    pub fn encode(&self, kit: &GeoKit) -> GeoJsonResult<String> {
        match self {
            GeoInput::Geometry(geometry) => kit.encode_to_string(geometry),
            GeoInput::Features(collection) => kit.encode_features_to_string(collection),
        }
    }
}

/// Write text to a file, or to stdout when no path is given
pub fn write_output(output: Option<&str>, content: &str) -> GeoJsonResult<()> {
    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            writeln!(file, "{}", content)?;
        },
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        },
    }
    Ok(())
}

/// Fetch the required positional input argument
pub fn input_path(args: &clap::ArgMatches) -> GeoJsonResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| GeoJsonError::GenericError("Missing input file".to_string()))
}
