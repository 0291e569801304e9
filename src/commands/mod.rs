//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod input;
pub mod analyze_command;
pub mod bbox_command;
pub mod convert_command;

pub use command_traits::{Command, CommandFactory};
pub use input::GeoInput;
pub use analyze_command::AnalyzeCommand;
pub use bbox_command::BboxCommand;
pub use convert_command::ConvertCommand;

use clap::ArgMatches;
use crate::api::GeoKit;
use crate::codec::errors::GeoJsonResult;

/// Factory for creating command instances based on CLI arguments
pub struct GeokitCommandFactory;

impl GeokitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeokitCommandFactory
    }
}

impl Default for GeokitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeokitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a GeoKit) -> GeoJsonResult<Box<dyn Command + 'a>> {
        if args.get_flag("convert") {
            Ok(Box::new(ConvertCommand::new(args, kit)?))
        } else if args.get_flag("bbox-only") {
            Ok(Box::new(BboxCommand::new(args, kit)?))
        } else {
            // Default to analyze command
            Ok(Box::new(AnalyzeCommand::new(args, kit)?))
        }
    }
}
