use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use geokit::api::GeoKit;
use geokit::utils::logger::Logger;
use geokit::commands::{CommandFactory, GeokitCommandFactory};

fn main() {
    let matches = ClapCommand::new("GeoKit")
        .version("0.1")
        .about("Encode, decode and reproject GeoJSON geometries")
        .arg(
            Arg::new("input")
                .help("Input GeoJSON file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("convert")
                .short('c')
                .long("convert")
                .help("Re-encode the input, optionally reprojecting it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("bbox-only")
                .long("bbox-only")
                .help("Print the bounding box of the input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("as-polygon")
                .long("as-polygon")
                .help("With --bbox-only, print the box as a GeoJSON Polygon")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("features")
                .short('f')
                .long("features")
                .help("Treat the input as a Feature or FeatureCollection")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Source CRS (e.g., EPSG:4326 or urn:ogc:def:crs:EPSG::3857)")
                .value_name("CRS")
                .default_value("EPSG:4326")
                .required(false),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target CRS for reprojection")
                .value_name("CRS")
                .required(false),
        )
        .arg(
            Arg::new("swap-axes")
                .long("swap-axes")
                .help("Exchange x and y of every coordinate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("bbox")
                .long("bbox")
                .help("Write a bbox member on the top-level object")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file, stdout when omitted")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML codec configuration")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Warn };

    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
        },
    }

    let kit = match GeoKit::from_config_file(matches.get_one::<String>("config").map(String::as_str)) {
        Ok(kit) => kit,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let factory = GeokitCommandFactory::new();

    let command_result = factory.create_command(&matches, &kit);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
