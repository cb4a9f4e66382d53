/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use zune_apf::Rgba;

use crate::cmd_args::help_strings::{AFTER_HELP, BACKGROUND_HELP, LEVEL_HELP, STENCIL_HELP};

/// Largest width and height accepted when decoding, unless overridden
pub const DEFAULT_MAX_DIMENSION: usize = 1 << 15;
const DEFAULT_MAX_DIMENSION_STR: &str = "32768";

pub mod help_strings;

/// Parse `RRGGBB` or `RRGGBBAA` into a color
pub fn parse_background(value: &str) -> Result<Rgba, String> {
    Rgba::from_hex(value).ok_or_else(|| {
        format!("Invalid color {value:?}, expected six or eight hex digits (RRGGBB or RRGGBBAA)")
    })
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("apf")
        .after_help(AFTER_HELP)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert images to and from the Arbitrary Picture Format")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .long_help("Output to write the data to\n\nDefaults to the input path with an .apf extension when encoding and a .png extension when decoding")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("all-yes")
            .long("yes")
            .short('y')
            .help("Answer yes to all queries asked")
            .action(ArgAction::SetTrue))
        .args(add_logging_options())
        .args(add_settings())
}

fn add_logging_options() -> [Arg; 4] {
    [
        Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display debug information and higher"),
        Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display very verbose information"),
        Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display warnings and errors"),
        Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display information about the conversion")
    ]
}

fn add_settings() -> Vec<Arg> {
    let mut args = [
        Arg::new("background")
            .long("background")
            .help_heading("Image Settings")
            .help("Background color removed when encoding")
            .long_help(BACKGROUND_HELP)
            .default_value("00000000")
            .value_parser(parse_background),
        Arg::new("level")
            .long("level")
            .help_heading("Image Settings")
            .help("Deflate compression level used when encoding")
            .long_help(LEVEL_HELP)
            .default_value("9")
            .value_parser(value_parser!(u32).range(0..=9)),
        Arg::new("stencil")
            .long("stencil")
            .short('s')
            .help_heading("Image Settings")
            .help("Also write the activity mask when decoding")
            .long_help(STENCIL_HELP)
            .action(ArgAction::SetTrue),
        Arg::new("max-width")
            .long("max-width")
            .help_heading("Image Settings")
            .help("Maximum width of images allowed")
            .default_value(DEFAULT_MAX_DIMENSION_STR)
            .value_parser(value_parser!(usize)),
        Arg::new("max-height")
            .long("max-height")
            .help_heading("Image Settings")
            .help("Maximum height of images allowed")
            .default_value(DEFAULT_MAX_DIMENSION_STR)
            .value_parser(value_parser!(usize)),
        Arg::new("strict")
            .long("strict")
            .help_heading("Image Settings")
            .help("Treat most warnings as errors")
            .action(ArgAction::SetTrue)
            .default_value("false")
    ];
    // list them in order
    args.sort_unstable_by(|x, y| x.get_id().cmp(y.get_id()));

    args.to_vec()
}
