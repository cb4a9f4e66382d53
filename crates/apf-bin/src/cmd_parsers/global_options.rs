/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use zune_apf::constants::APF_DEFAULT_COMPRESSION_LEVEL;
use zune_apf::Rgba;
use zune_core::options::DecoderOptions;

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub background:        Rgba,
    pub compression_level: u32,
    pub write_stencil:     bool,
    pub override_files:    bool,
    pub decoder_options:   DecoderOptions
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            background:        Rgba::TRANSPARENT,
            compression_level: APF_DEFAULT_COMPRESSION_LEVEL,
            write_stencil:     false,
            override_files:    false,
            decoder_options:   DecoderOptions::default()
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(background) = options.get_one::<Rgba>("background") {
        cmd_options.background = *background;
    }
    if options.value_source("background") == Some(ValueSource::CommandLine) {
        info!(
            "Using background color {:#010x}",
            cmd_options.background.to_argb()
        );
    }
    if let Some(level) = options.get_one::<u32>("level") {
        cmd_options.compression_level = *level;
    }
    cmd_options.write_stencil = options.get_flag("stencil");
    cmd_options.decoder_options = get_decoder_options(options);

    if options.value_source("all-yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
