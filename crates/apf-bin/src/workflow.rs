/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::io::{stdin, BufRead};
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};
use zune_apf::constants::APF_EXTENSION;
use zune_apf::zune_core::bytestream::ZCursor;
use zune_apf::{ApfDecoder, ApfEncoder, Picture};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::WorkflowErrors;
use crate::file_io::{read_png, write_png};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    /// PNG in, APF out
    Encode,
    /// APF in, PNG out
    Decode
}

impl Direction {
    /// Files ending in `.apf`, in any case, are decoded
    pub fn from_input(path: &Path) -> Direction {
        let is_apf = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(APF_EXTENSION));

        if is_apf {
            Direction::Decode
        } else {
            Direction::Encode
        }
    }

    fn output_extension(self) -> &'static str {
        match self {
            Direction::Encode => APF_EXTENSION,
            Direction::Decode => "png"
        }
    }
}

/// The input with its extension swapped for the output format
pub(crate) fn default_output_path(input: &Path, direction: Direction) -> PathBuf {
    input.with_extension(direction.output_extension())
}

/// `<dir>/<stem>_stencil.png` next to `output`
pub(crate) fn stencil_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|x| x.to_string_lossy().into_owned())
        .unwrap_or_default();

    output.with_file_name(format!("{stem}_stencil.png"))
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), WorkflowErrors> {
    info!("Creating workflows from input");

    let in_file = args
        .get_one::<PathBuf>("in")
        .ok_or_else(|| WorkflowErrors::GenericString("No input file given".to_string()))?;

    let direction = Direction::from_input(in_file);

    let out_file = args
        .get_one::<PathBuf>("out")
        .cloned()
        .unwrap_or_else(|| default_output_path(in_file, direction));

    verify_file_paths(in_file, &out_file, cmd_opts)?;

    match direction {
        Direction::Encode => encode_file(in_file, &out_file, cmd_opts),
        Direction::Decode => decode_file(in_file, &out_file, cmd_opts)
    }
}

fn encode_file(input: &Path, output: &Path, cmd_opts: &CmdOptions) -> Result<(), WorkflowErrors> {
    info!("Loading image {:?}", input);
    let grid = read_png(input)?;

    info!("Converting to .{}", APF_EXTENSION);
    let picture = Picture::from_grid(&grid, cmd_opts.background)?;

    debug!(
        "{} of {} pixels active, color format {:?}",
        picture.colors().len(),
        picture.mask().len(),
        picture.format()
    );

    let mut encoder = ApfEncoder::new(&picture);
    encoder.set_compression_level(cmd_opts.compression_level);

    let mut stream = Vec::with_capacity(encoder.raw_size());
    let written = encoder.encode(&mut stream)?;

    info!("Writing {} bytes to {:?}", written, output);
    std::fs::write(output, &stream)?;

    Ok(())
}

fn decode_file(input: &Path, output: &Path, cmd_opts: &CmdOptions) -> Result<(), WorkflowErrors> {
    info!("Loading {:?}", input);
    let data = std::fs::read(input)?;

    let mut decoder = ApfDecoder::new_with_options(ZCursor::new(&data), cmd_opts.decoder_options);
    let picture = decoder.decode()?;

    if cmd_opts.write_stencil {
        let stencil = stencil_path(output);

        check_overwrite(&stencil, cmd_opts)?;
        info!("Writing {:?}", stencil);
        write_png(&picture.render_stencil(), &stencil)?;
    }

    info!("Writing {:?}", output);
    write_png(&picture.render(picture.background()), output)?;

    Ok(())
}

fn verify_file_paths(p0: &Path, p1: &Path, cmd_opts: &CmdOptions) -> Result<(), WorkflowErrors> {
    if p0 == p1 {
        return Err(WorkflowErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            p0
        )));
    }

    if !p0.exists() {
        return Err(WorkflowErrors::GenericString(format!(
            "Path {:?}, does not exist",
            p0
        )));
    }

    if !p0.is_file() {
        return Err(WorkflowErrors::GenericString(format!(
            "Path {:?} is not a file",
            p0
        )));
    }
    check_overwrite(p1, cmd_opts)
}

fn check_overwrite(path: &Path, cmd_opts: &CmdOptions) -> Result<(), WorkflowErrors> {
    if !path.exists() {
        return Ok(());
    }
    if cmd_opts.override_files {
        info!("Overwriting path {:?} ", path);
        return Ok(());
    }

    println!("File {:?} exists, overwrite [y/N]", path);
    let mut result = String::new();

    stdin().lock().read_line(&mut result)?;

    if result.trim() != "y" {
        return Err(WorkflowErrors::GenericString(format!(
            "Not overwriting file {:?}",
            path
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use crate::workflow::{default_output_path, stencil_path, Direction};

    #[test]
    fn direction_follows_the_extension() {
        assert_eq!(Direction::from_input(Path::new("a/sprite.apf")), Direction::Decode);
        assert_eq!(Direction::from_input(Path::new("SPRITE.APF")), Direction::Decode);
        assert_eq!(Direction::from_input(Path::new("sprite.png")), Direction::Encode);
        assert_eq!(Direction::from_input(Path::new("sprite")), Direction::Encode);
    }

    #[test]
    fn outputs_sit_next_to_the_input() {
        assert_eq!(
            default_output_path(Path::new("art/sprite.png"), Direction::Encode),
            PathBuf::from("art/sprite.apf")
        );
        assert_eq!(
            default_output_path(Path::new("art/sprite.apf"), Direction::Decode),
            PathBuf::from("art/sprite.png")
        );
        assert_eq!(
            stencil_path(Path::new("art/sprite.png")),
            PathBuf::from("art/sprite_stencil.png")
        );
    }
}
