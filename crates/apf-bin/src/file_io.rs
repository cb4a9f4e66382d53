/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG on both ends of a conversion
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::debug;
use png::{ColorType, Transformations};
use zune_apf::PixelGrid;
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;

use crate::errors::WorkflowErrors;

/// Read a PNG file into an RGBA grid
///
/// Palettes and low bit depths are expanded and 16 bit samples are
/// stripped, so any PNG ends up as 8 bit Luma, LumaA, RGB or RGBA.
pub fn read_png(path: &Path) -> Result<PixelGrid, WorkflowErrors> {
    let mut decoder = png::Decoder::new(BufReader::new(File::open(path)?));
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let mut pixels = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut pixels)?;

    pixels.truncate(info.buffer_size());

    let colorspace = match info.color_type {
        ColorType::Grayscale => ColorSpace::Luma,
        ColorType::GrayscaleAlpha => ColorSpace::LumaA,
        ColorType::Rgb => ColorSpace::RGB,
        ColorType::Rgba => ColorSpace::RGBA,
        ColorType::Indexed => {
            return Err(WorkflowErrors::GenericString(format!(
                "Palette of {path:?} was not expanded"
            )));
        }
    };
    debug!(
        "Read {:?}: {}x{} {:?}",
        path, info.width, info.height, colorspace
    );

    let options = EncoderOptions::new(
        info.width as usize,
        info.height as usize,
        colorspace,
        BitDepth::Eight
    );

    Ok(PixelGrid::from_pixels(&pixels, options)?)
}

/// Write an RGBA grid as an 8 bit RGBA PNG
pub fn write_png(grid: &PixelGrid, path: &Path) -> Result<(), WorkflowErrors> {
    let (width, height) = grid.dimensions();

    let width = u32::try_from(width)
        .map_err(|_| WorkflowErrors::GenericString(format!("Width {width} too large for PNG")))?;
    let height = u32::try_from(height)
        .map_err(|_| WorkflowErrors::GenericString(format!("Height {height} too large for PNG")))?;

    let mut encoder = png::Encoder::new(BufWriter::new(File::create(path)?), width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(grid.as_bytes())?;
    writer.finish()?;

    debug!("Wrote {:?}: {}x{}", path, width, height);

    Ok(())
}
