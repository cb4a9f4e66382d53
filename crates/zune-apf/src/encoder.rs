/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::bytestream::{ZByteWriterTrait, ZWriter};
use zune_core::log::trace;
use zune_core::options::EncoderOptions;

use crate::color::Rgba;
use crate::compress::compress;
use crate::constants::{
    APF_COLOR_HEADER_SIZE, APF_DEFAULT_COMPRESSION_LEVEL, APF_MASK_HEADER_SIZE
};
use crate::errors::ApfEncodeErrors;
use crate::format::ColorFormat;
use crate::grid::PixelGrid;
use crate::picture::Picture;

/// Arbitrary Picture Format encoder
///
/// # Example
/// - Encode a 4 by 4 RGBA image with a single opaque pixel
///
/// ```
/// use zune_apf::{ApfEncoder, PixelGrid, Picture, Rgba};
/// use zune_apf::ApfEncodeErrors;
///
/// fn main() -> Result<(), ApfEncodeErrors> {
///     let mut grid = PixelGrid::new(4, 4);
///     grid.set(1, 2, Rgba::new(200, 10, 10, 255));
///
///     let picture = Picture::from_grid(&grid, Rgba::TRANSPARENT)?;
///     let mut sink = vec![];
///     ApfEncoder::new(&picture).encode(&mut sink)?;
///     Ok(())
/// }
/// ```
pub struct ApfEncoder<'a> {
    picture:           &'a Picture,
    compression_level: u32
}

impl<'a> ApfEncoder<'a> {
    /// Create a new encoder for `picture` using the default
    /// compression level
    pub const fn new(picture: &'a Picture) -> ApfEncoder<'a> {
        ApfEncoder {
            picture,
            compression_level: APF_DEFAULT_COMPRESSION_LEVEL
        }
    }

    /// Set the deflate level, 0 stores, 9 compresses hardest
    pub fn set_compression_level(&mut self, level: u32) {
        self.compression_level = level;
    }

    pub const fn compression_level(&self) -> u32 {
        self.compression_level
    }

    /// Size of the stream before compression
    pub fn raw_size(&self) -> usize {
        let mask = self.picture.mask();
        let mask_payload = if mask.homogeneous_byte().is_some() {
            1
        } else {
            mask.as_packed_bytes().len()
        };

        APF_MASK_HEADER_SIZE
            + mask_payload
            + APF_COLOR_HEADER_SIZE
            + self.picture.colors().len() * self.picture.format().entry_size()
    }

    /// Serialize the picture without the deflate wrapper
    pub fn serialize(&self) -> Result<Vec<u8>, ApfEncodeErrors> {
        let picture = self.picture;
        let format = picture.format();
        let colors = picture.colors();

        let count = i32::try_from(colors.len())
            .map_err(|_| ApfEncodeErrors::TooLargeDimensions(colors.len()))?;

        let mut raw = Vec::with_capacity(self.raw_size());
        {
            let mut writer = ZWriter::new(&mut raw);

            picture.mask().write_to(&mut writer)?;

            writer.write_u32_le_err(format.bits())?;
            writer.write_u32_le_err(picture.background().to_argb())?;
            writer.write_u32_le_err(picture.default_color().to_argb())?;
            writer.write_u32_le_err(count as u32)?;

            let store_red = format.intersects(ColorFormat::GREY | ColorFormat::R);
            let store_green = format.contains(ColorFormat::G);
            let store_blue = format.contains(ColorFormat::B);
            let store_alpha = format.contains(ColorFormat::ALPHA);

            for color in colors {
                if store_red {
                    writer.write_u8_err(color.r)?;
                }
                if store_green {
                    writer.write_u8_err(color.g)?;
                }
                if store_blue {
                    writer.write_u8_err(color.b)?;
                }
                if store_alpha {
                    writer.write_u8_err(color.a)?;
                }
            }
        }
        trace!("Serialized size: {}", raw.len());

        Ok(raw)
    }

    /// Encode the picture into `sink`
    ///
    /// # Returns
    /// - Ok(size): Actual bytes written to the sink
    /// - Err: The error encountered during encoding
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, ApfEncodeErrors> {
        let raw = self.serialize()?;
        let compressed = compress(&raw, self.compression_level)?;

        trace!(
            "Compressed {} bytes into {} bytes",
            raw.len(),
            compressed.len()
        );

        let mut stream = ZWriter::new(sink);
        stream.write_all(&compressed)?;

        Ok(stream.bytes_written())
    }
}

/// Encode interleaved 8 bit pixels straight to APF
///
/// Pixels equal to `background` (or any fully transparent pixel when
/// `background` is transparent) are left out of the color payload.
///
/// # Returns
/// - Ok(size): Actual bytes written to the sink
pub fn encode_pixels<T: ZByteWriterTrait>(
    data: &[u8], options: EncoderOptions, background: Rgba, sink: T
) -> Result<usize, ApfEncodeErrors> {
    let grid = PixelGrid::from_pixels(data, options)?;
    let picture = Picture::from_grid(&grid, background)?;

    ApfEncoder::new(&picture).encode(sink)
}
