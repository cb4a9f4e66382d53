/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The activity mask, one bit per grid cell
//!
//! Bits are kept packed eight to a byte, bit 0 of byte 0 being cell 0,
//! which is also exactly how they are laid out on the wire:
//!
//! ```text
//! ╔════════╤══════════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                          ║
//! ╠════════╪══════════════════════════════════════════════════════╣
//! ║ 4      │ width, LE i32                                        ║
//! ║ 4      │ height, LE i32                                       ║
//! ║ 1      │ homogeneous, 0 or 1                                  ║
//! ║ 4      │ packed length `ceil(width*height/8)`, LE i32         ║
//! ║ 1 or N │ repeated byte if homogeneous, else all packed bytes  ║
//! ╚════════╧══════════════════════════════════════════════════════╝
//! ```
use zune_core::bytestream::{ZByteIoError, ZByteReaderTrait, ZByteWriterTrait, ZReader, ZWriter};
use zune_core::log::trace;
use zune_core::options::DecoderOptions;

use crate::color::Rgba;
use crate::errors::ApfDecodeErrors;
use crate::grid::PixelGrid;

/// A `width*height` bitmap marking active (non background) cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width:  usize,
    height: usize,
    // invariant: len == ceil(width*height/8) and padding bits are zero
    bits:   Vec<u8>
}

/// Whether `pixel` differs from `background`
///
/// A fully transparent background only compares alpha, so every
/// invisible pixel counts as background regardless of its color.
#[inline]
pub fn is_active(pixel: Rgba, background: Rgba) -> bool {
    if background.a == 0 {
        pixel.a != 0
    } else {
        pixel != background
    }
}

#[inline(always)]
const fn packed_len(cells: usize) -> usize {
    cells.div_ceil(8)
}

impl Mask {
    /// Create a mask with every cell inactive
    pub fn new(width: usize, height: usize) -> Mask {
        Mask {
            width,
            height,
            bits: vec![0; packed_len(width * height)]
        }
    }

    /// Derive a mask from `grid`, marking every pixel that is not
    /// `background` as active
    pub fn from_grid(grid: &PixelGrid, background: Rgba) -> Mask {
        let (width, height) = grid.dimensions();
        let mut mask = Mask::new(width, height);

        for (pos, pixel) in grid.iter().enumerate() {
            if is_active(pixel, background) {
                mask.bits[pos >> 3] |= 1 << (pos & 7);
            }
        }
        mask
    }

    /// Rebuild a mask from its packed representation
    ///
    /// Padding bits in the final byte are ignored.
    ///
    /// # Errors
    /// If `bytes.len()` is not `ceil(width*height/8)`
    pub fn from_packed_bytes(
        mut bytes: Vec<u8>, width: usize, height: usize
    ) -> Result<Mask, ApfDecodeErrors> {
        let cells = width
            .checked_mul(height)
            .ok_or(ApfDecodeErrors::GenericStatic("Mask dimensions overflow"))?;
        let expected = packed_len(cells);

        if bytes.len() != expected {
            return Err(ApfDecodeErrors::MaskLengthMismatch(
                expected,
                i32::try_from(bytes.len()).unwrap_or(i32::MAX)
            ));
        }
        let used = cells & 7;

        if used != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= (1 << used) - 1;
            }
        }
        Ok(Mask {
            width,
            height,
            bits: bytes
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of cells, `width*height`
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// # Panics
    /// If `x >= width` or `y >= height`
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        let pos = self.index(x, y);
        (self.bits[pos >> 3] >> (pos & 7)) & 1 == 1
    }

    /// # Panics
    /// If `x >= width` or `y >= height`
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let pos = self.index(x, y);
        let bit = 1 << (pos & 7);

        if value {
            self.bits[pos >> 3] |= bit;
        } else {
            self.bits[pos >> 3] &= !bit;
        }
    }

    /// Number of active cells
    pub fn count_set(&self) -> usize {
        self.bits.iter().map(|x| x.count_ones() as usize).sum()
    }

    /// Iterate over every cell in row major order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(|pos| (self.bits[pos >> 3] >> (pos & 7)) & 1 == 1)
    }

    /// The packed bits, `ceil(width*height/8)` bytes, final byte zero padded
    pub fn as_packed_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn to_packed_bytes(&self) -> Vec<u8> {
        self.bits.clone()
    }

    /// Return the byte repeated throughout the packed representation,
    /// or `None` if the bytes differ
    ///
    /// The comparison includes the zero padding of the final byte, so a
    /// fully active mask whose size is not a multiple of 8 is not
    /// homogeneous.
    pub fn homogeneous_byte(&self) -> Option<u8> {
        let (&first, rest) = self.bits.split_first()?;

        if rest.iter().all(|x| *x == first) {
            Some(first)
        } else {
            None
        }
    }

    pub(crate) fn write_to<T: ZByteWriterTrait>(
        &self, writer: &mut ZWriter<T>
    ) -> Result<(), ZByteIoError> {
        writer.write_u32_le_err(self.width as u32)?;
        writer.write_u32_le_err(self.height as u32)?;

        let homogeneous = self.homogeneous_byte();

        writer.write_u8_err(u8::from(homogeneous.is_some()))?;
        writer.write_u32_le_err(self.bits.len() as u32)?;

        match homogeneous {
            Some(byte) => writer.write_u8_err(byte)?,
            None => writer.write_all(&self.bits)?
        }
        trace!(
            "Mask {}x{} homogeneous: {}",
            self.width,
            self.height,
            homogeneous.is_some()
        );

        Ok(())
    }

    pub(crate) fn read_from<T: ZByteReaderTrait>(
        reader: &mut ZReader<T>, options: &DecoderOptions
    ) -> Result<Mask, ApfDecodeErrors> {
        let width = reader.get_u32_le_err()? as i32;
        let height = reader.get_u32_le_err()? as i32;

        if width < 0 || height < 0 {
            return Err(ApfDecodeErrors::NegativeDimensions(width, height));
        }
        let (width, height) = (width as usize, height as usize);

        if width > options.max_width() {
            return Err(ApfDecodeErrors::TooLargeDimensions(
                width,
                options.max_width()
            ));
        }
        if height > options.max_height() {
            return Err(ApfDecodeErrors::TooLargeDimensions(
                height,
                options.max_height()
            ));
        }
        let homogeneous = reader.read_u8_err()? != 0;
        let length = reader.get_u32_le_err()? as i32;

        let expected = packed_len(width * height);

        if length < 0 || length as usize != expected {
            return Err(ApfDecodeErrors::MaskLengthMismatch(expected, length));
        }

        trace!("Mask width: {}", width);
        trace!("Mask height: {}", height);
        trace!("Mask homogeneous: {}", homogeneous);

        let bits = if homogeneous {
            let byte = reader.read_u8_err()?;
            vec![byte; expected]
        } else {
            let mut bits = vec![0; expected];
            reader.read_exact_bytes(&mut bits)?;
            bits
        };

        Mask::from_packed_bytes(bits, width, height)
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Cell ({x},{y}) out of bounds for {}x{} mask",
            self.width,
            self.height
        );
        y * self.width + x
    }
}
