/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An owned 8 bit RGBA pixel buffer
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;

use crate::color::Rgba;
use crate::errors::ApfEncodeErrors;

const SUPPORTED_COLORSPACES: [ColorSpace; 4] = [
    ColorSpace::Luma,
    ColorSpace::LumaA,
    ColorSpace::RGB,
    ColorSpace::RGBA
];

/// A rectangular grid of RGBA pixels stored row major,
/// four bytes per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width:  usize,
    height: usize,
    pixels: Vec<u8>
}

impl PixelGrid {
    /// Create a grid filled with transparent pixels
    pub fn new(width: usize, height: usize) -> PixelGrid {
        PixelGrid::filled(width, height, Rgba::TRANSPARENT)
    }

    /// Create a grid where every pixel is `color`
    pub fn filled(width: usize, height: usize, color: Rgba) -> PixelGrid {
        let pixels = color.to_array().repeat(width * height);

        PixelGrid {
            width,
            height,
            pixels
        }
    }

    /// Wrap an existing RGBA buffer
    ///
    /// # Errors
    /// If `pixels.len()` is not `width*height*4`
    pub fn from_rgba(
        width: usize, height: usize, pixels: Vec<u8>
    ) -> Result<PixelGrid, ApfEncodeErrors> {
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(4))
            .ok_or(ApfEncodeErrors::TooLargeDimensions(width.max(height)))?;

        if pixels.len() != expected {
            return Err(ApfEncodeErrors::TooShortInput(expected, pixels.len()));
        }
        Ok(PixelGrid {
            width,
            height,
            pixels
        })
    }

    /// Build a grid from interleaved 8 bit pixels described by `options`
    ///
    /// Luma, LumaA and RGB inputs are expanded to RGBA, missing alpha
    /// becomes opaque.
    pub fn from_pixels(data: &[u8], options: EncoderOptions) -> Result<PixelGrid, ApfEncodeErrors> {
        if options.depth() != BitDepth::Eight {
            return Err(ApfEncodeErrors::UnsupportedBitDepth(options.depth()));
        }
        let colorspace = options.colorspace();

        if !SUPPORTED_COLORSPACES.contains(&colorspace) {
            return Err(ApfEncodeErrors::UnsupportedColorspace(
                colorspace,
                &SUPPORTED_COLORSPACES
            ));
        }
        let components = colorspace.num_components();
        let expected = options
            .width()
            .checked_mul(options.height())
            .and_then(|x| x.checked_mul(components))
            .ok_or(ApfEncodeErrors::TooLargeDimensions(
                options.width().max(options.height())
            ))?;

        if data.len() != expected {
            return Err(ApfEncodeErrors::TooShortInput(expected, data.len()));
        }

        let mut pixels = Vec::with_capacity(options.width() * options.height() * 4);

        for chunk in data.chunks_exact(components) {
            let px = match colorspace {
                ColorSpace::Luma => [chunk[0], chunk[0], chunk[0], 255],
                ColorSpace::LumaA => [chunk[0], chunk[0], chunk[0], chunk[1]],
                ColorSpace::RGB => [chunk[0], chunk[1], chunk[2], 255],
                _ => [chunk[0], chunk[1], chunk[2], chunk[3]]
            };
            pixels.extend_from_slice(&px);
        }

        Ok(PixelGrid {
            width: options.width(),
            height: options.height(),
            pixels
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return the width and height of the grid
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// # Panics
    /// If `x >= width` or `y >= height`
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        let pos = self.offset(x, y);
        Rgba::from_slice(&self.pixels[pos..pos + 4])
    }

    /// # Panics
    /// If `x >= width` or `y >= height`
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        let pos = self.offset(x, y);
        self.pixels[pos..pos + 4].copy_from_slice(&color.to_array());
    }

    /// Iterate over every pixel in row major order
    pub fn iter(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.pixels.chunks_exact(4).map(Rgba::from_slice)
    }

    /// The raw RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    #[inline(always)]
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Pixel ({x},{y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        (y * self.width + x) * 4
    }
}
