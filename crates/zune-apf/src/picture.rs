/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A masked picture, the in memory form of an APF stream
use zune_core::log::trace;

use crate::color::Rgba;
use crate::errors::ApfEncodeErrors;
use crate::format::{analyze, ColorFormat};
use crate::grid::PixelGrid;
use crate::mask::Mask;

/// A picture split into an activity mask and the colors of the
/// active cells
///
/// `colors` holds one entry per active cell in row major order,
/// so `colors().len() == mask().count_set()` always holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Picture {
    mask:          Mask,
    format:        ColorFormat,
    background:    Rgba,
    default_color: Rgba,
    colors:        Vec<Rgba>
}

impl Picture {
    /// Split `grid` into a mask and the colors of every pixel that
    /// differs from `background`
    ///
    /// When `background` is fully transparent every pixel with a zero
    /// alpha counts as background.
    ///
    /// # Errors
    /// - The grid has no pixels
    /// - A dimension does not fit the 32 bit signed header fields
    pub fn from_grid(grid: &PixelGrid, background: Rgba) -> Result<Picture, ApfEncodeErrors> {
        let (width, height) = grid.dimensions();

        if width == 0 || height == 0 {
            return Err(ApfEncodeErrors::ZeroDimensions(width, height));
        }
        if width > i32::MAX as usize {
            return Err(ApfEncodeErrors::TooLargeDimensions(width));
        }
        if height > i32::MAX as usize {
            return Err(ApfEncodeErrors::TooLargeDimensions(height));
        }

        let mask = Mask::from_grid(grid, background);

        let colors: Vec<Rgba> = grid
            .iter()
            .zip(mask.iter())
            .filter_map(|(pixel, active)| active.then_some(pixel))
            .collect();

        let (format, default_color) = analyze(&colors);

        trace!("Active pixels: {}", colors.len());
        trace!("Color format: {:?}", format);
        trace!("Default color: {:#010x}", default_color.to_argb());

        Ok(Picture {
            mask,
            format,
            background,
            default_color,
            colors
        })
    }

    // Caller guarantees colors.len() == mask.count_set()
    pub(crate) fn from_parts(
        mask: Mask, format: ColorFormat, background: Rgba, default_color: Rgba, colors: Vec<Rgba>
    ) -> Picture {
        debug_assert_eq!(colors.len(), mask.count_set());

        Picture {
            mask,
            format,
            background,
            default_color,
            colors
        }
    }

    pub const fn mask(&self) -> &Mask {
        &self.mask
    }

    pub const fn format(&self) -> ColorFormat {
        self.format
    }

    /// The background the picture was split against
    pub const fn background(&self) -> Rgba {
        self.background
    }

    /// Fallback for every channel not present in [`format`](Self::format)
    pub const fn default_color(&self) -> Rgba {
        self.default_color
    }

    /// Colors of the active cells in row major order
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.mask.dimensions()
    }

    /// Paint the picture into a grid, inactive cells get `background`
    pub fn render(&self, background: Rgba) -> PixelGrid {
        let (width, height) = self.dimensions();
        let mut grid = PixelGrid::filled(width, height, background);
        let mut colors = self.colors.iter();

        for y in 0..height {
            for x in 0..width {
                if self.mask.get(x, y) {
                    // count invariant keeps the iterator in step with the mask
                    if let Some(color) = colors.next() {
                        grid.set(x, y, *color);
                    }
                }
            }
        }
        grid
    }

    /// Paint the mask only, active cells white and inactive cells black
    pub fn render_stencil(&self) -> PixelGrid {
        let (width, height) = self.dimensions();
        let mut grid = PixelGrid::filled(width, height, Rgba::BLACK);

        for y in 0..height {
            for x in 0..width {
                if self.mask.get(x, y) {
                    grid.set(x, y, Rgba::WHITE);
                }
            }
        }
        grid
    }
}
