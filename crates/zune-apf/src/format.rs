/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Deciding which channels have to be stored per pixel
use bitflags::bitflags;

use crate::color::Rgba;

bitflags! {
    /// Channels that vary across the active pixels and are therefore
    /// stored for every color entry.
    ///
    /// Channels without a flag are constant and taken from the
    /// picture's default color instead.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ColorFormat: u32 {
        /// Red, green and blue are equal in every pixel, one byte stands in for all three
        const GREY = 1 << 0;
        const R = 1 << 1;
        const G = 1 << 2;
        const B = 1 << 3;
        const ALPHA = 1 << 4;

        const RGB = Self::R.bits() | Self::G.bits() | Self::B.bits();
        const RGBA = Self::RGB.bits() | Self::ALPHA.bits();
    }
}

impl ColorFormat {
    /// Number of bytes each color entry occupies on the wire
    pub fn entry_size(self) -> usize {
        usize::from(self.intersects(ColorFormat::GREY | ColorFormat::R))
            + usize::from(self.contains(ColorFormat::G))
            + usize::from(self.contains(ColorFormat::B))
            + usize::from(self.contains(ColorFormat::ALPHA))
    }
}

/// Work out the storage format of `colors`
///
/// The first color is the reference, a channel is variable when any
/// color disagrees with the reference on it. Returns the format and the
/// default color, whose variable channels are zeroed.
///
/// An empty slice gives an empty format and a transparent default.
///
/// # Example
/// ```
/// use zune_apf::{analyze, ColorFormat, Rgba};
///
/// let colors = [Rgba::new(10, 10, 10, 255), Rgba::new(90, 90, 90, 255)];
/// let (format, default) = analyze(&colors);
///
/// assert_eq!(format, ColorFormat::GREY);
/// assert_eq!(default, Rgba::new(0, 0, 0, 255));
/// ```
pub fn analyze(colors: &[Rgba]) -> (ColorFormat, Rgba) {
    let Some(&reference) = colors.first() else {
        return (ColorFormat::empty(), Rgba::TRANSPARENT);
    };

    let mut grey = true;
    let mut format = ColorFormat::empty();

    for color in colors {
        grey &= color.is_grey();

        format.set(ColorFormat::R, format.contains(ColorFormat::R) || color.r != reference.r);
        format.set(ColorFormat::G, format.contains(ColorFormat::G) || color.g != reference.g);
        format.set(ColorFormat::B, format.contains(ColorFormat::B) || color.b != reference.b);
        format.set(
            ColorFormat::ALPHA,
            format.contains(ColorFormat::ALPHA) || color.a != reference.a
        );
    }

    // grey pixels that vary only need a single byte, constant grey
    // pixels need none and keep their value in the default color
    if grey && format.intersects(ColorFormat::RGB) {
        format.remove(ColorFormat::RGB);
        format.insert(ColorFormat::GREY);
    }

    let rgb_stored = format.intersects(ColorFormat::GREY);
    let pick = |flag: ColorFormat, value: u8| {
        if rgb_stored || format.contains(flag) {
            0
        } else {
            value
        }
    };

    let default = Rgba::new(
        pick(ColorFormat::R, reference.r),
        pick(ColorFormat::G, reference.g),
        pick(ColorFormat::B, reference.b),
        if format.contains(ColorFormat::ALPHA) {
            0
        } else {
            reference.a
        }
    );

    (format, default)
}
