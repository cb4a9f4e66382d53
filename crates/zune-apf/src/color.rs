/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An 8 bit per channel RGBA color

/// A single non-premultiplied RGBA color
///
/// On the wire colors are stored packed as `0xAARRGGBB`
/// in a little endian `i32`, see [`to_argb`](Rgba::to_argb)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl Rgba {
    /// Fully transparent black, the fill used when no background is given
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque white, used for active cells of a stencil
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    /// Opaque black, used for inactive cells of a stencil
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba { r, g, b, a }
    }

    /// Pack into `0xAARRGGBB`
    ///
    /// # Example
    /// ```
    /// use zune_apf::Rgba;
    /// assert_eq!(Rgba::new(0x11, 0x22, 0x33, 0x44).to_argb(), 0x4411_2233);
    /// ```
    pub const fn to_argb(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Unpack from `0xAARRGGBB`
    pub const fn from_argb(value: u32) -> Rgba {
        let [a, r, g, b] = value.to_be_bytes();
        Rgba { r, g, b, a }
    }

    /// Read a color from the first four bytes of an RGBA slice
    ///
    /// # Panics
    /// If `bytes` is shorter than 4
    #[inline(always)]
    pub fn from_slice(bytes: &[u8]) -> Rgba {
        Rgba::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    #[inline(always)]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Whether red, green and blue carry the same value
    #[inline(always)]
    pub const fn is_grey(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Parse a hex color of the form `RRGGBB` or `RRGGBBAA`,
    /// with an optional leading `#`
    ///
    /// Six digit colors are treated as opaque
    pub fn from_hex(value: &str) -> Option<Rgba> {
        let value = value.strip_prefix('#').unwrap_or(value);

        if !value.is_ascii() {
            return None;
        }
        let channel = |pos: usize| u8::from_str_radix(value.get(pos..pos + 2)?, 16).ok();

        match value.len() {
            6 => Some(Rgba::new(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Rgba::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None
        }
    }
}
