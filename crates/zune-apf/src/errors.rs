/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding
use core::fmt::{Debug, Display, Formatter};

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZByteIoError;
use zune_core::colorspace::ColorSpace;
use zune_inflate::errors::InflateDecodeErrors;

/// Possible errors that may occur during decoding
///
/// Every variant means the stream is structurally unusable, there is
/// no partial decode.
pub enum ApfDecodeErrors {
    /// The stream ended before a field could be read
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is number of bytes actually left
    InsufficientData(usize, usize),
    /// The mask header contains a negative width or height
    NegativeDimensions(i32, i32),
    /// A dimension is larger than what the decoder options allow
    ///
    /// # Arguments
    /// - 1st argument is the dimension found
    /// - 2nd argument is the configured maximum
    TooLargeDimensions(usize, usize),
    /// The packed mask length disagrees with `ceil(width*height/8)`
    ///
    /// # Arguments
    /// - 1st argument is the expected length
    /// - 2nd argument is the length stored in the stream
    MaskLengthMismatch(usize, i32),
    /// The color count disagrees with the number of active mask cells
    ///
    /// # Arguments
    /// - 1st argument is the number of active cells
    /// - 2nd argument is the count stored in the stream
    ColorCountMismatch(usize, i32),
    /// Unknown bits set in the color format, only reported in strict mode
    UnknownFormatFlags(u32),
    /// Bytes present after the last color entry, only reported in strict mode
    TrailingBytes(usize),
    /// The deflate wrapper could not be removed
    InflateError(InflateDecodeErrors),
    /// Generic message
    Generic(String),
    /// Generic message does not need heap allocation
    GenericStatic(&'static str),
    IoErrors(ZByteIoError)
}

impl Debug for ApfDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ApfDecodeErrors::InsufficientData(expected, found) => {
                writeln!(
                    f,
                    "Insufficient data required {expected} but remaining stream has {found}"
                )
            }
            ApfDecodeErrors::NegativeDimensions(width, height) => {
                writeln!(f, "Negative mask dimensions, width {width} height {height}")
            }
            ApfDecodeErrors::TooLargeDimensions(found, max) => {
                writeln!(
                    f,
                    "Dimension {found} greater than max configured dimension {max}"
                )
            }
            ApfDecodeErrors::MaskLengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Mask length mismatch, expected {expected} packed bytes but stream declares {found}"
                )
            }
            ApfDecodeErrors::ColorCountMismatch(expected, found) => {
                writeln!(
                    f,
                    "Color count mismatch, mask has {expected} active cells but stream declares {found} colors"
                )
            }
            ApfDecodeErrors::UnknownFormatFlags(flags) => {
                writeln!(f, "Unknown color format flags {flags:#x}")
            }
            ApfDecodeErrors::TrailingBytes(count) => {
                writeln!(f, "Found {count} trailing bytes after the last color entry")
            }
            ApfDecodeErrors::InflateError(err) => {
                writeln!(f, "Could not inflate stream {:?}", err)
            }
            ApfDecodeErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            ApfDecodeErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
            ApfDecodeErrors::IoErrors(value) => {
                writeln!(f, "I/O error {:?}", value)
            }
        }
    }
}

impl Display for ApfDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ApfDecodeErrors {}

impl From<&'static str> for ApfDecodeErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

impl From<ZByteIoError> for ApfDecodeErrors {
    fn from(value: ZByteIoError) -> Self {
        match value {
            // a short read means a truncated stream, report it as such
            ZByteIoError::NotEnoughBytes(expected, found) => {
                ApfDecodeErrors::InsufficientData(expected, found)
            }
            value => ApfDecodeErrors::IoErrors(value)
        }
    }
}

impl From<InflateDecodeErrors> for ApfDecodeErrors {
    fn from(value: InflateDecodeErrors) -> Self {
        ApfDecodeErrors::InflateError(value)
    }
}

/// Errors encountered during encoding
pub enum ApfEncodeErrors {
    /// The image has no pixels, there is nothing to mask
    ZeroDimensions(usize, usize),
    /// Unsupported colorspace
    ///
    /// The first argument is the colorspace encountered
    /// The second argument is list of supported colorspaces
    UnsupportedColorspace(ColorSpace, &'static [ColorSpace]),
    /// Only 8 bit images can be encoded
    UnsupportedBitDepth(BitDepth),
    /// Too large dimensions
    /// The dimension cannot be stored in the signed 32 bit header fields
    TooLargeDimensions(usize),
    /// The pixel buffer size is not the expected size
    ///
    /// # Arguments
    /// - 1st argument is the expected length
    /// - 2nd argument is the length found
    TooShortInput(usize, usize),
    /// The deflate stream could not be produced
    CompressionError(std::io::Error),
    Generic(&'static str),
    IoErrors(ZByteIoError)
}

impl Debug for ApfEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ApfEncodeErrors::ZeroDimensions(width, height) => {
                writeln!(
                    f,
                    "Cannot encode an image without pixels, width {width} height {height}"
                )
            }
            ApfEncodeErrors::UnsupportedColorspace(found, supported) => {
                writeln!(f, "Cannot encode image with colorspace {found:?} into APF, supported ones are {supported:?}")
            }
            ApfEncodeErrors::UnsupportedBitDepth(depth) => {
                writeln!(f, "Unsupported bit depth {depth:?}, only 8 bit images are supported")
            }
            ApfEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, APF can only encode images less than {}",
                    i32::MAX
                )
            }
            ApfEncodeErrors::TooShortInput(expected, found) => {
                writeln!(
                    f,
                    "Too short of input, expected {expected:?}, found {found:?}"
                )
            }
            ApfEncodeErrors::CompressionError(err) => {
                writeln!(f, "Could not deflate stream {err}")
            }
            ApfEncodeErrors::Generic(val) => {
                writeln!(f, "{}", val)
            }
            ApfEncodeErrors::IoErrors(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
        }
    }
}

impl Display for ApfEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ApfEncodeErrors {}

impl From<ZByteIoError> for ApfEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        Self::IoErrors(value)
    }
}

impl From<std::io::Error> for ApfEncodeErrors {
    fn from(value: std::io::Error) -> Self {
        Self::CompressionError(value)
    }
}
