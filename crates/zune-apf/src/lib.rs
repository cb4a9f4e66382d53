/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding the Arbitrary Picture Format
//!
//! APF targets images that are mostly a single background color, such
//! as sprites and icons. A picture is split into a bitmask marking the
//! cells that differ from the background, plus one color entry per
//! active cell. Only the channels that actually vary across active
//! cells are stored, everything else comes from a shared default color.
//!
//! The whole stream is wrapped in raw deflate, inside it everything is
//! little endian:
//!
//! ```text
//! ╔══════════╤════════════════════════════════════════════════╗
//! ║ Bytes    │ Description                                    ║
//! ╠══════════╪════════════════════════════════════════════════╣
//! ║ 13+1/N   │ mask, see below                                ║
//! ║ 4        │ color format flags                             ║
//! ║ 4        │ background, ARGB                               ║
//! ║ 4        │ default color, ARGB                            ║
//! ║ 4        │ color count, equal to active mask cells        ║
//! ║ count*E  │ entries, E bytes each, R/grey, G, B, A order   ║
//! ╚══════════╧════════════════════════════════════════════════╝
//! ```
//!
//! The mask layout is documented in [`Mask`].
//!
//! # Features
//! - Decoding and encoding
//! - `log`: trace and warning output through `zune-core`'s logger
//!
//! # Example
//! ```
//! use zune_apf::{ApfDecoder, ApfEncoder, PixelGrid, Picture, Rgba};
//! use zune_apf::zune_core::bytestream::ZCursor;
//!
//! let mut grid = PixelGrid::new(8, 8);
//! grid.set(3, 4, Rgba::new(10, 20, 30, 255));
//!
//! let picture = Picture::from_grid(&grid, Rgba::TRANSPARENT).unwrap();
//!
//! let mut stream = vec![];
//! ApfEncoder::new(&picture).encode(&mut stream).unwrap();
//!
//! let decoded = ApfDecoder::new(ZCursor::new(&stream)).decode().unwrap();
//! assert_eq!(decoded.render(Rgba::TRANSPARENT), grid);
//! ```
pub use color::*;
pub use compress::{compress, decompress};
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use format::*;
pub use grid::*;
pub use mask::*;
pub use picture::*;
pub use zune_core;

mod color;
pub mod compress;
pub mod constants;
mod decoder;
mod encoder;
mod errors;
mod format;
mod grid;
mod mask;
mod picture;
