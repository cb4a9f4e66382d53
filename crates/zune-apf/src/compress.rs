/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The raw deflate wrapper around a serialized picture
//!
//! No zlib or gzip header is written, the stream starts directly with
//! the first deflate block.
use std::io::Write;

use flate2::write::DeflateEncoder;
use flate2::Compression;
use zune_inflate::{DeflateDecoder, DeflateOptions};

use crate::constants::APF_MAX_COMPRESSION_LEVEL;
use crate::errors::ApfDecodeErrors;

/// Deflate `data` at `level`, levels above 9 are clamped
pub fn compress(data: &[u8], level: u32) -> Result<Vec<u8>, std::io::Error> {
    let level = Compression::new(level.min(APF_MAX_COMPRESSION_LEVEL));
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(data.len() / 2), level);

    encoder.write_all(data)?;
    encoder.finish()
}

/// Inflate a raw deflate stream
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, ApfDecodeErrors> {
    let mut decoder = DeflateDecoder::new(data);

    Ok(decoder.decode_deflate()?)
}

/// Inflate a raw deflate stream, failing once the output grows past
/// `limit` bytes
pub fn decompress_with_limit(data: &[u8], limit: usize) -> Result<Vec<u8>, ApfDecodeErrors> {
    let options = DeflateOptions::default()
        .set_limit(limit)
        .set_size_hint(data.len().saturating_mul(4).min(limit));

    let mut decoder = DeflateDecoder::new_with_options(data, options);

    Ok(decoder.decode_deflate()?)
}
