/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteReaderTrait, ZCursor, ZReader};
use zune_core::colorspace::ColorSpace;
use zune_core::log::{trace, warn};
use zune_core::options::DecoderOptions;

use crate::color::Rgba;
use crate::compress::decompress_with_limit;
use crate::constants::{APF_COLOR_HEADER_SIZE, APF_MASK_HEADER_SIZE};
use crate::errors::ApfDecodeErrors;
use crate::format::ColorFormat;
use crate::mask::Mask;
use crate::picture::Picture;

/// An Arbitrary Picture Format decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to inflate the stream and read
/// everything up to the color entries, or [`decode`] to return the
/// full picture
///
/// Dimensions, the color format and the background are accessible
/// after decoding headers
///
/// [`decode_headers`]:ApfDecoder::decode_headers
/// [`decode`]:ApfDecoder::decode
pub struct ApfDecoder<T>
where
    T: ZByteReaderTrait
{
    width:           usize,
    height:          usize,
    format:          ColorFormat,
    background:      Rgba,
    default_color:   Rgba,
    color_count:     usize,
    mask:            Option<Mask>,
    decoded_headers: bool,
    stream:          ZReader<T>,
    payload:         Vec<u8>,
    entries_start:   usize,
    options:         DecoderOptions
}

impl<T> ApfDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new APF decoder with the default options
    ///
    /// # Example
    ///
    /// ```no_run
    /// use zune_core::bytestream::ZCursor;
    /// let mut decoder = zune_apf::ApfDecoder::new(ZCursor::new(&[]));
    /// ```
    pub fn new(data: T) -> ApfDecoder<T> {
        ApfDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new APF decoder that obeys specified restrictions
    ///
    /// Width and height limits are checked before the mask is
    /// allocated. In strict mode unknown format bits and bytes after the
    /// last color entry are errors, otherwise they are logged and ignored.
    ///
    /// # Example
    /// ```
    /// use zune_core::bytestream::ZCursor;
    /// use zune_core::options::DecoderOptions;
    /// use zune_apf::ApfDecoder;
    ///
    /// let options = DecoderOptions::default()
    ///     .set_max_width(10)
    ///     .set_max_height(10);
    ///
    /// let decoder = ApfDecoder::new_with_options(ZCursor::new([]), options);
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> ApfDecoder<T> {
        ApfDecoder {
            width: 0,
            height: 0,
            format: ColorFormat::empty(),
            background: Rgba::TRANSPARENT,
            default_color: Rgba::TRANSPARENT,
            color_count: 0,
            mask: None,
            decoded_headers: false,
            stream: ZReader::new(data),
            payload: Vec::new(),
            entries_start: 0,
            options
        }
    }

    /// Inflate the stream and read the mask and the color header
    ///
    /// Calling this more than once is a no-op.
    pub fn decode_headers(&mut self) -> Result<(), ApfDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let limit = self.inflate_limit();
        let mut compressed = Vec::new();
        self.stream.read_all(&mut compressed)?;

        let inflated = decompress_with_limit(&compressed, limit)?;

        trace!("Inflated size: {}", inflated.len());

        let mut payload = ZReader::new(ZCursor::new(&inflated));

        let mask = Mask::read_from(&mut payload, &self.options)?;

        let flags = payload.get_u32_le_err()?;
        let unknown = flags & !ColorFormat::all().bits();

        if unknown != 0 {
            if self.options.strict_mode() {
                return Err(ApfDecodeErrors::UnknownFormatFlags(flags));
            }
            warn!("Unknown color format bits {unknown:#x}, ignoring them");
        }
        let format = ColorFormat::from_bits_truncate(flags);

        let background = Rgba::from_argb(payload.get_u32_le_err()?);
        let default_color = Rgba::from_argb(payload.get_u32_le_err()?);

        let count = payload.get_u32_le_err()? as i32;
        let active = mask.count_set();

        if count < 0 || count as usize != active {
            return Err(ApfDecodeErrors::ColorCountMismatch(active, count));
        }

        (self.width, self.height) = mask.dimensions();

        trace!("Image width: {}", self.width);
        trace!("Image height: {}", self.height);
        trace!("Color format: {:?}", format);
        trace!("Color count: {}", count);

        self.format = format;
        self.background = background;
        self.default_color = default_color;
        self.color_count = active;
        self.entries_start = payload.position()? as usize;
        self.mask = Some(mask);
        self.payload = inflated;
        self.decoded_headers = true;

        Ok(())
    }

    /// Decode the stream into a [`Picture`]
    ///
    /// The mask is moved into the returned picture, so a decoder decodes
    /// exactly one picture.
    pub fn decode(&mut self) -> Result<Picture, ApfDecodeErrors> {
        self.decode_headers()?;

        let Some(mask) = self.mask.take() else {
            return Err(ApfDecodeErrors::GenericStatic("Picture was already decoded"));
        };
        let payload = core::mem::take(&mut self.payload);

        let format = self.format;
        let default = self.default_color;

        let needed = self.color_count * format.entry_size();
        let remaining = payload.get(self.entries_start..).unwrap_or_default();

        if remaining.len() < needed {
            return Err(ApfDecodeErrors::InsufficientData(needed, remaining.len()));
        }
        if remaining.len() > needed {
            let extra = remaining.len() - needed;

            if self.options.strict_mode() {
                return Err(ApfDecodeErrors::TrailingBytes(extra));
            }
            warn!("{extra} trailing bytes after the last color entry");
        }

        let colors = Self::read_colors(&remaining[..needed], self.color_count, format, default);

        Ok(Picture::from_parts(
            mask,
            format,
            self.background,
            default,
            colors
        ))
    }

    /// Decode the stream and paint it over its own background, returning
    /// interleaved RGBA pixels
    pub fn decode_pixels(&mut self) -> Result<Vec<u8>, ApfDecodeErrors> {
        let picture = self.decode()?;

        Ok(picture.render(picture.background()).into_bytes())
    }

    // Largest stream a picture within the configured dimensions can
    // serialize to, every cell active with four bytes per entry
    fn inflate_limit(&self) -> usize {
        let cells = self
            .options
            .max_width()
            .saturating_mul(self.options.max_height());

        cells
            .saturating_mul(4)
            .saturating_add(cells.div_ceil(8))
            .saturating_add(APF_MASK_HEADER_SIZE + APF_COLOR_HEADER_SIZE)
    }

    fn read_colors(entries: &[u8], count: usize, format: ColorFormat, default: Rgba) -> Vec<Rgba> {
        let entry_size = format.entry_size();

        if entry_size == 0 {
            // every channel is constant
            return vec![default; count];
        }

        entries
            .chunks_exact(entry_size)
            .map(|entry| {
                let mut color = default;
                let mut values = entry.iter().copied();

                if format.contains(ColorFormat::GREY) {
                    let v = values.next().unwrap_or(default.r);
                    (color.r, color.g, color.b) = (v, v, v);
                } else if format.contains(ColorFormat::R) {
                    color.r = values.next().unwrap_or(default.r);
                }
                if format.contains(ColorFormat::G) {
                    color.g = values.next().unwrap_or(default.g);
                }
                if format.contains(ColorFormat::B) {
                    color.b = values.next().unwrap_or(default.b);
                }
                if format.contains(ColorFormat::ALPHA) {
                    color.a = values.next().unwrap_or(default.a);
                }
                color
            })
            .collect()
    }

    /// Returns the colorspace of decoded pixels, always RGBA
    ///
    /// Or none if the headers haven't been decoded
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(ColorSpace::RGBA)
        } else {
            None
        }
    }

    /// Return the bit depth of decoded pixels
    ///
    /// This is always 8
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::Eight
    }

    /// Return the width and height of the picture
    ///
    /// Or none if the headers haven't been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }

    /// Return the channels stored per color entry
    pub const fn color_format(&self) -> Option<ColorFormat> {
        if self.decoded_headers {
            return Some(self.format);
        }
        None
    }

    /// Return the background the picture was split against
    pub const fn background(&self) -> Option<Rgba> {
        if self.decoded_headers {
            return Some(self.background);
        }
        None
    }

    /// Return the number of bytes needed to hold the RGBA pixels
    /// [`decode_pixels`](Self::decode_pixels) returns
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            self.width.checked_mul(self.height)?.checked_mul(4)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use zune_core::bytestream::ZCursor;
    use zune_core::options::DecoderOptions;

    use crate::compress::compress;
    use crate::{ApfDecodeErrors, ApfDecoder, ApfEncoder, ColorFormat, PixelGrid, Picture, Rgba};

    const RED: Rgba = Rgba::new(255, 0, 0, 255);

    fn encode(picture: &Picture) -> Vec<u8> {
        let mut out = vec![];
        ApfEncoder::new(picture).encode(&mut out).unwrap();
        out
    }

    fn serialize(picture: &Picture) -> Vec<u8> {
        ApfEncoder::new(picture).serialize().unwrap()
    }

    fn decode_raw(raw: &[u8], options: DecoderOptions) -> Result<Picture, ApfDecodeErrors> {
        let stream = compress(raw, 6).unwrap();
        ApfDecoder::new_with_options(ZCursor::new(stream), options).decode()
    }

    fn red_pair() -> Picture {
        let mut grid = PixelGrid::new(2, 1);
        grid.set(0, 0, RED);
        Picture::from_grid(&grid, Rgba::TRANSPARENT).unwrap()
    }

    #[test]
    fn red_and_transparent_pair() {
        let picture = red_pair();
        let bytes = encode(&picture);

        let mut decoder = ApfDecoder::new(ZCursor::new(&bytes));
        decoder.decode_headers().unwrap();

        assert_eq!(decoder.dimensions(), Some((2, 1)));
        assert_eq!(decoder.color_format(), Some(ColorFormat::empty()));

        let decoded = decoder.decode().unwrap();
        assert_eq!(decoded, picture);
        assert_eq!(decoded.colors(), &[RED]);
    }

    #[test]
    fn decode_from_io_reader() {
        let mut grid = PixelGrid::new(11, 5);
        for x in 0..11 {
            grid.set(x, x % 5, Rgba::new(x as u8 * 20, 40, 200 - x as u8, 255));
        }
        let picture = Picture::from_grid(&grid, Rgba::TRANSPARENT).unwrap();
        let bytes = encode(&picture);

        let mut decoder = ApfDecoder::new(std::io::Cursor::new(bytes));
        decoder.decode_headers().unwrap();

        assert_eq!(decoder.dimensions(), Some((11, 5)));

        let decoded = decoder.decode().unwrap();
        assert_eq!(decoded.render(Rgba::TRANSPARENT), grid);
    }

    #[test]
    fn all_background_has_no_colors() {
        let grid = PixelGrid::filled(5, 3, Rgba::TRANSPARENT);
        let picture = Picture::from_grid(&grid, Rgba::TRANSPARENT).unwrap();

        let decoded = ApfDecoder::new(ZCursor::new(encode(&picture)))
            .decode()
            .unwrap();

        assert_eq!(decoded.mask().count_set(), 0);
        assert!(decoded.colors().is_empty());
        assert_eq!(decoded.render(Rgba::TRANSPARENT), grid);
    }

    #[test]
    fn grey_entries_expand_to_three_channels() {
        let mut grid = PixelGrid::new(3, 1);
        grid.set(0, 0, Rgba::new(10, 10, 10, 255));
        grid.set(2, 0, Rgba::new(90, 90, 90, 255));

        let picture = Picture::from_grid(&grid, Rgba::TRANSPARENT).unwrap();
        assert_eq!(picture.format(), ColorFormat::GREY);

        let decoded = ApfDecoder::new(ZCursor::new(encode(&picture)))
            .decode()
            .unwrap();

        assert_eq!(decoded.render(Rgba::TRANSPARENT), grid);
    }

    #[test]
    fn mixed_channels_survive() {
        let mut grid = PixelGrid::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                if (x + y) % 3 != 0 {
                    grid.set(x, y, Rgba::new(x as u8 * 30, 7, y as u8 * 20, 100 + x as u8));
                }
            }
        }
        let picture = Picture::from_grid(&grid, Rgba::TRANSPARENT).unwrap();
        assert_eq!(
            picture.format(),
            ColorFormat::R | ColorFormat::B | ColorFormat::ALPHA
        );

        let mut decoder = ApfDecoder::new(ZCursor::new(encode(&picture)));
        let pixels = decoder.decode_pixels().unwrap();

        assert_eq!(decoder.output_buffer_size(), Some(pixels.len()));
        assert_eq!(pixels, grid.into_bytes());
    }

    #[test]
    fn count_must_match_active_cells() {
        let mut raw = serialize(&red_pair());
        // count lives after mask(14) + format, background, default
        raw[26..30].copy_from_slice(&2_i32.to_le_bytes());

        assert!(matches!(
            decode_raw(&raw, DecoderOptions::default()),
            Err(ApfDecodeErrors::ColorCountMismatch(1, 2))
        ));
    }

    #[test]
    fn truncated_stream_is_an_error() {
        let mut grid = PixelGrid::new(4, 1);
        for x in 0..4 {
            grid.set(x, 0, Rgba::new(x as u8, 1, 2, 255));
        }
        let raw = serialize(&Picture::from_grid(&grid, Rgba::TRANSPARENT).unwrap());

        assert!(matches!(
            decode_raw(&raw[..raw.len() - 1], DecoderOptions::default()),
            Err(ApfDecodeErrors::InsufficientData(4, 3))
        ));
        assert!(decode_raw(&raw[..10], DecoderOptions::default()).is_err());
    }

    #[test]
    fn unknown_flags_depend_on_strictness() {
        let picture = red_pair();
        let mut raw = serialize(&picture);
        raw[14..18].copy_from_slice(&(1_u32 << 7).to_le_bytes());

        let lenient = decode_raw(&raw, DecoderOptions::default().set_strict_mode(false)).unwrap();
        assert_eq!(lenient, picture);

        assert!(matches!(
            decode_raw(&raw, DecoderOptions::default().set_strict_mode(true)),
            Err(ApfDecodeErrors::UnknownFormatFlags(128))
        ));
    }

    #[test]
    fn trailing_bytes_depend_on_strictness() {
        let picture = red_pair();
        let mut raw = serialize(&picture);
        raw.extend_from_slice(&[1, 2, 3]);

        let lenient = decode_raw(&raw, DecoderOptions::default().set_strict_mode(false)).unwrap();
        assert_eq!(lenient, picture);

        assert!(matches!(
            decode_raw(&raw, DecoderOptions::default().set_strict_mode(true)),
            Err(ApfDecodeErrors::TrailingBytes(3))
        ));
    }

    #[test]
    fn dimension_limits_are_respected() {
        let bytes = encode(&red_pair());
        let options = DecoderOptions::default().set_max_width(1);

        let mut decoder = ApfDecoder::new_with_options(ZCursor::new(bytes), options);

        assert!(matches!(
            decoder.decode_headers(),
            Err(ApfDecodeErrors::TooLargeDimensions(2, 1))
        ));
        assert_eq!(decoder.dimensions(), None);
    }

    #[test]
    fn not_deflate_is_an_error() {
        let mut decoder = ApfDecoder::new(ZCursor::new([0xFF_u8; 16]));
        assert!(decoder.decode().is_err());
    }

    #[test]
    fn second_decode_fails() {
        let mut decoder = ApfDecoder::new(ZCursor::new(encode(&red_pair())));

        assert!(decoder.decode().is_ok());
        assert!(decoder.decode().is_err());
    }
}
