#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use zune_apf::zune_core::bytestream::ZCursor;
    use zune_apf::{ApfDecoder, ApfEncoder, PixelGrid, Picture, Rgba};

    if data.len() < 5 {
        return;
    }
    // first byte picks the width, the rest are RGBA pixels
    let width = usize::from(data[0]).max(1);
    let pixels = &data[1..];
    let height = pixels.len() / 4 / width;

    if height == 0 {
        return;
    }
    let grid = PixelGrid::from_rgba(width, height, pixels[..width * height * 4].to_vec())
        .expect("Pixel count matches dimensions");
    let picture = Picture::from_grid(&grid, Rgba::TRANSPARENT).expect("Non empty grid");

    let mut stream = vec![];
    ApfEncoder::new(&picture)
        .encode(&mut stream)
        .expect("Encoding a valid picture");

    let decoded = ApfDecoder::new(ZCursor::new(&stream))
        .decode()
        .expect("Decoding what we encoded");

    assert!(decoded == picture, "The decoded picture doesn't match the original!");
});
