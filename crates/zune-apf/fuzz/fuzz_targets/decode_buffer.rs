#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use zune_apf::zune_core::bytestream::ZCursor;
    use zune_apf::zune_core::options::DecoderOptions;

    let options = DecoderOptions::default()
        .set_max_width(1 << 12)
        .set_max_height(1 << 12);

    let mut decoder = zune_apf::ApfDecoder::new_with_options(ZCursor::new(data), options);
    let _ = decoder.decode();
});
