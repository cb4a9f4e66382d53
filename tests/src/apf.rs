/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::path::Path;

use zune_apf::{decompress, ApfDecoder, ApfEncoder, Picture};
use zune_core::bytestream::ZCursor;
use zune_core::options::DecoderOptions;

use crate::{expected_render, hash, TestEntry};

fn load_entries() -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/apf.json");

    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

fn encode(picture: &Picture, level: u32) -> Vec<u8> {
    let mut stream = vec![];
    let mut encoder = ApfEncoder::new(picture);
    encoder.set_compression_level(level);
    encoder.encode(&mut stream).unwrap();
    stream
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_apf_scenes() {
    let entries = load_entries();

    let mut error = false;
    let mut files = Vec::new();

    for entry in &entries {
        let grid = entry.generate();
        let background = entry.background();

        let picture = Picture::from_grid(&grid, background).unwrap();
        let mut problems = Vec::new();

        if picture.format() != entry.format() {
            problems.push(format!(
                "Format mismatch, expected {:?} but found {:?}",
                entry.format(),
                picture.format()
            ));
        }
        if let Some(active) = entry.active {
            if picture.colors().len() != active {
                problems.push(format!(
                    "Active count mismatch, expected {} but found {}",
                    active,
                    picture.colors().len()
                ));
            }
        }

        let stream = encode(&picture, 9);

        if let Some(homogeneous) = entry.homogeneous {
            let inflated = decompress(&stream).unwrap();
            // width, height then the homogeneous byte
            if (inflated[8] == 1) != homogeneous {
                problems.push(format!(
                    "Mask homogeneity mismatch, expected {}",
                    homogeneous
                ));
            }
        }

        let decoded = ApfDecoder::new(ZCursor::new(&stream)).decode().unwrap();

        if decoded != picture {
            problems.push("Decoded picture differs from the encoded one".to_string());
        }

        let expected_hash = hash(expected_render(&grid, background).as_bytes());
        let hash = hash(decoded.render(background).as_bytes());

        if hash != expected_hash {
            problems.push(format!(
                "Hash mismatch, expected {} but found {}",
                expected_hash, hash
            ));
        }

        if !problems.is_empty() {
            error = true;
            files.push(entry.name.clone());
            // report error
            eprintln!("{}: {:#?}\nConfig:{:#?}\n", entry.name, problems, entry);
        }
    }
    if error {
        panic!("Errors found during test decoding\n {:#?}", files);
    }
}

#[test]
fn test_apf_stored_blocks() {
    // level 0 only stores, the decoder must not care
    for entry in &load_entries() {
        let grid = entry.generate();
        let picture = Picture::from_grid(&grid, entry.background()).unwrap();

        let stream = encode(&picture, 0);
        let decoded = ApfDecoder::new(ZCursor::new(&stream)).decode().unwrap();

        assert_eq!(decoded, picture, "{}", entry.name);
    }
}

#[test]
fn test_apf_strict_decoding() {
    let options = DecoderOptions::default().set_strict_mode(true);

    for entry in &load_entries() {
        let grid = entry.generate();
        let background = entry.background();
        let picture = Picture::from_grid(&grid, background).unwrap();

        let stream = encode(&picture, 6);
        let mut decoder = ApfDecoder::new_with_options(ZCursor::new(&stream), options);

        decoder.decode_headers().unwrap();
        assert_eq!(
            decoder.dimensions(),
            Some((entry.width, entry.height)),
            "{}",
            entry.name
        );
        assert_eq!(decoder.color_format(), Some(entry.format()), "{}", entry.name);

        let pixels = decoder.decode_pixels().unwrap();
        assert_eq!(
            hash(&pixels),
            hash(expected_render(&grid, background).as_bytes()),
            "{}",
            entry.name
        );
    }
}
