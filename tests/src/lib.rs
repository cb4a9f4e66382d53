/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scene driven round trip tests
//!
//! Scenes are generated from `tests/apf.json`, so no binary samples are
//! needed.

use nanorand::{Rng, WyRand};
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;
use zune_apf::{ColorFormat, PixelGrid, Rgba};

mod apf;

#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Every pixel is background
    Empty,
    /// Every pixel is `color`
    Solid,
    /// Grey values rising along x
    GreyRamp,
    /// Only red varies
    Red,
    /// Green along x, blue along y
    GreenBlue,
    /// Only alpha varies
    AlphaFade,
    /// Random opaque-ish pixels
    Noise,
    /// A filled disc of `color`
    Disc,
    /// Black and white checkerboard
    Checker,
    /// Grey pixels on the main diagonal
    Diagonal
}

#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JsonFlag {
    Grey,
    R,
    G,
    B,
    Alpha
}

impl JsonFlag {
    pub fn to_flag(self) -> ColorFormat {
        match self {
            Self::Grey => ColorFormat::GREY,
            Self::R => ColorFormat::R,
            Self::G => ColorFormat::G,
            Self::B => ColorFormat::B,
            Self::Alpha => ColorFormat::ALPHA
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:        String,
    pub kind:        SceneKind,
    pub width:       usize,
    pub height:      usize,
    pub background:  Option<String>,
    pub color:       Option<String>,
    pub seed:        Option<u64>,
    pub format:      Vec<JsonFlag>,
    pub active:      Option<usize>,
    pub homogeneous: Option<bool>,
    pub comment:     Option<String>
}

impl TestEntry {
    pub fn background(&self) -> Rgba {
        self.background
            .as_deref()
            .map(|x| Rgba::from_hex(x).expect("Valid background in manifest"))
            .unwrap_or(Rgba::TRANSPARENT)
    }

    pub fn color(&self) -> Rgba {
        self.color
            .as_deref()
            .map(|x| Rgba::from_hex(x).expect("Valid color in manifest"))
            .unwrap_or(Rgba::WHITE)
    }

    pub fn format(&self) -> ColorFormat {
        self.format
            .iter()
            .fold(ColorFormat::empty(), |acc, x| acc | x.to_flag())
    }

    /// Build the pixels the scene describes
    pub fn generate(&self) -> PixelGrid {
        let (width, height) = (self.width, self.height);
        let mut grid = PixelGrid::filled(width, height, self.background());

        match self.kind {
            SceneKind::Empty => {}
            SceneKind::Solid => grid = PixelGrid::filled(width, height, self.color()),
            SceneKind::GreyRamp => {
                for y in 0..height {
                    for x in 0..width {
                        let v = (x * 8) as u8;
                        grid.set(x, y, Rgba::new(v, v, v, 255));
                    }
                }
            }
            SceneKind::Red => {
                for y in 0..height {
                    for x in 0..width {
                        grid.set(x, y, Rgba::new((x * 10 + y) as u8, 0, 0, 255));
                    }
                }
            }
            SceneKind::GreenBlue => {
                for y in 0..height {
                    for x in 0..width {
                        grid.set(x, y, Rgba::new(0, (x * 20) as u8, (y * 20) as u8, 255));
                    }
                }
            }
            SceneKind::AlphaFade => {
                for y in 0..height {
                    for x in 0..width {
                        grid.set(x, y, Rgba::new(200, 10, 10, (x * 16 + 1) as u8));
                    }
                }
            }
            SceneKind::Noise => {
                let mut rng = WyRand::new_seed(self.seed.unwrap_or(0));

                for y in 0..height {
                    for x in 0..width {
                        let [r, g, b, a] = rng.generate::<u32>().to_le_bytes();
                        grid.set(x, y, Rgba::new(r, g, b, a.max(1)));
                    }
                }
            }
            SceneKind::Disc => {
                let color = self.color();
                let center = (width.min(height) / 2) as i64;
                let radius = center - 1;

                for y in 0..height {
                    for x in 0..width {
                        let (dx, dy) = (x as i64 - center, y as i64 - center);

                        if dx * dx + dy * dy <= radius * radius {
                            grid.set(x, y, color);
                        }
                    }
                }
            }
            SceneKind::Checker => {
                for y in 0..height {
                    for x in 0..width {
                        let color = if (x + y) % 2 == 0 {
                            Rgba::BLACK
                        } else {
                            Rgba::WHITE
                        };
                        grid.set(x, y, color);
                    }
                }
            }
            SceneKind::Diagonal => {
                for i in 0..width.min(height) {
                    let v = (10 + i * 10) as u8;
                    grid.set(i, i, Rgba::new(v, v, v, 255));
                }
            }
        }
        grid
    }
}

/// What a decoder is expected to give back: background pixels collapse
/// to the background color
pub fn expected_render(grid: &PixelGrid, background: Rgba) -> PixelGrid {
    let (width, height) = grid.dimensions();
    let mut expected = grid.clone();

    for y in 0..height {
        for x in 0..width {
            if !zune_apf::is_active(grid.get(x, y), background) {
                expected.set(x, y, background);
            }
        }
    }
    expected
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
