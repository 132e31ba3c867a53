// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Card artwork.
//!
//! Project cover images are remote and are never downloaded. Each card
//! gets a generated gradient instead, seeded by the project id so a
//! project always looks the same, and converted into a format suitable
//! for display in egui.

use image::{Rgba, RgbaImage};

/// Artwork dimensions, 2:1 like the card covers.
pub const ARTWORK_WIDTH: u32 = 400;
pub const ARTWORK_HEIGHT: u32 = 200;

/// Gradient end points to pick from: blue-600, violet-600, sky-500,
/// emerald-500, amber-500, rose-500.
const PALETTE: [[u8; 3]; 6] = [
    [37, 99, 235],
    [124, 58, 237],
    [14, 165, 233],
    [16, 185, 129],
    [245, 158, 11],
    [244, 63, 94],
];

/// RGBA pixels ready for `egui::ColorImage::from_rgba_unmultiplied`.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl LoadedImage {
    pub fn to_color_image(&self) -> egui::ColorImage {
        let size = [self.width as usize, self.height as usize];
        egui::ColorImage::from_rgba_unmultiplied(size, &self.pixels)
    }
}

/// 64-bit FNV-1a, stable across runs and platforms.
fn seed_for(id: &str) -> u64 {
    id.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(0x0100_0000_01b3)
    })
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

/// Render the placeholder artwork for a project id.
pub fn placeholder_artwork(id: &str, width: u32, height: u32) -> LoadedImage {
    let seed = seed_for(id);
    let from = PALETTE[(seed % PALETTE.len() as u64) as usize];
    let mut to = PALETTE[((seed >> 8) % PALETTE.len() as u64) as usize];
    if to == from {
        to = PALETTE[(((seed % PALETTE.len() as u64) + 1) % PALETTE.len() as u64) as usize];
    }
    let stripe = 12 + (seed >> 16) % 20;

    let span = (width + height).saturating_sub(2).max(1) as f32;
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let t = (x + y) as f32 / span;
        let shade = if (x as u64 + y as u64 * 2) / stripe % 2 == 0 { 1.0 } else { 0.92 };
        Rgba([
            (lerp(from[0], to[0], t) as f32 * shade) as u8,
            (lerp(from[1], to[1], t) as f32 * shade) as u8,
            (lerp(from[2], to[2], t) as f32 * shade) as u8,
            255,
        ])
    });

    LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_dimensions() {
        let art = placeholder_artwork("trends", ARTWORK_WIDTH, ARTWORK_HEIGHT);
        assert_eq!(art.width, ARTWORK_WIDTH);
        assert_eq!(art.height, ARTWORK_HEIGHT);
        assert_eq!(art.pixels.len(), (ARTWORK_WIDTH * ARTWORK_HEIGHT * 4) as usize);
        assert!(art.pixels.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_artwork_is_deterministic_per_id() {
        let a = placeholder_artwork("dwl", 32, 16);
        let b = placeholder_artwork("dwl", 32, 16);
        let c = placeholder_artwork("chess_engine", 32, 16);
        assert_eq!(a.pixels, b.pixels);
        assert_ne!(a.pixels, c.pixels);
    }

    #[test]
    fn test_tiny_artwork() {
        let art = placeholder_artwork("x", 1, 1);
        assert_eq!(art.pixels.len(), 4);
    }
}
