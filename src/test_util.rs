//! Fixtures shared by the unit tests.

use image::GrayImage;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn gray(width: u32, height: u32, data: &[u8]) -> GrayImage {
    GrayImage::from_raw(width, height, data.to_vec()).expect("buffer matches dimensions")
}

pub fn constant(width: u32, height: u32, value: u8) -> GrayImage {
    GrayImage::from_pixel(width, height, image::Luma([value]))
}

/// Deterministic noise image (xorshift).
pub fn noise(width: u32, height: u32, seed: u32) -> GrayImage {
    let mut state = seed.max(1);
    GrayImage::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        image::Luma([(state >> 24) as u8])
    })
}

pub fn unique_temp_dir(label: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let dir = std::env::temp_dir().join(format!("grayscope_{label}_{nanos}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}
