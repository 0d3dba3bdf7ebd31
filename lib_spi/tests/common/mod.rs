#![allow(dead_code)]

use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

pub const RED: [u8; 3] = [255, 0, 0];
pub const GREEN: [u8; 3] = [0, 255, 0];

pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Every pixel gets its own colour, so misplaced bytes show up.
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(2).saturating_sub(1)) as u8,
            (y * 255 / height.max(2).saturating_sub(1)) as u8,
            ((x + y) * 7 % 256) as u8,
        ])
    })
}

/// A file in the temp dir, removed when dropped.
pub struct TempFile(PathBuf);

impl TempFile {
    /// Reserves a name unique to this test process without creating the file.
    pub fn new(name: &str) -> Self {
        Self(std::env::temp_dir().join(format!("spi332-{}-{}", std::process::id(), name)))
    }
}

impl Deref for TempFile {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for TempFile {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

pub fn write_png(name: &str, image: &RgbImage) -> TempFile {
    let file = TempFile::new(&format!("{}.png", name));
    image.save(&*file).unwrap();
    file
}

pub fn write_text(name: &str, contents: &str) -> TempFile {
    let file = TempFile::new(name);
    fs::write(&*file, contents).unwrap();
    file
}

/// Body lines of a literal, without header and closing brace.
pub fn body_lines(literal: &str) -> Vec<&str> {
    let lines: Vec<&str> = literal.lines().collect();
    lines[1..lines.len() - 1].to_vec()
}
