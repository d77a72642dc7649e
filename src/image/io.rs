//! I/O helpers for grayscale pages, RGB overlays and JSON.
//!
//! - `load_grayscale`: read a PNG/JPEG into a `PixelGrid` with values in `[0, 255]`.
//! - `save_grayscale`: write a `PixelGrid` as an 8-bit grayscale PNG (clamped).
//! - `RgbCanvas`: three-plane copy of a page used by the overlay renderers.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::PixelGrid;
use crate::error::{DetectError, DetectResult};
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to 8-bit luminance stored as `f32`.
pub fn load_grayscale(path: &Path) -> DetectResult<PixelGrid> {
    let img = image::open(path)
        .map_err(|e| DetectError::UnreadableImage {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .into_luma8();
    let cols = img.width() as usize;
    let rows = img.height() as usize;
    let data = img.into_raw().into_iter().map(f32::from).collect();
    PixelGrid::from_vec(rows, cols, data).ok_or_else(|| DetectError::UnreadableImage {
        path: path.to_path_buf(),
        reason: "decoded buffer does not match image dimensions".to_string(),
    })
}

#[inline]
fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Save a grid as grayscale PNG, clamping values to `[0, 255]`.
pub fn save_grayscale(grid: &PixelGrid, path: &Path) -> DetectResult<()> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(grid.cols as u32, grid.rows as u32);
    for (x, y, px) in out.enumerate_pixels_mut() {
        *px = Luma([to_u8(grid.get(y as usize, x as usize))]);
    }
    out.save(path).map_err(|e| DetectError::io(path, e))
}

/// Colour copy of a grayscale page that overlay renderers draw onto.
#[derive(Clone, Debug)]
pub struct RgbCanvas {
    image: RgbImage,
}

impl RgbCanvas {
    pub fn from_gray(grid: &PixelGrid) -> Self {
        let mut image = RgbImage::new(grid.cols as u32, grid.rows as u32);
        for (x, y, px) in image.enumerate_pixels_mut() {
            let v = to_u8(grid.get(y as usize, x as usize));
            *px = Rgb([v, v, v]);
        }
        Self { image }
    }

    pub fn rows(&self) -> usize {
        self.image.height() as usize
    }

    pub fn cols(&self) -> usize {
        self.image.width() as usize
    }

    #[inline]
    pub fn put(&mut self, row: usize, col: usize, colour: [u8; 3]) {
        if row < self.rows() && col < self.cols() {
            self.image.put_pixel(col as u32, row as u32, Rgb(colour));
        }
    }

    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        self.image.get_pixel(col as u32, row as u32).0
    }

    pub fn save(&self, path: &Path) -> DetectResult<()> {
        ensure_parent_dir(path)?;
        self.image.save(path).map_err(|e| DetectError::io(path, e))
    }
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> DetectResult<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| DetectError::io(path, e))?;
    fs::write(path, json).map_err(|e| DetectError::io(path, e))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> DetectResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| DetectError::io(parent, e))?;
        }
    }
    Ok(())
}
