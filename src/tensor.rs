/// Decoded image output
///
/// The host graph consumes images as float pixel buffers in the range
/// 0..1, laid out batch-first: [batch=1, height, width, channels=3].
/// This module decodes a file and converts whatever color mode it finds
/// (grayscale, RGBA, palette) into that layout.

use std::path::Path;

use crate::error::SelectError;

/// Number of color channels in the host pixel format
pub const CHANNELS: usize = 3;

/// A single decoded image as a batch-of-one float pixel buffer
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    /// Pixel data, row-major H x W x 3, intensities in 0..1
    data: Vec<f32>,
    width: u32,
    height: u32,
}

impl ImageTensor {
    /// Shape in host order: [batch, height, width, channels]
    pub fn shape(&self) -> [usize; 4] {
        [1, self.height as usize, self.width as usize, CHANNELS]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flat pixel buffer in shape order
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// RGB intensities of one pixel
    ///
    /// Panics if `x`/`y` are outside the image; callers index within
    /// the dimensions reported by `shape()`.
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [self.data[offset], self.data[offset + 1], self.data[offset + 2]]
    }
}

/// Load an image file and convert it to the host pixel format
///
/// Any source color mode is converted to 8-bit RGB first, then
/// intensities are scaled from 0..255 to 0.0..1.0.
pub fn load_image_tensor(path: &Path) -> Result<ImageTensor, SelectError> {
    let decoded = image::open(path).map_err(|source| SelectError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let data: Vec<f32> = rgb
        .into_raw()
        .into_iter()
        .map(|v| v as f32 / 255.0)
        .collect();

    println!(
        "📷 Decoded pose image: {}x{} ({} pixels)",
        width,
        height,
        width as u64 * height as u64
    );

    Ok(ImageTensor {
        data,
        width,
        height,
    })
}
