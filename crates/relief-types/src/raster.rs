use serde::{Deserialize, Serialize};

/// How a source pixel is reduced to a single height value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelMode {
    /// `(r + g + b) / (3 * 255)`.
    #[default]
    Average,
    /// `r / 255`.
    RedOnly,
}

impl ChannelMode {
    /// Reduce one RGB(A) pixel to a normalized value in `[0, 1]`.
    pub fn reduce(self, pixel: &[u8]) -> f32 {
        match self {
            ChannelMode::Average => {
                let sum = u32::from(pixel[0]) + u32::from(pixel[1]) + u32::from(pixel[2]);
                sum as f32 / (3.0 * 255.0)
            }
            ChannelMode::RedOnly => f32::from(pixel[0]) / 255.0,
        }
    }
}

/// Target grid resolution in samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn square(size: usize) -> Self {
        Self::new(size, size)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::square(256)
    }
}

/// Owned, interleaved 8-bit pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub pixels: Vec<u8>,
    pub width: usize,
    pub height: usize,
    /// Bytes per pixel (3 for RGB, 4 for RGBA).
    pub stride: usize,
}

impl RasterImage {
    pub fn new(pixels: Vec<u8>, width: usize, height: usize, stride: usize) -> Self {
        Self {
            pixels,
            width,
            height,
            stride,
        }
    }

    /// Borrow the image for the duration of a sampling call.
    pub fn view(&self) -> RasterView<'_> {
        RasterView {
            pixels: &self.pixels,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }
}

/// Read-only view of an interleaved pixel buffer.
#[derive(Debug, Clone, Copy)]
pub struct RasterView<'a> {
    pub pixels: &'a [u8],
    pub width: usize,
    pub height: usize,
    pub stride: usize,
}

impl<'a> RasterView<'a> {
    pub fn new(pixels: &'a [u8], width: usize, height: usize, stride: usize) -> Self {
        Self {
            pixels,
            width,
            height,
            stride,
        }
    }

    /// Expected buffer length for the declared dimensions, if it fits in `usize`.
    pub fn expected_len(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(self.stride)
    }

    /// Bytes of the pixel at `(x, y)`. The caller guarantees the view is consistent.
    pub fn pixel(&self, x: usize, y: usize) -> &'a [u8] {
        let start = (y * self.width + x) * self.stride;
        &self.pixels[start..start + self.stride]
    }
}
