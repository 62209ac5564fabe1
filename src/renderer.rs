//! The renderer: turns a density grid into an RGBA pixel buffer.
//!
//! Counts are not stretched against the busiest cell.  Instead each
//! count is taken as a fraction of all the samples drawn, scaled by
//! the canvas width, and pushed through `1 - (1 - ratio)^50`.  That
//! curve rises very steeply, so a cell visited a handful of times
//! still shows up, while only the densest cells get close to full
//! intensity.

use std::path::Path;

use failure::{err_msg, Error};
use itertools::iproduct;
use num::clamp;

use crate::accumulator::DensityGrid;

/// The knobs of the intensity curve and the fixed hue.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tone {
    /// Power applied to (1 - ratio).
    pub exponent: f64,
    /// Ratios are clamped to at most this; must stay below 1.
    pub clamp: f64,
    /// Red channel, held constant.
    pub red: u8,
    /// Blue channel, held constant.
    pub blue: u8,
}

impl Default for Tone {
    fn default() -> Self {
        Tone {
            exponent: 50.0,
            clamp: 0.99,
            red: 0xff,
            blue: 0xff,
        }
    }
}

impl Tone {
    /// The intensity k in [0, 1) for a cell visited `count` times out
    /// of `iterations` samples on a canvas `width` pixels wide.
    pub fn intensity(&self, count: u32, iterations: usize, width: usize) -> f64 {
        if count == 0 || iterations == 0 {
            return 0.0;
        }
        let ratio = f64::from(count) / iterations as f64 * width as f64;
        let ratio = clamp(ratio, 0.0, self.clamp);
        1.0 - (1.0 - ratio).powf(self.exponent)
    }

    /// The RGBA bytes for an intensity.
    fn colour(&self, k: f64) -> [u8; 4] {
        let level = (255.0 * k).round() as u8;
        [self.red, level, self.blue, level]
    }
}

/// A width x height RGBA image, four bytes per pixel, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// A fully transparent buffer.
    pub fn new(width: usize, height: usize) -> Self {
        PixelBuffer {
            width,
            height,
            bytes: vec![0 as u8; width * height * 4],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Give up the raw RGBA bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The RGBA value at column x, row y.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let off = (y * self.width + x) * 4;
        let mut px = [0; 4];
        px.copy_from_slice(&self.bytes[off..off + 4]);
        px
    }

    /// Pack the buffer as 0RGB words, each pixel blended over a black
    /// background, which is what a plain framebuffer wants.
    pub fn to_argb_over_black(&self) -> Vec<u32> {
        self.bytes
            .chunks(4)
            .map(|px| {
                let alpha = u32::from(px[3]);
                let blend = |c: u8| u32::from(c) * alpha / 255;
                (blend(px[0]) << 16) | (blend(px[1]) << 8) | blend(px[2])
            })
            .collect()
    }

    /// Write the buffer out as an image; the format follows the
    /// file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let image = image::RgbaImage::from_raw(
            self.width as u32,
            self.height as u32,
            self.bytes.clone(),
        )
        .ok_or_else(|| err_msg("Pixel buffer does not match its dimensions"))?;
        image.save(path)?;
        Ok(())
    }
}

/// Render the visible width x height part of a grid with the
/// default tone.
pub fn render(grid: &DensityGrid, iterations: usize, width: usize, height: usize) -> PixelBuffer {
    render_with(&Tone::default(), grid, iterations, width, height)
}

/// Render with an explicit tone.  Empty cells stay fully
/// transparent; the grid's boundary row and column are skipped.
pub fn render_with(
    tone: &Tone,
    grid: &DensityGrid,
    iterations: usize,
    width: usize,
    height: usize,
) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let count = grid.get(x, y);
        if count == 0 {
            continue;
        }
        let k = tone.intensity(count, iterations, width);
        let off = (y * width + x) * 4;
        buffer.bytes[off..off + 4].copy_from_slice(&tone.colour(k));
    }
    buffer
}
