//! Floating-point pixel buffer.
//!
//! # Memory Layout
//!
//! Samples are stored **row-major**, top-to-bottom, with channels interleaved,
//! i.e. an array of shape `(height, width, channels)`:
//!
//! ```text
//! Memory: [C0 C1 C2 C0 C1 C2 ...]  <- Row 0
//!         [C0 C1 C2 C0 C1 C2 ...]  <- Row 1
//! ```
//!
//! Values live in `[0, 255]` as `f64` while being transformed and are only
//! narrowed to `u8` by [`PixelBuffer::to_u8`] at encode time.
//!
//! # Ownership
//!
//! A `PixelBuffer` owns its samples outright. `clone()` is a deep copy, so a
//! buffer derived from another can never alias or corrupt its source.

use crate::{Error, Result, CHANNEL_MAX};

/// Owned `(height, width, channels)` array of `f64` samples.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    data: Vec<f64>,
    width: u32,
    height: u32,
    channels: usize,
}

impl PixelBuffer {
    /// Creates a zero-filled buffer.
    ///
    /// ```rust
    /// use tincture_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::new(4, 2, 3);
    /// assert_eq!(buf.as_slice().len(), 4 * 2 * 3);
    /// ```
    pub fn new(width: u32, height: u32, channels: usize) -> Self {
        Self::filled(width, height, channels, 0.0)
    }

    /// Creates a buffer with every sample set to `value`.
    pub fn filled(width: u32, height: u32, channels: usize, value: f64) -> Self {
        let len = width as usize * height as usize * channels;
        Self {
            data: vec![value; len],
            width,
            height,
            channels,
        }
    }

    /// Creates a buffer from existing samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * channels`, or if `channels` is zero.
    pub fn from_data(width: u32, height: u32, channels: usize, data: Vec<f64>) -> Result<Self> {
        if channels == 0 {
            return Err(Error::invalid_dimensions(width, height, "zero channels"));
        }
        let expected = width as usize * height as usize * channels;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Creates a buffer by widening 8-bit samples.
    pub fn from_u8(width: u32, height: u32, channels: usize, data: &[u8]) -> Result<Self> {
        Self::from_data(
            width,
            height,
            channels,
            data.iter().map(|&v| f64::from(v)).collect(),
        )
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of interleaved channels.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable raw samples. Only for code that owns a fresh copy.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consumes the buffer, returning its samples.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Sample at pixel `(x, y)`, channel `c`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or channel are out of range.
    #[inline]
    pub fn sample(&self, x: u32, y: u32, c: usize) -> f64 {
        assert!(x < self.width && y < self.height && c < self.channels);
        self.data[(y as usize * self.width as usize + x as usize) * self.channels + c]
    }

    /// Iterates over every sample of channel `c`, in pixel order.
    pub fn channel_values(&self, c: usize) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().skip(c).step_by(self.channels.max(1)).copied()
    }

    /// Narrows to 8-bit: clamps to `[0, 255]`, then truncates toward zero.
    pub fn to_u8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| v.clamp(0.0, CHANNEL_MAX) as u8)
            .collect()
    }
}
