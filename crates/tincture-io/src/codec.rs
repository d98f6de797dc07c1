//! Image codec capability.
//!
//! Wraps the `image` crate for everything that touches encoded bytes or
//! color-model conversion:
//!
//! - [`decode`] - encoded bytes to a [`DecodedImage`]
//! - [`DecodedImage::to_buffer`] - RGB or CMYK [`PixelBuffer`]
//! - [`DecodedImage::to_grayscale_rgb`] - ITU-R 601 luma expanded to three channels
//! - [`encode`] - [`PixelBuffer`] back to raster bytes
//!
//! # CMYK
//!
//! RGB to CMYK is the plain complement with no undercolor removal
//! (`C = 255 - R`, `M = 255 - G`, `Y = 255 - B`, `K = 0`). The reverse
//! direction scales by the key: `R = (255 - C)(255 - K) / 255`.
//!
//! # Example
//!
//! ```rust,ignore
//! use tincture_core::ColorMode;
//! use tincture_io::{codec, OutputFormat};
//!
//! let image = codec::decode(&bytes)?;
//! let buf = image.to_buffer(ColorMode::Cmyk)?;
//! let png = codec::encode(&buf, ColorMode::Cmyk, &OutputFormat::default())?;
//! ```

use crate::{IoError, IoResult, OutputFormat};
use image::{DynamicImage, RgbImage};
use std::io::Cursor;
use tincture_core::{ColorMode, Error as CoreError, PixelBuffer};
use tracing::{debug, trace};

/// A decoded source image, independent of any color mode.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: DynamicImage,
}

impl DecodedImage {
    /// Wraps an already decoded image.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Converts to a buffer laid out for `mode` (3 or 4 channels).
    pub fn to_buffer(&self, mode: ColorMode) -> IoResult<PixelBuffer> {
        let rgb = self.image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let samples: Vec<f64> = match mode {
            ColorMode::Rgb => rgb.as_raw().iter().map(|&v| f64::from(v)).collect(),
            ColorMode::Cmyk => rgb
                .pixels()
                .flat_map(|px| rgb_to_cmyk(px.0))
                .map(f64::from)
                .collect(),
        };
        trace!(width, height, mode = %mode, "DecodedImage::to_buffer");
        Ok(PixelBuffer::from_data(width, height, mode.channel_count(), samples)?)
    }

    /// Converts to single-channel luma, then expands back to three equal channels.
    ///
    /// Luma uses the ITU-R 601-2 weights; see [`luma_601`].
    pub fn to_grayscale_rgb(&self) -> IoResult<PixelBuffer> {
        let rgb = self.image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let samples: Vec<f64> = rgb
            .pixels()
            .flat_map(|px| {
                let l = luma_601(px.0);
                [l, l, l]
            })
            .map(f64::from)
            .collect();
        Ok(PixelBuffer::from_data(width, height, 3, samples)?)
    }
}

/// Decodes an image in any enabled format.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] if the bytes are not a supported image.
pub fn decode(bytes: &[u8]) -> IoResult<DecodedImage> {
    let format = image::guess_format(bytes).ok();
    let image = image::load_from_memory(bytes).map_err(|e| IoError::DecodeError(e.to_string()))?;
    debug!(
        width = image.width(),
        height = image.height(),
        format = ?format,
        "Decoded source image"
    );
    Ok(DecodedImage { image })
}

/// ITU-R 601-2 luma in 16-bit fixed point, rounded:
/// `L = (R * 19595 + G * 38470 + B * 7471 + 0x8000) >> 16`.
#[inline]
pub fn luma_601([r, g, b]: [u8; 3]) -> u8 {
    let l = u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000;
    (l >> 16) as u8
}

/// Complement conversion without undercolor removal.
#[inline]
pub fn rgb_to_cmyk([r, g, b]: [u8; 3]) -> [u8; 4] {
    [255 - r, 255 - g, 255 - b, 0]
}

/// Key-scaled conversion back to RGB, rounded to the nearest integer.
#[inline]
pub fn cmyk_to_rgb([c, m, y, k]: [u8; 4]) -> [u8; 3] {
    let nk = f64::from(255 - k);
    let scale = |v: u8| (f64::from(255 - v) * nk / 255.0).round() as u8;
    [scale(c), scale(m), scale(y)]
}

/// Encodes a buffer to `format`.
///
/// Samples are clamped and truncated to 8 bits, read according to `mode`,
/// converted to 3-channel RGB and handed to the raster encoder.
///
/// # Errors
///
/// - [`IoError::Core`] if the buffer's channel count does not match `mode`
/// - [`IoError::EncodeError`] if the encoder rejects the format
pub fn encode(buffer: &PixelBuffer, mode: ColorMode, format: &OutputFormat) -> IoResult<Vec<u8>> {
    if buffer.channels() != mode.channel_count() {
        return Err(CoreError::channel_mismatch(mode.channel_count(), buffer.channels()).into());
    }

    let samples = buffer.to_u8();
    let rgb = match mode {
        ColorMode::Rgb => samples,
        ColorMode::Cmyk => samples
            .chunks_exact(4)
            .flat_map(|px| cmyk_to_rgb([px[0], px[1], px[2], px[3]]))
            .collect(),
    };

    let image = RgbImage::from_raw(buffer.width(), buffer.height(), rgb)
        .ok_or_else(|| IoError::EncodeError("sample count does not match dimensions".into()))?;

    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut out, format.image_format())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(out.into_inner())
}
