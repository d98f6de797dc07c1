//! Diversifier: the full variant set for one decoded image.
//!
//! - **RGB**: the 48 channel variants, then the grayscale copy and its
//!   full inversion (50 images).
//! - **CMYK**: the 96 channel variants only; there is no grayscale pair.
//!
//! [`variant_plan`] describes the same positions without computing pixels.

use crate::enumerate::VariantEnumerator;
use crate::transform::invert_all;
use crate::OpsResult;
use std::ops::Deref;
use tincture_core::{ColorMode, PixelBuffer, VariantKind, VariantSpec};
use tincture_io::DecodedImage;
use tracing::{debug, trace};

/// Ordered variants of one image under one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSet {
    mode: ColorMode,
    variants: Vec<PixelBuffer>,
}

impl VariantSet {
    /// Mode the set was produced in; decides how channel variants are encoded.
    #[inline]
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Buffers in archive order.
    #[inline]
    pub fn as_slice(&self) -> &[PixelBuffer] {
        &self.variants
    }

    /// Consumes the set, returning its buffers.
    #[inline]
    pub fn into_vec(self) -> Vec<PixelBuffer> {
        self.variants
    }
}

impl Deref for VariantSet {
    type Target = [PixelBuffer];

    fn deref(&self) -> &[PixelBuffer] {
        &self.variants
    }
}

/// Produces the variant set of `image` under `mode`.
///
/// # Errors
///
/// Codec conversion failures are passed through unchanged.
pub fn diversify(image: &DecodedImage, mode: ColorMode) -> OpsResult<VariantSet> {
    trace!(width = image.width(), height = image.height(), mode = %mode, "diversify");

    let raw = image.to_buffer(mode)?;
    let mut variants = VariantEnumerator::new(mode).variants(&raw)?;

    if mode == ColorMode::Rgb {
        let gray = image.to_grayscale_rgb()?;
        let gray_inverted = invert_all(&gray);
        variants.push(gray);
        variants.push(gray_inverted);
    }

    debug!(mode = %mode, count = variants.len(), "Diversified image");
    Ok(VariantSet { mode, variants })
}

/// Describes every position [`diversify`] produces for `mode`, in order.
///
/// ```rust
/// use tincture_core::{ColorMode, VariantKind};
/// use tincture_ops::variant_plan;
///
/// let plan = variant_plan(ColorMode::Rgb);
/// assert_eq!(plan.len(), 50);
/// assert_eq!(plan[49].kind, VariantKind::GrayscaleInverted);
/// ```
pub fn variant_plan(mode: ColorMode) -> Vec<VariantSpec> {
    let mut kinds: Vec<VariantKind> = VariantEnumerator::new(mode).kinds().collect();
    if mode == ColorMode::Rgb {
        kinds.push(VariantKind::Grayscale);
        kinds.push(VariantKind::GrayscaleInverted);
    }
    kinds
        .into_iter()
        .enumerate()
        .map(|(index, kind)| VariantSpec { index, kind })
        .collect()
}
