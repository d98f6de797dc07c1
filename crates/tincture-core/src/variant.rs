//! Descriptors for positions in a variant set.
//!
//! A [`VariantSpec`] tells what the image at a given index is, without
//! holding any pixels. Archive entry `i` always corresponds to descriptor `i`.

use crate::{ChannelOrder, ColorMode, FlagVector};
use std::fmt;

/// How one variant is derived from the source image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariantKind {
    /// Invert the flagged channels, then reorder the chromatic channels.
    Channels {
        /// Per-channel inversion flags
        invert: FlagVector,
        /// Destination order of the chromatic channels
        order: ChannelOrder,
    },
    /// Grayscale copy of the source, expanded to three channels.
    Grayscale,
    /// Fully inverted grayscale copy.
    GrayscaleInverted,
}

/// One position of a variant set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantSpec {
    /// Zero-based position
    pub index: usize,
    /// Transform producing this position
    pub kind: VariantKind,
}

impl VariantSpec {
    /// Short human-readable description under `mode`'s labels,
    /// e.g. `invert=+-- order=bgr` or `grayscale`.
    pub fn describe(&self, mode: ColorMode) -> String {
        match &self.kind {
            VariantKind::Channels { invert, order } => {
                format!("invert={} order={}", invert, order.label(mode))
            }
            VariantKind::Grayscale => "grayscale".to_string(),
            VariantKind::GrayscaleInverted => "grayscale inverted".to_string(),
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantKind::Channels { invert, order } => {
                write!(f, "invert={} order={:?}", invert, order.indices())
            }
            VariantKind::Grayscale => f.write_str("grayscale"),
            VariantKind::GrayscaleInverted => f.write_str("grayscale inverted"),
        }
    }
}
