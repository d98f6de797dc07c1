//! # tincture-core
//!
//! Core types for color-channel variant generation.
//!
//! This crate provides the foundational types used throughout the tincture workspace:
//!
//! - [`PixelBuffer`] - Floating-point `(height, width, channels)` sample array
//! - [`ColorMode`] - Tag selecting the RGB or CMYK channel layout
//! - [`FlagVector`] - Per-channel inversion flags
//! - [`ChannelOrder`] - Permutation of the three chromatic channels
//! - [`VariantSpec`] - Description of one position in a variant set
//!
//! ## Design Philosophy
//!
//! Samples stay in `f64` for the whole transformation so that `255 - v`
//! never wraps, and are truncated to `u8` only when encoded. Every transform
//! produces a fresh buffer; nothing here holds shared or global state.
//!
//! ```rust
//! use tincture_core::{ColorMode, FlagVector, PixelBuffer};
//!
//! let buf = PixelBuffer::new(2, 2, ColorMode::Rgb.channel_count());
//! assert_eq!(buf.channels(), 3);
//! assert_eq!(FlagVector::enumerate(3).len(), 8);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! tincture-core (this crate)
//!    ^
//!    +-- tincture-io  (codec capability, archive packager)
//!    +-- tincture-ops (transforms, enumerator, diversifier)
//!    +-- tincture-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod channel;
pub mod error;
pub mod mode;
pub mod variant;

pub use buffer::PixelBuffer;
pub use channel::{ChannelOrder, FlagVector};
pub use error::{Error, Result};
pub use mode::ColorMode;
pub use variant::{VariantKind, VariantSpec};

/// Largest value a channel sample can hold.
pub const CHANNEL_MAX: f64 = 255.0;

/// Prelude module for convenient imports.
///
/// ```
/// use tincture_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::channel::{ChannelOrder, FlagVector};
    pub use crate::error::{Error, Result};
    pub use crate::mode::ColorMode;
    pub use crate::variant::{VariantKind, VariantSpec};
    pub use crate::CHANNEL_MAX;
}
