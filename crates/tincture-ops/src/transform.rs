//! Per-channel inversion and chromatic channel reordering.
//!
//! Both operations read their input by reference and never modify it.
//!
//! # Example
//!
//! ```rust
//! use tincture_core::{ChannelOrder, FlagVector, PixelBuffer};
//! use tincture_ops::transform::{invert, swap_channels};
//!
//! let src = PixelBuffer::from_data(1, 1, 3, vec![10.0, 20.0, 30.0]).unwrap();
//! let inv = invert(&src, &FlagVector::new(vec![true, false, false]));
//! assert_eq!(inv.as_slice(), &[245.0, 20.0, 30.0]);
//!
//! let bgr = ChannelOrder::parse("bgr", tincture_core::ColorMode::Rgb).unwrap();
//! let out = swap_channels(&src, Some(&bgr));
//! assert_eq!(out.as_slice(), &[30.0, 20.0, 10.0]);
//! ```

use std::borrow::Cow;
use tincture_core::{ChannelOrder, FlagVector, PixelBuffer, CHANNEL_MAX};

/// Replaces `v` with `255 - v` in every channel whose flag is set.
///
/// # Panics
///
/// Panics if `flags.len()` differs from the buffer's channel count.
pub fn invert(buffer: &PixelBuffer, flags: &FlagVector) -> PixelBuffer {
    let channels = buffer.channels();
    assert_eq!(
        flags.len(),
        channels,
        "flag vector has {} entries for a {}-channel buffer",
        flags.len(),
        channels
    );

    let mut out = buffer.clone();
    if flags.as_slice().iter().any(|&f| f) {
        for px in out.as_mut_slice().chunks_exact_mut(channels) {
            for (value, &flag) in px.iter_mut().zip(flags.as_slice()) {
                if flag {
                    *value = CHANNEL_MAX - *value;
                }
            }
        }
    }
    out
}

/// Inverts every channel.
pub fn invert_all(buffer: &PixelBuffer) -> PixelBuffer {
    invert(buffer, &FlagVector::all(buffer.channels()))
}

/// Moves source channel `order.source(i)` into slot `i` for the first three slots.
///
/// Channels past the third (the CMYK key) are copied through untouched.
/// With no order the input is handed back borrowed, not copied.
pub fn swap_channels<'a>(buffer: &'a PixelBuffer, order: Option<&ChannelOrder>) -> Cow<'a, PixelBuffer> {
    let Some(order) = order else {
        return Cow::Borrowed(buffer);
    };

    let channels = buffer.channels();
    assert!(channels >= 3, "cannot reorder a {}-channel buffer", channels);

    let src = order.indices();
    let mut out = buffer.clone();
    for (dst, px) in out
        .as_mut_slice()
        .chunks_exact_mut(channels)
        .zip(buffer.as_slice().chunks_exact(channels))
    {
        dst[0] = px[src[0]];
        dst[1] = px[src[1]];
        dst[2] = px[src[2]];
    }
    Cow::Owned(out)
}
