//! Variant enumeration.
//!
//! For a mode with `n` channels the enumerator walks every flag vector of
//! length `n` (outer loop, binary-counting order) and, for each, the six
//! orders of the chromatic channels (inner loop). Each pair yields
//! `swap(invert(buffer, flags), order)`.
//!
//! | Mode | Flag vectors | Orders | Variants |
//! |------|--------------|--------|----------|
//! | RGB  | 8            | 6      | 48       |
//! | CMYK | 16           | 6      | 96       |

use crate::transform::{invert, swap_channels};
use crate::OpsResult;
use tincture_core::{ChannelOrder, ColorMode, Error, FlagVector, PixelBuffer, VariantKind};
use tracing::{debug, trace};

/// Enumerates the channel variants of one mode.
#[derive(Debug, Clone)]
pub struct VariantEnumerator {
    mode: ColorMode,
    flags: Vec<FlagVector>,
}

impl VariantEnumerator {
    /// Creates the enumerator for `mode`.
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            flags: FlagVector::enumerate(mode.channel_count()),
        }
    }

    /// Mode this enumerator was built for.
    #[inline]
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Number of variants produced per buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.flags.len() * ChannelOrder::PERMUTATIONS.len()
    }

    /// Always `false`; every mode has at least one variant.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(flags, order)` pairs in output order: flags outer, order inner.
    pub fn specs(&self) -> impl Iterator<Item = (&FlagVector, ChannelOrder)> + '_ {
        self.flags.iter().flat_map(|flags| {
            ChannelOrder::PERMUTATIONS
                .into_iter()
                .map(move |order| (flags, order))
        })
    }

    /// Same pairs as [`specs`](Self::specs), as variant descriptors.
    pub fn kinds(&self) -> impl Iterator<Item = VariantKind> + '_ {
        self.specs().map(|(flags, order)| VariantKind::Channels {
            invert: flags.clone(),
            order,
        })
    }

    /// Computes every variant of `buffer`.
    ///
    /// Each variant is derived from `buffer` itself, never from a previous
    /// variant.
    ///
    /// # Errors
    ///
    /// Returns a channel mismatch if `buffer` is not laid out for this mode.
    pub fn variants(&self, buffer: &PixelBuffer) -> OpsResult<Vec<PixelBuffer>> {
        trace!(
            mode = %self.mode,
            width = buffer.width(),
            height = buffer.height(),
            "VariantEnumerator::variants"
        );
        let expected = self.mode.channel_count();
        if buffer.channels() != expected {
            return Err(Error::channel_mismatch(expected, buffer.channels()).into());
        }

        let mut out = Vec::with_capacity(self.len());
        for (flags, order) in self.specs() {
            let inverted = invert(buffer, flags);
            out.push(swap_channels(&inverted, Some(&order)).into_owned());
        }
        debug!(mode = %self.mode, count = out.len(), "Enumerated channel variants");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_rgb() -> PixelBuffer {
        PixelBuffer::from_data(1, 1, 3, vec![10.0, 20.0, 30.0]).unwrap()
    }

    #[test]
    fn test_counts() {
        assert_eq!(VariantEnumerator::new(ColorMode::Rgb).len(), 48);
        assert_eq!(VariantEnumerator::new(ColorMode::Cmyk).len(), 96);
        assert_eq!(VariantEnumerator::new(ColorMode::Rgb).specs().count(), 48);
    }

    #[test]
    fn test_nested_order() {
        let e = VariantEnumerator::new(ColorMode::Rgb);
        let specs: Vec<_> = e.specs().collect();
        // flags outer, permutation inner
        assert_eq!(specs[0].0, &FlagVector::none(3));
        assert_eq!(specs[5].0, &FlagVector::none(3));
        assert_eq!(specs[6].0.as_slice(), &[false, false, true]);
        assert_eq!(specs[47].0, &FlagVector::all(3));
        for (i, (_, order)) in specs.iter().enumerate() {
            assert_eq!(*order, ChannelOrder::PERMUTATIONS[i % 6]);
        }
    }

    #[test]
    fn test_rgb_values() {
        let e = VariantEnumerator::new(ColorMode::Rgb);
        let out = e.variants(&distinct_rgb()).unwrap();
        assert_eq!(out.len(), 48);
        // (---, rgb)
        assert_eq!(out[0].as_slice(), &[10.0, 20.0, 30.0]);
        // (---, bgr)
        assert_eq!(out[5].as_slice(), &[30.0, 20.0, 10.0]);
        // (--+, rgb): blue inverted
        assert_eq!(out[6].as_slice(), &[10.0, 20.0, 225.0]);
        // (+--, gbr): red inverted, then moved to the last slot
        assert_eq!(out[4 * 6 + 3].as_slice(), &[20.0, 30.0, 245.0]);
        // (+++, rgb)
        assert_eq!(out[42].as_slice(), &[245.0, 235.0, 225.0]);
    }

    #[test]
    fn test_each_variant_independent_of_previous() {
        let e = VariantEnumerator::new(ColorMode::Rgb);
        let src = distinct_rgb();
        let out = e.variants(&src).unwrap();
        // Position 0 applies no transform, even though later positions invert.
        assert_eq!(out[0], src);
        let again = e.variants(&src).unwrap();
        assert_eq!(out, again);
    }

    #[test]
    fn test_cmyk_key_never_reordered() {
        let e = VariantEnumerator::new(ColorMode::Cmyk);
        let src = PixelBuffer::from_data(1, 1, 4, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let out = e.variants(&src).unwrap();
        assert_eq!(out.len(), 96);
        for (i, (flags, _)) in e.specs().enumerate() {
            let expected_key = if flags.get(3) == Some(true) { 251.0 } else { 4.0 };
            assert_eq!(out[i].as_slice()[3], expected_key, "variant {i}");
        }
    }

    #[test]
    fn test_channel_mismatch() {
        let e = VariantEnumerator::new(ColorMode::Cmyk);
        assert!(e.variants(&distinct_rgb()).is_err());
    }

    #[test]
    fn test_kinds_match_specs() {
        let e = VariantEnumerator::new(ColorMode::Cmyk);
        let kinds: Vec<_> = e.kinds().collect();
        assert_eq!(kinds.len(), 96);
        assert_eq!(
            kinds[7],
            VariantKind::Channels {
                invert: FlagVector::new(vec![false, false, false, true]),
                order: ChannelOrder::PERMUTATIONS[1],
            }
        );
    }
}
