//! Inversion flags and channel orders.
//!
//! These two small types fully describe one channel transform:
//! a [`FlagVector`] says which channels are inverted, a [`ChannelOrder`]
//! says where each of the three chromatic channels ends up afterwards.

use crate::{ColorMode, Error, Result};
use std::fmt;

/// One inversion flag per channel of the active mode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlagVector(Vec<bool>);

impl FlagVector {
    /// Wraps explicit flags.
    pub fn new(flags: Vec<bool>) -> Self {
        Self(flags)
    }

    /// All `n` channels inverted.
    pub fn all(n: usize) -> Self {
        Self(vec![true; n])
    }

    /// No channel inverted.
    pub fn none(n: usize) -> Self {
        Self(vec![false; n])
    }

    /// Every flag vector of length `n`, in binary-counting order.
    ///
    /// Channel 0 varies slowest and channel `n - 1` fastest, `false` before
    /// `true`, which is the order of nested loops with channel 0 outermost.
    ///
    /// ```rust
    /// use tincture_core::FlagVector;
    ///
    /// let all = FlagVector::enumerate(3);
    /// assert_eq!(all.len(), 8);
    /// assert_eq!(all[1].as_slice(), &[false, false, true]);
    /// assert_eq!(all[4].as_slice(), &[true, false, false]);
    /// ```
    pub fn enumerate(n: usize) -> Vec<Self> {
        (0..1usize << n)
            .map(|i| Self((0..n).map(|bit| (i >> (n - 1 - bit)) & 1 == 1).collect()))
            .collect()
    }

    /// Number of flags.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when there are no flags at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flag for channel `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<bool> {
        self.0.get(i).copied()
    }

    /// Flags as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl fmt::Display for FlagVector {
    /// `+` for an inverted channel, `-` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &flag in &self.0 {
            f.write_str(if flag { "+" } else { "-" })?;
        }
        Ok(())
    }
}

/// Destination-ordered source indices for the three chromatic channels.
///
/// `ChannelOrder([2, 1, 0])` on RGB puts blue in slot 0, green in slot 1 and
/// red in slot 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelOrder([usize; 3]);

impl ChannelOrder {
    /// Every order, in permutation-generation order over `[0, 1, 2]`.
    pub const PERMUTATIONS: [ChannelOrder; 6] = [
        ChannelOrder([0, 1, 2]),
        ChannelOrder([0, 2, 1]),
        ChannelOrder([1, 0, 2]),
        ChannelOrder([1, 2, 0]),
        ChannelOrder([2, 0, 1]),
        ChannelOrder([2, 1, 0]),
    ];

    /// Creates an order from source indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelOrder`] unless `indices` is a
    /// permutation of `0, 1, 2`.
    pub fn new(indices: [usize; 3]) -> Result<Self> {
        let mut seen = [false; 3];
        for &i in &indices {
            if i > 2 || seen[i] {
                return Err(Error::InvalidChannelOrder(format!("{:?}", indices)));
            }
            seen[i] = true;
        }
        Ok(Self(indices))
    }

    /// Leaves every channel where it is.
    #[inline]
    pub const fn identity() -> Self {
        Self([0, 1, 2])
    }

    /// The six orders; see [`ChannelOrder::PERMUTATIONS`].
    #[inline]
    pub fn permutations() -> [ChannelOrder; 6] {
        Self::PERMUTATIONS
    }

    /// Parses a label string such as `"bgr"` or `"myc"` for the given mode.
    pub fn parse(labels: &str, mode: ColorMode) -> Result<Self> {
        let chromatic = mode.chromatic_labels();
        let chars: Vec<char> = labels.trim().to_lowercase().chars().collect();
        if chars.len() != 3 {
            return Err(Error::InvalidChannelOrder(labels.to_string()));
        }
        let mut indices = [0usize; 3];
        for (slot, ch) in chars.iter().enumerate() {
            indices[slot] = chromatic
                .iter()
                .position(|c| c == ch)
                .ok_or_else(|| Error::InvalidChannelOrder(labels.to_string()))?;
        }
        Self::new(indices).map_err(|_| Error::InvalidChannelOrder(labels.to_string()))
    }

    /// Source channel index for destination slot `slot`.
    #[inline]
    pub fn source(&self, slot: usize) -> usize {
        self.0[slot]
    }

    /// Source indices in destination order.
    #[inline]
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// `true` for `[0, 1, 2]`.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.0 == [0, 1, 2]
    }

    /// Renders the order with the mode's labels, e.g. `"gbr"`.
    pub fn label(&self, mode: ColorMode) -> String {
        let chromatic = mode.chromatic_labels();
        self.0.iter().map(|&i| chromatic[i]).collect()
    }
}

impl Default for ChannelOrder {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_binary_counting() {
        let flags = FlagVector::enumerate(3);
        let rendered: Vec<String> = flags.iter().map(|f| f.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["---", "--+", "-+-", "-++", "+--", "+-+", "++-", "+++"]
        );
    }

    #[test]
    fn test_enumerate_cmyk() {
        let flags = FlagVector::enumerate(4);
        assert_eq!(flags.len(), 16);
        assert_eq!(flags[0], FlagVector::none(4));
        assert_eq!(flags[1].as_slice(), &[false, false, false, true]);
        assert_eq!(flags[15], FlagVector::all(4));
    }

    #[test]
    fn test_permutation_order() {
        let labels: Vec<String> = ChannelOrder::permutations()
            .iter()
            .map(|o| o.label(ColorMode::Rgb))
            .collect();
        assert_eq!(labels, vec!["rgb", "rbg", "grb", "gbr", "brg", "bgr"]);
        assert!(ChannelOrder::permutations()[0].is_identity());
    }

    #[test]
    fn test_parse_order() {
        let order = ChannelOrder::parse("BGR", ColorMode::Rgb).unwrap();
        assert_eq!(order.indices(), [2, 1, 0]);
        let order = ChannelOrder::parse("myc", ColorMode::Cmyk).unwrap();
        assert_eq!(order.indices(), [1, 2, 0]);
        assert_eq!(order.label(ColorMode::Cmyk), "myc");
    }

    #[test]
    fn test_parse_order_rejects() {
        for bad in ["rrg", "rg", "rgbk", "cmy", "xyz"] {
            assert!(
                ChannelOrder::parse(bad, ColorMode::Rgb).is_err(),
                "{bad} should be rejected"
            );
        }
        // The key channel never takes part in reordering.
        assert!(ChannelOrder::parse("cmk", ColorMode::Cmyk).is_err());
    }

    #[test]
    fn test_new_rejects_repeats() {
        assert!(ChannelOrder::new([0, 0, 1]).is_err());
        assert!(ChannelOrder::new([0, 1, 3]).is_err());
        assert!(ChannelOrder::new([1, 2, 0]).is_ok());
    }
}
