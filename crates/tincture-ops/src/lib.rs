//! # tincture-ops
//!
//! Color-channel variant generation.
//!
//! # Modules
//!
//! - [`transform`] - Per-channel inversion and chromatic reordering
//! - [`enumerate`] - Every (inversion flags, channel order) pair of a mode
//! - [`diversify`] - Full variant set for a decoded image
//! - [`pipeline`] - Encoded image bytes to archive bytes
//!
//! # Example
//!
//! ```rust,ignore
//! use tincture_ops::{diversify_bytes, DiversifyOptions};
//!
//! let zip = diversify_bytes(&uploaded, &DiversifyOptions::default())?;
//! ```
//!
//! Every call is self-contained: buffers are created per call and dropped
//! once packaged, so concurrent callers never share state.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod diversify;
pub mod enumerate;
pub mod pipeline;
pub mod transform;

pub use diversify::{diversify, variant_plan, VariantSet};
pub use enumerate::VariantEnumerator;
pub use error::{OpsError, OpsResult};
pub use pipeline::{diversify_bytes, DiversifyOptions};
