//! End-to-end tests for the tincture crates.
//!
//! These tests drive the whole path (encoded bytes -> variant set -> archive)
//! and check the archive layout, pixel contents and run-to-run determinism.

#[cfg(test)]
mod digest;
