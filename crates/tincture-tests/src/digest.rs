//! SHA-256 digests for determinism checks.
//!
//! Buffers are hashed over the exact bit patterns of their `f64` samples
//! (plus shape), so any drift at all between two runs changes the digest.

use sha2::{Digest, Sha256};
use tincture_core::PixelBuffer;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Digest of raw archive bytes.
pub fn archive_digest(bytes: &[u8]) -> String {
    hex(&Sha256::digest(bytes))
}

/// Digest of an ordered sequence of buffers.
pub fn buffers_digest(buffers: &[PixelBuffer]) -> String {
    let mut hasher = Sha256::new();
    for buf in buffers {
        hasher.update(buf.width().to_le_bytes());
        hasher.update(buf.height().to_le_bytes());
        hasher.update((buf.channels() as u64).to_le_bytes());
        for v in buf.as_slice() {
            hasher.update(v.to_bits().to_le_bytes());
        }
    }
    hex(&hasher.finalize())
}

#[test]
fn test_digest_sensitive_to_order() {
    let a = PixelBuffer::filled(1, 1, 3, 1.0);
    let b = PixelBuffer::filled(1, 1, 3, 2.0);
    assert_ne!(
        buffers_digest(&[a.clone(), b.clone()]),
        buffers_digest(&[b, a])
    );
    assert_eq!(archive_digest(b"abc").len(), 64);
}
