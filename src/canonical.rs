//! Canonical serialization for deterministic diff fingerprints.
//!
//! Serializes a diff result in a canonical, deterministic format and hashes
//! it, so two runs over the same inputs can be compared byte-for-byte
//! without retaining the full hunk lists.
//!
//! ## Determinism Guarantees
//!
//! - Stable field order: struct fields serialize in declaration order
//! - Stable hunk order: hunks serialize in ancestor order
//! - Stable segment order: candidate segments serialize in input order

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

use crate::types::DiffResult;

/// Serialize a value to canonical JSON bytes for hashing.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("canonical serialization failed")
}

/// Compute the canonical fingerprint of a diff result.
///
/// Equal diff results always fingerprint equally; a change to any hunk
/// boundary or segment changes the fingerprint.
pub fn fingerprint<T: Serialize>(diff: &DiffResult<T>) -> u64 {
    xxh64(&to_canonical_bytes(diff), 0)
}

/// Canonical fingerprint as a fixed-width hex string.
pub fn fingerprint_hex<T: Serialize>(diff: &DiffResult<T>) -> String {
    format!("{:016x}", fingerprint(diff))
}
