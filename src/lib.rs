//! # nway-merge
//!
//! Generalized n-way diff3 over arbitrary comparable sequences.
//!
//! Given a common ancestor sequence and any number of derived candidate
//! sequences, the kernel answers one question:
//!
//! > Which regions did everyone keep, which did someone edit, and do any
//! > of those edits disagree?
//!
//! ## Core Contract
//!
//! 1. Align each candidate against the ancestor with an O(ND) longest
//!    common subsequence matcher
//! 2. Walk all alignments in lockstep and partition everything into
//!    stable and unstable **hunks**
//! 3. Reduce the hunks to a conflict verdict, or to a single merged
//!    sequence
//!
//! ## Architecture
//!
//! ```text
//! ancestor + candidates → Matcher (per candidate) → Partitioner
//!                                                        ↓
//!                                    DiffResult → {has_conflict, merge}
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Every operation is a pure in-memory transformation: same inputs,
//!   identical hunks, verdicts and merges
//! - Hunk order is ancestor order; candidate segment order is input order
//! - The concatenated hunks reproduce the ancestor and every candidate
//!   exactly once (a partition, not an overlay)
//!
//! ## Merge Policy
//!
//! [`DiffResult::merge`] resolves each unstable hunk to its **first**
//! differing candidate, silently, even when candidates disagree. Check
//! [`DiffResult::has_conflict`] first, or use [`DiffResult::try_merge`],
//! when losing a disagreeing edit is not acceptable.
//!
//! ## Example
//!
//! ```
//! use nway_merge::text::{diff_chars, merge_chars};
//!
//! let diff = diff_chars("hello world", &["hxxllo world", "hello wyyrld"]);
//! assert!(!diff.has_conflict());
//! assert_eq!(merge_chars(&diff), "hxxllo wyyrld");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod matcher;
pub mod partition;
pub mod text;
pub mod types;

// Re-exports
pub use canonical::{fingerprint, fingerprint_hex, to_canonical_bytes};
pub use matcher::align;
pub use partition::diff;
pub use types::{Alignment, DiffResult, Hunk, MergeConflict};

/// True if any hunk of `diff` carries two or more disagreeing edits.
///
/// Free-function form of [`DiffResult::has_conflict`].
pub fn has_conflict<T: PartialEq>(diff: &DiffResult<T>) -> bool {
    diff.has_conflict()
}

/// Reduce `diff` to a single merged sequence (first-differing-wins).
///
/// Free-function form of [`DiffResult::merge`]; see the merge policy note
/// in the crate docs.
pub fn merge<T: Clone + PartialEq>(diff: &DiffResult<T>) -> Vec<T> {
    diff.merge()
}
