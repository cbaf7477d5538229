//! Property tests for the merge kernel invariants.
//!
//! These exercise the structural guarantees that hold for *all* inputs:
//! partition coverage, no-op and identical-edit idempotence, and the
//! agreement between the checked and unchecked merge entry points.

use proptest::collection::vec;
use proptest::prelude::*;

use nway_merge::canonical::fingerprint;
use nway_merge::text::{diff_chars, merge_chars};

// A small alphabet keeps the sequences collision-heavy, which is where the
// partitioner's resynchronization logic actually gets exercised.
const SEQ: &str = "[abz]{0,12}";

proptest! {
    /// Concatenating hunk ancestor segments rebuilds the ancestor, and the
    /// k-th candidate segments rebuild candidate k — for any input.
    #[test]
    fn prop_partition_coverage(ancestor in SEQ, candidates in vec(SEQ, 0..4)) {
        let refs: Vec<&str> = candidates.iter().map(String::as_str).collect();
        let diff = diff_chars(&ancestor, &refs);

        let rebuilt: String = diff.iter().flat_map(|h| h.ancestor.iter()).collect();
        prop_assert_eq!(rebuilt, ancestor);
        for (k, candidate) in candidates.iter().enumerate() {
            let rebuilt: String = diff.iter().flat_map(|h| h.candidates[k].iter()).collect();
            prop_assert_eq!(&rebuilt, candidate);
        }
    }

    /// Any number of unedited copies of the ancestor merges back to the
    /// ancestor, conflict-free, with every hunk stable.
    #[test]
    fn prop_noop_candidates(ancestor in SEQ, k in 0usize..6) {
        let candidates = vec![ancestor.as_str(); k];
        let diff = diff_chars(&ancestor, &candidates);

        prop_assert!(!diff.has_conflict());
        prop_assert!(diff.iter().all(|h| h.is_stable()));
        prop_assert_eq!(merge_chars(&diff), ancestor);
    }

    /// When every candidate carries the same edit, the merge reproduces
    /// that edit exactly, without conflict, for every candidate count.
    #[test]
    fn prop_identical_edits_idempotent(ancestor in SEQ, edited in SEQ, k in 1usize..6) {
        let candidates = vec![edited.as_str(); k];
        let diff = diff_chars(&ancestor, &candidates);

        prop_assert!(!diff.has_conflict());
        prop_assert_eq!(merge_chars(&diff), edited);
    }

    /// A single candidate can never conflict, and merging yields the
    /// candidate itself.
    #[test]
    fn prop_single_candidate_wins(ancestor in SEQ, candidate in SEQ) {
        let diff = diff_chars(&ancestor, &[candidate.as_str()]);

        prop_assert!(!diff.has_conflict());
        prop_assert_eq!(merge_chars(&diff), candidate);
    }

    /// `try_merge` succeeds exactly when `has_conflict` is false, and then
    /// agrees with `merge`.
    #[test]
    fn prop_try_merge_consistency(ancestor in SEQ, candidates in vec(SEQ, 0..4)) {
        let refs: Vec<&str> = candidates.iter().map(String::as_str).collect();
        let diff = diff_chars(&ancestor, &refs);

        match diff.try_merge() {
            Ok(merged) => {
                prop_assert!(!diff.has_conflict());
                prop_assert_eq!(merged, diff.merge());
            }
            Err(conflict) => {
                prop_assert!(diff.has_conflict());
                prop_assert_eq!(conflict.hunks, diff.conflicting_hunks());
            }
        }
    }

    /// Re-running the diff over the same inputs produces a byte-identical
    /// result.
    #[test]
    fn prop_diff_deterministic(ancestor in SEQ, candidates in vec(SEQ, 0..4)) {
        let refs: Vec<&str> = candidates.iter().map(String::as_str).collect();
        let d1 = diff_chars(&ancestor, &refs);
        let d2 = diff_chars(&ancestor, &refs);

        prop_assert_eq!(&d1, &d2);
        prop_assert_eq!(fingerprint(&d1), fingerprint(&d2));
    }
}
