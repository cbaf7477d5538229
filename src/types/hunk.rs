//! Hunks and diff results.
//!
//! A diff result is an ordered partition of the ancestor and of every
//! candidate into hunks. Conflict detection and merge reduction both
//! operate on this shape alone; neither needs the alignments that
//! produced it.

use serde::{Deserialize, Serialize};

/// One partition element of a diff result.
///
/// Holds the ancestor segment for a region and, for every candidate in
/// input order, the segment that aligns to it in that region.
///
/// ## Invariants
///
/// - Concatenating the `ancestor` segments of all hunks of a diff result,
///   in order, reproduces the full ancestor exactly once.
/// - Concatenating the k-th `candidates` entry across all hunks reproduces
///   candidate k exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk<T> {
    /// Segment of the ancestor covered by this hunk.
    pub ancestor: Vec<T>,
    /// One segment per candidate, in the input order of `diff`.
    pub candidates: Vec<Vec<T>>,
}

impl<T: PartialEq> Hunk<T> {
    /// True if every candidate kept this region unchanged.
    pub fn is_stable(&self) -> bool {
        self.candidates.iter().all(|c| *c == self.ancestor)
    }

    /// True if two or more candidates that both edited this region
    /// disagree on the edit.
    ///
    /// Candidates that kept the ancestor segment never conflict, and
    /// identical edits from several candidates count as one edit.
    pub fn has_conflict(&self) -> bool {
        let mut edited = self.candidates.iter().filter(|c| **c != self.ancestor);
        match edited.next() {
            None => false,
            Some(first) => edited.any(|c| c != first),
        }
    }

    /// The segment the merge reducer selects for this hunk.
    ///
    /// Stable hunks resolve to the ancestor segment; unstable hunks resolve
    /// to the first candidate segment, in input order, that differs from it
    /// (first-differing-wins). See [`DiffResult::merge`] for the policy
    /// caveat.
    pub fn resolved(&self) -> &[T] {
        self.candidates
            .iter()
            .find(|c| **c != self.ancestor)
            .unwrap_or(&self.ancestor)
    }
}

/// Conflict report produced by [`DiffResult::try_merge`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("merge conflict in {} hunk(s): {hunks:?}", .hunks.len())]
pub struct MergeConflict {
    /// Indices (into the hunk list) of the conflicting hunks.
    pub hunks: Vec<usize>,
}

/// Ordered list of hunks covering the ancestor and all candidates
/// completely and disjointly.
///
/// Produced by [`diff`](crate::diff); immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult<T> {
    hunks: Vec<Hunk<T>>,
    num_candidates: usize,
}

impl<T> DiffResult<T> {
    pub(crate) fn new(hunks: Vec<Hunk<T>>, num_candidates: usize) -> Self {
        debug_assert!(hunks.iter().all(|h| h.candidates.len() == num_candidates));
        Self {
            hunks,
            num_candidates,
        }
    }

    /// The hunks, in ancestor order.
    pub fn hunks(&self) -> &[Hunk<T>] {
        &self.hunks
    }

    /// Number of hunks.
    pub fn len(&self) -> usize {
        self.hunks.len()
    }

    /// True if the diff produced no hunks. This only happens when the
    /// ancestor and every candidate are empty; a zero-candidate diff still
    /// carries one hunk for the ancestor.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// Number of candidates this diff was computed over.
    pub fn num_candidates(&self) -> usize {
        self.num_candidates
    }

    /// Iterate over the hunks.
    pub fn iter(&self) -> std::slice::Iter<'_, Hunk<T>> {
        self.hunks.iter()
    }
}

impl<T: PartialEq> DiffResult<T> {
    /// True if any hunk carries two or more disagreeing edits.
    pub fn has_conflict(&self) -> bool {
        self.hunks.iter().any(Hunk::has_conflict)
    }

    /// Indices of the conflicting hunks, in order.
    pub fn conflicting_hunks(&self) -> Vec<usize> {
        self.hunks
            .iter()
            .enumerate()
            .filter(|(_, h)| h.has_conflict())
            .map(|(i, _)| i)
            .collect()
    }
}

impl<T: Clone + PartialEq> DiffResult<T> {
    /// Reduce the hunks to a single merged sequence.
    ///
    /// Per hunk: the ancestor segment if all candidates kept it unchanged,
    /// otherwise the first differing candidate segment in input order.
    ///
    /// This is first-differing-wins, **not** a conflict-aware merge: a
    /// conflicting hunk is silently resolved in favor of its first edited
    /// candidate. Callers that must not lose edits should call
    /// [`has_conflict`](Self::has_conflict) first, or use
    /// [`try_merge`](Self::try_merge).
    pub fn merge(&self) -> Vec<T> {
        let mut out = Vec::new();
        for hunk in &self.hunks {
            out.extend_from_slice(hunk.resolved());
        }
        out
    }

    /// Conflict-checked merge.
    ///
    /// Returns the merged sequence only when no hunk conflicts; otherwise
    /// returns a [`MergeConflict`] naming the conflicting hunks.
    pub fn try_merge(&self) -> Result<Vec<T>, MergeConflict> {
        let conflicts = self.conflicting_hunks();
        if conflicts.is_empty() {
            Ok(self.merge())
        } else {
            Err(MergeConflict { hunks: conflicts })
        }
    }
}

impl<'a, T> IntoIterator for &'a DiffResult<T> {
    type Item = &'a Hunk<T>;
    type IntoIter = std::slice::Iter<'a, Hunk<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hunks.iter()
    }
}
