//! Position alignment between an ancestor and one candidate.

use serde::{Deserialize, Serialize};

/// Alignment between an ancestor sequence and one candidate sequence.
///
/// For every ancestor position the alignment records either the candidate
/// position it corresponds to in a longest common subsequence, or nothing.
/// The mapping is dense: one slot per ancestor position, so lookups are O(1)
/// and "no match" is an explicit state rather than a missing key.
///
/// ## Invariants
///
/// - If position `i` maps to `j`, then `ancestor[i] == candidate[j]`.
/// - The mapping is strictly increasing in `i` wherever defined (it encodes
///   a common subsequence, not an arbitrary matching).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    matches: Vec<Option<usize>>,
}

impl Alignment {
    /// Create an alignment with no matches, sized to the ancestor length.
    pub fn unmatched(ancestor_len: usize) -> Self {
        Self {
            matches: vec![None; ancestor_len],
        }
    }

    /// Record a match: ancestor position `i` corresponds to candidate
    /// position `j`.
    pub(crate) fn set(&mut self, i: usize, j: usize) {
        debug_assert!(self.matches[i].is_none(), "position matched twice");
        self.matches[i] = Some(j);
    }

    /// Candidate position aligned to ancestor position `i`, if any.
    ///
    /// Positions at or past the ancestor length report no match.
    pub fn get(&self, i: usize) -> Option<usize> {
        self.matches.get(i).copied().flatten()
    }

    /// Length of the ancestor this alignment was built for.
    pub fn ancestor_len(&self) -> usize {
        self.matches.len()
    }

    /// Number of matched positions, i.e. the LCS length.
    pub fn matched_len(&self) -> usize {
        self.matches.iter().filter(|m| m.is_some()).count()
    }

    /// Iterate over `(ancestor_pos, candidate_pos)` matched pairs in order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.matches
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.map(|j| (i, j)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_is_empty() {
        let a = Alignment::unmatched(4);
        assert_eq!(a.ancestor_len(), 4);
        assert_eq!(a.matched_len(), 0);
        assert_eq!(a.get(0), None);
        assert_eq!(a.get(3), None);
    }

    #[test]
    fn test_out_of_range_lookup_is_none() {
        let a = Alignment::unmatched(2);
        assert_eq!(a.get(2), None);
        assert_eq!(a.get(100), None);
    }

    #[test]
    fn test_set_and_pairs() {
        let mut a = Alignment::unmatched(5);
        a.set(1, 0);
        a.set(3, 2);
        assert_eq!(a.get(1), Some(0));
        assert_eq!(a.get(2), None);
        assert_eq!(a.matched_len(), 2);
        assert_eq!(a.pairs().collect::<Vec<_>>(), vec![(1, 0), (3, 2)]);
    }
}
