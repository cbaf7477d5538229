//! n-way hunk partitioner.
//!
//! Walks one alignment per candidate in lockstep against a shared ancestor
//! and cuts the whole input into an ordered list of hunks: stable regions
//! every candidate left untouched, and unstable regions where at least one
//! candidate edited. This is the diff3 partitioning scheme generalized to
//! any number of candidates.
//!
//! The scan is an explicit state machine over an ancestor cursor and one
//! consumption cursor per candidate. Two probes alternate:
//!
//! 1. `probe_stable` — count how far every candidate stays on the diagonal
//!    relative to its own cursor; a positive count becomes a stable hunk.
//! 2. `probe_resync` — otherwise, find the nearest ancestor position at
//!    which every alignment is defined; the region up to it becomes an
//!    unstable hunk and all cursors jump to their aligned positions.
//!
//! When no further resynchronization point exists the loop stops and a
//! final tail hunk pairs whatever remains of the ancestor with each
//! candidate's remaining tail.
//!
//! All cursor movement is monotone, and the resync probe only accepts
//! positions where every alignment is defined, so no cursor can ever pass
//! its sequence length. An index violation here is a bug, not an input
//! error.

use tracing::debug;

use crate::matcher::align;
use crate::types::{Alignment, DiffResult, Hunk};

/// Per-candidate scan state: the source sequence, how much of it has been
/// consumed into hunks, and its alignment against the ancestor.
struct Candidate<'a, T> {
    seq: &'a [T],
    consumed: usize,
    alignment: Alignment,
}

impl<'a, T> Candidate<'a, T> {
    /// True if the alignment puts `ancestor_pos` exactly `lookahead`
    /// elements past the current cursor, i.e. the candidate is on the
    /// diagonal relative to its own cursor.
    fn on_diagonal(&self, ancestor_pos: usize, lookahead: usize) -> bool {
        self.alignment.get(ancestor_pos + lookahead) == Some(self.consumed + lookahead)
    }
}

/// Scan state for one diff invocation.
struct Partitioner<'a, T> {
    ancestor: &'a [T],
    pos: usize,
    candidates: Vec<Candidate<'a, T>>,
    hunks: Vec<Hunk<T>>,
}

impl<'a, T: Clone + PartialEq> Partitioner<'a, T> {
    fn new(ancestor: &'a [T], candidates: Vec<Candidate<'a, T>>) -> Self {
        Self {
            ancestor,
            pos: 0,
            candidates,
            hunks: Vec::new(),
        }
    }

    /// Number of consecutive ancestor positions, starting at the cursor,
    /// on which every candidate sits on its diagonal.
    fn probe_stable(&self) -> usize {
        let mut i = 0;
        while self.pos + i < self.ancestor.len()
            && self.candidates.iter().all(|c| c.on_diagonal(self.pos, i))
        {
            i += 1;
        }
        i
    }

    /// Nearest ancestor position at or after the cursor where every
    /// candidate's alignment is defined, if one exists.
    ///
    /// The scan may accept the cursor position itself: all alignments can
    /// be defined there while some candidate sits off its diagonal, which
    /// is a pure insertion in front of a common match.
    fn probe_resync(&self) -> Option<usize> {
        (self.pos..self.ancestor.len())
            .find(|&p| self.candidates.iter().all(|c| c.alignment.get(p).is_some()))
    }

    /// Emit a stable hunk of length `i` and advance every cursor by `i`.
    fn emit_stable(&mut self, i: usize) {
        let ancestor = self.ancestor[self.pos..self.pos + i].to_vec();
        let candidates = self
            .candidates
            .iter_mut()
            .map(|c| {
                let seg = c.seq[c.consumed..c.consumed + i].to_vec();
                c.consumed += i;
                seg
            })
            .collect();
        self.hunks.push(Hunk { ancestor, candidates });
        self.pos += i;
    }

    /// Emit an unstable hunk covering the ancestor up to the resync point
    /// `p` and, per candidate, everything up to its position aligned at `p`.
    fn emit_resync(&mut self, p: usize) {
        let ancestor = self.ancestor[self.pos..p].to_vec();
        let candidates = self
            .candidates
            .iter_mut()
            .map(|c| {
                let target = c.alignment.get(p).expect("resync point must be aligned");
                debug_assert!(target >= c.consumed, "cursor moved backwards");
                let seg = c.seq[c.consumed..target].to_vec();
                c.consumed = target;
                seg
            })
            .collect();
        self.hunks.push(Hunk { ancestor, candidates });
        self.pos = p;
    }

    /// Pair the remaining ancestor tail with each candidate's remaining
    /// tail, if anything is left anywhere.
    fn flush_tail(&mut self) {
        let unconsumed = self.candidates.iter().any(|c| c.consumed < c.seq.len());
        if self.pos < self.ancestor.len() || unconsumed {
            let ancestor = self.ancestor[self.pos..].to_vec();
            let candidates = self
                .candidates
                .iter_mut()
                .map(|c| {
                    let seg = c.seq[c.consumed..].to_vec();
                    c.consumed = c.seq.len();
                    seg
                })
                .collect();
            self.hunks.push(Hunk { ancestor, candidates });
            self.pos = self.ancestor.len();
        }
    }

    fn run(mut self) -> Vec<Hunk<T>> {
        loop {
            let i = self.probe_stable();
            if i > 0 {
                self.emit_stable(i);
            } else {
                match self.probe_resync() {
                    Some(p) => self.emit_resync(p),
                    None => break,
                }
            }
        }
        self.flush_tail();

        debug_assert_eq!(self.pos, self.ancestor.len(), "ancestor not fully covered");
        debug_assert!(
            self.candidates.iter().all(|c| c.consumed == c.seq.len()),
            "candidate not fully covered"
        );
        self.hunks
    }
}

/// Partition `ancestor` and `candidates` into an ordered hunk list.
///
/// One alignment is computed per candidate via [`align`](crate::align),
/// then all alignments are walked in lockstep. The result covers the
/// ancestor and every candidate completely and disjointly.
///
/// Never fails: empty sequences, zero-length candidates and zero
/// candidates all produce well-defined results. With zero candidates the
/// result is a single hunk carrying the whole ancestor and no candidate
/// segments.
pub fn diff<T, S>(ancestor: &[T], candidates: &[S]) -> DiffResult<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    debug!(
        ancestor_len = ancestor.len(),
        num_candidates = candidates.len(),
        "partitioning"
    );

    if candidates.is_empty() {
        let hunk = Hunk {
            ancestor: ancestor.to_vec(),
            candidates: Vec::new(),
        };
        return DiffResult::new(vec![hunk], 0);
    }

    let states = candidates
        .iter()
        .map(|c| {
            let seq = c.as_ref();
            Candidate {
                seq,
                consumed: 0,
                alignment: align(ancestor, seq),
            }
        })
        .collect();

    let hunks = Partitioner::new(ancestor, states).run();
    debug!(hunks = hunks.len(), "partition complete");
    DiffResult::new(hunks, candidates.len())
}
