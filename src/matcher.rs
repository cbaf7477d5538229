//! Longest-common-subsequence matcher.
//!
//! Implements Myers' O(ND) difference algorithm (E. Myers, 1986, "An O(ND)
//! Difference Algorithm and Its Variations"): a greedy search over the edit
//! graph of (ancestor position, candidate position), tracking for each edit
//! distance `d` and diagonal `k` the furthest-reaching x-coordinate, with a
//! greedy extension along matching runs after every step.
//!
//! The frontier entering each distance level is snapshotted into an
//! append-only list. Once the search reaches the far corner, the matched
//! pairs are recovered by a read-only walk back through those snapshots, one
//! level at a time. This avoids both the O(NM) table of the textbook LCS
//! and any mutate-in-place state restoration during the backtrace.
//!
//! ## Complexity
//!
//! O((N + M) * D) time and O(D^2) snapshot memory, where D is the edit
//! distance. D is small when the sequences are similar, the common case
//! for merges.

use tracing::trace;

use crate::types::Alignment;

/// Compute the alignment between `ancestor` and `candidate`.
///
/// The result maps each ancestor position to the candidate position it
/// pairs with in a longest common subsequence, or to nothing. Either input
/// may be empty; the function never fails.
pub fn align<T: PartialEq>(ancestor: &[T], candidate: &[T]) -> Alignment {
    let n = ancestor.len();
    let m = candidate.len();
    let mut alignment = Alignment::unmatched(n);
    if n == 0 || m == 0 {
        return alignment;
    }

    let ni = n as isize;
    let mi = m as isize;
    let max = n + m;
    // Furthest-reaching x per diagonal k, stored at index offset + k.
    // The extra slot on each side absorbs the k-1/k+1 reads at |k| = d.
    let offset = (max + 1) as isize;
    let vi = |k: isize| (offset + k) as usize;
    let mut v = vec![0isize; 2 * max + 3];

    // snapshots[d] is the frontier entering level d (the level d-1 state),
    // windowed to diagonals [-d, d].
    let mut snapshots: Vec<Vec<isize>> = Vec::new();

    'search: for d in 0..=max {
        let di = d as isize;
        snapshots.push(v[vi(-di)..=vi(di)].to_vec());

        let mut k = -di;
        while k <= di {
            let mut x = if k == -di || (k != di && v[vi(k - 1)] < v[vi(k + 1)]) {
                // Down move: extend the path on diagonal k+1.
                v[vi(k + 1)]
            } else {
                // Right move: extend the path on diagonal k-1.
                v[vi(k - 1)] + 1
            };
            let mut y = x - k;

            // Greedy extension along the matching run.
            while x < ni && y >= 0 && y < mi && ancestor[x as usize] == candidate[y as usize] {
                x += 1;
                y += 1;
            }
            v[vi(k)] = x;

            if x >= ni && y >= mi {
                trace!(edit_distance = d, "edit graph search reached far corner");
                break 'search;
            }
            k += 2;
        }
    }

    // Backtrace: walk the snapshot list from the deepest level to level 1,
    // undoing one non-diagonal move per level and recording the diagonal
    // (matching) run that preceded it.
    let mut x = ni;
    let mut y = mi;
    for d in (1..snapshots.len()).rev() {
        let di = d as isize;
        let snap = &snapshots[d];
        let si = |k: isize| (k + di) as usize;

        let k = x - y;
        let prev_k = if k == -di || (k != di && snap[si(k - 1)] < snap[si(k + 1)]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = snap[si(prev_k)];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            alignment.set(x as usize, y as usize);
        }
        x = prev_x;
        y = prev_y;
    }
    // Level 0 is a pure diagonal run back to the origin.
    while x > 0 && y > 0 {
        x -= 1;
        y -= 1;
        alignment.set(x as usize, y as usize);
    }

    alignment
}
