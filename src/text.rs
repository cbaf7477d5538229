//! Text adapters over the sequence core.
//!
//! The kernel itself is agnostic to what its elements are; this module
//! supplies the two common framings for text — characters and lines —
//! plus conflict-marker rendering for human consumption.

use crate::partition::diff;
use crate::types::DiffResult;

/// Diff a string against candidate strings, character by character.
pub fn diff_chars(ancestor: &str, candidates: &[&str]) -> DiffResult<char> {
    let ancestor: Vec<char> = ancestor.chars().collect();
    let candidates: Vec<Vec<char>> = candidates.iter().map(|c| c.chars().collect()).collect();
    diff(&ancestor, &candidates)
}

/// Merge a character diff back into a string (first-differing-wins; see
/// [`DiffResult::merge`]).
pub fn merge_chars(diff: &DiffResult<char>) -> String {
    diff.merge().into_iter().collect()
}

/// Split text into owned lines, without terminators.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

/// Diff a text against candidate texts, line by line.
pub fn diff_lines(ancestor: &str, candidates: &[&str]) -> DiffResult<String> {
    let ancestor = split_lines(ancestor);
    let candidates: Vec<Vec<String>> = candidates.iter().map(|c| split_lines(c)).collect();
    diff(&ancestor, &candidates)
}

/// Merge a line diff back into a text (first-differing-wins; see
/// [`DiffResult::merge`]). Non-empty output carries a trailing newline.
pub fn merge_lines(diff: &DiffResult<String>) -> String {
    join_lines(&diff.merge())
}

/// Render a line diff as merged text with standard conflict markers.
///
/// Clean hunks are resolved exactly as [`DiffResult::merge`] would. For a
/// conflicting hunk, each distinct edited segment is emitted as its own
/// block inside a `<<<<<<<` / `=======` / `>>>>>>>` frame, with the
/// ancestor segment after the first block behind a `|||||||` marker:
///
/// ```text
/// <<<<<<< candidate 1
/// their lines
/// ||||||| ancestor
/// original lines
/// =======
/// other lines
/// >>>>>>> candidate 3
/// ```
///
/// `labels` names the candidates in input order; missing entries fall back
/// to `candidate k` (1-based).
pub fn render_merge(diff: &DiffResult<String>, labels: &[&str]) -> String {
    let label = |k: usize| -> String {
        labels
            .get(k)
            .map(|l| (*l).to_owned())
            .unwrap_or_else(|| format!("candidate {}", k + 1))
    };

    let mut out: Vec<String> = Vec::new();
    for hunk in diff {
        if !hunk.has_conflict() {
            out.extend_from_slice(hunk.resolved());
            continue;
        }

        // Distinct edited segments, keyed by the first candidate that
        // produced each, in input order.
        let mut blocks: Vec<(usize, &[String])> = Vec::new();
        for (k, seg) in hunk.candidates.iter().enumerate() {
            if *seg != hunk.ancestor && !blocks.iter().any(|(_, b)| *b == seg.as_slice()) {
                blocks.push((k, seg));
            }
        }

        let (first_k, first_seg) = blocks[0];
        let (last_k, _) = blocks[blocks.len() - 1];

        out.push(format!("<<<<<<< {}", label(first_k)));
        out.extend_from_slice(first_seg);
        out.push("||||||| ancestor".to_owned());
        out.extend_from_slice(&hunk.ancestor);
        for (_, seg) in &blocks[1..] {
            out.push("=======".to_owned());
            out.extend_from_slice(seg);
        }
        out.push(format!(">>>>>>> {}", label(last_k)));
    }
    join_lines(&out)
}

fn join_lines(lines: &[String]) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        let mut s = lines.join("\n");
        s.push('\n');
        s
    }
}
