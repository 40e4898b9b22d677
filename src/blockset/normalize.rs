//! The recursive normalizer: collapses a marker stack into a canonical set of
//! pairwise-disjoint, add-only marker blocks.
//!
//! The sweep works one dimension at a time. For each marker position `m` of
//! the current dimension it computes the *cross-section*: the normalized
//! lower-dimensional block set induced by the stack entries whose interval
//! `[a_0, b_0)` contains `m`, restricted to their remaining coordinates. A
//! block is emitted only when the cross-section changes from one marker to the
//! next, so any run of markers with an identical cross-section becomes a
//! single maximal extent in the current dimension.
//!
//! Cross-sections are represented uniformly as `BTreeSet<MarkerBlock>` at
//! every level. At the zero-dimensional base, "present" is the singleton set
//! holding the empty block and "absent" is the empty set, which makes the
//! change test plain value equality regardless of dimension.

use std::collections::BTreeSet;

use super::compress::MarkerOperation;
use super::operation::OperationKind;

/// A block in marker-index space: one corner pair of marker indices.
pub(crate) type MarkerBlock = (Vec<usize>, Vec<usize>);

/// Reduces `stack` to the canonical disjoint decomposition of the point set
/// it encodes, in marker-index space.
///
/// `marker_lens[d]` is the marker count of dimension `d`; the slice shrinks
/// by one per recursion level, and the empty slice is the presence base case.
pub(crate) fn normalize(
    stack: &[MarkerOperation],
    marker_lens: &[usize],
) -> BTreeSet<MarkerBlock> {
    let Some(&count) = marker_lens.first() else {
        return presence(stack);
    };

    let mut result = BTreeSet::new();
    let mut previous: BTreeSet<MarkerBlock> = BTreeSet::new();
    let mut run_start = 0usize;

    for m in 0..count {
        let filtered: Vec<MarkerOperation> = stack
            .iter()
            .filter(|op| op.a[0] <= m && m < op.b[0])
            .map(MarkerOperation::tail)
            .collect();
        let current = normalize(&filtered, &marker_lens[1..]);
        if current != previous {
            flush_run(&mut result, &previous, run_start, m);
            run_start = m;
            previous = current;
        }
    }
    // No entry extends past the last marker, so the pending run is empty by
    // here except when the dimension has no markers at all.
    flush_run(&mut result, &previous, run_start, count);

    result
}

/// Emits the just-ended run `[run_start, run_end)` of the current dimension,
/// prepended to every sub-block of its cross-section.
fn flush_run(
    result: &mut BTreeSet<MarkerBlock>,
    cross_section: &BTreeSet<MarkerBlock>,
    run_start: usize,
    run_end: usize,
) {
    for (sub_a, sub_b) in cross_section {
        let mut a = Vec::with_capacity(sub_a.len() + 1);
        a.push(run_start);
        a.extend_from_slice(sub_a);
        let mut b = Vec::with_capacity(sub_b.len() + 1);
        b.push(run_end);
        b.extend_from_slice(sub_b);
        result.insert((a, b));
    }
}

/// Zero-dimensional base case: decides point presence by scanning the filtered
/// stack in reverse insertion order.
///
/// `Add` and `Remove` are absolute and terminate the scan; `Toggle` flips the
/// outcome and continues, because its effect is relative to whatever held
/// before it. An exhausted scan means absent.
fn presence(stack: &[MarkerOperation]) -> BTreeSet<MarkerBlock> {
    let mut flipped = false;
    for op in stack.iter().rev() {
        match op.kind {
            OperationKind::Add => return presence_set(!flipped),
            OperationKind::Remove => return presence_set(flipped),
            OperationKind::Toggle => flipped = !flipped,
        }
    }
    presence_set(flipped)
}

fn presence_set(present: bool) -> BTreeSet<MarkerBlock> {
    let mut set = BTreeSet::new();
    if present {
        set.insert((Vec::new(), Vec::new()));
    }
    set
}
