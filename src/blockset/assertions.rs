//! Debug-only invariant checks for normalizer output.

use std::collections::BTreeSet;

use super::normalize::MarkerBlock;

/// Returns true if no two blocks in the set share a point.
///
/// Two half-open boxes intersect iff the overlap `[max(a), min(b))` is
/// non-empty in every dimension; empty blocks intersect nothing.
pub fn is_disjoint(blocks: &BTreeSet<MarkerBlock>) -> bool {
    let blocks: Vec<&MarkerBlock> = blocks.iter().collect();
    for (i, (a1, b1)) in blocks.iter().enumerate() {
        for (a2, b2) in &blocks[i + 1..] {
            let overlaps = a1
                .iter()
                .zip(b1)
                .zip(a2.iter().zip(b2))
                .all(|((&lo1, &hi1), (&lo2, &hi2))| lo1.max(lo2) < hi1.min(hi2));
            if overlaps {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(&[usize], &[usize])]) -> BTreeSet<MarkerBlock> {
        pairs
            .iter()
            .map(|(a, b)| (a.to_vec(), b.to_vec()))
            .collect()
    }

    #[test]
    fn disjoint_blocks_pass() {
        assert!(is_disjoint(&set(&[(&[0, 0], &[1, 1]), (&[1, 0], &[2, 1])])));
    }

    #[test]
    fn overlapping_blocks_fail() {
        assert!(!is_disjoint(&set(&[(&[0, 0], &[2, 2]), (&[1, 1], &[3, 3])])));
    }

    #[test]
    fn empty_block_overlaps_nothing() {
        assert!(is_disjoint(&set(&[(&[0, 0], &[2, 0]), (&[0, 0], &[2, 2])])));
    }
}
