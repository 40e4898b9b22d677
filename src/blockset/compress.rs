//! Coordinate compression: from raw ordinates to dense marker indices.
//!
//! The normalizer never compares raw ordinates. Instead, each dimension gets a
//! sorted, deduplicated table of every corner ordinate that appears anywhere
//! on the operation stack (its "marker ordinates"), and the stack is rewritten
//! with corners expressed as indices into those tables. Grid line `m` in
//! dimension `d` corresponds to `markers[d][m]`, so the number of grid lines
//! per dimension is bounded by twice the number of operations, independent of
//! the ordinate value range.

use super::operation::{Operation, OperationKind};
use crate::ordinate::Ordinate;

/// An operation-stack entry with corners rewritten as marker indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MarkerOperation {
    pub kind: OperationKind,
    pub a: Vec<usize>,
    pub b: Vec<usize>,
}

impl MarkerOperation {
    /// The same entry restricted to dimensions `1..`, for the recursive step.
    pub fn tail(&self) -> MarkerOperation {
        MarkerOperation {
            kind: self.kind,
            a: self.a[1..].to_vec(),
            b: self.b[1..].to_vec(),
        }
    }
}

/// Collects, per dimension, the sorted deduplicated corner ordinates across
/// the whole stack.
pub(crate) fn marker_ordinates<T: Ordinate>(
    stack: &[Operation<T>],
    dimensions: usize,
) -> Vec<Vec<T>> {
    (0..dimensions)
        .map(|d| {
            let mut ordinates: Vec<T> = stack
                .iter()
                .flat_map(|op| [op.block.a()[d], op.block.b()[d]])
                .collect();
            ordinates.sort();
            ordinates.dedup();
            ordinates
        })
        .collect()
}

/// Rewrites the stack with each corner ordinate replaced by its lower-bound
/// index into the dimension's marker table.
///
/// Every corner ordinate is present in its table by construction, so the
/// lower bound is always an exact hit. Degenerate or reversed ranges map to
/// equal or reversed marker indices and simply contribute an empty interval
/// downstream; they are deliberately not rejected here.
pub(crate) fn marker_stack<T: Ordinate>(
    stack: &[Operation<T>],
    markers: &[Vec<T>],
) -> Vec<MarkerOperation> {
    let index_of = |d: usize, v: T| markers[d].partition_point(|&m| m < v);
    stack
        .iter()
        .map(|op| MarkerOperation {
            kind: op.kind,
            a: (0..markers.len())
                .map(|d| index_of(d, op.block.a()[d]))
                .collect(),
            b: (0..markers.len())
                .map(|d| index_of(d, op.block.b()[d]))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;

    fn op(kind: OperationKind, a: Vec<i64>, b: Vec<i64>) -> Operation<i64> {
        Operation::new(kind, Block::new(a, b).unwrap())
    }

    #[test]
    fn test_marker_ordinates_sorted_dedup() {
        let stack = vec![
            op(OperationKind::Add, vec![0, 5], vec![10, 5]),
            op(OperationKind::Remove, vec![10, -3], vec![2, 7]),
        ];
        let markers = marker_ordinates(&stack, 2);
        assert_eq!(markers[0], vec![0, 2, 10]);
        assert_eq!(markers[1], vec![-3, 5, 7]);
    }

    #[test]
    fn test_marker_ordinates_empty_stack() {
        let markers = marker_ordinates::<i64>(&[], 3);
        assert_eq!(markers, vec![Vec::<i64>::new(), Vec::new(), Vec::new()]);
    }

    #[test]
    fn test_marker_stack_rewrites_to_indices() {
        let stack = vec![
            op(OperationKind::Add, vec![0], vec![10]),
            op(OperationKind::Toggle, vec![5], vec![15]),
        ];
        let markers = marker_ordinates(&stack, 1);
        assert_eq!(markers[0], vec![0, 5, 10, 15]);

        let rewritten = marker_stack(&stack, &markers);
        assert_eq!(rewritten[0].a, vec![0]);
        assert_eq!(rewritten[0].b, vec![2]);
        assert_eq!(rewritten[1].a, vec![1]);
        assert_eq!(rewritten[1].b, vec![3]);
        assert_eq!(rewritten[1].kind, OperationKind::Toggle);
    }

    #[test]
    fn test_degenerate_block_maps_to_equal_indices() {
        let stack = vec![op(OperationKind::Add, vec![4], vec![4])];
        let markers = marker_ordinates(&stack, 1);
        let rewritten = marker_stack(&stack, &markers);
        assert_eq!(rewritten[0].a, rewritten[0].b);
    }

    #[test]
    fn tail_drops_leading_dimension() {
        let m = MarkerOperation {
            kind: OperationKind::Add,
            a: vec![0, 1, 2],
            b: vec![3, 4, 5],
        };
        let t = m.tail();
        assert_eq!(t.a, vec![1, 2]);
        assert_eq!(t.b, vec![4, 5]);
    }
}
