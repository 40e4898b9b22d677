use crate::block::Block;
use crate::ordinate::Ordinate;

/// The three edit kinds recorded on the operation stack.
///
/// `Add` and `Remove` are absolute (last write wins at any given point);
/// `Toggle` is relative and composes, so an even number of overlapping
/// toggles cancels out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OperationKind {
    Add,
    Remove,
    Toggle,
}

/// One entry of the operation stack: an edit kind paired with the block it
/// applies to. Stack order is semantically significant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operation<T: Ordinate> {
    pub kind: OperationKind,
    pub block: Block<T>,
}

impl<T: Ordinate> Operation<T> {
    pub fn new(kind: OperationKind, block: Block<T>) -> Self {
        Self { kind, block }
    }
}
