//! The [`BlockSet`] facade over the operation stack and the normalizer.

use super::assertions;
use super::compress::{marker_ordinates, marker_stack};
use super::normalize::normalize;
use super::operation::{Operation, OperationKind};
use crate::block::{Block, BlockError};
use crate::ordinate::Ordinate;

/// An arbitrary union of axis-aligned half-open blocks, built through
/// add / remove / toggle edits.
///
/// Edits are recorded on an ordered operation stack; later operations take
/// precedence where blocks overlap. Reading through [`blocks`](Self::blocks)
/// or [`block_tuples`](Self::block_tuples) first *normalises* the set: the
/// stack is replaced in place by an equivalent sequence of pairwise-disjoint
/// add-only blocks ("compaction on read"), guarded by a dirty flag so repeated
/// reads are cheap.
///
/// # Invariants
///
/// - Every block on the stack has the set's dimension count, which is either
///   fixed at construction or inferred from the first edit.
/// - When `normalised` is true the stack holds only `Add` entries of
///   pairwise-disjoint blocks.
/// - A failed mutation leaves the stack untouched.
///
/// # Performance
///
/// Normalisation recomputes the marker tables and marker stack from scratch
/// rather than incrementally; callers performing many edits between reads
/// should batch them. Recursion depth equals the dimension count, and marker
/// counts are bounded by twice the number of recorded operations regardless
/// of the ordinate range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSet<T: Ordinate> {
    stack: Vec<Operation<T>>,
    fixed_dimensions: Option<usize>,
    normalised: bool,
}

impl<T: Ordinate> BlockSet<T> {
    /// Creates an empty set whose dimension count is inferred from the first
    /// edit.
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            fixed_dimensions: None,
            normalised: true,
        }
    }

    /// Creates an empty set with a fixed dimension count; every edit must
    /// match it.
    ///
    /// Fails with [`BlockError::InvalidDimensions`] if `dimensions` is zero.
    pub fn with_dimensions(dimensions: usize) -> Result<Self, BlockError> {
        if dimensions < 1 {
            return Err(BlockError::InvalidDimensions(dimensions));
        }
        Ok(Self {
            stack: Vec::new(),
            fixed_dimensions: Some(dimensions),
            normalised: true,
        })
    }

    /// The set's dimension count: the fixed count if one was supplied,
    /// otherwise the first recorded block's, otherwise `None`.
    ///
    /// An inferred count lives only as long as the stack that implies it.
    /// When the edits cancel out, normalisation leaves an empty stack and the
    /// count reverts to `None` (just as after [`clear`](Self::clear)), so a
    /// later edit of any dimension count is accepted. Fix the count at
    /// construction to rule that out.
    pub fn dimensions(&self) -> Option<usize> {
        self.fixed_dimensions
            .or_else(|| self.stack.first().map(|op| op.block.dimensions()))
    }

    /// Whether the stack currently holds the canonical add-only form.
    pub fn is_normalised(&self) -> bool {
        self.normalised
    }

    /// Records an `Add` edit: the block's region becomes present.
    pub fn add(&mut self, block: Block<T>) -> Result<(), BlockError> {
        self.push(OperationKind::Add, block)
    }

    /// Records a `Remove` edit: the block's region becomes absent.
    pub fn remove(&mut self, block: Block<T>) -> Result<(), BlockError> {
        self.push(OperationKind::Remove, block)
    }

    /// Records a `Toggle` edit: presence flips throughout the block's region.
    pub fn toggle(&mut self, block: Block<T>) -> Result<(), BlockError> {
        self.push(OperationKind::Toggle, block)
    }

    /// Adds every block of `blocks`, validating all of them up front so a
    /// failure leaves the set untouched.
    pub fn add_all<I>(&mut self, blocks: I) -> Result<(), BlockError>
    where
        I: IntoIterator<Item = Block<T>>,
    {
        let mut expected = self.dimensions();
        let mut validated = Vec::new();
        for block in blocks {
            let block = Block::parse_to_dimension(expected, block)?;
            expected = expected.or(Some(block.dimensions()));
            validated.push(Operation::new(OperationKind::Add, block));
        }
        if !validated.is_empty() {
            self.stack.extend(validated);
            self.normalised = false;
        }
        Ok(())
    }

    /// Resets to the empty set. A dimension count fixed at construction is
    /// retained; an inferred one is forgotten along with the stack.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.normalised = true;
    }

    /// Collapses the operation stack into its canonical form: a minimal
    /// sequence of pairwise-disjoint add-only blocks covering exactly the
    /// point set the edits encode. Idempotent; a no-op when already
    /// normalised.
    ///
    /// Normalising a set whose edits cancel out empties the stack, which
    /// drops an inferred dimension count; see
    /// [`dimensions`](Self::dimensions).
    pub fn normalise(&mut self) {
        if self.normalised {
            return;
        }
        let Some(dimensions) = self.dimensions() else {
            self.normalised = true;
            return;
        };

        let markers = marker_ordinates(&self.stack, dimensions);
        let rewritten = marker_stack(&self.stack, &markers);
        let marker_lens: Vec<usize> = markers.iter().map(Vec::len).collect();
        let canonical = normalize(&rewritten, &marker_lens);
        debug_assert!(assertions::is_disjoint(&canonical));

        self.stack = canonical
            .into_iter()
            .map(|(a, b)| {
                let real = |corner: Vec<usize>| -> Vec<T> {
                    corner
                        .into_iter()
                        .enumerate()
                        .map(|(d, m)| markers[d][m])
                        .collect()
                };
                Operation::new(
                    OperationKind::Add,
                    Block::from_corners_unchecked(real(a), real(b)),
                )
            })
            .collect();
        self.normalised = true;
    }

    /// Iterates over the canonical disjoint blocks, normalising first.
    pub fn blocks(&mut self) -> impl Iterator<Item = &Block<T>> + '_ {
        self.normalise();
        self.stack.iter().map(|op| &op.block)
    }

    /// Like [`blocks`](Self::blocks) but yields raw corner pairs, for
    /// consumers that do not want the [`Block`] type.
    pub fn block_tuples(&mut self) -> impl Iterator<Item = (Vec<T>, Vec<T>)> + '_ {
        self.blocks().map(|b| (b.a().to_vec(), b.b().to_vec()))
    }

    /// Number of blocks in the canonical decomposition.
    pub fn len(&mut self) -> usize {
        self.normalise();
        self.stack.len()
    }

    /// Whether the set covers no points at all.
    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    /// Whether `point` lies in the set, decided against the canonical blocks.
    pub fn contains(&mut self, point: &[T]) -> bool {
        self.blocks().any(|b| b.contains(point))
    }

    /// Validates, appends, and marks the set dirty. All-or-nothing: a
    /// dimension mismatch aborts before the stack is touched.
    fn push(&mut self, kind: OperationKind, block: Block<T>) -> Result<(), BlockError> {
        let block = Block::parse_to_dimension(self.dimensions(), block)?;
        self.stack.push(Operation::new(kind, block));
        self.normalised = false;
        Ok(())
    }
}

impl<T: Ordinate> Default for BlockSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
