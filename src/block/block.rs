//! The immutable block value type.

use std::fmt::Display;

use super::error::BlockError;
use crate::ordinate::Ordinate;

/// An axis-aligned half-open box `[a_i, b_i)` in D-dimensional ordinate space,
/// given by its two corner points.
///
/// # Invariants
///
/// - Both corners have the same, positive dimension count.
/// - No ordering between `a_i` and `b_i` is required: a corner pair with
///   `a_i >= b_i` in some dimension is a valid block that covers no points
///   ("silently empty" rather than rejected).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Block<T: Ordinate> {
    a: Vec<T>,
    b: Vec<T>,
}

// Deserialization must not bypass `Block::new`: a hand-written corner pair
// with mismatched lengths has to surface as a serde error, not as a Block
// that violates the invariant.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Block<T>
where
    T: Ordinate + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Corners<T> {
            a: Vec<T>,
            b: Vec<T>,
        }

        let Corners { a, b } = Corners::deserialize(deserializer)?;
        Block::new(a, b).map_err(serde::de::Error::custom)
    }
}

impl<T: Ordinate> Block<T> {
    /// Creates the block spanned by corners `a` and `b`.
    ///
    /// Fails with [`BlockError::CornerMismatch`] if the corners differ in
    /// length and [`BlockError::InvalidDimensions`] if they are empty.
    pub fn new(a: Vec<T>, b: Vec<T>) -> Result<Self, BlockError> {
        if a.len() != b.len() {
            return Err(BlockError::CornerMismatch {
                a: a.len(),
                b: b.len(),
            });
        }
        if a.is_empty() {
            return Err(BlockError::InvalidDimensions(0));
        }
        Ok(Self { a, b })
    }

    /// Wraps a corner pair that is **already known to be valid** without
    /// re-checking.
    ///
    /// In debug builds this asserts the invariant; in release builds the check
    /// is elided.
    pub(crate) fn from_corners_unchecked(a: Vec<T>, b: Vec<T>) -> Self {
        debug_assert!(
            a.len() == b.len() && !a.is_empty(),
            "Block::from_corners_unchecked called with mismatched corners"
        );
        Self { a, b }
    }

    /// Validates a block against an expected dimension count.
    ///
    /// With `expected == None` any valid block passes (the caller has not yet
    /// established a dimension). Returns the block unchanged on success so the
    /// call composes with `?` at mutation sites.
    pub fn parse_to_dimension(
        expected: Option<usize>,
        block: Block<T>,
    ) -> Result<Block<T>, BlockError> {
        match expected {
            Some(d) if block.dimensions() != d => Err(BlockError::DimensionMismatch {
                expected: d,
                found: block.dimensions(),
            }),
            _ => Ok(block),
        }
    }

    /// Number of dimensions of this block.
    pub fn dimensions(&self) -> usize {
        self.a.len()
    }

    /// The first corner.
    pub fn a(&self) -> &[T] {
        &self.a
    }

    /// The second corner.
    pub fn b(&self) -> &[T] {
        &self.b
    }

    /// Consumes the block, returning its raw corner pair.
    pub fn into_corners(self) -> (Vec<T>, Vec<T>) {
        (self.a, self.b)
    }

    /// Returns true if `point` lies inside the half-open box.
    ///
    /// A point of the wrong dimension count is never contained; neither is
    /// any point of a block with a reversed or empty range in some dimension.
    pub fn contains(&self, point: &[T]) -> bool {
        point.len() == self.dimensions()
            && self
                .a
                .iter()
                .zip(&self.b)
                .zip(point)
                .all(|((&lo, &hi), &p)| lo <= p && p < hi)
    }

    /// Returns true if the block covers no points at all.
    pub fn is_empty(&self) -> bool {
        self.a.iter().zip(&self.b).any(|(&lo, &hi)| lo >= hi)
    }
}

impl<T: Ordinate> TryFrom<(Vec<T>, Vec<T>)> for Block<T> {
    type Error = BlockError;

    fn try_from((a, b): (Vec<T>, Vec<T>)) -> Result<Self, Self::Error> {
        Block::new(a, b)
    }
}

impl<T: Ordinate + Display> Display for Block<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let corner = |f: &mut std::fmt::Formatter<'_>, c: &[T]| -> std::fmt::Result {
            write!(f, "(")?;
            for (i, v) in c.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, ")")
        };
        corner(f, &self.a)?;
        write!(f, "..")?;
        corner(f, &self.b)
    }
}
