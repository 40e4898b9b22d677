//! The `Ordinate` trait: the scalar seam of the engine.
//!
//! Coordinates only need a total order plus cheap copying: the engine sorts
//! and deduplicates them during coordinate compression and compares them for
//! point membership, but never performs arithmetic on them. Any `Ord + Copy`
//! scalar (integers, `ordered_float` wrappers, chars, ...) qualifies through
//! the blanket impl.

use std::fmt::Debug;

/// A coordinate scalar usable as a block ordinate.
///
/// Blanket-implemented for every `Ord + Copy + Debug` type; there is nothing
/// to implement manually.
pub trait Ordinate: Ord + Copy + Debug {}

impl<T: Ord + Copy + Debug> Ordinate for T {}
