//! blockset - N-dimensional block-set algebra
//!
//! A [`BlockSet`] represents an arbitrary union of axis-aligned half-open
//! N-dimensional boxes ("blocks"), built incrementally through add / remove /
//! toggle edits and reducible on demand to a canonical, pairwise-disjoint
//! decomposition of blocks covering exactly the same point set.
//!
//! # Example
//!
//! ```rust
//! use blockset::{Block, BlockSet};
//!
//! let mut set = BlockSet::new();
//! set.add(Block::new(vec![0, 0], vec![10, 10]).unwrap()).unwrap();
//! set.remove(Block::new(vec![2, 2], vec![4, 4]).unwrap()).unwrap();
//!
//! // Reading forces normalisation: the edit log is replaced by disjoint
//! // add-only blocks that cover the square minus the hole.
//! let volume: i64 = set
//!     .block_tuples()
//!     .map(|(a, b)| a.iter().zip(&b).map(|(lo, hi)| hi - lo).product::<i64>())
//!     .sum();
//! assert_eq!(volume, 96);
//! ```

pub mod block;
pub mod blockset;
mod ordinate;

pub use block::{Block, BlockError};
pub use blockset::{BlockSet, Operation, OperationKind};
pub use ordinate::Ordinate;
