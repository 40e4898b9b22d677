//! Axis-aligned half-open blocks and their validation errors.

pub mod error;

mod block;
pub use block::Block;

pub use error::BlockError;
