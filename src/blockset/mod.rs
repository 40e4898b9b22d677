//! The block-set engine: operation stack, coordinate compression, and the
//! recursive normalizer behind the [`BlockSet`] facade.

mod compress;
mod normalize;
mod operation;
mod set;

pub use operation::{Operation, OperationKind};
pub use set::BlockSet;

#[cfg(debug_assertions)]
pub(crate) mod assertions;

#[cfg(not(debug_assertions))]
pub(crate) mod assertions {
    use super::normalize::MarkerBlock;
    use std::collections::BTreeSet;

    pub fn is_disjoint(_blocks: &BTreeSet<MarkerBlock>) -> bool {
        true
    }
}
