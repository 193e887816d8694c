//! A sorted multiset backed by a binary search tree.
//!
//! Values are kept in sort order at all times, either by their own [`Ord`]
//! implementation or by a sort key extracted once per value at insertion
//! time. Duplicates are allowed. See [`SortedTree`] for the full API.

pub mod error;
pub mod order;
pub mod tree;

pub use error::Error;
pub use order::{ByKey, NaturalOrder, SortOrder};
pub use tree::{Node, SortedTree, Values};

#[macro_export(local_inner_macros)]
macro_rules! sortedtree {
    // trailing comma case
    ($($value:expr,)+) => (sortedtree!($($value),+));

    ( $($value:expr),* ) => {
        {
            let mut _tree = $crate::SortedTree::new();
            $(
                _tree.insert($value);
            )*
            _tree
        }
    };
}
