//! A [`BstMap`] is an ordered, mutable key/value map backed by a plain
//! (unbalanced) binary search tree.
//!
//! Keys can be any [`Ord`] type, and the map yields them in ascending order
//! when iterated. Absent keys are materialised on demand by
//! [`BstMap::get_or_create()`], which hands back a writable reference to the
//! value - the get-and-set idiom of an associative array:
//!
//! ```
//! use bstmap::BstMap;
//!
//! let mut map = BstMap::default();
//!
//! // Reading an absent key creates it, holding the default value.
//! *map.get_or_create("bananas") += 42;
//! *map.get_or_create("platanos") += 24;
//!
//! assert_eq!(map.get(&"bananas"), Some(&42));
//!
//! // Keys are yielded in ascending order, regardless of insertion order.
//! let keys = map.iter().map(|(k, _v)| *k).collect::<Vec<_>>();
//! assert_eq!(keys, ["bananas", "platanos"]);
//!
//! // Removing an absent key is a no-op.
//! assert_eq!(map.remove(&"pineapple"), None);
//! ```
//!
//! The tree performs no rebalancing: each operation costs `O(depth)`, which
//! degrades to `O(n)` for adversarial (sorted) insertion sequences. In-order
//! traversal is iterative, driven by an explicit ancestor stack bounded by the
//! tree depth, so even a degenerate chain cannot overflow the call stack
//! during iteration.

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(missing_docs)]

mod entry;
mod iter;
mod node;
#[cfg(test)]
mod test_utils;
mod tree;

pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use iter::{Iter, IterMut, OwnedIter};
pub use tree::BstMap;
