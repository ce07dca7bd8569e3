//! Order-statistic ordered sets and multisets for Rust.
//!
//! This crate provides [`OrderedSet`], a sorted collection that answers positional queries
//! in expected O(log n) alongside the usual membership operations:
//!
//! - [`element_at`](OrderedSet::element_at) - Get the element at a given sorted position
//! - [`lower_bound`](OrderedSet::lower_bound) / [`upper_bound`](OrderedSet::upper_bound) -
//!   Count the elements below (or not above) a value
//! - [`equal_range`](OrderedSet::equal_range) - Find the positions occupied by a value
//! - Indexing by [`Rank`] - e.g., `set[Rank(0)]` for the smallest element
//!
//! A set is either strict (duplicates are ignored) or a multiset, and orders its elements
//! either by [`Ord`] or by a caller-supplied [`Comparator`].
//!
//! # Example
//!
//! ```
//! use rbst_set::{OrderedSet, Rank};
//!
//! let mut scores = OrderedSet::new_multi();
//! scores.extend([85, 100, 92, 85]);
//!
//! assert_eq!(scores.len(), 4);
//! assert_eq!(scores[Rank(0)], 85);
//! assert_eq!(scores.equal_range(&85), Some((0, 1)));
//!
//! // How many scores are below 90?
//! assert_eq!(scores.lower_bound(&90), 2);
//! ```
//!
//! # Implementation
//!
//! The set is a randomized binary search tree: every node records the size of its
//! subtree, and all restructuring goes through `split` (cut off the first `k` elements)
//! and `merge` (concatenate two trees). `merge` keeps the root of the larger tree on top
//! with probability proportional to its size, which keeps the expected height logarithmic
//! regardless of insertion order. The same size field drives rank and index queries.
//!
//! Nodes live in an arena and refer to their children by integer handles.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod comparator;
mod error;
mod order_statistic;
mod raw;

pub mod ordered_set;

pub use comparator::{Comparator, Natural};
pub use error::OutOfRange;
pub use order_statistic::Rank;
pub use ordered_set::OrderedSet;
