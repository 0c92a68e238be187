//! Sentinel-based linked containers for Rust.
//!
//! This crate provides two node-based containers whose positions can be held
//! across mutations and are checked on every use:
//!
//! - [`LinkedDeque`] - a doubly linked sequence with O(1) insertion and removal
//!   at both ends and at any known [`Position`](linked_deque::Position)
//! - [`OSTreeMap`] - an ordered map on an order-statistic red-black tree, with
//!   O(log n) [`rank`](OSTreeMap::rank) and [`kth`](OSTreeMap::kth)
//!
//! Checked operations return [`Result`] instead of panicking. A position used
//! with a container that did not issue it, or after its element was erased,
//! fails with [`Error::InvalidIterator`].
//!
//! # Example
//!
//! ```
//! use sentinel_collections::{Error, LinkedDeque, OSTreeMap};
//!
//! let mut deque = LinkedDeque::from([1, 2, 4]);
//! let four = deque.advance(deque.begin(), 2)?;
//! deque.insert(four, 3)?;
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
//! assert_eq!(deque.at(10), Err(Error::IndexOutOfBound));
//!
//! let mut scores = OSTreeMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! // Ranks are 1-indexed in key order.
//! assert_eq!(scores.rank(&"Bob"), Some(2));
//! assert_eq!(scores.get_at(scores.kth(3)), Ok((&"Carol", &92)));
//!
//! let other = scores.clone();
//! assert_eq!(other.get_at(scores.begin()), Err(Error::InvalidIterator));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Implementation
//!
//! Both containers keep their cells in a slot arena and link them by index.
//! The deque closes its chain with a boundary cell that serves as `end()`;
//! the tree treats a missing child as the black null leaf and augments every
//! node with the size of its subtree.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
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

mod compare;
mod error;
mod raw;

pub mod linked_deque;
pub mod ostree_map;

pub use compare::{Compare, Natural};
pub use error::{Error, Result};
pub use linked_deque::LinkedDeque;
pub use ostree_map::OSTreeMap;
