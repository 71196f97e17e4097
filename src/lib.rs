//! A doubly-linked list that stores one XOR-combined adjacency link per
//! node, halving the per-node link overhead of a conventional list.
//!
//! Nodes live in an arena owned by each list and are named by `u32` handles;
//! a node's single link is the XOR of its two neighbor handles, and two
//! permanent sentinel slots close the chain into a ring. Because XOR is its
//! own inverse, knowing either neighbor recovers the other, so every
//! traversal carries the handle it arrived from. Encoding indices instead
//! of addresses keeps the trick free of pointer-provenance hazards.
//!
//! ```
//! use xor_dlist::XorDlist;
//!
//! let mut list: XorDlist<i32> = XorDlist::new();
//! list.push_back(2);
//! list.push_front(1);
//! list.push_back(3);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
//!
//! let mut cursor = list.cursor_front_mut();
//! cursor.move_next();
//! cursor.insert_before(9);
//! assert_eq!(list, XorDlist::from([1, 9, 2, 3]));
//! ```

mod arena;
mod cursor;
mod iter;
mod link;
mod list;
#[cfg(feature = "serde")]
mod serde_impls;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::XorDlist;
