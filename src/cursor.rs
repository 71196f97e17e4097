use std::fmt;
use std::ptr;

use crate::arena::Arena;
use crate::link::{BACK, FRONT, Handle};
use crate::list::XorDlist;

// One forward step of the (arrived-from, node) pair, collapsing the two
// sentinel slots into a single ghost position.
fn advance<T>(arena: &Arena<T>, prev: Handle, node: Handle) -> (Handle, Handle) {
    let (mut prev, mut node) = (node, arena.neighbor(node, prev));
    if node == FRONT {
        (prev, node) = (node, arena.neighbor(node, prev));
    }
    (prev, node)
}

fn retreat<T>(arena: &Arena<T>, prev: Handle, node: Handle) -> (Handle, Handle) {
    let (mut prev, mut node) = (arena.neighbor(prev, node), prev);
    if node == BACK {
        (prev, node) = (arena.neighbor(prev, node), prev);
    }
    (prev, node)
}

/// A shared position in a [`XorDlist`].
///
/// A position is an (arrived-from, current) handle pair: the current node's
/// link cannot be decoded without a neighbor to decode against. Cursors walk
/// the closed ring, with a single "ghost" position between the last and
/// first elements where [`current`](Cursor::current) is `None`.
///
/// Two cursors are equal iff they sit on the same position of the same
/// list, independent of the direction they arrived from; the ghost is one
/// position no matter which sentinel slot represents it.
pub struct Cursor<'a, T> {
    list: &'a XorDlist<T>,
    prev: Handle,
    node: Handle,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a XorDlist<T>, prev: Handle, node: Handle) -> Self {
        Self { list, prev, node }
    }

    /// The element under the cursor, or `None` at the ghost position.
    pub fn current(&self) -> Option<&'a T> {
        self.list.arena.value(self.node)
    }

    pub fn peek_next(&self) -> Option<&'a T> {
        let (_, node) = advance(&self.list.arena, self.prev, self.node);
        self.list.arena.value(node)
    }

    pub fn peek_prev(&self) -> Option<&'a T> {
        let (_, node) = retreat(&self.list.arena, self.prev, self.node);
        self.list.arena.value(node)
    }

    /// Moves to the next position, wrapping from the ghost to the front.
    pub fn move_next(&mut self) {
        (self.prev, self.node) = advance(&self.list.arena, self.prev, self.node);
    }

    /// Moves to the previous position, wrapping from the ghost to the back.
    pub fn move_prev(&mut self) {
        (self.prev, self.node) = retreat(&self.list.arena, self.prev, self.node);
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        // Either sentinel slot denotes the one ghost position.
        ptr::eq(self.list, other.list)
            && (self.node == other.node
                || (self.node.is_sentinel() && other.node.is_sentinel()))
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current()).finish()
    }
}

/// An exclusive position in a [`XorDlist`], able to splice and unsplice.
///
/// Same position space as [`Cursor`]; the list cannot be touched through
/// anything else while a `CursorMut` exists, so a position can never see
/// the node under it retired by someone else.
pub struct CursorMut<'a, T> {
    list: &'a mut XorDlist<T>,
    prev: Handle,
    node: Handle,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut XorDlist<T>, prev: Handle, node: Handle) -> Self {
        Self { list, prev, node }
    }

    /// A read-only view of this position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.prev, self.node)
    }

    pub fn current(&mut self) -> Option<&mut T> {
        self.list.arena.value_mut(self.node)
    }

    pub fn peek_next(&self) -> Option<&T> {
        let (_, node) = advance(&self.list.arena, self.prev, self.node);
        self.list.arena.value(node)
    }

    pub fn peek_prev(&self) -> Option<&T> {
        let (_, node) = retreat(&self.list.arena, self.prev, self.node);
        self.list.arena.value(node)
    }

    pub fn move_next(&mut self) {
        (self.prev, self.node) = advance(&self.list.arena, self.prev, self.node);
    }

    pub fn move_prev(&mut self) {
        (self.prev, self.node) = retreat(&self.list.arena, self.prev, self.node);
    }

    /// Inserts `value` before the current node; at the ghost position this
    /// appends at the back. The cursor stays on its node.
    pub fn insert_before(&mut self, value: T) {
        let new = self.list.arena.alloc(value);
        if self.node.is_sentinel() {
            self.list.arena.splice_after(FRONT, BACK, new);
            // Re-anchor the ghost on the new last element. The pair held
            // before the splice may name the old last node, or be the empty
            // ring's degenerate pair, which reads backward once the ring
            // has elements.
            self.prev = new;
            self.node = BACK;
        } else {
            let before_prev = self.list.arena.neighbor(self.prev, self.node);
            self.list.arena.splice_after(before_prev, self.prev, new);
            self.prev = new;
        }
        self.list.len += 1;
    }

    /// Inserts `value` after the current node; at the ghost position this
    /// prepends at the front. The cursor stays on its node.
    pub fn insert_after(&mut self, value: T) {
        let new = self.list.arena.alloc(value);
        if self.node.is_sentinel() {
            self.list.arena.splice_after(BACK, FRONT, new);
            // Same re-anchoring as `insert_before`: leave the ghost as
            // (last, BACK) so forward orientation holds.
            self.prev = self.list.arena.neighbor(BACK, FRONT);
            self.node = BACK;
        } else {
            self.list.arena.splice_after(self.prev, self.node, new);
        }
        self.list.len += 1;
    }

    /// Unsplices and returns the current element, leaving the cursor on its
    /// former successor. Returns `None` at the ghost position.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.node.is_sentinel() {
            return None;
        }
        let arrived = self.list.arena.neighbor(self.prev, self.node);
        let removed = self.list.arena.unsplice_after(arrived, self.prev);
        debug_assert_eq!(removed, self.node);
        self.list.len -= 1;
        self.node = self.list.arena.neighbor(self.prev, arrived);
        self.list.arena.release(removed)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut")
            .field(&self.list.arena.value(self.node))
            .finish()
    }
}
