use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::repeat_n;
use std::mem;

use crate::arena::Arena;
use crate::cursor::{Cursor, CursorMut};
use crate::iter::{IntoIter, Iter, IterMut};
use crate::link::{BACK, FRONT};

/// A doubly-linked list that stores a single XOR-combined adjacency link per
/// node instead of two neighbor pointers.
///
/// Nodes live in an arena owned by the list and are referenced by integer
/// handles, so decoding a link is plain index arithmetic rather than pointer
/// reconstruction. Positions into the list are [`Cursor`]s and
/// [`CursorMut`]s, which carry the arrived-from handle a link-only node
/// needs for traversal.
///
/// ```
/// use xor_dlist::XorDlist;
///
/// let mut list = XorDlist::new();
/// list.push_back(1);
/// list.push_back(2);
/// list.push_front(0);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
/// ```
pub struct XorDlist<T> {
    pub(crate) len: usize,
    pub(crate) arena: Arena<T>,
}

impl<T> XorDlist<T> {
    pub fn new() -> Self {
        Self {
            len: 0,
            arena: Arena::new(),
        }
    }

    /// A list of `n` clones of `value`.
    pub fn from_elem(value: T, n: usize) -> Self
    where
        T: Clone,
    {
        repeat_n(value, n).collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Node slots currently backed by the arena, live or reusable.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    pub fn front(&self) -> Option<&T> {
        self.arena.value(self.arena.neighbor(FRONT, BACK))
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let first = self.arena.neighbor(FRONT, BACK);
        self.arena.value_mut(first)
    }

    pub fn back(&self) -> Option<&T> {
        self.arena.value(self.arena.neighbor(BACK, FRONT))
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.arena.neighbor(BACK, FRONT);
        self.arena.value_mut(last)
    }

    pub fn push_front(&mut self, value: T) {
        let node = self.arena.alloc(value);
        self.arena.splice_after(BACK, FRONT, node);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let node = self.arena.alloc(value);
        self.arena.splice_after(FRONT, BACK, node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let removed = self.arena.unsplice_after(BACK, FRONT);
        self.len -= 1;
        self.arena.release(removed)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let removed = self.arena.unsplice_after(FRONT, BACK);
        self.len -= 1;
        self.arena.release(removed)
    }

    /// Drops every element and returns the arena to the empty ring.
    pub fn clear(&mut self) {
        self.arena.reset();
        self.len = 0;
    }

    /// Exchanges the contents of two lists in O(1).
    ///
    /// Every handle is internal to its list's arena, so the whole ring,
    /// sentinels included, moves with the struct; no boundary link needs
    /// patching. Swapping twice restores both lists exactly.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// A cursor on the first element, or on the ghost position if empty.
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        let node = self.arena.neighbor(FRONT, BACK);
        Cursor::new(self, FRONT, node)
    }

    /// A cursor on the last element, or on the ghost position if empty.
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        let node = self.arena.neighbor(BACK, FRONT);
        let prev = self.arena.neighbor(node, BACK);
        Cursor::new(self, prev, node)
    }

    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let node = self.arena.neighbor(FRONT, BACK);
        CursorMut::new(self, FRONT, node)
    }

    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let node = self.arena.neighbor(BACK, FRONT);
        let prev = self.arena.neighbor(node, BACK);
        CursorMut::new(self, prev, node)
    }
}

impl<T> Default for XorDlist<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for XorDlist<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for XorDlist<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for XorDlist<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for XorDlist<T> {}

impl<T: PartialOrd> PartialOrd for XorDlist<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for XorDlist<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for XorDlist<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T> FromIterator<T> for XorDlist<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for XorDlist<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for XorDlist<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for XorDlist<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for XorDlist<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a XorDlist<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut XorDlist<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_both_ends() {
        let mut list = XorDlist::new();
        list.push_back(1);
        list.push_back(2);
        list.push_front(0);

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&2));

        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut list: XorDlist<String> = XorDlist::new();
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn reuse_after_clear() {
        let mut list: XorDlist<u64> = (0..100).collect();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 0);

        list.push_back(7);
        assert_eq!(list.front(), Some(&7));
        assert_eq!(list.back(), Some(&7));
    }

    #[test]
    fn many_lists_many_nodes() {
        for _ in 0..1000 {
            let mut list: XorDlist<u128> = XorDlist::new();
            for i in 0..1000u128 {
                list.push_front(i);
            }
            assert_eq!(list.len(), 1000);
        }
    }

    #[test]
    fn front_and_back_mut() {
        let mut list = XorDlist::from([10, 20, 30]);
        if let Some(front) = list.front_mut() {
            *front = 11;
        }
        if let Some(back) = list.back_mut() {
            *back = 33;
        }
        assert_eq!(list, XorDlist::from([11, 20, 33]));
    }

    #[test]
    fn from_elem_fills() {
        let list = XorDlist::from_elem('x', 4);
        assert_eq!(list.len(), 4);
        assert!(list.iter().all(|&c| c == 'x'));
        assert!(XorDlist::<char>::from_elem('x', 0).is_empty());
    }

    #[test]
    fn clone_is_independent() {
        let original = XorDlist::from([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.push_back(4);
        copy.pop_front();
        assert_eq!(original, XorDlist::from([1, 2, 3]));
        assert_eq!(copy, XorDlist::from([2, 3, 4]));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = XorDlist::from([1, 2, 3]);
        let b = XorDlist::from([1, 2, 3]);
        let prefix = XorDlist::from([1, 2]);
        let bigger = XorDlist::from([1, 3]);

        assert_eq!(a, b);
        assert!(prefix < a);
        assert!(a < bigger);
        assert!(bigger > prefix);
        assert_ne!(a, prefix);
    }

    #[test]
    fn swap_is_an_involution() {
        let sizes: &[usize] = &[0, 1, 5];
        for &n in sizes {
            for &m in sizes {
                let a: XorDlist<usize> = (0..n).collect();
                let b: XorDlist<usize> = (100..100 + m).collect();
                let mut x = a.clone();
                let mut y = b.clone();

                x.swap(&mut y);
                assert_eq!(x, b);
                assert_eq!(y, a);
                assert_eq!(x.len(), m);
                assert_eq!(y.len(), n);

                x.swap(&mut y);
                assert_eq!(x, a);
                assert_eq!(y, b);
            }
        }
    }

    #[test]
    fn extend_and_assign() {
        let mut list = XorDlist::from([1, 2]);
        list.extend([3, 4]);
        assert_eq!(list, XorDlist::from([1, 2, 3, 4]));

        let source = [9, 9, 9];
        list.clear();
        list.extend(&source);
        assert_eq!(list, XorDlist::from([9, 9, 9]));

        let mut target = XorDlist::from([0]);
        target.clone_from(&list);
        assert_eq!(target, list);
    }

    #[test]
    fn debug_formats_as_a_list() {
        let list = XorDlist::from([1, 2, 3]);
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn hash_agrees_with_equality() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let a = XorDlist::from([1, 2, 3]);
        let b: XorDlist<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
