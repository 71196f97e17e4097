use std::iter::FusedIterator;

use crate::link::{BACK, FRONT, Handle};
use crate::list::XorDlist;

/// Borrowing iterator over a list.
///
/// Both ends carry an (arrived-from, node) pair, since a node's link cannot
/// be decoded without knowing one neighbor.
pub struct Iter<'a, T> {
    list: &'a XorDlist<T>,
    // Forward end: from is on the FRONT side of node.
    head: (Handle, Handle),
    // Backward end: from is on the BACK side of node.
    tail: (Handle, Handle),
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a XorDlist<T>) -> Self {
        Self {
            list,
            head: (FRONT, list.arena.neighbor(FRONT, BACK)),
            tail: (BACK, list.arena.neighbor(BACK, FRONT)),
            remaining: list.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let (from, node) = self.head;
        self.head = (node, self.list.arena.neighbor(node, from));
        self.remaining -= 1;
        self.list.arena.value(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let (from, node) = self.tail;
        self.tail = (node, self.list.arena.neighbor(node, from));
        self.remaining -= 1;
        self.list.arena.value(node)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            head: self.head,
            tail: self.tail,
            remaining: self.remaining,
        }
    }
}

/// Mutably borrowing iterator over a list.
pub struct IterMut<'a, T> {
    list: &'a mut XorDlist<T>,
    head: (Handle, Handle),
    tail: (Handle, Handle),
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut XorDlist<T>) -> Self {
        let head = (FRONT, list.arena.neighbor(FRONT, BACK));
        let tail = (BACK, list.arena.neighbor(BACK, FRONT));
        let remaining = list.len;
        Self {
            list,
            head,
            tail,
            remaining,
        }
    }

    fn take_slot(&mut self, node: Handle) -> Option<&'a mut T> {
        let value = self.list.arena.value_mut(node)?;
        // SAFETY: the ring walk visits each data handle at most once per
        // pass (`remaining` keeps the two ends from crossing), so no two
        // references returned by this iterator alias, and the arena stays
        // exclusively borrowed for 'a.
        Some(unsafe { &mut *(value as *mut T) })
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let (from, node) = self.head;
        self.head = (node, self.list.arena.neighbor(node, from));
        self.remaining -= 1;
        self.take_slot(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let (from, node) = self.tail;
        self.tail = (node, self.list.arena.neighbor(node, from));
        self.remaining -= 1;
        self.take_slot(node)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator: drains the list from either end.
pub struct IntoIter<T> {
    list: XorDlist<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: XorDlist<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_reverse() {
        let list = XorDlist::from([1, 2, 3]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn len_matches_iteration_count() {
        let list: XorDlist<usize> = (0..57).collect();
        assert_eq!(list.iter().count(), list.len());
        let empty: XorDlist<usize> = XorDlist::new();
        assert_eq!(empty.iter().count(), 0);
    }

    #[test]
    fn double_ended_meets_in_the_middle() {
        let list = XorDlist::from([1, 2, 3, 4, 5]);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_mut_updates_in_place() {
        let mut list = XorDlist::from([1, 2, 3]);
        for value in list.iter_mut() {
            *value *= 10;
        }
        assert_eq!(list, XorDlist::from([10, 20, 30]));
    }

    #[test]
    fn iter_mut_is_double_ended() {
        let mut list = XorDlist::from([1, 2, 3, 4]);
        {
            let mut iter = list.iter_mut();
            *iter.next().unwrap() += 100;
            *iter.next_back().unwrap() += 100;
        }
        assert_eq!(list, XorDlist::from([101, 2, 3, 104]));
    }

    #[test]
    fn into_iter_drains_forward() {
        let list = XorDlist::from(["a", "b", "c"]);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn into_iter_drains_backward() {
        let list = XorDlist::from([1, 2, 3]);
        assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn exact_size_reporting() {
        let list = XorDlist::from([1, 2, 3]);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.next_back();
        assert_eq!(iter.len(), 1);
    }
}
