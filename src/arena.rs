use crate::link::{BACK, FRONT, Handle, Token};

/// One node: a value and its combined adjacency link.
///
/// `value` is `None` only in the two sentinel slots and in retired slots
/// waiting on the free stack.
pub(crate) struct Slot<T> {
    token: Token,
    value: Option<T>,
}

/// Slot storage for a single list.
///
/// The arena exclusively owns every live node. Slots 0 and 1 are the front
/// and back sentinels and live for the whole arena; data slots are handed
/// out by `alloc` and come back through `release`, which puts them on the
/// free stack for reuse. Nothing may touch a retired handle.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    /// A fresh arena holding an empty ring: each sentinel's sole neighbor is
    /// the other sentinel, twice.
    pub(crate) fn new() -> Self {
        Self {
            slots: vec![
                Slot {
                    token: Token::encode(BACK, BACK),
                    value: None,
                },
                Slot {
                    token: Token::encode(FRONT, FRONT),
                    value: None,
                },
            ],
            free: Vec::new(),
        }
    }

    /// Drops every data slot and restores the empty ring.
    pub(crate) fn reset(&mut self) {
        self.slots.truncate(2);
        self.free.clear();
        self.slots[FRONT.index()].token = Token::encode(BACK, BACK);
        self.slots[BACK.index()].token = Token::encode(FRONT, FRONT);
    }

    /// Data slots currently backed by storage, live or free.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len() - 2
    }

    #[inline]
    fn slot(&self, h: Handle) -> &Slot<T> {
        &self.slots[h.index()]
    }

    #[inline]
    fn slot_mut(&mut self, h: Handle) -> &mut Slot<T> {
        &mut self.slots[h.index()]
    }

    /// Decodes the neighbor of `node` that is not `from`.
    #[inline]
    pub(crate) fn neighbor(&self, node: Handle, from: Handle) -> Handle {
        self.slot(node).token.decode(from)
    }

    #[inline]
    fn rebind(&mut self, node: Handle, old: Handle, new: Handle) {
        let slot = self.slot_mut(node);
        slot.token = slot.token.rebind(old, new);
    }

    pub(crate) fn value(&self, h: Handle) -> Option<&T> {
        self.slot(h).value.as_ref()
    }

    pub(crate) fn value_mut(&mut self, h: Handle) -> Option<&mut T> {
        self.slot_mut(h).value.as_mut()
    }

    /// Creates an unlinked node. Runs before any relinking, so an allocation
    /// failure (growth panic or handle-space exhaustion) leaves the ring
    /// untouched.
    pub(crate) fn alloc(&mut self, value: T) -> Handle {
        match self.free.pop() {
            Some(h) => {
                debug_assert!(self.slot(h).value.is_none());
                self.slot_mut(h).value = Some(value);
                h
            }
            None => {
                let raw = u32::try_from(self.slots.len())
                    .expect("xor-dlist: arena handle space exhausted");
                self.slots.push(Slot {
                    token: Token::cleared(),
                    value: Some(value),
                });
                Handle(raw)
            }
        }
    }

    /// Retires an unspliced node and takes its value back out.
    pub(crate) fn release(&mut self, h: Handle) -> Option<T> {
        debug_assert!(!h.is_sentinel());
        debug_assert_eq!(self.slot(h).token, Token::cleared());
        let value = self.slot_mut(h).value.take();
        self.free.push(h);
        value
    }

    /// Splices `new` into the ring immediately after `anchor`, where the
    /// traversal direction is `arrived_from -> anchor`. Returns the node
    /// that was `anchor`'s successor before the splice.
    ///
    /// This and `unsplice_after` are the only operations that change ring
    /// topology; every list modifier reduces to them.
    pub(crate) fn splice_after(
        &mut self,
        arrived_from: Handle,
        anchor: Handle,
        new: Handle,
    ) -> Handle {
        debug_assert_eq!(self.slot(new).token, Token::cleared());
        let successor = self.neighbor(anchor, arrived_from);
        self.rebind(successor, anchor, new);
        self.rebind(anchor, successor, new);
        self.slot_mut(new).token = Token::encode(anchor, successor);
        successor
    }

    /// Unsplices and returns the node immediately after `anchor` in the
    /// `arrived_from -> anchor` direction. The removed node's token is
    /// cleared; the caller must `release` it.
    pub(crate) fn unsplice_after(&mut self, arrived_from: Handle, anchor: Handle) -> Handle {
        let removed = self.neighbor(anchor, arrived_from);
        debug_assert!(!removed.is_sentinel());
        let new_successor = self.neighbor(removed, anchor);
        self.rebind(new_successor, removed, anchor);
        self.rebind(anchor, removed, new_successor);
        self.slot_mut(removed).token = Token::cleared();
        removed
    }
}
