/// Index of a slot in a list's arena.
///
/// Handles are meaningful only inside the arena that produced them; they are
/// never addresses and are never dereferenced as pointers.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub(crate) struct Handle(pub(crate) u32);

/// The front sentinel's slot. Present in every arena, never retired.
pub(crate) const FRONT: Handle = Handle(0);
/// The back sentinel's slot. Present in every arena, never retired.
pub(crate) const BACK: Handle = Handle(1);

impl Handle {
    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub(crate) fn is_sentinel(self) -> bool {
        self.0 < 2
    }
}

/// A node's single stored link: the XOR of its two neighbor handles.
///
/// The token alone names no direction; decoding requires one of the two
/// neighbors, supplied by whichever traversal is in progress.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub(crate) struct Token(u32);

impl Token {
    #[inline(always)]
    pub(crate) fn encode(a: Handle, b: Handle) -> Self {
        Self(a.0 ^ b.0)
    }

    /// Recovers the neighbor that is not `known`.
    ///
    /// Holds for every valid pair, including a node whose two neighbors are
    /// the same slot (a sentinel in an empty or one-element ring).
    #[inline(always)]
    pub(crate) fn decode(self, known: Handle) -> Handle {
        Handle(self.0 ^ known.0)
    }

    /// Replaces the encoded neighbor `old` with `new`, preserving the other.
    #[inline(always)]
    pub(crate) fn rebind(self, old: Handle, new: Handle) -> Self {
        Self::encode(self.decode(old), new)
    }

    /// The token of a node that participates in no ring.
    #[inline(always)]
    pub(crate) fn cleared() -> Self {
        Self(0)
    }
}
