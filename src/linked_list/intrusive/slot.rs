//! Slots: the storage locations that hold a reference to an element.
//!
//! A slot is either the head's first-element reference or the next-element
//! reference of some element. Doubly-linked kinds store the slot holding an
//! element inside that element's link, and tail queues store the slot
//! holding the last element's successor inside the head. Both are rewritten
//! in O(1) without knowing the predecessor element.

use super::traits::{link, link_mut, Adapter, Arena, Link};

/// Names a slot relative to one head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The head's first-element reference.
    First,
    /// The next-element reference of the element at this index.
    Next(usize),
}

impl Slot {
    /// The element owning the slot, `None` for the head's first slot.
    ///
    /// For a back-reference this is the predecessor element, and for a tail
    /// queue's last-slot it is the last element.
    #[inline]
    pub const fn owner(self) -> Option<usize> {
        match self {
            Slot::First => None,
            Slot::Next(idx) => Some(idx),
        }
    }
}

/// Read the element referenced by `slot`.
#[inline]
pub(crate) fn read<A, S>(first: Option<usize>, arena: &S, slot: Slot) -> Option<usize>
where
    A: Adapter,
    A::Link: Link,
    S: Arena<A::Elem> + ?Sized,
{
    match slot {
        Slot::First => first,
        Slot::Next(idx) => link::<A, S>(arena, idx).next(),
    }
}

/// Store `value` into `slot`.
#[inline]
pub(crate) fn write<A, S>(first: &mut Option<usize>, arena: &mut S, slot: Slot, value: Option<usize>)
where
    A: Adapter,
    A::Link: Link,
    S: Arena<A::Elem> + ?Sized,
{
    match slot {
        Slot::First => *first = value,
        Slot::Next(idx) => link_mut::<A, S>(arena, idx).set_next(value),
    }
}
