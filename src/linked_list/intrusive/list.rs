//! Doubly-linked list.
//!
//! Each element records the slot that holds it, either the head's first
//! slot or its predecessor's next slot, so any element can be removed or
//! preceded by a new one in O(1) without knowing its predecessor. There is
//! no tail reference: finding the last element walks the list.

use core::fmt;
use core::marker::PhantomData;

use super::check;
use super::error::QueueError;
use super::iter::{Cursor, Iter};
use super::slot::{self, Slot};
use super::traits::{link, link_mut, Adapter, Arena, Field, HasLink, Link, LinkWithPrev};

const KIND: &str = "list";

/// The link field of a doubly-linked list element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListLink {
    next: Option<usize>,
    prev: Option<Slot>,
}

impl ListLink {
    /// Check if the element is currently on a list.
    pub fn is_linked(&self) -> bool {
        self.prev.is_some()
    }
}

impl Link for ListLink {
    #[inline]
    fn next(&self) -> Option<usize> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }

    #[inline]
    fn unlink(&mut self) {
        self.next = None;
        self.prev = None;
    }
}

impl LinkWithPrev for ListLink {
    #[inline]
    fn prev(&self) -> Option<Slot> {
        self.prev
    }

    #[inline]
    fn set_prev(&mut self, prev: Option<Slot>) {
        self.prev = prev;
    }
}

impl HasLink<ListLink> for ListLink {
    fn link(&self) -> &ListLink {
        self
    }

    fn link_mut(&mut self) -> &mut ListLink {
        self
    }
}

/// The head of a doubly-linked list.
pub struct List<T, A = Field<T, ListLink>> {
    first: Option<usize>,
    _marker: PhantomData<fn() -> (T, A)>,
}

impl<T, A> List<T, A> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        List {
            first: None,
            _marker: PhantomData,
        }
    }

    /// Reset the list to empty.
    ///
    /// Elements still on the list are abandoned, their links are not touched.
    pub fn init(&mut self) {
        self.first = None;
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Get the first element.
    pub fn first(&self) -> Option<usize> {
        self.first
    }
}

impl<T, A> List<T, A>
where
    A: Adapter<Elem = T, Link = ListLink>,
{
    /// Get the element following `elm`.
    pub fn next<S>(&self, arena: &S, elm: usize) -> Option<usize>
    where
        S: Arena<T> + ?Sized,
    {
        link::<A, S>(arena, elm).next()
    }

    /// Get the element preceding `elm`, `None` when `elm` is first.
    #[track_caller]
    pub fn prev<S>(&self, arena: &S, elm: usize) -> Option<usize>
    where
        S: Arena<T> + ?Sized,
    {
        check::linked_prev::<A, S>(KIND, arena, elm).owner()
    }

    /// Get the last element.
    ///
    /// O(n): a list does not track its tail.
    pub fn last<S>(&self, arena: &S) -> Option<usize>
    where
        S: Arena<T> + ?Sized,
    {
        self.iter(arena).last()
    }

    /// Insert `elm` at the head of the list.
    #[track_caller]
    pub fn insert_head<S>(&mut self, arena: &mut S, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        check::head::<A, S>(KIND, self.first, arena);
        if let Some(first) = self.first {
            link_mut::<A, S>(arena, first).set_prev(Some(Slot::Next(elm)));
        }
        let link = link_mut::<A, S>(arena, elm);
        link.set_next(self.first);
        link.set_prev(Some(Slot::First));
        self.first = Some(elm);
    }

    /// Insert `elm` right after `listelm`, which must be on the list.
    #[track_caller]
    pub fn insert_after<S>(&mut self, arena: &mut S, listelm: usize, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        check::next::<A, S>(KIND, arena, listelm);
        let next = link::<A, S>(arena, listelm).next();
        if let Some(next) = next {
            link_mut::<A, S>(arena, next).set_prev(Some(Slot::Next(elm)));
        }
        let link = link_mut::<A, S>(arena, elm);
        link.set_next(next);
        link.set_prev(Some(Slot::Next(listelm)));
        link_mut::<A, S>(arena, listelm).set_next(Some(elm));
    }

    /// Insert `elm` right before `listelm`, which must be on the list.
    #[track_caller]
    pub fn insert_before<S>(&mut self, arena: &mut S, listelm: usize, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        check::prev::<A, S>(KIND, self.first, arena, listelm);
        let prev = check::linked_prev::<A, S>(KIND, arena, listelm);
        let link = link_mut::<A, S>(arena, elm);
        link.set_prev(Some(prev));
        link.set_next(Some(listelm));
        slot::write::<A, S>(&mut self.first, arena, prev, Some(elm));
        link_mut::<A, S>(arena, listelm).set_prev(Some(Slot::Next(elm)));
    }

    /// Remove `elm` from the list in O(1).
    ///
    /// # Panics
    ///
    /// Panics if `elm` is not linked.
    #[track_caller]
    pub fn remove<S>(&mut self, arena: &mut S, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        check::next::<A, S>(KIND, arena, elm);
        check::prev::<A, S>(KIND, self.first, arena, elm);
        let prev = check::linked_prev::<A, S>(KIND, arena, elm);
        self.unlink(arena, elm, prev);
    }

    /// Remove `elm` from the list, verifying first that it is linked and
    /// that its back-reference names a slot holding it.
    pub fn try_remove<S>(&mut self, arena: &mut S, elm: usize) -> Result<(), QueueError>
    where
        S: Arena<T> + ?Sized,
    {
        if !arena.contains(elm) {
            return Err(QueueError::NotMember(elm));
        }
        let prev = link::<A, S>(arena, elm)
            .prev()
            .ok_or(QueueError::Unlinked(elm))?;
        if let Slot::Next(owner) = prev {
            if !arena.contains(owner) {
                return Err(QueueError::Corrupt(elm));
            }
        }
        if slot::read::<A, S>(self.first, arena, prev) != Some(elm) {
            return Err(QueueError::Corrupt(elm));
        }
        self.unlink(arena, elm, prev);
        Ok(())
    }

    fn unlink<S>(&mut self, arena: &mut S, elm: usize, prev: Slot)
    where
        S: Arena<T> + ?Sized,
    {
        let link = link_mut::<A, S>(arena, elm);
        let next = link.next();
        link.unlink();
        if let Some(next) = next {
            link_mut::<A, S>(arena, next).set_prev(Some(prev));
        }
        slot::write::<A, S>(&mut self.first, arena, prev, next);
    }

    /// Exchange the contents of two lists.
    pub fn swap<S>(&mut self, other: &mut Self, arena: &mut S)
    where
        S: Arena<T> + ?Sized,
    {
        core::mem::swap(&mut self.first, &mut other.first);
        for first in [self.first, other.first].into_iter().flatten() {
            link_mut::<A, S>(arena, first).set_prev(Some(Slot::First));
        }
    }

    /// Iterate over the list from the head.
    pub fn iter<'a, S>(&self, arena: &'a S) -> Iter<'a, A, S>
    where
        S: Arena<T> + ?Sized,
    {
        Iter::new(arena, self.first)
    }

    /// Iterate from `start`, or from the head when `start` is `None`.
    pub fn iter_from<'a, S>(&self, arena: &'a S, start: Option<usize>) -> Iter<'a, A, S>
    where
        S: Arena<T> + ?Sized,
    {
        Iter::new(arena, start.or(self.first))
    }

    /// Walk the list from the head while removing visited elements.
    pub fn iter_safe(&self) -> Cursor<A> {
        Cursor::new(self.first)
    }

    /// Walk from `start` (or the head) while removing visited elements.
    pub fn iter_safe_from(&self, start: Option<usize>) -> Cursor<A> {
        Cursor::new(start.or(self.first))
    }
}

impl<T, A> Default for List<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> fmt::Debug for List<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List").field("first", &self.first).finish()
    }
}
