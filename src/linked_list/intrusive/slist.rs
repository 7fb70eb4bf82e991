//! Singly-linked list.
//!
//! The head holds a single forward reference and each element a single
//! successor, the minimum of space and link rewriting. Removing an
//! arbitrary element is O(n) since its predecessor has to be found by
//! walking from the head. Best suited for LIFO use or for large sets with
//! few or no removals.

use core::fmt;
use core::marker::PhantomData;

use super::error::QueueError;
use super::iter::{Cursor, Iter, SlotIter};
use super::check;
use super::slot::Slot;
use super::traits::{link, link_mut, Adapter, Arena, Field, HasLink, Link};

/// The link field of a singly-linked list element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SListLink {
    next: Option<usize>,
}

impl Link for SListLink {
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
    }
}

impl HasLink<SListLink> for SListLink {
    fn link(&self) -> &SListLink {
        self
    }

    fn link_mut(&mut self) -> &mut SListLink {
        self
    }
}

/// The head of a singly-linked list.
pub struct SList<T, A = Field<T, SListLink>> {
    first: Option<usize>,
    _marker: PhantomData<fn() -> (T, A)>,
}

impl<T, A> SList<T, A> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        SList {
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

    /// Exchange the contents of two lists.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.first, &mut other.first);
    }
}

impl<T, A> SList<T, A>
where
    A: Adapter<Elem = T, Link = SListLink>,
{
    /// Get the element following `elm`.
    pub fn next<S>(&self, arena: &S, elm: usize) -> Option<usize>
    where
        S: Arena<T> + ?Sized,
    {
        link::<A, S>(arena, elm).next()
    }

    /// Insert `elm` at the head of the list.
    pub fn insert_head<S>(&mut self, arena: &mut S, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        link_mut::<A, S>(arena, elm).set_next(self.first);
        self.first = Some(elm);
    }

    /// Insert `elm` right after `pred`, which must be on the list.
    pub fn insert_after<S>(&mut self, arena: &mut S, pred: usize, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        let next = link::<A, S>(arena, pred).next();
        link_mut::<A, S>(arena, elm).set_next(next);
        link_mut::<A, S>(arena, pred).set_next(Some(elm));
    }

    /// Remove and return the first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn remove_head<S>(&mut self, arena: &mut S) -> usize
    where
        S: Arena<T> + ?Sized,
    {
        match self.try_remove_head(arena) {
            Ok(elm) => elm,
            Err(err) => check::violated(format_args!("slist remove_head: {err}")),
        }
    }

    /// Remove and return the first element, or [`QueueError::Empty`].
    pub fn try_remove_head<S>(&mut self, arena: &mut S) -> Result<usize, QueueError>
    where
        S: Arena<T> + ?Sized,
    {
        let first = self.first.ok_or(QueueError::Empty)?;
        let link = link_mut::<A, S>(arena, first);
        self.first = link.next();
        link.unlink();
        Ok(first)
    }

    /// Remove and return the element following `pred`.
    ///
    /// # Panics
    ///
    /// Panics if `pred` has no successor.
    #[track_caller]
    pub fn remove_after<S>(&mut self, arena: &mut S, pred: usize) -> usize
    where
        S: Arena<T> + ?Sized,
    {
        match self.try_remove_after(arena, pred) {
            Ok(elm) => elm,
            Err(err) => check::violated(format_args!("slist remove_after: {err}")),
        }
    }

    /// Remove and return the element following `pred`, or
    /// [`QueueError::NoSuccessor`]. A `pred` outside the arena is reported as
    /// [`QueueError::NotMember`].
    pub fn try_remove_after<S>(&mut self, arena: &mut S, pred: usize) -> Result<usize, QueueError>
    where
        S: Arena<T> + ?Sized,
    {
        if !arena.contains(pred) {
            return Err(QueueError::NotMember(pred));
        }
        let victim = link::<A, S>(arena, pred)
            .next()
            .ok_or(QueueError::NoSuccessor(pred))?;
        if !arena.contains(victim) {
            return Err(QueueError::Corrupt(pred));
        }
        let link = link_mut::<A, S>(arena, victim);
        let next = link.next();
        link.unlink();
        link_mut::<A, S>(arena, pred).set_next(next);
        Ok(victim)
    }

    /// Remove `elm` from the list.
    ///
    /// O(n): the predecessor is found by walking from the head.
    ///
    /// # Panics
    ///
    /// Panics if `elm` is not on the list.
    #[track_caller]
    pub fn remove<S>(&mut self, arena: &mut S, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        if let Err(err) = self.try_remove(arena, elm) {
            check::violated(format_args!("slist remove: {err}"));
        }
    }

    /// Remove `elm` from the list, or report [`QueueError::NotMember`].
    pub fn try_remove<S>(&mut self, arena: &mut S, elm: usize) -> Result<(), QueueError>
    where
        S: Arena<T> + ?Sized,
    {
        if !arena.contains(elm) {
            return Err(QueueError::NotMember(elm));
        }
        let slot = self
            .iter_slots(arena)
            .find_map(|(slot, current)| (current == elm).then_some(slot))
            .ok_or(QueueError::NotMember(elm))?;
        self.remove_at(arena, slot);
        Ok(())
    }

    /// Remove the element held by `slot`, as yielded by [`SList::iter_slots`].
    ///
    /// # Panics
    ///
    /// Panics if `slot` holds no element.
    #[track_caller]
    pub fn remove_at<S>(&mut self, arena: &mut S, slot: Slot) -> usize
    where
        S: Arena<T> + ?Sized,
    {
        match slot {
            Slot::First => self.remove_head(arena),
            Slot::Next(pred) => self.remove_after(arena, pred),
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

    /// Iterate over `(slot, element)` pairs, the slot being the one that
    /// holds the element.
    pub fn iter_slots<'a, S>(&self, arena: &'a S) -> SlotIter<'a, A, S>
    where
        S: Arena<T> + ?Sized,
    {
        SlotIter::new(arena, self.first)
    }
}

impl<T, A> Default for SList<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> fmt::Debug for SList<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SList").field("first", &self.first).finish()
    }
}
