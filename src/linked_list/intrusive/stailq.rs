//! Singly-linked tail queue.
//!
//! Like [`SList`](super::slist::SList), plus a reference to the slot holding
//! the last element's successor. That slot gives O(1) tail insertion, O(1)
//! concatenation and O(1) access to the last element. Best suited for FIFO
//! use.

use core::fmt;
use core::marker::PhantomData;

use super::check;
use super::error::QueueError;
use super::iter::{Cursor, Iter, SlotIter};
use super::slot::{self, Slot};
use super::traits::{link, link_mut, Adapter, Arena, Field, HasLink, Link};

/// The link field of a singly-linked tail queue element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct STailQLink {
    next: Option<usize>,
}

impl Link for STailQLink {
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

impl HasLink<STailQLink> for STailQLink {
    fn link(&self) -> &STailQLink {
        self
    }

    fn link_mut(&mut self) -> &mut STailQLink {
        self
    }
}

/// The head of a singly-linked tail queue.
pub struct STailQ<T, A = Field<T, STailQLink>> {
    first: Option<usize>,
    /// Slot holding the last element's successor, [`Slot::First`] when empty.
    last: Slot,
    _marker: PhantomData<fn() -> (T, A)>,
}

impl<T, A> STailQ<T, A> {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        STailQ {
            first: None,
            last: Slot::First,
            _marker: PhantomData,
        }
    }

    /// Reset the queue to empty.
    ///
    /// Elements still on the queue are abandoned, their links are not touched.
    pub fn init(&mut self) {
        self.first = None;
        self.last = Slot::First;
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Get the first element.
    pub fn first(&self) -> Option<usize> {
        self.first
    }

    /// Get the last element in O(1).
    pub fn last(&self) -> Option<usize> {
        self.last.owner()
    }

    /// The slot holding the last element's successor.
    pub fn last_slot(&self) -> Slot {
        self.last
    }

    /// Exchange the contents of two queues.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.first, &mut other.first);
        core::mem::swap(&mut self.last, &mut other.last);
        if self.is_empty() {
            self.last = Slot::First;
        }
        if other.is_empty() {
            other.last = Slot::First;
        }
    }
}

impl<T, A> STailQ<T, A>
where
    A: Adapter<Elem = T, Link = STailQLink>,
{
    /// Get the element following `elm`.
    pub fn next<S>(&self, arena: &S, elm: usize) -> Option<usize>
    where
        S: Arena<T> + ?Sized,
    {
        link::<A, S>(arena, elm).next()
    }

    /// Insert `elm` at the head of the queue.
    pub fn insert_head<S>(&mut self, arena: &mut S, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        link_mut::<A, S>(arena, elm).set_next(self.first);
        if self.first.is_none() {
            self.last = Slot::Next(elm);
        }
        self.first = Some(elm);
    }

    /// Insert `elm` at the tail of the queue.
    #[track_caller]
    pub fn insert_tail<S>(&mut self, arena: &mut S, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        check::tail::<A, S>("stailq", self.first, self.last, arena);
        link_mut::<A, S>(arena, elm).set_next(None);
        slot::write::<A, S>(&mut self.first, arena, self.last, Some(elm));
        self.last = Slot::Next(elm);
    }

    /// Insert `elm` right after `pred`, which must be on the queue.
    pub fn insert_after<S>(&mut self, arena: &mut S, pred: usize, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        let next = link::<A, S>(arena, pred).next();
        link_mut::<A, S>(arena, elm).set_next(next);
        if next.is_none() {
            self.last = Slot::Next(elm);
        }
        link_mut::<A, S>(arena, pred).set_next(Some(elm));
    }

    /// Remove and return the first element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[track_caller]
    pub fn remove_head<S>(&mut self, arena: &mut S) -> usize
    where
        S: Arena<T> + ?Sized,
    {
        match self.try_remove_head(arena) {
            Ok(elm) => elm,
            Err(err) => check::violated(format_args!("stailq remove_head: {err}")),
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
        if self.first.is_none() {
            self.last = Slot::First;
        }
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
            Err(err) => check::violated(format_args!("stailq remove_after: {err}")),
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
        if next.is_none() {
            self.last = Slot::Next(pred);
        }
        Ok(victim)
    }

    /// Remove `elm` from the queue.
    ///
    /// O(n): the predecessor is found by walking from the head.
    ///
    /// # Panics
    ///
    /// Panics if `elm` is not on the queue.
    #[track_caller]
    pub fn remove<S>(&mut self, arena: &mut S, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        if let Err(err) = self.try_remove(arena, elm) {
            check::violated(format_args!("stailq remove: {err}"));
        }
    }

    /// Remove `elm` from the queue, or report [`QueueError::NotMember`].
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
        match slot {
            Slot::First => self.try_remove_head(arena)?,
            Slot::Next(pred) => self.try_remove_after(arena, pred)?,
        };
        Ok(())
    }

    /// Append every element of `other` to this queue, leaving `other` empty.
    #[track_caller]
    pub fn concat<S>(&mut self, other: &mut Self, arena: &mut S)
    where
        S: Arena<T> + ?Sized,
    {
        if other.is_empty() {
            return;
        }
        check::tail::<A, S>("stailq", self.first, self.last, arena);
        slot::write::<A, S>(&mut self.first, arena, self.last, other.first);
        self.last = other.last;
        other.init();
    }

    /// Iterate over the queue from the head.
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

    /// Walk the queue from the head while removing visited elements.
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

impl<T, A> Default for STailQ<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> fmt::Debug for STailQ<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("STailQ")
            .field("first", &self.first)
            .field("last", &self.last)
            .finish()
    }
}
