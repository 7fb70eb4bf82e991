//! Doubly-linked tail queue.
//!
//! The general purpose kind. The head references the first element and the
//! slot holding the last element's successor, and each element records the
//! slot that holds it. Together these give O(1) insertion at the head, at
//! the tail, before or after any element, O(1) removal of any element, O(1)
//! concatenation and traversal in both directions.
//!
//! Every mutation keeps three things consistent at once: the forward chain,
//! the back-references, and the head's last-slot. An empty queue has no
//! first element and its last-slot is its own first slot.
//!
//! Reverse traversal needs nothing from the head beyond its last-slot: a
//! back-reference of [`Slot::Next(p)`](Slot::Next) names the predecessor `p`
//! directly, and the last-slot of a non-empty queue names the last element.

use core::fmt;
use core::marker::PhantomData;

use super::check;
use super::error::QueueError;
use super::iter::{Cursor, Iter, RevCursor, RevIter};
use super::slot::{self, Slot};
use super::trace::Trace;
use super::traits::{link, link_mut, Adapter, Arena, Field, HasLink, Link, LinkWithPrev};

const KIND: &str = "tailq";

/// The link field of a tail queue element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TailQLink {
    next: Option<usize>,
    prev: Option<Slot>,
    trace: Trace,
}

impl TailQLink {
    /// Creates an unlinked link.
    pub const fn new() -> Self {
        TailQLink {
            next: None,
            prev: None,
            trace: Trace::new(),
        }
    }

    /// Check if the element is currently on a queue.
    pub fn is_linked(&self) -> bool {
        self.prev.is_some()
    }

    /// The last modifications of this link.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}

impl Link for TailQLink {
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

impl LinkWithPrev for TailQLink {
    #[inline]
    fn prev(&self) -> Option<Slot> {
        self.prev
    }

    #[inline]
    fn set_prev(&mut self, prev: Option<Slot>) {
        self.prev = prev;
    }
}

impl HasLink<TailQLink> for TailQLink {
    fn link(&self) -> &TailQLink {
        self
    }

    fn link_mut(&mut self) -> &mut TailQLink {
        self
    }
}

/// The head of a tail queue.
pub struct TailQ<T, A = Field<T, TailQLink>> {
    first: Option<usize>,
    /// Slot holding the last element's successor, [`Slot::First`] when empty.
    last: Slot,
    trace: Trace,
    _marker: PhantomData<fn() -> (T, A)>,
}

impl<T, A> TailQ<T, A> {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        TailQ {
            first: None,
            last: Slot::First,
            trace: Trace::new(),
            _marker: PhantomData,
        }
    }

    /// Reset the queue to empty.
    ///
    /// Elements still on the queue are abandoned, their links are not touched.
    #[track_caller]
    pub fn init(&mut self) {
        self.first = None;
        self.last = Slot::First;
        self.trace.record();
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

    /// The last modifications of this head.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}

impl<T, A> TailQ<T, A>
where
    A: Adapter<Elem = T, Link = TailQLink>,
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

    /// Insert `elm` at the head of the queue.
    #[track_caller]
    pub fn insert_head<S>(&mut self, arena: &mut S, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        check::head::<A, S>(KIND, self.first, arena);
        match self.first {
            Some(first) => link_mut::<A, S>(arena, first).set_prev(Some(Slot::Next(elm))),
            None => self.last = Slot::Next(elm),
        }
        let link = link_mut::<A, S>(arena, elm);
        link.set_next(self.first);
        link.set_prev(Some(Slot::First));
        link.trace.record();
        self.first = Some(elm);
        self.trace.record();
    }

    /// Insert `elm` at the tail of the queue.
    #[track_caller]
    pub fn insert_tail<S>(&mut self, arena: &mut S, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        check::tail::<A, S>(KIND, self.first, self.last, arena);
        let link = link_mut::<A, S>(arena, elm);
        link.set_next(None);
        link.set_prev(Some(self.last));
        link.trace.record();
        slot::write::<A, S>(&mut self.first, arena, self.last, Some(elm));
        self.last = Slot::Next(elm);
        self.trace.record();
    }

    /// Insert `elm` right after `listelm`, which must be on the queue.
    #[track_caller]
    pub fn insert_after<S>(&mut self, arena: &mut S, listelm: usize, elm: usize)
    where
        S: Arena<T> + ?Sized,
    {
        check::next::<A, S>(KIND, arena, listelm);
        let next = link::<A, S>(arena, listelm).next();
        match next {
            Some(next) => link_mut::<A, S>(arena, next).set_prev(Some(Slot::Next(elm))),
            None => {
                self.last = Slot::Next(elm);
                self.trace.record();
            }
        }
        let link = link_mut::<A, S>(arena, elm);
        link.set_next(next);
        link.set_prev(Some(Slot::Next(listelm)));
        link.trace.record();
        let link = link_mut::<A, S>(arena, listelm);
        link.set_next(Some(elm));
        link.trace.record();
    }

    /// Insert `elm` right before `listelm`, which must be on the queue.
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
        link.trace.record();
        slot::write::<A, S>(&mut self.first, arena, prev, Some(elm));
        let link = link_mut::<A, S>(arena, listelm);
        link.set_prev(Some(Slot::Next(elm)));
        link.trace.record();
    }

    /// Remove `elm` from the queue in O(1).
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
        check::last::<A, S>(KIND, self.last, arena, elm);
        let prev = check::linked_prev::<A, S>(KIND, arena, elm);
        self.unlink(arena, elm, prev);
    }

    /// Remove `elm` from the queue, verifying first that it is linked, that
    /// its back-reference names a slot holding it, and that a last element
    /// is this queue's last.
    #[track_caller]
    pub fn try_remove<S>(&mut self, arena: &mut S, elm: usize) -> Result<(), QueueError>
    where
        S: Arena<T> + ?Sized,
    {
        if !arena.contains(elm) {
            return Err(QueueError::NotMember(elm));
        }
        let elm_link = link::<A, S>(arena, elm);
        let prev = elm_link.prev().ok_or(QueueError::Unlinked(elm))?;
        if elm_link.next().is_none() && self.last != Slot::Next(elm) {
            return Err(QueueError::NotMember(elm));
        }
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

    /// Remove and return the first element.
    #[track_caller]
    pub fn pop_head<S>(&mut self, arena: &mut S) -> Option<usize>
    where
        S: Arena<T> + ?Sized,
    {
        let first = self.first?;
        self.remove(arena, first);
        Some(first)
    }

    /// Remove and return the last element.
    #[track_caller]
    pub fn pop_tail<S>(&mut self, arena: &mut S) -> Option<usize>
    where
        S: Arena<T> + ?Sized,
    {
        let last = self.last()?;
        self.remove(arena, last);
        Some(last)
    }

    #[track_caller]
    fn unlink<S>(&mut self, arena: &mut S, elm: usize, prev: Slot)
    where
        S: Arena<T> + ?Sized,
    {
        let link = link_mut::<A, S>(arena, elm);
        let next = link.next();
        link.unlink();
        link.trace.record();
        match next {
            Some(next) => link_mut::<A, S>(arena, next).set_prev(Some(prev)),
            None => {
                self.last = prev;
                self.trace.record();
            }
        }
        slot::write::<A, S>(&mut self.first, arena, prev, next);
    }

    /// Append every element of `other` to this queue, leaving `other` empty.
    #[track_caller]
    pub fn concat<S>(&mut self, other: &mut Self, arena: &mut S)
    where
        S: Arena<T> + ?Sized,
    {
        let Some(other_first) = other.first else {
            return;
        };
        check::tail::<A, S>(KIND, self.first, self.last, arena);
        slot::write::<A, S>(&mut self.first, arena, self.last, Some(other_first));
        link_mut::<A, S>(arena, other_first).set_prev(Some(self.last));
        self.last = other.last;
        other.init();
        self.trace.record();
    }

    /// Exchange the contents of two queues.
    #[track_caller]
    pub fn swap<S>(&mut self, other: &mut Self, arena: &mut S)
    where
        S: Arena<T> + ?Sized,
    {
        core::mem::swap(&mut self.first, &mut other.first);
        core::mem::swap(&mut self.last, &mut other.last);
        for head in [&mut *self, &mut *other] {
            match head.first {
                Some(first) => link_mut::<A, S>(arena, first).set_prev(Some(Slot::First)),
                None => head.last = Slot::First,
            }
            head.trace.record();
        }
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

    /// Iterate over the queue from the tail.
    pub fn iter_rev<'a, S>(&self, arena: &'a S) -> RevIter<'a, A, S>
    where
        S: Arena<T> + ?Sized,
    {
        RevIter::new(arena, self.last())
    }

    /// Iterate backwards from `start`, or from the tail when `start` is `None`.
    pub fn iter_rev_from<'a, S>(&self, arena: &'a S, start: Option<usize>) -> RevIter<'a, A, S>
    where
        S: Arena<T> + ?Sized,
    {
        RevIter::new(arena, start.or(self.last()))
    }

    /// Walk the queue from the tail while removing visited elements.
    pub fn iter_rev_safe(&self) -> RevCursor<A> {
        RevCursor::new(self.last())
    }

    /// Walk backwards from `start` (or the tail) while removing visited
    /// elements.
    pub fn iter_rev_safe_from(&self, start: Option<usize>) -> RevCursor<A> {
        RevCursor::new(start.or(self.last()))
    }
}

impl<T, A> Default for TailQ<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> fmt::Debug for TailQ<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TailQ")
            .field("first", &self.first)
            .field("last", &self.last)
            .field("trace", &self.trace)
            .finish()
    }
}
