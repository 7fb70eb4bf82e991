use core::marker::PhantomData;

use super::slot::Slot;
use super::traits::{link, Adapter, Arena, Link, LinkWithPrev};

/// A forward iterator over the elements of a container.
///
/// Borrows the arena, so the container cannot be modified while the
/// iterator is alive. Use a [`Cursor`] to modify the container mid-walk.
pub struct Iter<'a, A, S>
where
    A: Adapter,
    S: Arena<A::Elem> + ?Sized,
{
    arena: &'a S,
    current: Option<usize>,
    _adapter: PhantomData<fn() -> A>,
}

impl<'a, A, S> Iter<'a, A, S>
where
    A: Adapter,
    A::Link: Link,
    S: Arena<A::Elem> + ?Sized,
{
    pub(crate) fn new(arena: &'a S, start: Option<usize>) -> Self {
        Self {
            arena,
            current: start,
            _adapter: PhantomData,
        }
    }
}

impl<A, S> Iterator for Iter<'_, A, S>
where
    A: Adapter,
    A::Link: Link,
    S: Arena<A::Elem> + ?Sized,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.current?;
        self.current = link::<A, S>(self.arena, current).next();
        Some(current)
    }
}

/// A backward iterator over the elements of a tail queue.
pub struct RevIter<'a, A, S>
where
    A: Adapter,
    S: Arena<A::Elem> + ?Sized,
{
    arena: &'a S,
    current: Option<usize>,
    _adapter: PhantomData<fn() -> A>,
}

impl<'a, A, S> RevIter<'a, A, S>
where
    A: Adapter,
    A::Link: LinkWithPrev,
    S: Arena<A::Elem> + ?Sized,
{
    pub(crate) fn new(arena: &'a S, start: Option<usize>) -> Self {
        Self {
            arena,
            current: start,
            _adapter: PhantomData,
        }
    }
}

impl<A, S> Iterator for RevIter<'_, A, S>
where
    A: Adapter,
    A::Link: LinkWithPrev,
    S: Arena<A::Elem> + ?Sized,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.current?;
        self.current = link::<A, S>(self.arena, current).prev().and_then(Slot::owner);
        Some(current)
    }
}

/// A forward walk that tolerates removal of the element it just returned.
///
/// The successor is read before the element is handed out, so the caller
/// may remove or re-link the current element (but not its successor)
/// before asking for the next one.
///
/// ```
/// use mola_queue::{Linked, SList, SListLink};
///
/// #[derive(Default, Linked)]
/// struct Buf {
///     len: usize,
///     link: SListLink,
/// }
///
/// let mut bufs: Vec<Buf> = (0..5).map(|len| Buf { len, ..Default::default() }).collect();
/// let mut free = SList::<Buf>::new();
/// for i in 0..5 {
///     free.insert_head(&mut bufs, i);
/// }
///
/// let mut cursor = free.iter_safe();
/// while let Some(i) = cursor.next(&bufs) {
///     if bufs[i].len % 2 == 1 {
///         free.remove(&mut bufs, i);
///     }
/// }
/// assert_eq!(free.iter(&bufs).collect::<Vec<_>>(), vec![4, 2, 0]);
/// ```
pub struct Cursor<A> {
    next: Option<usize>,
    _adapter: PhantomData<fn() -> A>,
}

impl<A> Cursor<A>
where
    A: Adapter,
    A::Link: Link,
{
    pub(crate) fn new(start: Option<usize>) -> Self {
        Self {
            next: start,
            _adapter: PhantomData,
        }
    }

    /// Return the current element and step past it.
    pub fn next<S>(&mut self, arena: &S) -> Option<usize>
    where
        S: Arena<A::Elem> + ?Sized,
    {
        let current = self.next?;
        self.next = link::<A, S>(arena, current).next();
        Some(current)
    }
}

/// A backward walk that tolerates removal of the element it just returned.
pub struct RevCursor<A> {
    prev: Option<usize>,
    _adapter: PhantomData<fn() -> A>,
}

impl<A> RevCursor<A>
where
    A: Adapter,
    A::Link: LinkWithPrev,
{
    pub(crate) fn new(start: Option<usize>) -> Self {
        Self {
            prev: start,
            _adapter: PhantomData,
        }
    }

    /// Return the current element and step before it.
    pub fn next<S>(&mut self, arena: &S) -> Option<usize>
    where
        S: Arena<A::Elem> + ?Sized,
    {
        let current = self.prev?;
        self.prev = link::<A, S>(arena, current).prev().and_then(Slot::owner);
        Some(current)
    }
}

/// A forward iterator yielding each element along with the slot holding it.
pub struct SlotIter<'a, A, S>
where
    A: Adapter,
    S: Arena<A::Elem> + ?Sized,
{
    arena: &'a S,
    slot: Slot,
    current: Option<usize>,
    _adapter: PhantomData<fn() -> A>,
}

impl<'a, A, S> SlotIter<'a, A, S>
where
    A: Adapter,
    A::Link: Link,
    S: Arena<A::Elem> + ?Sized,
{
    pub(crate) fn new(arena: &'a S, first: Option<usize>) -> Self {
        Self {
            arena,
            slot: Slot::First,
            current: first,
            _adapter: PhantomData,
        }
    }
}

impl<A, S> Iterator for SlotIter<'_, A, S>
where
    A: Adapter,
    A::Link: Link,
    S: Arena<A::Elem> + ?Sized,
{
    type Item = (Slot, usize);

    fn next(&mut self) -> Option<(Slot, usize)> {
        let current = self.current?;
        let item = (self.slot, current);
        self.slot = Slot::Next(current);
        self.current = link::<A, S>(self.arena, current).next();
        Some(item)
    }
}
