use core::hash::BuildHasher;
use core::marker::PhantomData;

use alloc::vec::Vec;

use super::slot::Slot;

/// Caller-owned storage holding the elements of a container.
///
/// Elements are named by a stable `usize` index. The containers only ever
/// read and rewrite the link fields of the elements they are handed.
pub trait Arena<T> {
    /// Get the element at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if no element lives at `idx`.
    fn elem(&self, idx: usize) -> &T;

    /// Get the element at `idx` mutably.
    ///
    /// # Panics
    ///
    /// Panics if no element lives at `idx`.
    fn elem_mut(&mut self, idx: usize) -> &mut T;

    /// Check if an element lives at `idx`.
    fn contains(&self, idx: usize) -> bool;
}

impl<T> Arena<T> for [T] {
    #[inline]
    fn elem(&self, idx: usize) -> &T {
        &self[idx]
    }

    #[inline]
    fn elem_mut(&mut self, idx: usize) -> &mut T {
        &mut self[idx]
    }

    #[inline]
    fn contains(&self, idx: usize) -> bool {
        idx < self.len()
    }
}

impl<T, const N: usize> Arena<T> for [T; N] {
    #[inline]
    fn elem(&self, idx: usize) -> &T {
        &self[idx]
    }

    #[inline]
    fn elem_mut(&mut self, idx: usize) -> &mut T {
        &mut self[idx]
    }

    #[inline]
    fn contains(&self, idx: usize) -> bool {
        idx < N
    }
}

impl<T> Arena<T> for Vec<T> {
    #[inline]
    fn elem(&self, idx: usize) -> &T {
        &self[idx]
    }

    #[inline]
    fn elem_mut(&mut self, idx: usize) -> &mut T {
        &mut self[idx]
    }

    #[inline]
    fn contains(&self, idx: usize) -> bool {
        idx < self.len()
    }
}

/// Sparse storage: elements keyed by an id the caller picks.
impl<T, H: BuildHasher> Arena<T> for hashbrown::HashMap<usize, T, H> {
    #[inline]
    fn elem(&self, idx: usize) -> &T {
        match self.get(&idx) {
            Some(elem) => elem,
            None => panic!("no element at index {idx}"),
        }
    }

    #[inline]
    fn elem_mut(&mut self, idx: usize) -> &mut T {
        match self.get_mut(&idx) {
            Some(elem) => elem,
            None => panic!("no element at index {idx}"),
        }
    }

    #[inline]
    fn contains(&self, idx: usize) -> bool {
        self.contains_key(&idx)
    }
}

/// Locates one link field inside an element.
///
/// A record that belongs to several containers at once carries one link
/// field per container, and one adapter per field.
pub trait Adapter {
    /// The element type.
    type Elem;

    /// The link field type.
    type Link;

    /// Get the link field of `elem`.
    fn link(elem: &Self::Elem) -> &Self::Link;

    /// Get the link field of `elem` mutably.
    fn link_mut(elem: &mut Self::Elem) -> &mut Self::Link;
}

/// A record with a single link field of kind `L`.
///
/// Usually derived with `#[derive(Linked)]`.
pub trait HasLink<L> {
    /// Get the link field.
    fn link(&self) -> &L;

    /// Get the link field mutably.
    fn link_mut(&mut self) -> &mut L;
}

/// The adapter for records implementing [`HasLink`].
pub struct Field<T, L>(PhantomData<fn() -> (T, L)>);

impl<T, L> Adapter for Field<T, L>
where
    T: HasLink<L>,
{
    type Elem = T;
    type Link = L;

    #[inline]
    fn link(elem: &T) -> &L {
        <T as HasLink<L>>::link(elem)
    }

    #[inline]
    fn link_mut(elem: &mut T) -> &mut L {
        <T as HasLink<L>>::link_mut(elem)
    }
}

/// A trait for the forward half of a link field.
pub trait Link {
    /// Get the next element.
    fn next(&self) -> Option<usize>;

    /// Set the next element.
    fn set_next(&mut self, next: Option<usize>);

    /// Reset the link to the unlinked state.
    fn unlink(&mut self);
}

/// A trait for a link field that also records the slot holding its element.
pub trait LinkWithPrev: Link {
    /// Get the slot that references this element, `None` when unlinked.
    fn prev(&self) -> Option<Slot>;

    /// Set the slot that references this element.
    fn set_prev(&mut self, prev: Option<Slot>);
}

#[inline]
pub(crate) fn link<'a, A, S>(arena: &'a S, idx: usize) -> &'a A::Link
where
    A: Adapter,
    A::Elem: 'a,
    S: Arena<A::Elem> + ?Sized,
{
    A::link(arena.elem(idx))
}

#[inline]
pub(crate) fn link_mut<'a, A, S>(arena: &'a mut S, idx: usize) -> &'a mut A::Link
where
    A: Adapter,
    A::Elem: 'a,
    S: Arena<A::Elem> + ?Sized,
{
    A::link_mut(arena.elem_mut(idx))
}
