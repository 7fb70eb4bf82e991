//! Link integrity checks.
//!
//! Run before an operation trusts a head or an element. Enabled with
//! `debug_assertions` or the `invariants` feature; otherwise every check
//! returns immediately. A failed check is fatal.

use core::fmt;

use super::slot::{self, Slot};
use super::traits::{link, Adapter, Arena, Link, LinkWithPrev};

pub(crate) const ENABLED: bool = cfg!(any(debug_assertions, feature = "invariants"));

/// Report a broken precondition or invariant and halt.
#[cold]
#[track_caller]
pub(crate) fn violated(args: fmt::Arguments<'_>) -> ! {
    log::error!("{args}");
    panic!("{args}");
}

/// The first element must point back at the head's first slot.
#[track_caller]
pub(crate) fn head<A, S>(kind: &str, first: Option<usize>, arena: &S)
where
    A: Adapter,
    A::Link: LinkWithPrev,
    S: Arena<A::Elem> + ?Sized,
{
    if !ENABLED {
        return;
    }
    if let Some(first) = first {
        if link::<A, S>(arena, first).prev() != Some(Slot::First) {
            violated(format_args!("bad {kind} head: first->prev != head (first {first})"));
        }
    }
}

/// The last-slot must hold no successor.
#[track_caller]
pub(crate) fn tail<A, S>(kind: &str, first: Option<usize>, last: Slot, arena: &S)
where
    A: Adapter,
    A::Link: Link,
    S: Arena<A::Elem> + ?Sized,
{
    if !ENABLED {
        return;
    }
    if let Some(next) = slot::read::<A, S>(first, arena, last) {
        violated(format_args!("bad {kind}: next of last slot {last:?} is {next}, not null"));
    }
}

/// The successor of `elm`, if any, must point back at `elm`'s next slot.
#[track_caller]
pub(crate) fn next<A, S>(kind: &str, arena: &S, elm: usize)
where
    A: Adapter,
    A::Link: LinkWithPrev,
    S: Arena<A::Elem> + ?Sized,
{
    if !ENABLED {
        return;
    }
    if let Some(next) = link::<A, S>(arena, elm).next() {
        if link::<A, S>(arena, next).prev() != Some(Slot::Next(elm)) {
            violated(format_args!("bad {kind} link: elm {elm} next->prev != elm"));
        }
    }
}

/// The slot named by `elm`'s back-reference must hold `elm`.
#[track_caller]
pub(crate) fn prev<A, S>(kind: &str, first: Option<usize>, arena: &S, elm: usize)
where
    A: Adapter,
    A::Link: LinkWithPrev,
    S: Arena<A::Elem> + ?Sized,
{
    if !ENABLED {
        return;
    }
    if let Some(prev) = link::<A, S>(arena, elm).prev() {
        if slot::read::<A, S>(first, arena, prev) != Some(elm) {
            violated(format_args!("bad {kind} link: elm {elm} prev->next != elm"));
        }
    }
}

/// An element without successor must be the one the head's last-slot names.
#[track_caller]
pub(crate) fn last<A, S>(kind: &str, last: Slot, arena: &S, elm: usize)
where
    A: Adapter,
    A::Link: Link,
    S: Arena<A::Elem> + ?Sized,
{
    if !ENABLED {
        return;
    }
    if link::<A, S>(arena, elm).next().is_none() && last != Slot::Next(elm) {
        violated(format_args!("bad {kind} tail: elm {elm} has no next but last slot is {last:?}"));
    }
}

/// The back-reference of a linked element, halting if it is unlinked.
#[track_caller]
pub(crate) fn linked_prev<A, S>(kind: &str, arena: &S, elm: usize) -> Slot
where
    A: Adapter,
    A::Link: LinkWithPrev,
    S: Arena<A::Elem> + ?Sized,
{
    match link::<A, S>(arena, elm).prev() {
        Some(prev) => prev,
        None => violated(format_args!("{kind} element {elm} is not linked")),
    }
}
