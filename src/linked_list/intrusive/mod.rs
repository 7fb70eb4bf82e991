//! # Intrusive Queues
//!
//! This module provides four intrusive container kinds.
//!
//! ## Core Components
//!
//! - [`traits`]: The `Arena`, `Adapter`, `Link` and `LinkWithPrev` traits.
//! - [`slot::Slot`]: Names the slot holding a reference to an element.
//! - [`slist::SList`]: Singly-linked list, LIFO oriented.
//! - [`stailq::STailQ`]: Singly-linked tail queue, FIFO oriented.
//! - [`list::List`]: Doubly-linked list with O(1) removal.
//! - [`tailq::TailQ`]: Doubly-linked tail queue, the general purpose kind.
//! - [`iter`]: Borrowing iterators and mutation tolerant cursors.
//! - [`sync::Guarded`]: One lock guarding a head and its arena.
//!
//! ## Contract
//!
//! The containers never own elements. The caller is responsible for:
//!
//! - Passing the same arena to every operation on a given head.
//! - Keeping an element in at most one container per link field.
//! - Only naming elements that are members of the head being operated on.
//!
//! Violations are caught by panics when integrity checks are enabled
//! (`debug_assertions` or the `invariants` feature). Otherwise the result is
//! an inconsistent chain, never memory unsafety. The `try_*` variants report
//! precondition violations as [`error::QueueError`] instead.

pub mod error;
pub mod iter;
pub mod list;
pub mod slist;
pub mod slot;
pub mod stailq;
pub mod sync;
pub mod tailq;
pub mod trace;
pub mod traits;

mod check;

#[cfg(test)]
mod tests;
