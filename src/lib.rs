//! Intrusive, index-linked containers.
//!
//! Four container kinds thread their links through records the caller
//! already owns: [`SList`], [`STailQ`], [`List`] and [`TailQ`]. Records live
//! in caller-provided storage (any [`Arena`]) and are named by their index.
//! No operation allocates.
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod linked_list;

pub use linked_list::intrusive::{
    error::QueueError,
    list::{List, ListLink},
    slist::{SList, SListLink},
    slot::Slot,
    stailq::{STailQ, STailQLink},
    sync::{Guarded, Shared},
    tailq::{TailQ, TailQLink},
    trace::Trace,
    traits::{Adapter, Arena, Field, HasLink, Link, LinkWithPrev},
};
pub use mola_queue_derive::Linked;
