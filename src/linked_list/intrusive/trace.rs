//! Audit trail for tail queue heads and links.
//!
//! With the `trace` feature each [`Trace`] remembers the call sites of the
//! last two mutations of the head or link it is embedded in, which helps
//! finding out who corrupted a chain after the fact. Without the feature it
//! is a zero-sized type and recording compiles to nothing.

use core::panic::Location;

/// The last two call sites that modified a head or link.
#[cfg(feature = "trace")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trace {
    last: Option<&'static Location<'static>>,
    prev: Option<&'static Location<'static>>,
}

#[cfg(feature = "trace")]
impl Trace {
    /// Creates an empty trace.
    pub const fn new() -> Self {
        Trace {
            last: None,
            prev: None,
        }
    }

    /// Record the caller as the most recent modification.
    #[track_caller]
    #[inline]
    pub fn record(&mut self) {
        let caller = Location::caller();
        log::trace!("queue modified at {}:{}", caller.file(), caller.line());
        self.prev = self.last;
        self.last = Some(caller);
    }

    /// The most recent modification.
    pub fn last(&self) -> Option<&'static Location<'static>> {
        self.last
    }

    /// The modification before [`Trace::last`].
    pub fn prev(&self) -> Option<&'static Location<'static>> {
        self.prev
    }
}

/// The last two call sites that modified a head or link.
///
/// Built without the `trace` feature: nothing is recorded.
#[cfg(not(feature = "trace"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trace;

#[cfg(not(feature = "trace"))]
impl Trace {
    /// Creates an empty trace.
    pub const fn new() -> Self {
        Trace
    }

    /// Does nothing without the `trace` feature.
    #[inline(always)]
    pub fn record(&mut self) {}

    /// Always `None` without the `trace` feature.
    pub fn last(&self) -> Option<&'static Location<'static>> {
        None
    }

    /// Always `None` without the `trace` feature.
    pub fn prev(&self) -> Option<&'static Location<'static>> {
        None
    }
}
