//! External synchronization for a head and its elements.
//!
//! The containers themselves are single-writer. When several threads need
//! the same container, one lock guards the head together with the arena
//! holding every element reachable from it.

use crossbeam_utils::CachePadded;
use spin::{Mutex, MutexGuard};

/// A head and the arena it links through.
#[derive(Debug, Default)]
pub struct Shared<H, S> {
    /// The container head.
    pub head: H,
    /// The storage holding the container's elements.
    pub arena: S,
}

/// A head and its arena behind a single spin lock.
///
/// ```
/// use mola_queue::{Guarded, Linked, TailQ, TailQLink};
///
/// #[derive(Default, Linked)]
/// struct Task {
///     link: TailQLink,
/// }
///
/// let ready = Guarded::new(TailQ::<Task>::new(), (0..4).map(|_| Task::default()).collect::<Vec<_>>());
/// ready.with(|queue, tasks| {
///     queue.insert_tail(tasks, 2);
///     queue.insert_tail(tasks, 0);
/// });
/// assert_eq!(ready.with(|queue, tasks| queue.pop_head(tasks)), Some(2));
/// ```
pub struct Guarded<H, S> {
    inner: CachePadded<Mutex<Shared<H, S>>>,
}

impl<H, S> Guarded<H, S> {
    /// Creates a new guarded container.
    pub const fn new(head: H, arena: S) -> Self {
        Guarded {
            inner: CachePadded::new(Mutex::new(Shared { head, arena })),
        }
    }

    /// Lock the head and arena.
    pub fn lock(&self) -> MutexGuard<'_, Shared<H, S>> {
        self.inner.lock()
    }

    /// Try to lock the head and arena without spinning.
    pub fn try_lock(&self) -> Option<MutexGuard<'_, Shared<H, S>>> {
        self.inner.try_lock()
    }

    /// Run `f` with the head and arena locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut H, &mut S) -> R) -> R {
        let mut guard = self.inner.lock();
        let Shared { head, arena } = &mut *guard;
        f(head, arena)
    }

    /// Consume the lock, returning the head and arena.
    pub fn into_inner(self) -> (H, S) {
        let Shared { head, arena } = CachePadded::into_inner(self.inner).into_inner();
        (head, arena)
    }
}

impl<H: Default, S: Default> Default for Guarded<H, S> {
    fn default() -> Self {
        Self::new(H::default(), S::default())
    }
}
