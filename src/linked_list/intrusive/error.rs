use core::fmt;

/// Precondition violations reported by the checked `try_*` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The container has no elements.
    Empty,
    /// The element has no successor to remove.
    NoSuccessor(usize),
    /// The element is not a member of the container.
    NotMember(usize),
    /// The element is not linked into any container.
    Unlinked(usize),
    /// The links around the element are inconsistent: its back-reference
    /// names a slot that does not hold it, or a neighbour lies outside the
    /// arena.
    Corrupt(usize),
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "container is empty"),
            QueueError::NoSuccessor(idx) => write!(f, "element {idx} has no successor"),
            QueueError::NotMember(idx) => write!(f, "element {idx} is not a member"),
            QueueError::Unlinked(idx) => write!(f, "element {idx} is not linked"),
            QueueError::Corrupt(idx) => write!(f, "links around element {idx} are inconsistent"),
        }
    }
}

impl core::error::Error for QueueError {}
