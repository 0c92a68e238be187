use thiserror::Error;
use tracing::debug;

/// Contract violations reported by the containers.
///
/// Every checked operation validates its arguments before touching the
/// container, so a returned error means nothing was modified.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// A positional index is at or past the end, or a key is absent.
    #[error("index out of bound")]
    IndexOutOfBound,
    /// A position is foreign, freed, at a boundary it may not cross, or
    /// unreachable from its counterpart.
    #[error("invalid iterator")]
    InvalidIterator,
    /// `front`, `back` or a pop on a container with no elements.
    #[error("container is empty")]
    ContainerEmpty,
}

/// Result type of the checked container operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    /// Logs the rejected operation and hands the error back for returning.
    #[inline]
    pub(crate) fn raised_by(self, op: &'static str) -> Self {
        debug!(op, error = %self, "operation rejected");
        self
    }
}
