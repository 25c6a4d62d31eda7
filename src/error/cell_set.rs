use super::LocalIjError;
use core::fmt;

/// Errors occurring during aggregate operations on a [`CellSet`](crate::CellSet).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CellSetError {
    /// The operation requires a non-empty set, but an empty one was given.
    EmptySet,
    /// The cells in a set (or across two sets) don't all share the same
    /// resolution.
    ResolutionMismatch,
    /// Error related to the `IJK` coordinate system, encountered while
    /// computing a grid distance between two cells of the sets.
    LocalIj(LocalIjError),
}

impl fmt::Display for CellSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EmptySet => write!(f, "empty cell set"),
            Self::ResolutionMismatch => write!(f, "resolution mismatch"),
            Self::LocalIj(err) => write!(f, "local IJ error: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CellSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::EmptySet | Self::ResolutionMismatch => None,
            Self::LocalIj(ref err) => Some(err),
        }
    }
}

impl From<LocalIjError> for CellSetError {
    fn from(value: LocalIjError) -> Self {
        Self::LocalIj(value)
    }
}
