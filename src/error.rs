//! Error types for tandem

use thiserror::Error;

/// Result type alias using tandem's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tandem algorithms
///
/// Capability mismatches (for example sorting a forward-only range) never show
/// up here: they are rejected by the type checker before anything runs.
#[derive(Error, Debug)]
pub enum Error {
    /// The device allocator could not satisfy a request
    #[error("Out of memory: failed to allocate {size} bytes ({available} bytes available)")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
        /// Bytes still available in the allocator budget
        available: usize,
    },

    /// A range is shorter than the operation requires
    #[error("Length mismatch in '{op}': expected at least {expected} elements, got {got}")]
    LengthMismatch {
        /// The operation name
        op: &'static str,
        /// Minimum number of elements required
        expected: usize,
        /// Number of elements supplied
        got: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for range of length {len}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Length of the indexed range
        len: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Device ranges passed to one operation live on different devices
    #[error("Device mismatch: ranges must live on the same device")]
    DeviceMismatch,

    /// Backend-specific error
    #[error("Backend error: {0}")]
    Backend(String),
}

impl Error {
    /// Create a length mismatch error
    pub fn length_mismatch(op: &'static str, expected: usize, got: usize) -> Self {
        Self::LengthMismatch { op, expected, got }
    }

    /// Create an out of memory error
    pub fn out_of_memory(size: usize, available: usize) -> Self {
        Self::OutOfMemory { size, available }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Whether this error reports allocator exhaustion
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }
}
