//! Error types for the comembership kernel.

use thiserror::Error;

/// Failures raised before any output is allocated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComembershipError {
    /// n(n-1)/2 pairs do not fit in the output container.
    #[error("capacity overflow: {n} labels yield more pairs than can be allocated")]
    CapacityOverflow { n: usize },

    /// The allocator could not provide the output buffer.
    #[error("allocation failed: no room for {pairs} comembership values")]
    AllocationFailed { pairs: usize },

    /// Two sequences describing the same observations differ in length.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Convenience alias used throughout the kernel.
pub type Result<T> = std::result::Result<T, ComembershipError>;
