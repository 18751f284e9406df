// havoc-mutation/src/error.rs
//! Error types for buffer mutation

use thiserror::Error;

/// Errors surfaced by the havoc entry point
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationError {
    /// The caller-declared sizes cannot be mutated: the value exceeds the
    /// buffer, or there is nothing to mutate and no room to grow
    #[error("invalid sizes for mutation: {size}-byte value in a {capacity}-byte buffer")]
    InvalidBufferSize { size: usize, capacity: usize },

    /// The retry budget was exhausted; this indicates a defect in the
    /// operator/filter pairing, not an expected runtime condition
    #[error("havoc stalled: {failures} consecutive mutations failed")]
    StalledMutations { failures: u32 },
}
