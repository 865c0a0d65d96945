use thiserror::Error;

use crate::store::StoreError;

/// Failure modes of the seat allocator. The HTTP layer maps `InvalidCount`
/// and `NoAvailability` to 400 and `Storage` to 500; the allocator itself is
/// transport-agnostic.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// The requested count is not a positive integer or exceeds the total
    /// chart capacity. Rejected before any booking state is touched.
    #[error("invalid seat count: {0}")]
    InvalidCount(i64),

    /// No strategy produced the requested number of seats. Nothing was
    /// mutated; a lost race against a concurrent allocation that exhausted
    /// the chart also surfaces here.
    #[error("no suitable seats available")]
    NoAvailability,

    /// Underlying persistence error, propagated as-is.
    #[error(transparent)]
    Storage(#[from] StoreError),
}
