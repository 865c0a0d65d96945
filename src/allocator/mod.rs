//! The seat allocator: validates the requested group size, plans a selection
//! from a chart snapshot, and books it through the store's conditional
//! update. Planning is pure (see [`plan`]); this module owns the
//! orchestration and the atomicity contract.

pub mod plan;

use tracing::debug;

use crate::error::AllocationError;
use crate::models::Seat;
use crate::store::SeatStore;

#[derive(Clone)]
pub struct SeatAllocator<S: SeatStore> {
    store: S,
    preferred_row: i32,
}

impl<S: SeatStore> SeatAllocator<S> {
    pub fn new(store: S, preferred_row: i32) -> Self {
        SeatAllocator {
            store,
            preferred_row,
        }
    }

    /// All seats ordered by `(row_number, seat_number)`. No side effects.
    pub async fn list(&self) -> Result<Vec<Seat>, AllocationError> {
        Ok(self.store.list().await?)
    }

    /// Book exactly `requested` seats, or fail without mutating anything.
    ///
    /// Each attempt snapshots the chart, plans a selection and tries the
    /// conditional booking. A lost race (another allocation booked one of
    /// the planned seats first) re-plans from a fresh snapshot; since every
    /// lost race means the chart shrank in the meantime, the loop terminates
    /// with either a complete booking or `NoAvailability`.
    pub async fn allocate(&self, requested: i64) -> Result<Vec<Seat>, AllocationError> {
        if requested < 1 {
            return Err(AllocationError::InvalidCount(requested));
        }

        loop {
            let seats = self.store.list().await?;
            if requested > seats.len() as i64 {
                return Err(AllocationError::InvalidCount(requested));
            }

            let count = requested as usize;
            let Some(ids) = plan::select_seats(&seats, count, self.preferred_row) else {
                return Err(AllocationError::NoAvailability);
            };

            match self.store.book_if_free(&ids).await? {
                Some(booked) => return Ok(booked),
                None => {
                    debug!("lost race for seats {:?}, re-planning", ids);
                }
            }
        }
    }

    /// Unbook every seat and return the full chart. Idempotent.
    pub async fn reset(&self) -> Result<Vec<Seat>, AllocationError> {
        Ok(self.store.reset_all().await?)
    }
}
