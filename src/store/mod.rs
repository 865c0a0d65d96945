pub mod memory;
pub mod postgres;

pub use memory::MemorySeatStore;
pub use postgres::PgSeatStore;

use thiserror::Error;

use crate::models::Seat;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository seam over the seat table. The store is the single shared
/// mutable resource; it is constructed at startup and injected into the
/// allocator, never accessed as ambient state.
///
/// `book_if_free` carries the concurrency contract: it transitions the whole
/// requested set from unbooked to booked, or nothing at all. Callers plan
/// from a `list()` snapshot, so a `None` result means another allocation
/// booked one of the chosen seats in between (a lost race), not a fault.
#[allow(async_fn_in_trait)]
pub trait SeatStore: Clone + Send + Sync {
    /// All seats ordered by `(row_number, seat_number)` ascending.
    async fn list(&self) -> Result<Vec<Seat>, StoreError>;

    /// Book every seat in `ids` iff all of them are currently unbooked.
    /// Returns the updated seats ordered by `(row_number, seat_number)`, or
    /// `None` (with no mutation) when any seat was already booked.
    async fn book_if_free(&self, ids: &[i64]) -> Result<Option<Vec<Seat>>, StoreError>;

    /// Unbook every seat unconditionally and return the full ordered list.
    async fn reset_all(&self) -> Result<Vec<Seat>, StoreError>;
}
