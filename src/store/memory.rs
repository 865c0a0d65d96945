use std::sync::Arc;
use tokio::sync::Mutex;

use super::{SeatStore, StoreError};
use crate::models::Seat;

/// In-memory seat store. Every operation runs inside one mutex-guarded
/// critical section, which gives it the same all-or-nothing semantics as the
/// Postgres store's transactions. Used by the test suite and handy for demos
/// that should not need a database.
#[derive(Clone)]
pub struct MemorySeatStore {
    seats: Arc<Mutex<Vec<Seat>>>,
}

impl MemorySeatStore {
    /// A fresh chart of `rows` x `seats_per_row`, all unbooked, ids assigned
    /// sequentially from 1 in `(row_number, seat_number)` order.
    pub fn with_chart(rows: i32, seats_per_row: i32) -> Self {
        let mut seats = Vec::with_capacity((rows * seats_per_row) as usize);
        let mut id = 0i64;
        for row in 1..=rows {
            for number in 1..=seats_per_row {
                id += 1;
                seats.push(Seat {
                    id,
                    row_number: row,
                    seat_number: number,
                    is_booked: false,
                });
            }
        }
        Self::from_seats(seats)
    }

    /// A store over an explicit seat set, for charts with gaps or pre-booked
    /// seats.
    pub fn from_seats(mut seats: Vec<Seat>) -> Self {
        seats.sort_by_key(|s| (s.row_number, s.seat_number));
        MemorySeatStore {
            seats: Arc::new(Mutex::new(seats)),
        }
    }
}

impl SeatStore for MemorySeatStore {
    async fn list(&self) -> Result<Vec<Seat>, StoreError> {
        Ok(self.seats.lock().await.clone())
    }

    async fn book_if_free(&self, ids: &[i64]) -> Result<Option<Vec<Seat>>, StoreError> {
        let mut seats = self.seats.lock().await;

        // Check-then-set under the lock: all requested seats must exist and
        // be unbooked, otherwise nothing mutates.
        for id in ids {
            match seats.iter().find(|s| s.id == *id) {
                Some(seat) if !seat.is_booked => {}
                _ => return Ok(None),
            }
        }

        let mut booked = Vec::with_capacity(ids.len());
        for seat in seats.iter_mut() {
            if ids.contains(&seat.id) {
                seat.is_booked = true;
                booked.push(seat.clone());
            }
        }
        Ok(Some(booked))
    }

    async fn reset_all(&self) -> Result<Vec<Seat>, StoreError> {
        let mut seats = self.seats.lock().await;
        for seat in seats.iter_mut() {
            seat.is_booked = false;
        }
        Ok(seats.clone())
    }
}
