use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single seat in the chart. `(row_number, seat_number)` is unique; only
/// `is_booked` ever changes after the chart is seeded.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Seat {
    pub id: i64,
    pub row_number: i32,
    pub seat_number: i32,
    pub is_booked: bool,
}
