//! Pure seat-selection planning. Works on a snapshot of the chart and picks
//! seat ids without touching storage; the allocator turns the pick into a
//! conditional booking.

use crate::models::Seat;

/// Group size that triggers the preferred-row special case.
pub const PREFERRED_GROUP_SIZE: usize = 3;

/// Pick `count` seat ids from the snapshot, trying strategies in strict
/// priority order: preferred row (groups of three only), lowest contiguous
/// block, single-seat fallback. `None` when no strategy can satisfy `count`.
pub fn select_seats(seats: &[Seat], count: usize, preferred_row: i32) -> Option<Vec<i64>> {
    let mut unbooked: Vec<&Seat> = seats.iter().filter(|s| !s.is_booked).collect();
    unbooked.sort_by_key(|s| (s.row_number, s.seat_number));

    if count == PREFERRED_GROUP_SIZE {
        if let Some(ids) = preferred_row_pick(&unbooked, count, preferred_row) {
            return Some(ids);
        }
    }

    if let Some(ids) = contiguous_block(&unbooked, count) {
        return Some(ids);
    }

    // Unreachable while contiguous search accepts runs of length 1, kept as
    // an explicit last resort for single passengers.
    if count == 1 {
        return unbooked.first().map(|s| vec![s.id]);
    }

    None
}

/// The `count` lowest-numbered unbooked seats of the preferred row,
/// regardless of gaps between them. `None` when the row has fewer than
/// `count` unbooked seats (or does not exist in the chart).
fn preferred_row_pick(unbooked: &[&Seat], count: usize, preferred_row: i32) -> Option<Vec<i64>> {
    let picked: Vec<i64> = unbooked
        .iter()
        .filter(|s| s.row_number == preferred_row)
        .take(count)
        .map(|s| s.id)
        .collect();

    (picked.len() == count).then_some(picked)
}

/// First `count` seats of the best contiguous run: runs are maximal
/// sequences of unbooked seats within one row whose raw seat numbers differ
/// by exactly 1 between neighbours. Ties break on lowest row, then lowest
/// starting seat number; the input order guarantees runs are visited in
/// exactly that order.
fn contiguous_block(unbooked: &[&Seat], count: usize) -> Option<Vec<i64>> {
    let mut run: Vec<i64> = Vec::new();
    let mut prev: Option<&Seat> = None;

    for seat in unbooked {
        let extends = prev.is_some_and(|p| {
            p.row_number == seat.row_number && seat.seat_number == p.seat_number + 1
        });
        if !extends {
            run.clear();
        }
        run.push(seat.id);
        prev = Some(seat);

        if run.len() == count {
            return Some(run);
        }
    }

    None
}
