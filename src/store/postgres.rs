use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;

use super::{SeatStore, StoreError};
use crate::models::Seat;

const SELECT_ALL: &str =
    "SELECT id, row_number, seat_number, is_booked FROM seats ORDER BY row_number, seat_number";

/// Postgres-backed seat store. Owns the connection pool lifecycle: opened at
/// startup, shared via cheap clones, closed when the process exits.
#[derive(Clone)]
pub struct PgSeatStore {
    pool: Pool<Postgres>,
}

impl PgSeatStore {
    pub async fn connect(database_url: &str, pool_size: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        Ok(PgSeatStore { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        sqlx::migrate!("./src/migrations").run(&self.pool).await?;
        info!("Migrations completed");
        Ok(())
    }

    /// Seed the chart on first start. A non-empty table is left untouched:
    /// the seat set is fixed for the lifetime of the system.
    pub async fn ensure_chart(&self, rows: i32, seats_per_row: i32) -> Result<(), StoreError> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM seats")
            .fetch_one(&self.pool)
            .await?;
        if existing > 0 {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO seats (row_number, seat_number)
            SELECT r, s
            FROM generate_series(1, $1) AS r, generate_series(1, $2) AS s
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(rows)
        .bind(seats_per_row)
        .execute(&self.pool)
        .await?;

        info!("Seeded seat chart: {} rows x {} seats", rows, seats_per_row);
        Ok(())
    }
}

impl SeatStore for PgSeatStore {
    async fn list(&self) -> Result<Vec<Seat>, StoreError> {
        let seats = sqlx::query_as::<_, Seat>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(seats)
    }

    async fn book_if_free(&self, ids: &[i64]) -> Result<Option<Vec<Seat>>, StoreError> {
        let mut tx = self.pool.begin().await?;

        // Conditional update: only currently-unbooked rows transition. A
        // shortfall means another allocation won a seat in this set since
        // the caller's snapshot; roll the whole set back.
        let mut booked = sqlx::query_as::<_, Seat>(
            r#"
            UPDATE seats
            SET is_booked = TRUE
            WHERE id = ANY($1) AND is_booked = FALSE
            RETURNING id, row_number, seat_number, is_booked
            "#,
        )
        .bind(ids)
        .fetch_all(&mut *tx)
        .await?;

        if booked.len() != ids.len() {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;

        booked.sort_by_key(|s| (s.row_number, s.seat_number));
        Ok(Some(booked))
    }

    async fn reset_all(&self) -> Result<Vec<Seat>, StoreError> {
        sqlx::query("UPDATE seats SET is_booked = FALSE")
            .execute(&self.pool)
            .await?;
        self.list().await
    }
}
