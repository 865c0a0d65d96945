pub mod allocator;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod store;

use std::sync::Arc;

use allocator::SeatAllocator;
use store::PgSeatStore;

// Shared state for the whole application.
#[derive(Clone)]
pub struct AppState {
    pub allocator: SeatAllocator<PgSeatStore>,
    pub config: config::Config,
}

impl AppState {
    pub async fn new(config: config::Config) -> Result<Arc<Self>, Box<dyn std::error::Error>> {
        let store = PgSeatStore::connect(&config.database.url, config.database.pool_size).await?;

        store.run_migrations().await?;
        store
            .ensure_chart(config.chart.rows, config.chart.seats_per_row)
            .await?;

        let allocator = SeatAllocator::new(store, config.chart.preferred_row);

        Ok(Arc::new(Self { allocator, config }))
    }
}
