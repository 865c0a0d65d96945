use serde::Deserialize;
use std::env;

// Container for all runtime settings, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

// Shape of the seat chart and the allocation preference. The chart is seeded
// once; changing rows/seats_per_row after the first start has no effect.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    pub rows: i32,
    pub seats_per_row: i32,
    pub preferred_row: i32,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seat_booking=debug,tower_http=debug".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
                pool_size: env::var("DB_POOL_SIZE")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .expect("DB_POOL_SIZE must be a valid number"),
            },
            chart: ChartConfig {
                rows: env::var("CHART_ROWS")
                    .unwrap_or_else(|_| "12".to_string())
                    .parse()
                    .expect("CHART_ROWS must be a valid number"),
                seats_per_row: env::var("CHART_SEATS_PER_ROW")
                    .unwrap_or_else(|_| "7".to_string())
                    .parse()
                    .expect("CHART_SEATS_PER_ROW must be a valid number"),
                preferred_row: env::var("CHART_PREFERRED_ROW")
                    .unwrap_or_else(|_| "7".to_string())
                    .parse()
                    .expect("CHART_PREFERRED_ROW must be a valid number"),
            },
        }
    }
}
