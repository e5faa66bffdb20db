use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use sqlx::PgPool;
use tracing::{debug, error};

/// Connection pool occupancy at the time of the check.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PoolStats {
    pub size: u32,
    pub idle: usize,
    pub max_connections: u32,
}

impl PoolStats {
    fn of(pool: &PgPool, max_connections: u32) -> Self {
        Self {
            size: pool.size(),
            idle: pool.num_idle(),
            max_connections,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
    pub pool: PoolStats,
}

impl HealthReport {
    fn new(database_up: bool, pool: PoolStats) -> (StatusCode, Self) {
        let (status, database, code) = if database_up {
            ("healthy", "up", StatusCode::OK)
        } else {
            ("unhealthy", "down", StatusCode::SERVICE_UNAVAILABLE)
        };
        let report = Self {
            status,
            database,
            version: env!("CARGO_PKG_VERSION"),
            pool,
        };
        (code, report)
    }
}

/// Pings Postgres through the shared pool and reports its occupancy.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let database_up = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => true,
        Err(e) => {
            error!("Health check failed: database unreachable: {}", e);
            false
        }
    };

    let pool = PoolStats::of(&state.db, state.config.database_max_connections);
    debug!(
        "Pool size {}, idle {}, max {}",
        pool.size, pool.idle, pool.max_connections
    );

    let (code, report) = HealthReport::new(database_up, pool);
    (code, Json(report))
}
