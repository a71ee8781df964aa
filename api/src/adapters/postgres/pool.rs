//! Connection pool adapters
//!
//! `PostgresPool` wraps a SeaORM connection and tracks how long callers
//! waited for a free connection. `DetachedPool` stands in when no database
//! is configured and always reports an empty pool.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::domain::ports::{ConnectionPool, PoolStats};
use crate::error::DomainError;

/// Pool used when the service runs without a database
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedPool;

#[async_trait]
impl ConnectionPool for DetachedPool {
    fn stats(&self) -> PoolStats {
        PoolStats::default()
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

/// Cumulative wait counters, safe to update from concurrent requests
#[derive(Debug, Default)]
pub struct WaitStats {
    count: AtomicU64,
    nanos: AtomicU64,
}

impl WaitStats {
    /// Add one wait. The running total saturates at `u64::MAX` nanoseconds.
    pub fn record(&self, waited: Duration) {
        let nanos = u64::try_from(waited.as_nanos()).unwrap_or(u64::MAX);
        self.count.fetch_add(1, Ordering::Relaxed);
        // the closure never returns None, so the update cannot fail
        let _ = self
            .nanos
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |total| {
                Some(total.saturating_add(nanos))
            });
    }

    /// Returns `(wait_count, wait_duration)`
    pub fn snapshot(&self) -> (u64, Duration) {
        (
            self.count.load(Ordering::Relaxed),
            Duration::from_nanos(self.nanos.load(Ordering::Relaxed)),
        )
    }
}

/// PostgreSQL connection pool backed by SeaORM
pub struct PostgresPool {
    db: DatabaseConnection,
    waits: WaitStats,
}

impl PostgresPool {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            waits: WaitStats::default(),
        }
    }

    /// Connect to PostgreSQL with the given pool limits
    pub async fn connect(
        url: &str,
        max_connections: u32,
        connect_timeout: Duration,
    ) -> Result<Self, DomainError> {
        let mut options = ConnectOptions::new(url.to_owned());
        options
            .max_connections(max_connections)
            .connect_timeout(connect_timeout)
            .sqlx_logging(false);

        let db = Database::connect(options)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Self::new(db))
    }
}

#[async_trait]
impl ConnectionPool for PostgresPool {
    fn stats(&self) -> PoolStats {
        let pool = self.db.get_postgres_connection_pool();
        let open = pool.size();
        let idle = u32::try_from(pool.num_idle()).unwrap_or(u32::MAX).min(open);
        let (wait_count, wait_duration) = self.waits.snapshot();

        PoolStats {
            max_open_connections: pool.options().get_max_connections(),
            open_connections: open,
            in_use: open - idle,
            idle,
            wait_count,
            wait_duration,
        }
    }

    /// Time spent in checkout counts as a wait only when the pool had no
    /// idle connection and no room to open another one.
    async fn ping(&self) -> Result<(), DomainError> {
        let pool = self.db.get_postgres_connection_pool();
        let saturated =
            pool.num_idle() == 0 && pool.size() >= pool.options().get_max_connections();

        let started = Instant::now();
        let conn = pool
            .acquire()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let waited = started.elapsed();
        drop(conn);

        if saturated {
            self.waits.record(waited);
        }

        self.db
            .ping()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}
