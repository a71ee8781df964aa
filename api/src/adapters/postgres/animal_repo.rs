//! Connection-pool adapter for AnimalRepository

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{AnimalRepository, ConnectionPool};
use crate::error::DomainError;

/// AnimalRepository that reports on the shared connection pool
pub struct PostgresAnimalRepository<P>
where
    P: ConnectionPool + ?Sized,
{
    pool: Arc<P>,
}

impl<P> PostgresAnimalRepository<P>
where
    P: ConnectionPool + ?Sized,
{
    pub fn new(pool: Arc<P>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<P> AnimalRepository for PostgresAnimalRepository<P>
where
    P: ConnectionPool + ?Sized,
{
    async fn do_something(&self, _input: &str) -> Result<String, DomainError> {
        let stats = self.pool.stats();
        let hours = stats.wait_duration.as_secs_f64() / 3600.0;

        tracing::debug!(
            max_open = stats.max_open_connections,
            open = stats.open_connections,
            in_use = stats.in_use,
            idle = stats.idle,
            wait_count = stats.wait_count,
            "Read connection pool stats"
        );

        Ok(format!("{:.6}", hours))
    }
}
