//! Database pool port
//!
//! Abstracts the connection pool so repositories can report pool health
//! without depending on a concrete driver.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::DomainError;

/// Point-in-time snapshot of a connection pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Upper bound on open connections (0 when the pool is detached)
    pub max_open_connections: u32,
    /// Connections currently established, in use or idle
    pub open_connections: u32,
    pub in_use: u32,
    pub idle: u32,
    /// Number of acquisitions that had to wait for a free connection
    pub wait_count: u64,
    /// Total time spent waiting for a free connection
    pub wait_duration: Duration,
}

/// A connection pool that can report its statistics
#[async_trait]
pub trait ConnectionPool: Send + Sync {
    /// Current pool statistics. Reading them never blocks.
    fn stats(&self) -> PoolStats;

    /// Check out a connection and verify the server answers
    async fn ping(&self) -> Result<(), DomainError>;
}
