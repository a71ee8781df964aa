//! Mock implementations of port traits
//!
//! Configurable test doubles. Each one returns a fixed result and records
//! the inputs it was called with.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::app::AnimalUseCase;
use crate::domain::ports::{AnimalRepository, ConnectionPool, PoolStats};
use crate::error::{AppError, DomainError};

// ============================================================================
// Mock Animal Repository
// ============================================================================

/// Repository double returning a preset output or a database error
#[derive(Default)]
pub struct MockAnimalRepository {
    expected_output: String,
    expected_err: Option<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAnimalRepository {
    pub fn returning(output: &str) -> Self {
        Self {
            expected_output: output.to_string(),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            expected_err: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Inputs received so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnimalRepository for MockAnimalRepository {
    async fn do_something(&self, input: &str) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push(input.to_string());

        match &self.expected_err {
            Some(msg) => Err(DomainError::Database(msg.clone())),
            None => Ok(self.expected_output.clone()),
        }
    }
}

// ============================================================================
// Mock Animal Service
// ============================================================================

/// Service double for exercising the HTTP layer in isolation
#[derive(Default)]
pub struct MockAnimalService {
    expected_output: String,
    expected_err: Option<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAnimalService {
    pub fn returning(output: &str) -> Self {
        Self {
            expected_output: output.to_string(),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            expected_err: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnimalUseCase for MockAnimalService {
    async fn do_something(&self, input: &str) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(input.to_string());

        match &self.expected_err {
            Some(msg) => Err(AppError::service(
                "mock animal service",
                DomainError::Database(msg.clone()),
            )),
            None => Ok(self.expected_output.clone()),
        }
    }
}

// ============================================================================
// Stub Connection Pool
// ============================================================================

/// Pool that always reports the stats it was built with
pub struct StubPool {
    stats: PoolStats,
    ping_err: Option<String>,
}

impl StubPool {
    pub fn new(stats: PoolStats) -> Self {
        Self {
            stats,
            ping_err: None,
        }
    }

    /// Pool whose ping fails with a database error
    pub fn unreachable(message: &str) -> Self {
        Self {
            stats: PoolStats::default(),
            ping_err: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl ConnectionPool for StubPool {
    fn stats(&self) -> PoolStats {
        self.stats
    }

    async fn ping(&self) -> Result<(), DomainError> {
        match &self.ping_err {
            Some(msg) => Err(DomainError::Database(msg.clone())),
            None => Ok(()),
        }
    }
}
