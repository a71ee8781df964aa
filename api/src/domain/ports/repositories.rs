//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::error::DomainError;

/// Repository backing the animal endpoints
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// Placeholder data operation; returns the pool's cumulative wait time
    /// in hours, formatted with six decimal places
    async fn do_something(&self, input: &str) -> Result<String, DomainError>;
}
