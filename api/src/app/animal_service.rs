//! Animal service
//!
//! Thin use-case layer between the animal controllers and the repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::AnimalRepository;
use crate::error::AppError;

/// Operations the animal controllers depend on
#[async_trait]
pub trait AnimalUseCase: Send + Sync {
    async fn do_something(&self, input: &str) -> Result<String, AppError>;
}

/// Service for the animal endpoints
pub struct AnimalService<R>
where
    R: AnimalRepository,
{
    animals: Arc<R>,
}

impl<R> AnimalService<R>
where
    R: AnimalRepository,
{
    pub fn new(animals: Arc<R>) -> Self {
        Self { animals }
    }
}

#[async_trait]
impl<R> AnimalUseCase for AnimalService<R>
where
    R: AnimalRepository,
{
    async fn do_something(&self, input: &str) -> Result<String, AppError> {
        self.animals
            .do_something(input)
            .await
            .map_err(|e| AppError::service("error running animal repository", e))
    }
}
