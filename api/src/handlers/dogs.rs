//! Dog handlers
//!
//! `DogController` owns the service handle used by the `/dogs` endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::animal::{AnimalQuery, AnimalResult};
use crate::app::AnimalUseCase;
use crate::domain::entities::Dog;
use crate::error::AppError;
use crate::AppState;

const DEFAULT_INPUT: &str = "dog";

/// Controller for dog endpoints
pub struct DogController {
    service: Arc<dyn AnimalUseCase>,
}

impl DogController {
    pub fn new(service: Arc<dyn AnimalUseCase>) -> Self {
        Self { service }
    }

    #[cfg(test)]
    pub fn service(&self) -> &Arc<dyn AnimalUseCase> {
        &self.service
    }

    pub async fn do_something(&self, input: &str) -> Result<String, AppError> {
        tracing::debug!(input, "Dog controller invoking service");
        self.service.do_something(input).await
    }
}

/// Response body for `POST /dogs`
#[derive(Debug, Serialize, Deserialize)]
pub struct DogResponse {
    pub dog: Dog,
    pub result: String,
}

/// GET /dogs
pub async fn get_dogs(
    State(state): State<AppState>,
    Query(query): Query<AnimalQuery>,
) -> Result<Json<AnimalResult>, AppError> {
    let input = query.input.as_deref().unwrap_or(DEFAULT_INPUT);
    let result = state.container.dog_ctl.do_something(input).await?;

    Ok(Json(AnimalResult { result }))
}

/// POST /dogs
///
/// Echoes the dog back alongside the service result for its name.
/// Nothing is stored.
pub async fn post_dog(
    State(state): State<AppState>,
    Json(dog): Json<Dog>,
) -> Result<Json<DogResponse>, AppError> {
    let result = state.container.dog_ctl.do_something(&dog.name).await?;

    Ok(Json(DogResponse { dog, result }))
}
