//! Cat handlers
//!
//! `CatController` owns the service handle used by the `/cats` endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::animal::{AnimalQuery, AnimalResult};
use crate::app::AnimalUseCase;
use crate::domain::entities::Cat;
use crate::error::AppError;
use crate::AppState;

const DEFAULT_INPUT: &str = "cat";

/// Controller for cat endpoints
pub struct CatController {
    service: Arc<dyn AnimalUseCase>,
}

impl CatController {
    pub fn new(service: Arc<dyn AnimalUseCase>) -> Self {
        Self { service }
    }

    #[cfg(test)]
    pub fn service(&self) -> &Arc<dyn AnimalUseCase> {
        &self.service
    }

    pub async fn do_something(&self, input: &str) -> Result<String, AppError> {
        tracing::debug!(input, "Cat controller invoking service");
        self.service.do_something(input).await
    }
}

/// Response body for `POST /cats`
#[derive(Debug, Serialize, Deserialize)]
pub struct CatResponse {
    pub cat: Cat,
    pub result: String,
}

/// GET /cats
pub async fn get_cats(
    State(state): State<AppState>,
    Query(query): Query<AnimalQuery>,
) -> Result<Json<AnimalResult>, AppError> {
    let input = query.input.as_deref().unwrap_or(DEFAULT_INPUT);
    let result = state.container.cat_ctl.do_something(input).await?;

    Ok(Json(AnimalResult { result }))
}

/// POST /cats
///
/// Echoes the cat back alongside the service result for its name.
/// Nothing is stored.
pub async fn post_cat(
    State(state): State<AppState>,
    Json(cat): Json<Cat>,
) -> Result<Json<CatResponse>, AppError> {
    let result = state.container.cat_ctl.do_something(&cat.name).await?;

    Ok(Json(CatResponse { cat, result }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_cat, MockAnimalService};

    #[tokio::test]
    async fn controller_delegates_to_service() {
        let service = Arc::new(MockAnimalService::returning("0.500000"));
        let controller = CatController::new(service.clone());

        let result = controller.do_something("tom").await.unwrap();

        assert_eq!(result, "0.500000");
        assert_eq!(service.calls(), vec!["tom".to_string()]);
    }

    #[test]
    fn serialize_cat_response() {
        let response = CatResponse {
            cat: test_cat(),
            result: "0.000000".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["cat"]["name"], "Misty");
        assert_eq!(json["cat"]["age"], 5);
        assert_eq!(json["result"], "0.000000");
    }
}
