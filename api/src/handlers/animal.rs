//! Request and response types shared by the animal endpoints

use serde::{Deserialize, Serialize};

/// Query string for `GET /dogs` and `GET /cats`
#[derive(Debug, Deserialize)]
pub struct AnimalQuery {
    /// Forwarded to the service; each controller supplies its own default
    pub input: Option<String>,
}

/// Result of the placeholder service call
#[derive(Debug, Serialize, Deserialize)]
pub struct AnimalResult {
    pub result: String,
}
