//! Cat domain entity

use serde::{Deserialize, Serialize};

/// Cat information exchanged over the HTTP API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    pub name: String,
    pub breed: String,
    pub age: i32,
}
