//! Dog domain entity

use serde::{Deserialize, Serialize};

/// Dog information exchanged over the HTTP API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub name: String,
    pub breed: String,
    pub age: i32,
}
