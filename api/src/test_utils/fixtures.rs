//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Cat, Dog};

/// Create a test dog with default values
pub fn test_dog() -> Dog {
    Dog {
        name: "Buddy".to_string(),
        breed: "Golden Retriever".to_string(),
        age: 3,
    }
}

/// Create a test cat with default values
pub fn test_cat() -> Cat {
    Cat {
        name: "Misty".to_string(),
        breed: "Maine Coon".to_string(),
        age: 5,
    }
}
