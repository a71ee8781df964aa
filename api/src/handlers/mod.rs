//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod animal;
pub mod cats;
pub mod dogs;
pub mod health;

pub use cats::{get_cats, post_cat, CatController};
pub use dogs::{get_dogs, post_dog, DogController};
pub use health::{health, ready};
