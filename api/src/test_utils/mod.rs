//! Test utilities
//!
//! Hand-written test doubles for the port traits, plus fixtures.
//! Doubles are plain structs so tests control exactly what they return.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
