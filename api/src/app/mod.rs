//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod animal_service;

pub use animal_service::{AnimalService, AnimalUseCase};
