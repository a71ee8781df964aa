//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod database;
pub mod repositories;

pub use database::{ConnectionPool, PoolStats};
pub use repositories::AnimalRepository;
