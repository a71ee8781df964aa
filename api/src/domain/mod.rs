//! Domain layer
//!
//! - `entities`: the animal records served over HTTP
//! - `ports`: traits the adapters implement (pool, repository)

pub mod entities;
pub mod ports;
