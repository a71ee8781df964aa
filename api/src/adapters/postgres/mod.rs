//! PostgreSQL adapters
//!
//! Connection pool wrappers and the repository built on top of them.

pub mod animal_repo;
pub mod pool;

pub use animal_repo::PostgresAnimalRepository;
pub use pool::{DetachedPool, PostgresPool};
