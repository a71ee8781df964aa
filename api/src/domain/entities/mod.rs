//! Domain entities
//!
//! Plain records describing the animals served by the API.

pub mod cat;
pub mod dog;

pub use cat::Cat;
pub use dog::Dog;
