//! Domain layer - error kinds shared by the store and API layers.

pub mod errors;

pub use errors::DomainError;
