//! Storage of plants and their care logs.
//!
//! [`PlantRepository`] is the port the request handlers depend on.
//! [`postgres::PostgresPlantRepository`] is the production binding; tests use
//! the in-memory [`memory::MemoryPlantRepository`].

pub mod postgres;
pub mod traits;
#[cfg(test)]
pub mod memory;

pub use postgres::PostgresPlantRepository;
pub use traits::PlantRepository;

use plants::PlantId;

/// Errors from the persistence layer.
///
/// Store errors carry the driver's message unchanged; handlers echo it to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    #[error("database: Database URL not set")]
    ConfigMissing,

    #[error("database: connection failed: {0}")]
    ConnectionFailed(String),

    #[error("database: tables plant and plant_log not found in schema '{0}'")]
    SchemaMissing(String),

    #[error("no plant with id {0}")]
    NotFound(PlantId),

    #[error("{0}")]
    Query(String),

    #[error("{0}")]
    Insert(String),

    /// The pool had no free connection or the call missed its deadline.
    /// Safe to retry.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl PersistenceError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, PersistenceError::Unavailable(_))
    }
}
