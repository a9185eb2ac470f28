//! PostgreSQL-backed repository implementation.
//!
//! ## Database setup
//!
//! [`Database`] wraps a `sqlx::PgPool` configured with:
//! - **`search_path`** set to the configured schema as a connection option, so
//!   every pooled connection resolves `plant` and `plant_log` the same way.
//! - **Bounded acquisition**: waiting for a free connection is capped by
//!   `StoreConfig::acquire_timeout`.
//! - **Schema check**: [`Database::open`] fails with `SchemaMissing` unless
//!   both tables exist. The schema itself is created by an external script;
//!   nothing here creates or migrates tables.
//!
//! Every statement runs under `StoreConfig::call_timeout`. Pool exhaustion,
//! I/O failures and missed deadlines surface as `PersistenceError::Unavailable`.
//!
//! Rows are fetched as tuples whose column order matches the field order of
//! the domain type they are mapped onto.

mod database;
mod helpers;
mod plant_repo;

pub use database::Database;
pub use plant_repo::PostgresPlantRepository;
