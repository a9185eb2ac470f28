//! The store interface the HTTP handlers are written against.
//!
//! Handlers are generic over [`PlantRepository`] and run on a multi-threaded
//! runtime, so every returned future is `Send`.

use super::PersistenceError;
use crate::config::StoreConfig;
use plants::{LogId, PlantId, PlantLog, PlantNames, PlantShortDesc};
use std::future::Future;

/// Repository for plants and their log entries.
///
/// Every write is a single insert returning the identifier the store assigned.
/// No operation spans more than one statement, so there is no atomicity across
/// calls. Referential integrity between logs and plants is enforced by the
/// store alone.
pub trait PlantRepository: Send + Sync + Sized {
    /// Open the store described by `config`.
    ///
    /// Fails with `ConfigMissing` for a blank URL, `ConnectionFailed` when the
    /// store cannot be reached, and `SchemaMissing` when either table is absent.
    fn connect(
        config: &StoreConfig,
    ) -> impl Future<Output = Result<Self, PersistenceError>> + Send;

    /// Release every connection. Best-effort; never fails.
    fn close(&self) -> impl Future<Output = ()> + Send;

    fn list_plants_short_description(
        &self,
    ) -> impl Future<Output = Result<Vec<PlantShortDesc>, PersistenceError>> + Send;

    /// Insert a plant from already sanitized names.
    fn add_plant(
        &self,
        common: &str,
        generic: &str,
        specific: &str,
    ) -> impl Future<Output = Result<PlantId, PersistenceError>> + Send;

    /// Names of the plant `id`; `NotFound` when no row matches.
    fn get_plant_names(
        &self,
        id: PlantId,
    ) -> impl Future<Output = Result<PlantNames, PersistenceError>> + Send;

    /// Logs of the plant `id` in insertion order. An unknown plant has no logs.
    fn list_plant_logs(
        &self,
        id: PlantId,
    ) -> impl Future<Output = Result<Vec<PlantLog>, PersistenceError>> + Send;

    fn add_plant_log(
        &self,
        plant_id: PlantId,
        desc: &str,
        event_type: i32,
    ) -> impl Future<Output = Result<LogId, PersistenceError>> + Send;
}
