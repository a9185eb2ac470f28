//! In-memory [`PlantRepository`] for handler tests.
//!
//! Mirrors the constraints the SQL schema enforces: a non-empty common name
//! and an existing plant for every log entry. A failure can be injected so
//! every call returns a given error.

use std::sync::Mutex;

use plants::{LogId, PlantId, PlantLog, PlantNames, PlantShortDesc};

use super::traits::PlantRepository;
use super::PersistenceError;
use crate::config::StoreConfig;

#[derive(Default)]
struct State {
    plants: Vec<(PlantId, PlantNames)>,
    logs: Vec<PlantLog>,
    next_plant_id: PlantId,
    next_log_id: LogId,
    failure: Option<PersistenceError>,
}

impl State {
    fn check_failure(&self) -> Result<(), PersistenceError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct MemoryPlantRepository {
    state: Mutex<State>,
}

impl MemoryPlantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository holding plants with the given ids and common names.
    pub fn with_plants(rows: &[(PlantId, &str)]) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.state.lock().unwrap();
            for (id, common) in rows {
                state.plants.push((
                    *id,
                    PlantNames {
                        common: common.to_string(),
                        ..PlantNames::default()
                    },
                ));
                state.next_plant_id = state.next_plant_id.max(*id);
            }
        }
        repo
    }

    /// Make every following call fail with `err`, or succeed again with `None`.
    pub fn fail_with(&self, err: Option<PersistenceError>) {
        self.state.lock().unwrap().failure = err;
    }

    pub fn plant_count(&self) -> usize {
        self.state.lock().unwrap().plants.len()
    }
}

impl PlantRepository for MemoryPlantRepository {
    async fn connect(config: &StoreConfig) -> Result<Self, PersistenceError> {
        if config.database_url.trim().is_empty() {
            return Err(PersistenceError::ConfigMissing);
        }
        Ok(Self::new())
    }

    async fn close(&self) {}

    async fn list_plants_short_description(
        &self,
    ) -> Result<Vec<PlantShortDesc>, PersistenceError> {
        let state = self.state.lock().unwrap();
        state.check_failure()?;
        Ok(state
            .plants
            .iter()
            .map(|(id, names)| PlantShortDesc {
                id: *id,
                common_name: names.common.clone(),
            })
            .collect())
    }

    async fn add_plant(
        &self,
        common: &str,
        generic: &str,
        specific: &str,
    ) -> Result<PlantId, PersistenceError> {
        let mut state = self.state.lock().unwrap();
        state.check_failure()?;
        if common.is_empty() {
            return Err(PersistenceError::Insert(
                "new row for relation \"plant\" violates check constraint \"plant_common_name_check\""
                    .to_string(),
            ));
        }
        state.next_plant_id += 1;
        let id = state.next_plant_id;
        state.plants.push((
            id,
            PlantNames {
                common: common.to_string(),
                generic: generic.to_string(),
                specific: specific.to_string(),
            },
        ));
        Ok(id)
    }

    async fn get_plant_names(&self, id: PlantId) -> Result<PlantNames, PersistenceError> {
        let state = self.state.lock().unwrap();
        state.check_failure()?;
        state
            .plants
            .iter()
            .find(|(plant_id, _)| *plant_id == id)
            .map(|(_, names)| names.clone())
            .ok_or(PersistenceError::NotFound(id))
    }

    async fn list_plant_logs(&self, id: PlantId) -> Result<Vec<PlantLog>, PersistenceError> {
        let state = self.state.lock().unwrap();
        state.check_failure()?;
        Ok(state
            .logs
            .iter()
            .filter(|log| log.plant_id == id)
            .cloned()
            .collect())
    }

    async fn add_plant_log(
        &self,
        plant_id: PlantId,
        desc: &str,
        event_type: i32,
    ) -> Result<LogId, PersistenceError> {
        let mut state = self.state.lock().unwrap();
        state.check_failure()?;
        if !state.plants.iter().any(|(id, _)| *id == plant_id) {
            return Err(PersistenceError::Insert(
                "insert or update on table \"plant_log\" violates foreign key constraint \"plant_log_plant_id_fkey\""
                    .to_string(),
            ));
        }
        state.next_log_id += 1;
        let id = state.next_log_id;
        state.logs.push(PlantLog {
            id,
            plant_id,
            desc: desc.to_string(),
            event_type,
        });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_requires_url() {
        let result = MemoryPlantRepository::connect(&StoreConfig::new("")).await;
        assert!(matches!(result, Err(PersistenceError::ConfigMissing)));
        assert!(MemoryPlantRepository::connect(&StoreConfig::new("memory://"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_ids_continue_after_seeded_rows() {
        let repo = MemoryPlantRepository::with_plants(&[(1, "rosemary"), (2, "salvia")]);
        let id = repo.add_plant("ipomea", "", "").await.unwrap();
        assert_eq!(id, 3);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let repo = MemoryPlantRepository::new();
        repo.fail_with(Some(PersistenceError::Query("boom".to_string())));
        assert_eq!(
            repo.list_plants_short_description().await,
            Err(PersistenceError::Query("boom".to_string()))
        );
        repo.fail_with(None);
        assert!(repo.list_plants_short_description().await.unwrap().is_empty());
    }
}
