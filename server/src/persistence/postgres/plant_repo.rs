//! PostgreSQL-backed repository for plants and plant logs.

use plants::{LogId, PlantId, PlantLog, PlantNames, PlantShortDesc};

use super::helpers::{insert_error, query_error};
use super::Database;
use crate::config::StoreConfig;
use crate::persistence::traits::PlantRepository;
use crate::persistence::PersistenceError;

/// PostgreSQL implementation of [`PlantRepository`].
#[derive(Clone)]
pub struct PostgresPlantRepository {
    db: Database,
}

impl PostgresPlantRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl PlantRepository for PostgresPlantRepository {
    async fn connect(config: &StoreConfig) -> Result<Self, PersistenceError> {
        let db = Database::open(config).await?;
        Ok(Self::new(db))
    }

    async fn close(&self) {
        self.db.close().await;
    }

    async fn list_plants_short_description(
        &self,
    ) -> Result<Vec<PlantShortDesc>, PersistenceError> {
        self.db
            .bounded(async {
                let rows: Vec<(i32, String)> =
                    sqlx::query_as("SELECT id, common_name FROM plant ORDER BY id")
                        .fetch_all(self.db.pool())
                        .await
                        .map_err(query_error)?;

                let plants: Vec<PlantShortDesc> = rows
                    .into_iter()
                    .map(|(id, common_name)| PlantShortDesc { id, common_name })
                    .collect();
                Ok::<_, PersistenceError>(plants)
            })
            .await
    }

    async fn add_plant(
        &self,
        common: &str,
        generic: &str,
        specific: &str,
    ) -> Result<PlantId, PersistenceError> {
        self.db
            .bounded(async {
                let (id,): (i32,) = sqlx::query_as(
                    r#"
                    INSERT INTO plant (common_name, generic_name, specific_name)
                    VALUES ($1, $2, $3)
                    RETURNING id
                    "#,
                )
                .bind(common)
                .bind(generic)
                .bind(specific)
                .fetch_one(self.db.pool())
                .await
                .map_err(insert_error)?;

                Ok::<_, PersistenceError>(id)
            })
            .await
    }

    async fn get_plant_names(&self, id: PlantId) -> Result<PlantNames, PersistenceError> {
        self.db
            .bounded(async {
                let row: Option<(String, Option<String>, Option<String>)> = sqlx::query_as(
                    "SELECT common_name, generic_name, specific_name FROM plant WHERE id = $1",
                )
                .bind(id)
                .fetch_optional(self.db.pool())
                .await
                .map_err(query_error)?;

                let (common, generic, specific) = row.ok_or(PersistenceError::NotFound(id))?;
                Ok::<_, PersistenceError>(PlantNames {
                    common,
                    generic: generic.unwrap_or_default(),
                    specific: specific.unwrap_or_default(),
                })
            })
            .await
    }

    async fn list_plant_logs(&self, id: PlantId) -> Result<Vec<PlantLog>, PersistenceError> {
        self.db
            .bounded(async {
                let rows: Vec<(i32, i32, String, i32)> = sqlx::query_as(
                    r#"
                    SELECT id, plant_id, description, event_type
                    FROM plant_log
                    WHERE plant_id = $1
                    ORDER BY id
                    "#,
                )
                .bind(id)
                .fetch_all(self.db.pool())
                .await
                .map_err(query_error)?;

                let logs: Vec<PlantLog> = rows
                    .into_iter()
                    .map(|(id, plant_id, desc, event_type)| PlantLog {
                        id,
                        plant_id,
                        desc,
                        event_type,
                    })
                    .collect();
                Ok::<_, PersistenceError>(logs)
            })
            .await
    }

    async fn add_plant_log(
        &self,
        plant_id: PlantId,
        desc: &str,
        event_type: i32,
    ) -> Result<LogId, PersistenceError> {
        self.db
            .bounded(async {
                let (id,): (i32,) = sqlx::query_as(
                    r#"
                    INSERT INTO plant_log (plant_id, description, event_type)
                    VALUES ($1, $2, $3)
                    RETURNING id
                    "#,
                )
                .bind(plant_id)
                .bind(desc)
                .bind(event_type)
                .fetch_one(self.db.pool())
                .await
                .map_err(insert_error)?;

                Ok::<_, PersistenceError>(id)
            })
            .await
    }
}
