//! Plant listing, creation and lookup endpoints

use std::sync::Arc;

use axum::extract::rejection::RawFormRejection;
use axum::extract::{Path, RawForm, State};
use axum::http::Method;
use axum::response::Response;
use plants::{sanitize_common_name_bytes, sanitize_scientific_name, Plant};

use super::{body_response, json_response, CONTENT_TYPE_HTML};
use crate::persistence::PlantRepository;
use crate::service::error::ApiError;
use crate::service::parsers::{form_fields, parse_plant_id};

/// `HEAD`/`GET /plants/`: every plant as a JSON array of `{id, common_name}`.
pub async fn list_plants<R: PlantRepository>(
    State(repo): State<Arc<R>>,
    method: Method,
) -> Result<Response, ApiError> {
    tracing::debug!(%method, "list_plants");
    let plants = repo.list_plants_short_description().await?;
    json_response(&method, &plants)
}

/// `POST /plants/new/`: create a plant from the `common-name`, `generic-name`
/// and `specific-name` form fields and answer with its id in decimal.
pub async fn create_plant<R: PlantRepository>(
    State(repo): State<Arc<R>>,
    form: Result<RawForm, RawFormRejection>,
) -> Result<Response, ApiError> {
    let fields = form_fields(form)?;

    let common = sanitize_common_name_bytes(fields.get("common-name"))?;
    let generic = sanitize_scientific_name(&fields.text("generic-name"))?;
    let specific = sanitize_scientific_name(&fields.text("specific-name"))?;

    let id = repo.add_plant(&common, &generic, &specific).await?;
    tracing::info!(plant_id = id, common_name = %common, "Created plant");

    body_response(&Method::POST, CONTENT_TYPE_HTML, id.to_string().into_bytes())
}

/// `HEAD`/`GET /plants/{id}/`: the plant's names and logs as JSON.
///
/// An id with no plant behind it answers `500`, the same as a store failure.
pub async fn plant_info<R: PlantRepository>(
    State(repo): State<Arc<R>>,
    method: Method,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_plant_id(&raw_id)?;
    tracing::debug!(%method, plant_id = id, "plant_info");

    let names = repo.get_plant_names(id).await?;
    let logs = repo.list_plant_logs(id).await?;
    let plant = Plant::from_parts(id, names, logs);

    json_response(&method, &plant)
}
