//! Plant log endpoints

use std::sync::Arc;

use axum::extract::rejection::RawFormRejection;
use axum::extract::{Path, RawForm, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use plants::UNSPECIFIED_EVENT_TYPE;

use super::CONTENT_TYPE_HTML;
use crate::persistence::PlantRepository;
use crate::service::error::ApiError;
use crate::service::parsers::{form_fields, parse_plant_id};

/// `POST /plants/log/{id}/`: append the `new-entry` form field to the plant's
/// log. The description is stored as sent, without sanitization.
pub async fn add_plant_log<R: PlantRepository>(
    State(repo): State<Arc<R>>,
    Path(raw_id): Path<String>,
    form: Result<RawForm, RawFormRejection>,
) -> Result<Response, ApiError> {
    let plant_id = parse_plant_id(&raw_id)?;
    let fields = form_fields(form)?;
    let desc = fields.text("new-entry");

    let log_id = repo
        .add_plant_log(plant_id, &desc, UNSPECIFIED_EVENT_TYPE)
        .await?;
    tracing::info!(plant_id, log_id, "Added plant log");

    Ok(([(header::CONTENT_TYPE, CONTENT_TYPE_HTML)]).into_response())
}
