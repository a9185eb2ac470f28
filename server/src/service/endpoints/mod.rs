//! Endpoint handlers organized by resource

pub mod catalog;
pub mod logs;

pub use catalog::{create_plant, list_plants, plant_info};
pub use logs::add_plant_log;

use axum::body::Body;
use axum::http::{header, Method, StatusCode};
use axum::response::Response;

use super::error::ApiError;

pub(crate) const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";
pub(crate) const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";

/// Build a `200` response carrying `body`.
///
/// `Content-Length` always reflects `body`; for `HEAD` the body itself is
/// left out.
pub(crate) fn body_response(
    method: &Method,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<Response, ApiError> {
    let len = body.len();
    let body = if *method == Method::HEAD {
        Body::empty()
    } else {
        Body::from(body)
    };
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, len)
        .body(body)
        .map_err(|e| ApiError::Internal(e.to_string()))
}

/// Serialize `value` as JSON and respond with it.
pub(crate) fn json_response<T: serde::Serialize>(
    method: &Method,
    value: &T,
) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value)?;
    body_response(method, CONTENT_TYPE_JSON, body)
}
