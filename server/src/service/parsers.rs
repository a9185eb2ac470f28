//! Parsing of request paths and form bodies into domain values.

use std::borrow::Cow;

use axum::extract::rejection::RawFormRejection;
use axum::extract::RawForm;

use super::error::ApiError;
use plants::PlantId;

/// Parse a plant identifier taken from the request path.
pub fn parse_plant_id(raw: &str) -> Result<PlantId, ApiError> {
    raw.parse::<PlantId>()
        .map_err(|e| ApiError::BadRequest(format!("invalid plant id \"{raw}\": {e}")))
}

/// Fields of an `application/x-www-form-urlencoded` body.
///
/// Values are kept as decoded bytes so that callers decide how to treat text
/// that is not valid UTF-8. A missing field reads as empty.
#[derive(Debug, Default)]
pub struct FormFields {
    pairs: Vec<(Vec<u8>, Vec<u8>)>,
}

impl FormFields {
    /// Decode a form body. A malformed percent escape rejects the whole body.
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        let mut pairs = Vec::new();
        for pair in body.split(|b| *b == b'&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = match pair.iter().position(|b| *b == b'=') {
                Some(i) => (&pair[..i], &pair[i + 1..]),
                None => (pair, &[][..]),
            };
            pairs.push((decode_component(key)?, decode_component(value)?));
        }
        Ok(Self { pairs })
    }

    /// First value of `key`, or an empty slice.
    pub fn get(&self, key: &str) -> &[u8] {
        self.pairs
            .iter()
            .find(|(k, _)| k.as_slice() == key.as_bytes())
            .map(|(_, v)| v.as_slice())
            .unwrap_or_default()
    }

    /// First value of `key` as text, invalid UTF-8 replaced.
    pub fn text(&self, key: &str) -> Cow<'_, str> {
        String::from_utf8_lossy(self.get(key))
    }
}

/// Decode the form carried by a POST body.
///
/// A body that is not declared as `application/x-www-form-urlencoded` carries
/// no fields; every field then reads as empty.
pub fn form_fields(form: Result<RawForm, RawFormRejection>) -> Result<FormFields, ApiError> {
    match form {
        Ok(RawForm(body)) => FormFields::parse(&body),
        Err(RawFormRejection::InvalidFormContentType(_)) => Ok(FormFields::default()),
        Err(e) => Err(ApiError::BadRequest(e.body_text())),
    }
}

fn decode_component(raw: &[u8]) -> Result<Vec<u8>, ApiError> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        match raw[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let byte = raw
                    .get(i + 1..i + 3)
                    .and_then(|hex| Some(hex_value(hex[0])? << 4 | hex_value(hex[1])?))
                    .ok_or_else(|| {
                        let end = raw.len().min(i + 3);
                        ApiError::BadRequest(format!(
                            "invalid URL escape \"{}\"",
                            String::from_utf8_lossy(&raw[i..end])
                        ))
                    })?;
                out.push(byte);
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    Ok(out)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
