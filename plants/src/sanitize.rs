//! Validation and normalization of plant names before they are stored.
//!
//! Both entry points trim surrounding whitespace first and return the trimmed
//! value, so running a sanitized name through again is a no-op.

/// Maximum length of any plant name, in code points.
pub const NAME_MAX_LEN: usize = 255;

/// Which name a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Common,
    Scientific,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Common => f.write_str("Common"),
            NameKind::Scientific => f.write_str("Scientific"),
        }
    }
}

/// Reasons a name is rejected. The display text is sent back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Common name is empty")]
    EmptyName,
    #[error("{0} name length is greater than 255")]
    NameTooLong(NameKind),
    #[error("Common name is not UTF-8")]
    InvalidEncoding,
    #[error("Specific name is not ASCII")]
    NonAsciiCharacter,
}

/// Trim a common name and check it is non-empty and at most 255 code points.
pub fn sanitize_common_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong(NameKind::Common));
    }
    Ok(name.to_string())
}

/// Like [`sanitize_common_name`], for a field that arrived as raw bytes.
///
/// Emptiness and length are checked before the encoding, each invalid
/// sequence counting as one code point.
pub fn sanitize_common_name_bytes(raw: &[u8]) -> Result<String, ValidationError> {
    let lossy = String::from_utf8_lossy(raw);
    let name = lossy.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong(NameKind::Common));
    }
    let text = std::str::from_utf8(raw).map_err(|_| ValidationError::InvalidEncoding)?;
    sanitize_common_name(text)
}

/// Trim a generic or specific name and check it is ASCII and at most 255
/// characters. Empty names are accepted.
pub fn sanitize_scientific_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong(NameKind::Scientific));
    }
    if !name.is_ascii() {
        return Err(ValidationError::NonAsciiCharacter);
    }
    Ok(name.to_string())
}
