//! Domain types and input rules for the plant catalog.
//!
//! This crate has no I/O. The server crate owns storage and HTTP; everything
//! here is shared shape ([`model`]) and the validation applied to free-text
//! fields before they reach storage ([`sanitize`]).

pub mod model;
pub mod sanitize;

pub use model::{LogId, Plant, PlantId, PlantLog, PlantNames, PlantShortDesc, UNSPECIFIED_EVENT_TYPE};
pub use sanitize::{
    sanitize_common_name, sanitize_common_name_bytes, sanitize_scientific_name, NameKind, ValidationError,
    NAME_MAX_LEN,
};
