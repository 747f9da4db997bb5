//! Declarative YAML/JSON card manifest parser for gaugecard.
//!
//! Turns user-written card manifests into validated
//! [`gaugecard_core::CardConfig`] values, accepting the legacy `bars` /
//! `entity` key spellings alongside the canonical ones.

mod error;
mod manifest;

pub use error::ParseError;
pub use manifest::{from_json_str, from_yaml_str, CardManifest, ItemManifest};
