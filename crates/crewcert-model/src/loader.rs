//! Definition ingress from YAML and JSON
//!
//! Adding a competency is a data-registration act: operators write a
//! definition file, the loader parses it, and deserialization runs the
//! same structural validation as [`DefinitionBuilder::build`]. A file
//! that parses is therefore safe to register.
//!
//! [`DefinitionBuilder::build`]: crate::DefinitionBuilder::build

use crate::definition::ChecklistDefinition;
use crate::error::DefinitionParseError;

/// Parse one definition from a YAML document
///
/// # Errors
/// Returns [`DefinitionParseError::Yaml`] on syntax, shape, or
/// structural-invariant violations.
pub fn from_yaml_str(source: &str) -> Result<ChecklistDefinition, DefinitionParseError> {
    Ok(serde_yaml::from_str(source)?)
}

/// Parse one definition from a JSON document
///
/// # Errors
/// Returns [`DefinitionParseError::Json`] on syntax, shape, or
/// structural-invariant violations.
pub fn from_json_str(source: &str) -> Result<ChecklistDefinition, DefinitionParseError> {
    Ok(serde_json::from_str(source)?)
}

/// Parse a multi-document YAML stream, one definition per document
///
/// # Errors
/// Fails on the first invalid document.
pub fn from_yaml_documents(source: &str) -> Result<Vec<ChecklistDefinition>, DefinitionParseError> {
    use serde::Deserialize;

    let mut definitions = Vec::new();
    for document in serde_yaml::Deserializer::from_str(source) {
        definitions.push(ChecklistDefinition::deserialize(document)?);
    }
    Ok(definitions)
}
