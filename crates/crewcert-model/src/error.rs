//! Error types for the checklist model
//!
//! Definition invariants are checked once, when a definition is built or
//! parsed. A violation is a configuration error and is fatal at startup;
//! nothing here is user-recoverable.

/// Invalid checklist definition structure
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// Competency type is empty or blank
    #[error("competency type must not be empty")]
    EmptyCompetencyType,

    /// Definition declares no sections at all
    #[error("definition for `{competency_type}` has no sections")]
    NoSections {
        /// Offending competency type
        competency_type: String,
    },

    /// Two fields in one definition share a persistence key
    #[error("duplicate field `{field}` in sections `{first_section}` and `{second_section}`")]
    DuplicateField {
        /// The colliding field name
        field: String,
        /// Section that declared the field first
        first_section: String,
        /// Section that declared it again
        second_section: String,
    },

    /// Gate references a section index past the end
    #[error("gate targets section {index} but definition has {section_count} sections")]
    GateOutOfBounds {
        /// Gated section index
        index: usize,
        /// Number of sections in the definition
        section_count: usize,
    },

    /// Gate prerequisite is not strictly earlier than the gated section
    #[error(
        "gate on section {gated} lists prerequisite {prerequisite}, \
         which is not an earlier section"
    )]
    PrerequisiteNotEarlier {
        /// Gated section index
        gated: usize,
        /// Offending prerequisite index
        prerequisite: usize,
    },

    /// Two gates claim the same section
    #[error("section {section} is gated twice")]
    DuplicateGate {
        /// The doubly gated section index
        section: usize,
    },
}

/// Failure loading a definition from YAML or JSON
#[derive(Debug, thiserror::Error)]
pub enum DefinitionParseError {
    /// YAML syntax or shape error
    #[error("invalid YAML definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON syntax or shape error
    #[error("invalid JSON definition: {0}")]
    Json(#[from] serde_json::Error),
}
