//! Error types for the checklist core
//!
//! The taxonomy separates fatal configuration errors (duplicate
//! registrations, invalid definitions), programmer errors that must
//! surface loudly (unknown field in a toggle), user-recoverable
//! conditions (locked section, incomplete checklist), and persistence
//! failures, which pass through unchanged so the caller owns retry
//! policy. The core never retries and never records a write locally that
//! the store did not confirm.

use crate::session::SessionId;
use crewcert_model::{CompetencyKey, DefinitionError};

/// Main checklist core error type
#[derive(Debug, thiserror::Error)]
pub enum ChecklistError {
    /// Two definitions claim the same competency key
    #[error("competency `{key}` is already registered")]
    DuplicateDefinition {
        /// The contested key
        key: CompetencyKey,
    },

    /// A definition failed structural validation
    #[error("invalid definition: {0}")]
    Definition(#[from] DefinitionError),

    /// Toggle referenced a field outside the resolved definition
    #[error("field `{field}` does not belong to competency `{key}`")]
    UnknownField {
        /// The unrecognized field name
        field: String,
        /// Definition the toggle was validated against
        key: CompetencyKey,
    },

    /// Toggle attempted against a gated, not-yet-unlocked section
    #[error(
        "section `{section}` is locked; incomplete prerequisites: {}",
        unmet.join(", ")
    )]
    SectionLocked {
        /// Title of the locked section
        section: String,
        /// Titles of prerequisite sections still incomplete
        unmet: Vec<String>,
    },

    /// Mark-complete attempted while sections remain unfinished
    #[error(
        "checklist for `{key}` is incomplete; unfinished sections: {}",
        sections.join(", ")
    )]
    Incomplete {
        /// Definition being completed
        key: CompetencyKey,
        /// Titles of sections not yet complete
        sections: Vec<String>,
    },

    /// The external write failed; propagated unchanged
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl ChecklistError {
    /// Whether the caller may usefully retry the same call
    ///
    /// Only persistence failures are retryable; everything else needs a
    /// state or configuration change first.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Whether the trainee/trainer can resolve this by finishing
    /// prerequisite work (as opposed to a configuration defect)
    #[inline]
    #[must_use]
    pub fn is_user_recoverable(&self) -> bool {
        matches!(self, Self::SectionLocked { .. } | Self::Incomplete { .. })
    }
}

/// A single-field write to the persistence collaborator failed
///
/// The core attaches no semantics beyond the session it targeted; the
/// reason string and optional source come from the store implementation.
#[derive(Debug, thiserror::Error)]
#[error("persistence write failed for session {session}: {reason}")]
pub struct PersistenceError {
    /// Session the write targeted
    pub session: SessionId,
    /// Store-provided failure description
    pub reason: String,
    /// Underlying store error, when available
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PersistenceError {
    /// Create a persistence error without an underlying source
    #[must_use]
    pub fn new(session: SessionId, reason: impl Into<String>) -> Self {
        Self {
            session,
            reason: reason.into(),
            source: None,
        }
    }

    /// Attach the underlying store error
    #[must_use]
    pub fn with_source(
        mut self,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}
