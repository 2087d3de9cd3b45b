//! Checkpoint toggle and mark-complete operations
//!
//! [`toggle_checkpoint`] is the one mutating entry point of the core. It
//! validates the field against the resolved definition, refuses writes
//! into locked sections, and delegates the single-field update to the
//! [`CheckpointStore`] collaborator. The in-memory session is updated
//! only after the store confirms: a failed write must never leave a
//! trainer believing a checkpoint saved when it did not.
//!
//! Refusing locked writes here, not just in the UI, is a correctness
//! requirement: an ungated data layer would let a caller mark solo
//! operation of dangerous equipment before the safety sections are
//! attested, desynchronizing the certification record from reality.

use crate::error::{ChecklistError, PersistenceError};
use crate::evaluate::{
    definition_complete, incomplete_sections, section_unlocked, unmet_prerequisites,
};
use crate::session::{SessionId, SessionRecord};
use async_trait::async_trait;
use crewcert_model::ChecklistDefinition;

/// Persistence seam for single-field checkpoint writes
///
/// Implementations own consistency; concurrent toggles from multiple
/// trainers resolve by the store's own model (field-granular
/// last-write-wins is acceptable — each field is an independent
/// observation, never a derived aggregate). The core issues no retries.
#[async_trait]
pub trait CheckpointStore: Send + Sync {
    /// Persist one boolean checkpoint field for a session
    ///
    /// # Errors
    /// Returns [`PersistenceError`] when the write is not confirmed.
    async fn write_field(
        &self,
        session: SessionId,
        field: &str,
        value: bool,
    ) -> Result<(), PersistenceError>;
}

/// Validate and persist one checkpoint toggle
///
/// Returns the confirmed value on success. The session record is
/// mutated only after the store confirms the write.
///
/// # Errors
/// - [`ChecklistError::UnknownField`] — `field` is not part of
///   `definition`
/// - [`ChecklistError::SectionLocked`] — the owning section's gate has
///   incomplete prerequisites; the error names them
/// - [`ChecklistError::Persistence`] — the store refused the write;
///   propagated unchanged for the caller's retry policy
pub async fn toggle_checkpoint<S>(
    store: &S,
    session: &mut SessionRecord,
    definition: &ChecklistDefinition,
    field: &str,
    value: bool,
) -> Result<bool, ChecklistError>
where
    S: CheckpointStore + ?Sized,
{
    let Some(section_index) = definition.section_of_field(field) else {
        return Err(ChecklistError::UnknownField {
            field: field.to_string(),
            key: definition.key(),
        });
    };

    if !section_unlocked(definition, section_index, session) {
        let section = definition.sections()[section_index].title.clone();
        let unmet = unmet_prerequisites(definition, section_index, session)
            .into_iter()
            .map(str::to_string)
            .collect();
        return Err(ChecklistError::SectionLocked { section, unmet });
    }

    store.write_field(session.id(), field, value).await?;
    session.set_field(field, value);
    tracing::debug!(
        session = %session.id(),
        field,
        value,
        "checkpoint persisted"
    );
    Ok(value)
}

/// Reject mark-complete unless every section is complete
///
/// The completion-recording collaborator calls this before writing its
/// completion event; a false predicate is an error, never a silent no-op.
///
/// # Errors
/// Returns [`ChecklistError::Incomplete`] naming the unfinished sections.
pub fn ensure_complete(
    definition: &ChecklistDefinition,
    session: &SessionRecord,
) -> Result<(), ChecklistError> {
    if definition_complete(definition, session) {
        return Ok(());
    }
    Err(ChecklistError::Incomplete {
        key: definition.key(),
        sections: incomplete_sections(definition, session)
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
