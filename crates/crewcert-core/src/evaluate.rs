//! Completion and unlock predicates
//!
//! All functions here are pure: given the same definition and session
//! record they return the same answer, and they never fail. Missing
//! fields evaluate as false. Completion is recomputed from the full
//! session on every call — sessions are bounded (typically under 40
//! fields), so there is nothing worth caching or invalidating.
//!
//! Each boolean predicate has a companion that lists what is wrong
//! (`incomplete_sections`, `unmet_prerequisites`) so callers can build
//! actionable errors and UI badges without re-deriving the logic.

use crate::session::SessionRecord;
use crewcert_model::{ChecklistDefinition, ChecklistSection};

/// Whether one section evaluates complete against a session
///
/// Attestation sections complete exactly when their completion field is
/// true; their prompts never contribute. Item sections complete when
/// every item field is true, vacuously so with no items.
///
/// Gate-unaware: a locked section whose fields were populated by an
/// earlier unlock (or an external writer) still reads complete here.
/// Presentation callers badging sections should use
/// [`section_complete_at`], which folds in [`section_unlocked`].
#[must_use]
pub fn section_complete(section: &ChecklistSection, session: &SessionRecord) -> bool {
    match &section.completion_field {
        Some(field) => session.field(field),
        None => section.items.iter().all(|item| session.field(&item.field_name)),
    }
}

/// Whether every section of a definition is complete
///
/// This is the single predicate gating the "mark training complete"
/// action; see [`ensure_complete`](crate::toggle::ensure_complete) for
/// the rejecting form.
#[must_use]
pub fn definition_complete(definition: &ChecklistDefinition, session: &SessionRecord) -> bool {
    definition
        .sections()
        .iter()
        .all(|section| section_complete(section, session))
}

/// Completion of the section at `section_index`, as displayed
///
/// ANDs [`section_complete`] with [`section_unlocked`]: a locked
/// section never shows complete, even when its fields are already true
/// in the session. Out-of-range indexes read false.
#[must_use]
pub fn section_complete_at(
    definition: &ChecklistDefinition,
    section_index: usize,
    session: &SessionRecord,
) -> bool {
    is_index_complete(definition, section_index, session)
        && section_unlocked(definition, section_index, session)
}

/// Titles of sections not yet complete, in definition order
#[must_use]
pub fn incomplete_sections<'a>(
    definition: &'a ChecklistDefinition,
    session: &SessionRecord,
) -> Vec<&'a str> {
    definition
        .sections()
        .iter()
        .filter(|section| !section_complete(section, session))
        .map(|section| section.title.as_str())
        .collect()
}

/// Whether `section_index` is available for marking
///
/// True when no gate references the index, or when every prerequisite
/// section of its gate is complete. Out-of-range indexes are ungated by
/// construction and read as unlocked.
#[must_use]
pub fn section_unlocked(
    definition: &ChecklistDefinition,
    section_index: usize,
    session: &SessionRecord,
) -> bool {
    match definition.gate_for(section_index) {
        None => true,
        Some(gate) => gate
            .prerequisites
            .iter()
            .all(|&index| is_index_complete(definition, index, session)),
    }
}

/// Titles of incomplete prerequisite sections locking `section_index`
///
/// Empty exactly when [`section_unlocked`] is true.
#[must_use]
pub fn unmet_prerequisites<'a>(
    definition: &'a ChecklistDefinition,
    section_index: usize,
    session: &SessionRecord,
) -> Vec<&'a str> {
    let Some(gate) = definition.gate_for(section_index) else {
        return Vec::new();
    };
    gate.prerequisites
        .iter()
        .filter(|&&index| !is_index_complete(definition, index, session))
        .filter_map(|&index| definition.sections().get(index))
        .map(|section| section.title.as_str())
        .collect()
}

fn is_index_complete(
    definition: &ChecklistDefinition,
    index: usize,
    session: &SessionRecord,
) -> bool {
    definition
        .sections()
        .get(index)
        .is_some_and(|section| section_complete(section, session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionId, SessionRecord, TraineeRef};
    use crewcert_model::{ChecklistItem, ChecklistSection};

    fn empty_session() -> SessionRecord {
        SessionRecord::new(SessionId::new(), TraineeRef::named("Dana"))
    }

    #[test]
    fn empty_item_section_is_vacuously_complete() {
        let section = ChecklistSection::items("Completion", vec![]);
        assert!(section_complete(&section, &empty_session()));
    }

    #[test]
    fn attested_section_ignores_item_fields() {
        // Pathological shape: attestation section that also carries items.
        // Completion must still track only the completion field.
        let mut section =
            ChecklistSection::attested("Questions", ["why?"], "q_done");
        section.items.push(ChecklistItem::new("stray", "ignored"));

        let session = empty_session().with_field("stray", true);
        assert!(!section_complete(&section, &session));

        let session = session.with_field("q_done", true);
        assert!(section_complete(&section, &session));
    }

    #[test]
    fn item_section_requires_every_field_true() {
        let section = ChecklistSection::items(
            "Observation",
            vec![ChecklistItem::new("a", "x"), ChecklistItem::new("b", "y")],
        );
        let session = empty_session().with_field("a", true);
        assert!(!section_complete(&section, &session));
        let session = session.with_field("b", true);
        assert!(section_complete(&section, &session));
    }
}
