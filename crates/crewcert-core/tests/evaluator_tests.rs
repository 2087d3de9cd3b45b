//! Completion evaluation behavior against realistic fixtures

use crewcert_core::{definition_complete, incomplete_sections, section_complete};
use crewcert_test_utils::{scenario_definition, session_with};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn partial_session_is_incomplete() {
    let definition = scenario_definition();
    let session = session_with(&[("a", true), ("b", true), ("c", false), ("q_done", true)]);

    assert!(!definition_complete(&definition, &session));
    assert_eq!(incomplete_sections(&definition, &session), vec!["Demonstration"]);
}

#[test]
fn finishing_the_last_field_completes_the_checklist() {
    let definition = scenario_definition();
    let session = session_with(&[("a", true), ("b", true), ("c", true), ("q_done", true)]);

    assert!(definition_complete(&definition, &session));
    assert!(incomplete_sections(&definition, &session).is_empty());
}

#[test]
fn questions_section_tracks_only_its_attestation_field() {
    let definition = scenario_definition();
    let questions = &definition.sections()[2];

    // All item fields set, attestation missing: still incomplete.
    let session = session_with(&[("a", true), ("b", true), ("c", true)]);
    assert!(!section_complete(questions, &session));

    // Attestation alone completes it regardless of item fields.
    let session = session_with(&[("q_done", true)]);
    assert!(section_complete(questions, &session));
}

#[test]
fn absent_fields_read_as_false_without_failing() {
    let definition = scenario_definition();
    let session = session_with(&[]);

    assert!(!definition_complete(&definition, &session));
    assert_eq!(
        incomplete_sections(&definition, &session),
        vec!["Observation", "Demonstration", "Questions"]
    );
}

proptest! {
    // Conjunction law: the whole checklist is complete exactly when
    // every section is.
    #[test]
    fn definition_complete_is_the_conjunction_of_sections(
        a in any::<bool>(),
        b in any::<bool>(),
        c in any::<bool>(),
        q_done in any::<bool>(),
    ) {
        let definition = scenario_definition();
        let session = session_with(&[("a", a), ("b", b), ("c", c), ("q_done", q_done)]);

        let by_sections = definition
            .sections()
            .iter()
            .all(|section| section_complete(section, &session));
        prop_assert_eq!(definition_complete(&definition, &session), by_sections);
        prop_assert_eq!(definition_complete(&definition, &session), a && b && c && q_done);
    }

    // Item sections are an AND over their fields; the attestation field
    // never leaks into them.
    #[test]
    fn observation_section_is_field_conjunction(
        a in any::<bool>(),
        b in any::<bool>(),
        q_done in any::<bool>(),
    ) {
        let definition = scenario_definition();
        let session = session_with(&[("a", a), ("b", b), ("q_done", q_done)]);
        prop_assert_eq!(
            section_complete(&definition.sections()[0], &session),
            a && b
        );
    }
}
