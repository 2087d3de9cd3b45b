//! Section gating: unlock predicate and locked-write refusal

use crewcert_core::{
    section_complete, section_complete_at, section_unlocked, toggle_checkpoint,
    unmet_prerequisites, ChecklistError,
};
use crewcert_test_utils::{gated_fixture, session_with, MemoryStore};
use pretty_assertions::assert_eq;

#[test]
fn ungated_sections_are_always_unlocked() {
    let definition = gated_fixture();
    let session = session_with(&[]);
    for index in 0..3 {
        assert!(section_unlocked(&definition, index, &session));
    }
}

#[test]
fn gated_section_locked_until_all_prerequisites_complete() {
    let definition = gated_fixture();

    let session = session_with(&[]);
    assert!(!section_unlocked(&definition, 3, &session));
    assert_eq!(
        unmet_prerequisites(&definition, 3, &session),
        vec!["Section I", "Section II", "Section III"]
    );

    // Any single incomplete prerequisite keeps the lock.
    let session = session_with(&[("s1_a", true), ("s1_b", true), ("s2_a", true)]);
    assert!(!section_unlocked(&definition, 3, &session));
    assert_eq!(unmet_prerequisites(&definition, 3, &session), vec!["Section III"]);

    let session = session_with(&[
        ("s1_a", true),
        ("s1_b", true),
        ("s2_a", true),
        ("s3_a", true),
    ]);
    assert!(section_unlocked(&definition, 3, &session));
    assert!(unmet_prerequisites(&definition, 3, &session).is_empty());
}

#[test]
fn locked_section_never_badges_complete() {
    let definition = gated_fixture();

    // Section IV's field is true (set by an ungated external writer),
    // but its prerequisites are not: the raw predicate sees the fields,
    // the display predicate sees the lock.
    let session = session_with(&[("s4_a", true)]);
    assert!(section_complete(&definition.sections()[3], &session));
    assert!(!section_complete_at(&definition, 3, &session));

    let session = session_with(&[
        ("s1_a", true),
        ("s1_b", true),
        ("s2_a", true),
        ("s3_a", true),
        ("s4_a", true),
    ]);
    assert!(section_complete_at(&definition, 3, &session));

    // Out-of-range indexes read false, not complete.
    assert!(!section_complete_at(&definition, 9, &session));
}

#[tokio::test]
async fn locked_toggle_is_refused_and_mutates_nothing() {
    let definition = gated_fixture();
    let store = MemoryStore::new();
    let mut session = session_with(&[("s1_a", true)]);
    let before = session.clone();

    let err = toggle_checkpoint(&store, &mut session, &definition, "s4_a", true)
        .await
        .unwrap_err();

    match err {
        ChecklistError::SectionLocked { section, unmet } => {
            assert_eq!(section, "Section IV");
            assert_eq!(unmet, vec!["Section I", "Section II", "Section III"]);
        }
        other => panic!("expected SectionLocked, got {other}"),
    }
    assert_eq!(session, before);
    assert!(store.writes().is_empty());
}

#[tokio::test]
async fn unlock_then_toggle_succeeds() {
    let definition = gated_fixture();
    let store = MemoryStore::new();
    let mut session = session_with(&[]);

    for field in ["s1_a", "s1_b", "s2_a", "s3_a"] {
        toggle_checkpoint(&store, &mut session, &definition, field, true)
            .await
            .unwrap();
    }
    assert!(section_unlocked(&definition, 3, &session));

    toggle_checkpoint(&store, &mut session, &definition, "s4_a", true)
        .await
        .unwrap();
    assert_eq!(store.writes().len(), 5);
    assert!(session.field("s4_a"));
}
