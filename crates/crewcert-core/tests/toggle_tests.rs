//! Toggle and mark-complete operations end to end

use crewcert_core::{ensure_complete, toggle_checkpoint, ChecklistError};
use crewcert_test_utils::{scenario_definition, session_with, FailingStore, MemoryStore};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn full_scenario_walkthrough() {
    let definition = scenario_definition();
    let store = MemoryStore::new();
    let mut session = session_with(&[]);

    assert!(ensure_complete(&definition, &session).is_err());

    for field in ["a", "b", "q_done"] {
        toggle_checkpoint(&store, &mut session, &definition, field, true)
            .await
            .unwrap();
    }

    // Demonstration still open: mark-complete must refuse, naming it.
    let err = ensure_complete(&definition, &session).unwrap_err();
    match err {
        ChecklistError::Incomplete { sections, .. } => {
            assert_eq!(sections, vec!["Demonstration"]);
        }
        other => panic!("expected Incomplete, got {other}"),
    }

    toggle_checkpoint(&store, &mut session, &definition, "c", true)
        .await
        .unwrap();
    ensure_complete(&definition, &session).unwrap();
    assert_eq!(store.writes().len(), 4);
}

#[tokio::test]
async fn unchecking_a_checkpoint_reopens_the_checklist() {
    let definition = scenario_definition();
    let store = MemoryStore::new();
    let mut session = session_with(&[("a", true), ("b", true), ("c", true), ("q_done", true)]);

    ensure_complete(&definition, &session).unwrap();

    toggle_checkpoint(&store, &mut session, &definition, "b", false)
        .await
        .unwrap();
    let err = ensure_complete(&definition, &session).unwrap_err();
    assert!(err.is_user_recoverable());
}

#[tokio::test]
async fn unknown_field_is_surfaced_not_ignored() {
    let definition = scenario_definition();
    let store = MemoryStore::new();
    let mut session = session_with(&[]);

    let err = toggle_checkpoint(&store, &mut session, &definition, "z", true)
        .await
        .unwrap_err();
    match err {
        ChecklistError::UnknownField { field, key } => {
            assert_eq!(field, "z");
            assert_eq!(key.competency_type, "scenario");
        }
        other => panic!("expected UnknownField, got {other}"),
    }
    assert!(store.writes().is_empty());
}

#[tokio::test]
async fn store_failure_propagates_and_session_stays_pessimistic() {
    let definition = scenario_definition();
    let store = FailingStore;
    let mut session = session_with(&[]);

    let err = toggle_checkpoint(&store, &mut session, &definition, "a", true)
        .await
        .unwrap_err();
    assert!(err.is_retryable());
    assert!(!session.field("a"));
}
