//! Testing utilities for the crewcert workspace
//!
//! Shared fixtures, session builders, and store doubles.

#![allow(missing_docs)]

use async_trait::async_trait;
use crewcert_core::{
    CheckpointStore, PersistenceError, ScheduleDescriptor, SessionId, SessionRecord, TraineeRef,
};
use crewcert_model::{ChecklistDefinition, ChecklistItem, ChecklistSection};
use std::sync::Mutex;

/// Four-section definition with the last section gated on the first three
///
/// Mirrors the "Sections I-III, then Section IV" shape used by the
/// hands-on safety flows.
pub fn gated_fixture() -> ChecklistDefinition {
    ChecklistDefinition::builder("fixture")
        .section(ChecklistSection::items(
            "Section I",
            vec![ChecklistItem::new("s1_a", "first"), ChecklistItem::new("s1_b", "second")],
        ))
        .section(ChecklistSection::items(
            "Section II",
            vec![ChecklistItem::new("s2_a", "third")],
        ))
        .section(ChecklistSection::items(
            "Section III",
            vec![ChecklistItem::new("s3_a", "fourth")],
        ))
        .section(ChecklistSection::items(
            "Section IV",
            vec![ChecklistItem::new("s4_a", "gated sign-off")],
        ))
        .gate(3, [0, 1, 2])
        .build()
        .expect("fixture definition is valid")
}

/// Observation(a, b) + Demonstration(c) + attested Questions(q_done)
pub fn scenario_definition() -> ChecklistDefinition {
    ChecklistDefinition::builder("scenario")
        .section(ChecklistSection::items(
            "Observation",
            vec![ChecklistItem::new("a", "first"), ChecklistItem::new("b", "second")],
        ))
        .section(ChecklistSection::items(
            "Demonstration",
            vec![ChecklistItem::new("c", "third")],
        ))
        .section(ChecklistSection::attested(
            "Questions",
            ["Talk through the close-down steps"],
            "q_done",
        ))
        .build()
        .expect("scenario definition is valid")
}

/// Fresh session pre-populated from `fields`
pub fn session_with(fields: &[(&str, bool)]) -> SessionRecord {
    let mut session = SessionRecord::new(SessionId::new(), TraineeRef::named("Test Trainee"));
    for &(name, value) in fields {
        session.set_field(name, value);
    }
    session
}

/// Schedule for `competency_type` with an optional phase
pub fn schedule(competency_type: &str, phase: Option<&str>) -> ScheduleDescriptor {
    let mut descriptor =
        ScheduleDescriptor::new(competency_type, TraineeRef::named("Test Trainee"));
    if let Some(phase) = phase {
        descriptor = descriptor.with_phase(phase);
    }
    descriptor
}

/// Store that confirms every write and records it
#[derive(Debug, Default)]
pub struct MemoryStore {
    writes: Mutex<Vec<(SessionId, String, bool)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes confirmed so far, in order
    pub fn writes(&self) -> Vec<(SessionId, String, bool)> {
        self.writes.lock().expect("store mutex poisoned").clone()
    }
}

#[async_trait]
impl CheckpointStore for MemoryStore {
    async fn write_field(
        &self,
        session: SessionId,
        field: &str,
        value: bool,
    ) -> Result<(), PersistenceError> {
        self.writes
            .lock()
            .expect("store mutex poisoned")
            .push((session, field.to_string(), value));
        Ok(())
    }
}

/// Store that refuses every write
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl CheckpointStore for FailingStore {
    async fn write_field(
        &self,
        session: SessionId,
        _field: &str,
        _value: bool,
    ) -> Result<(), PersistenceError> {
        Err(PersistenceError::new(session, "store offline"))
    }
}
