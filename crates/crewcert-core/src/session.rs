//! Session and schedule shapes shared with collaborators
//!
//! A [`SessionRecord`] is the per-trainee, per-competency field map the
//! data layer loads using the field catalog; the core reads it and
//! proposes updates but never owns storage. A [`ScheduleDescriptor`]
//! identifies which competency and phase a session is for; its trainee
//! metadata is presentation-only and never feeds evaluation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ulid::Ulid;

/// Unique training session identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Ulid);

impl SessionId {
    /// Generate new session ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trainee identity carried for display and audit, never for logic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraineeRef {
    /// Name shown on the checklist header
    pub display_name: String,
    /// Payroll or scheduling identifier, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

impl TraineeRef {
    /// Create a trainee reference by display name
    #[must_use]
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            employee_id: None,
        }
    }

    /// Attach an employee identifier
    #[must_use]
    pub fn with_employee_id(mut self, employee_id: impl Into<String>) -> Self {
        self.employee_id = Some(employee_id.into());
        self
    }
}

/// Which competency a session is for, plus presentation metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDescriptor {
    /// Competency type to resolve a definition for
    pub competency_type: String,
    /// Optional phase qualifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competency_phase: Option<String>,
    /// Trainee this session belongs to
    pub trainee: TraineeRef,
    /// When the session is scheduled, for display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
}

impl ScheduleDescriptor {
    /// Create a descriptor with no phase or schedule time
    #[must_use]
    pub fn new(competency_type: impl Into<String>, trainee: TraineeRef) -> Self {
        Self {
            competency_type: competency_type.into(),
            competency_phase: None,
            trainee,
            scheduled_for: None,
        }
    }

    /// Qualify with a phase
    #[must_use]
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.competency_phase = Some(phase.into());
        self
    }

    /// Attach the scheduled time
    #[must_use]
    pub fn at(mut self, when: DateTime<Utc>) -> Self {
        self.scheduled_for = Some(when);
        self
    }
}

/// Per-trainee, per-competency checkpoint state
///
/// Field values mirror the last confirmed persisted state. Absent fields
/// read as `false`: a checkpoint nobody has marked is not complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    id: SessionId,
    trainee: TraineeRef,
    fields: HashMap<String, bool>,
}

impl SessionRecord {
    /// Create an empty session for a trainee
    #[must_use]
    pub fn new(id: SessionId, trainee: TraineeRef) -> Self {
        Self {
            id,
            trainee,
            fields: HashMap::new(),
        }
    }

    /// Session identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Trainee this session tracks
    #[inline]
    #[must_use]
    pub fn trainee(&self) -> &TraineeRef {
        &self.trainee
    }

    /// Read one checkpoint field; missing fields are `false`
    #[inline]
    #[must_use]
    pub fn field(&self, name: &str) -> bool {
        self.fields.get(name).copied().unwrap_or(false)
    }

    /// Record a confirmed field value
    pub fn set_field(&mut self, name: impl Into<String>, value: bool) {
        self.fields.insert(name.into(), value);
    }

    /// Builder-style field set, mainly for fixtures
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: bool) -> Self {
        self.set_field(name, value);
        self
    }

    /// All loaded fields
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &HashMap<String, bool> {
        &self.fields
    }
}
