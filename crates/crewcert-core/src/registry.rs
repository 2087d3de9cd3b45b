//! Competency registry and checklist router
//!
//! The registry aggregates every [`ChecklistDefinition`] known to the
//! process, built once at startup. It answers three questions:
//!
//! - which columns must the data layer select? ([`all_field_names`])
//! - which definition applies to this schedule? ([`resolve`])
//! - is this registration set coherent? (duplicate keys are fatal)
//!
//! Routing never fails: an unmatched (type, phase) pair resolves to a
//! process-wide generic definition with no checkpoints, which evaluates
//! complete unconditionally. That keeps scheduling of an as-yet-unmodeled
//! competency working, at the cost of enforcing nothing for it, so the
//! fallback path logs a warning.
//!
//! [`all_field_names`]: CompetencyRegistry::all_field_names
//! [`resolve`]: CompetencyRegistry::resolve

use crate::error::ChecklistError;
use crate::session::ScheduleDescriptor;
use crewcert_model::{ChecklistDefinition, ChecklistSection, CompetencyKey};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// One empty, ungated section: complete by vacuous truth
static GENERIC: Lazy<ChecklistDefinition> = Lazy::new(|| {
    ChecklistDefinition::builder("generic")
        .section(ChecklistSection::items("Completion", vec![]))
        .build()
        .expect("generic fallback definition is structurally valid")
});

/// Process-wide catalog of checklist definitions
///
/// Insertion order is preserved; [`all_field_names`] depends on it for a
/// stable projection order.
///
/// [`all_field_names`]: Self::all_field_names
#[derive(Debug, Default, Clone)]
pub struct CompetencyRegistry {
    definitions: IndexMap<CompetencyKey, ChecklistDefinition>,
}

impl CompetencyRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            definitions: IndexMap::new(),
        }
    }

    /// Create a registry preloaded with the built-in catalog
    ///
    /// # Errors
    /// Propagates invalid or colliding built-ins; either is a
    /// configuration defect and fatal at startup.
    pub fn with_builtins() -> Result<Self, ChecklistError> {
        let mut registry = Self::new();
        for definition in crewcert_catalog::definitions()? {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Register a definition under its (type, phase) key
    ///
    /// # Errors
    /// Returns [`ChecklistError::DuplicateDefinition`] when the key is
    /// already taken.
    pub fn register(&mut self, definition: ChecklistDefinition) -> Result<(), ChecklistError> {
        let key = definition.key();
        if self.definitions.contains_key(&key) {
            return Err(ChecklistError::DuplicateDefinition { key });
        }
        tracing::debug!("registered competency `{key}`");
        self.definitions.insert(key, definition);
        Ok(())
    }

    /// Look up an exact (type, phase) key
    #[must_use]
    pub fn get(&self, competency_type: &str, phase: Option<&str>) -> Option<&ChecklistDefinition> {
        self.definitions
            .get(&CompetencyKey::new(competency_type, phase))
    }

    /// Select the definition applying to a schedule
    ///
    /// Lookup order: exact (type, phase) when the schedule carries a
    /// phase, then exact type-only, then the [`generic`](Self::generic)
    /// fallback. No fuzzy matching.
    #[must_use]
    pub fn resolve(&self, schedule: &ScheduleDescriptor) -> &ChecklistDefinition {
        if let Some(phase) = schedule.competency_phase.as_deref() {
            if let Some(definition) = self.get(&schedule.competency_type, Some(phase)) {
                return definition;
            }
        }
        if let Some(definition) = self.get(&schedule.competency_type, None) {
            return definition;
        }
        tracing::warn!(
            competency_type = %schedule.competency_type,
            competency_phase = ?schedule.competency_phase,
            "no definition registered; routing to generic (no checkpoints enforced)"
        );
        Self::generic()
    }

    /// The process-wide fallback definition
    ///
    /// One section, zero items, no gates: `definition_complete` is
    /// unconditionally true for it.
    #[must_use]
    pub fn generic() -> &'static ChecklistDefinition {
        &GENERIC
    }

    /// Deduplicated union of every field across every definition
    ///
    /// Order is stable: registration order, then section order, then
    /// item order (a section's completion field follows its items). This
    /// is the projection the data layer selects at session-load time, so
    /// no per-competency column list is hard-coded anywhere.
    #[must_use]
    pub fn all_field_names(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut names = Vec::new();
        for definition in self.definitions.values() {
            for field in definition.field_names() {
                if seen.insert(field) {
                    names.push(field.to_string());
                }
            }
        }
        names
    }

    /// One definition's fields, for a targeted projection
    ///
    /// `None` when no definition is registered under the exact key.
    #[must_use]
    pub fn fields_for(&self, competency_type: &str, phase: Option<&str>) -> Option<Vec<String>> {
        self.get(competency_type, phase)
            .map(|definition| definition.field_names().map(str::to_string).collect())
    }

    /// Number of registered definitions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no definitions are registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ChecklistDefinition> {
        self.definitions.values()
    }
}
