//! Checklist definitions
//!
//! A [`ChecklistDefinition`] is the full declarative structure for one
//! competency: ordered sections plus optional gates. Structural
//! invariants (unique field names, gate indexes in range and strictly
//! earlier than the section they lock) are enforced by
//! [`DefinitionBuilder::build`], so a constructed definition is always
//! well formed. Fields are private for that reason.

use crate::error::DefinitionError;
use crate::gate::SectionGate;
use crate::section::ChecklistSection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identity of a definition: competency type plus optional phase
///
/// Two definitions with the same key answer for the same training
/// assignments, which the registry treats as a fatal configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompetencyKey {
    /// Competency type ("slicer", "fryer")
    pub competency_type: String,
    /// Optional phase qualifier ("basic", "advanced")
    pub competency_phase: Option<String>,
}

impl CompetencyKey {
    /// Create a key from type and optional phase
    #[must_use]
    pub fn new(competency_type: impl Into<String>, competency_phase: Option<&str>) -> Self {
        Self {
            competency_type: competency_type.into(),
            competency_phase: competency_phase.map(str::to_string),
        }
    }
}

impl std::fmt::Display for CompetencyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.competency_phase {
            Some(phase) => write!(f, "{}/{}", self.competency_type, phase),
            None => write!(f, "{}", self.competency_type),
        }
    }
}

/// Full checklist structure for one (competency type, phase) pair
///
/// Built once at process start and never mutated afterwards.
/// Deserialization runs the same validation as the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDefinition")]
pub struct ChecklistDefinition {
    competency_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    competency_phase: Option<String>,
    sections: Vec<ChecklistSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    gates: Vec<SectionGate>,
}

impl ChecklistDefinition {
    /// Start building a definition for `competency_type`
    #[must_use]
    pub fn builder(competency_type: impl Into<String>) -> DefinitionBuilder {
        DefinitionBuilder {
            competency_type: competency_type.into(),
            competency_phase: None,
            sections: Vec::new(),
            gates: Vec::new(),
        }
    }

    /// Competency type this definition answers for
    #[inline]
    #[must_use]
    pub fn competency_type(&self) -> &str {
        &self.competency_type
    }

    /// Phase qualifier, if this definition is phase-specific
    #[inline]
    #[must_use]
    pub fn competency_phase(&self) -> Option<&str> {
        self.competency_phase.as_deref()
    }

    /// Registry key for this definition
    #[must_use]
    pub fn key(&self) -> CompetencyKey {
        CompetencyKey::new(self.competency_type.clone(), self.competency_phase())
    }

    /// Sections in display order
    #[inline]
    #[must_use]
    pub fn sections(&self) -> &[ChecklistSection] {
        &self.sections
    }

    /// All gates declared on this definition
    #[inline]
    #[must_use]
    pub fn gates(&self) -> &[SectionGate] {
        &self.gates
    }

    /// Gate locking `section_index`, if any
    #[must_use]
    pub fn gate_for(&self, section_index: usize) -> Option<&SectionGate> {
        self.gates
            .iter()
            .find(|gate| gate.gated_section == section_index)
    }

    /// Every persisted field name, in section order then item order
    ///
    /// This is the per-definition field catalog: the data layer selects
    /// exactly these columns when loading a session for this competency.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().flat_map(ChecklistSection::field_names)
    }

    /// Whether `field` is persisted by any section of this definition
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.sections.iter().any(|section| section.has_field(field))
    }

    /// Index of the section that owns `field`
    #[must_use]
    pub fn section_of_field(&self, field: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.has_field(field))
    }
}

/// Builder for [`ChecklistDefinition`]
///
/// Collects sections and gates, then validates the whole structure in
/// [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct DefinitionBuilder {
    competency_type: String,
    competency_phase: Option<String>,
    sections: Vec<ChecklistSection>,
    gates: Vec<SectionGate>,
}

impl DefinitionBuilder {
    /// Qualify the definition with a phase
    #[must_use]
    pub fn phase(mut self, phase: impl Into<String>) -> Self {
        self.competency_phase = Some(phase.into());
        self
    }

    /// Append a section
    #[must_use]
    pub fn section(mut self, section: ChecklistSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Lock section `gated` until all `prerequisites` are complete
    #[must_use]
    pub fn gate(mut self, gated: usize, prerequisites: impl IntoIterator<Item = usize>) -> Self {
        self.gates.push(SectionGate::new(gated, prerequisites));
        self
    }

    /// Validate and produce the definition
    ///
    /// # Errors
    /// Returns [`DefinitionError`] when the competency type is blank, no
    /// sections were added, a field name repeats anywhere in the
    /// definition, or a gate references an out-of-range or
    /// not-strictly-earlier section.
    pub fn build(self) -> Result<ChecklistDefinition, DefinitionError> {
        if self.competency_type.trim().is_empty() {
            return Err(DefinitionError::EmptyCompetencyType);
        }
        if self.sections.is_empty() {
            return Err(DefinitionError::NoSections {
                competency_type: self.competency_type,
            });
        }

        let mut owners: HashMap<&str, usize> = HashMap::new();
        for (index, section) in self.sections.iter().enumerate() {
            for field in section.field_names() {
                if let Some(&first) = owners.get(field) {
                    return Err(DefinitionError::DuplicateField {
                        field: field.to_string(),
                        first_section: self.sections[first].title.clone(),
                        second_section: section.title.clone(),
                    });
                }
                owners.insert(field, index);
            }
        }

        let section_count = self.sections.len();
        let mut gated_seen = Vec::with_capacity(self.gates.len());
        for gate in &self.gates {
            if gate.gated_section >= section_count {
                return Err(DefinitionError::GateOutOfBounds {
                    index: gate.gated_section,
                    section_count,
                });
            }
            if gated_seen.contains(&gate.gated_section) {
                return Err(DefinitionError::DuplicateGate {
                    section: gate.gated_section,
                });
            }
            gated_seen.push(gate.gated_section);
            for &prerequisite in &gate.prerequisites {
                if prerequisite >= gate.gated_section {
                    return Err(DefinitionError::PrerequisiteNotEarlier {
                        gated: gate.gated_section,
                        prerequisite,
                    });
                }
            }
        }

        Ok(ChecklistDefinition {
            competency_type: self.competency_type,
            competency_phase: self.competency_phase,
            sections: self.sections,
            gates: self.gates,
        })
    }
}

/// Unvalidated wire shape; `try_from` funnels parsing through the builder
#[derive(Debug, Deserialize)]
struct RawDefinition {
    competency_type: String,
    #[serde(default)]
    competency_phase: Option<String>,
    sections: Vec<ChecklistSection>,
    #[serde(default)]
    gates: Vec<SectionGate>,
}

impl TryFrom<RawDefinition> for ChecklistDefinition {
    type Error = DefinitionError;

    fn try_from(raw: RawDefinition) -> Result<Self, Self::Error> {
        let mut builder = ChecklistDefinition::builder(raw.competency_type);
        if let Some(phase) = raw.competency_phase {
            builder = builder.phase(phase);
        }
        for section in raw.sections {
            builder = builder.section(section);
        }
        for gate in raw.gates {
            builder = builder.gate(gate.gated_section, gate.prerequisites);
        }
        builder.build()
    }
}
