//! Section gates
//!
//! A gate keeps one section locked until named earlier sections are
//! complete. This backs real-world sequencing: a trainee must not operate
//! dangerous equipment solo before the safety sections are attested, so
//! the lock is enforced at the model layer, not just hidden in the UI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Prerequisite rule restricting availability of one section
///
/// Indexes refer to section positions within the owning
/// [`ChecklistDefinition`]. Build-time validation requires every
/// prerequisite to be strictly earlier than the gated section.
///
/// [`ChecklistDefinition`]: crate::ChecklistDefinition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionGate {
    /// Index of the section this gate locks
    #[serde(rename = "section")]
    pub gated_section: usize,
    /// Indexes of sections that must be complete before unlock
    #[serde(rename = "requires")]
    pub prerequisites: BTreeSet<usize>,
}

impl SectionGate {
    /// Create a gate over `gated_section` requiring `prerequisites`
    #[must_use]
    pub fn new(gated_section: usize, prerequisites: impl IntoIterator<Item = usize>) -> Self {
        Self {
            gated_section,
            prerequisites: prerequisites.into_iter().collect(),
        }
    }
}
