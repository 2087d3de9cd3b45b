//! Checklist sections
//!
//! Two kinds of section exist in practice:
//!
//! - **Item-driven** (Observation, Demonstration): complete when every
//!   item's field is true.
//! - **Attestation** (Knowledge/Questions): shows discussion prompts that
//!   are not individually tracked; a single completion field records that
//!   the facilitator confirmed the discussion happened.
//!
//! The prompts of an attestation section never contribute to completion.
//! That is deliberate policy, not an oversight: prompts are not
//! addressable fields, so the facilitator attests the section as a whole.

use crate::item::ChecklistItem;
use serde::{Deserialize, Serialize};

/// A named group of checkpoints, or an attestation-only group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSection {
    /// Section heading ("Safety Observation", "Knowledge Check")
    pub title: String,
    /// Checkable items, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ChecklistItem>,
    /// Informational discussion prompts (attestation sections)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prompts: Vec<String>,
    /// Single field gating completion of an attestation section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_field: Option<String>,
}

impl ChecklistSection {
    /// Create an item-driven section
    #[must_use]
    pub fn items(title: impl Into<String>, items: Vec<ChecklistItem>) -> Self {
        Self {
            title: title.into(),
            items,
            prompts: Vec::new(),
            completion_field: None,
        }
    }

    /// Create an attestation section: prompts plus one completion field
    #[must_use]
    pub fn attested<I, S>(
        title: impl Into<String>,
        prompts: I,
        completion_field: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            items: Vec::new(),
            prompts: prompts.into_iter().map(Into::into).collect(),
            completion_field: Some(completion_field.into()),
        }
    }

    /// Whether completion is driven by a single attestation field
    #[inline]
    #[must_use]
    pub fn is_attested(&self) -> bool {
        self.completion_field.is_some()
    }

    /// Persisted field names this section contributes, in order
    ///
    /// Item fields first, then the completion field if present. Prompts
    /// contribute nothing.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .map(|item| item.field_name.as_str())
            .chain(self.completion_field.as_deref())
    }

    /// Whether `field` is persisted by this section
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.field_names().any(|name| name == field)
    }
}
