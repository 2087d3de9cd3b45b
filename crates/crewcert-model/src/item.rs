//! Checklist items
//!
//! An item is one boolean fact a trainer marks off ("trainee wore cut
//! glove while handling the blade"). Its `field_name` is the persistence
//! key the data layer reads and writes.

use serde::{Deserialize, Serialize};

/// One checkable fact bound to a persisted boolean field
///
/// `field_name` must be unique within its [`ChecklistDefinition`]; that
/// invariant is enforced when the definition is built, not here.
///
/// [`ChecklistDefinition`]: crate::ChecklistDefinition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Persistence key for this checkpoint
    #[serde(rename = "field")]
    pub field_name: String,
    /// Display label shown next to the checkbox
    pub label: String,
    /// Optional indented detail lines under the label
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_labels: Vec<String>,
}

impl ChecklistItem {
    /// Create an item with no sub-labels
    #[inline]
    #[must_use]
    pub fn new(field_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            label: label.into(),
            sub_labels: Vec::new(),
        }
    }

    /// Attach indented detail lines
    #[must_use]
    pub fn with_sub_labels<I, S>(mut self, sub_labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_labels = sub_labels.into_iter().map(Into::into).collect();
        self
    }
}
