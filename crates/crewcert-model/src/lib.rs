//! Declarative checklist model for competency assessments
//!
//! A competency assessment is a multi-section checklist a trainer walks
//! through with a trainee. This crate defines the static structure:
//!
//! - [`ChecklistItem`] — one checkable fact bound to a persisted field
//! - [`ChecklistSection`] — an ordered group of items, or an
//!   attestation-only group gated on a single completion field
//! - [`SectionGate`] — prerequisite rule locking a section until earlier
//!   sections are complete
//! - [`ChecklistDefinition`] — the full structure for one
//!   (competency type, phase) pair, validated at build time
//!
//! Definitions are data, not code: they are built once at startup (or
//! loaded from YAML/JSON via [`loader`]) and never mutated. Evaluation
//! logic lives in `crewcert-core`.

pub mod definition;
pub mod error;
pub mod gate;
pub mod item;
pub mod loader;
pub mod section;

pub use definition::{ChecklistDefinition, CompetencyKey, DefinitionBuilder};
pub use error::{DefinitionError, DefinitionParseError};
pub use gate::SectionGate;
pub use item::ChecklistItem;
pub use section::ChecklistSection;
