//! Competency checklist core
//!
//! Everything with logic lives here:
//!
//! - [`evaluate`] — pure completion and unlock predicates
//! - [`registry`] — the process-wide definition catalog and the router
//!   that picks a definition for a schedule
//! - [`toggle`] — the checkpoint toggle and mark-complete operations,
//!   plus the [`CheckpointStore`] persistence seam
//! - [`session`] — session record and schedule descriptor shapes shared
//!   with the data-fetch collaborator
//!
//! The core is stateless across calls: every predicate is a pure
//! function of a definition and a session record, recomputed on each
//! evaluation. The only side effect anywhere is the single-field write
//! [`toggle_checkpoint`] delegates to its store.

pub mod error;
pub mod evaluate;
pub mod registry;
pub mod session;
pub mod toggle;

pub use error::{ChecklistError, PersistenceError};
pub use evaluate::{
    definition_complete, incomplete_sections, section_complete, section_complete_at,
    section_unlocked, unmet_prerequisites,
};
pub use registry::CompetencyRegistry;
pub use session::{ScheduleDescriptor, SessionId, SessionRecord, TraineeRef};
pub use toggle::{ensure_complete, toggle_checkpoint, CheckpointStore};

// Re-export the model so callers need only one crate
pub use crewcert_model as model;
