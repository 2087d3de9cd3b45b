//! Built-in competency checklists
//!
//! One module per modeled competency. Each module exposes a constructor
//! returning a validated [`ChecklistDefinition`]; [`definitions`] collects
//! them all for bulk registration. Adding a competency here (or via a
//! definition file, see `crewcert_model::loader`) is the whole job — no
//! dispatch code changes anywhere else.

use crewcert_model::{ChecklistDefinition, DefinitionError};

mod fryer;
mod grill;
mod knife;
mod slicer;

pub use fryer::fryer;
pub use grill::grill;
pub use knife::{knife_advanced, knife_basic};
pub use slicer::slicer;

/// All built-in definitions, in registration order
///
/// # Errors
/// Returns the first [`DefinitionError`] if a built-in is structurally
/// invalid; that is a programming error and fatal at startup.
pub fn definitions() -> Result<Vec<ChecklistDefinition>, DefinitionError> {
    Ok(vec![
        slicer()?,
        fryer()?,
        knife_basic()?,
        knife_advanced()?,
        grill()?,
    ])
}
