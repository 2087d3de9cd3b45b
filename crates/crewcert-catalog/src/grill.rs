//! Grill station certification

use crewcert_model::{ChecklistDefinition, ChecklistItem, ChecklistSection, DefinitionError};

/// Grill checklist, type-only (no phases)
pub fn grill() -> Result<ChecklistDefinition, DefinitionError> {
    ChecklistDefinition::builder("grill")
        .section(ChecklistSection::items(
            "Observation",
            vec![
                ChecklistItem::new("grill_obs_zones", "Names the hot and hold zones correctly"),
                ChecklistItem::new(
                    "grill_obs_thermometer",
                    "Probes to temp on every batch, logs readings",
                ),
                ChecklistItem::new(
                    "grill_obs_cross",
                    "Separate tools for raw and finished product",
                ),
            ],
        ))
        .section(ChecklistSection::items(
            "Demonstration",
            vec![
                ChecklistItem::new("grill_demo_cook", "Runs a full cook cycle to internal temp spec"),
                ChecklistItem::new("grill_demo_clean", "Scrapes and re-seasons the surface at close"),
            ],
        ))
        .build()
}
