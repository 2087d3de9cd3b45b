//! Fryer station certification

use crewcert_model::{ChecklistDefinition, ChecklistItem, ChecklistSection, DefinitionError};

/// Fryer checklist: observation, demonstration, knowledge check
pub fn fryer() -> Result<ChecklistDefinition, DefinitionError> {
    ChecklistDefinition::builder("fryer")
        .section(ChecklistSection::items(
            "Observation",
            vec![
                ChecklistItem::new(
                    "fryer_obs_temp",
                    "Verifies oil temperature against the line chart before dropping",
                ),
                ChecklistItem::new(
                    "fryer_obs_basket",
                    "Lowers baskets away from the body, no splash",
                ),
                ChecklistItem::new(
                    "fryer_obs_timer",
                    "Starts the product timer on every drop",
                ),
            ],
        ))
        .section(ChecklistSection::items(
            "Demonstration",
            vec![
                ChecklistItem::new(
                    "fryer_demo_filter",
                    "Performs the daily filter cycle with gloves and face shield",
                )
                .with_sub_labels(["Oil above 300\u{b0}F requires a second person present"]),
                ChecklistItem::new(
                    "fryer_demo_boil_out",
                    "Completes a supervised boil-out end to end",
                ),
                ChecklistItem::new(
                    "fryer_demo_quality",
                    "Pulls, salts, and holds product to quality standard",
                ),
            ],
        ))
        .section(ChecklistSection::attested(
            "Knowledge Check",
            [
                "What do you do first if oil ignites?",
                "How often is the oil quality tested, and with what?",
                "Why is water near the vats dangerous?",
            ],
            "fryer_knowledge_reviewed",
        ))
        .build()
}
