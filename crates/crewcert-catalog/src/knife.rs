//! Knife skills certification, split into two phases
//!
//! The basic phase covers safe handling; the advanced phase covers
//! production cuts and is scheduled separately. Both register under the
//! `knife-skills` type, so routing exercises the phase-qualified path.

use crewcert_model::{ChecklistDefinition, ChecklistItem, ChecklistSection, DefinitionError};

/// Phase `basic`: grip, board setup, transport, storage
pub fn knife_basic() -> Result<ChecklistDefinition, DefinitionError> {
    ChecklistDefinition::builder("knife-skills")
        .phase("basic")
        .section(ChecklistSection::items(
            "Observation",
            vec![
                ChecklistItem::new("knife_obs_grip", "Pinch grip with guiding claw hand"),
                ChecklistItem::new("knife_obs_board", "Damp towel under the cutting board"),
                ChecklistItem::new(
                    "knife_obs_carry",
                    "Carries knife point down at the side, announces \"knife\"",
                ),
                ChecklistItem::new("knife_obs_storage", "Returns knives to the rack, never the sink"),
            ],
        ))
        .section(ChecklistSection::attested(
            "Knowledge Check",
            [
                "Why is a dull knife more dangerous than a sharp one?",
                "Where do chipped knives go?",
            ],
            "knife_basic_knowledge_reviewed",
        ))
        .build()
}

/// Phase `advanced`: production cuts at line speed
pub fn knife_advanced() -> Result<ChecklistDefinition, DefinitionError> {
    ChecklistDefinition::builder("knife-skills")
        .phase("advanced")
        .section(ChecklistSection::items(
            "Demonstration",
            vec![
                ChecklistItem::new("knife_adv_dice", "Uniform medium dice across a full case")
                    .with_sub_labels(["Spot check with the dice card"]),
                ChecklistItem::new("knife_adv_julienne", "Julienne to spec within prep-sheet time"),
                ChecklistItem::new("knife_adv_hone", "Hones the edge before each prep block"),
            ],
        ))
        .section(ChecklistSection::items(
            "Line Speed",
            vec![ChecklistItem::new(
                "knife_adv_speed_signoff",
                "Holds prep pace for a full rush without safety drift",
            )],
        ))
        .gate(1, [0])
        .build()
}
