//! Deli slicer certification
//!
//! The strictest checklist in the catalog. Solo operation is gated on the
//! three hands-on sections and the knowledge check: nobody runs the
//! slicer unsupervised until every prerequisite is attested.

use crewcert_model::{ChecklistDefinition, ChecklistItem, ChecklistSection, DefinitionError};

/// Slicer safety and operation checklist
///
/// Sections: Safety Observation, Guided Operation, Breakdown & Cleaning,
/// Knowledge Check (attested), then a gated Solo Operation sign-off.
pub fn slicer() -> Result<ChecklistDefinition, DefinitionError> {
    ChecklistDefinition::builder("slicer")
        .section(ChecklistSection::items(
            "Safety Observation",
            vec![
                ChecklistItem::new(
                    "slicer_obs_guard",
                    "Blade guard closed whenever the slicer is idle",
                ),
                ChecklistItem::new(
                    "slicer_obs_dial_zero",
                    "Thickness dial returned to zero before loading product",
                ),
                ChecklistItem::new("slicer_obs_glove", "Cut-resistant glove on the free hand")
                    .with_sub_labels(["Mesh glove under a disposable glove"]),
                ChecklistItem::new(
                    "slicer_obs_unplug",
                    "Unit unplugged before any guard removal",
                ),
            ],
        ))
        .section(ChecklistSection::items(
            "Guided Operation",
            vec![
                ChecklistItem::new(
                    "slicer_demo_load",
                    "Loads product using the carriage, never by hand",
                ),
                ChecklistItem::new(
                    "slicer_demo_stroke",
                    "Full, even carriage strokes with the pusher engaged",
                ),
                ChecklistItem::new(
                    "slicer_demo_last_pass",
                    "Uses the end-piece pusher for the final passes",
                ),
                ChecklistItem::new(
                    "slicer_demo_portion",
                    "Slices to spec weight within tolerance",
                )
                .with_sub_labels(["Check three portions on the scale"]),
            ],
        ))
        .section(ChecklistSection::items(
            "Breakdown & Cleaning",
            vec![
                ChecklistItem::new(
                    "slicer_clean_lockout",
                    "Dial zeroed and unit unplugged before breakdown",
                ),
                ChecklistItem::new(
                    "slicer_clean_disassemble",
                    "Removes carriage, guard, and deflector in order",
                ),
                ChecklistItem::new(
                    "slicer_clean_sanitize",
                    "Washes, rinses, and sanitizes all removed parts",
                ),
                ChecklistItem::new(
                    "slicer_clean_blade",
                    "Wipes the blade from center outward with a folded towel",
                ),
            ],
        ))
        .section(ChecklistSection::attested(
            "Knowledge Check",
            [
                "Why must the thickness dial return to zero before cleaning?",
                "When is it acceptable to bypass the blade guard?",
                "What is the minimum age requirement to operate the slicer?",
                "Who do you notify if the blade is chipped or loose?",
            ],
            "slicer_knowledge_reviewed",
        ))
        .section(ChecklistSection::items(
            "Solo Operation",
            vec![ChecklistItem::new(
                "slicer_solo_signoff",
                "Completed one full shift of solo slicing under spot checks",
            )],
        ))
        .gate(4, [0, 1, 2, 3])
        .build()
}
