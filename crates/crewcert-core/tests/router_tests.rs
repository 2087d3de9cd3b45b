//! Routing precedence, fallback behavior, and the field catalog

use crewcert_core::{definition_complete, ChecklistError, CompetencyRegistry};
use crewcert_model::{ChecklistDefinition, ChecklistItem, ChecklistSection};
use crewcert_test_utils::{schedule, session_with};
use pretty_assertions::assert_eq;

fn type_only(competency_type: &str, field: &str) -> ChecklistDefinition {
    ChecklistDefinition::builder(competency_type)
        .section(ChecklistSection::items(
            "Observation",
            vec![ChecklistItem::new(field, "observed")],
        ))
        .build()
        .unwrap()
}

fn phased(competency_type: &str, phase: &str, field: &str) -> ChecklistDefinition {
    ChecklistDefinition::builder(competency_type)
        .phase(phase)
        .section(ChecklistSection::items(
            "Observation",
            vec![ChecklistItem::new(field, "observed")],
        ))
        .build()
        .unwrap()
}

#[test]
fn phase_qualified_definition_wins_when_schedule_has_phase() {
    let mut registry = CompetencyRegistry::new();
    registry.register(type_only("knife-skills", "k_plain")).unwrap();
    registry
        .register(phased("knife-skills", "basic", "k_basic"))
        .unwrap();

    let resolved = registry.resolve(&schedule("knife-skills", Some("basic")));
    assert_eq!(resolved.competency_phase(), Some("basic"));

    let resolved = registry.resolve(&schedule("knife-skills", None));
    assert_eq!(resolved.competency_phase(), None);
}

#[test]
fn unknown_phase_falls_back_to_type_only() {
    let mut registry = CompetencyRegistry::new();
    registry.register(type_only("knife-skills", "k_plain")).unwrap();

    let resolved = registry.resolve(&schedule("knife-skills", Some("expert")));
    assert_eq!(resolved.competency_type(), "knife-skills");
    assert_eq!(resolved.competency_phase(), None);
}

#[test]
fn unregistered_type_routes_to_generic_which_is_always_complete() {
    let registry = CompetencyRegistry::new();
    let resolved = registry.resolve(&schedule("espresso", None));

    assert_eq!(resolved.competency_type(), "generic");
    assert!(definition_complete(resolved, &session_with(&[])));
}

#[test]
fn duplicate_registration_fails() {
    let mut registry = CompetencyRegistry::new();
    registry.register(type_only("grill", "g_a")).unwrap();

    let err = registry.register(type_only("grill", "g_b")).unwrap_err();
    assert!(matches!(err, ChecklistError::DuplicateDefinition { .. }));

    // Phase-qualified key does not collide with the type-only key.
    registry.register(phased("grill", "night", "g_c")).unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn field_catalog_is_a_stable_ordered_union() {
    let mut registry = CompetencyRegistry::new();
    registry.register(type_only("grill", "g_obs")).unwrap();
    registry.register(type_only("fryer", "f_obs")).unwrap();

    let all = registry.all_field_names();
    assert_eq!(all, vec!["g_obs".to_string(), "f_obs".to_string()]);

    // Disjoint definitions: union size is the sum of the parts.
    let per_definition: usize = registry
        .iter()
        .map(|definition| definition.field_names().count())
        .sum();
    assert_eq!(all.len(), per_definition);
}

#[test]
fn field_catalog_deduplicates_names_shared_across_definitions() {
    let mut registry = CompetencyRegistry::new();
    registry.register(type_only("grill", "shared_obs")).unwrap();
    registry.register(type_only("fryer", "shared_obs")).unwrap();

    assert_eq!(registry.all_field_names(), vec!["shared_obs".to_string()]);
}

#[test]
fn fields_for_returns_one_definition_projection() {
    let registry = CompetencyRegistry::with_builtins().unwrap();

    let fields = registry.fields_for("slicer", None).unwrap();
    assert_eq!(fields.first().map(String::as_str), Some("slicer_obs_guard"));
    assert!(fields.contains(&"slicer_knowledge_reviewed".to_string()));
    assert_eq!(fields.last().map(String::as_str), Some("slicer_solo_signoff"));

    assert!(registry.fields_for("espresso", None).is_none());
}

#[test]
fn builtin_catalog_has_no_duplicate_fields() {
    let registry = CompetencyRegistry::with_builtins().unwrap();
    let all = registry.all_field_names();
    let total: usize = registry
        .iter()
        .map(|definition| definition.field_names().count())
        .sum();
    assert_eq!(all.len(), total);
}
