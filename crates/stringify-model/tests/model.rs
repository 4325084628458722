//! Tests for stringify-model types.

use stringify_model::{Category, NamingRules, SymbolRegistry};

#[test]
fn registry_keeps_duplicates_in_first_seen_order() {
    let mut registry = SymbolRegistry::new();
    registry.register(Category::Errors, "PRL_ERR_FAILURE");
    registry.register(Category::Errors, "PRL_ERR_SUCCESS");
    registry.register(Category::Errors, "PRL_ERR_FAILURE");

    let names: Vec<_> = registry.names(Category::Errors).collect();
    assert_eq!(
        names,
        vec!["PRL_ERR_FAILURE", "PRL_ERR_SUCCESS", "PRL_ERR_FAILURE"]
    );
    let positions: Vec<_> = registry
        .symbols(Category::Errors)
        .iter()
        .map(|s| s.position)
        .collect();
    assert_eq!(positions, vec![0, 1, 2]);
}

#[test]
fn counts_cover_every_category_in_output_order() {
    let mut registry = SymbolRegistry::new();
    registry.register(Category::VmStates, "VMS_RUNNING");
    registry.register(Category::Events, "PET_VM_STARTED");

    assert_eq!(
        registry.counts(),
        vec![
            (Category::Errors, 0),
            (Category::Events, 1),
            (Category::HandleTypes, 0),
            (Category::VmStates, 1),
            (Category::JobOperationCodes, 0),
        ]
    );
    assert!(!registry.is_empty());
}

#[test]
fn naming_rules_fill_missing_fields_with_defaults() {
    let rules: NamingRules = toml::from_str(r#"event_prefix = "PEX_""#).expect("parse rules");
    assert_eq!(rules.event_prefix, "PEX_");
    assert_eq!(rules.public_error_prefix, "PRL_");
    assert_eq!(rules.enum_prefix(Category::VmStates), Some("VMS_"));
    assert_eq!(rules.enum_prefix(Category::Errors), None);
}

#[test]
fn naming_rules_reject_unknown_keys() {
    let parsed: Result<NamingRules, _> = toml::from_str(r#"warning_prefix = "PWR_""#);
    assert!(parsed.is_err());
}
