//! Integration tests for lookup source rendering.

use stringify_model::{Category, SymbolRegistry};
use stringify_render::{RenderError, Template, case_line, render_document, required_slots};

fn sample_registry() -> SymbolRegistry {
    let mut registry = SymbolRegistry::new();
    registry.register(Category::Errors, "PRL_ERR_SUCCESS");
    registry.register(Category::Errors, "PRL_ERR_FAILURE");
    registry.register(Category::Events, "PET_A");
    registry.register(Category::Events, "PET_B");
    registry.register(Category::HandleTypes, "PHT_SERVER");
    registry.register(Category::VmStates, "VMS_RUNNING");
    registry.register(Category::JobOperationCodes, "PJOC_VM_START");
    registry
}

/// Case labels of the switch in the function named `function`.
fn case_labels<'a>(document: &'a str, function: &str) -> Vec<&'a str> {
    let start = document
        .find(&format!("{function}(unsigned int value)"))
        .expect("function present");
    let body = &document[start..];
    let end = body.find("default:").expect("default branch");
    body[..end]
        .lines()
        .filter_map(|line| line.trim().strip_prefix("case (unsigned int)"))
        .filter_map(|rest| rest.split(':').next())
        .collect()
}

#[test]
fn small_template_snapshot() {
    let template = Template::parse(
        "// {{ filename }}\nswitch ( value )\n{\n{{ events_case }}\n}",
    );
    let document = render_document(&template, &sample_registry(), "Consts.cpp").expect("render");

    insta::assert_snapshot!(document, @r#"
// Consts.cpp
switch ( value )
{
        case (unsigned int)PET_A: return "PET_A";
        case (unsigned int)PET_B: return "PET_B";
}
"#);
}

#[test]
fn every_symbol_becomes_exactly_one_case_label() {
    let registry = sample_registry();
    let document =
        render_document(&Template::builtin(), &registry, "PrlStringifyConsts.cpp").expect("render");

    for category in Category::ALL {
        let labels = case_labels(&document, category.lookup_function());
        let expected: Vec<_> = registry.names(category).collect();
        assert_eq!(labels, expected, "{category} case labels");
    }
}

#[test]
fn duplicate_symbols_render_duplicate_cases() {
    let mut registry = SymbolRegistry::new();
    registry.register(Category::Events, "PET_A");
    registry.register(Category::Events, "PET_A");
    let document = render_document(&Template::builtin(), &registry, "x.cpp").expect("render");
    assert_eq!(document.matches(&case_line("PET_A")).count(), 2);
}

#[test]
fn rendering_is_deterministic() {
    let registry = sample_registry();
    let first = render_document(&Template::builtin(), &registry, "a.cpp").expect("render");
    let second = render_document(&Template::builtin(), &registry, "a.cpp").expect("render");
    assert_eq!(first, second);
    assert!(first.contains("@file a.cpp"));
    assert!(!first.contains("{{"));
}

#[test]
fn unknown_slot_in_custom_template_is_fatal() {
    let template = Template::parse("{{ errors_case }}\n{{ warnings_case }}\n");
    let err = render_document(&template, &sample_registry(), "x.cpp").expect_err("unknown slot");
    assert!(err.is_slot_error());
    assert!(matches!(err, RenderError::UnknownSlot { ref slot } if slot == "warnings_case"));
}

#[test]
fn template_without_case_slot_fails_validation() {
    let template = Template::parse("{{ filename }} {{ errors_case }} {{ events_case }}");
    let err = template
        .require_slots(required_slots())
        .expect_err("type-code slots missing");
    assert!(matches!(err, RenderError::MissingSlot { ref slot } if slot == "h_types_case"));
}
