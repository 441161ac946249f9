//! Unit tests for the symbol catalogue.

use std::collections::BTreeSet;

use super::catalogue::{cdos_pattern_to_regex, Catalogue, SymbolCatalogue};
use crate::errors::errors::ErrorImpl;

fn sample() -> Catalogue {
    Catalogue::new()
        .with_function("SQRT")
        .with_command("PLOT")
        .with_command("PLOTALL")
        .with_function("VARS")
        .with_command("VARS")
}

#[test]
fn test_roles() {
    let catalogue = sample();

    assert!(catalogue.is_function("SQRT"));
    assert!(catalogue.is_function_only("SQRT"));
    assert!(catalogue.is_command_only("PLOT"));
    assert!(catalogue.is_both("VARS"));
    assert!(!catalogue.is_function_only("VARS"));
    assert!(!catalogue.is_command("NOPE"));
    assert!(!catalogue.is_function("NOPE"));
}

#[test]
fn test_names_are_case_sensitive() {
    let catalogue = Catalogue::new().with_function("SQRT");

    assert!(catalogue.is_function("SQRT"));
    assert!(!catalogue.is_function("sqrt"));
}

#[test]
fn test_all_names_sorted() {
    let catalogue = sample();

    assert_eq!(
        catalogue.all_command_names().into_iter().collect::<Vec<_>>(),
        vec!["PLOT", "PLOTALL", "VARS"]
    );
    assert_eq!(
        catalogue.all_function_names(),
        BTreeSet::from(["SQRT".to_string(), "VARS".to_string()])
    );
}

#[test]
fn test_parse_manifest() {
    let manifest = "# sample\nFUNCTION SQRT\n\ncommand PLOT\nBOTH VARS\n";
    let catalogue = Catalogue::parse(manifest, None).unwrap();

    assert_eq!(catalogue.len(), 3);
    assert!(catalogue.is_function_only("SQRT"));
    assert!(catalogue.is_command_only("PLOT"));
    assert!(catalogue.is_both("VARS"));
}

#[test]
fn test_parse_manifest_rejects_bad_lines() {
    let error = Catalogue::parse("FUNCTION SQRT\nMACRO X\n", Some("cat.txt".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedCatalogueEntry");
    assert_eq!(error.get_position().0, 14);

    let error = Catalogue::parse("FUNCTION\n", None).unwrap_err();
    assert_eq!(error.get_error_name(), "MalformedCatalogueEntry");
}

#[test]
fn test_parse_manifest_rejects_lowercase_names() {
    let error = Catalogue::parse("FUNCTION SQRT\nFUNCTION sqrt\n", None).unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedCatalogueEntry");
    assert_eq!(error.get_position().0, 14);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::MalformedCatalogueEntry { line: "FUNCTION sqrt".to_string() }
    );
}

#[test]
fn test_cdos_patterns() {
    let regex = cdos_pattern_to_regex("PLO*").unwrap();
    assert!(regex.is_match("PLOT"));
    assert!(!regex.is_match("PLOTALL"));

    let regex = cdos_pattern_to_regex("plot-").unwrap();
    assert!(regex.is_match("PLOTALL"));
    assert!(!regex.is_match("PLOT"));
}

#[test]
fn test_matching_filters() {
    let catalogue = sample();

    assert_eq!(catalogue.commands_matching("PLOT-").len(), 1);
    assert_eq!(catalogue.commands_matching("").len(), 3);
    assert!(catalogue.functions_matching("S***").contains("SQRT"));
}
