//! End-to-end validation runs over rule trees on disk

use std::collections::BTreeSet;

use rulecheck::{discover, validate, validate_with_known, Config, DiagnosticKind};

use super::helpers::*;

#[test]
fn test_base_child_orphan_scenario() {
    let temp = rules_root();
    let root = temp.path();

    write_rule(
        root,
        "base.mdc",
        &[("description", "Base conventions"), ("globs", "*")],
        &guidance_body("Base"),
    );
    write_rule(
        root,
        "child.mdc",
        &[("description", "Child rules"), ("globs", "*.py")],
        "# Child\n\nBuilds on @base.mdc.\n",
    );
    write_rule(
        root,
        "orphan.mdc",
        &[("description", "Orphan rules"), ("globs", "*.ts")],
        "# Orphan\n\nPoints at @missing.mdc.\n",
    );

    let config = Config::default();
    let sources = discover(root, &config.extension).expect("discovery failed");
    let report = validate(&sources, &config).expect("validation failed");

    assert!(!report.is_success());
    assert_eq!(report.passed_count(), 2);
    assert_eq!(report.failed_count(), 1);

    let orphan = report
        .documents
        .iter()
        .find(|d| d.identifier == "orphan.mdc")
        .expect("orphan.mdc not in report");
    assert_eq!(orphan.diagnostics.len(), 1);
    assert_eq!(orphan.diagnostics[0].kind, DiagnosticKind::DanglingReference);
    assert!(orphan.diagnostics[0].message.contains("missing.mdc"));

    for identifier in ["base.mdc", "child.mdc"] {
        let document = report
            .documents
            .iter()
            .find(|d| d.identifier == identifier)
            .unwrap();
        assert!(document.is_valid(), "{identifier} should be valid");
    }
}

#[test]
fn test_cross_directory_references_resolve() {
    let temp = rules_root();
    let root = temp.path();

    write_rule(
        root,
        "python/style.mdc",
        &[("description", "Python style"), ("globs", "*.py")],
        "# Style\n\nSee @shared/naming.mdc.\n",
    );
    write_rule(
        root,
        "shared/naming.mdc",
        &[("description", "Naming"), ("globs", "*")],
        &guidance_body("Naming"),
    );

    let config = Config::default();
    let sources = discover(root, &config.extension).unwrap();
    let report = validate(&sources, &config).unwrap();

    assert!(report.is_success());
}

#[test]
fn test_report_lists_documents_in_discovery_order() {
    let temp = rules_root();
    let root = temp.path();

    for name in ["zebra.mdc", "alpha.mdc", "mid.mdc"] {
        write_rule(
            root,
            name,
            &[("description", "d"), ("globs", "*")],
            &guidance_body("Section"),
        );
    }

    let config = Config::default();
    let sources = discover(root, &config.extension).unwrap();
    let report = validate(&sources, &config).unwrap();

    let identifiers: Vec<_> = report
        .documents
        .iter()
        .map(|d| d.identifier.as_str())
        .collect();
    assert_eq!(identifiers, vec!["alpha.mdc", "mid.mdc", "zebra.mdc"]);
}

#[test]
fn test_repeated_runs_produce_identical_reports() {
    let temp = rules_root();
    let root = temp.path();

    write_rule(
        root,
        "good.mdc",
        &[("description", "d"), ("globs", "*")],
        &guidance_body("Fine"),
    );
    write_raw(root, "bad.mdc", "no header at all\n");
    write_rule(
        root,
        "dangling.mdc",
        &[("description", "d"), ("globs", "*")],
        "# D\n\nSee @nowhere.mdc.\n",
    );

    let config = Config::default();
    let run = || {
        let sources = discover(root, &config.extension).unwrap();
        let report = validate(&sources, &config).unwrap();
        serde_json::to_string(&report).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_subset_run_with_preregistered_identifiers() {
    let temp = rules_root();
    let root = temp.path();

    write_rule(
        root,
        "child.mdc",
        &[("description", "d"), ("globs", "*")],
        "# Child\n\nBuilds on @base.mdc.\n",
    );

    let config = Config::default();
    let sources = discover(root, &config.extension).unwrap();

    // base.mdc lives outside this subset; the caller registers it
    // explicitly instead of letting the reference register as dangling.
    let known: BTreeSet<String> = ["base.mdc".to_string()].into_iter().collect();
    let report = validate_with_known(&sources, &config, &known).unwrap();

    assert!(report.is_success());
}

#[test]
fn test_malformed_documents_reported_alongside_valid_ones() {
    let temp = rules_root();
    let root = temp.path();

    write_raw(root, "missing.mdc", "# Heading but no header block\n");
    write_raw(root, "open.mdc", "---\ndescription: never closed\n");
    write_rule(
        root,
        "fine.mdc",
        &[("description", "d"), ("globs", "*")],
        &guidance_body("Fine"),
    );

    let config = Config::default();
    let sources = discover(root, &config.extension).unwrap();
    let report = validate(&sources, &config).unwrap();

    assert_eq!(report.failed_count(), 2);
    assert_eq!(report.passed_count(), 1);

    let kinds: Vec<_> = report.diagnostics().map(|d| d.kind).collect();
    assert!(kinds.contains(&DiagnosticKind::MissingHeaderBlock));
    assert!(kinds.contains(&DiagnosticKind::UnterminatedHeaderBlock));
}

#[test]
fn test_blank_pattern_value_reported_as_empty_not_missing() {
    let temp = rules_root();
    let root = temp.path();

    write_rule(
        root,
        "blank.mdc",
        &[("description", "d"), ("globs", "")],
        &guidance_body("Section"),
    );

    let config = Config::default();
    let sources = discover(root, &config.extension).unwrap();
    let report = validate(&sources, &config).unwrap();

    let diagnostics = &report.documents[0].diagnostics;
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::EmptyRequiredValue);
}
