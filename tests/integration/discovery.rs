//! Discovery behavior over real directory trees

use rulecheck::discover;

use super::helpers::*;

#[test]
fn test_discovery_is_recursive_and_sorted() {
    let temp = rules_root();
    let root = temp.path();

    write_raw(root, "top.mdc", "t");
    write_raw(root, "nested/deeper/rule.mdc", "n");
    write_raw(root, "nested/other.mdc", "o");

    let sources = discover(root, "mdc").unwrap();
    let identifiers: Vec<_> = sources.iter().map(|s| s.identifier.as_str()).collect();

    assert_eq!(
        identifiers,
        vec!["nested/deeper/rule.mdc", "nested/other.mdc", "top.mdc"]
    );
}

#[test]
fn test_discovery_skips_non_rule_files() {
    let temp = rules_root();
    let root = temp.path();

    write_raw(root, "rule.mdc", "r");
    write_raw(root, "README.md", "readme");
    write_raw(root, "scripts/install.sh", "#!/bin/sh\n");

    let sources = discover(root, "mdc").unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].identifier, "rule.mdc");
}

#[test]
fn test_discovery_reads_file_contents() {
    let temp = rules_root();
    let root = temp.path();

    write_raw(root, "rule.mdc", "---\ndescription: d\n---\n# Body\n");

    let sources = discover(root, "mdc").unwrap();
    assert!(sources[0].text.starts_with("---\n"));
}

#[test]
fn test_discovery_errors_on_missing_root() {
    let temp = rules_root();
    let missing = temp.path().join("does-not-exist");

    let result = discover(&missing, "mdc");
    assert!(result.is_err());
}
