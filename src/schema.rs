//! Header schema enforcement.

use crate::config::Config;
use crate::document::Document;
use crate::report::{Diagnostic, DiagnosticKind};

/// Check a parsed document's header against the configured schema.
///
/// Pure check: returns one diagnostic per violation, in configured key
/// order. A key that is present but blank after trimming is reported as
/// [`DiagnosticKind::EmptyRequiredValue`], not as missing.
pub fn check_header(doc: &Document, config: &Config) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for key in &config.required_keys {
        match doc.header.get(key) {
            None => diagnostics.push(Diagnostic {
                document: doc.identifier.clone(),
                kind: DiagnosticKind::MissingRequiredKey,
                message: format!("Missing required header key '{key}'"),
            }),
            Some(value) if value.trim().is_empty() => diagnostics.push(Diagnostic {
                document: doc.identifier.clone(),
                kind: DiagnosticKind::EmptyRequiredValue,
                message: format!("Header key '{key}' must not be empty"),
            }),
            Some(_) => {}
        }
    }

    // The pattern-list key controls which files a rule applies to, so its
    // value gets the emptiness check even when a custom schema leaves it
    // out of the required set.
    if !config.required_keys.contains(&config.pattern_key) {
        if let Some(value) = doc.header.get(&config.pattern_key) {
            if value.trim().is_empty() {
                diagnostics.push(Diagnostic {
                    document: doc.identifier.clone(),
                    kind: DiagnosticKind::EmptyRequiredValue,
                    message: format!("Header key '{}' must not be empty", config.pattern_key),
                });
            }
        }
    }

    diagnostics
}
