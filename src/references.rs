//! Reference token extraction and resolution against the known document set.
//!
//! A reference token is the configured sigil immediately followed by an
//! identifier-shaped word ending in the rule-file extension, e.g.
//! `@python/style.mdc`. Resolution requires the complete identifier set for
//! the run, so it only happens after every document has been registered.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeSet;

use crate::config::Config;
use crate::document::Document;
use crate::report::{Diagnostic, DiagnosticKind};

/// An in-body occurrence of a token naming another rule document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Identifier of the document the token appears in.
    pub source: String,
    /// Identifier the token points at, sigil stripped.
    pub target: String,
    /// 1-based line number in the source file.
    pub line: usize,
}

/// Compiled matcher for the configured reference token shape.
pub struct ReferenceScanner {
    pattern: Regex,
}

impl ReferenceScanner {
    /// # Errors
    ///
    /// Fails only if the configured sigil/extension produce an invalid
    /// pattern, which a well-formed config cannot.
    pub fn new(config: &Config) -> Result<Self> {
        let pattern = format!(
            r"{}([A-Za-z0-9_][A-Za-z0-9_./-]*\.{})",
            regex::escape(&config.sigil),
            regex::escape(&config.extension)
        );
        let pattern = Regex::new(&pattern)
            .with_context(|| format!("Invalid reference token pattern: {pattern}"))?;
        Ok(Self { pattern })
    }

    /// Extract every reference token from the document body.
    ///
    /// One left-to-right scan per line; overlapping or malformed tokens
    /// simply do not match.
    pub fn scan(&self, doc: &Document) -> Vec<Reference> {
        let mut references = Vec::new();
        for (offset, line) in doc.body.lines().enumerate() {
            for capture in self.pattern.captures_iter(line) {
                references.push(Reference {
                    source: doc.identifier.clone(),
                    target: capture[1].to_string(),
                    line: doc.body_start_line + offset,
                });
            }
        }
        references
    }
}

/// Flag every reference whose target is not in the known identifier set.
pub fn resolve(references: &[Reference], known: &BTreeSet<String>) -> Vec<Diagnostic> {
    references
        .iter()
        .filter(|r| !known.contains(&r.target))
        .map(|r| Diagnostic {
            document: r.source.clone(),
            kind: DiagnosticKind::DanglingReference,
            message: format!("Reference to unknown rule '{}' (line {})", r.target, r.line),
        })
        .collect()
}
