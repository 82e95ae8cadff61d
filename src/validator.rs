//! Two-pass validation driver.
//!
//! Pass one registers every document identifier; pass two runs the
//! per-document checks. References are only resolved behind that barrier,
//! so forward references never register as dangling and the result is
//! independent of discovery order.

use anyhow::Result;
use std::collections::BTreeSet;
use tracing::debug;

use crate::config::Config;
use crate::discover::RuleSource;
use crate::document::{Document, ParseError};
use crate::references::{resolve, ReferenceScanner};
use crate::report::{Diagnostic, DiagnosticKind, DocumentReport, RunReport};
use crate::schema::check_header;

/// Validate a full document set against the configured schema.
///
/// The known-identifier set is derived from `sources` itself. Use
/// [`validate_with_known`] when references may legitimately point at
/// documents outside the validated subset.
pub fn validate(sources: &[RuleSource], config: &Config) -> Result<RunReport> {
    validate_with_known(sources, config, &BTreeSet::new())
}

/// Validate with extra identifiers pre-registered as resolvable.
///
/// Diagnostics are collected per document and never abort the run: one
/// malformed document must not block validation of the rest.
pub fn validate_with_known(
    sources: &[RuleSource],
    config: &Config,
    extra_known: &BTreeSet<String>,
) -> Result<RunReport> {
    let scanner = ReferenceScanner::new(config)?;

    // Every discovered identifier is resolvable, including documents that
    // fail to parse below: the file exists, so a reference to it is not
    // dangling.
    let mut known = extra_known.clone();
    known.extend(sources.iter().map(|s| s.identifier.clone()));

    let mut report = RunReport::default();
    for source in sources {
        let diagnostics = match Document::parse(&source.identifier, &source.text, &config.delimiter)
        {
            Ok(document) => check_document(&document, config, &scanner, &known),
            // Parsing stops here: no downstream checks against unparsed
            // content.
            Err(error) => vec![parse_diagnostic(&source.identifier, &error)],
        };
        report.push(DocumentReport {
            identifier: source.identifier.clone(),
            diagnostics,
        });
    }

    debug!(
        documents = report.documents.len(),
        failed = report.failed_count(),
        "validation finished"
    );
    Ok(report)
}

fn check_document(
    document: &Document,
    config: &Config,
    scanner: &ReferenceScanner,
    known: &BTreeSet<String>,
) -> Vec<Diagnostic> {
    let mut diagnostics = check_header(document, config);

    if !document.has_headings() {
        diagnostics.push(Diagnostic {
            document: document.identifier.clone(),
            kind: DiagnosticKind::EmptyBodyContent,
            message: "Body contains no section headings".to_string(),
        });
    }

    let references = scanner.scan(document);
    diagnostics.extend(resolve(&references, known));
    diagnostics
}

fn parse_diagnostic(identifier: &str, error: &ParseError) -> Diagnostic {
    let kind = match error {
        ParseError::MissingHeaderBlock(_) => DiagnosticKind::MissingHeaderBlock,
        ParseError::UnterminatedHeaderBlock(_) => DiagnosticKind::UnterminatedHeaderBlock,
    };
    Diagnostic {
        document: identifier.to_string(),
        kind,
        message: error.to_string(),
    }
}
