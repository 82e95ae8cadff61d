//! Diagnostics and the per-run report consumed by the CLI and CI callers.

use serde::Serialize;

/// Classification of a single validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    MissingHeaderBlock,
    UnterminatedHeaderBlock,
    MissingRequiredKey,
    EmptyRequiredValue,
    DanglingReference,
    EmptyBodyContent,
}

/// One validation failure, attributed to a document.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Identifier of the document the finding belongs to.
    pub document: String,
    pub kind: DiagnosticKind,
    /// Human-readable description of the finding.
    pub message: String,
}

/// Validation outcome for one document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub identifier: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl DocumentReport {
    /// A document is valid iff it produced zero diagnostics.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Aggregate result of validating a full document set in one invocation.
///
/// Documents appear in the order they were discovered. Created fresh per
/// run, never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub documents: Vec<DocumentReport>,
}

impl RunReport {
    pub fn push(&mut self, report: DocumentReport) {
        self.documents.push(report);
    }

    pub fn passed_count(&self) -> usize {
        self.documents.iter().filter(|d| d.is_valid()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.documents.len() - self.passed_count()
    }

    /// Overall status: success iff every document is valid.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// All diagnostics across all documents, in report order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.documents.iter().flat_map(|d| d.diagnostics.iter())
    }

    /// One-line summary for the end of the text output.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed ({} checked)",
            self.passed_count(),
            self.failed_count(),
            self.documents.len()
        )
    }
}
