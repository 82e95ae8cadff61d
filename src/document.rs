//! Rule document model and header/body parser.
//!
//! A rule document is a text file that opens with a delimiter line, carries
//! `Key: value` header fields up to a second delimiter line, and ends with a
//! free-form guidance body.

use std::collections::HashMap;
use thiserror::Error;

/// Structural parse failure for a single document.
///
/// Both variants are per-document: the caller records them and continues
/// with the rest of the document set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Document does not start with a '{0}' header delimiter")]
    MissingHeaderBlock(String),

    #[error("Header block is not closed with a second '{0}' delimiter")]
    UnterminatedHeaderBlock(String),
}

/// One parsed rule document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Unique name, derived from the path relative to the rules root.
    pub identifier: String,
    /// Header fields. Insertion order is irrelevant.
    pub header: HashMap<String, String>,
    /// Everything after the closing header delimiter.
    pub body: String,
    /// 1-based line number of the first body line in the source file.
    pub body_start_line: usize,
}

impl Document {
    /// Parse raw rule-file text into a document.
    ///
    /// The header block must be delimited by `delimiter` lines at both ends.
    /// Header lines of the form `Key: value` populate the header map (split
    /// on the first `:`, both sides trimmed); other header lines are skipped.
    /// Headers are hand-authored, so parsing is deliberately tolerant.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingHeaderBlock`] if the text does not start
    /// with the delimiter, and [`ParseError::UnterminatedHeaderBlock`] if no
    /// closing delimiter follows.
    pub fn parse(identifier: &str, text: &str, delimiter: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = text.lines().collect();

        if lines.is_empty() || lines[0].trim() != delimiter {
            return Err(ParseError::MissingHeaderBlock(delimiter.to_string()));
        }

        let end_idx = lines
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, line)| line.trim() == delimiter)
            .map(|(idx, _)| idx)
            .ok_or_else(|| ParseError::UnterminatedHeaderBlock(delimiter.to_string()))?;

        let mut header = HashMap::new();
        for line in &lines[1..end_idx] {
            if let Some((key, value)) = line.split_once(':') {
                header.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Ok(Self {
            identifier: identifier.to_string(),
            header,
            body: lines[end_idx + 1..].join("\n"),
            body_start_line: end_idx + 2,
        })
    }

    /// Whether the body contains at least one line-leading `#` heading.
    ///
    /// A body without headings is a header-only rule file with no actual
    /// guidance in it.
    pub fn has_headings(&self) -> bool {
        self.body.lines().any(|line| line.starts_with('#'))
    }
}
