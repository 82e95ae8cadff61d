//! Rule document discovery under an explicit rules root.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One rule file found under the rules root, ready for validation.
#[derive(Debug, Clone)]
pub struct RuleSource {
    /// Path relative to the rules root, with `/` separators.
    pub identifier: String,
    /// Unparsed file contents.
    pub text: String,
}

/// Enumerate every rule document under `root` with the given extension.
///
/// The root is always an explicit argument; discovery never falls back to
/// the process working directory. Results are sorted by identifier so
/// discovery order is deterministic regardless of directory iteration
/// order.
pub fn discover(root: &Path, extension: &str) -> Result<Vec<RuleSource>> {
    if !root.is_dir() {
        bail!("Rules root is not a directory: {}", root.display());
    }

    let mut paths = Vec::new();
    collect_rule_files(root, extension, &mut paths)
        .with_context(|| format!("Failed to scan rules root: {}", root.display()))?;

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read rule file: {}", path.display()))?;
        sources.push(RuleSource {
            identifier: relative_identifier(&path, root),
            text,
        });
    }
    sources.sort_by(|a, b| a.identifier.cmp(&b.identifier));

    debug!(count = sources.len(), root = %root.display(), "discovered rule documents");
    Ok(sources)
}

fn collect_rule_files(dir: &Path, extension: &str, paths: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rule_files(&path, extension, paths)?;
        } else if path.extension().is_some_and(|e| e == extension) {
            paths.push(path);
        }
    }

    Ok(())
}

/// Join the path's components relative to `root` with `/`, so identifiers
/// match across platforms.
fn relative_identifier(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
