//! `rulecheck list` - enumerate rule documents under a rules root.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::discover::discover;
use crate::document::Document;

use super::check::load_config;

/// List every discovered rule document with its description, when the
/// header is parseable.
pub fn execute(root: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let sources = discover(root, &config.extension)?;

    if sources.is_empty() {
        println!(
            "{} No rule documents found under {}",
            "ℹ".blue(),
            root.display()
        );
        return Ok(());
    }

    for source in &sources {
        let description = Document::parse(&source.identifier, &source.text, &config.delimiter)
            .ok()
            .and_then(|doc| doc.header.get(&config.description_key).cloned());

        match description {
            Some(description) if !description.is_empty() => {
                println!("{}  {}", source.identifier.cyan(), description.dimmed());
            }
            _ => println!("{}", source.identifier.cyan()),
        }
    }

    println!();
    println!("{} document(s)", sources.len());

    Ok(())
}
