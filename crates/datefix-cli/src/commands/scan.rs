//! Scan command implementation
//!
//! Read-only listing of the blocks a rewrite would touch.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use datefix_content::BlockScanner;
use datefix_fs::{NormalizedPath, checksum, io};

use super::resolve_tokens;
use crate::error::Result;

/// Run the scan command
pub fn run_scan(cwd: &Path, input: &Path, from: Option<String>, json: bool) -> Result<()> {
    let tokens = resolve_tokens(cwd, from, None)?;
    let from_token = tokens.from.clone();
    let scanner = BlockScanner::new(tokens)?;

    let input_path = NormalizedPath::new(input);
    let source = io::read_text(&input_path)?;
    let blocks = scanner.find_blocks(&source);

    if json {
        let report = json!({
            "input": input_path.as_str(),
            "checksum": checksum::content_checksum(&source),
            "blocks": blocks
                .iter()
                .map(|b| {
                    json!({
                        "start": b.span.start,
                        "end": b.span.end,
                        "occurrences": b.occurrences(&from_token),
                    })
                })
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if blocks.is_empty() {
        println!(
            "{} No matching blocks in {}",
            "OK".green().bold(),
            input_path.as_str().yellow()
        );
        return Ok(());
    }

    println!(
        "{} {} block(s) in {}",
        "Scan".blue().bold(),
        blocks.len(),
        input_path.as_str().yellow()
    );
    for block in &blocks {
        println!(
            "   {} bytes {}..{} ({} {} call(s))",
            "-".cyan(),
            block.span.start,
            block.span.end,
            block.occurrences(&from_token),
            from_token.as_str().cyan()
        );
    }
    Ok(())
}
