//! Rewrite command implementation
//!
//! The read -> match/transform -> write pipeline behind `datefix rewrite`.

use std::path::Path;

use colored::Colorize;
use serde_json::json;
use tracing::debug;

use datefix_content::{BlockScanner, RewriteOutcome, diff};
use datefix_fs::{NormalizedPath, checksum, io};

use super::resolve_tokens;
use crate::error::Result;

/// Run the rewrite command
///
/// Reads INPUT whole, rewrites every matched block, and writes the result
/// to OUTPUT. With `--dry-run` a diff is printed and nothing is written.
pub fn run_rewrite(
    cwd: &Path,
    input: &Path,
    output: &Path,
    from: Option<String>,
    to: Option<String>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let tokens = resolve_tokens(cwd, from, to)?;
    let scanner = BlockScanner::new(tokens)?;

    let input_path = NormalizedPath::new(input);
    let output_path = NormalizedPath::new(output);

    let source = io::read_text(&input_path)?;
    let outcome = scanner.rewrite(&source);
    debug!(
        blocks = outcome.edits.len(),
        substitutions = outcome.substitutions,
        "rewrite pass complete"
    );

    if dry_run {
        return print_dry_run(&source, &outcome, &input_path, &output_path, json);
    }

    io::write_text(&output_path, &outcome.output)?;

    if json {
        let report = json!({
            "input": input_path.as_str(),
            "output": output_path.as_str(),
            "blocks": outcome.edits.len(),
            "substitutions": outcome.substitutions,
            "changed": outcome.changed(),
            "similarity": diff::similarity(&source, &outcome.output),
            "checksum": checksum::file_checksum(&output_path)?,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} Wrote {} ({} block(s) rewritten, {} substitution(s))",
            "OK".green().bold(),
            output_path.as_str().yellow(),
            outcome.edits.len(),
            outcome.substitutions
        );
    }

    Ok(())
}

/// Print what the rewrite would change, without writing anything
fn print_dry_run(
    source: &str,
    outcome: &RewriteOutcome,
    input_path: &NormalizedPath,
    output_path: &NormalizedPath,
    json: bool,
) -> Result<()> {
    if json {
        let report = json!({
            "input": input_path.as_str(),
            "output": output_path.as_str(),
            "blocks": outcome.edits.len(),
            "substitutions": outcome.substitutions,
            "changed": outcome.changed(),
            "diff": diff::unified_diff(
                source,
                &outcome.output,
                input_path.as_str(),
                output_path.as_str(),
            ),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !outcome.changed() {
        println!(
            "{} No blocks to rewrite. Output would equal input.",
            "OK".green().bold()
        );
        return Ok(());
    }

    println!(
        "{} {} block(s), {} substitution(s) would be rewritten:",
        "Diff".blue().bold(),
        outcome.edits.len(),
        outcome.substitutions
    );
    println!();

    let rendered = diff::unified_diff(
        source,
        &outcome.output,
        input_path.as_str(),
        output_path.as_str(),
    );
    for line in rendered.lines() {
        if line.starts_with('+') && !line.starts_with("+++") {
            println!("  {}", line.green());
        } else if line.starts_with('-') && !line.starts_with("---") {
            println!("  {}", line.red());
        } else {
            println!("  {}", line.normal());
        }
    }
    Ok(())
}
