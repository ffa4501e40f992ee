//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// datefix - rewrite fixture date blocks to their offset-aware form
#[derive(Parser, Debug)]
#[command(name = "datefix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rewrite fixture blocks from one file into another
    ///
    /// Finds `&[ ymd_hms(...), ... ]` blocks in INPUT, substitutes the
    /// from-token inside each block, and writes the result to OUTPUT.
    ///
    /// Examples:
    ///   datefix rewrite rrule.rs new.rs
    ///   datefix rewrite rrule.rs new.rs --dry-run
    ///   datefix rewrite old.rs new.rs --from mk_date --to mk_date_utc
    Rewrite {
        /// Source file to read
        input: PathBuf,

        /// Destination file to create or overwrite
        output: PathBuf,

        /// Token to search for inside blocks (defaults to config, then ymd_hms)
        #[arg(long)]
        from: Option<String>,

        /// Replacement token (defaults to config, then ymd_hmso)
        #[arg(long)]
        to: Option<String>,

        /// Preview the diff without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Output a machine-readable report
        #[arg(long)]
        json: bool,
    },

    /// List fixture blocks found in a file without writing anything
    Scan {
        /// Source file to read
        input: PathBuf,

        /// Token to search for inside blocks
        #[arg(long)]
        from: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
