//! datefix CLI
//!
//! Rewrites `&[ ymd_hms(...), ... ]` fixture blocks in a source file to the
//! offset-aware `ymd_hmso` form and writes the result to a new file.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} fixture block rewriter", "datefix".green().bold());
            println!();
            println!("Run {} for available commands.", "datefix --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Rewrite {
            input,
            output,
            from,
            to,
            dry_run,
            json,
        } => {
            let cwd = std::env::current_dir()?;
            commands::run_rewrite(&cwd, &input, &output, from, to, dry_run, json)
        }
        Commands::Scan { input, from, json } => {
            let cwd = std::env::current_dir()?;
            commands::run_scan(&cwd, &input, from, json)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "datefix", &mut std::io::stdout());
            Ok(())
        }
    }
}
