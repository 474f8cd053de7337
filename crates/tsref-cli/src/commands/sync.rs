//! Check and write command implementations

use colored::Colorize;

use tsref_core::{RunReport, SyncEngine, SyncMode, SyncOutcome};
use tsref_fs::NormalizedPath;
use tsref_workspace::{YarnLister, find_workspace_root};

use crate::error::Result;

/// Run the check command
///
/// Exits 1 when any tsconfig (root included) is out of sync; nothing is
/// written either way.
pub async fn run_check(list_command: Option<&str>) -> Result<()> {
    println!("{} Checking project references...", "=>".blue().bold());

    let (root, report) = run_engine(SyncMode::Check, list_command).await?;

    if report.is_clean() {
        println!(
            "{} Project references are in sync.",
            "OK".green().bold()
        );
        return Ok(());
    }

    println!(
        "{} Project references have drifted:",
        "DRIFTED".red().bold()
    );
    for outcome in report.drifted() {
        println!(
            "   {} {} ({})",
            "!".red(),
            display_path(outcome, &root).cyan(),
            outcome.label.dimmed()
        );
    }
    eprintln!(
        "Project references are out of sync. Run {} to update them.",
        "tsref write".cyan()
    );
    std::process::exit(1);
}

/// Run the write command
///
/// Always exits 0; reports whether anything had to be rewritten.
pub async fn run_write(list_command: Option<&str>) -> Result<()> {
    println!(
        "{} Synchronizing project references...",
        "=>".blue().bold()
    );

    let (root, report) = run_engine(SyncMode::Write, list_command).await?;

    if report.wrote_any() {
        for outcome in report.drifted() {
            println!("   {} {}", "+".green(), display_path(outcome, &root).cyan());
        }
        println!(
            "{} Project references were synced.",
            "OK".green().bold()
        );
    } else {
        println!(
            "{} Project references already in sync.",
            "OK".green().bold()
        );
    }

    Ok(())
}

/// Discover the root, build the lister, and run the engine once.
async fn run_engine(
    mode: SyncMode,
    list_command: Option<&str>,
) -> Result<(NormalizedPath, RunReport)> {
    let cwd = std::env::current_dir()?;
    let root = find_workspace_root(&cwd)?;

    let lister = match list_command {
        Some(command) => YarnLister::with_command(command),
        None => YarnLister::new(),
    };

    let report = SyncEngine::new(root.clone(), mode).run(&lister).await?;
    Ok((root, report))
}

/// Show a tsconfig path relative to the workspace root where possible.
fn display_path(outcome: &SyncOutcome, root: &NormalizedPath) -> String {
    outcome
        .file
        .relative_from(root)
        .unwrap_or_else(|| outcome.file.clone())
        .as_str()
        .to_string()
}
