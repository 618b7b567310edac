//! Main entry point for the diskrank CLI app

use diskrank::cli::{self, Mode};
use diskrank::scan::SelectionMode;
use diskrank::{rank, report, scan};
use std::time::Instant;

fn main() -> std::process::ExitCode {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::run()?;

    let interactive = args.path.is_none();
    let (root, mode) = match (args.path, args.mode) {
        (Some(path), mode) => (path, SelectionMode::from(mode.unwrap_or(Mode::Both))),
        (None, Some(mode)) => (cli::prompt_path()?, SelectionMode::from(mode)),
        (None, None) => (cli::prompt_path()?, cli::prompt_mode()?),
    };

    println!("Scanning the path {}, this may take a while...", root.display());

    let started = Instant::now();
    let outcome = scan::scan(&root, mode);

    for path in &outcome.skipped {
        eprintln!("[scan] skipped unreadable path: {}", path.display());
    }

    println!("Total objects found: {}", outcome.entries.len());

    let ranked = rank::top(rank::rank(outcome.entries), args.top);
    println!("\nTop {} largest objects:", ranked.len());
    for line in report::render_table(&ranked, report::terminal_width()) {
        println!("{}", line);
    }

    println!(
        "\nScan completed in {:.3} seconds.",
        started.elapsed().as_secs_f64()
    );

    if interactive {
        cli::pause_for_enter()?;
    }
    Ok(())
}
