//! nLoss interactive shell
//!
//! Reads commands from a script file or from standard input and runs them
//! against a bank of sixteen image slots. Logging goes to stderr and is
//! controlled with `NLOSS_LOG` (for example `NLOSS_LOG=nloss=debug`).

mod repl;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use nloss::ImageBank;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::repl::Outcome;

const LOG_ENV: &str = "NLOSS_LOG";
const PROMPT: &str = "nloss> ";

#[derive(Parser, Debug)]
#[command(name = "nloss")]
#[command(about = "Apply blockwise transforms to 24-bit BMP images", long_about = None)]
#[command(version)]
struct Args {
    /// File of commands to run, one per line, instead of reading stdin
    script: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Run one line, printing its result; returns false when the session ends
fn run_line(bank: &mut ImageBank, line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return true;
    }

    let parsed = match repl::parse(line) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(%line, "unparsable command");
            eprintln!("Error: {}", err.to_string().trim_end());
            eprintln!("Type 'help' for available commands.");
            return true;
        }
    };

    match repl::execute(bank, parsed) {
        Ok(Outcome::Message(message)) => {
            println!("{}", message);
            true
        }
        Ok(Outcome::Exit) => false,
        Err(err) => {
            eprintln!("Error: {}", err);
            true
        }
    }
}

fn run_script(bank: &mut ImageBank, path: &Path) -> Result<()> {
    let script = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    for (number, line) in script.lines().enumerate() {
        debug!(line = number + 1, "script");
        if !run_line(bank, line) {
            break;
        }
    }
    Ok(())
}

fn run_interactive(bank: &mut ImageBank) -> Result<()> {
    println!("nLoss started. Type 'help' for available commands.");
    println!("Supported format: 24-bit uncompressed BMP files");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = String::new();
    loop {
        print!("{}", PROMPT);
        stdout.flush().context("Failed to flush stdout")?;

        input.clear();
        let read = stdin
            .lock()
            .read_line(&mut input)
            .context("Failed to read from stdin")?;
        if read == 0 {
            println!();
            break;
        }
        if !run_line(bank, &input) {
            break;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut bank = ImageBank::new();

    match &args.script {
        Some(path) => run_script(&mut bank, path)?,
        None => run_interactive(&mut bank)?,
    }

    debug!(loaded = bank.loaded_count(), "session ended");
    println!("Goodbye!");
    Ok(())
}
