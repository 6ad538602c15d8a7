//! Arbor REPL Binary
//!
//! Interactive shell over an in-memory filesystem namespace. One command
//! per line; `exit` terminates the process with success.

use anyhow::Context;
use arbor::config::Config;
use arbor::logging;
use arbor::shell::{self, Outcome, ParsedLine};
use arbor::tree::Namespace;
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

/// Arbor - an in-memory filesystem shell
#[derive(Parser)]
#[command(name = "arbor")]
#[command(about = "In-memory hierarchical filesystem with an interactive shell")]
struct Cli {
    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    log_format: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    logging::init_logging(&config.logging).context("initializing logging")?;

    let color = io::stdout().is_terminal();
    let mut namespace = Namespace::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        stdout.write_all(config.prompt.as_bytes())?;
        stdout.flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like `exit`.
            break;
        }
        let command = match shell::parse_line(&line) {
            Ok(ParsedLine::Empty) => continue,
            Ok(ParsedLine::Command(command)) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match shell::execute(&mut namespace, command, color) {
            Ok(Outcome::Exit) => break,
            Ok(Outcome::Continue(text)) => {
                if !text.is_empty() {
                    println!("{text}");
                }
            }
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}
