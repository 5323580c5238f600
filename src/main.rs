//! Asteroid Robots entry point
//!
//! Validates the instructions file, runs the mission and prints each retired
//! robot's report to stdout. Logs go to stderr (`RUST_LOG` controls the filter).

use std::io;
use std::path::PathBuf;

use clap::Parser;

use asteroid_robots::input::open_instructions;
use asteroid_robots::{Boundary, Redeclaration, Result, Settings, WriterSink, run};

#[derive(Parser, Debug)]
#[command(name = "asteroid-robots")]
#[command(about = "Drive robots across an asteroid from a file of JSON-line instructions")]
struct Cli {
    /// Path to the instructions file
    instructions: PathBuf,

    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Reject instruction lines longer than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_line_length: Option<usize>,

    /// Grid boundary: "origin" ([0, size]) or "symmetric" ([-size, size])
    #[arg(long, value_parser = parse_boundary)]
    boundary: Option<Boundary>,

    /// Fail if the asteroid is declared more than once
    #[arg(long)]
    reject_redeclaration: bool,
}

fn parse_boundary(s: &str) -> std::result::Result<Boundary, String> {
    Boundary::from_str(s).ok_or_else(|| format!("unknown boundary '{s}'"))
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(limit) = self.max_line_length {
            settings = settings.with_max_line_length(limit);
        }
        if let Some(boundary) = self.boundary {
            settings = settings.with_boundary(boundary);
        }
        if self.reject_redeclaration {
            settings = settings.with_redeclaration(Redeclaration::Reject);
        }
        Ok(settings)
    }
}

fn execute(cli: &Cli) -> Result<usize> {
    let settings = cli.settings()?;
    log::debug!("Settings: {settings:?}");

    let lines = open_instructions(&cli.instructions, settings.max_line_length)?;
    let mut sink = WriterSink::new(io::stdout().lock());
    run(lines, &settings, &mut sink)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::info!("Processing instructions from {}", cli.instructions.display());

    match execute(&cli) {
        Ok(robots) => log::info!("Mission complete, {robots} robot(s) reported"),
        Err(e) => {
            log::error!("Mission aborted: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
