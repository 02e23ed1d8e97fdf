//! termicon - generates the Term.app application icon
//!
//! Rasterizes the terminal-prompt artwork at every macOS icon resolution,
//! assembles a `.iconset` directory (including the `@2x` density variants),
//! and runs `iconutil` once to fold it into a `.icns` bundle.

mod cli;
mod icon;
mod iconset;
mod logging;
mod packager;

use clap::Parser;
use cli::{exit_codes, Cli};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_logs) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    match cli::generate::run() {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_codes::RENDER_FAILURE
        }
    }
}
