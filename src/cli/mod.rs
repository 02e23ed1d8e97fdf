//! Command-line surface
//!
//! The generated artifact is fixed at the source level; the only flags
//! control logging output.

pub mod generate;

use clap::Parser;

/// Process exit codes
pub mod exit_codes {
    /// Run completed, including a reported packaging failure
    pub const SUCCESS: i32 = 0;
    /// A render, encode, or copy step failed
    pub const RENDER_FAILURE: i32 = 1;
    /// Startup failure outside the generation flow
    pub const UNEXPECTED_FAILURE: i32 = 2;
}

#[derive(Debug, Parser)]
#[command(name = "termicon", version, about = "Generate the Term.app .icns icon")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}
