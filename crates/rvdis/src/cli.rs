//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rvdis::{DEFAULT_MAX_BYTES, DisasmOptions, InputSource};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "rvdis")]
#[command(about = "RISC-V disassembler - prints one line per instruction")]
#[command(version)]
pub struct Cli {
    /// Input file with raw instruction bytes ("-" or absent = stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Maximum number of bytes to read (0 = whole input)
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES)]
    pub max_bytes: usize,

    /// When to color diagnostics
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorArg,

    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress log output (only show errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub silent: bool,
}

/// Color mode for diagnostics.
#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum ColorArg {
    /// Color when stderr is a terminal (default)
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl Cli {
    /// Default tracing directive for the chosen verbosity.
    pub const fn log_directive(&self) -> &'static str {
        if self.verbose {
            "rvdis=debug"
        } else if self.silent {
            "rvdis=error"
        } else {
            "rvdis=warn"
        }
    }

    /// Build disassembly options from arguments.
    pub fn options(&self) -> DisasmOptions {
        let color = match self.color {
            ColorArg::Auto => rvdis::terminal::stderr_supports_color(),
            ColorArg::Always => true,
            ColorArg::Never => false,
        };
        DisasmOptions::new()
            .with_input(InputSource::from_arg(self.input.as_deref()))
            .with_max_bytes(self.max_bytes)
            .with_color(color)
    }
}
