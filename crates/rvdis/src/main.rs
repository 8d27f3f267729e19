//! rvdis CLI - RISC-V disassembler

mod cli;

use std::io::{self, BufWriter};

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, EXIT_FAILURE, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    // Logs share stderr with diagnostics; stdout carries only the listing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let options = cli.options();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut diag = io::stderr().lock();

    let exit_code = match rvdis::run(&options, &mut out, &mut diag) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            error!(error = %e, "disassembly failed");
            EXIT_FAILURE
        }
    };

    drop(out);
    std::process::exit(exit_code);
}
