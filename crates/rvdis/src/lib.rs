//! rvdis - RISC-V disassembler
//!
//! Reads raw RISC-V machine code and writes one listing line per
//! instruction. Diagnostics for unsupported instruction lengths go to a
//! separate stream.
//!
//! # Example
//!
//! ```
//! let mut out = Vec::new();
//! let mut diag = Vec::new();
//! let bytes = [0x73, 0x00, 0x50, 0x10];
//! rvdis::write_listing(&bytes, &mut out, &mut diag, false).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "10500073  wfi\n");
//! ```

mod error;
mod input;
mod options;
pub mod terminal;

use std::io::Write;

use tracing::{debug, info};

pub use error::{Error, Result};
pub use input::{read_capped, read_input};
pub use options::{DEFAULT_MAX_BYTES, DisasmOptions, InputSource};
pub use rvdis_isa::{
    CompositeDecoder, DecodeError, DecodedInstr, DisasmStats, Disassembler, InstrLine, Line,
    Listing, disassemble,
};

/// Decode `bytes`, writing listing lines to `out` and diagnostics to `diag`.
///
/// Lines before a truncated trailing instruction are written before the
/// error is returned.
///
/// # Errors
///
/// Returns [`Error::Decode`] on a truncated trailing instruction and
/// [`Error::Io`] if either stream fails.
pub fn write_listing<W: Write, E: Write>(
    bytes: &[u8],
    out: &mut W,
    diag: &mut E,
    color: bool,
) -> Result<DisasmStats> {
    let mut iter = Disassembler::new(bytes);
    for item in iter.by_ref() {
        match item? {
            Line::Instr(line) => writeln!(out, "{line}")?,
            line @ Line::BadLength { .. } => {
                writeln!(diag, "{}", terminal::diagnostic(&line.to_string(), color))?;
            }
        }
    }
    Ok(*iter.stats())
}

/// Read the configured input and write its listing.
///
/// # Errors
///
/// Returns an error if the input cannot be read, an output stream fails, or
/// the last instruction is truncated.
pub fn run<W: Write, E: Write>(
    options: &DisasmOptions,
    out: &mut W,
    diag: &mut E,
) -> Result<DisasmStats> {
    let bytes = read_input(&options.input, options.byte_limit())?;
    let result = write_listing(&bytes, out, diag, options.color);
    out.flush()?;
    diag.flush()?;
    let stats = result?;
    info!(
        bytes = bytes.len(),
        instructions = stats.instructions(),
        unrecognized = stats.unrecognized,
        bad_length = stats.bad_length,
        "disassembled"
    );
    debug!(?stats, "done");
    Ok(stats)
}
