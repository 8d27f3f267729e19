//! RISC-V instruction decoder and disassembly renderer.
//!
//! Classifies each instruction by length, extracts its fields, and renders
//! mnemonic and operands using ABI register names and CSR names. Only a
//! small subset of RV32I, RVC and the SYSTEM opcode is recognized; every
//! other encoding renders as a bare hex dump.
//!
//! # Example
//!
//! ```
//! let listing = rvdis_isa::disassemble(&[0x13, 0x05, 0x50, 0x00]);
//! assert_eq!(listing.to_text_lines(), ["00500513  addi a0, zero, 5"]);
//! ```

mod csr;
mod decode;
mod encode;
mod error;
pub mod extensions;
mod listing;
mod types;

pub use csr::*;
pub use decode::*;
pub use encode::*;
pub use error::DecodeError;
pub use extensions::*;
pub use listing::*;
pub use types::*;
