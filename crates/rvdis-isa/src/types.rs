//! Core types for the RISC-V decoder.

use std::fmt::{self, Display};

/// Compact instruction identifier (2 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct OpId {
    /// Extension (`EXT_I`, `EXT_C`, ...)
    pub ext: u8,
    /// Index within extension
    pub idx: u8,
}

impl OpId {
    #[must_use]
    pub const fn new(ext: u8, idx: u8) -> Self {
        Self { ext, idx }
    }
}

impl Display for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpId({}, {})", self.ext, self.idx)
    }
}

// Extension constants
pub const EXT_I: u8 = 0;
pub const EXT_C: u8 = 3;
pub const EXT_SYSTEM: u8 = 4;
/// First extension ID available to out-of-tree extensions.
pub const EXT_CUSTOM: u8 = 128;

/// Number of integer registers.
pub const NUM_REGS_I: usize = 32;

/// Register ABI names, indexed by register number.
pub const REG_NAMES: [&str; NUM_REGS_I] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", //
    "s0", "s1", "a0", "a1", "a2", "a3", "a4", "a5", //
    "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", //
    "s8", "s9", "s10", "s11", "t3", "t4", "t5", "t6",
];

/// Get register ABI name.
///
/// Register fields are 5 bits wide, so only the low 5 bits of `reg` are used.
#[must_use]
pub const fn reg_name(reg: u8) -> &'static str {
    REG_NAMES[(reg & 0x1F) as usize]
}

/// Encoded instruction size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstrSize {
    /// 16-bit compressed encoding.
    Compressed,
    /// 32-bit standard encoding.
    Standard,
}

impl InstrSize {
    /// Size in bytes.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Compressed => 2,
            Self::Standard => 4,
        }
    }
}

/// Classify an instruction by its first byte.
///
/// Returns `None` for encodings of 48 bits or more, which are not supported.
#[must_use]
pub const fn classify(first_byte: u8) -> Option<InstrSize> {
    if first_byte & 0b11 != 0b11 {
        Some(InstrSize::Compressed)
    } else if first_byte & 0b1_1100 != 0b1_1100 {
        Some(InstrSize::Standard)
    } else {
        None
    }
}
