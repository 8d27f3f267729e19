//! Decoded instruction representation.

use crate::{InstrSize, OpId};

/// Decoded instruction with all fields extracted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedInstr {
    /// Instruction identifier.
    pub opid: OpId,
    /// Byte offset of the instruction in the input buffer.
    pub offset: usize,
    /// Encoded size.
    pub size: InstrSize,
    /// Raw instruction word (upper half is zero for compressed).
    pub raw: u32,
    /// Instruction arguments.
    pub args: InstrArgs,
}

/// Instruction argument patterns, one per encoding format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstrArgs {
    /// R-type: rd, rs1, rs2
    R { rd: u8, rs1: u8, rs2: u8 },
    /// I-type: rd, rs1, imm
    I { rd: u8, rs1: u8, imm: i32 },
    /// S-type: rs1, rs2, imm
    S { rs1: u8, rs2: u8, imm: i32 },
    /// B-type: rs1, rs2, imm
    B { rs1: u8, rs2: u8, imm: i32 },
    /// U-type: rd, imm (the 20-bit upper field, sign-extended, not shifted)
    U { rd: u8, imm: i32 },
    /// J-type: rd, imm
    J { rd: u8, imm: i32 },
    /// CSR: rd, rs1, csr
    Csr { rd: u8, rs1: u8, csr: u16 },
    /// No arguments (ECALL, WFI)
    None,
}

impl DecodedInstr {
    #[must_use]
    pub const fn new(opid: OpId, offset: usize, size: InstrSize, raw: u32, args: InstrArgs) -> Self {
        Self {
            opid,
            offset,
            size,
            raw,
            args,
        }
    }

    /// Whether this is a 16-bit compressed instruction.
    #[must_use]
    pub const fn is_compressed(&self) -> bool {
        matches!(self.size, InstrSize::Compressed)
    }
}
