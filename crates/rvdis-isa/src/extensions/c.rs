//! C extension (compressed instructions) - decode, disasm.
//!
//! Only a few quadrant 1 and 2 encodings are recognized.

use super::InstructionExtension;
use crate::{
    DecodedInstr, EXT_C, InstrArgs, OpId, decode_c_bit12, decode_c_funct3, decode_c_op,
    decode_c_rd, decode_c_rs2, decode_ci_imm, decode_ci_uimm, reg_name,
};

// Quadrant 1
pub const OP_C_ADDI: OpId = OpId::new(EXT_C, 0);
pub const OP_C_LI: OpId = OpId::new(EXT_C, 1);

// Quadrant 2
pub const OP_C_MV: OpId = OpId::new(EXT_C, 2);

/// Get the mnemonic for a C extension instruction.
#[must_use]
pub const fn c_mnemonic(opid: OpId) -> &'static str {
    match opid.idx {
        0 => "c.addi",
        1 => "c.li",
        2 => "c.mv",
        _ => "???",
    }
}

/// C extension (compressed instructions).
pub struct CExtension;

impl InstructionExtension for CExtension {
    fn name(&self) -> &'static str {
        "C"
    }

    fn ext_id(&self) -> u8 {
        EXT_C
    }

    fn decode16(&self, raw: u16) -> Option<(OpId, InstrArgs)> {
        let funct3 = decode_c_funct3(raw);
        match decode_c_op(raw) {
            0b01 => decode_q1(raw, funct3),
            0b10 => decode_q2(raw, funct3),
            _ => None,
        }
    }

    fn disasm(&self, instr: &DecodedInstr) -> String {
        format_c_instr(c_mnemonic(instr.opid), &instr.args, instr.opid)
    }
}

const fn decode_q1(instr: u16, funct3: u8) -> Option<(OpId, InstrArgs)> {
    let rd = decode_c_rd(instr);
    match funct3 {
        0b000 => Some((
            OP_C_ADDI,
            InstrArgs::I {
                rd,
                rs1: rd,
                imm: decode_ci_imm(instr),
            },
        )),
        // c.li keeps the 6-bit immediate unsigned
        0b010 if rd != 0 => Some((
            OP_C_LI,
            InstrArgs::I {
                rd,
                rs1: 0,
                imm: decode_ci_uimm(instr).cast_signed(),
            },
        )),
        _ => None,
    }
}

const fn decode_q2(instr: u16, funct3: u8) -> Option<(OpId, InstrArgs)> {
    let rd = decode_c_rd(instr);
    let rs2 = decode_c_rs2(instr);
    match funct3 {
        0b100 if rd != 0 && rs2 != 0 && decode_c_bit12(instr) == 0 => {
            Some((OP_C_MV, InstrArgs::R { rd, rs1: 0, rs2 }))
        }
        _ => None,
    }
}

fn format_c_instr(mnemonic: &str, args: &InstrArgs, opid: OpId) -> String {
    // c.addi operands are not rendered
    if opid == OP_C_ADDI {
        return format!("{mnemonic} ...");
    }
    match args {
        InstrArgs::R { rd, rs1: _, rs2 } => {
            format!("{} {}, {}", mnemonic, reg_name(*rd), reg_name(*rs2))
        }
        InstrArgs::I { rd, rs1: _, imm } => {
            format!("{} {}, {}", mnemonic, reg_name(*rd), imm)
        }
        InstrArgs::None => mnemonic.to_string(),
        _ => format!("{mnemonic} <?>"),
    }
}
