//! Base integer instructions (RV32I subset) - decode, disasm.

use super::InstructionExtension;
use crate::{
    DecodedInstr, EXT_I, InstrArgs, OpId, decode_b_imm, decode_funct3, decode_i_imm, decode_j_imm,
    decode_opcode, decode_rd, decode_rs1, decode_rs2, decode_s_imm, decode_u_imm, reg_name,
};

pub const OP_LUI: OpId = OpId::new(EXT_I, 0);
pub const OP_JAL: OpId = OpId::new(EXT_I, 1);
pub const OP_BNE: OpId = OpId::new(EXT_I, 2);
pub const OP_BLT: OpId = OpId::new(EXT_I, 3);
pub const OP_LW: OpId = OpId::new(EXT_I, 4);
pub const OP_SW: OpId = OpId::new(EXT_I, 5);
pub const OP_ADDI: OpId = OpId::new(EXT_I, 6);
pub const OP_ECALL: OpId = OpId::new(EXT_I, 7);

/// Full encoding of `ecall`.
pub const ECALL: u32 = 0x0000_0073;

/// Get the mnemonic for a base instruction.
#[must_use]
pub const fn base_mnemonic(opid: OpId) -> &'static str {
    match opid.idx {
        0 => "lui",
        1 => "jal",
        2 => "bne",
        3 => "blt",
        4 => "lw",
        5 => "sw",
        6 => "addi",
        7 => "ecall",
        _ => "???",
    }
}

/// Base integer instruction set.
pub struct BaseExtension;

impl InstructionExtension for BaseExtension {
    fn name(&self) -> &'static str {
        "I"
    }

    fn ext_id(&self) -> u8 {
        EXT_I
    }

    fn decode32(&self, raw: u32) -> Option<(OpId, InstrArgs)> {
        let funct3 = decode_funct3(raw);
        let rd = decode_rd(raw);
        let rs1 = decode_rs1(raw);
        let rs2 = decode_rs2(raw);

        match decode_opcode(raw) {
            0x37 => Some((
                OP_LUI,
                InstrArgs::U {
                    rd,
                    imm: decode_u_imm(raw),
                },
            )),
            0x6F => Some((
                OP_JAL,
                InstrArgs::J {
                    rd,
                    imm: decode_j_imm(raw),
                },
            )),
            0x63 => decode_branch(funct3, rs1, rs2, raw),
            0x03 if funct3 == 0b010 => Some((
                OP_LW,
                InstrArgs::I {
                    rd,
                    rs1,
                    imm: decode_i_imm(raw),
                },
            )),
            0x23 if funct3 == 0b010 => Some((
                OP_SW,
                InstrArgs::S {
                    rs1,
                    rs2,
                    imm: decode_s_imm(raw),
                },
            )),
            0x13 if funct3 == 0 => Some((
                OP_ADDI,
                InstrArgs::I {
                    rd,
                    rs1,
                    imm: decode_i_imm(raw),
                },
            )),
            0x73 if raw == ECALL => Some((OP_ECALL, InstrArgs::None)),
            _ => None,
        }
    }

    fn disasm(&self, instr: &DecodedInstr) -> String {
        format_instr(base_mnemonic(instr.opid), &instr.args, instr.opid)
    }
}

const fn decode_branch(funct3: u8, rs1: u8, rs2: u8, instr: u32) -> Option<(OpId, InstrArgs)> {
    let imm = decode_b_imm(instr);
    let op = match funct3 {
        0b001 => OP_BNE,
        0b100 => OP_BLT,
        _ => return None,
    };
    Some((op, InstrArgs::B { rs1, rs2, imm }))
}

fn format_instr(mnemonic: &str, args: &InstrArgs, opid: OpId) -> String {
    match args {
        InstrArgs::I { rd, rs1, imm } => {
            if opid == OP_LW {
                // No comma between rd and the memory operand
                format!("{} {} {}({})", mnemonic, reg_name(*rd), imm, reg_name(*rs1))
            } else {
                format!(
                    "{} {}, {}, {}",
                    mnemonic,
                    reg_name(*rd),
                    reg_name(*rs1),
                    imm
                )
            }
        }
        InstrArgs::S { rs1, rs2, imm } => {
            format!(
                "{} {}, {}({})",
                mnemonic,
                reg_name(*rs2),
                imm,
                reg_name(*rs1)
            )
        }
        InstrArgs::B { rs1, rs2, imm } => {
            format!(
                "{} {}, {}, {}",
                mnemonic,
                reg_name(*rs1),
                reg_name(*rs2),
                imm
            )
        }
        InstrArgs::U { rd, imm } => {
            format!("{} {}, 0x{:02x}", mnemonic, reg_name(*rd), imm.cast_unsigned())
        }
        InstrArgs::J { rd, imm } => {
            format!("{} {}, {}", mnemonic, reg_name(*rd), imm)
        }
        InstrArgs::None => mnemonic.to_string(),
        _ => format!("{mnemonic} <?>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InstrSize;

    fn decode(raw: u32) -> Option<DecodedInstr> {
        let (opid, args) = BaseExtension.decode32(raw)?;
        Some(DecodedInstr::new(opid, 0, InstrSize::Standard, raw, args))
    }

    fn disasm(raw: u32) -> Option<String> {
        decode(raw).map(|instr| BaseExtension.disasm(&instr))
    }

    #[test]
    fn test_addi() {
        assert_eq!(disasm(0x0050_0513).unwrap(), "addi a0, zero, 5");
        assert_eq!(disasm(0xFFF0_0093).unwrap(), "addi ra, zero, -1");
        assert_eq!(disasm(0xFF01_0113).unwrap(), "addi sp, sp, -16");
    }

    #[test]
    fn test_addi_args() {
        let instr = decode(0x0641_0093).unwrap();
        assert_eq!(instr.opid, OP_ADDI);
        assert_eq!(instr.args, InstrArgs::I { rd: 1, rs1: 2, imm: 100 });
    }

    #[test]
    fn test_other_op_imm_is_unrecognized() {
        // slti a0, a0, 1
        assert!(decode(0x0015_2513).is_none());
    }

    #[test]
    fn test_sw() {
        assert_eq!(disasm(0x00A1_2423).unwrap(), "sw a0, 8(sp)");
        assert_eq!(disasm(0xFEA1_2E23).unwrap(), "sw a0, -4(sp)");
        // sb is not recognized
        assert!(decode(0x00A1_0423).is_none());
    }

    #[test]
    fn test_lw_keeps_missing_comma() {
        // lw a0, 8(sp) renders without a comma after rd
        assert_eq!(disasm(0x0081_2503).unwrap(), "lw a0 8(sp)");
        assert_eq!(disasm(0xFFC1_2503).unwrap(), "lw a0 -4(sp)");
        // lb is not recognized
        assert!(decode(0x0081_0503).is_none());
    }

    #[test]
    fn test_branches() {
        assert_eq!(disasm(0xFEB5_1CE3).unwrap(), "bne a0, a1, -8");
        // blt a0, a1, 16
        assert_eq!(disasm(0x00B5_4863).unwrap(), "blt a0, a1, 16");
        // beq is not recognized
        assert!(decode(0x0000_0463).is_none());
    }

    #[test]
    fn test_jal() {
        assert_eq!(disasm(0x0000_006F).unwrap(), "jal zero, 0");
        assert_eq!(disasm(0x0010_00EF).unwrap(), "jal ra, 2048");
        assert_eq!(disasm(0xFFDF_F06F).unwrap(), "jal zero, -4");
    }

    #[test]
    fn test_lui() {
        assert_eq!(disasm(0x1234_5537).unwrap(), "lui a0, 0x12345");
        assert_eq!(disasm(0x0000_1537).unwrap(), "lui a0, 0x01");
        // Negative upper immediates print as 32-bit two's complement
        assert_eq!(disasm(0x8000_0537).unwrap(), "lui a0, 0xfff80000");
    }

    #[test]
    fn test_ecall() {
        let instr = decode(ECALL).unwrap();
        assert_eq!(instr.opid, OP_ECALL);
        assert_eq!(instr.args, InstrArgs::None);
        assert_eq!(disasm(ECALL).unwrap(), "ecall");
        // ebreak is not recognized
        assert!(decode(0x0010_0073).is_none());
    }

    #[test]
    fn test_unsupported_opcode() {
        // add a0, a1, a2
        assert!(decode(0x00C5_8533).is_none());
        // auipc a0, 0
        assert!(decode(0x0000_0517).is_none());
    }
}
