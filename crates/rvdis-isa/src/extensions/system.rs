//! SYSTEM opcode: CSR reads and `wfi`.

use super::InstructionExtension;
use crate::{
    DecodedInstr, EXT_SYSTEM, InstrArgs, OpId, csr_name, decode_csr, decode_funct3, decode_opcode,
    decode_rd, decode_rs1, reg_name,
};

pub const OP_CSRRS: OpId = OpId::new(EXT_SYSTEM, 0);
pub const OP_WFI: OpId = OpId::new(EXT_SYSTEM, 1);

/// Full encoding of `wfi`.
pub const WFI: u32 = 0x1050_0073;

/// Get the mnemonic for a SYSTEM instruction.
#[must_use]
pub const fn system_mnemonic(opid: OpId) -> &'static str {
    match opid.idx {
        0 => "csrrs",
        1 => "wfi",
        _ => "???",
    }
}

/// SYSTEM instructions owned outside the base set.
pub struct SystemExtension;

impl InstructionExtension for SystemExtension {
    fn name(&self) -> &'static str {
        "SYSTEM"
    }

    fn ext_id(&self) -> u8 {
        EXT_SYSTEM
    }

    fn decode32(&self, raw: u32) -> Option<(OpId, InstrArgs)> {
        if decode_opcode(raw) != 0x73 {
            return None;
        }
        if decode_funct3(raw) == 0b010 {
            let args = InstrArgs::Csr {
                rd: decode_rd(raw),
                rs1: decode_rs1(raw),
                csr: decode_csr(raw),
            };
            return Some((OP_CSRRS, args));
        }
        (raw == WFI).then_some((OP_WFI, InstrArgs::None))
    }

    fn disasm(&self, instr: &DecodedInstr) -> String {
        let mnemonic = system_mnemonic(instr.opid);
        match &instr.args {
            InstrArgs::Csr { rd, rs1, csr } => {
                format!(
                    "{} {}, {}, {}",
                    mnemonic,
                    reg_name(*rd),
                    csr_name(*csr),
                    reg_name(*rs1)
                )
            }
            InstrArgs::None => mnemonic.to_string(),
            _ => format!("{mnemonic} <?>"),
        }
    }
}
