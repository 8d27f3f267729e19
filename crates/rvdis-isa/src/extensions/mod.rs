//! RISC-V instruction set extensions.
//!
//! Each extension provides decode and disasm in a single file. The base
//! integer set, the compressed set and the SYSTEM opcode are all plain
//! extensions chained by [`CompositeDecoder`].

mod base;
mod c;
mod system;

pub use base::{
    BaseExtension, ECALL, OP_ADDI, OP_BLT, OP_BNE, OP_ECALL, OP_JAL, OP_LUI, OP_LW, OP_SW,
    base_mnemonic,
};
pub use c::{CExtension, OP_C_ADDI, OP_C_LI, OP_C_MV, c_mnemonic};
pub use system::{OP_CSRRS, OP_WFI, SystemExtension, WFI, system_mnemonic};

use crate::{DecodedInstr, InstrArgs, InstrSize, OpId};

/// Extension point for instruction decoding.
///
/// Decoders only see the raw word; the caller attaches offset and size.
pub trait InstructionExtension: Send + Sync {
    /// Extension name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Extension ID stored in every [`OpId`] this extension produces.
    fn ext_id(&self) -> u8;

    /// Try to decode a 16-bit instruction. Return None to fall through.
    fn decode16(&self, _raw: u16) -> Option<(OpId, InstrArgs)> {
        None
    }

    /// Try to decode a 32-bit instruction. Return None to fall through.
    fn decode32(&self, _raw: u32) -> Option<(OpId, InstrArgs)> {
        None
    }

    /// Disassembly text (mnemonic and operands).
    fn disasm(&self, instr: &DecodedInstr) -> String;
}

/// Composite decoder that chains multiple extensions.
///
/// Tries extensions in order until one handles the instruction.
pub struct CompositeDecoder {
    extensions: Vec<Box<dyn InstructionExtension>>,
}

impl CompositeDecoder {
    /// Create a new composite decoder with the given extensions.
    #[must_use]
    pub fn new(extensions: Vec<Box<dyn InstructionExtension>>) -> Self {
        Self { extensions }
    }

    /// Create a composite decoder with all supported extensions.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(CExtension),      // 16-bit instructions
            Box::new(BaseExtension),   // Base I
            Box::new(SystemExtension), // CSR access and WFI
        ])
    }

    /// Create an empty composite decoder (no extensions).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            extensions: Vec::new(),
        }
    }

    /// Add an extension to the decoder chain.
    #[must_use]
    pub fn with_extension(mut self, ext: impl InstructionExtension + 'static) -> Self {
        self.extensions.push(Box::new(ext));
        self
    }

    /// Number of registered extensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Whether no extensions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Decode a raw word of the given size.
    ///
    /// Returns `None` when no extension recognizes the encoding.
    #[must_use]
    pub fn decode_word(&self, size: InstrSize, raw: u32, offset: usize) -> Option<DecodedInstr> {
        self.extensions.iter().find_map(|ext| {
            let (opid, args) = match size {
                InstrSize::Compressed => ext.decode16(u16::try_from(raw).ok()?),
                InstrSize::Standard => ext.decode32(raw),
            }?;
            Some(DecodedInstr::new(opid, offset, size, raw, args))
        })
    }

    /// Disassemble an instruction using the extension that owns its [`OpId`].
    #[must_use]
    pub fn disasm(&self, instr: &DecodedInstr) -> String {
        self.extensions
            .iter()
            .find(|ext| ext.ext_id() == instr.opid.ext)
            .map_or_else(|| format!("??? (ext={})", instr.opid.ext), |ext| ext.disasm(instr))
    }
}

impl Default for CompositeDecoder {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for CompositeDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.extensions.iter().map(|ext| ext.name()))
            .finish()
    }
}
