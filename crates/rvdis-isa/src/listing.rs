//! Linear decode loop over a byte buffer.
//!
//! The cursor only moves forward: by the instruction size after a decode,
//! or by 2 bytes after a first byte announcing a 48-bit or longer encoding.
//! Skipping 2 bytes is a recovery policy, not a resynchronization guarantee.

use std::fmt::{self, Display};
use std::iter::FusedIterator;
use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::{CompositeDecoder, DecodeError, DecodedInstr, InstrSize, classify};

/// Bytes skipped after an unsupported instruction length.
pub const BAD_LENGTH_SKIP: usize = 2;

static STANDARD_DECODER: LazyLock<CompositeDecoder> = LazyLock::new(CompositeDecoder::standard);

/// Shared decoder with all supported extensions.
#[must_use]
pub fn standard_decoder() -> &'static CompositeDecoder {
    &STANDARD_DECODER
}

/// One decoded instruction, recognized or not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstrLine {
    /// Byte offset in the input buffer.
    pub offset: usize,
    /// Encoded size.
    pub size: InstrSize,
    /// Raw instruction word, little-endian.
    pub raw: u32,
    /// Decoded instruction, `None` when no extension recognized it.
    pub instr: Option<DecodedInstr>,
    /// Mnemonic and operands, empty when unrecognized.
    pub text: String,
}

impl InstrLine {
    /// Whether an extension recognized the encoding.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        self.instr.is_some()
    }
}

impl Display for InstrLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size {
            InstrSize::Compressed => write!(f, "    {:04x}  {}", self.raw, self.text),
            InstrSize::Standard => write!(f, "{:08x}  {}", self.raw, self.text),
        }
    }
}

/// One unit of decode output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// Listing line for the output stream.
    Instr(InstrLine),
    /// First byte announces an unsupported length; goes to the diagnostic stream.
    BadLength { offset: usize, byte: u8 },
}

impl Line {
    /// Byte offset this line was produced at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Instr(line) => line.offset,
            Self::BadLength { offset, .. } => *offset,
        }
    }

    /// Whether this line belongs on the diagnostic stream.
    #[must_use]
    pub const fn is_diagnostic(&self) -> bool {
        matches!(self, Self::BadLength { .. })
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instr(line) => Display::fmt(line, f),
            Self::BadLength { byte, .. } => write!(f, "Bad instruction length {byte:02x}"),
        }
    }
}

/// Counters collected while walking a buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisasmStats {
    /// Instructions an extension recognized.
    pub recognized: usize,
    /// Instructions of a supported length that no extension recognized.
    pub unrecognized: usize,
    /// First bytes announcing an unsupported length.
    pub bad_length: usize,
    /// Whether the walk stopped on a truncated instruction.
    pub truncated: bool,
}

impl DisasmStats {
    /// Number of listing lines produced.
    #[must_use]
    pub const fn instructions(&self) -> usize {
        self.recognized + self.unrecognized
    }
}

/// Iterator decoding a buffer from offset 0.
///
/// Yields `Ok` for every listing or diagnostic line. A trailing instruction
/// shorter than its classified size yields one `Err` and ends the walk.
pub struct Disassembler<'a> {
    bytes: &'a [u8],
    decoder: &'a CompositeDecoder,
    offset: usize,
    done: bool,
    stats: DisasmStats,
}

impl<'a> Disassembler<'a> {
    /// Walk `bytes` with the standard decoder.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_decoder(bytes, standard_decoder())
    }

    /// Walk `bytes` with a caller-provided decoder.
    #[must_use]
    pub const fn with_decoder(bytes: &'a [u8], decoder: &'a CompositeDecoder) -> Self {
        Self {
            bytes,
            decoder,
            offset: 0,
            done: false,
            stats: DisasmStats {
                recognized: 0,
                unrecognized: 0,
                bad_length: 0,
                truncated: false,
            },
        }
    }

    /// Current cursor position.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Counters for the lines yielded so far.
    #[must_use]
    pub const fn stats(&self) -> &DisasmStats {
        &self.stats
    }

    fn decode_at(&self, offset: usize, size: InstrSize, raw: u32) -> InstrLine {
        let instr = self.decoder.decode_word(size, raw, offset);
        let text = instr
            .as_ref()
            .map(|instr| self.decoder.disasm(instr))
            .unwrap_or_default();
        InstrLine {
            offset,
            size,
            raw,
            instr,
            text,
        }
    }
}

fn read_word(bytes: &[u8], size: InstrSize) -> u32 {
    match size {
        InstrSize::Compressed => u32::from(u16::from_le_bytes([bytes[0], bytes[1]])),
        InstrSize::Standard => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
    }
}

impl Iterator for Disassembler<'_> {
    type Item = Result<Line, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let bytes = self.bytes;
        let offset = self.offset;
        let Some(rest) = bytes.get(offset..).filter(|rest| !rest.is_empty()) else {
            self.done = true;
            debug!(
                recognized = self.stats.recognized,
                unrecognized = self.stats.unrecognized,
                bad_length = self.stats.bad_length,
                "end of buffer"
            );
            return None;
        };

        let byte = rest[0];
        let Some(size) = classify(byte) else {
            debug!(offset, byte = format_args!("{byte:#04x}"), "bad instruction length");
            self.stats.bad_length += 1;
            self.offset += BAD_LENGTH_SKIP;
            return Some(Ok(Line::BadLength { offset, byte }));
        };

        let needed = size.bytes();
        if rest.len() < needed {
            debug!(offset, needed, available = rest.len(), "truncated instruction");
            self.stats.truncated = true;
            self.done = true;
            return Some(Err(DecodeError::truncated(offset, needed, rest.len())));
        }

        let line = self.decode_at(offset, size, read_word(rest, size));
        if line.is_recognized() {
            self.stats.recognized += 1;
        } else {
            self.stats.unrecognized += 1;
        }
        trace!(offset, raw = format_args!("{:#x}", line.raw), text = %line.text, "decoded");
        self.offset += needed;
        Some(Ok(Line::Instr(line)))
    }
}

impl FusedIterator for Disassembler<'_> {}

impl std::fmt::Debug for Disassembler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disassembler")
            .field("len", &self.bytes.len())
            .field("offset", &self.offset)
            .field("done", &self.done)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// Result of walking a whole buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    /// Lines in increasing offset order.
    pub lines: Vec<Line>,
    /// Counters for the walk.
    pub stats: DisasmStats,
    /// Truncation error that ended the walk, if any.
    pub error: Option<DecodeError>,
}

impl Listing {
    /// Listing lines only, without diagnostics.
    pub fn instr_lines(&self) -> impl Iterator<Item = &InstrLine> {
        self.lines.iter().filter_map(|line| match line {
            Line::Instr(line) => Some(line),
            Line::BadLength { .. } => None,
        })
    }

    /// Rendered listing lines, without diagnostics.
    #[must_use]
    pub fn to_text_lines(&self) -> Vec<String> {
        self.instr_lines().map(ToString::to_string).collect()
    }
}

/// Decode a whole buffer with the standard decoder.
#[must_use]
pub fn disassemble(bytes: &[u8]) -> Listing {
    disassemble_with(bytes, standard_decoder())
}

/// Decode a whole buffer with a caller-provided decoder.
#[must_use]
pub fn disassemble_with(bytes: &[u8], decoder: &CompositeDecoder) -> Listing {
    let mut iter = Disassembler::with_decoder(bytes, decoder);
    let mut listing = Listing::default();
    for item in iter.by_ref() {
        match item {
            Ok(line) => listing.lines.push(line),
            Err(err) => listing.error = Some(err),
        }
    }
    listing.stats = *iter.stats();
    listing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OP_C_LI, OP_ECALL, OP_WFI};

    fn text(bytes: &[u8]) -> Vec<String> {
        disassemble(bytes).to_text_lines()
    }

    #[test]
    fn test_addi() {
        // addi a0, zero, 5
        assert_eq!(text(&0x0050_0513u32.to_le_bytes()), ["00500513  addi a0, zero, 5"]);
    }

    #[test]
    fn test_wfi_and_ecall() {
        let listing = disassemble(&[0x73, 0x00, 0x50, 0x10, 0x73, 0x00, 0x00, 0x00]);
        assert_eq!(listing.to_text_lines(), ["10500073  wfi", "00000073  ecall"]);
        let opids: Vec<_> = listing
            .instr_lines()
            .map(|line| line.instr.as_ref().unwrap().opid)
            .collect();
        assert_eq!(opids, [OP_WFI, OP_ECALL]);
    }

    #[test]
    fn test_compressed_classification() {
        // 0x0001 is c.addi (c.nop), 0x4515 is c.li a0, 5
        let listing = disassemble(&[0x01, 0x00, 0x15, 0x45]);
        assert_eq!(listing.to_text_lines(), ["    0001  c.addi ...", "    4515  c.li a0, 5"]);
        let second = listing.instr_lines().nth(1).unwrap();
        assert_eq!(second.size, InstrSize::Compressed);
        assert_eq!(second.offset, 2);
        assert_eq!(second.instr.as_ref().unwrap().opid, OP_C_LI);
    }

    #[test]
    fn test_unrecognized_keeps_hex_dump() {
        // add a0, a1, a2 and c.lwsp a0, 0(sp)
        let listing = disassemble(&[0x33, 0x85, 0xC5, 0x00, 0x02, 0x45]);
        assert_eq!(listing.to_text_lines(), ["00c58533  ", "    4502  "]);
        assert_eq!(listing.stats.unrecognized, 2);
        assert_eq!(listing.stats.recognized, 0);
        assert!(listing.error.is_none());
    }

    #[test]
    fn test_bad_length_skips_two_bytes() {
        // 0x1F announces a 48-bit instruction, followed by c.li a0, 5
        let listing = disassemble(&[0x1F, 0xAA, 0x15, 0x45]);
        assert_eq!(
            listing.lines[0],
            Line::BadLength {
                offset: 0,
                byte: 0x1F
            }
        );
        assert_eq!(listing.lines[0].to_string(), "Bad instruction length 1f");
        assert!(listing.lines[0].is_diagnostic());
        assert_eq!(listing.to_text_lines(), ["    4515  c.li a0, 5"]);
        assert_eq!(listing.stats.bad_length, 1);
    }

    #[test]
    fn test_bad_length_on_last_byte() {
        let listing = disassemble(&[0x15, 0x45, 0x7F]);
        assert_eq!(listing.lines.len(), 2);
        assert!(listing.lines[1].is_diagnostic());
        assert!(listing.error.is_none());
    }

    #[test]
    fn test_truncated_standard_instruction() {
        // c.li a0, 5 then the first 3 bytes of addi a0, zero, 5
        let listing = disassemble(&[0x15, 0x45, 0x13, 0x05, 0x50]);
        assert_eq!(listing.to_text_lines(), ["    4515  c.li a0, 5"]);
        assert_eq!(listing.error, Some(DecodeError::truncated(2, 4, 3)));
        assert!(listing.stats.truncated);
    }

    #[test]
    fn test_truncated_compressed_instruction() {
        let listing = disassemble(&[0x15]);
        assert!(listing.lines.is_empty());
        assert_eq!(listing.error, Some(DecodeError::truncated(0, 2, 1)));
    }

    #[test]
    fn test_iterator_stops_after_truncation() {
        let mut iter = Disassembler::new(&[0x13, 0x05]);
        assert!(matches!(iter.next(), Some(Err(DecodeError::Truncated { .. }))));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_empty_buffer() {
        let listing = disassemble(&[]);
        assert!(listing.lines.is_empty());
        assert!(listing.error.is_none());
        assert_eq!(listing.stats, DisasmStats::default());
    }

    #[test]
    fn test_mixed_stream() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x1141u16.to_le_bytes()); // c.addi sp, -16
        bytes.extend_from_slice(&0x00A1_2423u32.to_le_bytes()); // sw a0, 8(sp)
        bytes.extend_from_slice(&0x852Eu16.to_le_bytes()); // c.mv a0, a1
        bytes.extend_from_slice(&0x0081_2503u32.to_le_bytes()); // lw a0, 8(sp)
        bytes.extend_from_slice(&0xFEB5_1CE3u32.to_le_bytes()); // bne a0, a1, -8
        bytes.extend_from_slice(&0x3000_2573u32.to_le_bytes()); // csrr a0, mstatus
        bytes.extend_from_slice(&0x1234_5537u32.to_le_bytes()); // lui a0, 0x12345
        bytes.extend_from_slice(&0x0010_00EFu32.to_le_bytes()); // jal ra, 2048

        let listing = disassemble(&bytes);
        assert_eq!(
            listing.to_text_lines(),
            [
                "    1141  c.addi ...",
                "00a12423  sw a0, 8(sp)",
                "    852e  c.mv a0, a1",
                "00812503  lw a0 8(sp)",
                "feb51ce3  bne a0, a1, -8",
                "30002573  csrrs a0, mstatus, zero",
                "12345537  lui a0, 0x12345",
                "001000ef  jal ra, 2048",
            ]
        );
        let offsets: Vec<_> = listing.lines.iter().map(Line::offset).collect();
        assert_eq!(offsets, [0, 2, 6, 8, 12, 16, 20, 24]);
        assert_eq!(listing.stats.instructions(), 8);
    }

    #[test]
    fn test_custom_decoder() {
        let decoder = CompositeDecoder::empty();
        let listing = disassemble_with(&0x0050_0513u32.to_le_bytes(), &decoder);
        assert_eq!(listing.to_text_lines(), ["00500513  "]);
    }

    #[test]
    fn test_stats_track_progress() {
        let bytes = [0x15, 0x45, 0x33, 0x85, 0xC5, 0x00];
        let mut iter = Disassembler::new(&bytes);
        assert!(iter.next().is_some());
        assert_eq!(iter.offset(), 2);
        assert_eq!(iter.stats().recognized, 1);
        assert!(iter.next().is_some());
        assert_eq!(iter.offset(), 6);
        assert_eq!(iter.stats().unrecognized, 1);
        assert!(iter.next().is_none());
    }
}
