//! Bit-field extraction and immediate decoding helpers.
//!
//! Field boundaries are fixed by the instruction format, so a bad range is a
//! programming error and panics instead of returning an error.

/// Extract the inclusive bit range `[hi:lo]` of `word`, shifted down to bit 0.
///
/// # Panics
///
/// Panics if `hi > 31` or `lo > hi`.
#[inline]
#[must_use]
pub const fn bits(word: u32, hi: u32, lo: u32) -> u32 {
    assert!(hi < 32 && lo <= hi, "bit range must satisfy lo <= hi < 32");
    let width = hi - lo + 1;
    let mask = if width == 32 { u32::MAX } else { (1 << width) - 1 };
    (word >> lo) & mask
}

/// Sign-extend the low `width` bits of `value` to an `i32`.
///
/// Bits above `width` are ignored.
///
/// # Panics
///
/// Panics if `width` is not in `1..=32`.
#[inline]
#[must_use]
pub const fn sign_extend(value: u32, width: u32) -> i32 {
    assert!(width != 0 && width <= 32, "sign-extension width must be in 1..=32");
    let shift = 32 - width;
    (value << shift).cast_signed() >> shift
}

#[allow(clippy::cast_possible_truncation)]
#[inline]
const fn field_u8(word: u32, hi: u32, lo: u32) -> u8 {
    // at most 7 bits wide at every call site
    bits(word, hi, lo) as u8
}

/// Extract opcode field (bits [6:0]).
#[inline]
#[must_use]
pub const fn decode_opcode(instr: u32) -> u8 {
    field_u8(instr, 6, 0)
}

/// Extract rd field (bits [11:7]).
#[inline]
#[must_use]
pub const fn decode_rd(instr: u32) -> u8 {
    field_u8(instr, 11, 7)
}

/// Extract rs1 field (bits [19:15]).
#[inline]
#[must_use]
pub const fn decode_rs1(instr: u32) -> u8 {
    field_u8(instr, 19, 15)
}

/// Extract rs2 field (bits [24:20]).
#[inline]
#[must_use]
pub const fn decode_rs2(instr: u32) -> u8 {
    field_u8(instr, 24, 20)
}

/// Extract funct3 field (bits [14:12]).
#[inline]
#[must_use]
pub const fn decode_funct3(instr: u32) -> u8 {
    field_u8(instr, 14, 12)
}

/// Extract the 12-bit CSR address (bits [31:20]).
#[allow(clippy::cast_possible_truncation)]
#[inline]
#[must_use]
pub const fn decode_csr(instr: u32) -> u16 {
    bits(instr, 31, 20) as u16
}

/// Decode I-type immediate (bits [31:20] sign-extended).
#[inline]
#[must_use]
pub const fn decode_i_imm(instr: u32) -> i32 {
    sign_extend(bits(instr, 31, 20), 12)
}

/// Decode S-type immediate (bits [31:25] | [11:7] sign-extended).
#[inline]
#[must_use]
pub const fn decode_s_imm(instr: u32) -> i32 {
    let imm = bits(instr, 11, 7) | (bits(instr, 31, 25) << 5);
    sign_extend(imm, 12)
}

/// Decode B-type immediate (bits [31] | [7] | [30:25] | [11:8] sign-extended, << 1).
#[inline]
#[must_use]
pub const fn decode_b_imm(instr: u32) -> i32 {
    let imm = (bits(instr, 31, 31) << 12)
        | (bits(instr, 30, 25) << 5)
        | (bits(instr, 11, 8) << 1)
        | (bits(instr, 7, 7) << 11);
    sign_extend(imm, 13)
}

/// Decode J-type immediate (bits [31] | [19:12] | [20] | [30:21] sign-extended, << 1).
#[inline]
#[must_use]
pub const fn decode_j_imm(instr: u32) -> i32 {
    let imm = (bits(instr, 31, 31) << 20)
        | (bits(instr, 30, 21) << 1)
        | (bits(instr, 20, 20) << 11)
        | (bits(instr, 19, 12) << 12);
    sign_extend(imm, 21)
}

/// Decode U-type immediate field (bits [31:12] sign-extended, not shifted).
#[inline]
#[must_use]
pub const fn decode_u_imm(instr: u32) -> i32 {
    sign_extend(bits(instr, 31, 12), 20)
}

/// Extract compressed quadrant (bits [1:0]).
#[inline]
#[must_use]
pub const fn decode_c_op(instr: u16) -> u8 {
    field_u8(instr as u32, 1, 0)
}

/// Extract compressed funct3 (bits [15:13]).
#[inline]
#[must_use]
pub const fn decode_c_funct3(instr: u16) -> u8 {
    field_u8(instr as u32, 15, 13)
}

/// Extract compressed rd/rs1 field (bits [11:7]).
#[inline]
#[must_use]
pub const fn decode_c_rd(instr: u16) -> u8 {
    field_u8(instr as u32, 11, 7)
}

/// Extract compressed rs2 field (bits [6:2]).
#[inline]
#[must_use]
pub const fn decode_c_rs2(instr: u16) -> u8 {
    field_u8(instr as u32, 6, 2)
}

/// Extract compressed bit 12.
#[inline]
#[must_use]
pub const fn decode_c_bit12(instr: u16) -> u8 {
    field_u8(instr as u32, 12, 12)
}

/// Decode CI-format immediate (bit [12] | bits [6:2]) without sign extension.
#[inline]
#[must_use]
pub const fn decode_ci_uimm(instr: u16) -> u32 {
    let instr = instr as u32;
    bits(instr, 6, 2) | (bits(instr, 12, 12) << 5)
}

/// Decode CI-format immediate sign-extended from 6 bits.
#[inline]
#[must_use]
pub const fn decode_ci_imm(instr: u16) -> i32 {
    sign_extend(decode_ci_uimm(instr), 6)
}
