//! Compact difficulty target encoding (the header "bits" field)
//!
//! The 4-byte compact form packs a 256-bit unsigned target as a base-256
//! floating point number: the top byte is the exponent (the byte length of
//! the full value) and the low 3 bytes are a big-endian mantissa. Bit
//! 0x00800000 of the mantissa is a sign flag; a set sign bit with a non-zero
//! mantissa marks the encoded value negative, which a target must never be.
//!
//! The round trip is lossy by design: only 3 mantissa bytes survive, so
//! `encode(decode(c)) == c` holds, but `decode(encode(v)) == v` only when
//! `v` was itself produced by a prior decode.

use primitive_types::U256;

/// A decoded compact target. Decoding never fails; degenerate encodings are
/// carried as flags so validation can reject them with full context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactTarget {
    value: U256,
    negative: bool,
    overflow: bool,
}

impl CompactTarget {
    /// Expand a compact representation into the full 256-bit target.
    ///
    /// The result is `mantissa * 256^(exponent - 3)` when the exponent is at
    /// least 3, or the mantissa shifted right accordingly when it is
    /// smaller. Values too wide for 256 bits are flagged as overflowed; any
    /// such value exceeds every proof-of-work ceiling.
    pub fn decode(compact: u32) -> Self {
        let exponent = (compact >> 24) as usize;
        let mantissa = compact & 0x007f_ffff;
        let negative = mantissa != 0 && compact & 0x0080_0000 != 0;
        let overflow = mantissa != 0
            && (exponent > 34
                || (mantissa > 0xff && exponent > 33)
                || (mantissa > 0xffff && exponent > 32));

        let value = if overflow {
            U256::zero()
        } else if exponent <= 3 {
            U256::from(mantissa) >> (8 * (3 - exponent))
        } else {
            U256::from(mantissa) << (8 * (exponent - 3))
        };

        CompactTarget {
            value,
            negative,
            overflow,
        }
    }

    /// The expanded target. Zero when the encoding overflowed 256 bits.
    pub fn value(&self) -> U256 {
        self.value
    }

    /// True when the mantissa sign bit flagged the encoded value negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True when the full value would not fit in 256 bits.
    pub fn is_overflow(&self) -> bool {
        self.overflow
    }

    /// A target usable for proof of work: strictly positive, not negative,
    /// not overflowed.
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.overflow && !self.value.is_zero()
    }
}

/// Compress a 256-bit target into compact form.
///
/// Chooses the minimal exponent such that the mantissa fits in 3 bytes with
/// its top bit clear, inserting a zero padding byte (and bumping the
/// exponent) when the natural mantissa would otherwise carry the sign bit.
pub fn encode_compact_bits(value: U256) -> u32 {
    let mut size = (value.bits() + 7) / 8;
    let mut compact = if size <= 3 {
        value.low_u32() << (8 * (3 - size))
    } else {
        (value >> (8 * (size - 3))).low_u32()
    };
    // A set sign bit in the mantissa would read back as negative
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }
    compact | ((size as u32) << 24)
}
