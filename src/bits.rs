use bitvec::prelude::*;

use crate::error::DecodeError;

/// Bits `[upper:lower]` of `word`, right-justified. No sign extension.
pub fn extract(word: u32, upper: u32, lower: u32) -> Result<u32, DecodeError> {
    if upper < lower || upper > 31 {
        return Err(DecodeError::InvalidRange { upper, lower });
    }
    Ok(field(word, upper, lower))
}

// Callers pass constant, already valid ranges.
#[inline]
pub(crate) fn field(word: u32, upper: u32, lower: u32) -> u32 {
    word.view_bits::<Lsb0>()[lower as usize..=upper as usize].load_le::<u32>()
}

/// Sign-extend the low `width` bits of `value`.
///
/// Immediates come out of the decoder as raw magnitudes; this is the helper
/// for callers that want the two's-complement reading.
pub fn sign_extend(value: u32, width: u32) -> i32 {
    if width == 0 {
        return 0;
    }
    if width >= 32 {
        return value as i32;
    }
    let s = 32 - width;
    ((value << s) as i32) >> s
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_inverted_and_oversized_ranges() {
        assert_eq!(
            extract(0xFFFF_FFFF, 3, 4),
            Err(DecodeError::InvalidRange { upper: 3, lower: 4 })
        );
        assert!(extract(0, 32, 0).is_err());
    }

    #[test]
    fn single_bit_and_nibbles() {
        assert_eq!(extract(0x8000_0000, 31, 31).unwrap(), 1);
        assert_eq!(extract(0x1234_5678, 7, 4).unwrap(), 0x7);
        assert_eq!(extract(0x1234_5678, 31, 28).unwrap(), 0x1);
        assert_eq!(extract(0x00a0_0513, 6, 0).unwrap(), 0b001_0011);
    }

    #[test]
    fn sign_extend_widths() {
        assert_eq!(sign_extend(0xFFF, 12), -1);
        assert_eq!(sign_extend(0x7FF, 12), 0x7FF);
        assert_eq!(sign_extend(0x1000, 13), -4096);
        assert_eq!(sign_extend(0xDEAD_BEEF, 32), 0xDEAD_BEEFu32 as i32);
    }

    #[test]
    fn sign_extend_zero_width_is_zero() {
        assert_eq!(sign_extend(0xFFFF_FFFF, 0), 0);
        assert_eq!(sign_extend(0x1234, crate::opcodes::Format::R.imm_width()), 0);
    }

    proptest! {
        #[test]
        fn extract_matches_shift_and_mask(word in any::<u32>(), lo in 0u32..32, span in 0u32..32) {
            let hi = (lo + span).min(31);
            let width = hi - lo + 1;
            let mask = if width == 32 { u32::MAX } else { (1u32 << width) - 1 };
            prop_assert_eq!(extract(word, hi, lo).unwrap(), (word >> lo) & mask);
        }

        #[test]
        fn full_width_is_identity(word in any::<u32>()) {
            prop_assert_eq!(extract(word, 31, 0).unwrap(), word);
        }
    }
}
