//! Proof-of-work targets
//!
//! 256-bit targets and their compact ("nBits") encoding. A network's
//! proof-of-work limit is the easiest target it accepts.

use primitive_types::U256;

/// A full 256-bit difficulty target
pub type Target = U256;

/// Proof-of-work limit expressed as `!0 >> shift`
///
/// A larger shift gives a smaller (harder) limit.
pub fn pow_limit(shift: u32) -> Target {
    U256::MAX >> shift as usize
}

/// Decode a compact target
///
/// Returns `None` for negative or overflowing encodings.
pub fn target_from_compact(compact: u32) -> Option<Target> {
    let size = compact >> 24;
    let mut word = compact & 0x007f_ffff;

    if word != 0 && compact & 0x0080_0000 != 0 {
        return None;
    }

    let overflow = word != 0
        && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
    if overflow {
        return None;
    }

    if size <= 3 {
        word >>= 8 * (3 - size);
        Some(U256::from(word))
    } else {
        Some(U256::from(word) << (8 * (size - 3)) as usize)
    }
}

/// Encode a target in compact form (lossy: keeps the top three bytes)
pub fn target_to_compact(target: &Target) -> u32 {
    let mut size = (target.bits() as u32 + 7) / 8;
    let mut compact = if size <= 3 {
        target.low_u32() << (8 * (3 - size))
    } else {
        (*target >> (8 * (size - 3)) as usize).low_u32()
    };

    // The 0x00800000 bit is the sign bit; shift it out of the mantissa
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }

    compact | (size << 24)
}

/// Whether `bits` decodes to a valid target no easier than `limit`
pub fn is_within_limit(bits: u32, limit: &Target) -> bool {
    match target_from_compact(bits) {
        Some(target) => !target.is_zero() && target <= *limit,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_limit_shift() {
        assert_eq!(pow_limit(0), U256::MAX);
        assert_eq!(pow_limit(1).bits(), 255);
        assert_eq!(pow_limit(32).bits(), 224);
        assert!(pow_limit(32) < pow_limit(8));
    }

    #[test]
    fn test_compact_decoding() {
        let target = target_from_compact(0x1d00ffff).unwrap();
        assert_eq!(target, U256::from(0xffffu64) << 208);

        let small = target_from_compact(0x03123456).unwrap();
        assert_eq!(small, U256::from(0x123456u64));

        let tiny = target_from_compact(0x01120000).unwrap();
        assert_eq!(tiny, U256::from(0x12u64));
    }

    #[test]
    fn test_negative_and_overflow_rejected() {
        assert!(target_from_compact(0x04923456).is_none());
        assert!(target_from_compact(0xff123456).is_none());
    }

    #[test]
    fn test_compact_roundtrip_for_known_bits() {
        for bits in [0x1d00ffffu32, 0x1e0ffff0, 0x207fffff, 0x1b0404cb] {
            let target = target_from_compact(bits).unwrap();
            assert_eq!(target_to_compact(&target), bits);
        }
    }

    #[test]
    fn test_sign_bit_moves_into_exponent() {
        let target = U256::from(0x80u64);
        assert_eq!(target_to_compact(&target), 0x02008000);
    }

    #[test]
    fn test_is_within_limit() {
        let limit = pow_limit(32);
        assert!(is_within_limit(0x1d00ffff, &limit));
        assert!(!is_within_limit(0x1e0ffff0, &limit));
        assert!(!is_within_limit(0, &limit));
    }
}
