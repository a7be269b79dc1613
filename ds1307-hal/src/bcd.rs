//! Every time and calendar register of the DS1307 stores its value as two
//! packed decimal digits: tens in the high nibble, units in the low nibble.

/// Encode a value in `0..=99` as packed BCD.
///
/// Values above 99 do not fit in two digits and produce a meaningless byte;
/// callers are expected to stay in range.
pub const fn to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Decode a packed BCD byte into its binary value.
pub const fn from_bcd(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_encodings() {
        assert_eq!(to_bcd(0), 0x00);
        assert_eq!(to_bcd(7), 0x07);
        assert_eq!(to_bcd(10), 0x10);
        assert_eq!(to_bcd(41), 0x41);
        assert_eq!(to_bcd(59), 0x59);
        assert_eq!(to_bcd(99), 0x99);

        assert_eq!(from_bcd(0x00), 0);
        assert_eq!(from_bcd(0x23), 23);
        assert_eq!(from_bcd(0x59), 59);
        assert_eq!(from_bcd(0x99), 99);
    }

    #[test]
    fn test_roundtrip_full_range() {
        for value in 0..=99u8 {
            assert_eq!(from_bcd(to_bcd(value)), value, "BCD roundtrip failed for {}", value);
        }
    }
}
