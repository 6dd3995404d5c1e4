//! Byte to hexadecimal text

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Encode a byte as two uppercase ASCII hex digits, high nibble first
///
/// Always two digits, so `0x00` is `b"00"` and `0x0A` is `b"0A"`.
pub fn encode_hex_ascii(value: u8) -> [u8; 2] {
    [
        HEX_DIGITS[(value >> 4) as usize],
        HEX_DIGITS[(value & 0x0F) as usize],
    ]
}

/// Encode a byte as a pair of uppercase hex characters
pub fn encode_hex_byte(value: u8) -> (char, char) {
    let [hi, lo] = encode_hex_ascii(value);
    (hi as char, lo as char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_is_two_digits() {
        assert_eq!(encode_hex_byte(0x00), ('0', '0'));
        assert_eq!(&encode_hex_ascii(0x00), b"00");
    }

    #[test]
    fn test_known_values() {
        assert_eq!(encode_hex_byte(0x1A), ('1', 'A'));
        assert_eq!(encode_hex_byte(0xFF), ('F', 'F'));
        assert_eq!(encode_hex_byte(0x0F), ('0', 'F'));
        assert_eq!(encode_hex_byte(0xA0), ('A', '0'));
    }

    #[test]
    fn test_every_byte_roundtrips() {
        for value in 0..=u8::MAX {
            let [hi, lo] = encode_hex_ascii(value);
            assert!(HEX_DIGITS.contains(&hi));
            assert!(HEX_DIGITS.contains(&lo));
            let text = std::str::from_utf8(&[hi, lo]).unwrap().to_owned();
            assert_eq!(u8::from_str_radix(&text, 16).unwrap(), value);
        }
    }

    proptest! {
        #[test]
        fn prop_pair_matches_format(value: u8) {
            let (hi, lo) = encode_hex_byte(value);
            let expected = format!("{:02X}", value);
            prop_assert_eq!(format!("{}{}", hi, lo), expected);
        }
    }
}
