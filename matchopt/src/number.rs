//! Numeric conversion of captures, with `strtol` scanning semantics:
//! leading whitespace and an optional sign are accepted, the maximal valid
//! prefix is converted, and trailing junk is ignored.

use crate::error::{ParseError, Result};
use crate::substring::Substring;

impl Substring<'_> {
    /// Parse the capture as a decimal integer with C-style base detection:
    /// `0x`/`0X` means hex, a leading `0` means octal, anything else decimal.
    pub fn parse_int(&self) -> Result<i32> {
        parse_number(self.text, 0)
    }

    /// Parse the capture as an octal integer.
    pub fn parse_octal(&self) -> Result<i32> {
        parse_number(self.text, 8)
    }

    /// Parse the capture as a hexadecimal integer (optional `0x` prefix).
    pub fn parse_hex(&self) -> Result<i32> {
        parse_number(self.text, 16)
    }
}

fn parse_number(text: &str, base: u32) -> Result<i32> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }

    let mut negative = false;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }

    let hex_prefixed = bytes.len() >= i + 3
        && bytes[i] == b'0'
        && (bytes[i + 1] | 0x20) == b'x'
        && bytes[i + 2].is_ascii_hexdigit();

    let base = match base {
        0 if hex_prefixed => {
            i += 2;
            16
        }
        0 if i < bytes.len() && bytes[i] == b'0' => 8,
        0 => 10,
        16 if hex_prefixed => {
            i += 2;
            16
        }
        b => b,
    };

    let mut val: i64 = 0;
    let mut digits = 0usize;
    let mut overflow = false;
    while i < bytes.len() {
        let d = match (bytes[i] as char).to_digit(base) {
            Some(d) => i64::from(d),
            None => break,
        };
        digits += 1;
        i += 1;
        if !overflow {
            match val.checked_mul(i64::from(base)).and_then(|v| v.checked_add(d)) {
                Some(v) => val = v,
                None => overflow = true,
            }
        }
    }

    if digits == 0 {
        return Err(ParseError::InvalidFormat);
    }

    let val = if negative { -val } else { val };
    if overflow || val < i64::from(i32::MIN) || val > i64::from(i32::MAX) {
        return Err(ParseError::OutOfRange);
    }
    Ok(val as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> Result<i32> {
        Substring::new(s).parse_int()
    }

    fn octal(s: &str) -> Result<i32> {
        Substring::new(s).parse_octal()
    }

    fn hex(s: &str) -> Result<i32> {
        Substring::new(s).parse_hex()
    }

    // ── Decimal with base detection ───────────────────────────────

    #[test]
    fn plain_decimal() {
        assert_eq!(int("4096"), Ok(4096));
    }

    #[test]
    fn signed_decimal() {
        assert_eq!(int("-42"), Ok(-42));
        assert_eq!(int("+42"), Ok(42));
    }

    #[test]
    fn auto_hex_prefix() {
        assert_eq!(int("0x1A"), Ok(26));
        assert_eq!(int("0X1a"), Ok(26));
    }

    #[test]
    fn auto_octal_prefix() {
        assert_eq!(int("0755"), Ok(493));
    }

    #[test]
    fn lone_zero() {
        assert_eq!(int("0"), Ok(0));
    }

    #[test]
    fn zero_x_without_hex_digit_parses_the_zero() {
        // strtol: "0x" with no digit after is just "0" followed by junk.
        assert_eq!(int("0x"), Ok(0));
        assert_eq!(int("0xg"), Ok(0));
    }

    #[test]
    fn leading_whitespace_and_trailing_junk() {
        assert_eq!(int("  123"), Ok(123));
        assert_eq!(int("123k"), Ok(123));
    }

    // ── Fixed bases ───────────────────────────────────────────────

    #[test]
    fn octal_mode_bits() {
        assert_eq!(octal("755"), Ok(493));
        assert_eq!(octal("0644"), Ok(420));
    }

    #[test]
    fn octal_stops_at_invalid_digit() {
        assert_eq!(octal("78"), Ok(7));
    }

    #[test]
    fn hex_with_and_without_prefix() {
        assert_eq!(hex("ff"), Ok(255));
        assert_eq!(hex("0xff"), Ok(255));
        assert_eq!(hex("DEAD"), Ok(0xDEAD));
    }

    // ── Errors ────────────────────────────────────────────────────

    #[test]
    fn empty_is_invalid() {
        assert_eq!(int(""), Err(ParseError::InvalidFormat));
    }

    #[test]
    fn no_digits_is_invalid() {
        assert_eq!(int("abc"), Err(ParseError::InvalidFormat));
        assert_eq!(int("-"), Err(ParseError::InvalidFormat));
        assert_eq!(octal("8"), Err(ParseError::InvalidFormat));
    }

    #[test]
    fn i32_bounds() {
        assert_eq!(int("2147483647"), Ok(i32::MAX));
        assert_eq!(int("-2147483648"), Ok(i32::MIN));
        assert_eq!(int("2147483648"), Err(ParseError::OutOfRange));
        assert_eq!(int("-2147483649"), Err(ParseError::OutOfRange));
    }

    #[test]
    fn huge_value_out_of_range() {
        assert_eq!(int("99999999999999999999999"), Err(ParseError::OutOfRange));
    }
}
