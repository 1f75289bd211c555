//! UTF-16 code unit helpers.

use crate::CodePoint;

/// The most code units one code point takes.
pub const MAX_UNIT_COUNT: usize = 2;

const HIGH_SURROGATE_FIRST: u16 = 0xD800;
const HIGH_SURROGATE_LAST: u16 = 0xDBFF;
const LOW_SURROGATE_FIRST: u16 = 0xDC00;
const LOW_SURROGATE_LAST: u16 = 0xDFFF;
const SUPPLEMENTARY_FIRST: u32 = 0x1_0000;
const SURROGATE_VALUE_MASK: u16 = 0x03FF;

/// Returns `true` if `unit` is a leading surrogate.
#[inline]
pub fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_FIRST..=HIGH_SURROGATE_LAST).contains(&unit)
}

/// Returns `true` if `unit` is a trailing surrogate.
#[inline]
pub fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_FIRST..=LOW_SURROGATE_LAST).contains(&unit)
}

/// Returns `true` if `code` lies in the surrogate block, paired or not.
#[inline]
pub fn is_surrogate(code: CodePoint) -> bool {
    (HIGH_SURROGATE_FIRST as u32..=LOW_SURROGATE_LAST as u32).contains(&code)
}

/// Returns `true` if `code` is a Unicode scalar value.
#[inline]
pub fn is_scalar_value(code: CodePoint) -> bool {
    code <= char::MAX as u32 && !is_surrogate(code)
}

/// The number of code units `code` takes.
pub fn len(code: CodePoint) -> usize {
    if code < SUPPLEMENTARY_FIRST {
        1
    } else {
        2
    }
}

#[inline]
fn decode_surrogate_pair(high: u16, low: u16) -> CodePoint {
    SUPPLEMENTARY_FIRST
        + (((high & SURROGATE_VALUE_MASK) as u32) << 10)
        + (low & SURROGATE_VALUE_MASK) as u32
}

/// Decodes the code point at the head of `units`, returning it with its width.
///
/// Isolated surrogates are returned verbatim with a width of one.
pub fn decode_first(units: &[u16]) -> Option<(CodePoint, usize)> {
    match *units {
        [] => None,
        [high, low, ..] if is_high_surrogate(high) && is_low_surrogate(low) => {
            Some((decode_surrogate_pair(high, low), 2))
        }
        [unit, ..] => Some((unit as CodePoint, 1)),
    }
}

/// Decodes the code point at the tail of `units`, returning it with its width.
pub fn decode_last(units: &[u16]) -> Option<(CodePoint, usize)> {
    match *units {
        [] => None,
        [.., high, low] if is_high_surrogate(high) && is_low_surrogate(low) => {
            Some((decode_surrogate_pair(high, low), 2))
        }
        [.., unit] => Some((unit as CodePoint, 1)),
    }
}

/// Encodes `code` into `buf`, returning the number of units written.
///
/// Values that are not representable in UTF-16 are written as U+FFFD.
pub fn encode_utf16(code: CodePoint, buf: &mut [u16; MAX_UNIT_COUNT]) -> usize {
    let code = if code > char::MAX as u32 { 0xFFFD } else { code };
    match (len(code), &mut buf[..]) {
        (1, [a, ..]) => {
            *a = code as u16;
            1
        }
        (_, [a, b]) => {
            let value = code - SUPPLEMENTARY_FIRST;
            *a = HIGH_SURROGATE_FIRST | (value >> 10) as u16;
            *b = LOW_SURROGATE_FIRST | (value as u16 & SURROGATE_VALUE_MASK);
            2
        }
        _ => 0,
    }
}

/// Encodes a sequence of code points.
pub fn encode_all(code_points: &[CodePoint]) -> Vec<u16> {
    let mut out = Vec::with_capacity(code_points.len());
    let mut buf = [0u16; MAX_UNIT_COUNT];
    for &cp in code_points {
        let n = encode_utf16(cp, &mut buf);
        out.extend_from_slice(&buf[..n]);
    }
    out
}

/// Decodes `units`, passing isolated surrogates through.
pub fn decode_all(units: &[u16]) -> Vec<CodePoint> {
    let mut out = Vec::with_capacity(units.len());
    let mut rest = units;
    while let Some((cp, width)) = decode_first(rest) {
        out.push(cp);
        rest = &rest[width..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pairs() {
        let units: Vec<u16> = "a\u{1F600}b".encode_utf16().collect();
        assert_eq!(Some((0x61, 1)), decode_first(&units));
        assert_eq!(Some((0x1F600, 2)), decode_first(&units[1..]));
        assert_eq!(Some((0x1F600, 2)), decode_last(&units[..3]));
        assert_eq!(Some((0x62, 1)), decode_last(&units));
        assert_eq!(None, decode_first(&[]));
    }

    #[test]
    fn test_isolated_surrogates() {
        assert_eq!(Some((0xD83D, 1)), decode_first(&[0xD83D, 0x0041]));
        assert_eq!(Some((0xDE00, 1)), decode_last(&[0x0041, 0xDE00]));
        assert_eq!(vec![0xDE00, 0xD83D], decode_all(&[0xDE00, 0xD83D]));
        assert_eq!(vec![0xDE00, 0xD83D], encode_all(&[0xDE00, 0xD83D]));
    }

    #[test]
    fn test_encode() {
        let mut buf = [0u16; MAX_UNIT_COUNT];
        assert_eq!(1, encode_utf16(0x3042, &mut buf));
        assert_eq!(0x3042, buf[0]);
        assert_eq!(2, encode_utf16(0x10FFFF, &mut buf));
        assert_eq!([0xDBFF, 0xDFFF], buf);
        let s = "\u{AC00}x\u{20000}";
        assert_eq!(
            s.encode_utf16().collect::<Vec<_>>(),
            encode_all(&s.chars().map(|c| c as u32).collect::<Vec<_>>())
        );
    }

    #[test]
    fn test_scalar_values() {
        assert!(is_scalar_value(0x10FFFF));
        assert!(!is_scalar_value(0x110000));
        assert!(!is_scalar_value(0xDFFF));
        assert!(is_surrogate(0xD800));
    }
}
