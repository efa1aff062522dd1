//! Base-36 integer encoding for the reserved checksum entry
//!
//! Matches the Java `Integer.toString(i, 36)` / `Integer.parseInt(s, 36)`
//! convention: lowercase digits `0-9a-z`, a leading `-` for negative
//! values, and an optional `+` accepted on parse.

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Encode a signed 32-bit integer as lowercase base-36.
pub fn encode(value: i32) -> String {
    // Widen so that i32::MIN can be negated.
    let mut magnitude = (value as i64).unsigned_abs();
    if magnitude == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(DIGITS[(magnitude % 36) as usize]);
        magnitude /= 36;
    }
    if value < 0 {
        digits.push(b'-');
    }
    digits.reverse();
    String::from_utf8(digits).expect("base-36 digits are ASCII")
}

/// Decode a base-36 string into a signed 32-bit integer.
///
/// Returns `None` for empty input, invalid digits, or values outside the
/// `i32` range. Uppercase digits are accepted.
pub fn decode(text: &str) -> Option<i32> {
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() {
        return None;
    }

    let mut accumulated: i64 = 0;
    for byte in digits.bytes() {
        let digit = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'z' => byte - b'a' + 10,
            b'A'..=b'Z' => byte - b'A' + 10,
            _ => return None,
        };
        accumulated = accumulated.checked_mul(36)?.checked_add(digit as i64)?;
        if accumulated > -(i32::MIN as i64) {
            return None;
        }
    }
    let signed = if negative { -accumulated } else { accumulated };
    i32::try_from(signed).ok()
}
