//! IPv4 hosts, written in decimal, octal or hexadecimal parts.

use crate::compat::{String, Vec};
use crate::error::{ParseError, Result, ValidationError};
use crate::log::ValidationLog;
use core::fmt::Write;

/// Parse an IPv4 address string into a u32.
/// Supports:
/// - Decimal: 192.168.1.1
/// - Hex: 0xC0A80101
/// - Octal: 0300.0250.01.01
/// - Mixed: 192.0x00A80001
/// - Fewer than four parts, where the last part fills the remaining bytes: 127.1
///
/// `offset` is where the host starts in the parser input. Findings are
/// logged at the part they concern.
pub fn parse_ipv4(input: &str, log: &mut ValidationLog, offset: usize) -> Result<u32> {
    let mut parts: Vec<(usize, &str)> = Vec::with_capacity(4);
    let mut at = offset;
    for part in input.split('.') {
        parts.push((at, part));
        at += part.len() + 1;
    }

    if parts.last().is_some_and(|(_, last)| last.is_empty()) {
        // At the trailing dot
        log.push(
            offset + input.len().saturating_sub(1),
            ValidationError::Ipv4EmptyPart,
        );
        if parts.len() > 1 {
            parts.pop();
        }
    }

    if let Some(&(at, _)) = parts.get(4) {
        log.push(at, ValidationError::Ipv4TooManyParts);
        return Err(ParseError::Ipv4TooManyParts);
    }

    let mut numbers = [0u64; 4];
    let mut first_non_decimal = None;
    for (slot, &(at, part)) in numbers.iter_mut().zip(&parts) {
        let Some((number, radix)) = parse_ipv4_number(part) else {
            log.push(at, ValidationError::Ipv4NonNumericPart);
            return Err(ParseError::Ipv4NonNumericPart);
        };
        if radix != 10 && first_non_decimal.is_none() {
            first_non_decimal = Some(at);
        }
        *slot = number;
    }
    if let Some(at) = first_non_decimal {
        log.push(at, ValidationError::Ipv4NonDecimalPart);
    }

    let count = parts.len();
    let numbers = &numbers[..count];
    if let Some(i) = numbers.iter().position(|&n| n > 255) {
        log.push(parts[i].0, ValidationError::Ipv4OutOfRangePart);
        if i < count - 1 {
            return Err(ParseError::Ipv4OutOfRangePart);
        }
    }

    // The last number absorbs 256^(5 - n) worth of range
    let last = numbers[count - 1];
    if last >= 256u64.pow((5 - count) as u32) {
        log.push(parts[count - 1].0, ValidationError::Ipv4OutOfRangePart);
        return Err(ParseError::Ipv4OutOfRangePart);
    }

    let mut ipv4 = last;
    for (i, &number) in numbers[..count - 1].iter().enumerate() {
        ipv4 += number << (8 * (3 - i));
    }

    Ok(ipv4 as u32)
}

/// Parse a single IPv4 number component (supports decimal, hex, octal).
/// Returns the value (saturating at `u64::MAX`) and the radix it was read in.
fn parse_ipv4_number(input: &str) -> Option<(u64, u32)> {
    if input.is_empty() {
        return None;
    }

    let (digits, radix) = if let Some(hex) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        (hex, 16)
    } else if input.len() >= 2 && input.starts_with('0') {
        (&input[1..], 8)
    } else {
        (input, 10)
    };

    // Bare "0x" is zero
    if digits.is_empty() {
        return Some((0, radix));
    }

    let mut value: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        value = value
            .saturating_mul(u64::from(radix))
            .saturating_add(u64::from(digit));
    }
    Some((value, radix))
}

/// Serialize an IPv4 address (u32) to dotted decimal notation
pub fn serialize_ipv4_into(buffer: &mut String, ipv4: u32) {
    let [a, b, c, d] = ipv4.to_be_bytes();
    let _ = write!(buffer, "{a}.{b}.{c}.{d}");
}

pub fn serialize_ipv4(ipv4: u32) -> String {
    let mut result = String::with_capacity(15);
    serialize_ipv4_into(&mut result, ipv4);
    result
}
