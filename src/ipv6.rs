//! IPv6 hosts. Serialization compresses the first longest run of zero pieces.

use crate::compat::String;
use crate::error::{ParseError, Result, ValidationError};
use crate::log::ValidationLog;
use core::fmt::Write;
use core::ops::Range;

/// Byte cursor over the inside of `[...]`.
struct Pieces<'a> {
    input: &'a [u8],
    pointer: usize,
}

impl Pieces<'_> {
    fn c(&self) -> Option<u8> {
        self.input.get(self.pointer).copied()
    }

    fn remaining_starts_with(&self, b: u8) -> bool {
        self.input.get(self.pointer + 1) == Some(&b)
    }
}

/// Parse the text between the brackets of an IPv6 host into 8 pieces.
///
/// `offset` is where the address starts in the parser input; errors are
/// logged at the byte that caused them.
pub fn parse_ipv6(input: &[u8], log: &mut ValidationLog, offset: usize) -> Result<[u16; 8]> {
    let mut fail = |pointer: usize, error: ParseError| -> Result<[u16; 8]> {
        log.push(offset + pointer, ValidationError::from(error));
        Err(error)
    };

    let mut address = [0u16; 8];
    let mut piece_index = 0usize;
    let mut compress: Option<usize> = None;
    let mut cur = Pieces { input, pointer: 0 };

    if cur.c() == Some(b':') {
        if !cur.remaining_starts_with(b':') {
            return fail(cur.pointer, ParseError::Ipv6InvalidCompression);
        }
        cur.pointer += 2;
        piece_index += 1;
        compress = Some(piece_index);
    }

    while let Some(c) = cur.c() {
        if piece_index == 8 {
            return fail(cur.pointer, ParseError::Ipv6TooManyPieces);
        }

        if c == b':' {
            if compress.is_some() {
                return fail(cur.pointer, ParseError::Ipv6MultipleCompression);
            }
            cur.pointer += 1;
            piece_index += 1;
            compress = Some(piece_index);
            continue;
        }

        let mut value: u16 = 0;
        let mut length = 0;
        while length < 4 {
            let Some(digit) = cur.c().and_then(|b| char::from(b).to_digit(16)) else {
                break;
            };
            value = value * 0x10 + digit as u16;
            cur.pointer += 1;
            length += 1;
        }

        match cur.c() {
            Some(b'.') => {
                if length == 0 {
                    return fail(cur.pointer, ParseError::Ipv4InIpv6InvalidCodePoint);
                }
                cur.pointer -= length;
                if piece_index > 6 {
                    return fail(cur.pointer, ParseError::Ipv4InIpv6TooManyPieces);
                }
                return parse_embedded_ipv4(cur, address, piece_index, compress, fail);
            }
            Some(b':') => {
                cur.pointer += 1;
                if cur.c().is_none() {
                    return fail(cur.pointer, ParseError::Ipv6InvalidCodePoint);
                }
            }
            Some(_) => return fail(cur.pointer, ParseError::Ipv6InvalidCodePoint),
            None => {}
        }

        address[piece_index] = value;
        piece_index += 1;
    }

    finish(address, piece_index, compress).or_else(|error| fail(cur.pointer, error))
}

/// Dotted-decimal tail filling the last two pieces.
fn parse_embedded_ipv4(
    mut cur: Pieces<'_>,
    mut address: [u16; 8],
    mut piece_index: usize,
    compress: Option<usize>,
    mut fail: impl FnMut(usize, ParseError) -> Result<[u16; 8]>,
) -> Result<[u16; 8]> {
    let mut numbers_seen = 0;

    while let Some(c) = cur.c() {
        if numbers_seen > 0 {
            if c == b'.' && numbers_seen < 4 {
                cur.pointer += 1;
            } else {
                return fail(cur.pointer, ParseError::Ipv4InIpv6InvalidCodePoint);
            }
        }

        if !cur.c().is_some_and(|b| b.is_ascii_digit()) {
            return fail(cur.pointer, ParseError::Ipv4InIpv6InvalidCodePoint);
        }

        let mut ipv4_piece: Option<u16> = None;
        while let Some(b) = cur.c().filter(u8::is_ascii_digit) {
            let number = u16::from(b - b'0');
            ipv4_piece = match ipv4_piece {
                None => Some(number),
                Some(0) => return fail(cur.pointer, ParseError::Ipv4InIpv6InvalidCodePoint),
                Some(piece) => Some(piece * 10 + number),
            };
            if ipv4_piece.is_some_and(|piece| piece > 255) {
                return fail(cur.pointer, ParseError::Ipv4InIpv6OutOfRangePart);
            }
            cur.pointer += 1;
        }

        address[piece_index] = address[piece_index] * 0x100 + ipv4_piece.unwrap_or(0);
        numbers_seen += 1;
        if numbers_seen == 2 || numbers_seen == 4 {
            piece_index += 1;
        }
    }

    if numbers_seen != 4 {
        return fail(cur.pointer, ParseError::Ipv4InIpv6TooFewParts);
    }

    finish(address, piece_index, compress).or_else(|error| fail(cur.pointer, error))
}

/// Move the pieces after the compression point to the end of the address.
fn finish(mut address: [u16; 8], piece_index: usize, compress: Option<usize>) -> Result<[u16; 8]> {
    match compress {
        Some(compress) => {
            let mut swaps = piece_index - compress;
            let mut index = 7;
            while index != 0 && swaps > 0 {
                address.swap(index, compress + swaps - 1);
                index -= 1;
                swaps -= 1;
            }
            Ok(address)
        }
        None if piece_index != 8 => Err(ParseError::Ipv6TooFewPieces),
        None => Ok(address),
    }
}

/// Serialize IPv6 pieces with brackets and zero compression.
pub fn serialize_ipv6_into(buffer: &mut String, pieces: &[u16; 8]) {
    let compress = find_longest_zero_sequence(pieces);

    buffer.push('[');
    let mut i = 0;
    while i < 8 {
        if let Some(range) = compress.as_ref().filter(|range| range.start == i) {
            buffer.push_str(if i == 0 { "::" } else { ":" });
            i = range.end;
            continue;
        }

        let _ = write!(buffer, "{:x}", pieces[i]);
        if i != 7 {
            buffer.push(':');
        }
        i += 1;
    }
    buffer.push(']');
}

pub fn serialize_ipv6(pieces: &[u16; 8]) -> String {
    let mut result = String::with_capacity(41);
    serialize_ipv6_into(&mut result, pieces);
    result
}

/// Leftmost longest run of two or more zero pieces.
fn find_longest_zero_sequence(pieces: &[u16; 8]) -> Option<Range<usize>> {
    let mut best: Option<Range<usize>> = None;
    let mut i = 0;

    while i < 8 {
        if pieces[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < 8 && pieces[i] == 0 {
            i += 1;
        }
        if i - start > 1 && best.as_ref().is_none_or(|b| i - start > b.len()) {
            best = Some(start..i);
        }
    }

    best
}
