use crate::compat::{Cow, String, Vec};
use core::fmt::Write;
use encoding_rs::{EncoderResult, Encoding, UTF_8};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode, percent_encode};

// Encode sets from https://url.spec.whatwg.org/#percent-encoded-bytes.
// Bytes >= 0x80 are always encoded by `percent_encode`.

/// C0 control percent-encode set (C0 controls and DEL)
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Query percent-encode set (non-special URLs)
/// C0 control + space, ", #, <, >
pub const QUERY_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>');

/// Special-query percent-encode set: query + '
pub const SPECIAL_QUERY_SET: &AsciiSet = &QUERY_SET.add(b'\'');

/// Path percent-encode set: query + ?, ^, \`, {, }
pub const PATH_SET: &AsciiSet = &QUERY_SET
    .add(b'?')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Userinfo percent-encode set
/// Path + /, :, ;, =, @, [, \, ], |
pub const USERINFO_SET: &AsciiSet = &PATH_SET
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'|');

/// Component percent-encode set: userinfo + $, %, &, +, ,
pub const COMPONENT_SET: &AsciiSet = &USERINFO_SET
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',');

/// `application/x-www-form-urlencoded` percent-encode set
pub const FORM_URLENCODED_SET: &AsciiSet = &COMPONENT_SET
    .add(b'!')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'~');

/// Percent-encode `input` with `encode_set`.
pub fn encode(input: &[u8], encode_set: &'static AsciiSet) -> String {
    let mut out = String::with_capacity(input.len());
    encode_into(&mut out, input, encode_set);
    out
}

/// Percent-encode `input` into `buffer`.
pub fn encode_into(buffer: &mut String, input: &[u8], encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for chunk in percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode with spaces written as `+`, as
/// `application/x-www-form-urlencoded` serialization does.
pub fn encode_form_into(buffer: &mut String, input: &str) {
    for chunk in percent_encode(input.as_bytes(), FORM_URLENCODED_SET) {
        if chunk == "%20" {
            buffer.push('+');
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Percent-encode `input` after encoding it in `encoding`.
///
/// Code points `encoding` cannot represent are written as a percent-encoded
/// `&#N;` numeric character reference.
pub fn encode_with_encoding(
    buffer: &mut String,
    input: &str,
    encoding: &'static Encoding,
    encode_set: &'static AsciiSet,
) {
    let encoding = encoding.output_encoding();
    if encoding == UTF_8 {
        encode_into(buffer, input.as_bytes(), encode_set);
        return;
    }

    let mut encoder = encoding.new_encoder();
    let mut scratch = [0u8; 256];
    let mut remaining = input;
    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(remaining, &mut scratch, true);
        encode_into(buffer, &scratch[..written], encode_set);
        remaining = &remaining[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(c) => {
                let _ = write!(buffer, "%26%23{}%3B", u32::from(c));
            }
        }
    }
}

/// Percent-decode `input`. Malformed `%` sequences are kept literally.
pub fn decode(input: &[u8]) -> Vec<u8> {
    percent_decode(input).collect()
}

/// Percent-decode and then UTF-8 decode, replacing invalid sequences.
pub fn decode_to_string(input: &[u8]) -> Cow<'_, str> {
    percent_decode(input).decode_utf8_lossy()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_decode() {
        assert_eq!(decode(b"%"), b"%");
        assert_eq!(decode(b"%zz"), b"%zz");
        assert_eq!(decode(b"%41"), b"A");
        assert_eq!(decode(b"%4"), b"%4");
        assert_eq!(decode_to_string(b"hello%20world"), "hello world");
        assert_eq!(decode_to_string(b"%C3%A9"), "\u{e9}");
    }

    #[test]
    fn test_encode_sets() {
        assert_eq!(encode(b"a b", FRAGMENT_SET), "a%20b");
        assert_eq!(encode(b"`", FRAGMENT_SET), "%60");
        assert_eq!(encode(b"`", QUERY_SET), "`");
        assert_eq!(encode(b"'", QUERY_SET), "'");
        assert_eq!(encode(b"'", SPECIAL_QUERY_SET), "%27");
        assert_eq!(encode(b"a?b{}", PATH_SET), "a%3Fb%7B%7D");
        assert_eq!(encode(b"u:p@", USERINFO_SET), "u%3Ap%40");
        assert_eq!(encode(b"$&+,", COMPONENT_SET), "%24%26%2B%2C");
        assert_eq!(encode(b"\x7f\x01", C0_CONTROL_SET), "%7F%01");
        assert_eq!(encode("\u{e9}".as_bytes(), C0_CONTROL_SET), "%C3%A9");
    }

    #[test]
    fn test_encode_form() {
        let mut out = String::new();
        encode_form_into(&mut out, "a b+c~");
        assert_eq!(out, "a+b%2Bc%7E");
    }

    #[test]
    fn test_encode_with_legacy_encoding() {
        let mut out = String::new();
        encode_with_encoding(
            &mut out,
            "\u{e9}\u{3042}",
            encoding_rs::WINDOWS_1252,
            SPECIAL_QUERY_SET,
        );
        assert_eq!(out, "%E9%26%2312354%3B");

        out.clear();
        encode_with_encoding(&mut out, "\u{e9}", encoding_rs::UTF_16LE, QUERY_SET);
        assert_eq!(out, "%C3%A9");
    }
}
