/// Whether `host` ends in a number, per the WHATWG "ends in a number checker".
///
/// The last dot-separated part (ignoring one trailing empty part) must be all
/// ASCII digits, or `0x`/`0X` followed by hex digits.
pub fn ends_in_a_number(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    if host.is_empty() {
        return false;
    }

    let last = host.rsplit('.').next().unwrap_or(host);
    if !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }

    last.strip_prefix("0x")
        .or_else(|| last.strip_prefix("0X"))
        .is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Windows drive letter: ASCII alpha followed by `:` or `|`
pub fn is_windows_drive_letter(bytes: &[u8]) -> bool {
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && matches!(bytes[1], b':' | b'|')
}

/// Normalized Windows drive letter: ASCII alpha followed by `:`
pub fn is_normalized_windows_drive_letter(bytes: &[u8]) -> bool {
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Starts with a Windows drive letter: a drive letter followed by end of input
/// or one of `/ \ ? #`.
pub fn starts_with_windows_drive_letter(bytes: &[u8]) -> bool {
    bytes.len() >= 2
        && is_windows_drive_letter(&bytes[..2])
        && (bytes.len() == 2 || matches!(bytes[2], b'/' | b'\\' | b'?' | b'#'))
}

/// `.` or `%2e`, case-insensitive
pub fn is_single_dot_segment(segment: &[u8]) -> bool {
    segment == b"." || segment.eq_ignore_ascii_case(b"%2e")
}

/// `..` with any dot written as `%2e`, case-insensitive
pub fn is_double_dot_segment(segment: &[u8]) -> bool {
    match segment.len() {
        2 => segment == b"..",
        4 => {
            segment.eq_ignore_ascii_case(b".%2e") || segment.eq_ignore_ascii_case(b"%2e.")
        }
        6 => segment.eq_ignore_ascii_case(b"%2e%2e"),
        _ => false,
    }
}

/// URL code point, byte-wise: ASCII alphanumerics, `!$&'()*+,-./:;=?@_~`,
/// and every non-ASCII byte.
fn is_url_unit(b: u8) -> bool {
    b >= 0x80 || b.is_ascii_alphanumeric() || b"!$&'()*+,-./:;=?@_~".contains(&b)
}

/// Whether the byte at `i` is neither a URL code point nor the start of a
/// valid `%XX` sequence.
pub fn is_invalid_url_unit_at(bytes: &[u8], i: usize) -> bool {
    match bytes.get(i) {
        Some(b'%') => !matches!(
            bytes.get(i + 1..i + 3),
            Some([h, l]) if h.is_ascii_hexdigit() && l.is_ascii_hexdigit()
        ),
        Some(&b) => !is_url_unit(b),
        None => false,
    }
}

/// Position of the first byte that fails [`is_invalid_url_unit_at`].
pub fn first_invalid_url_unit(bytes: &[u8]) -> Option<usize> {
    (0..bytes.len()).find(|&i| is_invalid_url_unit_at(bytes, i))
}
