use crate::compat::{Cow, String};
use crate::error::{ParseError, Result};

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if domain contains Punycode (xn-- prefix, case insensitive)
pub fn has_punycode(domain: &[u8]) -> bool {
    if domain.len() < 4 {
        return false;
    }

    if is_punycode_prefix(domain) {
        return true;
    }

    memchr::memchr_iter(b'.', domain).any(|pos| is_punycode_prefix(&domain[pos + 1..]))
}

/// UTS #46 "domain to ASCII" with no ASCII deny list.
///
/// Forbidden code points are left in place; the host parser rejects them
/// afterwards so it can report which rule was broken.
pub fn domain_to_ascii(domain: &[u8]) -> Result<Cow<'_, str>> {
    // Pure ASCII without Punycode only needs lowercasing
    if domain.is_ascii() && !has_punycode(domain) {
        let ascii = domain.to_ascii_lowercase();
        let ascii = String::from_utf8(ascii).map_err(|_| ParseError::DomainToAscii)?;
        return if ascii.is_empty() {
            Err(ParseError::DomainToAscii)
        } else {
            Ok(Cow::Owned(ascii))
        };
    }

    match ::idna::domain_to_ascii_cow(domain, ::idna::AsciiDenyList::EMPTY) {
        Ok(ascii) if !ascii.is_empty() => Ok(ascii),
        _ => Err(ParseError::DomainToAscii),
    }
}

/// UTS #46 "domain to Unicode". Returns the converted domain and whether
/// conversion reported errors; the domain is usable either way.
pub fn domain_to_unicode(domain: &str) -> (String, bool) {
    if !has_punycode(domain.as_bytes()) {
        return (String::from(domain), true);
    }
    let (unicode, result) = ::idna::domain_to_unicode(domain);
    (unicode, result.is_ok())
}
