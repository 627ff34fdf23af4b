use crate::character_sets::{is_forbidden_domain_code_point, is_forbidden_host_code_point};
use crate::checkers::{ends_in_a_number, first_invalid_url_unit};
use crate::compat::String;
use crate::error::{ParseError, Result, ValidationError};
use crate::ipv4::{parse_ipv4, serialize_ipv4_into};
use crate::ipv6::{parse_ipv6, serialize_ipv6_into};
use crate::log::ValidationLog;
use crate::unicode::idna::{domain_to_ascii, domain_to_unicode};
use crate::unicode::percent_encode::{C0_CONTROL_SET, decode, encode};

/// A URL's host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Host {
    /// No authority at all
    #[default]
    Undefined,
    /// Authority with a zero-length host (`file:///`, `sc://`)
    Empty,
    Domain(String),
    Ipv4(u32),
    Ipv6([u16; 8]),
    Opaque(String),
}

impl Host {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Undefined or empty; such hosts cannot carry credentials or a port.
    pub fn is_null_or_empty(&self) -> bool {
        matches!(self, Self::Undefined | Self::Empty)
    }

    /// Append the ASCII serialization of this host.
    pub fn serialize_into(&self, buffer: &mut String) {
        match self {
            Self::Undefined | Self::Empty => {}
            Self::Domain(domain) | Self::Opaque(domain) => buffer.push_str(domain),
            Self::Ipv4(address) => serialize_ipv4_into(buffer, *address),
            Self::Ipv6(pieces) => serialize_ipv6_into(buffer, pieces),
        }
    }

    /// Like [`serialize_into`](Self::serialize_into), but domain and opaque
    /// hosts go through IDNA "domain to Unicode".
    pub fn serialize_unicode_into(&self, buffer: &mut String) {
        match self {
            Self::Domain(domain) | Self::Opaque(domain) => {
                let (unicode, ok) = domain_to_unicode(domain);
                if !ok {
                    tracing::debug!(domain = %domain, "domain to Unicode reported errors");
                }
                buffer.push_str(&unicode);
            }
            _ => self.serialize_into(buffer),
        }
    }
}

impl core::fmt::Display for Host {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut buffer = String::new();
        self.serialize_into(&mut buffer);
        f.write_str(&buffer)
    }
}

/// Parse a host.
///
/// `is_opaque` is true for hosts of non-special URLs. `offset` is where the
/// host starts in the parser input, used for logging.
pub fn parse_host(
    input: &str,
    is_opaque: bool,
    log: &mut ValidationLog,
    offset: usize,
) -> Result<Host> {
    if let Some(inner) = input.strip_prefix('[') {
        let Some(inner) = inner.strip_suffix(']') else {
            log.push(offset, ValidationError::Ipv6Unclosed);
            return Err(ParseError::Ipv6Unclosed);
        };
        return parse_ipv6(inner.as_bytes(), log, offset + 1).map(Host::Ipv6);
    }

    if is_opaque {
        return parse_opaque_host(input, log, offset);
    }

    let decoded = decode(input.as_bytes());
    let ascii = match domain_to_ascii(&decoded) {
        Ok(ascii) => ascii,
        Err(error) => {
            log.push(offset, ValidationError::DomainToAscii);
            return Err(error);
        }
    };

    if let Some(pos) = ascii.bytes().position(is_forbidden_domain_code_point) {
        log.push(offset + pos, ValidationError::DomainInvalidCodePoint);
        return Err(ParseError::DomainInvalidCodePoint);
    }

    if ends_in_a_number(&ascii) {
        return parse_ipv4(&ascii, log, offset).map(Host::Ipv4);
    }

    Ok(Host::Domain(ascii.into_owned()))
}

fn parse_opaque_host(input: &str, log: &mut ValidationLog, offset: usize) -> Result<Host> {
    if let Some(pos) = input.bytes().position(is_forbidden_host_code_point) {
        log.push(offset + pos, ValidationError::HostInvalidCodePoint);
        return Err(ParseError::HostInvalidCodePoint);
    }
    if let Some(pos) = first_invalid_url_unit(input.as_bytes()) {
        log.push(offset + pos, ValidationError::InvalidUrlUnit);
    }
    Ok(Host::Opaque(encode(input.as_bytes(), C0_CONTROL_SET)))
}
