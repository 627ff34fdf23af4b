use thiserror::Error;

/// Fatal URL parsing failures.
///
/// When one of these is returned no URL record is produced, and setters leave
/// the URL untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// Input has no scheme and there is no usable base URL
    #[error("missing scheme in non-relative URL")]
    MissingSchemeNonRelativeUrl,
    /// Scheme override value is not a scheme
    #[error("invalid scheme")]
    InvalidScheme,
    /// Special URL with an empty host
    #[error("host is missing")]
    HostMissing,
    /// Opaque host contains a forbidden host code point
    #[error("invalid code point in host")]
    HostInvalidCodePoint,
    /// Domain contains a forbidden domain code point
    #[error("invalid code point in domain")]
    DomainInvalidCodePoint,
    /// IDNA "domain to ASCII" failed or returned an empty string
    #[error("domain to ASCII conversion failed")]
    DomainToAscii,
    /// Port is not followed by a delimiter
    #[error("invalid port")]
    PortInvalid,
    /// Port exceeds 65535
    #[error("port out of range")]
    PortOutOfRange,
    /// IPv4 address has more than four parts
    #[error("IPv4 address has too many parts")]
    Ipv4TooManyParts,
    /// IPv4 part is not a number
    #[error("IPv4 address has a non-numeric part")]
    Ipv4NonNumericPart,
    /// IPv4 part or combined value overflows
    #[error("IPv4 address part out of range")]
    Ipv4OutOfRangePart,
    /// `[` without a closing `]`
    #[error("IPv6 address is unclosed")]
    Ipv6Unclosed,
    /// Address starts with a single `:`
    #[error("IPv6 address has invalid compression")]
    Ipv6InvalidCompression,
    /// More than eight pieces
    #[error("IPv6 address has too many pieces")]
    Ipv6TooManyPieces,
    /// Second `::`
    #[error("IPv6 address has multiple compressions")]
    Ipv6MultipleCompression,
    /// Unexpected code point in an IPv6 address
    #[error("invalid code point in IPv6 address")]
    Ipv6InvalidCodePoint,
    /// Fewer than eight pieces without compression
    #[error("IPv6 address has too few pieces")]
    Ipv6TooFewPieces,
    /// Embedded IPv4 starts after more than six pieces
    #[error("IPv4 in IPv6 address has too many pieces")]
    Ipv4InIpv6TooManyPieces,
    /// Embedded IPv4 contains something other than digits and dots
    #[error("invalid code point in IPv4 in IPv6 address")]
    Ipv4InIpv6InvalidCodePoint,
    /// Embedded IPv4 part exceeds 255
    #[error("IPv4 in IPv6 address part out of range")]
    Ipv4InIpv6OutOfRangePart,
    /// Embedded IPv4 has fewer than four parts
    #[error("IPv4 in IPv6 address has too few parts")]
    Ipv4InIpv6TooFewParts,
}

/// Validation errors, fatal or not.
///
/// These are what the [`ValidationLog`](crate::ValidationLog) records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("domain to ASCII conversion failed")]
    DomainToAscii,
    #[error("domain to Unicode conversion reported an error")]
    DomainToUnicode,
    #[error("invalid code point in domain")]
    DomainInvalidCodePoint,
    #[error("invalid code point in host")]
    HostInvalidCodePoint,
    #[error("IPv4 address has an empty part")]
    Ipv4EmptyPart,
    #[error("IPv4 address has too many parts")]
    Ipv4TooManyParts,
    #[error("IPv4 address has a non-numeric part")]
    Ipv4NonNumericPart,
    #[error("IPv4 address has a non-decimal part")]
    Ipv4NonDecimalPart,
    #[error("IPv4 address part out of range")]
    Ipv4OutOfRangePart,
    #[error("IPv6 address is unclosed")]
    Ipv6Unclosed,
    #[error("IPv6 address has invalid compression")]
    Ipv6InvalidCompression,
    #[error("IPv6 address has too many pieces")]
    Ipv6TooManyPieces,
    #[error("IPv6 address has multiple compressions")]
    Ipv6MultipleCompression,
    #[error("invalid code point in IPv6 address")]
    Ipv6InvalidCodePoint,
    #[error("IPv6 address has too few pieces")]
    Ipv6TooFewPieces,
    #[error("IPv4 in IPv6 address has too many pieces")]
    Ipv4InIpv6TooManyPieces,
    #[error("invalid code point in IPv4 in IPv6 address")]
    Ipv4InIpv6InvalidCodePoint,
    #[error("IPv4 in IPv6 address part out of range")]
    Ipv4InIpv6OutOfRangePart,
    #[error("IPv4 in IPv6 address has too few parts")]
    Ipv4InIpv6TooFewParts,
    #[error("invalid URL unit")]
    InvalidUrlUnit,
    #[error("special scheme missing following solidus")]
    SpecialSchemeMissingFollowingSolidus,
    #[error("missing scheme in non-relative URL")]
    MissingSchemeNonRelativeUrl,
    #[error("invalid reverse solidus")]
    InvalidReverseSolidus,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("host is missing")]
    HostMissing,
    #[error("port out of range")]
    PortOutOfRange,
    #[error("invalid port")]
    PortInvalid,
    #[error("invalid Windows drive letter")]
    FileInvalidWindowsDriveLetter,
    #[error("invalid Windows drive letter host")]
    FileInvalidWindowsDriveLetterHost,
    #[error("localhost file host folded to empty host")]
    FileHostLocalhost,
    #[error("invalid scheme")]
    InvalidScheme,
}

impl From<ParseError> for ValidationError {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::MissingSchemeNonRelativeUrl => Self::MissingSchemeNonRelativeUrl,
            ParseError::InvalidScheme => Self::InvalidScheme,
            ParseError::HostMissing => Self::HostMissing,
            ParseError::HostInvalidCodePoint => Self::HostInvalidCodePoint,
            ParseError::DomainInvalidCodePoint => Self::DomainInvalidCodePoint,
            ParseError::DomainToAscii => Self::DomainToAscii,
            ParseError::PortInvalid => Self::PortInvalid,
            ParseError::PortOutOfRange => Self::PortOutOfRange,
            ParseError::Ipv4TooManyParts => Self::Ipv4TooManyParts,
            ParseError::Ipv4NonNumericPart => Self::Ipv4NonNumericPart,
            ParseError::Ipv4OutOfRangePart => Self::Ipv4OutOfRangePart,
            ParseError::Ipv6Unclosed => Self::Ipv6Unclosed,
            ParseError::Ipv6InvalidCompression => Self::Ipv6InvalidCompression,
            ParseError::Ipv6TooManyPieces => Self::Ipv6TooManyPieces,
            ParseError::Ipv6MultipleCompression => Self::Ipv6MultipleCompression,
            ParseError::Ipv6InvalidCodePoint => Self::Ipv6InvalidCodePoint,
            ParseError::Ipv6TooFewPieces => Self::Ipv6TooFewPieces,
            ParseError::Ipv4InIpv6TooManyPieces => Self::Ipv4InIpv6TooManyPieces,
            ParseError::Ipv4InIpv6InvalidCodePoint => Self::Ipv4InIpv6InvalidCodePoint,
            ParseError::Ipv4InIpv6OutOfRangePart => Self::Ipv4InIpv6OutOfRangePart,
            ParseError::Ipv4InIpv6TooFewParts => Self::Ipv4InIpv6TooFewParts,
        }
    }
}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
