/// Which special scheme a URL has, if any.
///
/// Special schemes change how hosts, paths and queries are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    File,
    #[default]
    NotSpecial,
}

impl SchemeType {
    pub fn is_special(self) -> bool {
        self != Self::NotSpecial
    }

    /// Port that serializes as no port
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::File | Self::NotSpecial => None,
        }
    }

    pub fn is_file(self) -> bool {
        self == Self::File
    }
}

/// Result of a scheme table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeDescriptor {
    pub kind: SchemeType,
    pub default_port: Option<u16>,
}

impl From<SchemeType> for SchemeDescriptor {
    fn from(kind: SchemeType) -> Self {
        Self {
            kind,
            default_port: kind.default_port(),
        }
    }
}
