use crate::compat::String;
use crate::types::{SchemeDescriptor, SchemeType};

/// Look up a scheme name in the special-scheme table.
/// ASCII case-insensitive; dispatches on length and first byte before comparing.
pub fn lookup(name: &[u8]) -> SchemeDescriptor {
    let kind = match (name.len(), name.first().map(u8::to_ascii_lowercase)) {
        (2, Some(b'w')) if name.eq_ignore_ascii_case(b"ws") => SchemeType::Ws,
        (3, Some(b'w')) if name.eq_ignore_ascii_case(b"wss") => SchemeType::Wss,
        (3, Some(b'f')) if name.eq_ignore_ascii_case(b"ftp") => SchemeType::Ftp,
        (4, Some(b'h')) if name.eq_ignore_ascii_case(b"http") => SchemeType::Http,
        (4, Some(b'f')) if name.eq_ignore_ascii_case(b"file") => SchemeType::File,
        (5, Some(b'h')) if name.eq_ignore_ascii_case(b"https") => SchemeType::Https,
        _ => SchemeType::NotSpecial,
    };
    SchemeDescriptor::from(kind)
}

/// A URL's scheme: its kind plus the lowercase name it was written with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scheme {
    pub kind: SchemeType,
    pub name: String,
}

impl Scheme {
    /// Build from an already lowercased name.
    pub fn new(name: String) -> Self {
        let kind = lookup(name.as_bytes()).kind;
        Self { kind, name }
    }

    pub fn is_special(&self) -> bool {
        self.kind.is_special()
    }

    pub fn default_port(&self) -> Option<u16> {
        self.kind.default_port()
    }
}
