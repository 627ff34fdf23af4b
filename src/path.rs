use crate::checkers::is_normalized_windows_drive_letter;
use crate::compat::{String, Vec};
use crate::types::SchemeType;

/// A URL path: either one opaque string or a list of percent-encoded segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Path {
    Opaque(String),
    List(Vec<String>),
}

impl Default for Path {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl Path {
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }

    /// Segments of a list path; empty for an opaque path.
    pub fn segments(&self) -> &[String] {
        match self {
            Self::List(segments) => segments,
            Self::Opaque(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(segments) => segments.is_empty(),
            Self::Opaque(path) => path.is_empty(),
        }
    }

    /// Append a segment. On an opaque path this appends to the string.
    pub fn append(&mut self, segment: &str) {
        match self {
            Self::List(segments) => segments.push(String::from(segment)),
            Self::Opaque(path) => path.push_str(segment),
        }
    }

    /// Append a segment that is already percent-encoded, without copying it.
    pub fn push_already_encoded(&mut self, segment: String) {
        match self {
            Self::List(segments) => segments.push(segment),
            Self::Opaque(path) => path.push_str(&segment),
        }
    }

    /// Remove the last segment, except that a `file` path consisting of
    /// a single normalized drive letter is kept.
    pub fn shorten(&mut self, scheme: SchemeType) {
        let Self::List(segments) = self else {
            return;
        };
        if scheme.is_file()
            && segments.len() == 1
            && is_normalized_windows_drive_letter(segments[0].as_bytes())
        {
            return;
        }
        segments.pop();
    }

    /// Switch to an empty opaque path.
    pub fn reset_to_opaque(&mut self) {
        *self = Self::Opaque(String::new());
    }

    /// Switch to an empty segment list.
    pub fn reset_to_list(&mut self) {
        *self = Self::List(Vec::new());
    }

    /// Mutable access to the opaque string, if this is one.
    pub(crate) fn opaque_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Opaque(path) => Some(path),
            Self::List(_) => None,
        }
    }

    /// Append the serialized path: the opaque string, or each segment
    /// prefixed with `/`.
    pub fn serialize_into(&self, buffer: &mut String) {
        match self {
            Self::Opaque(path) => buffer.push_str(path),
            Self::List(segments) => {
                for segment in segments {
                    buffer.push('/');
                    buffer.push_str(segment);
                }
            }
        }
    }
}
