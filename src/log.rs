use crate::compat::Vec;
use crate::error::ValidationError;

/// A single validation finding: where in the (pre-processed) input it was
/// noticed and what it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub offset: usize,
    pub error: ValidationError,
}

/// Append-only record of validation errors produced while parsing.
#[derive(Debug, Clone, Default)]
pub struct ValidationLog {
    entries: Vec<Validation>,
}

impl ValidationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, offset: usize, error: ValidationError) {
        tracing::debug!(offset, %error, "url validation error");
        self.entries.push(Validation { offset, error });
    }

    pub fn entries(&self) -> &[Validation] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Validation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `error` was logged at least once.
    pub fn contains(&self, error: ValidationError) -> bool {
        self.entries.iter().any(|entry| entry.error == error)
    }

    /// Last entry, which after a failed parse is the fatal one.
    pub fn last(&self) -> Option<&Validation> {
        self.entries.last()
    }

    /// Drop all entries, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a ValidationLog {
    type Item = &'a Validation;
    type IntoIter = core::slice::Iter<'a, Validation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
