use crate::compat::{String, ToOwned, ToString, Vec};
use crate::unicode::percent_encode::{decode_to_string, encode_form_into};

/// An `application/x-www-form-urlencoded` list of name/value pairs.
///
/// Pairs keep their insertion order; names may repeat.
///
/// # Examples
///
/// ```
/// use wurl::UrlSearchParams;
///
/// let mut params = UrlSearchParams::parse("b=2&a=1+1");
/// assert_eq!(params.get("a"), Some("1 1"));
/// params.sort();
/// assert_eq!(params.to_string(), "a=1+1&b=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSearchParams {
    params: Vec<(String, String)>,
}

impl UrlSearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a form-urlencoded string. One leading `?` is ignored.
    ///
    /// `+` decodes to a space; bytes that are not valid UTF-8 after
    /// percent-decoding become U+FFFD.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((name, value)) => (decode_component(name), decode_component(value)),
                None => (decode_component(pair), String::new()),
            })
            .collect();

        Self { params }
    }

    pub fn append(&mut self, name: &str, value: &str) {
        self.params.push((name.to_string(), value.to_string()));
    }

    /// Remove every pair named `name`, or only those that also have `value`.
    pub fn delete(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.params.retain(|(n, v)| n != name || v != value),
            None => self.params.retain(|(n, _)| n != name),
        }
    }

    /// Value of the first pair named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, name: &str, value: Option<&str>) -> bool {
        match value {
            Some(value) => self.params.iter().any(|(n, v)| n == name && v == value),
            None => self.params.iter().any(|(n, _)| n == name),
        }
    }

    /// Give the first pair named `name` the new value and drop the others.
    /// Appends a pair when there was none.
    pub fn set(&mut self, name: &str, value: &str) {
        let mut seen = false;
        self.params.retain_mut(|(n, v)| {
            if n != name {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            value.clone_into(v);
            true
        });
        if !seen {
            self.append(name, value);
        }
    }

    /// Stable sort by name, comparing UTF-16 code units.
    pub fn sort(&mut self) {
        self.params
            .sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
    }

    pub fn size(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Same as [`UrlSearchParams::iter`].
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(n, _)| n.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }
}

/// Form-urlencoded serialization, without a leading `?`.
impl core::fmt::Display for UrlSearchParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut output = String::new();
        for (i, (name, value)) in self.params.iter().enumerate() {
            if i > 0 {
                output.push('&');
            }
            encode_form_into(&mut output, name);
            output.push('=');
            encode_form_into(&mut output, value);
        }
        f.write_str(&output)
    }
}

fn decode_component(input: &str) -> String {
    if input.contains('+') {
        decode_to_string(input.replace('+', " ").as_bytes()).into_owned()
    } else {
        decode_to_string(input.as_bytes()).into_owned()
    }
}

impl From<&str> for UrlSearchParams {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for UrlSearchParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.append(name, value);
        }
        params
    }
}
