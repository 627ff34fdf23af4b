use crate::compat::{String, ToString, format};
use crate::error::Result;
use crate::host::Host;
use crate::parser::{Parseable, Parser};
use crate::path::Path;
use crate::scheme::Scheme;
use crate::serializer;
use crate::types::SchemeType;
use crate::url_search_params::UrlSearchParams;

/// A parsed URL record.
///
/// Components are stored separately; `href` is kept serialized alongside them
/// and refreshed after every successful parse or setter.
#[derive(Debug, Clone, Default)]
pub struct Url {
    pub(crate) scheme: Scheme,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) host: Host,
    pub(crate) port: Option<u16>,
    pub(crate) path: Path,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
    pub(crate) serialization: String,
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.serialization == other.serialization
    }
}

impl Eq for Url {}

impl core::hash::Hash for Url {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.serialization.hash(state);
    }
}

impl Url {
    /// Parse a URL string with an optional base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid according to the WHATWG URL Standard.
    pub fn parse(input: &str, base: Option<&str>) -> Result<Self> {
        let mut parser = Parser::new();
        let base = base.map(|base| parser.parse(base, None)).transpose()?;
        parser.clear();
        parser.parse(input, base.as_ref())
    }

    /// Check if a URL string can be parsed
    ///
    /// # Examples
    ///
    /// ```
    /// use wurl::Url;
    ///
    /// assert!(Url::can_parse("http://example.com", None));
    /// assert!(Url::can_parse("/path", Some("http://example.com")));
    /// assert!(!Url::can_parse("not a url", None));
    /// ```
    pub fn can_parse(input: &str, base: Option<&str>) -> bool {
        Self::parse(input, base).is_ok()
    }

    /// Parse `input` relative to this URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid according to the WHATWG URL Standard.
    pub fn join(&self, input: &str) -> Result<Self> {
        Parser::new().parse(input, Some(self))
    }

    pub(crate) fn refresh(&mut self) {
        self.serialization = serializer::serialize(self, false);
    }

    /// Get the full URL string (zero-copy)
    pub fn href(&self) -> &str {
        &self.serialization
    }

    pub fn as_str(&self) -> &str {
        &self.serialization
    }

    /// Get the protocol (e.g., "http:", "https:")
    pub fn protocol(&self) -> String {
        format!("{}:", self.scheme.name)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Get the host including port (e.g., "example.com:8080")
    pub fn host(&self) -> String {
        let mut host = serializer::serialize_host(self);
        if let Some(port) = self.port
            && !self.host.is_undefined()
        {
            host.push(':');
            host.push_str(&port.to_string());
        }
        host
    }

    /// Get the hostname without port (e.g., "example.com")
    pub fn hostname(&self) -> String {
        serializer::serialize_host(self)
    }

    /// Get the port as string (e.g., "8080"), or empty string if default
    pub fn port(&self) -> String {
        serializer::serialize_port(self)
    }

    /// Get the pathname (e.g., "/path/to/page")
    pub fn pathname(&self) -> String {
        serializer::serialize_path(self)
    }

    /// Get the search/query string (e.g., "?key=value")
    pub fn search(&self) -> String {
        match self.query.as_deref() {
            None | Some("") => String::new(),
            Some(query) => format!("?{query}"),
        }
    }

    /// Get the hash/fragment (e.g., "#section")
    pub fn hash(&self) -> String {
        match self.fragment.as_deref() {
            None | Some("") => String::new(),
            Some(fragment) => format!("#{fragment}"),
        }
    }

    /// ASCII serialization of this URL's origin, or `"null"` for opaque origins.
    pub fn origin(&self) -> String {
        match self.scheme.kind {
            SchemeType::Http
            | SchemeType::Https
            | SchemeType::Ws
            | SchemeType::Wss
            | SchemeType::Ftp => format!("{}://{}", self.scheme.name, self.host()),
            SchemeType::NotSpecial if self.scheme.name == "blob" => {
                match Self::parse(&self.pathname(), None) {
                    Ok(inner) if matches!(inner.scheme.kind, SchemeType::Http | SchemeType::Https) => {
                        inner.origin()
                    }
                    _ => "null".to_string(),
                }
            }
            _ => "null".to_string(),
        }
    }

    // Record accessors

    pub fn scheme(&self) -> &str {
        &self.scheme.name
    }

    pub fn scheme_type(&self) -> SchemeType {
        self.scheme.kind
    }

    pub fn is_special(&self) -> bool {
        self.scheme.is_special()
    }

    pub fn host_record(&self) -> &Host {
        &self.host
    }

    pub fn port_number(&self) -> Option<u16> {
        self.port
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Check if URL has credentials
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() || !self.password.is_empty()
    }

    pub fn has_opaque_path(&self) -> bool {
        self.path.is_opaque()
    }

    /// Credentials and port need a non-empty host and a scheme other than `file`.
    pub fn cannot_have_username_password_port(&self) -> bool {
        self.host.is_null_or_empty() || self.scheme.kind.is_file()
    }

    /// Query parsed as `application/x-www-form-urlencoded`.
    pub fn search_params(&self) -> UrlSearchParams {
        self.query
            .as_deref()
            .map(UrlSearchParams::parse)
            .unwrap_or_default()
    }

    /// Replace the query with serialized `params`; an empty list removes it.
    pub fn set_search_params(&mut self, params: &UrlSearchParams) {
        let serialized = params.to_string();
        self.query = if serialized.is_empty() {
            None
        } else {
            Some(serialized)
        };
        self.refresh();
    }
}

impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialization)
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        &self.serialization
    }
}

impl core::str::FromStr for Url {
    type Err = crate::ParseError;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse(input, None)
    }
}

impl Parseable for Url {
    fn parse(input: &str, base: Option<&str>) -> Result<Self> {
        Self::parse(input, base)
    }
}
