//! WHATWG URL API setters.
//!
//! Everything except the credential setters goes through the parser's
//! override states, so setter input is normalized exactly like parser input.

use crate::compat::{String, format};
use crate::error::Result;
use crate::parser::{Parser, State};
use crate::unicode::percent_encode::{USERINFO_SET, encode_into};
use crate::url::Url;

impl Url {
    /// Replace the whole URL with a fresh parse of `href`.
    ///
    /// # Errors
    ///
    /// Returns the parse error and leaves `self` untouched when `href` is not
    /// a valid absolute URL.
    pub fn set_href(&mut self, href: &str) -> Result<()> {
        *self = Self::parse(href, None)?;
        Ok(())
    }

    /// Set the scheme. A trailing `:` and anything after it is ignored.
    ///
    /// Switching between special and non-special schemes is refused, as is
    /// switching to `file` while credentials or a port are set.
    pub fn set_protocol(&mut self, protocol: &str) -> bool {
        run_override(self, &format!("{protocol}:"), State::SchemeStart)
    }

    pub fn set_username(&mut self, username: &str) -> bool {
        if self.cannot_have_username_password_port() {
            return false;
        }
        self.username.clear();
        encode_into(&mut self.username, username.as_bytes(), USERINFO_SET);
        self.refresh();
        true
    }

    pub fn set_password(&mut self, password: &str) -> bool {
        if self.cannot_have_username_password_port() {
            return false;
        }
        self.password.clear();
        encode_into(&mut self.password, password.as_bytes(), USERINFO_SET);
        self.refresh();
        true
    }

    /// Set host and, when `host` carries one, the port.
    pub fn set_host(&mut self, host: &str) -> bool {
        if self.has_opaque_path() {
            return false;
        }
        run_override(self, host, State::Host)
    }

    /// Set the host, leaving the port alone. Input with a port is refused.
    pub fn set_hostname(&mut self, hostname: &str) -> bool {
        if self.has_opaque_path() {
            return false;
        }
        run_override(self, hostname, State::Hostname)
    }

    /// Set the port. An empty string removes it; the default port of the
    /// scheme is stored as no port. Trailing non-digits are ignored.
    pub fn set_port(&mut self, port: &str) -> bool {
        if self.cannot_have_username_password_port() {
            return false;
        }
        if port.is_empty() {
            self.port = None;
            self.refresh();
            return true;
        }
        run_override(self, port, State::Port)
    }

    pub fn set_pathname(&mut self, pathname: &str) -> bool {
        if self.has_opaque_path() {
            return false;
        }
        let mut staged = self.clone();
        staged.path.reset_to_list();
        let changed = run_override(&mut staged, pathname, State::PathStart);
        if changed {
            *self = staged;
        }
        changed
    }

    /// Set the query. A leading `?` is dropped; an empty string removes the
    /// query altogether.
    pub fn set_search(&mut self, search: &str) {
        if search.is_empty() {
            self.query = None;
            self.refresh();
            return;
        }
        let search = search.strip_prefix('?').unwrap_or(search);
        let mut staged = self.clone();
        staged.query = Some(String::new());
        if run_override(&mut staged, search, State::Query) {
            *self = staged;
        }
    }

    /// Set the fragment. A leading `#` is dropped; an empty string removes the
    /// fragment altogether.
    pub fn set_hash(&mut self, hash: &str) {
        if hash.is_empty() {
            self.fragment = None;
            self.refresh();
            return;
        }
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        let mut staged = self.clone();
        staged.fragment = Some(String::new());
        if run_override(&mut staged, hash, State::Fragment) {
            *self = staged;
        }
    }
}

fn run_override(url: &mut Url, input: &str, state: State) -> bool {
    Parser::new()
        .parse_override(input, url, state)
        .unwrap_or(false)
}
