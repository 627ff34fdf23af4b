use super::State;
use super::cursor::Cursor;
use crate::character_sets::{is_scheme_char, is_scheme_start};
use crate::checkers::{
    first_invalid_url_unit, is_double_dot_segment, is_invalid_url_unit_at,
    is_normalized_windows_drive_letter, is_single_dot_segment, is_windows_drive_letter,
    starts_with_windows_drive_letter,
};
use crate::compat::{String, ToOwned};
use crate::error::{ParseError, Result, ValidationError};
use crate::host::{Host, parse_host};
use crate::log::ValidationLog;
use crate::scheme::{Scheme, lookup};
use crate::types::SchemeType;
use crate::unicode::percent_encode::{
    C0_CONTROL_SET, FRAGMENT_SET, PATH_SET, QUERY_SET, SPECIAL_QUERY_SET, USERINFO_SET,
    encode_into, encode_with_encoding,
};
use crate::url::Url;
use encoding_rs::{Encoding, UTF_8};

/// How a run of the state machine ended without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input consumed, or the overridden component written
    Finished,
    /// An override stopped early without writing its own component
    Unchanged,
}

/// The basic URL parser state machine.
///
/// Input must already be free of tabs and newlines (and trimmed, unless a
/// state override is given).
pub struct Machine<'a, 'l> {
    input: &'a str,
    cur: Cursor<'a>,
    base: Option<&'a Url>,
    url: Url,
    encoding: &'static Encoding,
    state: State,
    state_override: Option<State>,
    log: &'l mut ValidationLog,
    /// Scheme name being read, or a path segment being percent-encoded
    buffer: String,
}

impl<'a, 'l> Machine<'a, 'l> {
    pub fn new(
        input: &'a str,
        base: Option<&'a Url>,
        url: Url,
        encoding: &'static Encoding,
        state_override: Option<State>,
        log: &'l mut ValidationLog,
    ) -> Self {
        Self {
            input,
            cur: Cursor::new(input.as_bytes()),
            base,
            url,
            encoding,
            state: state_override.unwrap_or(State::SchemeStart),
            state_override,
            log,
            buffer: String::new(),
        }
    }

    fn validation(&mut self, error: ValidationError) {
        self.log.push(self.cur.pos(), error);
    }

    fn fail<T>(&mut self, error: ParseError) -> Result<T> {
        self.log.push(self.cur.pos(), ValidationError::from(error));
        Err(error)
    }

    fn check_url_units(&mut self, start: usize, raw: &[u8]) {
        if let Some(pos) = first_invalid_url_unit(raw) {
            self.log.push(start + pos, ValidationError::InvalidUrlUnit);
        }
    }

    /// Base URL when its scheme is `file`.
    fn file_base(&self) -> Option<&'a Url> {
        self.base.filter(|base| base.scheme.kind.is_file())
    }

    /// Run to the end of input, or until an override returns early.
    pub fn run(mut self) -> Result<(Url, Outcome)> {
        let input = self.input;

        loop {
            let c = self.cur.peek();
            let special = self.url.scheme.is_special();

            match self.state {
                State::SchemeStart => match c {
                    Some(b) if is_scheme_start(b) => {
                        self.buffer.push(char::from(b.to_ascii_lowercase()));
                        self.state = State::Scheme;
                    }
                    _ if self.state_override.is_none() => {
                        self.state = State::NoScheme;
                        self.cur.step_back();
                    }
                    _ => return self.fail(ParseError::InvalidScheme),
                },

                State::Scheme => match c {
                    Some(b) if is_scheme_char(b) => {
                        self.buffer.push(char::from(b.to_ascii_lowercase()));
                    }
                    Some(b':') => {
                        if let Some(outcome) = self.commit_scheme() {
                            return Ok((self.url, outcome));
                        }
                    }
                    _ if self.state_override.is_none() => {
                        self.buffer.clear();
                        self.state = State::NoScheme;
                        self.cur.rewind_to(0);
                    }
                    _ => return self.fail(ParseError::InvalidScheme),
                },

                State::NoScheme => {
                    let Some(base) = self.base else {
                        return self.fail(ParseError::MissingSchemeNonRelativeUrl);
                    };
                    if base.has_opaque_path() {
                        if c != Some(b'#') {
                            return self.fail(ParseError::MissingSchemeNonRelativeUrl);
                        }
                        self.url.scheme = base.scheme.clone();
                        self.url.path = base.path.clone();
                        self.url.query.clone_from(&base.query);
                        self.url.fragment = Some(String::new());
                        self.state = State::Fragment;
                    } else if base.scheme.kind.is_file() {
                        self.state = State::File;
                        self.cur.step_back();
                    } else {
                        self.state = State::Relative;
                        self.cur.step_back();
                    }
                }

                State::SpecialRelativeOrAuthority => {
                    if c == Some(b'/') && self.cur.remaining_starts_with(b'/') {
                        self.state = State::SpecialAuthorityIgnoreSlashes;
                        self.cur.skip(1);
                    } else {
                        self.validation(ValidationError::SpecialSchemeMissingFollowingSolidus);
                        self.state = State::Relative;
                        self.cur.step_back();
                    }
                }

                State::PathOrAuthority => {
                    if c == Some(b'/') {
                        self.state = State::Authority;
                    } else {
                        self.state = State::Path;
                        self.cur.step_back();
                    }
                }

                State::Relative => {
                    let Some(base) = self.base else {
                        return self.fail(ParseError::MissingSchemeNonRelativeUrl);
                    };
                    self.url.scheme = base.scheme.clone();
                    let special = self.url.scheme.is_special();

                    match c {
                        Some(b'/') => self.state = State::RelativeSlash,
                        Some(b'\\') if special => {
                            self.validation(ValidationError::InvalidReverseSolidus);
                            self.state = State::RelativeSlash;
                        }
                        _ => {
                            self.url.username.clone_from(&base.username);
                            self.url.password.clone_from(&base.password);
                            self.url.host = base.host.clone();
                            self.url.port = base.port;
                            self.url.path = base.path.clone();
                            self.url.query.clone_from(&base.query);

                            match c {
                                Some(b'?') => {
                                    self.url.query = Some(String::new());
                                    self.state = State::Query;
                                }
                                Some(b'#') => {
                                    self.url.fragment = Some(String::new());
                                    self.state = State::Fragment;
                                }
                                Some(_) => {
                                    self.url.query = None;
                                    self.url.path.shorten(self.url.scheme.kind);
                                    self.state = State::Path;
                                    self.cur.step_back();
                                }
                                None => {}
                            }
                        }
                    }
                }

                State::RelativeSlash => match c {
                    Some(b @ (b'/' | b'\\')) if special => {
                        if b == b'\\' {
                            self.validation(ValidationError::InvalidReverseSolidus);
                        }
                        self.state = State::SpecialAuthorityIgnoreSlashes;
                    }
                    Some(b'/') => self.state = State::Authority,
                    _ => {
                        if let Some(base) = self.base {
                            self.url.username.clone_from(&base.username);
                            self.url.password.clone_from(&base.password);
                            self.url.host = base.host.clone();
                            self.url.port = base.port;
                        }
                        self.state = State::Path;
                        self.cur.step_back();
                    }
                },

                State::SpecialAuthoritySlashes => {
                    if c == Some(b'/') && self.cur.remaining_starts_with(b'/') {
                        self.cur.skip(1);
                    } else {
                        self.validation(ValidationError::SpecialSchemeMissingFollowingSolidus);
                        self.cur.step_back();
                    }
                    self.state = State::SpecialAuthorityIgnoreSlashes;
                }

                State::SpecialAuthorityIgnoreSlashes => {
                    if matches!(c, Some(b'/' | b'\\')) {
                        self.validation(ValidationError::SpecialSchemeMissingFollowingSolidus);
                    } else {
                        self.state = State::Authority;
                        self.cur.step_back();
                    }
                }

                State::Authority => self.authority(special)?,

                State::Host | State::Hostname => {
                    if self.state_override.is_some() && self.url.scheme.kind.is_file() {
                        self.state = State::FileHost;
                        self.cur.step_back();
                    } else if let Some(outcome) = self.host(special)? {
                        return Ok((self.url, outcome));
                    }
                }

                State::Port => {
                    let start = self.cur.pos();
                    let digits = self
                        .cur
                        .rest()
                        .iter()
                        .take_while(|b| b.is_ascii_digit())
                        .count();
                    self.cur.jump_to(start + digits);

                    let terminated = match self.cur.peek() {
                        None | Some(b'/' | b'?' | b'#') => true,
                        Some(b'\\') => special,
                        Some(_) => self.state_override.is_some(),
                    };
                    if !terminated {
                        return self.fail(ParseError::PortInvalid);
                    }

                    if digits > 0 {
                        let port = input.as_bytes()[start..start + digits]
                            .iter()
                            .fold(0u32, |acc, &b| {
                                acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
                            });
                        let Ok(port) = u16::try_from(port) else {
                            self.log.push(start, ValidationError::PortOutOfRange);
                            return Err(ParseError::PortOutOfRange);
                        };
                        self.url.port = (self.url.scheme.default_port() != Some(port)).then_some(port);
                        if self.state_override.is_some() {
                            return Ok((self.url, Outcome::Finished));
                        }
                    }
                    if self.state_override.is_some() {
                        // Whatever came before the `:` stays written
                        return Ok((self.url, Outcome::Unchanged));
                    }
                    self.state = State::PathStart;
                    self.cur.step_back();
                }

                State::File => {
                    self.url.scheme = Scheme::new(String::from("file"));
                    self.url.host = Host::Empty;

                    if let Some(b @ (b'/' | b'\\')) = c {
                        if b == b'\\' {
                            self.validation(ValidationError::InvalidReverseSolidus);
                        }
                        self.state = State::FileSlash;
                    } else if let Some(base) = self.file_base() {
                        self.url.host = base.host.clone();
                        self.url.path = base.path.clone();
                        self.url.query.clone_from(&base.query);

                        match c {
                            Some(b'?') => {
                                self.url.query = Some(String::new());
                                self.state = State::Query;
                            }
                            Some(b'#') => {
                                self.url.fragment = Some(String::new());
                                self.state = State::Fragment;
                            }
                            Some(_) => {
                                self.url.query = None;
                                if starts_with_windows_drive_letter(self.cur.rest()) {
                                    self.validation(ValidationError::FileInvalidWindowsDriveLetter);
                                    self.url.path.reset_to_list();
                                } else {
                                    self.url.path.shorten(SchemeType::File);
                                }
                                self.state = State::Path;
                                self.cur.step_back();
                            }
                            None => {}
                        }
                    } else {
                        self.state = State::Path;
                        self.cur.step_back();
                    }
                }

                State::FileSlash => {
                    if let Some(b @ (b'/' | b'\\')) = c {
                        if b == b'\\' {
                            self.validation(ValidationError::InvalidReverseSolidus);
                        }
                        self.state = State::FileHost;
                    } else {
                        if let Some(base) = self.file_base() {
                            self.url.host = base.host.clone();
                            if !starts_with_windows_drive_letter(self.cur.rest())
                                && let Some(drive) = base.path.segments().first()
                                && is_normalized_windows_drive_letter(drive.as_bytes())
                            {
                                self.url.path.append(drive);
                            }
                        }
                        self.state = State::Path;
                        self.cur.step_back();
                    }
                }

                State::FileHost => {
                    if let Some(outcome) = self.file_host(special)? {
                        return Ok((self.url, outcome));
                    }
                }

                State::PathStart => {
                    if special {
                        if c == Some(b'\\') {
                            self.validation(ValidationError::InvalidReverseSolidus);
                        }
                        self.state = State::Path;
                        if !matches!(c, Some(b'/' | b'\\')) {
                            self.cur.step_back();
                        }
                    } else if self.state_override.is_none() && c == Some(b'?') {
                        self.url.query = Some(String::new());
                        self.state = State::Query;
                    } else if self.state_override.is_none() && c == Some(b'#') {
                        self.url.fragment = Some(String::new());
                        self.state = State::Fragment;
                    } else if c.is_some() {
                        self.state = State::Path;
                        if c != Some(b'/') {
                            self.cur.step_back();
                        }
                    } else if self.state_override.is_some() && self.url.host.is_undefined() {
                        self.url.path.append("");
                    }
                }

                State::Path => self.path_segment(special),

                State::OpaquePath => match c {
                    Some(b'?') => {
                        self.url.query = Some(String::new());
                        self.state = State::Query;
                    }
                    Some(b'#') => {
                        self.url.fragment = Some(String::new());
                        self.state = State::Fragment;
                    }
                    Some(b) => {
                        if is_invalid_url_unit_at(input.as_bytes(), self.cur.pos()) {
                            self.validation(ValidationError::InvalidUrlUnit);
                        }
                        let before_query_or_fragment =
                            matches!(self.cur.remaining().first(), Some(b'?' | b'#'));
                        if let Some(path) = self.url.path.opaque_mut() {
                            if b == b' ' && before_query_or_fragment {
                                path.push_str("%20");
                            } else {
                                encode_into(path, &[b], C0_CONTROL_SET);
                            }
                        }
                    }
                    None => {}
                },

                State::Query => {
                    if self.encoding != UTF_8
                        && (!special || matches!(self.url.scheme.kind, SchemeType::Ws | SchemeType::Wss))
                    {
                        self.encoding = UTF_8;
                    }

                    let start = self.cur.pos();
                    let end = if self.state_override.is_some() {
                        input.len()
                    } else {
                        memchr::memchr(b'#', self.cur.rest()).map_or(input.len(), |i| start + i)
                    };
                    let raw = &input[start..end];
                    self.check_url_units(start, raw.as_bytes());

                    let set = if special { SPECIAL_QUERY_SET } else { QUERY_SET };
                    let query = self.url.query.get_or_insert_with(String::new);
                    encode_with_encoding(query, raw, self.encoding, set);

                    self.cur.jump_to(end);
                    if self.cur.peek() == Some(b'#') {
                        self.url.fragment = Some(String::new());
                        self.state = State::Fragment;
                    }
                }

                State::Fragment => {
                    if c.is_some() {
                        let start = self.cur.pos();
                        let raw = &input.as_bytes()[start..];
                        self.check_url_units(start, raw);
                        let fragment = self.url.fragment.get_or_insert_with(String::new);
                        encode_into(fragment, raw, FRAGMENT_SET);
                        self.cur.jump_to(input.len());
                    }
                }
            }

            if !self.cur.advance() {
                break;
            }
        }

        Ok((self.url, Outcome::Finished))
    }

    /// Scheme state on `:`. Returns an outcome when parsing stops here.
    fn commit_scheme(&mut self) -> Option<Outcome> {
        let descriptor = lookup(self.buffer.as_bytes());

        if self.state_override.is_some() {
            let url = &self.url;
            if url.scheme.is_special() != descriptor.kind.is_special()
                || ((url.has_credentials() || url.port.is_some()) && descriptor.kind.is_file())
                || (url.scheme.kind.is_file() && url.host == Host::Empty)
            {
                return Some(Outcome::Unchanged);
            }
        }

        self.url.scheme = Scheme {
            kind: descriptor.kind,
            name: core::mem::take(&mut self.buffer),
        };

        if self.state_override.is_some() {
            if self.url.port.is_some() && self.url.port == descriptor.default_port {
                self.url.port = None;
            }
            return Some(Outcome::Finished);
        }

        if descriptor.kind.is_file() {
            if !self.cur.remaining().starts_with(b"//") {
                self.validation(ValidationError::SpecialSchemeMissingFollowingSolidus);
            }
            self.state = State::File;
        } else if descriptor.kind.is_special()
            && self
                .base
                .is_some_and(|base| base.scheme.name == self.url.scheme.name)
        {
            self.state = State::SpecialRelativeOrAuthority;
        } else if descriptor.kind.is_special() {
            self.state = State::SpecialAuthoritySlashes;
        } else if self.cur.remaining_starts_with(b'/') {
            self.state = State::PathOrAuthority;
            self.cur.skip(1);
        } else {
            self.url.path.reset_to_opaque();
            self.state = State::OpaquePath;
        }
        None
    }

    /// Authority state: read userinfo up to the last `@` of the authority.
    fn authority(&mut self, special: bool) -> Result<()> {
        let input = self.input;
        let start = self.cur.pos();
        let rest = self.cur.rest();
        let end = start
            + rest
                .iter()
                .position(|&b| matches!(b, b'/' | b'?' | b'#') || (special && b == b'\\'))
                .unwrap_or(rest.len());
        let authority = &input.as_bytes()[start..end];

        match memchr::memrchr(b'@', authority) {
            Some(at) => {
                for pos in memchr::memchr_iter(b'@', authority) {
                    self.log.push(start + pos, ValidationError::InvalidCredentials);
                }
                let userinfo = &input[start..start + at];
                self.check_url_units(start, userinfo.as_bytes());

                let (username, password) = match userinfo.split_once(':') {
                    Some((username, password)) => (username, Some(password)),
                    None => (userinfo, None),
                };
                encode_into(&mut self.url.username, username.as_bytes(), USERINFO_SET);
                if let Some(password) = password {
                    encode_into(&mut self.url.password, password.as_bytes(), USERINFO_SET);
                }

                if start + at + 1 == end {
                    self.cur.jump_to(end);
                    return self.fail(ParseError::HostMissing);
                }
                self.cur.rewind_to(start + at + 1);
            }
            None => self.cur.step_back(),
        }

        self.state = State::Host;
        Ok(())
    }

    /// Host and hostname states. Returns an outcome when parsing stops here.
    fn host(&mut self, special: bool) -> Result<Option<Outcome>> {
        let input = self.input;
        let start = self.cur.pos();
        let rest = self.cur.rest();

        let mut inside_brackets = false;
        let len = rest
            .iter()
            .position(|&b| match b {
                b'[' => {
                    inside_brackets = true;
                    false
                }
                b']' => {
                    inside_brackets = false;
                    false
                }
                b':' => !inside_brackets,
                b'/' | b'?' | b'#' => true,
                b'\\' => special,
                _ => false,
            })
            .unwrap_or(rest.len());
        let text = &input[start..start + len];
        self.cur.jump_to(start + len);

        if self.cur.peek() == Some(b':') {
            if text.is_empty() {
                return self.fail(ParseError::HostMissing);
            }
            if self.state_override == Some(State::Hostname) {
                return Ok(Some(Outcome::Unchanged));
            }
            self.url.host = parse_host(text, !special, self.log, start)?;
            self.state = State::Port;
            return Ok(None);
        }

        self.cur.step_back();
        if text.is_empty() {
            if special {
                return self.fail(ParseError::HostMissing);
            }
            if self.state_override.is_some()
                && (self.url.has_credentials() || self.url.port.is_some())
            {
                return Ok(Some(Outcome::Unchanged));
            }
            self.url.host = Host::Empty;
        } else {
            self.url.host = parse_host(text, !special, self.log, start)?;
        }

        self.state = State::PathStart;
        if self.state_override.is_some() {
            return Ok(Some(Outcome::Finished));
        }
        Ok(None)
    }

    /// File host state. Returns an outcome when parsing stops here.
    fn file_host(&mut self, special: bool) -> Result<Option<Outcome>> {
        let input = self.input;
        let start = self.cur.pos();
        let rest = self.cur.rest();
        let len = rest
            .iter()
            .position(|&b| matches!(b, b'/' | b'\\' | b'?' | b'#'))
            .unwrap_or(rest.len());
        let text = &input[start..start + len];
        self.cur.jump_to(start + len);
        self.cur.step_back();

        if self.state_override.is_none() && is_windows_drive_letter(text.as_bytes()) {
            self.log
                .push(start, ValidationError::FileInvalidWindowsDriveLetterHost);
            // The drive letter becomes the first path segment
            text.clone_into(&mut self.buffer);
            self.state = State::Path;
            return Ok(None);
        }

        if text.is_empty() {
            self.url.host = Host::Empty;
        } else {
            let mut host = parse_host(text, !special, self.log, start)?;
            if matches!(&host, Host::Domain(domain) if domain == "localhost") {
                self.log.push(start, ValidationError::FileHostLocalhost);
                host = Host::Empty;
            }
            self.url.host = host;
        }

        if self.state_override.is_some() {
            return Ok(Some(Outcome::Finished));
        }
        self.state = State::PathStart;
        Ok(None)
    }

    /// Path state: encode one segment and apply it to the path.
    fn path_segment(&mut self, special: bool) {
        let input = self.input;
        let overriding = self.state_override.is_some();
        let start = self.cur.pos();
        let rest = self.cur.rest();
        let len = rest
            .iter()
            .position(|&b| {
                b == b'/' || (special && b == b'\\') || (!overriding && matches!(b, b'?' | b'#'))
            })
            .unwrap_or(rest.len());
        let raw = &input.as_bytes()[start..start + len];
        if !raw.is_empty() {
            self.check_url_units(start, raw);
            encode_into(&mut self.buffer, raw, PATH_SET);
        }
        self.cur.jump_to(start + len);

        let c = self.cur.peek();
        if c == Some(b'\\') {
            self.validation(ValidationError::InvalidReverseSolidus);
        }
        let slash = c == Some(b'/') || (special && c == Some(b'\\'));
        let kind = self.url.scheme.kind;

        if is_double_dot_segment(self.buffer.as_bytes()) {
            self.url.path.shorten(kind);
            if !slash {
                self.url.path.append("");
            }
            self.buffer.clear();
        } else if is_single_dot_segment(self.buffer.as_bytes()) {
            if !slash {
                self.url.path.append("");
            }
            self.buffer.clear();
        } else {
            if kind.is_file()
                && self.url.path.is_empty()
                && is_windows_drive_letter(self.buffer.as_bytes())
            {
                self.buffer.replace_range(1..2, ":");
            }
            let segment = core::mem::take(&mut self.buffer);
            self.url.path.push_already_encoded(segment);
        }

        match c {
            Some(b'?') if !overriding => {
                self.url.query = Some(String::new());
                self.state = State::Query;
            }
            Some(b'#') if !overriding => {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
            _ => {}
        }
    }
}
