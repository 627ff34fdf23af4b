/// States of the basic URL parser.
///
/// Any state can be handed to [`Parser::parse_override`](crate::Parser::parse_override)
/// as the starting point; the setters use the ones noted below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Entry for `set_protocol`
    SchemeStart,
    Scheme,
    NoScheme,
    SpecialRelativeOrAuthority,
    PathOrAuthority,
    Relative,
    RelativeSlash,
    SpecialAuthoritySlashes,
    SpecialAuthorityIgnoreSlashes,
    /// Userinfo, up to the last `@` before the host ends
    Authority,
    /// Entry for `set_host`
    Host,
    /// Entry for `set_hostname`; stops without a change at `:`
    Hostname,
    /// Entry for `set_port`
    Port,
    File,
    FileSlash,
    /// `file` host; `localhost` folds to the empty host
    FileHost,
    /// Entry for `set_pathname`
    PathStart,
    Path,
    /// Path of a URL like `mailto:` that is one opaque string
    OpaquePath,
    /// Entry for `set_search`
    Query,
    /// Entry for `set_hash`
    Fragment,
}
