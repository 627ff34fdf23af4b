//! WHATWG URL parsing and serialization.
//!
//! ```
//! use wurl::Url;
//!
//! let base = Url::parse("https://example.com/a/b", None).unwrap();
//! let url = base.join("../c?q=1").unwrap();
//! assert_eq!(url.href(), "https://example.com/c?q=1");
//! assert_eq!(url.search_params().get("q"), Some("1"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod host;
mod ipv4;
mod ipv6;
mod log;
mod parser;
mod path;
mod scheme;
mod setters;
mod types;
mod unicode;
mod url;
mod url_search_params;

pub mod serializer;

// Public API
pub use error::{ParseError, Result, ValidationError};
pub use host::{Host, parse_host};
pub use ipv4::{parse_ipv4, serialize_ipv4};
pub use ipv6::{parse_ipv6, serialize_ipv6};
pub use log::{Validation, ValidationLog};
pub use parser::{Parseable, Parser, State, parse};
pub use path::Path;
pub use scheme::lookup as lookup_scheme;
pub use types::{SchemeDescriptor, SchemeType};
pub use unicode::percent_encode as percent;
pub use url::Url;
pub use url_search_params::UrlSearchParams;
