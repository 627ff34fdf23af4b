//! URL serializer, whole and per component.

use crate::compat::{String, ToString};
use crate::url::Url;

/// Serialize `url`, leaving off the fragment when `exclude_fragment` is set.
pub fn serialize(url: &Url, exclude_fragment: bool) -> String {
    let mut output = String::with_capacity(url.serialization.len().max(16));
    serialize_into(url, exclude_fragment, &mut output);
    output
}

/// Append the serialization of `url` to `output`.
pub fn serialize_into(url: &Url, exclude_fragment: bool, output: &mut String) {
    output.push_str(&url.scheme.name);
    output.push(':');

    if url.host.is_undefined() {
        let segments = url.path.segments();
        // Keep "web+demo:/.//not-a-host/" from reparsing with an authority
        if segments.len() > 1 && segments[0].is_empty() {
            output.push_str("/.");
        }
    } else {
        output.push_str("//");
        if url.has_credentials() {
            output.push_str(&url.username);
            if !url.password.is_empty() {
                output.push(':');
                output.push_str(&url.password);
            }
            output.push('@');
        }
        url.host.serialize_into(output);
        if let Some(port) = url.port {
            output.push(':');
            output.push_str(&port.to_string());
        }
    }

    url.path.serialize_into(output);

    if let Some(query) = &url.query {
        output.push('?');
        output.push_str(query);
    }
    if !exclude_fragment && let Some(fragment) = &url.fragment {
        output.push('#');
        output.push_str(fragment);
    }
}

pub fn serialize_scheme(url: &Url) -> String {
    url.scheme.name.clone()
}

pub fn serialize_username(url: &Url) -> String {
    url.username.clone()
}

pub fn serialize_password(url: &Url) -> String {
    url.password.clone()
}

/// ASCII host serialization; empty when there is no host.
pub fn serialize_host(url: &Url) -> String {
    let mut output = String::new();
    url.host.serialize_into(&mut output);
    output
}

/// Host serialization with domains converted back to Unicode.
pub fn serialize_host_unicode(url: &Url) -> String {
    let mut output = String::new();
    url.host.serialize_unicode_into(&mut output);
    output
}

pub fn serialize_port(url: &Url) -> String {
    url.port.map(|port| port.to_string()).unwrap_or_default()
}

/// URL path serializer: the opaque path as is, or `/`-prefixed segments.
pub fn serialize_path(url: &Url) -> String {
    let mut output = String::new();
    url.path.serialize_into(&mut output);
    output
}

/// Query without the leading `?`; empty when there is none.
pub fn serialize_query(url: &Url) -> String {
    url.query.clone().unwrap_or_default()
}

/// Fragment without the leading `#`; empty when there is none.
pub fn serialize_fragment(url: &Url) -> String {
    url.fragment.clone().unwrap_or_default()
}
