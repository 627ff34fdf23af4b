use crate::character_sets::{is_ascii_tab_or_newline, is_c0_control_or_space};
use crate::compat::String;
use crate::error::ValidationError;
use crate::log::ValidationLog;

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Strip leading and trailing C0 controls and spaces.
/// Each side that had something stripped is logged once.
pub fn trim_c0_control_or_space<'a>(input: &'a str, log: &mut ValidationLog) -> &'a str {
    let bytes = input.as_bytes();
    let start = bytes
        .iter()
        .position(|&b| !is_c0_control_or_space(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| !is_c0_control_or_space(b))
        .map_or(start, |pos| pos + 1);

    if start > 0 {
        log.push(0, ValidationError::InvalidUrlUnit);
    }
    if end < bytes.len() && end > start {
        log.push(end - start, ValidationError::InvalidUrlUnit);
    }

    &input[start..end]
}

/// Copy `input` into `out` without ASCII tabs and newlines.
/// Logs one `InvalidUrlUnit` at the first removed byte.
pub fn remove_tabs_and_newlines_into(input: &str, out: &mut String, log: &mut ValidationLog) {
    out.clear();
    let bytes = input.as_bytes();
    let Some(first) = memchr::memchr3(b'\t', b'\n', b'\r', bytes) else {
        out.push_str(input);
        return;
    };
    log.push(first, ValidationError::InvalidUrlUnit);

    out.reserve(input.len());
    let mut start = 0;
    for pos in memchr::memchr3_iter(b'\t', b'\n', b'\r', bytes) {
        out.push_str(&input[start..pos]);
        start = pos + 1;
    }
    out.push_str(&input[start..]);
    debug_assert!(!out.bytes().any(is_ascii_tab_or_newline));
}
