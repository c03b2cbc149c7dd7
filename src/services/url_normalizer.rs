//! Turns free-form address bar input into a canonical address.
//!
//! The function is total: anything that is not blank, internal, an absolute
//! URL or domain-like becomes a simulated search.

use std::sync::OnceLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

use crate::types::address::{is_internal, search_address, NEW_TAB_ADDRESS};

/// Scheme prepended to domain-like input.
pub const DEFAULT_SCHEME: &str = "https://";

/// URI component set: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn scheme_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("scheme pattern"))
}

fn domain_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\.[a-z]{2,}($|/)").expect("domain pattern"))
}

/// Percent-encodes text for use as a single URI component.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Returns true if the input starts with an explicit `scheme://` prefix.
pub fn has_scheme(input: &str) -> bool {
    scheme_pattern().is_match(input)
}

/// Returns true if the input looks like a bare domain, optionally with a path.
pub fn looks_like_domain(input: &str) -> bool {
    !input.chars().any(char::is_whitespace) && domain_pattern().is_match(input)
}

/// Normalizes raw input into an address.
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return NEW_TAB_ADDRESS.to_string();
    }
    if is_internal(trimmed) || has_scheme(trimmed) {
        return trimmed.to_string();
    }
    if looks_like_domain(trimmed) {
        return format!("{}{}", DEFAULT_SCHEME, trimmed);
    }
    search_address(trimmed)
}
