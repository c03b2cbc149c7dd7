use url::Url;

use crate::services::url_normalizer::encode_component;

/// Scheme prefix shared by every synthesized page.
pub const INTERNAL_SCHEME: &str = "internal://";

/// Address of the new-tab page.
pub const NEW_TAB_ADDRESS: &str = "internal://newtab";

/// Prefix of the simulated search results page; the encoded query follows.
pub const SEARCH_ADDRESS_PREFIX: &str = "internal://search?q=";

/// Host used when re-parsing internal addresses as ordinary URLs.
const INTERNAL_PARSE_BASE: &str = "http://internal/";

/// What an address points at, as far as the chrome cares.
#[derive(Debug, Clone, PartialEq)]
pub enum AddressKind {
    /// Empty sentinel or the new-tab address.
    NewTab,
    /// Simulated search page with its decoded, non-empty query if present.
    Search(Option<String>),
    /// Any other internal page.
    System,
    /// Absolute external URL handed to the embedding primitive.
    External(Url),
    /// Could not be parsed at all.
    Unparsed,
}

/// Returns true if the address belongs to the internal scheme.
pub fn is_internal(address: &str) -> bool {
    address.starts_with(INTERNAL_SCHEME)
}

/// Classifies an address. Never fails: unparsable input maps to `Unparsed`.
pub fn classify(address: &str) -> AddressKind {
    if address.is_empty() || address == NEW_TAB_ADDRESS {
        return AddressKind::NewTab;
    }

    if let Some(rest) = address.strip_prefix(INTERNAL_SCHEME) {
        let parsed = match Url::parse(&format!("{}{}", INTERNAL_PARSE_BASE, rest)) {
            Ok(u) => u,
            Err(_) => return AddressKind::Unparsed,
        };
        if parsed.path() == "/search" {
            let query = parsed
                .query_pairs()
                .find(|(k, _)| k == "q")
                .map(|(_, v)| v.into_owned())
                .filter(|q| !q.is_empty());
            return AddressKind::Search(query);
        }
        return AddressKind::System;
    }

    match Url::parse(address) {
        Ok(u) => AddressKind::External(u),
        Err(_) => AddressKind::Unparsed,
    }
}

/// Builds the internal search address for a raw query.
pub fn search_address(query: &str) -> String {
    format!("{}{}", SEARCH_ADDRESS_PREFIX, encode_component(query))
}
