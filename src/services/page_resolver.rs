//! Derives a tab title from an address. Never fails.

use crate::types::address::{classify, AddressKind};
use crate::types::tab::NEW_TAB_TITLE;

/// Name appended to search page titles unless configured otherwise.
pub const DEFAULT_SEARCH_ENGINE_NAME: &str = "Google Search";

pub const SEARCH_TITLE: &str = "Search";
pub const SYSTEM_PAGE_TITLE: &str = "System Page";

/// Returns a displayable title for `address`.
///
/// External addresses resolve to their host; anything without a usable host
/// is returned unchanged.
pub fn title_for(address: &str, search_engine_name: &str) -> String {
    match classify(address) {
        AddressKind::NewTab => NEW_TAB_TITLE.to_string(),
        AddressKind::Search(Some(query)) => format!("{} - {}", query, search_engine_name),
        AddressKind::Search(None) => SEARCH_TITLE.to_string(),
        AddressKind::System => SYSTEM_PAGE_TITLE.to_string(),
        AddressKind::External(url) => match url.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => address.to_string(),
        },
        AddressKind::Unparsed => address.to_string(),
    }
}
