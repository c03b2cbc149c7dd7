//! Content for synthesized pages and the target handed to the embedding primitive.

use serde::{Deserialize, Serialize};

use crate::services::url_normalizer::encode_component;
use crate::types::address::{classify, AddressKind, NEW_TAB_ADDRESS, SEARCH_ADDRESS_PREFIX};

/// One entry on the simulated search results page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub description: String,
    pub display_url: String,
}

/// What the content area should show for an address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContent {
    NewTab,
    SearchResults {
        query: String,
        results: Vec<SearchResult>,
    },
    SystemPage {
        address: String,
    },
    /// External content; `url` is passed through untouched.
    Embedded {
        url: String,
    },
}

/// Resolves the page to render for `address`.
pub fn page_for(address: &str) -> PageContent {
    match classify(address) {
        AddressKind::NewTab => PageContent::NewTab,
        AddressKind::Search(query) => {
            let query = query.unwrap_or_default();
            let results = simulated_results(&query);
            PageContent::SearchResults { query, results }
        }
        AddressKind::System => PageContent::SystemPage {
            address: address.to_string(),
        },
        AddressKind::External(_) | AddressKind::Unparsed => PageContent::Embedded {
            url: address.to_string(),
        },
    }
}

/// Text the address bar shows for an address when not being edited.
pub fn address_bar_text(address: &str) -> String {
    if address == NEW_TAB_ADDRESS {
        return String::new();
    }
    if address.starts_with(SEARCH_ADDRESS_PREFIX) {
        if let AddressKind::Search(Some(query)) = classify(address) {
            return query;
        }
    }
    address.to_string()
}

/// Fixed results pointing at sites that allow embedding.
pub fn simulated_results(query: &str) -> Vec<SearchResult> {
    let q = encode_component(query);
    vec![
        SearchResult {
            title: format!("{} - Wikipedia", query),
            url: format!("https://en.wikipedia.org/wiki/{}", q),
            description: "Wikipedia is a free online encyclopedia, created and edited by \
                          volunteers around the world and hosted by the Wikipedia Foundation."
                .to_string(),
            display_url: format!("en.wikipedia.org › wiki › {}", query),
        },
        SearchResult {
            title: format!("Bing Search: {}", query),
            url: format!("https://www.bing.com/search?q={}", q),
            description: "Bing helps you turn information into action, making it faster and \
                          easier to go from searching to doing."
                .to_string(),
            display_url: "www.bing.com › search".to_string(),
        },
        SearchResult {
            title: format!("{} Definition & Meaning - Dictionary.com", query),
            url: format!("https://www.dictionary.com/browse/{}", q),
            description: "The world's leading online dictionary: English definitions, \
                          synonyms, word origins, example sentences, word games, and more."
                .to_string(),
            display_url: format!("www.dictionary.com › browse › {}", query),
        },
        SearchResult {
            title: format!("OpenStreetMap - {}", query),
            url: format!("https://www.openstreetmap.org/search?query={}", q),
            description: "OpenStreetMap is a map of the world, created by people like you \
                          and free to use under an open license."
                .to_string(),
            display_url: "www.openstreetmap.org".to_string(),
        },
        SearchResult {
            title: format!("Internet Archive: {}", query),
            url: format!("https://archive.org/search.php?query={}", q),
            description: "Digital library of free & borrowable books, movies, music & \
                          Wayback Machine."
                .to_string(),
            display_url: "archive.org › details".to_string(),
        },
    ]
}
