use serde::{Deserialize, Serialize};

use crate::services::page_resolver::DEFAULT_SEARCH_ENGINE_NAME;

/// Delay between clearing and restoring the address during a reload pulse.
pub const DEFAULT_RELOAD_PULSE_MS: u64 = 10;

/// Top-level settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BrowserSettings {
    pub search: SearchSettings,
    pub navigation: NavigationSettings,
}

/// Simulated search engine settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSettings {
    pub engine_name: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            engine_name: DEFAULT_SEARCH_ENGINE_NAME.to_string(),
        }
    }
}

/// Navigation timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationSettings {
    pub reload_pulse_ms: u64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            reload_pulse_ms: DEFAULT_RELOAD_PULSE_MS,
        }
    }
}
