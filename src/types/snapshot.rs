use serde::{Deserialize, Serialize};

use super::tab::Tab;

/// Read-only copy of the navigation state handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserSnapshot {
    pub tabs: Vec<Tab>,
    pub active_tab_id: String,
}

impl BrowserSnapshot {
    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == self.active_tab_id)
    }
}
