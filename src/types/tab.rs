use serde::{Deserialize, Serialize};

/// Title shown for a tab on the new-tab page.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// A browser tab and its private back/forward stack.
///
/// `current_address` is empty while the tab shows the new-tab page.
/// `history_index` is `None` exactly when `history` is empty; otherwise it
/// points at the entry equal to `current_address`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: String,
    pub current_address: String,
    pub display_address: String,
    pub title: String,
    pub is_loading: bool,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl Tab {
    /// Creates a tab in the empty/new-tab state.
    pub fn new(id: String) -> Self {
        Self {
            id,
            current_address: String::new(),
            display_address: String::new(),
            title: NEW_TAB_TITLE.to_string(),
            is_loading: false,
            history: Vec::new(),
            history_index: None,
        }
    }

    /// Returns the tab to the empty/new-tab state, keeping its id.
    pub fn reset(&mut self) {
        let id = std::mem::take(&mut self.id);
        *self = Tab::new(id);
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.history_index, Some(i) if i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.history_index, Some(i) if i + 1 < self.history.len())
    }

    /// The history entry under the cursor, if any.
    pub fn current_entry(&self) -> Option<&str> {
        self.history_index
            .and_then(|i| self.history.get(i))
            .map(String::as_str)
    }

    /// Truncates forward history and appends `address` as the new current entry.
    pub(crate) fn push_entry(&mut self, address: String, title: String) {
        let keep = self.history_index.map_or(0, |i| i + 1);
        self.history.truncate(keep);
        self.history.push(address.clone());
        self.history_index = Some(self.history.len() - 1);
        self.show(address, title);
    }

    /// Moves the cursor to an existing entry.
    pub(crate) fn move_to(&mut self, index: usize, title: String) {
        let address = self.history[index].clone();
        self.history_index = Some(index);
        self.show(address, title);
    }

    fn show(&mut self, address: String, title: String) {
        self.display_address = address.clone();
        self.current_address = address;
        self.title = title;
        self.is_loading = false;
    }
}
