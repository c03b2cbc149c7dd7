//! Navigation controller: the tab collection, the active-tab pointer and the
//! per-tab history rules.
//!
//! Every operation is total. Unknown tab ids are ignored and reported as
//! `false` ("nothing changed"); callers never see an error.

use uuid::Uuid;

use crate::services::page_resolver::{title_for, DEFAULT_SEARCH_ENGINE_NAME};
use crate::services::url_normalizer::normalize;
use crate::types::snapshot::BrowserSnapshot;
use crate::types::tab::Tab;

/// Trait defining the navigation interface.
pub trait TabManagerTrait {
    fn open_tab(&mut self) -> String;
    fn close_tab(&mut self, tab_id: &str) -> bool;
    fn switch_tab(&mut self, tab_id: &str) -> bool;
    fn navigate(&mut self, tab_id: &str, input: &str) -> bool;
    fn go_back(&mut self, tab_id: &str) -> bool;
    fn go_forward(&mut self, tab_id: &str) -> bool;
    fn reload(&mut self, tab_id: &str) -> Option<String>;
    fn restore_after_reload(&mut self, tab_id: &str, address: &str) -> bool;
    fn edit_address(&mut self, tab_id: &str, text: &str) -> bool;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn get_all_tabs(&self) -> &[Tab];
    fn get_active_tab(&self) -> &Tab;
    fn active_tab_id(&self) -> &str;
    fn tab_count(&self) -> usize;
    fn snapshot(&self) -> BrowserSnapshot;
}

/// In-memory tab manager. Never holds fewer than one tab.
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: String,
    search_engine_name: String,
}

impl TabManager {
    /// Starts with a single empty tab, active.
    pub fn new() -> Self {
        Self::with_search_engine(DEFAULT_SEARCH_ENGINE_NAME)
    }

    pub fn with_search_engine(search_engine_name: &str) -> Self {
        let first = Tab::new(Self::new_id());
        let active_tab_id = first.id.clone();
        Self {
            tabs: vec![first],
            active_tab_id,
            search_engine_name: search_engine_name.to_string(),
        }
    }

    /// Changes the engine name used for titles of future navigations.
    pub fn set_search_engine_name(&mut self, name: &str) {
        self.search_engine_name = name.to_string();
    }

    pub fn search_engine_name(&self) -> &str {
        &self.search_engine_name
    }

    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn find_tab_mut(&mut self, tab_id: &str) -> Option<&mut Tab> {
        let found = self.tabs.iter_mut().find(|t| t.id == tab_id);
        if found.is_none() {
            log::debug!("Ignoring operation on unknown tab {}", tab_id);
        }
        found
    }

    /// Moves the history cursor of `tab_id` to `index` if `pick` allows it.
    fn step(&mut self, tab_id: &str, pick: impl Fn(&Tab) -> Option<usize>) -> bool {
        let engine = self.search_engine_name.clone();
        let Some(tab) = self.find_tab_mut(tab_id) else {
            return false;
        };
        let Some(index) = pick(&*tab) else {
            return false;
        };
        let title = title_for(&tab.history[index], &engine);
        tab.move_to(index, title);
        true
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Appends a new empty tab and activates it. Returns its id.
    fn open_tab(&mut self) -> String {
        let tab = Tab::new(Self::new_id());
        let id = tab.id.clone();
        self.tabs.push(tab);
        self.active_tab_id = id.clone();
        log::info!("Opened tab {} ({} open)", id, self.tabs.len());
        id
    }

    /// Closes a tab. The last remaining tab is reset in place instead.
    ///
    /// When the active tab is removed, the tab now at its former index takes
    /// over, or the first tab if it was at the end.
    fn close_tab(&mut self, tab_id: &str) -> bool {
        let Some(index) = self.find_tab_index(tab_id) else {
            log::debug!("Ignoring close of unknown tab {}", tab_id);
            return false;
        };

        if self.tabs.len() == 1 {
            self.tabs[0].reset();
            log::info!("Reset last tab {}", tab_id);
            return true;
        }

        self.tabs.remove(index);
        if self.active_tab_id == tab_id {
            let next = if index < self.tabs.len() { index } else { 0 };
            self.active_tab_id = self.tabs[next].id.clone();
        }
        log::info!("Closed tab {} ({} open)", tab_id, self.tabs.len());
        true
    }

    /// Activates `tab_id`. Unknown ids are ignored.
    fn switch_tab(&mut self, tab_id: &str) -> bool {
        if self.find_tab_index(tab_id).is_none() {
            log::debug!("Ignoring switch to unknown tab {}", tab_id);
            return false;
        }
        self.active_tab_id = tab_id.to_string();
        true
    }

    /// Navigates a tab to raw user input.
    ///
    /// Blank input resets the tab to the new-tab state, history included.
    /// Anything else is normalized, forward history is truncated and the new
    /// address becomes the last entry.
    fn navigate(&mut self, tab_id: &str, input: &str) -> bool {
        let engine = self.search_engine_name.clone();
        let Some(tab) = self.find_tab_mut(tab_id) else {
            return false;
        };

        if input.trim().is_empty() {
            tab.reset();
            return true;
        }

        let address = normalize(input);
        let title = title_for(&address, &engine);
        log::debug!("Tab {} -> {}", tab_id, address);
        tab.push_entry(address, title);
        true
    }

    fn go_back(&mut self, tab_id: &str) -> bool {
        self.step(tab_id, |tab| match tab.history_index {
            Some(i) if i > 0 => Some(i - 1),
            _ => None,
        })
    }

    fn go_forward(&mut self, tab_id: &str) -> bool {
        self.step(tab_id, |tab| match tab.history_index {
            Some(i) if i + 1 < tab.history.len() => Some(i + 1),
            _ => None,
        })
    }

    /// Starts a reload pulse: clears the rendered address and marks the tab
    /// loading. Returns the address to restore once the pulse delay elapses.
    fn reload(&mut self, tab_id: &str) -> Option<String> {
        let tab = self.find_tab_mut(tab_id)?;
        if tab.current_address.is_empty() {
            return None;
        }
        tab.is_loading = true;
        Some(std::mem::take(&mut tab.current_address))
    }

    /// Finishes a reload pulse.
    ///
    /// Dropped unless the tab still exists, is still mid-pulse and its
    /// current history entry is the captured address.
    fn restore_after_reload(&mut self, tab_id: &str, address: &str) -> bool {
        let Some(tab) = self.find_tab_mut(tab_id) else {
            return false;
        };
        let pending = tab.is_loading
            && tab.current_address.is_empty()
            && tab.current_entry() == Some(address);
        if !pending {
            log::debug!("Dropping stale reload restore for tab {}", tab_id);
            return false;
        }
        tab.current_address = address.to_string();
        tab.is_loading = false;
        true
    }

    /// Updates only the address bar text while the user is typing.
    fn edit_address(&mut self, tab_id: &str, text: &str) -> bool {
        let Some(tab) = self.find_tab_mut(tab_id) else {
            return false;
        };
        tab.display_address = text.to_string();
        true
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn get_active_tab(&self) -> &Tab {
        self.get_tab(&self.active_tab_id).unwrap_or(&self.tabs[0])
    }

    fn active_tab_id(&self) -> &str {
        &self.active_tab_id
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn snapshot(&self) -> BrowserSnapshot {
        BrowserSnapshot {
            tabs: self.tabs.clone(),
            active_tab_id: self.active_tab_id.clone(),
        }
    }
}
