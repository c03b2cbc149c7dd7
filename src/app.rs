//! App core.
//!
//! Owns the settings, the navigation controller and the reload timer queue.
//! It is the single writer of navigation state: every change goes through
//! `dispatch` or `fire_due`, and each returns after the change is complete.

use std::time::{Duration, Instant};

use crate::managers::reload_scheduler::ReloadScheduler;
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::action::BrowserAction;
use crate::types::errors::SettingsError;
use crate::types::snapshot::BrowserSnapshot;

pub struct App {
    pub settings_engine: SettingsEngine,
    pub tab_manager: TabManager,
    pub reload_scheduler: ReloadScheduler,
}

impl App {
    /// Creates a new App, loading settings from `config_path` or the platform default.
    pub fn new(config_path: Option<String>) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load()?;

        let tab_manager = TabManager::with_search_engine(&settings.search.engine_name);
        let reload_scheduler =
            ReloadScheduler::new(Duration::from_millis(settings.navigation.reload_pulse_ms));

        Ok(Self {
            settings_engine,
            tab_manager,
            reload_scheduler,
        })
    }

    /// Pushes the current settings into the manager and the scheduler.
    pub fn apply_settings(&mut self) {
        let settings = self.settings_engine.get_settings();
        self.tab_manager
            .set_search_engine_name(&settings.search.engine_name);
        self.reload_scheduler
            .set_delay(Duration::from_millis(settings.navigation.reload_pulse_ms));
    }

    /// Applies one action and returns the resulting state.
    pub fn dispatch(&mut self, action: BrowserAction, now: Instant) -> BrowserSnapshot {
        let changed = match &action {
            BrowserAction::OpenTab => {
                self.tab_manager.open_tab();
                true
            }
            BrowserAction::CloseTab { tab_id } => self.tab_manager.close_tab(tab_id),
            BrowserAction::SwitchTab { tab_id } => self.tab_manager.switch_tab(tab_id),
            BrowserAction::Navigate { tab_id, input } => self.tab_manager.navigate(tab_id, input),
            BrowserAction::GoBack { tab_id } => self.tab_manager.go_back(tab_id),
            BrowserAction::GoForward { tab_id } => self.tab_manager.go_forward(tab_id),
            BrowserAction::Reload { tab_id } => match self.tab_manager.reload(tab_id) {
                Some(address) => {
                    self.reload_scheduler.schedule(tab_id, address, now);
                    true
                }
                None => false,
            },
            BrowserAction::EditAddress { tab_id, text } => {
                self.tab_manager.edit_address(tab_id, text)
            }
        };

        if !changed {
            log::debug!("No-op action: {:?}", action);
        }
        self.tab_manager.snapshot()
    }

    /// Applies every reload restore due at `now`. Returns how many took effect.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        self.reload_scheduler
            .take_due(now)
            .into_iter()
            .filter(|p| self.tab_manager.restore_after_reload(&p.tab_id, &p.address))
            .count()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.reload_scheduler.next_deadline()
    }

    pub fn snapshot(&self) -> BrowserSnapshot {
        self.tab_manager.snapshot()
    }
}
