use serde::{Deserialize, Serialize};

/// Every intent the presentation layer can send to the navigation core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BrowserAction {
    OpenTab,
    CloseTab { tab_id: String },
    SwitchTab { tab_id: String },
    Navigate { tab_id: String, input: String },
    GoBack { tab_id: String },
    GoForward { tab_id: String },
    Reload { tab_id: String },
    EditAddress { tab_id: String, text: String },
}

impl BrowserAction {
    /// The tab this action targets, if any.
    pub fn tab_id(&self) -> Option<&str> {
        match self {
            BrowserAction::OpenTab => None,
            BrowserAction::CloseTab { tab_id }
            | BrowserAction::SwitchTab { tab_id }
            | BrowserAction::Navigate { tab_id, .. }
            | BrowserAction::GoBack { tab_id }
            | BrowserAction::GoForward { tab_id }
            | BrowserAction::Reload { tab_id }
            | BrowserAction::EditAddress { tab_id, .. } => Some(tab_id),
        }
    }
}
