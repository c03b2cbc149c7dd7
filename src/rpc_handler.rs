//! RPC method handler for the newline-delimited JSON protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested without I/O.
//! `handle_method` maps a method name and params onto `App` and returns the
//! JSON result. Tab methods return the full snapshot after the change.

use std::time::Instant;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::tab_manager::TabManagerTrait;
use crate::services::internal_pages::{address_bar_text, page_for, simulated_results};
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::action::BrowserAction;
use crate::types::errors::RpcError;

fn str_param<'a>(params: &'a Value, key: &'static str) -> Result<&'a str, RpcError> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or(RpcError::MissingParam(key))
}

/// `tab_id` from params, or the active tab when omitted.
fn tab_param(app: &App, params: &Value) -> String {
    params
        .get("tab_id")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| app.tab_manager.active_tab_id().to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, RpcError> {
    serde_json::to_value(value).map_err(|e| RpcError::InvalidParams(e.to_string()))
}

/// Builds the action a `tab.*` method stands for.
fn tab_action(app: &App, method: &str, params: &Value) -> Result<Option<BrowserAction>, RpcError> {
    let action = match method {
        "tab.open" => BrowserAction::OpenTab,
        "tab.close" => BrowserAction::CloseTab {
            tab_id: tab_param(app, params),
        },
        "tab.switch" => BrowserAction::SwitchTab {
            tab_id: str_param(params, "tab_id")?.to_string(),
        },
        "tab.navigate" => BrowserAction::Navigate {
            tab_id: tab_param(app, params),
            input: str_param(params, "input")?.to_string(),
        },
        "tab.back" => BrowserAction::GoBack {
            tab_id: tab_param(app, params),
        },
        "tab.forward" => BrowserAction::GoForward {
            tab_id: tab_param(app, params),
        },
        "tab.reload" => BrowserAction::Reload {
            tab_id: tab_param(app, params),
        },
        "tab.edit_address" => BrowserAction::EditAddress {
            tab_id: tab_param(app, params),
            text: str_param(params, "text")?.to_string(),
        },
        _ => return Ok(None),
    };
    Ok(Some(action))
}

/// Dispatch one RPC method call.
pub fn handle_method(app: &mut App, method: &str, params: &Value) -> Result<Value, RpcError> {
    if let Some(action) = tab_action(app, method, params)? {
        let snapshot = app.dispatch(action, Instant::now());
        return to_json(&snapshot);
    }

    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Navigation ───
        "state.get" => to_json(&app.snapshot()),
        "dispatch" => {
            let action: BrowserAction = serde_json::from_value(params.clone())
                .map_err(|e| RpcError::InvalidParams(e.to_string()))?;
            let snapshot = app.dispatch(action, Instant::now());
            to_json(&snapshot)
        }

        // ─── Pages ───
        "page.content" => {
            let tab_id = tab_param(app, params);
            let tab = app
                .tab_manager
                .get_tab(&tab_id)
                .unwrap_or_else(|| app.tab_manager.get_active_tab());
            let content = page_for(&tab.current_address);
            Ok(json!({
                "tab_id": tab.id,
                "address_bar": address_bar_text(&tab.display_address),
                "can_go_back": tab.can_go_back(),
                "can_go_forward": tab.can_go_forward(),
                "is_loading": tab.is_loading,
                "content": to_json(&content)?,
            }))
        }
        "search.results" => {
            let query = str_param(params, "query")?;
            to_json(&simulated_results(query))
        }

        // ─── Settings ───
        "settings.get" => to_json(app.settings_engine.get_settings()),
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params
                .get("value")
                .cloned()
                .ok_or(RpcError::MissingParam("value"))?;
            app.settings_engine.set_value(key, value)?;
            app.apply_settings();
            Ok(json!({"ok": true}))
        }

        _ => Err(RpcError::UnknownMethod(method.to_string())),
    }
}
