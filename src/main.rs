//! simbrowser — console walk-through of the navigation core.
//!
//! Drives the state machine through a short scripted session and prints each
//! resulting state. The presentation layer is out of scope; this is its stand-in.

use std::time::{Duration, Instant};

use simbrowser::app::App;
use simbrowser::managers::tab_manager::TabManagerTrait;
use simbrowser::services::internal_pages::{address_bar_text, page_for, PageContent};
use simbrowser::types::action::BrowserAction;
use simbrowser::types::snapshot::BrowserSnapshot;

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn print_state(snapshot: &BrowserSnapshot) {
    for (i, tab) in snapshot.tabs.iter().enumerate() {
        let marker = if tab.id == snapshot.active_tab_id { "*" } else { " " };
        let index = tab
            .history_index
            .map_or_else(|| "-".to_string(), |i| i.to_string());
        println!(
            "  {}[{}] {:<28} bar={:<28} history={} index={}{}",
            marker,
            i,
            tab.title,
            format!("\"{}\"", address_bar_text(&tab.display_address)),
            tab.history.len(),
            index,
            if tab.is_loading { " (loading)" } else { "" },
        );
    }
    if let Some(tab) = snapshot.active_tab() {
        match page_for(&tab.current_address) {
            PageContent::NewTab => println!("  content: new tab page"),
            PageContent::SearchResults { query, results } => {
                println!("  content: {} results for \"{}\"", results.len(), query)
            }
            PageContent::SystemPage { address } => println!("  content: system page {}", address),
            PageContent::Embedded { url } => println!("  content: embed {}", url),
        }
    }
    println!();
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut app = match App::new(None) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };
    let now = Instant::now();
    let first = app.tab_manager.active_tab_id().to_string();

    section("Start");
    print_state(&app.snapshot());

    section("Navigate: wikipedia.org, then \"cats\"");
    app.dispatch(
        BrowserAction::Navigate {
            tab_id: first.clone(),
            input: "wikipedia.org".to_string(),
        },
        now,
    );
    let state = app.dispatch(
        BrowserAction::Navigate {
            tab_id: first.clone(),
            input: "cats".to_string(),
        },
        now,
    );
    print_state(&state);

    section("Back, then navigate elsewhere (forward history dropped)");
    app.dispatch(BrowserAction::GoBack { tab_id: first.clone() }, now);
    let state = app.dispatch(
        BrowserAction::Navigate {
            tab_id: first.clone(),
            input: "https://example.org/docs".to_string(),
        },
        now,
    );
    print_state(&state);

    section("Reload pulse");
    let state = app.dispatch(BrowserAction::Reload { tab_id: first.clone() }, now);
    print_state(&state);
    let later = now + app.reload_scheduler.delay() + Duration::from_millis(1);
    app.fire_due(later);
    print_state(&app.snapshot());

    section("Open a second tab, close the first");
    app.dispatch(BrowserAction::OpenTab, later);
    let state = app.dispatch(BrowserAction::CloseTab { tab_id: first }, later);
    print_state(&state);

    section("Close the last tab (reset in place)");
    let last = app.tab_manager.active_tab_id().to_string();
    let state = app.dispatch(BrowserAction::CloseTab { tab_id: last }, later);
    print_state(&state);
}
