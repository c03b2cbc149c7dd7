use simbrowser::managers::tab_manager::{TabManager, TabManagerTrait};
use simbrowser::types::tab::Tab;

fn manager_with_history(addresses: &[&str]) -> (TabManager, String) {
    let mut mgr = TabManager::new();
    let id = mgr.active_tab_id().to_string();
    for a in addresses {
        mgr.navigate(&id, a);
    }
    (mgr, id)
}

#[test]
fn test_starts_with_one_empty_active_tab() {
    let mgr = TabManager::new();
    assert_eq!(mgr.tab_count(), 1);
    let tab = mgr.get_active_tab();
    assert_eq!(tab.id, mgr.active_tab_id());
    assert_eq!(*tab, Tab::new(tab.id.clone()));
    assert_eq!(tab.title, "New Tab");
    assert_eq!(tab.history_index, None);
}

#[test]
fn test_open_tab_appends_and_activates() {
    let mut mgr = TabManager::new();
    let first = mgr.active_tab_id().to_string();
    let second = mgr.open_tab();

    assert_ne!(first, second);
    assert_eq!(mgr.tab_count(), 2);
    assert_eq!(mgr.active_tab_id(), second);
    assert_eq!(mgr.get_all_tabs()[1].id, second);
}

#[test]
fn test_navigate_domain_scenario() {
    let (mgr, id) = manager_with_history(&["wikipedia.org"]);
    let tab = mgr.get_tab(&id).unwrap();

    assert_eq!(tab.current_address, "https://wikipedia.org");
    assert_eq!(tab.display_address, "https://wikipedia.org");
    assert_eq!(tab.title, "wikipedia.org");
    assert_eq!(tab.history, vec!["https://wikipedia.org"]);
    assert_eq!(tab.history_index, Some(0));
    assert!(!tab.is_loading);
}

#[test]
fn test_navigate_search_scenario() {
    let (mgr, id) = manager_with_history(&["cats"]);
    let tab = mgr.get_tab(&id).unwrap();

    assert_eq!(tab.current_address, "internal://search?q=cats");
    assert_eq!(tab.title, "cats - Google Search");
}

#[test]
fn test_custom_search_engine_name_in_title() {
    let mut mgr = TabManager::with_search_engine("DuckDuckGo");
    let id = mgr.active_tab_id().to_string();
    mgr.navigate(&id, "rust lang");
    assert_eq!(mgr.get_tab(&id).unwrap().title, "rust lang - DuckDuckGo");
}

#[test]
fn test_navigate_truncates_forward_history() {
    let (mut mgr, id) = manager_with_history(&["a.com", "b.com", "c.com"]);
    assert!(mgr.go_back(&id));
    mgr.navigate(&id, "d.com");

    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(
        tab.history,
        vec!["https://a.com", "https://b.com", "https://d.com"]
    );
    assert_eq!(tab.history_index, Some(2));
    assert!(!tab.can_go_forward());
}

#[test]
fn test_blank_navigate_resets_tab_and_history() {
    let (mut mgr, id) = manager_with_history(&["a.com", "b.com"]);
    assert!(mgr.navigate(&id, "   "));

    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(*tab, Tab::new(id.clone()));
    assert!(!tab.can_go_back());
}

#[test]
fn test_back_and_forward_move_cursor() {
    let (mut mgr, id) = manager_with_history(&["a.com", "b.com"]);

    assert!(mgr.go_back(&id));
    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.current_address, "https://a.com");
    assert_eq!(tab.display_address, "https://a.com");
    assert_eq!(tab.title, "a.com");
    assert_eq!(tab.history_index, Some(0));

    assert!(mgr.go_forward(&id));
    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.current_address, "https://b.com");
    assert_eq!(tab.history_index, Some(1));
}

#[test]
fn test_back_at_start_and_forward_at_end_are_noops() {
    let (mut mgr, id) = manager_with_history(&["a.com"]);
    let before = mgr.snapshot();

    assert!(!mgr.go_back(&id));
    assert!(!mgr.go_forward(&id));
    assert_eq!(mgr.snapshot(), before);
}

#[test]
fn test_back_on_empty_tab_is_noop() {
    let mut mgr = TabManager::new();
    let id = mgr.active_tab_id().to_string();
    assert!(!mgr.go_back(&id));
    assert!(!mgr.go_forward(&id));
}

#[test]
fn test_close_inactive_tab_keeps_active_state() {
    let mut mgr = TabManager::new();
    let first = mgr.active_tab_id().to_string();
    let second = mgr.open_tab();
    mgr.navigate(&second, "example.com");
    let active_before = mgr.get_tab(&second).unwrap().clone();

    assert!(mgr.close_tab(&first));
    assert_eq!(mgr.tab_count(), 1);
    assert_eq!(mgr.active_tab_id(), second);
    assert_eq!(*mgr.get_active_tab(), active_before);
}

#[test]
fn test_close_active_tab_selects_tab_at_same_index() {
    let mut mgr = TabManager::new();
    let id1 = mgr.active_tab_id().to_string();
    let id2 = mgr.open_tab();
    let id3 = mgr.open_tab();

    mgr.switch_tab(&id2);
    mgr.close_tab(&id2);
    assert_eq!(mgr.active_tab_id(), id3);
    assert_eq!(mgr.get_all_tabs()[0].id, id1);
}

#[test]
fn test_close_active_last_tab_selects_first() {
    let mut mgr = TabManager::new();
    let id1 = mgr.active_tab_id().to_string();
    let _id2 = mgr.open_tab();
    let id3 = mgr.open_tab();

    assert_eq!(mgr.active_tab_id(), id3);
    mgr.close_tab(&id3);
    assert_eq!(mgr.active_tab_id(), id1);
}

#[test]
fn test_close_sole_tab_resets_in_place() {
    let (mut mgr, id) = manager_with_history(&["a.com", "b.com"]);

    assert!(mgr.close_tab(&id));
    assert_eq!(mgr.tab_count(), 1);
    assert_eq!(mgr.active_tab_id(), id);
    assert_eq!(*mgr.get_active_tab(), Tab::new(id.clone()));
}

#[test]
fn test_unknown_ids_are_noops() {
    let (mut mgr, _id) = manager_with_history(&["a.com"]);
    let before = mgr.snapshot();

    assert!(!mgr.close_tab("nonexistent"));
    assert!(!mgr.switch_tab("nonexistent"));
    assert!(!mgr.navigate("nonexistent", "b.com"));
    assert!(!mgr.go_back("nonexistent"));
    assert!(!mgr.go_forward("nonexistent"));
    assert!(mgr.reload("nonexistent").is_none());
    assert!(!mgr.restore_after_reload("nonexistent", "https://a.com"));
    assert!(!mgr.edit_address("nonexistent", "x"));

    assert_eq!(mgr.snapshot(), before);
}

#[test]
fn test_switch_tab() {
    let mut mgr = TabManager::new();
    let id1 = mgr.active_tab_id().to_string();
    let id2 = mgr.open_tab();
    assert_eq!(mgr.active_tab_id(), id2);

    assert!(mgr.switch_tab(&id1));
    assert_eq!(mgr.get_active_tab().id, id1);
}

#[test]
fn test_tabs_keep_separate_histories() {
    let mut mgr = TabManager::new();
    let id1 = mgr.active_tab_id().to_string();
    let id2 = mgr.open_tab();
    mgr.navigate(&id1, "a.com");
    mgr.navigate(&id2, "b.com");
    mgr.navigate(&id2, "c.com");

    assert_eq!(mgr.get_tab(&id1).unwrap().history.len(), 1);
    assert_eq!(mgr.get_tab(&id2).unwrap().history.len(), 2);
}

#[test]
fn test_reload_clears_then_restores() {
    let (mut mgr, id) = manager_with_history(&["a.com"]);

    let captured = mgr.reload(&id).unwrap();
    assert_eq!(captured, "https://a.com");
    let tab = mgr.get_tab(&id).unwrap();
    assert!(tab.current_address.is_empty());
    assert_eq!(tab.display_address, "https://a.com");
    assert!(tab.is_loading);
    assert_eq!(tab.history, vec!["https://a.com"]);

    assert!(mgr.restore_after_reload(&id, &captured));
    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.current_address, "https://a.com");
    assert!(!tab.is_loading);
}

#[test]
fn test_reload_on_new_tab_page_does_nothing() {
    let mut mgr = TabManager::new();
    let id = mgr.active_tab_id().to_string();
    assert!(mgr.reload(&id).is_none());
    assert!(!mgr.get_active_tab().is_loading);
}

#[test]
fn test_second_reload_during_pulse_is_ignored() {
    let (mut mgr, id) = manager_with_history(&["a.com"]);
    assert!(mgr.reload(&id).is_some());
    assert!(mgr.reload(&id).is_none());
}

#[test]
fn test_restore_dropped_after_navigating_away() {
    let (mut mgr, id) = manager_with_history(&["a.com"]);
    let captured = mgr.reload(&id).unwrap();
    mgr.navigate(&id, "b.com");

    assert!(!mgr.restore_after_reload(&id, &captured));
    assert_eq!(mgr.get_tab(&id).unwrap().current_address, "https://b.com");
}

#[test]
fn test_restore_dropped_after_going_back() {
    let (mut mgr, id) = manager_with_history(&["a.com", "b.com"]);
    let captured = mgr.reload(&id).unwrap();
    mgr.go_back(&id);

    assert!(!mgr.restore_after_reload(&id, &captured));
    assert_eq!(mgr.get_tab(&id).unwrap().current_address, "https://a.com");
}

#[test]
fn test_restore_dropped_after_tab_closed() {
    let mut mgr = TabManager::new();
    let id1 = mgr.active_tab_id().to_string();
    let id2 = mgr.open_tab();
    mgr.navigate(&id2, "a.com");
    let captured = mgr.reload(&id2).unwrap();
    mgr.close_tab(&id2);

    assert!(!mgr.restore_after_reload(&id2, &captured));
    assert_eq!(mgr.active_tab_id(), id1);
}

#[test]
fn test_edit_address_only_touches_display() {
    let (mut mgr, id) = manager_with_history(&["a.com"]);
    assert!(mgr.edit_address(&id, "b.co"));

    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.display_address, "b.co");
    assert_eq!(tab.current_address, "https://a.com");

    mgr.navigate(&id, "b.co");
    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.display_address, tab.current_address);
}

#[test]
fn test_snapshot_is_detached_copy() {
    let (mut mgr, id) = manager_with_history(&["a.com"]);
    let snap = mgr.snapshot();
    mgr.navigate(&id, "b.com");

    assert_eq!(snap.active_tab().unwrap().current_address, "https://a.com");
    assert_eq!(snap.active_tab_id, id);
}
