// State owners: the navigation controller and its reload timer queue.

pub mod reload_scheduler;
pub mod tab_manager;
