// Services: pure address helpers plus the settings store.

pub mod internal_pages;
pub mod page_resolver;
pub mod settings_engine;
pub mod url_normalizer;
