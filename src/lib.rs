// Library surface for the binary and for headless integration tests.
pub mod app;
pub mod app_dirs;
pub mod classify;
pub mod config;
pub mod layout;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod theme;
pub mod ui;
pub mod word_list;
