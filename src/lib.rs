pub mod app;
pub mod config;
pub mod logger;
pub mod preferences;
pub mod session;
pub mod status_bar;
pub mod ui;
