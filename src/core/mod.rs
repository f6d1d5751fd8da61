pub mod app;
pub mod config;
pub mod document;
pub mod status_log;
