pub mod app;
pub mod config;
pub mod fit;
pub mod ui;
