mod app;
pub mod command;
pub mod config;
pub mod controller;
pub mod effects;
pub mod session;
pub mod ui;

pub use app::run_app;
