pub mod app;
pub mod command;
pub mod handlers;
pub mod menu;
pub mod message;
pub mod models;
pub mod operations;
pub mod ui;
pub mod web;

pub use app::App;
pub use operations::run_app;
