// src/lib.rs

pub mod app;
pub mod chat_message;
pub mod chat_panel;
pub mod chat_view;
pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod goals_view;
pub mod key_handlers;
pub mod log_view;
pub mod logging;
pub mod markup;
pub mod mock_data;
pub mod overview_view;
pub mod portfolio_view;
pub mod splash_screen;
pub mod status_indicator;
pub mod transactions_view;
pub mod ui;

pub use app::{App, AppScreen};
