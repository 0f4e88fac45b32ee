//! WordZenith
//!
//! Terminal screen that looks up words starting with a single letter.

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::App;
