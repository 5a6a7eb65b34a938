//! Terminal User Interface module
//!
//! A full-screen rendering of the signup wizard using ratatui: a step
//! sidebar, one panel per step, and a status bar.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::{App, TuiView};
pub use terminal::run_tui;
