//! Pokemon catalog TUI with a tabbed detail modal
//!
//! This library exposes the application's modules for testing.

pub mod action;
pub mod artwork;
pub mod catalog;
pub mod components;
pub mod effect;
pub mod logging;
pub mod panels;
pub mod reducer;
pub mod state;
pub mod tabs;
