//! Terminal UI layer for the funding dashboard.
//!
//! Provides themes, reusable components, the three display-mode views
//! (overall, startup, investor), and the interactive application event
//! loop built on top of [`ratatui`].

pub mod app;
pub mod components;
pub mod investor_view;
pub mod overview_view;
pub mod startup_view;
pub mod themes;

pub use funding_core as core;
