//! UI rendering module for the TUI application.
//!
//! Runtime loop, layout, components and theme.

pub mod components;
pub mod layout;
pub mod main_component;
pub mod runtime;
pub mod theme;
