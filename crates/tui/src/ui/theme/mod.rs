//! Theme styling module for the TUI UI layer.
//!
//! A single Dracula-derived palette, the semantic roles it fills in, and
//! helper builders for blocks and keypad buttons. Prefer these helpers over
//! hard-coding colors.

pub mod dracula;
pub mod roles;
pub mod theme_helpers;

pub use dracula::DraculaTheme;
pub use roles::Theme;
