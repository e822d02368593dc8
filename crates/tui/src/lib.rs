//! # tcalc TUI
//!
//! Terminal front end for the tcalc keypad. The keypad is drawn as a grid of
//! buttons; arrow keys (or `hjkl`) move focus, Tab walks keys in reading
//! order, Enter or Space presses the focused key, and typing a digit or
//! operator presses that key directly. Left-clicking a key presses it.
//!
//! The focus logic lives in `tcalc-engine`; this crate owns the terminal,
//! the event loop and rendering.

mod app;
mod ui;

use anyhow::{Context, Result};
use tcalc_engine::{NavigatorConfig, keypad};
use tracing::info;

/// Runs the TUI until the user quits.
///
/// # Errors
///
/// Terminal setup failures (raw mode, alternate screen) and rendering
/// errors are returned; input that the keypad cannot handle is not an error.
pub async fn run(config: NavigatorConfig) -> Result<()> {
    let dispatcher = keypad::standard_dispatcher(config).context("build the standard keypad")?;
    info!(
        wrap_mode = %config.wrap_mode,
        wrap_enabled = config.wrap_enabled,
        search_bound = %config.search_bound,
        "starting tcalc"
    );
    ui::runtime::run_app(dispatcher).await
}
