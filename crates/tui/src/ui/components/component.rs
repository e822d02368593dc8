//! Component system for the calculator TUI.
//!
//! Components are self-contained UI elements that handle their own events
//! and render themselves into a provided `Rect`, reporting side effects back
//! to the application as [`Effect`]s.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

use crate::app::{App, Effect, Msg};

/// A UI component with its own state and behavior.
///
/// Components own only local UI behavior. Anything that changes shared
/// application state beyond the dispatcher is returned as an [`Effect`].
pub(crate) trait Component {
    /// Handle a key event routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// React to an application message.
    fn update(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
