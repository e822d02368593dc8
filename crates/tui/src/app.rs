//! Application state shared by the TUI components.
//!
//! The [`App`] holds the shared dispatcher, the calculator and the theme.
//! Components report what should happen through [`Effect`]s; the runtime
//! applies them and feeds [`Msg`]s back in.

use tcalc_engine::{Action, Calculator, InteractionDispatcher, Position, SharedDispatcher};
use tracing::{debug, warn};

use crate::ui::theme::{DraculaTheme, Theme};

/// Events delivered to the application and its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic animation tick.
    Tick,
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
}

/// Side effects requested by components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Leave the event loop.
    Quit,
    /// A keypad action was handled; activations feed the calculator.
    Feedback(Action),
}

pub struct App {
    pub dispatcher: SharedDispatcher,
    pub calculator: Calculator,
    pub theme: Box<dyn Theme>,
    /// Most recent action, shown in the hint bar.
    pub last_action: Option<Action>,
    /// Key drawn as pressed until the next tick.
    pub flash: Option<Position>,
}

impl App {
    pub fn new(dispatcher: InteractionDispatcher) -> Self {
        Self {
            dispatcher: SharedDispatcher::new(dispatcher),
            calculator: Calculator::new(),
            theme: Box::new(DraculaTheme::new()),
            last_action: None,
            flash: None,
        }
    }

    /// Whether the runtime should tick quickly to clear a pressed key.
    pub fn is_animating(&self) -> bool {
        self.flash.is_some()
    }

    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                self.flash = None;
            }
            Msg::Resize(width, height) => {
                debug!(width, height, "terminal resized");
            }
        }
        Vec::new()
    }

    /// Applies a handled keypad action to the calculator.
    pub fn apply_action(&mut self, action: Action) {
        match serde_json::to_string(&action) {
            Ok(record) => debug!(%record, "keypad action"),
            Err(error) => warn!(%error, "could not serialize keypad action"),
        }
        if action.is_activation() {
            self.flash = action.position;
            // Rejections are latched in the calculator and shown on the display.
            let _ = self.calculator.input(&action.value);
        }
        self.last_action = Some(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tcalc_engine::{NavigatorConfig, keypad};

    fn app() -> App {
        App::new(keypad::standard_dispatcher(NavigatorConfig::default()).unwrap())
    }

    fn key(app: &App, ch: char) -> Option<Action> {
        app.dispatcher
            .with(|dispatcher| dispatcher.handle_key_event(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)))
    }

    #[test]
    fn activation_feeds_calculator_and_flashes_key() {
        let mut app = app();
        let action = key(&app, '8').unwrap();
        app.apply_action(action);

        assert_eq!(app.calculator.display(), "8");
        assert_eq!(app.flash, Some(Position::new(1, 1)));
        assert!(app.is_animating());

        app.update(&Msg::Tick);
        assert_eq!(app.flash, None);
    }

    #[test]
    fn navigation_does_not_touch_calculator() {
        let mut app = app();
        let action = key(&app, 'j').unwrap();
        app.apply_action(action);

        assert_eq!(app.calculator.display(), "0");
        assert_eq!(app.flash, None);
        assert!(app.last_action.is_some());
    }
}
