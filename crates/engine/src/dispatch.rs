//! Interaction dispatch: raw input in, action records out.
//!
//! Each key event is classified into an [`InputClass`] and routed to the
//! navigator, the tab traversal, or direct activation. The registry's focus
//! pointer is only ever changed through [`FocusRegistry`] methods.
//!
//! Failures are absorbed here: moving off the grid edge or pressing a
//! disabled key is expected behaviour, so the caller only sees "not handled".

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tcalc_types::{ActionKind, Direction, FocusError, Position};
use tracing::{debug, warn};

use crate::{
    action::Action,
    geometry::GridGeometry,
    navigation::Navigator,
    registry::FocusRegistry,
    tab_order,
};

/// Typed characters that stand in for an element value.
pub const VALUE_ALIASES: &[(char, &str)] = &[
    ('x', "*"),
    ('X', "*"),
    ('×', "*"),
    (':', "/"),
    ('÷', "/"),
    ('−', "-"),
    ('c', "C"),
    ('n', "±"),
    (',', "."),
];

/// Classification of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputClass {
    Navigation(Direction),
    Tab { backward: bool },
    Activation,
    Escape,
    DirectValue(char),
    Unrecognized,
}

impl InputClass {
    pub fn of(key: &KeyEvent) -> InputClass {
        if key.kind == KeyEventKind::Release {
            return InputClass::Unrecognized;
        }
        let modifiers = key.modifiers.difference(KeyModifiers::SHIFT);
        if !modifiers.is_empty() {
            return InputClass::Unrecognized;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => InputClass::Navigation(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => InputClass::Navigation(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => InputClass::Navigation(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => InputClass::Navigation(Direction::Right),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => InputClass::Tab { backward: true },
            KeyCode::Tab => InputClass::Tab { backward: false },
            KeyCode::BackTab => InputClass::Tab { backward: true },
            KeyCode::Enter | KeyCode::Char(' ') => InputClass::Activation,
            KeyCode::Esc => InputClass::Escape,
            KeyCode::Char(ch) => InputClass::DirectValue(ch),
            _ => InputClass::Unrecognized,
        }
    }
}

/// Owns the registry and navigator and turns input into focus changes.
#[derive(Debug, Clone)]
pub struct InteractionDispatcher {
    registry: FocusRegistry,
    navigator: Navigator,
}

impl InteractionDispatcher {
    pub fn new(registry: FocusRegistry, navigator: Navigator) -> Self {
        Self { registry, navigator }
    }

    pub fn registry(&self) -> &FocusRegistry {
        &self.registry
    }

    /// Handles one key event, returning `None` when it was not handled.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        let class = InputClass::of(&key);
        let result = match class {
            InputClass::Navigation(direction) => self.navigate(direction).map(Some),
            InputClass::Tab { backward } => self.tab(backward).map(Some),
            InputClass::Activation => self.activate_focused().map(Some),
            InputClass::Escape => self.escape().map(Some),
            InputClass::DirectValue(ch) => self.activate_value(ch),
            InputClass::Unrecognized => Ok(None),
        };
        absorb(result, class)
    }

    /// Focuses and activates whatever is under the pointer.
    pub fn handle_pointer_event<G: GridGeometry + ?Sized>(&mut self, column: u16, row: u16, geometry: &G) -> Option<Action> {
        let position = geometry.position_at(column, row)?;
        let interactive = self.registry.element_at(position).is_some_and(|element| element.is_interactive());
        if !interactive {
            debug!(column, row, position = %position, "pointer missed an interactive element");
            return None;
        }
        absorb(
            self.focus_and_activate(position, ActionKind::Activate).map(Some),
            InputClass::Activation,
        )
    }

    /// Moves focus one step in `direction`.
    ///
    /// With nothing focused, focus lands on the first element in tab order.
    pub fn navigate(&mut self, direction: Direction) -> Result<Action, FocusError> {
        let target = match self.registry.focused_position() {
            Some(from) => self.navigator.navigate(&self.registry, from, direction)?,
            None => tab_order::next(&self.registry, None).ok_or(FocusError::NoFocusableElements)?,
        };
        self.focus_action(target, ActionKind::Navigate)
    }

    /// Advances focus along the row-major tab order.
    pub fn tab(&mut self, backward: bool) -> Result<Action, FocusError> {
        let current = self.registry.focused_position();
        let target = if backward {
            tab_order::previous(&self.registry, current)
        } else {
            tab_order::next(&self.registry, current)
        };
        let target = target.ok_or(FocusError::NoFocusableElements)?;
        self.focus_action(target, ActionKind::Navigate)
    }

    /// Presses and releases the focused element.
    pub fn activate_focused(&mut self) -> Result<Action, FocusError> {
        let position = self.registry.focused_position().ok_or(FocusError::NoFocusableElements)?;
        self.focus_and_activate(position, ActionKind::Activate)
    }

    /// Finds the first interactive element (row-major) whose value matches
    /// `ch` directly or through [`VALUE_ALIASES`], then focuses and activates it.
    pub fn activate_value(&mut self, ch: char) -> Result<Option<Action>, FocusError> {
        let Some(position) = self.position_for_char(ch) else {
            return Ok(None);
        };
        self.focus_and_activate(position, ActionKind::Direct).map(Some)
    }

    /// Drops focus and reports what lost it.
    pub fn escape(&mut self) -> Result<Action, FocusError> {
        let previous = self.registry.focused_position();
        self.registry.blur()?;
        let element = previous.and_then(|position| self.registry.element_at(position));
        Ok(Action::blur(element))
    }

    /// Enables or disables a key. Disabling the focused key drops focus.
    pub fn set_enabled(&mut self, position: Position, enabled: bool) -> Result<(), FocusError> {
        if enabled {
            self.registry.enable(position)
        } else {
            self.registry.disable(position)
        }
    }

    /// Row-major lookup of the element a typed character refers to.
    pub fn position_for_char(&self, ch: char) -> Option<Position> {
        let mut buffer = [0u8; 4];
        let typed: &str = ch.encode_utf8(&mut buffer);
        let alias = VALUE_ALIASES.iter().find(|(key, _)| *key == ch).map(|(_, value)| *value);

        self.registry
            .elements()
            .filter(|element| element.is_interactive())
            .find(|element| element.value() == typed || alias.is_some_and(|value| element.value() == value))
            .map(|element| element.position())
    }

    fn focus_action(&mut self, position: Position, kind: ActionKind) -> Result<Action, FocusError> {
        self.registry.set_focus(position)?;
        self.snapshot(position, kind)
    }

    fn focus_and_activate(&mut self, position: Position, kind: ActionKind) -> Result<Action, FocusError> {
        self.registry.set_focus(position)?;
        self.registry.activate(position)?;
        self.snapshot(position, kind)
    }

    fn snapshot(&self, position: Position, kind: ActionKind) -> Result<Action, FocusError> {
        self.registry
            .element_at(position)
            .map(|element| Action::for_element(kind, element))
            .ok_or(FocusError::NotFound(position))
    }
}

fn absorb(result: Result<Option<Action>, FocusError>, class: InputClass) -> Option<Action> {
    match result {
        Ok(action) => action,
        Err(error @ (FocusError::InvalidTransition { .. } | FocusError::NoFocusableElements)) => {
            debug!(?class, %error, "input had no effect");
            None
        }
        Err(error @ FocusError::NotFound(_)) => {
            warn!(?class, %error, "input referenced a missing element");
            None
        }
    }
}
