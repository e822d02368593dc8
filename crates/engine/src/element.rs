//! Keypad elements and their per-element state machine.
//!
//! An [`Element`] is one interactive button on the grid. Its lifecycle
//! (normal, focused, pressed, disabled) is owned by a [`StateMachine`] that
//! validates every move against the transition table in
//! [`ElementState::can_transition_to`]. A denied transition never mutates
//! state.

use serde::{Deserialize, Serialize};
use tcalc_types::{ElementKind, ElementState, FocusError, Position};

/// Validated holder for a single element's [`ElementState`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMachine {
    state: ElementState,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ElementState {
        self.state
    }

    /// Moves to `target` if the transition table allows it.
    ///
    /// On denial the current state is left untouched and the error carries
    /// the attempted `(from, to)` pair.
    pub fn set_state(&mut self, target: ElementState) -> Result<(), FocusError> {
        if !self.state.can_transition_to(target) {
            return Err(FocusError::InvalidTransition {
                from: self.state,
                to: target,
            });
        }
        self.state = target;
        Ok(())
    }

    pub fn focus(&mut self) -> Result<(), FocusError> {
        self.set_state(ElementState::Focused)
    }

    pub fn press(&mut self) -> Result<(), FocusError> {
        self.set_state(ElementState::Pressed)
    }

    pub fn disable(&mut self) -> Result<(), FocusError> {
        self.set_state(ElementState::Disabled)
    }

    /// Pressed -> Normal. No-op in any other state.
    pub fn release(&mut self) -> Result<(), FocusError> {
        self.leave(ElementState::Pressed)
    }

    /// Focused -> Normal. No-op in any other state.
    pub fn blur(&mut self) -> Result<(), FocusError> {
        self.leave(ElementState::Focused)
    }

    /// Disabled -> Normal. No-op in any other state.
    pub fn enable(&mut self) -> Result<(), FocusError> {
        self.leave(ElementState::Disabled)
    }

    fn leave(&mut self, expected: ElementState) -> Result<(), FocusError> {
        if self.state != expected {
            return Ok(());
        }
        self.set_state(ElementState::Normal)
    }
}

/// A single button on the keypad grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    kind: ElementKind,
    label: String,
    value: String,
    position: Position,
    machine: StateMachine,
}

impl Element {
    pub fn new(kind: ElementKind, label: impl Into<String>, value: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            label: label.into(),
            value: value.into(),
            position,
            machine: StateMachine::new(),
        }
    }

    pub fn number(label: &str, position: Position) -> Self {
        Self::new(ElementKind::Number, label, label, position)
    }

    pub fn operator(label: &str, value: &str, position: Position) -> Self {
        Self::new(ElementKind::Operator, label, value, position)
    }

    pub fn special(label: &str, value: &str, position: Position) -> Self {
        Self::new(ElementKind::Special, label, value, position)
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> ElementState {
        self.machine.state()
    }

    /// Anything that is not disabled accepts input.
    pub fn is_interactive(&self) -> bool {
        self.state() != ElementState::Disabled
    }

    pub fn set_state(&mut self, target: ElementState) -> Result<(), FocusError> {
        self.machine.set_state(target)
    }

    pub fn focus(&mut self) -> Result<(), FocusError> {
        self.machine.focus()
    }

    pub fn press(&mut self) -> Result<(), FocusError> {
        self.machine.press()
    }

    pub fn release(&mut self) -> Result<(), FocusError> {
        self.machine.release()
    }

    pub fn blur(&mut self) -> Result<(), FocusError> {
        self.machine.blur()
    }

    pub fn disable(&mut self) -> Result<(), FocusError> {
        self.machine.disable()
    }

    pub fn enable(&mut self) -> Result<(), FocusError> {
        self.machine.enable()
    }
}
