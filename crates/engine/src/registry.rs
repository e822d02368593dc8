//! Focus registry: the grid of elements and the single focus pointer.
//!
//! The registry is the only writer of element state once an element has been
//! added. It maintains the invariant that at most one element is `Focused`
//! and, when one is, its position equals [`FocusRegistry::focused_position`].

use std::collections::{HashMap, VecDeque};

use tcalc_types::{ElementState, FocusError, Position};
use tracing::debug;

use crate::element::Element;

/// Maximum number of positions retained in the focus history.
pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct FocusRegistry {
    elements: HashMap<Position, Element>,
    focused: Option<Position>,
    history: VecDeque<Position>,
}

impl FocusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from an initial set of elements.
    ///
    /// The first element added receives focus, as with [`FocusRegistry::add`].
    pub fn with_elements(elements: impl IntoIterator<Item = Element>) -> Result<Self, FocusError> {
        let mut registry = Self::new();
        for element in elements {
            registry.add(element)?;
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.elements.contains_key(&position)
    }

    /// Registers `element` at its own position and returns any element it
    /// replaced.
    ///
    /// A focused occupant is blurred before being replaced and the focus
    /// pointer is cleared. Adding to an empty registry focuses the new element.
    pub fn add(&mut self, element: Element) -> Result<Option<Element>, FocusError> {
        let position = element.position();
        let was_empty = self.elements.is_empty();

        if self.focused == Some(position) {
            self.blur()?;
        }
        let replaced = self.elements.insert(position, element);
        if replaced.is_some() {
            debug!(position = %position, "replaced keypad element");
        }

        if was_empty {
            self.set_focus(position)?;
        }
        Ok(replaced)
    }

    /// Unregisters the element at `position`, blurring it first if focused.
    pub fn remove(&mut self, position: Position) -> Result<Element, FocusError> {
        if !self.elements.contains_key(&position) {
            return Err(FocusError::NotFound(position));
        }
        if self.focused == Some(position) {
            self.blur()?;
        }
        self.elements.remove(&position).ok_or(FocusError::NotFound(position))
    }

    /// Moves focus to the element at `position`.
    ///
    /// The previously focused element is blurred first; a failure there is
    /// returned and focus is left where it was.
    pub fn set_focus(&mut self, position: Position) -> Result<(), FocusError> {
        if !self.elements.contains_key(&position) {
            return Err(FocusError::NotFound(position));
        }

        if let Some(previous) = self.focused
            && let Some(element) = self.elements.get_mut(&previous)
        {
            element.blur()?;
        }
        self.focused = None;

        self.elements
            .get_mut(&position)
            .ok_or(FocusError::NotFound(position))?
            .focus()?;
        self.focused = Some(position);
        self.record_history(position);
        Ok(())
    }

    /// Clears focus. No-op when nothing is focused.
    pub fn blur(&mut self) -> Result<(), FocusError> {
        let Some(position) = self.focused else {
            return Ok(());
        };
        if let Some(element) = self.elements.get_mut(&position) {
            element.blur()?;
        }
        self.focused = None;
        Ok(())
    }

    /// Presses and immediately releases the element at `position`.
    ///
    /// The focused element returns to `Focused` after release so the focus
    /// invariant still holds; any other element returns to `Normal`.
    pub fn activate(&mut self, position: Position) -> Result<(), FocusError> {
        let is_focused = self.focused == Some(position);
        let element = self.elements.get_mut(&position).ok_or(FocusError::NotFound(position))?;
        element.press()?;
        if is_focused {
            element.set_state(ElementState::Focused)
        } else {
            element.release()
        }
    }

    /// Disables the element at `position`, dropping focus first if it held it.
    pub fn disable(&mut self, position: Position) -> Result<(), FocusError> {
        if !self.elements.contains_key(&position) {
            return Err(FocusError::NotFound(position));
        }
        if self.focused == Some(position) {
            self.blur()?;
        }
        let element = self.elements.get_mut(&position).ok_or(FocusError::NotFound(position))?;
        if element.state() == ElementState::Disabled {
            return Ok(());
        }
        element.disable()
    }

    pub fn enable(&mut self, position: Position) -> Result<(), FocusError> {
        self.elements
            .get_mut(&position)
            .ok_or(FocusError::NotFound(position))?
            .enable()
    }

    pub fn focused_position(&self) -> Option<Position> {
        self.focused
    }

    pub fn focused_element(&self) -> Option<&Element> {
        self.focused.and_then(|position| self.elements.get(&position))
    }

    pub fn element_at(&self, position: Position) -> Option<&Element> {
        self.elements.get(&position)
    }

    /// All registered positions in row-major order.
    pub fn all_positions(&self) -> Vec<Position> {
        let mut positions: Vec<Position> = self.elements.keys().copied().collect();
        positions.sort_unstable();
        positions
    }

    /// Registered positions whose element is not disabled, in row-major order.
    pub fn interactive_positions(&self) -> Vec<Position> {
        let mut positions: Vec<Position> = self
            .elements
            .values()
            .filter(|element| element.is_interactive())
            .map(Element::position)
            .collect();
        positions.sort_unstable();
        positions
    }

    /// Elements in row-major order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.all_positions().into_iter().filter_map(move |position| self.elements.get(&position))
    }

    /// Previously focused positions, oldest first.
    pub fn history(&self) -> &VecDeque<Position> {
        &self.history
    }

    fn record_history(&mut self, position: Position) {
        if let Some(index) = self.history.iter().position(|entry| *entry == position) {
            self.history.remove(index);
        }
        self.history.push_back(position);
        while self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
    }
}
