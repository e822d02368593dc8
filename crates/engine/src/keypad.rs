//! The reference calculator keypad.
//!
//! ```text
//!   C   ±   %   ÷
//!   7   8   9   ×
//!   4   5   6   −
//!   1   2   3   +
//!   0   .   =
//! ```
//!
//! Five rows by four columns; the bottom-right cell is intentionally empty.

use tcalc_types::{FocusError, Position};

use crate::{
    dispatch::InteractionDispatcher,
    element::Element,
    navigation::{Navigator, NavigatorConfig},
    registry::FocusRegistry,
};

pub const ROWS: usize = 5;
pub const COLS: usize = 4;

/// Elements of the standard layout in row-major order.
pub fn standard_layout() -> Vec<Element> {
    let at = Position::new;
    vec![
        Element::special("C", "C", at(0, 0)),
        Element::special("±", "±", at(0, 1)),
        Element::special("%", "%", at(0, 2)),
        Element::operator("÷", "/", at(0, 3)),
        Element::number("7", at(1, 0)),
        Element::number("8", at(1, 1)),
        Element::number("9", at(1, 2)),
        Element::operator("×", "*", at(1, 3)),
        Element::number("4", at(2, 0)),
        Element::number("5", at(2, 1)),
        Element::number("6", at(2, 2)),
        Element::operator("−", "-", at(2, 3)),
        Element::number("1", at(3, 0)),
        Element::number("2", at(3, 1)),
        Element::number("3", at(3, 2)),
        Element::operator("+", "+", at(3, 3)),
        Element::number("0", at(4, 0)),
        Element::number(".", at(4, 1)),
        Element::operator("=", "=", at(4, 2)),
    ]
}

/// Registry holding the standard layout, focused on the top-left key.
pub fn standard_registry() -> Result<FocusRegistry, FocusError> {
    FocusRegistry::with_elements(standard_layout())
}

/// Dispatcher over the standard layout with the given navigation settings.
pub fn standard_dispatcher(config: NavigatorConfig) -> Result<InteractionDispatcher, FocusError> {
    Ok(InteractionDispatcher::new(standard_registry()?, Navigator::new(config)))
}
