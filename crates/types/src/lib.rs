//! Shared value types for the tcalc keypad.
//!
//! These types are consumed by the focus engine, the terminal front end and
//! any host embedding the engine. They are plain values: positions, directions,
//! element tags and the error taxonomy surfaced by focus operations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A zero-based cell coordinate on the keypad grid.
///
/// Ordering is row-major: rows compare first, then columns. Sorting a list of
/// positions therefore yields the tab traversal order directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the cell `distance` steps away in `direction`, shifted by
    /// `offset` along the perpendicular axis.
    ///
    /// Returns `None` when the result would fall above or left of the grid
    /// origin.
    pub fn shifted(self, direction: Direction, distance: usize, offset: isize) -> Option<Position> {
        let distance = isize::try_from(distance).ok()?;
        let (row_delta, col_delta) = match direction {
            Direction::Up => (-distance, offset),
            Direction::Down => (distance, offset),
            Direction::Left => (offset, -distance),
            Direction::Right => (offset, distance),
        };
        Some(Position {
            row: self.row.checked_add_signed(row_delta)?,
            col: self.col.checked_add_signed(col_delta)?,
        })
    }

    /// The literal neighbouring cell in `direction`.
    pub fn adjacent(self, direction: Direction) -> Option<Position> {
        self.shifted(direction, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Directional navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// `true` for Left/Right.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Edge policy applied when navigation runs off the populated grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    /// Never wrap; rely on the fallback search only.
    None,
    /// Left/Right wrap to the opposite end of the same row.
    #[default]
    Row,
    /// Up/Down wrap to the opposite end of the same column.
    Column,
    /// Every direction wraps, preferring the same row or column.
    Both,
}

impl WrapMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            WrapMode::None => "none",
            WrapMode::Row => "row",
            WrapMode::Column => "column",
            WrapMode::Both => "both",
        }
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid wrap mode '{0}'; expected one of none, row, column, both")]
pub struct ParseWrapModeError(pub String);

impl FromStr for WrapMode {
    type Err = ParseWrapModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(WrapMode::None),
            "row" | "rows" => Ok(WrapMode::Row),
            "column" | "col" | "columns" => Ok(WrapMode::Column),
            "both" | "all" => Ok(WrapMode::Both),
            _ => Err(ParseWrapModeError(s.to_string())),
        }
    }
}

/// Closed set of keypad element categories.
///
/// Every consumer (styling, event mapping, arithmetic) matches on this
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Digits and the decimal point.
    Number,
    /// Binary operators and equals.
    Operator,
    /// Clear, sign toggle, percent.
    Special,
}

/// Visual/interactive lifecycle state of a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementState {
    #[default]
    Normal,
    Focused,
    Pressed,
    Disabled,
}

impl ElementState {
    /// Whether the transition table permits moving from `self` to `target`.
    ///
    /// Self-transitions are not in the table and are denied.
    pub const fn can_transition_to(self, target: ElementState) -> bool {
        use ElementState::*;
        match (self, target) {
            (Normal, Focused | Pressed | Disabled) => true,
            (Focused, Normal | Pressed | Disabled) => true,
            (Pressed, Normal | Focused | Disabled) => true,
            (Disabled, Normal | Focused) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ElementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementState::Normal => "normal",
            ElementState::Focused => "focused",
            ElementState::Pressed => "pressed",
            ElementState::Disabled => "disabled",
        };
        f.write_str(name)
    }
}

/// What a handled input did; carried on every action record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Navigate,
    Activate,
    Blur,
    Direct,
}

/// Errors surfaced by element, registry and navigation operations.
///
/// None of these are fatal. Hosts typically ignore `NoFocusableElements`
/// (navigation simply had no effect) and log `InvalidTransition` at debug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FocusError {
    #[error("invalid state transition from {from} to {to}")]
    InvalidTransition { from: ElementState, to: ElementState },
    #[error("no element registered at {0}")]
    NotFound(Position),
    #[error("no focusable elements")]
    NoFocusableElements,
}
