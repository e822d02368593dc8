//! Directional focus navigation over the keypad grid.
//!
//! # Algorithm
//!
//! Only interactive elements are targets; disabled keys are stepped over as
//! if their cell were empty.
//!
//! 1. The literal neighbour in the requested direction wins when occupied.
//! 2. Otherwise, if wrapping is enabled and the [`WrapMode`] covers the
//!    direction, jump to the opposite extreme of the same row or column
//!    (`Both` falls back to the overall extreme when that line is empty).
//! 3. Otherwise run a bounded expanding search: for each distance `d` in
//!    `1..=radius`, scan every perpendicular offset in `-d..=d` on the line `d`
//!    cells ahead and take the first occupied cell.
//!
//! The result depends only on registry contents, configuration and input, so
//! two navigators with equal inputs always agree.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tcalc_types::{Direction, FocusError, Position, WrapMode};
use thiserror::Error;
use tracing::debug;

use crate::registry::FocusRegistry;

/// Default radius of the fallback search.
pub const DEFAULT_SEARCH_RADIUS: usize = 10;

/// How far the fallback search may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchBound {
    /// Stop after a fixed number of rings.
    Fixed(usize),
    /// Derive the radius from the occupied grid so no registered cell is out of reach.
    GridExtent,
}

impl Default for SearchBound {
    fn default() -> Self {
        SearchBound::Fixed(DEFAULT_SEARCH_RADIUS)
    }
}

impl fmt::Display for SearchBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchBound::Fixed(radius) => write!(f, "{radius}"),
            SearchBound::GridExtent => f.write_str("grid"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid search radius '{0}'; expected a positive integer or 'grid'")]
pub struct ParseSearchBoundError(pub String);

impl FromStr for SearchBound {
    type Err = ParseSearchBoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("grid") {
            return Ok(SearchBound::GridExtent);
        }
        match trimmed.parse::<usize>() {
            Ok(radius) if radius > 0 => Ok(SearchBound::Fixed(radius)),
            _ => Err(ParseSearchBoundError(s.to_string())),
        }
    }
}

/// Navigation settings fixed for the lifetime of a [`Navigator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    pub wrap_mode: WrapMode,
    pub wrap_enabled: bool,
    pub search_bound: SearchBound,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            wrap_mode: WrapMode::default(),
            wrap_enabled: true,
            search_bound: SearchBound::default(),
        }
    }
}

impl NavigatorConfig {
    pub fn with_wrap_mode(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }

    pub fn with_wrap_enabled(mut self, wrap_enabled: bool) -> Self {
        self.wrap_enabled = wrap_enabled;
        self
    }

    pub fn with_search_bound(mut self, search_bound: SearchBound) -> Self {
        self.search_bound = search_bound;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    config: NavigatorConfig,
}

impl Navigator {
    pub fn new(config: NavigatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Computes the position focus should move to from `from` in `direction`.
    ///
    /// `from` does not need to be registered. Fails with
    /// `NoFocusableElements` when no element is interactive or nothing is reachable.
    pub fn navigate(&self, registry: &FocusRegistry, from: Position, direction: Direction) -> Result<Position, FocusError> {
        let positions = registry.interactive_positions();
        if positions.is_empty() {
            return Err(FocusError::NoFocusableElements);
        }

        if let Some(adjacent) = from.adjacent(direction)
            && positions.binary_search(&adjacent).is_ok()
        {
            return Ok(adjacent);
        }

        if let Some(target) = self.wrap_target(&positions, from, direction) {
            debug!(from = %from, to = %target, ?direction, wrap = %self.config.wrap_mode, "wrapped focus");
            return Ok(target);
        }

        let radius = self.search_radius(&positions, from);
        match nearest_in_direction(&positions, from, direction, radius) {
            Some(target) => {
                debug!(from = %from, to = %target, ?direction, "fallback search found target");
                Ok(target)
            }
            None => Err(FocusError::NoFocusableElements),
        }
    }

    fn wrap_target(&self, positions: &[Position], from: Position, direction: Direction) -> Option<Position> {
        if !self.config.wrap_enabled {
            return None;
        }

        let target = match (self.config.wrap_mode, direction) {
            (WrapMode::None, _) => None,
            (WrapMode::Row, Direction::Up | Direction::Down) => None,
            (WrapMode::Column, Direction::Left | Direction::Right) => None,
            (WrapMode::Row | WrapMode::Both, Direction::Left) => in_row(positions, from.row).max_by_key(|p| p.col),
            (WrapMode::Row | WrapMode::Both, Direction::Right) => in_row(positions, from.row).min_by_key(|p| p.col),
            (WrapMode::Column | WrapMode::Both, Direction::Up) => in_col(positions, from.col).max_by_key(|p| p.row),
            (WrapMode::Column | WrapMode::Both, Direction::Down) => in_col(positions, from.col).min_by_key(|p| p.row),
        };

        let target = match (target, self.config.wrap_mode) {
            (None, WrapMode::Both) => overall_extreme(positions, direction),
            (target, _) => target,
        };
        // Wrapping onto the origin is not progress; let the search try instead.
        target.filter(|p| *p != from)
    }

    fn search_radius(&self, positions: &[Position], from: Position) -> usize {
        match self.config.search_bound {
            SearchBound::Fixed(radius) => radius,
            SearchBound::GridExtent => positions
                .iter()
                .map(|p| p.row.max(p.col))
                .chain([from.row, from.col])
                .max()
                .map_or(0, |extent| extent + 1),
        }
    }
}

fn in_row(positions: &[Position], row: usize) -> impl Iterator<Item = Position> + '_ {
    positions.iter().copied().filter(move |p| p.row == row)
}

fn in_col(positions: &[Position], col: usize) -> impl Iterator<Item = Position> + '_ {
    positions.iter().copied().filter(move |p| p.col == col)
}

/// Extreme of the whole grid opposite to `direction`.
///
/// Ties along the primary axis go to the topmost row or leftmost column.
fn overall_extreme(positions: &[Position], direction: Direction) -> Option<Position> {
    let iter = positions.iter().copied();
    match direction {
        Direction::Up => iter.max_by(|a, b| a.row.cmp(&b.row).then(b.col.cmp(&a.col))),
        Direction::Down => iter.min(),
        Direction::Left => iter.max_by(|a, b| a.col.cmp(&b.col).then(b.row.cmp(&a.row))),
        Direction::Right => iter.min_by(|a, b| a.col.cmp(&b.col).then(a.row.cmp(&b.row))),
    }
}

/// Bounded expanding search ahead of `from` over sorted `positions`.
fn nearest_in_direction(positions: &[Position], from: Position, direction: Direction, radius: usize) -> Option<Position> {
    for distance in 1..=radius {
        let span = isize::try_from(distance).ok()?;
        for offset in -span..=span {
            if let Some(candidate) = from.shifted(direction, distance, offset)
                && positions.binary_search(&candidate).is_ok()
            {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    fn grid(rows: usize, cols: usize) -> FocusRegistry {
        let elements = (0..rows).flat_map(|row| (0..cols).map(move |col| Element::number("0", Position::new(row, col))));
        FocusRegistry::with_elements(elements).unwrap()
    }

    fn navigator(wrap_mode: WrapMode) -> Navigator {
        Navigator::new(NavigatorConfig::default().with_wrap_mode(wrap_mode))
    }

    #[test]
    fn adjacent_cell_is_preferred() {
        let registry = grid(3, 3);
        let nav = navigator(WrapMode::Both);
        assert_eq!(nav.navigate(&registry, Position::new(1, 1), Direction::Up), Ok(Position::new(0, 1)));
        assert_eq!(nav.navigate(&registry, Position::new(1, 1), Direction::Right), Ok(Position::new(1, 2)));
    }

    #[test]
    fn empty_registry_has_no_target() {
        let registry = FocusRegistry::new();
        let nav = navigator(WrapMode::Both);
        assert_eq!(
            nav.navigate(&registry, Position::new(0, 0), Direction::Down),
            Err(FocusError::NoFocusableElements)
        );
    }

    #[test]
    fn row_wrap_only_affects_horizontal_moves() {
        let registry = grid(3, 4);
        let nav = navigator(WrapMode::Row);
        assert_eq!(nav.navigate(&registry, Position::new(1, 0), Direction::Left), Ok(Position::new(1, 3)));
        assert_eq!(nav.navigate(&registry, Position::new(1, 3), Direction::Right), Ok(Position::new(1, 0)));
        assert_eq!(
            nav.navigate(&registry, Position::new(0, 2), Direction::Up),
            Err(FocusError::NoFocusableElements)
        );
    }

    #[test]
    fn column_wrap_only_affects_vertical_moves() {
        let registry = grid(3, 4);
        let nav = navigator(WrapMode::Column);
        assert_eq!(nav.navigate(&registry, Position::new(0, 2), Direction::Up), Ok(Position::new(2, 2)));
        assert_eq!(nav.navigate(&registry, Position::new(2, 2), Direction::Down), Ok(Position::new(0, 2)));
        assert_eq!(
            nav.navigate(&registry, Position::new(1, 0), Direction::Left),
            Err(FocusError::NoFocusableElements)
        );
    }

    #[test]
    fn both_wrap_falls_back_to_overall_extreme_for_empty_line() {
        let registry = FocusRegistry::with_elements([
            Element::number("1", Position::new(0, 0)),
            Element::number("2", Position::new(2, 1)),
            Element::number("3", Position::new(3, 0)),
        ])
        .unwrap();
        let nav = navigator(WrapMode::Both);
        // Column 5 is empty, so Up from an unregistered origin picks the bottommost overall.
        assert_eq!(nav.navigate(&registry, Position::new(0, 5), Direction::Up), Ok(Position::new(3, 0)));
        // Row 7 is empty, so Right picks the leftmost overall, topmost on ties.
        assert_eq!(nav.navigate(&registry, Position::new(7, 9), Direction::Right), Ok(Position::new(0, 0)));
    }

    #[test]
    fn wrap_disabled_switch_skips_wrapping() {
        let registry = grid(3, 4);
        let nav = Navigator::new(NavigatorConfig::default().with_wrap_mode(WrapMode::Both).with_wrap_enabled(false));
        assert_eq!(
            nav.navigate(&registry, Position::new(1, 0), Direction::Left),
            Err(FocusError::NoFocusableElements)
        );
    }

    #[test]
    fn fallback_scans_offsets_before_advancing() {
        let registry = FocusRegistry::with_elements([
            Element::number("1", Position::new(0, 2)),
            Element::number("2", Position::new(3, 2)),
            Element::number("3", Position::new(4, 3)),
        ])
        .unwrap();
        let nav = navigator(WrapMode::None);
        // Distance 1 covers rows 1..=3 of column 2.
        assert_eq!(nav.navigate(&registry, Position::new(2, 1), Direction::Right), Ok(Position::new(3, 2)));
        // Distance 2 scans from offset -2 upward, so the top row is seen first.
        assert_eq!(nav.navigate(&registry, Position::new(2, 0), Direction::Right), Ok(Position::new(0, 2)));
        assert_eq!(nav.navigate(&registry, Position::new(3, 2), Direction::Right), Ok(Position::new(4, 3)));
        assert_eq!(
            nav.navigate(&registry, Position::new(4, 3), Direction::Right),
            Err(FocusError::NoFocusableElements)
        );
        assert_eq!(
            nav.navigate(&registry, Position::new(0, 2), Direction::Up),
            Err(FocusError::NoFocusableElements)
        );
    }

    #[test]
    fn fixed_bound_limits_the_search_and_grid_extent_lifts_it() {
        let registry = FocusRegistry::with_elements([
            Element::number("1", Position::new(0, 0)),
            Element::number("2", Position::new(0, 14)),
        ])
        .unwrap();
        let fixed = navigator(WrapMode::None);
        assert_eq!(
            fixed.navigate(&registry, Position::new(0, 0), Direction::Right),
            Err(FocusError::NoFocusableElements)
        );

        let extent = Navigator::new(
            NavigatorConfig::default()
                .with_wrap_mode(WrapMode::None)
                .with_search_bound(SearchBound::GridExtent),
        );
        assert_eq!(extent.navigate(&registry, Position::new(0, 0), Direction::Right), Ok(Position::new(0, 14)));
    }

    #[test]
    fn disabled_elements_are_stepped_over() {
        let mut registry = grid(3, 4);
        registry.disable(Position::new(1, 1)).unwrap();
        registry.disable(Position::new(1, 3)).unwrap();
        let nav = navigator(WrapMode::Row);
        // (1, 1) is skipped; the distance-1 ring scans from the row above.
        assert_eq!(nav.navigate(&registry, Position::new(1, 0), Direction::Right), Ok(Position::new(0, 1)));
        // Row wrap lands on the rightmost interactive key, not the disabled one.
        assert_eq!(nav.navigate(&registry, Position::new(1, 0), Direction::Left), Ok(Position::new(1, 2)));
        assert_eq!(nav.navigate(&registry, Position::new(0, 1), Direction::Down), Ok(Position::new(1, 0)));
        // The disabled end of the row counts as the edge.
        assert_eq!(nav.navigate(&registry, Position::new(1, 2), Direction::Right), Ok(Position::new(1, 0)));
    }

    #[test]
    fn fully_disabled_registry_has_no_target() {
        let mut registry = grid(1, 2);
        registry.disable(Position::new(0, 0)).unwrap();
        registry.disable(Position::new(0, 1)).unwrap();
        assert_eq!(
            navigator(WrapMode::Both).navigate(&registry, Position::new(0, 0), Direction::Right),
            Err(FocusError::NoFocusableElements)
        );
    }

    #[test]
    fn navigation_is_deterministic() {
        let registry = grid(4, 5);
        let first = navigator(WrapMode::Both);
        let second = navigator(WrapMode::Both);
        for row in 0..4 {
            for col in 0..5 {
                for direction in Direction::ALL {
                    let from = Position::new(row, col);
                    assert_eq!(
                        first.navigate(&registry, from, direction),
                        second.navigate(&registry, from, direction)
                    );
                }
            }
        }
    }

    #[test]
    fn search_bound_parses() {
        assert_eq!("grid".parse::<SearchBound>(), Ok(SearchBound::GridExtent));
        assert_eq!("12".parse::<SearchBound>(), Ok(SearchBound::Fixed(12)));
        assert!("0".parse::<SearchBound>().is_err());
        assert!("far".parse::<SearchBound>().is_err());
    }
}
