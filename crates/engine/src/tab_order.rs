//! Linear (Tab / Shift-Tab) traversal over the registry.
//!
//! The order is recomputed from the registry on every call: interactive
//! positions sorted row-major. Nothing is cached, so adds, removes and
//! disables are reflected immediately.

use tcalc_types::Position;

use crate::registry::FocusRegistry;

/// Every tab stop in traversal order. Disabled elements are not tab stops.
pub fn ordered_positions(registry: &FocusRegistry) -> Vec<Position> {
    registry.interactive_positions()
}

/// Position after `current`, wrapping past the end.
///
/// With no current focus (or a current position that is no longer a tab
/// stop) the first entry is returned.
pub fn next(registry: &FocusRegistry, current: Option<Position>) -> Option<Position> {
    let order = ordered_positions(registry);
    let index = current.and_then(|position| order.binary_search(&position).ok());
    match index {
        Some(index) => order.get((index + 1) % order.len()).copied(),
        None => order.first().copied(),
    }
}

/// Position before `current`, wrapping past the start.
///
/// With no current focus the last entry is returned.
pub fn previous(registry: &FocusRegistry, current: Option<Position>) -> Option<Position> {
    let order = ordered_positions(registry);
    let index = current.and_then(|position| order.binary_search(&position).ok());
    match index {
        Some(index) => order.get((index + order.len() - 1) % order.len()).copied(),
        None => order.last().copied(),
    }
}
