//! Translation from screen coordinates to grid positions.
//!
//! The focus core never looks at geometry except through [`GridGeometry`],
//! which the front end implements from whatever it last rendered.

use tcalc_types::Position;

pub trait GridGeometry {
    /// Grid cell under the terminal cell `(column, row)`, if any.
    fn position_at(&self, column: u16, row: u16) -> Option<Position>;
}
