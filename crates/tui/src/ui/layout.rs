//! Screen layout and pointer hit-testing.
//!
//! The keypad grid is laid out with ratatui constraints, so cells are not
//! guaranteed to be the same size. [`ButtonGeometry`] keeps the rectangles
//! from the last render and answers hit tests against them.

use ratatui::layout::{Constraint, Layout, Position as ScreenPosition, Rect};
use tcalc_engine::{GridGeometry, Position};

/// Height of the display panel including borders.
pub const DISPLAY_HEIGHT: u16 = 5;
pub const HINTS_HEIGHT: u16 = 1;

pub(crate) struct MainLayout;

impl MainLayout {
    /// Splits the screen into display, keypad and hints areas, top to bottom.
    pub fn split(area: Rect) -> [Rect; 3] {
        Layout::vertical([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(HINTS_HEIGHT),
        ])
        .areas(area)
    }
}

/// Rectangle of every grid cell inside `area`, row-major.
pub fn grid_cells(area: Rect, rows: usize, cols: usize) -> Vec<(Position, Rect)> {
    let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows]).split(area);
    row_areas
        .iter()
        .enumerate()
        .flat_map(|(row, row_area)| {
            Layout::horizontal(vec![Constraint::Fill(1); cols])
                .split(*row_area)
                .iter()
                .enumerate()
                .map(|(col, cell)| (Position::new(row, col), *cell))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Button rectangles as last rendered.
#[derive(Debug, Clone, Default)]
pub struct ButtonGeometry {
    cells: Vec<(Position, Rect)>,
}

impl ButtonGeometry {
    pub fn new(cells: Vec<(Position, Rect)>) -> Self {
        Self { cells }
    }

    pub fn area_of(&self, position: Position) -> Option<Rect> {
        self.cells.iter().find(|(p, _)| *p == position).map(|(_, rect)| *rect)
    }
}

impl GridGeometry for ButtonGeometry {
    fn position_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        self.cells
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(position, _)| *position)
    }
}
