mod button;
mod number_field;

pub use button::Button;
pub use number_field::NumberField;

// UI constants - functions below handle responsive layout
use macroquad::prelude::{screen_width, screen_height};

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const HEADER_HEIGHT: f32 = 44.0;
pub const GRID_MARGIN: f32 = 10.0;
pub const MIN_CELL_SIZE: f32 = 4.0;
pub const MAX_CELL_SIZE: f32 = 48.0;
/// Cells smaller than this are drawn without their number
pub const LABEL_MIN_CELL_SIZE: f32 = 18.0;
/// Upper bound for the rows/cols fields; the generator itself has none
pub const MAX_FIELD_DIMENSION: usize = crate::domain::MAX_INPUT_DIMENSION;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Commands exposed by the panel buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Start,
    Stop,
    Reset,
    Step,
}

/// Create panel buttons. Start/Step only make sense while stopped, Stop while running.
pub fn create_buttons(is_running: bool) -> Vec<(ButtonAction, Button)> {
    let px = panel_x() + 10.0;
    let w = PANEL_WIDTH - 20.0;
    vec![
        (ButtonAction::Start, Button::new(px, 150.0, w, BUTTON_HEIGHT, "Start").with_enabled(!is_running)),
        (ButtonAction::Stop, Button::new(px, 194.0, w, BUTTON_HEIGHT, "Stop").with_enabled(is_running)),
        (ButtonAction::Reset, Button::new(px, 238.0, w, BUTTON_HEIGHT, "Reset 20x10")),
        (ButtonAction::Step, Button::new(px, 282.0, w, BUTTON_HEIGHT, "Step").with_enabled(!is_running)),
    ]
}

/// Placement of the grid inside the grid area: square cells fitted to the space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    /// Fit `rows` x `cols` cells into an area below the header.
    /// Cell size is clamped, so very large grids overflow the area instead of vanishing.
    pub fn fit(rows: usize, cols: usize, area_width: f32, area_height: f32) -> Self {
        let usable_w = (area_width - 2.0 * GRID_MARGIN).max(0.0);
        let usable_h = (area_height - HEADER_HEIGHT - GRID_MARGIN).max(0.0);
        let cell_size = (usable_w / cols.max(1) as f32)
            .min(usable_h / rows.max(1) as f32)
            .floor()
            .clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);

        Self {
            origin_x: GRID_MARGIN,
            origin_y: HEADER_HEIGHT,
            cell_size,
            rows,
            cols,
        }
    }

    /// Top-left screen position of a cell
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.cell_size,
            self.origin_y + row as f32 * self.cell_size,
        )
    }

    /// Convert a screen position to (row, col), if it hits a cell
    pub fn cell_at(&self, pos: (f32, f32)) -> Option<(usize, usize)> {
        let dx = pos.0 - self.origin_x;
        let dy = pos.1 - self.origin_y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }
        let col = (dx / self.cell_size) as usize;
        let row = (dy / self.cell_size) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    pub fn shows_numbers(&self) -> bool {
        self.cell_size >= LABEL_MIN_CELL_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_uses_limiting_axis() {
        // 20 rows in 800 - 44 - 10 = 746px -> 37px; 10 cols in 780px -> 78px
        let layout = GridLayout::fit(20, 10, 800.0, 800.0);
        assert_eq!(layout.cell_size, 37.0);
        assert!(layout.shows_numbers());
    }

    #[test]
    fn test_fit_clamps_cell_size() {
        assert_eq!(GridLayout::fit(5, 5, 4000.0, 4000.0).cell_size, MAX_CELL_SIZE);
        let tiny = GridLayout::fit(200, 200, 300.0, 300.0);
        assert_eq!(tiny.cell_size, MIN_CELL_SIZE);
        assert!(!tiny.shows_numbers());
    }

    #[test]
    fn test_cell_at_round_trips_origin() {
        let layout = GridLayout::fit(20, 10, 800.0, 800.0);
        let (x, y) = layout.cell_origin(3, 4);
        assert_eq!(layout.cell_at((x + 1.0, y + 1.0)), Some((3, 4)));
    }

    #[test]
    fn test_cell_at_outside() {
        let layout = GridLayout::fit(20, 10, 800.0, 800.0);
        assert_eq!(layout.cell_at((0.0, 0.0)), None);
        let (x, y) = layout.cell_origin(19, 9);
        assert_eq!(layout.cell_at((x + layout.cell_size + 1.0, y)), None);
        assert_eq!(layout.cell_at((x, y + layout.cell_size + 1.0)), None);
    }
}
