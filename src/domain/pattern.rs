//! Deterministic ribbon pattern generation.
//!
//! A frame is a pure function of (rows, cols, phase):
//! 1. First and last rows are green, overriding everything else
//! 2. Cells touching the primary ribbon are red
//! 3. Otherwise cells touching the secondary ribbon are blue
//! 4. Remaining cells turn blue when `(index + index / cols) % 13 == 0`
//! 5. Everything else stays black
//!
//! "Touching" checks the raw neighbor indices `index`, `index ± 1` and
//! `index ± cols` without bounds filtering, so ribbons may bleed across
//! row edges. That bleed is part of the look and must be kept.

use super::{Cell, CellColor, Grid, GridDimensions};

/// Modulus of the accent ("blip") rule
pub const ACCENT_MODULUS: usize = 13;

/// Number of distinct phases before the primary ribbon repeats
pub fn phase_period(cols: usize) -> i64 {
    (cols as i64 + 1).max(1)
}

/// A diagonal band selected by modular arithmetic over the 1-based index.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ribbon {
    modulus: i64,
    offset: i64,
}

impl Ribbon {
    /// Red ribbon: period `cols + 1`, shifted by the full phase
    pub fn primary(cols: usize, phase: i64) -> Self {
        Self {
            modulus: (cols as i64 + 1).max(1),
            offset: phase,
        }
    }

    /// Blue ribbon: period `cols - 1` (at least 1), shifted by half the phase
    pub fn secondary(cols: usize, phase: i64) -> Self {
        Self {
            modulus: (cols as i64 - 1).max(1),
            offset: phase.div_euclid(2),
        }
    }

    pub const fn modulus(self) -> i64 {
        self.modulus
    }

    /// True when `(index - 1 + offset) mod modulus == 0`.
    /// Both terms are reduced first so extreme offsets cannot overflow.
    pub fn contains(self, index: i64) -> bool {
        let m = self.modulus;
        ((index - 1).rem_euclid(m) + self.offset.rem_euclid(m)) % m == 0
    }

    /// Thickened membership: the index or any orthogonal neighbor index is on the ribbon
    pub fn touches(self, index: i64, cols: usize) -> bool {
        let cols = cols as i64;
        [index, index - 1, index + 1, index - cols, index + cols]
            .into_iter()
            .any(|i| self.contains(i))
    }
}

/// Generate a frame. Rows and cols are clamped to at least 5.
/// Phase is used as given; negative values are accepted and simply shift the ribbons.
pub fn generate_pattern(rows: i64, cols: i64, phase: i64) -> Grid {
    generate(GridDimensions::new(rows, cols), phase)
}

/// Generate a frame for already-sanitized dimensions
pub fn generate(dimensions: GridDimensions, phase: i64) -> Grid {
    let (rows, cols) = (dimensions.rows(), dimensions.cols());
    let primary = Ribbon::primary(cols, phase);
    let secondary = Ribbon::secondary(cols, phase);

    let cells = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .map(|(r, c)| {
            let number = r * cols + c + 1;
            let color = if r == 0 || r == rows - 1 {
                CellColor::Green
            } else {
                classify_interior(number, cols, primary, secondary)
            };
            Cell::new(number, color)
        })
        .collect();

    Grid::from_cells(rows, cols, cells)
}

fn classify_interior(number: usize, cols: usize, primary: Ribbon, secondary: Ribbon) -> CellColor {
    let index = number as i64;
    if primary.touches(index, cols) {
        CellColor::Red
    } else if secondary.touches(index, cols) {
        CellColor::Blue
    } else if (number + number / cols) % ACCENT_MODULUS == 0 {
        CellColor::Blue
    } else {
        CellColor::Black
    }
}
