mod cell;
mod grid;
mod dimensions;
mod pattern;

pub use cell::{Cell, CellColor};
pub use grid::Grid;
pub use dimensions::{
    GridDimensions, MIN_DIMENSION, MAX_INPUT_DIMENSION,
    cap_dimension, coerce_dimension, parse_dimension, parse_input_dimension,
};
pub use pattern::{Ribbon, ACCENT_MODULUS, generate, generate_pattern, phase_period};
