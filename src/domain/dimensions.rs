//! Grid dimension sanitation.
//!
//! Every entry point coerces instead of rejecting: values are floored,
//! non-numbers fall back to the minimum, and both axes are clamped to
//! at least [`MIN_DIMENSION`].

/// Smallest allowed row or column count
pub const MIN_DIMENSION: usize = 5;

/// Largest row or column count accepted from user input (fields, keys, environment).
/// The generator itself has no upper bound.
pub const MAX_INPUT_DIMENSION: usize = 200;

/// Sanitized grid size. Both axes are always >= [`MIN_DIMENSION`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GridDimensions {
    rows: usize,
    cols: usize,
}

impl GridDimensions {
    /// Default grid: 20 rows by 10 columns
    pub const DEFAULT: GridDimensions = GridDimensions { rows: 20, cols: 10 };

    /// Clamp integer inputs to the minimum
    pub fn new(rows: i64, cols: i64) -> Self {
        Self {
            rows: clamp_integer(rows),
            cols: clamp_integer(cols),
        }
    }

    /// Clamp unsigned counts to the minimum
    pub fn from_counts(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(MIN_DIMENSION),
            cols: cols.max(MIN_DIMENSION),
        }
    }

    /// Floor then clamp; NaN and infinities become the minimum
    pub fn from_f64(rows: f64, cols: f64) -> Self {
        Self {
            rows: coerce_dimension(rows),
            cols: coerce_dimension(cols),
        }
    }

    pub const fn rows(self) -> usize {
        self.rows
    }

    pub const fn cols(self) -> usize {
        self.cols
    }

    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Same grid with a new row count (sanitized)
    pub fn with_rows(self, rows: i64) -> Self {
        Self { rows: clamp_integer(rows), ..self }
    }

    /// Same grid with a new column count (sanitized)
    pub fn with_cols(self, cols: i64) -> Self {
        Self { cols: clamp_integer(cols), ..self }
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn clamp_integer(value: i64) -> usize {
    usize::try_from(value).map_or(MIN_DIMENSION, |v| v.max(MIN_DIMENSION))
}

/// Floor a numeric value and clamp it to the minimum dimension
pub fn coerce_dimension(value: f64) -> usize {
    if !value.is_finite() {
        return MIN_DIMENSION;
    }
    // `as` saturates, so huge values stay finite and negatives become 0
    (value.floor() as usize).max(MIN_DIMENSION)
}

/// Coerce free text (an input field) into a dimension.
/// Empty or unparsable text behaves like zero and clamps up to the minimum.
pub fn parse_dimension(text: &str) -> usize {
    let value = text.trim().parse::<f64>().unwrap_or(0.0);
    coerce_dimension(value)
}

/// Clamp a user-supplied count into `MIN_DIMENSION..=MAX_INPUT_DIMENSION`
pub fn cap_dimension(value: i64) -> usize {
    usize::try_from(value).map_or(MIN_DIMENSION, |v| v.clamp(MIN_DIMENSION, MAX_INPUT_DIMENSION))
}

/// `parse_dimension`, additionally capped at `MAX_INPUT_DIMENSION`
pub fn parse_input_dimension(text: &str) -> usize {
    parse_dimension(text).min(MAX_INPUT_DIMENSION)
}
