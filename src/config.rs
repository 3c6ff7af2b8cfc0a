//! Start-up configuration read from environment variables.

use log::warn;

use crate::domain::{GridDimensions, parse_input_dimension};

pub const ROWS_VAR: &str = "RIBBON_GRID_ROWS";
pub const COLS_VAR: &str = "RIBBON_GRID_COLS";
pub const TICK_MS_VAR: &str = "RIBBON_GRID_TICK_MS";

/// Default animation cadence in milliseconds
pub const DEFAULT_TICK_MS: u64 = 600;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AppConfig {
    pub dimensions: GridDimensions,
    pub tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dimensions: GridDimensions::DEFAULT,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Missing keys keep defaults,
    /// malformed ones are coerced (dimensions, capped like the input fields)
    /// or defaulted with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let rows = lookup(ROWS_VAR).map_or(defaults.dimensions.rows(), |v| {
            let rows = parse_input_dimension(&v);
            if rows.to_string() != v.trim() {
                warn!("{ROWS_VAR}={v:?} coerced to {rows}");
            }
            rows
        });
        let cols = lookup(COLS_VAR).map_or(defaults.dimensions.cols(), |v| {
            let cols = parse_input_dimension(&v);
            if cols.to_string() != v.trim() {
                warn!("{COLS_VAR}={v:?} coerced to {cols}");
            }
            cols
        });

        let tick_ms = lookup(TICK_MS_VAR).map_or(defaults.tick_ms, |v| {
            match v.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    warn!("{TICK_MS_VAR}={v:?} is not a positive integer, using {DEFAULT_TICK_MS}");
                    DEFAULT_TICK_MS
                }
            }
        });

        Self {
            dimensions: GridDimensions::from_counts(rows, cols),
            tick_ms,
        }
    }

    /// Tick interval in seconds, as consumed by the frame loop
    pub fn tick_interval(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }
}
