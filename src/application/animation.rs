use log::{debug, info};

use crate::config::AppConfig;
use crate::domain::{Cell, Grid, GridDimensions, generate, phase_period};

/// AnimationDriver orchestrates the animated pattern.
/// It owns the phase counter and the run/stop state, and regenerates
/// the grid whenever rows, cols or phase change.
pub struct AnimationDriver {
    pub dimensions: GridDimensions,
    pub phase: i64,
    pub is_running: bool,
    pub tick_timer: f32,
    pub tick_interval: f32,
    pub ticks: u64,
    pub grid: Grid,
    pub last_generate_time_ms: f32,  // Pattern generation metric
    pub last_render_time_ms: f32,    // Render metric, filled in by the frame loop
}

impl AnimationDriver {
    /// Create a stopped driver at phase 0
    pub fn new(config: &AppConfig) -> Self {
        Self {
            dimensions: config.dimensions,
            phase: 0,
            is_running: false,
            tick_timer: 0.0,
            tick_interval: config.tick_interval(),
            ticks: 0,
            grid: generate(config.dimensions, 0),
            last_generate_time_ms: 0.0,
            last_render_time_ms: 0.0,
        }
    }

    /// Number of phases before the animation repeats for the current width
    pub fn period(&self) -> i64 {
        phase_period(self.dimensions.cols())
    }

    pub fn start(mut self) -> Self {
        if !self.is_running {
            info!("animation started at phase {}", self.phase);
            self.is_running = true;
        }
        self
    }

    /// Halt ticking. The last generated grid stays in place.
    pub fn stop(mut self) -> Self {
        if self.is_running {
            info!("animation stopped at phase {}", self.phase);
            self.is_running = false;
            self.tick_timer = 0.0;
        }
        self
    }

    pub fn toggle_running(self) -> Self {
        if self.is_running { self.stop() } else { self.start() }
    }

    /// Back to the default 20x10 grid at phase 0. Running state is kept.
    pub fn reset(mut self) -> Self {
        info!("reset to {}x{}", GridDimensions::DEFAULT.rows(), GridDimensions::DEFAULT.cols());
        self.dimensions = GridDimensions::DEFAULT;
        self.phase = 0;
        self.tick_timer = 0.0;
        self.regenerate();
        self
    }

    /// Change the row count (clamped to the minimum). Phase is left alone.
    pub fn set_rows(mut self, rows: i64) -> Self {
        let dimensions = self.dimensions.with_rows(rows);
        if dimensions != self.dimensions {
            info!("rows changed to {}", dimensions.rows());
            self.dimensions = dimensions;
            self.regenerate();
        }
        self
    }

    /// Change the column count (clamped to the minimum). Phase is left alone;
    /// the next step wraps it with the new period. The tick interval restarts.
    pub fn set_cols(mut self, cols: i64) -> Self {
        let dimensions = self.dimensions.with_cols(cols);
        if dimensions != self.dimensions {
            info!("cols changed to {}", dimensions.cols());
            self.dimensions = dimensions;
            self.tick_timer = 0.0;
            self.regenerate();
        }
        self
    }

    /// Advance the phase by one, wrapping at the period
    pub fn step(mut self) -> Self {
        self.phase = (self.phase + 1).rem_euclid(self.period());
        self.ticks += 1;
        debug!("tick {} -> phase {}", self.ticks, self.phase);
        self.regenerate();
        self
    }

    /// Update by one frame. Only advances while running, once per elapsed interval.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.tick_timer += delta_time;
        if self.tick_timer >= self.tick_interval {
            self.tick_timer = 0.0;
            return self.step();
        }

        self
    }

    /// Look up a cell of the current frame
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row, col)
    }

    fn regenerate(&mut self) {
        let start = std::time::Instant::now();
        self.grid = generate(self.dimensions, self.phase);
        self.last_generate_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generate_pattern;

    fn driver() -> AnimationDriver {
        AnimationDriver::new(&AppConfig::default())
    }

    #[test]
    fn test_new_is_stopped_default_grid() {
        let d = driver();
        assert!(!d.is_running);
        assert_eq!(d.phase, 0);
        assert_eq!(d.grid, generate_pattern(20, 10, 0));
        assert_eq!(d.period(), 11);
    }

    #[test]
    fn test_stopped_tick_is_noop() {
        let d = driver().tick(10.0);
        assert_eq!(d.phase, 0);
        assert_eq!(d.ticks, 0);
    }

    #[test]
    fn test_tick_advances_once_per_interval() {
        let d = driver().start();
        let d = d.tick(0.35);
        assert_eq!(d.phase, 0);
        let d = d.tick(0.35);
        assert_eq!(d.phase, 1);
        assert_eq!(d.grid, generate_pattern(20, 10, 1));
        let d = d.tick(0.1);
        assert_eq!(d.phase, 1);
    }

    #[test]
    fn test_phase_wraps_at_period() {
        let mut d = driver();
        for _ in 0..11 {
            d = d.step();
        }
        assert_eq!(d.phase, 0);
        assert_eq!(d.ticks, 11);
    }

    #[test]
    fn test_stop_keeps_last_grid() {
        let d = driver().start().tick(1.0);
        let before = d.grid.clone();
        let d = d.stop().tick(5.0);
        assert!(!d.is_running);
        assert_eq!(d.phase, 1);
        assert_eq!(d.grid, before);
    }

    #[test]
    fn test_toggle() {
        let d = driver().toggle_running();
        assert!(d.is_running);
        assert!(!d.toggle_running().is_running);
    }

    #[test]
    fn test_dimension_changes_regenerate() {
        let d = driver().step().step().set_cols(6).set_rows(2);
        assert_eq!(d.dimensions, GridDimensions::new(5, 6));
        assert_eq!(d.phase, 2);
        assert_eq!(d.grid, generate_pattern(5, 6, 2));
        assert_eq!(d.period(), 7);
    }

    #[test]
    fn test_phase_wraps_with_new_period_after_shrink() {
        let mut d = driver();
        for _ in 0..9 {
            d = d.step();
        }
        let d = d.set_cols(5).step();
        assert_eq!(d.phase, 10 % 6);
    }

    #[test]
    fn test_cols_change_restarts_interval() {
        let d = driver().start().tick(0.5).set_cols(12).tick(0.2);
        assert_eq!(d.phase, 0);
        let d = d.tick(0.45);
        assert_eq!(d.phase, 1);

        // Rows do not restart the interval
        let d = driver().start().tick(0.5).set_rows(30).tick(0.2);
        assert_eq!(d.phase, 1);
    }

    #[test]
    fn test_reset_restores_default_and_keeps_running() {
        let d = driver().set_rows(40).set_cols(7).start().step().reset();
        assert!(d.is_running);
        assert_eq!(d.phase, 0);
        assert_eq!(d.dimensions, GridDimensions::DEFAULT);
        assert_eq!(d.grid, generate_pattern(20, 10, 0));
    }

    #[test]
    fn test_cell_at() {
        let d = driver();
        assert_eq!(d.cell_at(1, 0).map(Cell::number), Some(11));
        assert!(d.cell_at(20, 0).is_none());
    }
}
