// Domain layer - Pure pattern generation
pub mod domain;

// Application layer - Animation driver and start-up configuration
pub mod application;
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellColor, Grid, GridDimensions, generate, generate_pattern, phase_period};
pub use application::AnimationDriver;
pub use config::AppConfig;
