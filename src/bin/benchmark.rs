//! Pattern generation benchmark and sanity sweep

use std::time::Instant;
use rand::Rng;
use rayon::prelude::*;
use ribbon_grid::{CellColor, Grid, GridDimensions, generate_pattern, phase_period};

/// Average milliseconds per generated frame over one full phase cycle
fn benchmark_cycle(rows: i64, cols: i64, cycles: u32) -> f64 {
    let period = phase_period(cols as usize);
    let start = Instant::now();
    for _ in 0..cycles {
        for phase in 0..period {
            std::hint::black_box(generate_pattern(rows, cols, phase));
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / (cycles as f64 * period as f64)
}

/// Generate a whole cycle serially and across threads; returns (serial ms, parallel ms, equal)
fn compare_parallel_cycle(rows: i64, cols: i64) -> (f64, f64, bool) {
    let period = phase_period(cols as usize);

    let start = Instant::now();
    let serial: Vec<Grid> = (0..period).map(|p| generate_pattern(rows, cols, p)).collect();
    let serial_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = Instant::now();
    let parallel: Vec<Grid> = (0..period)
        .into_par_iter()
        .map(|p| generate_pattern(rows, cols, p))
        .collect();
    let parallel_ms = start.elapsed().as_secs_f64() * 1000.0;

    (serial_ms, parallel_ms, serial == parallel)
}

/// Check shape, borders and numbering on random inputs; returns the number of failures
fn random_sweep(samples: usize) -> usize {
    let mut rng = rand::rng();
    let mut failures = 0;

    for _ in 0..samples {
        let rows = rng.random_range(-3..60);
        let cols = rng.random_range(-3..60);
        let phase = rng.random_range(-1000..1000);
        let grid = generate_pattern(rows, cols, phase);
        let (r, c) = grid.dimensions();

        let shape_ok = r == (rows.max(5) as usize) && c == (cols.max(5) as usize);
        let border_ok = [0, r - 1].iter().all(|&row| {
            grid.row(row)
                .is_some_and(|cells| cells.iter().all(|cell| cell.color() == CellColor::Green))
        });
        let numbers_ok = grid
            .iter_cells()
            .all(|(row, col, cell)| cell.number() == row * c + col + 1);

        if !(shape_ok && border_ok && numbers_ok) {
            eprintln!("FAIL rows={} cols={} phase={}", rows, cols, phase);
            failures += 1;
        }
    }
    failures
}

fn main() {
    println!("=== Pattern Generation Benchmark ===\n");

    let sizes = [(20, 10), (50, 50), (100, 100), (200, 200), (500, 500)];

    println!("{:>10} {:>8} {:>14} {:>14}", "Size", "Period", "ms/frame", "Mcells/sec");
    println!("{:-<50}", "");

    for (rows, cols) in sizes {
        let cycles = if rows * cols > 10_000 { 1 } else { 20 };
        let ms = benchmark_cycle(rows, cols, cycles);
        let cells = GridDimensions::new(rows, cols).cell_count() as f64;
        println!(
            "{:>10} {:>8} {:>14.3} {:>14.1}",
            format!("{}x{}", rows, cols),
            phase_period(cols as usize),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }

    println!("\n=== Full Cycle: Serial vs Parallel ===\n");

    for (rows, cols) in [(100, 100), (300, 300)] {
        let (serial_ms, parallel_ms, equal) = compare_parallel_cycle(rows, cols);
        println!(
            "{:>10}  serial {:>9.2}ms  parallel {:>9.2}ms  identical: {}",
            format!("{}x{}", rows, cols),
            serial_ms,
            parallel_ms,
            equal
        );
    }

    println!("\n=== Random Sweep ===\n");

    let samples = 2000;
    let failures = random_sweep(samples);
    println!("{} samples, {} failures", samples, failures);
}
