use macroquad::prelude::*;
use crate::domain::{CellColor, Grid};
use crate::application::AnimationDriver;
use crate::ui::{Button, ButtonAction, GridLayout, NumberField, panel_x, grid_area_width, PANEL_WIDTH};

/// Fill color for each cell class
pub fn cell_fill(color: CellColor) -> Color {
    match color {
        CellColor::Green => Color::from_rgba(34, 160, 70, 255),
        CellColor::Red => Color::from_rgba(210, 45, 45, 255),
        CellColor::Blue => Color::from_rgba(40, 90, 220, 255),
        CellColor::Black => Color::from_rgba(15, 15, 15, 255),
    }
}

/// Draw the title bar above the grid
pub fn draw_header() {
    draw_text("Pattern Grid", 10.0, 30.0, 28.0, WHITE);
}

/// Draw every cell, labeled with its number when cells are large enough
pub fn draw_grid(grid: &Grid, layout: &GridLayout, hovered: Option<(usize, usize)>) {
    let size = layout.cell_size;
    let area_width = grid_area_width();
    let area_height = screen_height();
    let line_color = Color::from_rgba(40, 40, 40, 255);
    let font_size = (size * 0.45).clamp(8.0, 18.0);

    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = layout.cell_origin(row, col);

        // Skip cells outside the viewport
        if x > area_width || y > area_height {
            continue;
        }

        draw_rectangle(x, y, size, size, cell_fill(cell.color()));
        draw_rectangle_lines(x, y, size, size, 1.0, line_color);

        if layout.shows_numbers() {
            let label = cell.number().to_string();
            let measure = measure_text(&label, None, font_size as u16, 1.0);
            if measure.width <= size - 2.0 {
                // Dim labels on background cells
                let label_color = if cell.color().is_highlighted() { WHITE } else { GRAY };
                draw_text(
                    &label,
                    x + (size - measure.width) / 2.0,
                    y + (size + measure.height) / 2.0,
                    font_size,
                    label_color,
                );
            }
        }
    }

    if let Some((row, col)) = hovered {
        let (x, y) = layout.cell_origin(row, col);
        draw_rectangle_lines(x, y, size, size, 2.0, YELLOW);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255)
    );
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel: fields, buttons, status and legend
pub fn draw_controls(
    driver: &AnimationDriver,
    buttons: &[(ButtonAction, Button)],
    fields: &[&NumberField],
    hovered: Option<(usize, usize)>,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    fields.iter().for_each(|field| field.draw(mouse_pos));
    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));

    let px = panel_x() + 10.0;

    let status_color = if driver.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };
    let value_color = Color::from_rgba(180, 180, 180, 255);

    let labels: [(&str, f32, f32, f32, Color); 7] = [
        ("Status:", px, 345.0, 16.0, WHITE),
        (if driver.is_running { "Running" } else { "Stopped" }, px + 60.0, 345.0, 16.0, status_color),
        (&format!("Phase: {} / {}", driver.phase, driver.period()), px, 368.0, 14.0, value_color),
        (&format!("Ticks: {}", driver.ticks), px, 386.0, 14.0, value_color),
        (&format!("Grid: {}x{}", driver.dimensions.rows(), driver.dimensions.cols()), px, 404.0, 14.0, value_color),
        (&format!("Generate: {:.2}ms", driver.last_generate_time_ms), px, 428.0, 13.0, GRAY),
        (&format!("Render: {:.1}ms | FPS: {:.0}", driver.last_render_time_ms, get_fps()), px, 444.0, 13.0, GRAY),
    ];
    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    // Hovered cell info
    let hover_text = hovered
        .and_then(|(row, col)| driver.cell_at(row, col))
        .map(|cell| format!("Cell #{}: {}", cell.number(), cell.color().name()))
        .unwrap_or_else(|| "Hover a cell".to_string());
    draw_text_label(&hover_text, px, 470.0, 14.0, WHITE);

    // Legend
    draw_text_label("Legend:", px, 500.0, 14.0, WHITE);
    for (i, color) in CellColor::all().into_iter().enumerate() {
        let y = 510.0 + i as f32 * 20.0;
        draw_rectangle(px, y, 14.0, 14.0, cell_fill(color));
        draw_rectangle_lines(px, y, 14.0, 14.0, 1.0, GRAY);
        draw_text_label(color.name(), px + 22.0, y + 12.0, 14.0, value_color);
    }

    let controls = [
        ("Keys:", px, 610.0, 14.0, WHITE),
        ("Space: Start/Stop", px, 625.0, 12.0, GRAY),
        ("R: Reset   .: Step", px, 638.0, 12.0, GRAY),
        ("Up/Down: Rows", px, 651.0, 12.0, GRAY),
        ("Left/Right: Cols", px, 664.0, 12.0, GRAY),
        ("Default grid: 20 x 10.", px, 690.0, 12.0, GRAY),
        ("Grid supports min 5 x 5.", px, 703.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_fills_are_distinct() {
        let fills: Vec<_> = CellColor::all()
            .into_iter()
            .map(|c| {
                let f = cell_fill(c);
                ((f.r * 255.0) as u8, (f.g * 255.0) as u8, (f.b * 255.0) as u8)
            })
            .collect();
        let mut unique = fills.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(fills.len(), unique.len());
    }
}
