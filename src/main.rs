use log::info;
use macroquad::prelude::*;
use ribbon_grid::{
    AnimationDriver, AppConfig,
    ui::{self, GridLayout, NumberField, MAX_FIELD_DIMENSION},
    rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Pattern Grid".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    info!(
        "starting with {}x{} grid, tick every {}ms",
        config.dimensions.rows(),
        config.dimensions.cols(),
        config.tick_ms
    );
    let mut driver = AnimationDriver::new(&config);

    // Numeric fields - stacked at the top of the panel
    let px = ui::panel_x() + 10.0;
    let field_width = ui::PANEL_WIDTH - 20.0;
    let mut rows_field = NumberField::new(px, 30.0, field_width, "Rows", driver.dimensions.rows(), MAX_FIELD_DIMENSION);
    let mut cols_field = NumberField::new(px, 90.0, field_width, "Cols", driver.dimensions.cols(), MAX_FIELD_DIMENSION);

    loop {
        let mouse_pos = mouse_position();

        // Update UI positions for responsiveness
        let px = ui::panel_x() + 10.0;
        rows_field.set_position(px, 30.0);
        cols_field.set_position(px, 90.0);

        // Recreate buttons so their enabled state follows the driver
        let buttons = ui::create_buttons(driver.is_running);

        // Process input
        driver = input::process_fields(driver, &mut rows_field, &mut cols_field, mouse_pos);
        driver = input::process_button_clicks(driver, &buttons, mouse_pos);
        if !rows_field.is_focused() && !cols_field.is_focused() {
            driver = input::process_keyboard_input(driver);
        }

        // Advance animation
        driver = driver.tick(get_frame_time());

        let (rows, cols) = driver.grid.dimensions();
        let layout = GridLayout::fit(rows, cols, ui::grid_area_width(), ui::grid_area_height());
        let hovered = input::hovered_cell(&layout, mouse_pos);

        // Render (with timing)
        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        rendering::draw_header();
        rendering::draw_grid(&driver.grid, &layout, hovered);
        rendering::draw_controls(&driver, &buttons, &[&rows_field, &cols_field], hovered, mouse_pos);
        driver.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
