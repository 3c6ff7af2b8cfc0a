use macroquad::prelude::*;
use crate::application::AnimationDriver;
use crate::domain::cap_dimension;
use crate::ui::{Button, ButtonAction, GridLayout, NumberField};

/// Process keyboard shortcuts functionally.
/// Callers skip this while a number field has focus, so typing is not hijacked.
pub fn process_keyboard_input(driver: AnimationDriver) -> AnimationDriver {
    type KeyAction = (KeyCode, fn(AnimationDriver) -> AnimationDriver);

    let actions: [KeyAction; 7] = [
        (KeyCode::Space, AnimationDriver::toggle_running),
        (KeyCode::R, AnimationDriver::reset),
        (KeyCode::Period, |d| if d.is_running { d } else { d.step() }),
        (KeyCode::Up, |d| adjust_rows(d, 1)),
        (KeyCode::Down, |d| adjust_rows(d, -1)),
        (KeyCode::Right, |d| adjust_cols(d, 1)),
        (KeyCode::Left, |d| adjust_cols(d, -1)),
    ];

    actions.iter().fold(driver, |d, (key, action)| {
        if is_key_pressed(*key) { action(d) } else { d }
    })
}

/// Nudge the row count, staying within the same bounds as the input fields
pub fn adjust_rows(driver: AnimationDriver, delta: i64) -> AnimationDriver {
    let rows = cap_dimension((driver.dimensions.rows() as i64).saturating_add(delta));
    driver.set_rows(rows as i64)
}

/// Nudge the column count, staying within the same bounds as the input fields
pub fn adjust_cols(driver: AnimationDriver, delta: i64) -> AnimationDriver {
    let cols = cap_dimension((driver.dimensions.cols() as i64).saturating_add(delta));
    driver.set_cols(cols as i64)
}

/// Apply a panel command to the driver
pub fn apply_action(driver: AnimationDriver, action: ButtonAction) -> AnimationDriver {
    match action {
        ButtonAction::Start => driver.start(),
        ButtonAction::Stop => driver.stop(),
        ButtonAction::Reset => driver.reset(),
        ButtonAction::Step => driver.step(),
    }
}

/// Process button clicks functionally
pub fn process_button_clicks(
    driver: AnimationDriver,
    buttons: &[(ButtonAction, Button)],
    mouse_pos: (f32, f32),
) -> AnimationDriver {
    buttons
        .iter()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .fold(driver, |d, (action, _)| apply_action(d, *action))
}

/// Feed the rows/cols fields and push committed values into the driver
pub fn process_fields(
    driver: AnimationDriver,
    rows_field: &mut NumberField,
    cols_field: &mut NumberField,
    mouse_pos: (f32, f32),
) -> AnimationDriver {
    let driver = match rows_field.update(mouse_pos) {
        Some(rows) => driver.set_rows(rows as i64),
        None => driver,
    };
    let driver = match cols_field.update(mouse_pos) {
        Some(cols) => driver.set_cols(cols as i64),
        None => driver,
    };

    // Keep fields in sync with keyboard shortcuts and reset
    rows_field.set_value(driver.dimensions.rows());
    cols_field.set_value(driver.dimensions.cols());
    driver
}

/// Cell under the mouse, if any
pub fn hovered_cell(layout: &GridLayout, mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    (mouse_pos.0 < crate::ui::grid_area_width())
        .then(|| layout.cell_at(mouse_pos))
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::{MAX_INPUT_DIMENSION, MIN_DIMENSION};

    #[test]
    fn test_apply_action() {
        let d = AnimationDriver::new(&AppConfig::default());
        let d = apply_action(d, ButtonAction::Step);
        assert_eq!(d.phase, 1);
        let d = apply_action(d, ButtonAction::Start);
        assert!(d.is_running);
        let d = apply_action(d, ButtonAction::Stop);
        assert!(!d.is_running);
        let d = apply_action(d, ButtonAction::Reset);
        assert_eq!(d.phase, 0);
    }

    #[test]
    fn test_arrow_adjustments_stop_at_input_cap() {
        let mut d = AnimationDriver::new(&AppConfig::default());
        for _ in 0..250 {
            d = adjust_rows(d, 1);
            d = adjust_cols(d, 1);
        }
        assert_eq!(d.dimensions.rows(), MAX_INPUT_DIMENSION);
        assert_eq!(d.dimensions.cols(), MAX_INPUT_DIMENSION);
        assert_eq!(d.grid.dimensions(), (MAX_INPUT_DIMENSION, MAX_INPUT_DIMENSION));
    }

    #[test]
    fn test_arrow_adjustments_stop_at_minimum() {
        let mut d = AnimationDriver::new(&AppConfig::default());
        for _ in 0..30 {
            d = adjust_rows(d, -1);
            d = adjust_cols(d, -1);
        }
        assert_eq!(d.dimensions.rows(), MIN_DIMENSION);
        assert_eq!(d.dimensions.cols(), MIN_DIMENSION);
    }
}
