use macroquad::prelude::*;

use crate::domain::{MIN_DIMENSION, parse_dimension};

/// Numeric input field with `-`/`+` steppers.
/// Text is coerced through `parse_dimension` on commit and capped at `max`.
#[derive(Clone)]
pub struct NumberField {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    value: usize,
    text: String,
    is_focused: bool,
    max: usize,
}

const MAX_TEXT_LEN: usize = 6;

impl NumberField {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, value: usize, max: usize) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            label: label.into(),
            value,
            text: value.to_string(),
            is_focused: false,
            max,
        }
    }

    pub fn value(&self) -> usize {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Sync with an externally changed value (ignored while the user is typing)
    pub fn set_value(&mut self, value: usize) {
        self.value = value;
        if !self.is_focused {
            self.text = value.to_string();
        }
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Append a typed character; anything but digits and a decimal point is dropped
    pub fn push_char(&mut self, ch: char) {
        if (ch.is_ascii_digit() || ch == '.') && self.text.len() < MAX_TEXT_LEN {
            self.text.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Drop the edit and show the current value again
    pub fn cancel(&mut self) {
        self.text = self.value.to_string();
        self.is_focused = false;
    }

    /// Coerce the text, unfocus, and return the new value if it changed
    pub fn commit(&mut self) -> Option<usize> {
        let value = parse_dimension(&self.text).min(self.max);
        self.text = value.to_string();
        self.is_focused = false;
        self.replace(value)
    }

    /// Step the value by `delta`, staying within the minimum and `max`
    pub fn step_by(&mut self, delta: i64) -> Option<usize> {
        let target = (self.value as i64).saturating_add(delta);
        let value = usize::try_from(target).map_or(MIN_DIMENSION, |v| v.clamp(MIN_DIMENSION, self.max));
        self.text = value.to_string();
        self.replace(value)
    }

    fn replace(&mut self, value: usize) -> Option<usize> {
        (value != self.value).then(|| {
            self.value = value;
            value
        })
    }

    /// Handle mouse and keyboard; returns the new value when it changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if is_mouse_button_pressed(MouseButton::Left) {
            if self.is_hovered_minus(mouse_pos) {
                return self.step_by(-1);
            }
            if self.is_hovered_plus(mouse_pos) {
                return self.step_by(1);
            }
            if self.is_hovered_box(mouse_pos) {
                if !self.is_focused {
                    // Discard keys typed before focusing
                    while get_char_pressed().is_some() {}
                    self.is_focused = true;
                }
                return None;
            }
            if self.is_focused {
                return self.commit();
            }
        }

        if !self.is_focused {
            return None;
        }

        while let Some(ch) = get_char_pressed() {
            self.push_char(ch);
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
        }
        if is_key_pressed(KeyCode::Escape) {
            self.cancel();
            return None;
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            return self.commit();
        }
        None
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let box_width = self.box_width();
        let border = if self.is_focused { YELLOW } else { WHITE };
        draw_rectangle(self.x, self.y, box_width, self.height, Color::from_rgba(20, 20, 20, 255));
        draw_rectangle_lines(self.x, self.y, box_width, self.height, 2.0, border);

        let caret = if self.is_focused { "_" } else { "" };
        draw_text(&format!("{}{}", self.text, caret), self.x + 6.0, self.y + 21.0, 18.0, WHITE);

        let steppers = [
            ("-", self.minus_x(), self.is_hovered_minus(mouse_pos)),
            ("+", self.plus_x(), self.is_hovered_plus(mouse_pos)),
        ];
        for (symbol, sx, hovered) in steppers {
            let color = if hovered {
                Color::from_rgba(100, 149, 237, 255)
            } else {
                Color::from_rgba(70, 130, 180, 255)
            };
            draw_rectangle(sx, self.y, self.height, self.height, color);
            draw_rectangle_lines(sx, self.y, self.height, self.height, 2.0, WHITE);
            draw_text(symbol, sx + 10.0, self.y + 21.0, 20.0, WHITE);
        }
    }

    fn box_width(&self) -> f32 {
        self.width - 2.0 * self.height
    }

    fn minus_x(&self) -> f32 {
        self.x + self.box_width()
    }

    fn plus_x(&self) -> f32 {
        self.x + self.box_width() + self.height
    }

    fn in_rect(&self, pos: (f32, f32), x: f32, width: f32) -> bool {
        pos.0 >= x && pos.0 <= x + width && pos.1 >= self.y && pos.1 <= self.y + self.height
    }

    fn is_hovered_box(&self, pos: (f32, f32)) -> bool {
        self.in_rect(pos, self.x, self.box_width())
    }

    fn is_hovered_minus(&self, pos: (f32, f32)) -> bool {
        self.in_rect(pos, self.minus_x(), self.height)
    }

    fn is_hovered_plus(&self, pos: (f32, f32)) -> bool {
        self.in_rect(pos, self.plus_x(), self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(value: usize) -> NumberField {
        NumberField::new(0.0, 0.0, 180.0, "Rows", value, 200)
    }

    #[test]
    fn test_typing_and_commit() {
        let mut f = field(20);
        f.text.clear();
        for ch in "3x5".chars() {
            f.push_char(ch);
        }
        assert_eq!(f.text(), "35");
        assert_eq!(f.commit(), Some(35));
        assert_eq!(f.value(), 35);
        assert!(!f.is_focused());
    }

    #[test]
    fn test_commit_coerces_and_caps() {
        let mut f = field(20);
        f.text = String::new();
        assert_eq!(f.commit(), Some(5));
        assert_eq!(f.text(), "5");

        f.text = "999".to_string();
        assert_eq!(f.commit(), Some(200));

        f.text = "12.9".to_string();
        assert_eq!(f.commit(), Some(12));

        f.text = "12".to_string();
        assert_eq!(f.commit(), None);
    }

    #[test]
    fn test_step_stays_in_range() {
        let mut f = field(5);
        assert_eq!(f.step_by(-1), None);
        assert_eq!(f.step_by(1), Some(6));

        let mut f = field(200);
        assert_eq!(f.step_by(1), None);
        assert_eq!(f.value(), 200);

        let mut f = field(6);
        assert_eq!(f.step_by(-100), Some(MIN_DIMENSION));
        assert_eq!(f.step_by(i64::MAX), Some(200));
    }

    #[test]
    fn test_cancel_restores_text() {
        let mut f = field(20);
        f.is_focused = true;
        f.backspace();
        assert_eq!(f.text(), "2");
        f.cancel();
        assert_eq!(f.text(), "20");
        assert!(!f.is_focused());
    }

    #[test]
    fn test_set_value_respects_focus() {
        let mut f = field(20);
        f.set_value(10);
        assert_eq!(f.text(), "10");

        f.is_focused = true;
        f.text = "7".to_string();
        f.set_value(11);
        assert_eq!(f.value(), 11);
        assert_eq!(f.text(), "7");
    }

    #[test]
    fn test_text_length_is_bounded() {
        let mut f = field(20);
        for _ in 0..20 {
            f.push_char('9');
        }
        assert_eq!(f.text().len(), MAX_TEXT_LEN);
    }
}
