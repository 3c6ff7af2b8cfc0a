use macroquad::prelude::*;

/// Button UI component with hover, click and disabled states
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    enabled: bool,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            enabled: true,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    /// Builder for the enabled state
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Check if a point lies on the button
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        pos.0 >= self.x
            && pos.0 <= self.x + self.width
            && pos.1 >= self.y
            && pos.1 <= self.y + self.height
    }

    /// Draw button; disabled buttons are greyed out and ignore hover
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if !self.is_enabled() {
            Color::from_rgba(60, 60, 60, 255)
        } else if self.contains(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };
        let text_color = if self.is_enabled() { WHITE } else { GRAY };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, text_color);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            text_color,
        );
    }

    /// Check if an enabled button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_enabled() && self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let button = Button::new(10.0, 20.0, 100.0, 30.0, "Start");
        assert!(button.contains((10.0, 20.0)));
        assert!(button.contains((110.0, 50.0)));
        assert!(!button.contains((9.9, 25.0)));
        assert!(!button.contains((50.0, 50.1)));
    }

    #[test]
    fn test_enabled_builder() {
        let button = Button::new(0.0, 0.0, 10.0, 10.0, "Stop");
        assert!(button.is_enabled());
        assert!(!button.with_enabled(false).is_enabled());
    }
}
