use unicode_width::UnicodeWidthStr;

use crate::color::Color;

/// Static line of text inside a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub color: Color,
    pub padding_x: i32,
    pub padding_y: i32,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            padding_x: 0,
            padding_y: 0,
        }
    }

    pub fn padding(mut self, x: i32, y: i32) -> Self {
        self.padding_x = x;
        self.padding_y = y;
        self
    }

    pub fn width(&self) -> i32 {
        self.text.width() as i32 + 2 * self.padding_x
    }

    pub fn height(&self) -> i32 {
        1 + 2 * self.padding_y
    }
}
