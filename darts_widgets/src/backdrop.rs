use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::theme::{model_color, tui_color, Theme};

/// Slowly shifting cork-board background behind every screen
pub struct BackdropWidget {
    pub tick: u64,
}

impl BackdropWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }
}

impl Widget for BackdropWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cycle = (self.tick % 360) as f64;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                // Cork grain: two offset waves, darker toward the bottom
                let grain = ((x as f64 * 0.7 + cycle * 0.01).sin()
                    + (y as f64 * 1.3 - x as f64 * 0.2).cos())
                    * 2.0;
                let shade = (y as f64 / area.height.max(1) as f64 * 8.0) as i16;

                let r = (18i16 + grain as i16 - shade).clamp(0, 255) as u8;
                let g = (16i16 + grain as i16 / 2 - shade).clamp(0, 255) as u8;
                let b = (14i16 - shade / 2).clamp(0, 255) as u8;

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(Color::Rgb(r, g, b));
                }
            }
        }
    }
}

/// Double rule around the play area with board-coloured corners
pub struct FrameWidget {
    pub tick: u64,
}

impl FrameWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }
}

impl Widget for FrameWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 4 {
            return;
        }

        let cycle = (self.tick % 600) as f64;
        let cork = model_color(Theme::CORK, darts_core::Color::BLACK);
        let gold = model_color(Theme::GOLD, darts_core::Color::WHITE);

        for x in area.left()..area.right() {
            let t = (x as f64 / area.width as f64 + cycle * 0.005).sin().abs();
            let color = tui_color(cork.lerp(gold, (t * 0.3) as f32));
            set_cell(buf, x, area.top(), "\u{2550}", Style::default().fg(color));
            set_cell(
                buf,
                x,
                area.bottom().saturating_sub(1),
                "\u{2550}",
                Style::default().fg(color),
            );
        }

        for y in area.top()..area.bottom() {
            let t = (y as f64 / area.height as f64 + cycle * 0.005).sin().abs();
            let color = tui_color(cork.lerp(gold, (t * 0.3) as f32));
            set_cell(buf, area.left(), y, "\u{2551}", Style::default().fg(color));
            set_cell(
                buf,
                area.right().saturating_sub(1),
                y,
                "\u{2551}",
                Style::default().fg(color),
            );
        }

        // Alternating red and green corners, like the double ring
        let red = Style::default().fg(Theme::BOARD_RED);
        let green = Style::default().fg(Theme::BOARD_GREEN);
        let right = area.right().saturating_sub(1);
        let bottom = area.bottom().saturating_sub(1);
        set_cell(buf, area.left(), area.top(), "\u{2554}", red);
        set_cell(buf, right, area.top(), "\u{2557}", green);
        set_cell(buf, area.left(), bottom, "\u{255a}", green);
        set_cell(buf, right, bottom, "\u{255d}", red);
    }
}

fn set_cell(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol);
        if let Some(fg) = style.fg {
            cell.set_fg(fg);
        }
    }
}
