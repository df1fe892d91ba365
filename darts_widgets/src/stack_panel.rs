use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthChar;

use darts_core::{MenuEntry, PanelItem, Point, RenderSink, StackPanel, TextBlock};

use crate::theme::{model_color, tui_color, Theme, BG_MODEL};

/// Draws a panel tree at an absolute cell position, fading it over whatever
/// is already in the buffer. Cells outside the render area are clipped.
pub struct StackPanelWidget<'a, A> {
    pub panel: &'a StackPanel<A>,
    pub origin: Point,
    pub alpha: f32,
}

impl<'a, A> StackPanelWidget<'a, A> {
    pub fn new(panel: &'a StackPanel<A>, origin: Point, alpha: f32) -> Self {
        Self {
            panel,
            origin,
            alpha,
        }
    }
}

impl<A> Widget for StackPanelWidget<'_, A> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_panel(self.panel, self.origin, self.alpha, area, buf);
    }
}

fn render_panel<A>(panel: &StackPanel<A>, origin: Point, alpha: f32, area: Rect, buf: &mut Buffer) {
    let rects = panel.child_rects(origin);
    for (item, rect) in panel.items.iter().zip(rects) {
        match item {
            PanelItem::Text(text) => render_text(text, rect.origin(), alpha, area, buf),
            PanelItem::Entry(entry) => render_entry(entry, rect.origin(), alpha, area, buf),
            PanelItem::Panel(child) => render_panel(child, rect.origin(), alpha, area, buf),
        }
    }
}

fn render_text(text: &TextBlock, at: Point, alpha: f32, area: Rect, buf: &mut Buffer) {
    let at = Point::new(at.x + text.padding_x, at.y + text.padding_y);
    put_str(buf, area, at, &text.text, text.color, alpha, true);
}

fn render_entry<A>(entry: &MenuEntry<A>, at: Point, alpha: f32, area: Rect, buf: &mut Buffer) {
    let at = Point::new(at.x + entry.padding_x, at.y + entry.padding_y);
    let color = if entry.enabled {
        entry.color
    } else {
        model_color(Theme::DIM_TEXT, entry.color)
    };
    put_str(buf, area, at, &entry.display_text(), color, alpha, false);
}

/// Write `s` cell by cell, blending `color` over each cell's background.
///
/// Wide glyphs take as many cells as they occupy on the terminal and are
/// dropped when they would straddle the area edge.
fn put_str(
    buf: &mut Buffer,
    area: Rect,
    at: Point,
    s: &str,
    color: darts_core::Color,
    alpha: f32,
    bold: bool,
) {
    let y = at.y;
    if y < area.top() as i32 || y >= area.bottom() as i32 {
        return;
    }

    let mut x = at.x;
    for ch in s.chars() {
        let width = ch.width().unwrap_or(0) as i32;
        if width == 0 {
            continue;
        }
        let start = x;
        x += width;
        if start < area.left() as i32 || x > area.right() as i32 {
            continue;
        }
        if let Some(cell) = buf.cell_mut((start as u16, y as u16)) {
            let bg = model_color(cell.bg, BG_MODEL);
            cell.set_char(ch);
            cell.set_fg(tui_color(color.over(bg, alpha)));
            if bold {
                cell.modifier.insert(Modifier::BOLD);
            }
        }
    }
}

/// Render sink writing straight into a frame buffer.
pub struct BufferSink<'a> {
    pub buf: &'a mut Buffer,
    pub area: Rect,
}

impl<'a> BufferSink<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }
}

impl<A> RenderSink<A> for BufferSink<'_> {
    fn draw_panel(&mut self, panel: &StackPanel<A>, origin: Point, alpha: f32) {
        if alpha <= 0.0 {
            log::trace!("panel at {},{} fully faded, skipped", origin.x, origin.y);
            return;
        }
        StackPanelWidget::new(panel, origin, alpha).render(self.area, self.buf);
    }
}
