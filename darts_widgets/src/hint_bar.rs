use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// One-line footer listing key bindings and an optional status message.
pub struct HintBarWidget<'a> {
    pub hints: &'a [(&'a str, &'a str)],
    pub status: Option<&'a str>,
}

impl<'a> HintBarWidget<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            hints,
            status: None,
        }
    }

    pub fn status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }

    fn line(&self) -> Line<'a> {
        let hints: &'a [(&'a str, &'a str)] = self.hints;
        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[", Style::default().fg(Theme::DIM_TEXT)));
            spans.push(Span::styled(*key, Style::default().fg(Theme::GOLD)));
            spans.push(Span::styled("] ", Style::default().fg(Theme::DIM_TEXT)));
            spans.push(Span::styled(*label, Style::default().fg(Theme::MUTED_TEXT)));
        }
        if let Some(status) = self.status {
            spans.push(Span::styled("  \u{2502}  ", Style::default().fg(Theme::DIM_TEXT)));
            spans.push(Span::styled(status, Style::default().fg(Theme::BOARD_CREAM)));
        }
        Line::from(spans)
    }
}

impl Widget for HintBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
