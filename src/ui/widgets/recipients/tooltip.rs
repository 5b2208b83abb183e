//! Recipients tooltip — hover-toggled floating panel.
//!
//! Two states, no timers: pointer-enter shows, pointer-leave hides, for the
//! app's whole lifetime. The panel is pinned near the top-right of the
//! viewport, like a toast.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Default)]
pub struct Tooltip {
    pub state: TooltipState,
    message: String,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_enter(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.state = TooltipState::Visible;
    }

    pub fn pointer_leave(&mut self) {
        self.state = TooltipState::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        self.state == TooltipState::Visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn render(f: &mut Frame, app: &App) {
    if !app.tooltip.is_visible() {
        return;
    }
    let theme = &app.theme;
    let message = app.tooltip.message();

    let width = (message.width() as u16 + 4).min(f.area().width.saturating_sub(2));
    let height = 3;
    let x = f.area().width.saturating_sub(width + 1);
    let y = 1; // Near top, clear of the header

    let full_area = Rect::new(x, y, width, height);
    // Clip to screen bounds to avoid panic
    let visible_area = full_area.intersection(f.area());
    if visible_area.is_empty() {
        return;
    }

    f.render_widget(Clear, visible_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.blue))
        .style(Style::default().bg(Color::Reset));

    let text = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(theme.text),
    )))
    .alignment(Alignment::Center)
    .block(block);

    f.render_widget(text, visible_area);
}
