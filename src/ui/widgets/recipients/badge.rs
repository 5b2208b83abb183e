//! Recipients badge — "+N" pill for the hidden names.
//!
//! One input: the truncated count. Rendering and measuring live together so
//! the fitting pass reserves exactly the cells the pill will occupy.

use crate::fit::TextMeasure;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

pub fn label(count: usize) -> String {
    format!("\u{00A0}+{}\u{00A0}", count)
}

/// Rendered width of the pill, 0 while nothing is hidden.
pub fn width(count: usize, measure: &dyn TextMeasure) -> u16 {
    if count == 0 {
        0
    } else {
        measure.width(&label(count))
    }
}

pub fn render(f: &mut Frame, area: Rect, count: usize, theme: &Theme) {
    let pill = Span::styled(
        label(count),
        Style::default()
            .fg(theme.base)
            .bg(theme.magenta)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(Paragraph::new(pill), area);
}
