//! Recipients cell — visible prefix, ellipsis marker, count badge.
//!
//! Drawing consumes the row's settled fit state; it never measures. The badge
//! sits right-aligned in the cell and its rect doubles as the hover hitbox
//! that triggers the tooltip.

pub mod badge;
pub mod tooltip;

use crate::app::App;
use crate::fit::CellMeasure;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App, row: usize) {
    let theme = &app.theme;
    let fit = app.fits[row];
    let message = &app.messages[row];

    let visible = fit.visible.min(message.recipients.len());
    let prefix = message.recipients[..visible].join(&app.config.separator);

    let mut spans = vec![Span::styled(prefix, Style::default().fg(theme.text))];
    if fit.truncated > 0 {
        spans.push(Span::styled(
            app.config.ellipsis.clone(),
            Style::default().fg(theme.overlay),
        ));
    }

    let badge_width = badge::width(fit.truncated, &CellMeasure).min(area.width);
    let text_area = Rect {
        width: area.width.saturating_sub(badge_width),
        ..area
    };
    f.render_widget(Paragraph::new(Line::from(spans)), text_area);

    if fit.truncated > 0 && badge_width > 0 {
        let badge_area = Rect {
            x: area.right().saturating_sub(badge_width),
            y: area.y,
            width: badge_width,
            height: 1,
        };
        badge::render(f, badge_area, fit.truncated, theme);
        app.badge_hitboxes[row] = Some(badge_area);
    } else {
        app.badge_hitboxes[row] = None;
    }
}
