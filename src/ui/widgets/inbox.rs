use crate::app::App;
use crate::ui::layout;
use crate::ui::widgets::recipients;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let rows = (area.height as usize).min(app.messages.len());

    for i in 0..rows {
        let row_area = Rect::new(area.x, area.y + i as u16, area.width, 1);

        if i == app.selected {
            f.render_widget(
                Block::default().style(Style::default().bg(app.theme.surface)),
                row_area,
            );
        }

        let columns = layout::get_row_columns(row_area);
        let theme = &app.theme;
        let message = &app.messages[i];

        let from = Paragraph::new(Span::styled(
            message.from.clone(),
            Style::default().fg(theme.magenta),
        ));
        let subject_style = if i == app.selected {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let subject = Paragraph::new(Span::styled(message.subject.clone(), subject_style));
        let date = Paragraph::new(Span::styled(
            message.date.clone(),
            Style::default().fg(theme.overlay),
        ));

        f.render_widget(from, columns.from);
        f.render_widget(subject, columns.subject);
        f.render_widget(date, columns.date);

        recipients::render(f, columns.recipients, app, i);
    }

    // Rows scrolled out of view cannot be hovered
    for hitbox in app.badge_hitboxes.iter_mut().skip(rows) {
        *hitbox = None;
    }
}
