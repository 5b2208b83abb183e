pub mod layout;
pub mod theme;
pub mod widgets;

pub use theme::Theme;

use crate::app::App;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let main_layout = layout::get_main_layout(area);

    // 1. Column headers
    let theme = app.theme.clone();
    let header_columns = layout::get_row_columns(main_layout.header_area);
    let header_style = Style::default()
        .fg(theme.blue)
        .add_modifier(Modifier::BOLD);
    f.render_widget(
        Paragraph::new(Span::styled("From", header_style)),
        header_columns.from,
    );
    f.render_widget(
        Paragraph::new(Span::styled("Subject", header_style)),
        header_columns.subject,
    );
    f.render_widget(
        Paragraph::new(Span::styled("Recipients", header_style)),
        header_columns.recipients,
    );
    f.render_widget(
        Paragraph::new(Span::styled("Date", header_style)),
        header_columns.date,
    );

    // 2. Inbox rows
    widgets::inbox::render(f, main_layout.body_area, app);

    // 3. Footer hint
    let hint = Line::from(vec![
        Span::styled(
            " q ",
            Style::default()
                .fg(theme.overlay)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("quit  ", Style::default().fg(theme.overlay)),
        Span::styled(
            "j/k ",
            Style::default()
                .fg(theme.overlay)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("move  hover +N for the full list", Style::default().fg(theme.overlay)),
    ]);
    let footer = Paragraph::new(hint).alignment(Alignment::Right);
    f.render_widget(footer, main_layout.footer_area);

    // 4. Tooltip overlay (last, floats above everything)
    widgets::recipients::tooltip::render(f, app);
}
