use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Column headers
            Constraint::Min(0),    // Inbox rows
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        footer_area: chunks[2],
    }
}

pub struct RowColumns {
    pub from: Rect,
    pub subject: Rect,
    pub recipients: Rect,
    pub date: Rect,
}

/// Column split shared by the header row and every inbox row.
pub fn get_row_columns(area: Rect) -> RowColumns {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),     // From
            Constraint::Min(12),        // Subject
            Constraint::Percentage(42), // Recipients
            Constraint::Length(8),      // Date
        ])
        .split(area);

    RowColumns {
        from: chunks[0],
        subject: chunks[1],
        recipients: chunks[2],
        date: chunks[3],
    }
}

/// Width of the recipients cell for a given terminal width.
///
/// The fitting pass needs this before (and independently of) any draw, so it
/// reuses the row split on a synthetic full-width rect. A terminal that has
/// not reported a size yet yields 0, which over-truncates until the first
/// resize settles it.
pub fn recipients_cell_width(terminal_width: u16) -> u16 {
    get_row_columns(Rect::new(0, 0, terminal_width, 1))
        .recipients
        .width
}
