use crate::config::AppConfig;
use crate::fit::{fit_prefix, CellMeasure, FitResult, FitWidths, TextMeasure};
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::widgets::recipients::badge;
use crate::ui::widgets::recipients::tooltip::Tooltip;
use ratatui::layout::Rect;

/// One inbox entry. Recipients keep their given order for the widget's
/// whole lifetime.
#[derive(Debug, Clone)]
pub struct Message {
    pub from: String,
    pub subject: String,
    pub recipients: Vec<String>,
    pub date: String,
}

impl Message {
    pub fn new(from: &str, subject: &str, recipients: &[&str], date: &str) -> Self {
        Self {
            from: from.to_string(),
            subject: subject.to_string(),
            recipients: recipients.iter().map(|r| r.to_string()).collect(),
            date: date.to_string(),
        }
    }

    /// Bundled sample inbox 📬
    pub fn samples() -> Vec<Message> {
        vec![
            Message::new(
                "Priya Nair",
                "Q3 roadmap review",
                &["Alice Kim", "Bob Duarte", "Carol Osei", "Dmitri Volkov", "Eve Marchetti"],
                "Aug 21",
            ),
            Message::new(
                "Tomás Rivera",
                "Lunch on Thursday?",
                &["Alice Kim"],
                "Aug 21",
            ),
            Message::new(
                "Build Bot",
                "nightly #4182 failed",
                &["Platform Team", "Alice Kim", "Bob Duarte"],
                "Aug 20",
            ),
            Message::new(
                "Hana Sato",
                "Re: conference travel approvals",
                &["Finance Desk", "Carol Osei", "Priya Nair", "Tomás Rivera", "Hana Sato", "Ngozi Adeyemi", "Lars Viklund"],
                "Aug 19",
            ),
            Message::new(
                "Ngozi Adeyemi",
                "Design crit notes",
                &["Carol Osei", "Eve Marchetti"],
                "Aug 18",
            ),
            Message::new(
                "Lars Viklund",
                "Oncall handoff",
                &["Platform Team", "Build Bot", "Dmitri Volkov", "Priya Nair"],
                "Aug 17",
            ),
        ]
    }
}

pub struct App {
    pub theme: Theme,
    pub config: AppConfig,

    pub is_running: bool,

    /// Inbox rows, immutable once loaded.
    pub messages: Vec<Message>,
    pub selected: usize,

    /// Per-row fit state: pessimistic placeholder until the mount pass runs,
    /// then resettled on every terminal resize.
    pub fits: Vec<FitResult>,

    /// Badge hover hitboxes, recorded at render time (None while no badge).
    pub badge_hitboxes: Vec<Option<Rect>>,

    /// Floating panel with the full recipient list of the hovered row.
    pub tooltip: Tooltip,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme, messages: Vec<Message>) -> Self {
        let fits = messages
            .iter()
            .map(|m| FitResult::placeholder(m.recipients.len()))
            .collect();
        let badge_hitboxes = vec![None; messages.len()];
        Self {
            theme,
            config,
            is_running: true,
            messages,
            selected: 0,
            fits,
            badge_hitboxes,
            tooltip: Tooltip::new(),
        }
    }

    /// One fitting pass over every row.
    ///
    /// Runs once right after the terminal is set up (mount) and once per
    /// resize event. The badge width is read from the row's current fit
    /// state, same as measuring the live badge element: 0 before anything
    /// was hidden, the "+N" pill width afterwards.
    pub fn recompute_fits(&mut self, terminal_width: u16) {
        let container = layout::recipients_cell_width(terminal_width);
        let measure = CellMeasure;
        let ellipsis = measure.width(&self.config.ellipsis);

        for (fit, message) in self.fits.iter_mut().zip(&self.messages) {
            let widths = FitWidths {
                container,
                ellipsis,
                badge: badge::width(fit.truncated, &measure),
            };
            *fit = fit_prefix(&message.recipients, &self.config.separator, widths, &measure);
        }
    }

    /// Full joined list shown by the tooltip for a given row.
    pub fn full_recipient_list(&self, row: usize) -> String {
        self.messages[row].recipients.join(&self.config.separator)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.messages.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
