use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;
use crate::presentation::theme::Theme;

/// Two rows at the bottom: key hints, then the toast line.
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn view(state: &AppState, theme: &Theme, frame: &mut Frame<'_>, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1), Constraint::Length(1)])
            .split(area);
        frame.render_widget(Clear, layout[0]);
        frame.render_widget(Clear, layout[1]);

        let hints = Paragraph::new(
            "j/k select · u/d vote · e expand · m menu · s settings · r refresh · q quit",
        )
        .style(Style::default().fg(theme.faint).bg(theme.bg));
        frame.render_widget(hints, layout[0]);

        let message_line = if let Some(toast) = &state.system.notification {
            Paragraph::new(toast.message.clone())
                .style(theme.notification_style(toast.variant).bg(theme.bg))
                .alignment(Alignment::Center)
        } else {
            Paragraph::new(format!("{} posts", state.feed_len()))
                .style(Style::default().fg(theme.dim).bg(theme.bg))
        };
        frame.render_widget(message_line, layout[1]);
    }
}
