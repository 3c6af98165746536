use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;
use crate::presentation::theme::Theme;

/// The auto-hiding top bar: app title, active mode badge, busy marker.
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn view(state: &AppState, theme: &Theme, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(Block::new().style(Style::default().bg(theme.bg)), area);
        if state.scroll.header_hidden() {
            return;
        }

        let mut right = vec![Span::styled(
            format!(" {} ", state.scroll.active().label()),
            Style::default().fg(theme.bg).bg(theme.accent),
        )];
        if state.feed.pagination.is_loading() {
            right.insert(0, Span::styled("● ", Style::default().fg(theme.accent)));
        }

        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "feedtui",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  your feed, ten ways to move it", Style::default().fg(theme.dim)),
        ]));
        frame.render_widget(title, inner);

        let badge = Paragraph::new(Line::from(right)).alignment(Alignment::Right);
        frame.render_widget(badge, inner);
    }
}
