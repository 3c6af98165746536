use ratatui::{prelude::*, widgets::*};

use crate::core::state::settings::{SettingsField, MAX_CARD_GAP};
use crate::core::state::AppState;
use crate::presentation::theme::Theme;

/// Right-side overlay editing the pending settings (live preview).
pub struct SettingsPanel;

impl SettingsPanel {
    pub fn view(state: &AppState, theme: &Theme, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(Clear, area);

        let title = if state.settings.has_unapplied_edits() {
            " Customize* "
        } else {
            " Customize "
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.panel_bg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let pending = state.settings.pending;
        let mut lines: Vec<Line> = Vec::new();
        for field in SettingsField::ALL {
            let focused = state.settings.focused == field;
            let marker = if focused { "▸ " } else { "  " };
            let label_style = if focused {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            let value = match field {
                SettingsField::Accent => pending.accent.label().to_string(),
                SettingsField::ScrollStyle => pending.mode.label().to_string(),
                SettingsField::Background => pending.background.label().to_string(),
                SettingsField::CardGap => gap_slider(pending.card_gap),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker}{}", field.label()), label_style),
            ]));
            let value_span = if field == SettingsField::Accent {
                Line::from(vec![
                    Span::styled("    ● ", Style::default().fg(theme.accent)),
                    Span::styled(value, Style::default().fg(theme.dim)),
                ])
            } else {
                Line::from(Span::styled(
                    format!("    {value}"),
                    Style::default().fg(theme.dim),
                ))
            };
            lines.push(value_span);
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            "←/→ adjust · Enter apply · Esc close",
            Style::default().fg(theme.faint),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn gap_slider(gap: u16) -> String {
    let filled = "▮".repeat(usize::from(gap));
    let empty = "▯".repeat(usize::from(MAX_CARD_GAP - gap.min(MAX_CARD_GAP)));
    format!("{filled}{empty} {gap} rows")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_gap_slider_shape() {
        assert_eq!(gap_slider(0), "▯▯▯ 0 rows");
        assert_eq!(gap_slider(2), "▮▮▯ 2 rows");
        assert_eq!(gap_slider(3), "▮▮▮ 3 rows");
    }
}
