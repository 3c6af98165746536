use ratatui::{prelude::*, widgets::*};
use thousands::Separable;

use crate::domain::post::Post;
use crate::domain::text::{truncate_text, wrap_text};
use crate::presentation::theme::Theme;

/// Columns of card chrome unavailable to the body text.
const BODY_INSET_COLS: u16 = 2;
/// Collapsed cards show at most this many body rows.
const COLLAPSED_BODY_ROWS: usize = 3;

/// One feed card.
///
/// The geometry must agree with [`Post::height`]: header (2) + optional media
/// block (4) + body rows + stats + separator.
pub struct PostCard<'a> {
    post: &'a Post,
    theme: &'a Theme,
    selected: bool,
    /// Render with the cinematic in-view treatment.
    cinematic: bool,
    /// Rows clipped off the top when the card is partially scrolled out.
    top_truncated: u16,
}

impl<'a> PostCard<'a> {
    pub fn new(post: &'a Post, theme: &'a Theme) -> Self {
        Self {
            post,
            theme,
            selected: false,
            cinematic: false,
            top_truncated: 0,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn cinematic(mut self, cinematic: bool) -> Self {
        self.cinematic = cinematic;
        self
    }

    pub fn top_truncated(mut self, rows: u16) -> Self {
        self.top_truncated = rows;
        self
    }

    fn text_style(&self) -> Style {
        let opacity = self.post.visual.map(|v| v.opacity).unwrap_or(1.0);
        if self.cinematic && !self.post.in_view {
            return Style::default().fg(self.theme.faint);
        }
        self.theme.opacity_style(opacity)
    }

    fn body_lines(&self, width: u16) -> Vec<String> {
        let cols = usize::from(width.saturating_sub(BODY_INSET_COLS)).max(1);
        let wrapped = wrap_text(self.post.body_text(), cols);
        let shown = if self.post.expanded {
            wrapped
        } else {
            truncate_text(&wrapped, COLLAPSED_BODY_ROWS)
        };
        shown.lines().map(str::to_string).collect()
    }
}

impl Widget for PostCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let text_style = self.text_style();
        let dim_style = Style::default().fg(self.theme.dim);
        let author_style = if self.selected {
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            text_style.add_modifier(Modifier::BOLD)
        };
        // Tilted cards get an italic meta line; the closest a cell grid
        // comes to a perspective transform.
        let tilted = self
            .post
            .visual
            .map(|v| v.rotation.abs() > 0.5)
            .unwrap_or(false);
        let meta_style = if tilted {
            dim_style.add_modifier(Modifier::ITALIC)
        } else {
            dim_style
        };

        let mut text = Text::default();

        let header = Line::from(vec![
            Span::styled(self.post.author.clone(), author_style),
            Span::raw("  "),
            Span::styled(format!("★ {:.1}", self.post.rating), dim_style),
        ]);
        text.extend::<Text>(header.into());
        text.extend(Text::styled(
            format!("{} · {}", self.post.meta_label(), self.post.posted_at()),
            meta_style,
        ));

        if let Some(badge) = &self.post.media_badge {
            let inner_width = usize::from(area.width.saturating_sub(2));
            let fill = "░".repeat(inner_width);
            text.extend(Text::styled(
                format!("┌{}┐", "─".repeat(inner_width)),
                dim_style,
            ));
            text.extend(Text::styled(format!("│{fill}│"), dim_style));
            text.extend(Text::styled(
                format!("│{:>width$}│", badge, width = inner_width),
                dim_style,
            ));
            text.extend(Text::styled(
                format!("└{}┘", "─".repeat(inner_width)),
                dim_style,
            ));
        }

        let body_lines = self.body_lines(area.width);
        let last = body_lines.len().saturating_sub(1);
        for (i, line) in body_lines.iter().enumerate() {
            if i == last && self.post.can_expand() {
                let marker = if self.post.expanded { " Less" } else { " More" };
                let line: Text = Line::from(vec![
                    Span::styled(line.clone(), text_style),
                    Span::styled(marker, Style::default().fg(self.theme.accent)),
                ])
                .into();
                text.extend(line);
            } else {
                text.extend(Text::styled(line.clone(), text_style));
            }
        }

        let stats = Line::from(vec![
            Span::styled(
                format!("▲ {}", self.post.upvotes.separate_with_commas()),
                Style::default().fg(self.theme.accent),
            ),
            Span::raw("  "),
            Span::styled(
                format!("▼ {}", self.post.downvotes.separate_with_commas()),
                dim_style,
            ),
            Span::raw("  "),
            Span::styled(
                format!("🗨 {}", self.post.comments.separate_with_commas()),
                dim_style,
            ),
            Span::raw("  "),
            Span::styled(self.post.location.clone(), dim_style),
        ]);
        text.extend::<Text>(stats.into());

        let separator_style = if self.cinematic && self.post.in_view {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(self.theme.border)
        };
        text.extend(Text::styled(
            "─".repeat(usize::from(area.width)),
            separator_style,
        ));

        if self.top_truncated > 0 {
            let skip = usize::from(self.top_truncated).min(text.lines.len());
            let lines: Vec<Line> = Vec::from(&text.lines[skip..]);
            Paragraph::new(lines).render(area, buf);
            return;
        }

        Paragraph::new(text).render(area, buf);
    }
}

/// Sanity helper used by tests: rows the widget would emit.
pub fn rendered_rows(post: &Post, width: u16) -> usize {
    let media = if post.media_badge.is_some() { 4 } else { 0 };
    let cols = usize::from(width.saturating_sub(BODY_INSET_COLS)).max(1);
    let wrapped = wrap_text(post.body_text(), cols);
    let body = if post.expanded {
        wrapped.lines().count().max(1)
    } else {
        wrapped.lines().count().max(1).min(COLLAPSED_BODY_ROWS)
    };
    2 + media + body + 2
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::state::settings::Settings;
    use crate::domain::post::test_posts;

    #[test]
    fn test_rendered_rows_matches_domain_height() {
        let mut post = test_posts(1).remove(0);
        assert_eq!(rendered_rows(&post, 40), usize::from(post.height(40)));

        post.media_badge = Some("1/1".to_string());
        assert_eq!(rendered_rows(&post, 40), usize::from(post.height(40)));

        post.long_body = Some("word ".repeat(80));
        post.expanded = true;
        assert_eq!(rendered_rows(&post, 40), usize::from(post.height(40)));
    }

    #[test]
    fn test_render_into_buffer_smoke() {
        let post = test_posts(1).remove(0);
        let theme = Theme::from_settings(&Settings::default());
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 10));

        PostCard::new(&post, &theme)
            .selected(true)
            .render(Rect::new(0, 0, 40, 10), &mut buf);

        let content: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains('U')); // "User 0"
    }
}
