use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;
use crate::domain::mode::ScrollMode;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::PostCard;

/// Columns a carousel column reserves between cards.
const CAROUSEL_GUTTER: u16 = 2;

/// The scrollable feed region.
///
/// Interprets per-card [`crate::domain::visual::VisualState`]: opacity picks
/// the text tone, scale insets the card horizontally, translate nudges it by
/// rows, and the cinematic in-view flag switches the separator treatment.
pub struct FeedComponent;

impl FeedComponent {
    pub fn view(state: &AppState, theme: &Theme, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(
            Block::new().style(Style::default().bg(theme.bg)),
            area,
        );

        if state.feed.posts.is_empty() {
            let empty = Paragraph::new("No posts yet — pull to refresh")
                .style(Style::default().fg(theme.dim))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        if state.scroll.active() == ScrollMode::Carousel {
            Self::view_carousel(state, theme, frame, area);
        } else {
            Self::view_vertical(state, theme, frame, area);
        }
    }

    fn view_vertical(state: &AppState, theme: &Theme, frame: &mut Frame<'_>, area: Rect) {
        let rects = state.feed.layouts();
        let offset = state.feed.viewport.offset;
        let cinematic = state.scroll.active() == ScrollMode::Cinematic;

        for (i, post) in state.feed.posts.iter().enumerate() {
            let Some(rect) = rects.get(i).copied() else {
                break;
            };
            let translate = post.visual.map(|v| v.translate).unwrap_or(0.0);
            let scale = post.visual.map(|v| v.scale).unwrap_or(1.0);

            let top = rect.top - offset + translate;
            let bottom = top + rect.height;
            if bottom <= 0.0 || top >= f32::from(area.height) {
                continue;
            }

            let truncated = if top < 0.0 { (-top).round() as u16 } else { 0 };
            let y = area.y + top.max(0.0).round() as u16;
            let avail = area.bottom().saturating_sub(y);
            let height = (rect.height.round() as u16)
                .saturating_sub(truncated)
                .min(avail);
            if height == 0 {
                continue;
            }

            let inset = (((1.0 - scale) * f32::from(area.width)) / 2.0)
                .round()
                .max(0.0) as u16;
            let width = area.width.saturating_sub(inset * 2 + 1); // 1 for scrollbar
            let card_area = Rect::new(area.x + inset, y, width, height);

            let card = PostCard::new(post, theme)
                .selected(state.feed.selected_index == Some(i))
                .cinematic(cinematic)
                .top_truncated(truncated);
            frame.render_widget(card, card_area);
        }

        let content = state.feed.content_height().round() as usize;
        let mut scrollbar_state = ScrollbarState::new(content.saturating_sub(usize::from(area.height)))
            .position(offset.round() as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(theme.border)),
            area,
            &mut scrollbar_state,
        );
    }

    /// Horizontal snap strip: up to three columns starting at the card
    /// nearest the current offset.
    fn view_carousel(state: &AppState, theme: &Theme, frame: &mut Frame<'_>, area: Rect) {
        let rects = state.feed.layouts();
        let offset = state.feed.viewport.offset;
        let start = rects
            .iter()
            .position(|r| r.bottom() > offset)
            .unwrap_or(0);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, 3); 3])
            .split(area);

        for (slot, column) in columns.iter().enumerate() {
            let i = start + slot;
            let Some(post) = state.feed.posts.get(i) else {
                break;
            };
            let card_area = Rect {
                x: column.x + CAROUSEL_GUTTER / 2,
                y: column.y + 1,
                width: column.width.saturating_sub(CAROUSEL_GUTTER),
                height: column.height.saturating_sub(2),
            };
            let card = PostCard::new(post, theme).selected(state.feed.selected_index == Some(i));
            frame.render_widget(card, card_area);
        }
    }
}
