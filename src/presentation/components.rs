//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::PostMenu;

pub mod feed;
pub mod header;
pub mod settings_panel;
pub mod status_bar;

pub use feed::FeedComponent;
pub use header::HeaderComponent;
pub use settings_panel::SettingsPanel;
pub use status_bar::StatusBarComponent;

/// Rows reserved for the header.
pub const HEADER_ROWS: u16 = 3;
/// Rows reserved for the status bar.
pub const STATUS_ROWS: u16 = 2;

/// Render the whole screen from the current state.
///
/// This is the main rendering entry point that delegates to individual
/// components; overlays (settings panel, post menu) come last.
pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::from_settings(&state.settings.pending);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(0),
            Constraint::Length(STATUS_ROWS),
        ])
        .split(area);

    HeaderComponent::view(state, &theme, frame, layout[0]);
    FeedComponent::view(state, &theme, frame, layout[1]);
    StatusBarComponent::view(state, &theme, frame, layout[2]);

    if state.settings.panel_open {
        let width = 32.min(layout[1].width);
        let panel = Rect {
            x: layout[1].right().saturating_sub(width),
            y: layout[1].y,
            width,
            height: layout[1].height,
        };
        SettingsPanel::view(state, &theme, frame, panel);
    }

    if let Some(menu) = &state.feed.menu {
        let width = PostMenu::width().min(layout[1].width);
        let height = PostMenu::height().min(layout[1].height);
        let overlay = Rect {
            x: layout[1].x + (layout[1].width.saturating_sub(width)) / 2,
            y: layout[1].y + 1,
            width,
            height,
        };
        frame.render_widget(PostMenu::new(menu, &theme), overlay);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::core::msg::feed::FeedMsg;
    use crate::core::state::settings::Settings;
    use crate::domain::layout::Viewport;
    use crate::domain::post::test_posts;

    fn render_to_string(state: &AppState) -> String {
        let backend = TestBackend::new(60, 30);
        let mut term = Terminal::new(backend).unwrap();
        term.draw(|frame| render(frame, state)).unwrap();
        term.backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_smoke_with_posts() {
        let state = AppState::new(Settings::default(), Viewport::new(60, 25), test_posts(4));
        let content = render_to_string(&state);
        assert!(content.contains("User 0"));
    }

    #[test]
    fn test_render_settings_panel_overlay() {
        let mut state = AppState::new(Settings::default(), Viewport::new(60, 25), test_posts(4));
        state.settings.panel_open = true;
        let content = render_to_string(&state);
        assert!(content.contains("Customize"));
    }

    #[test]
    fn test_render_menu_overlay() {
        let mut state = AppState::new(Settings::default(), Viewport::new(60, 25), test_posts(4));
        state.feed.selected_index = Some(0);
        state.feed.update(FeedMsg::OpenMenu);
        let content = render_to_string(&state);
        assert!(content.contains("Copy Link"));
    }

    #[test]
    fn test_render_empty_feed() {
        let state = AppState::new(Settings::default(), Viewport::new(60, 25), vec![]);
        let content = render_to_string(&state);
        assert!(content.contains("No posts yet"));
    }
}
