use ratatui::{prelude::*, widgets::*};

use crate::core::state::feed::menu::{MenuAction, MenuState};
use crate::presentation::theme::Theme;

/// Overlay menu for the selected post.
pub struct PostMenu<'a> {
    menu: &'a MenuState,
    theme: &'a Theme,
}

impl<'a> PostMenu<'a> {
    pub fn new(menu: &'a MenuState, theme: &'a Theme) -> Self {
        Self { menu, theme }
    }

    /// Rows the overlay needs, borders included.
    pub fn height() -> u16 {
        MenuAction::ALL.len() as u16 + 2
    }

    pub fn width() -> u16 {
        24
    }
}

impl Widget for PostMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let items: Vec<ListItem> = MenuAction::ALL
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let mut style = if action.is_danger() {
                    Style::default().fg(Color::Rgb(255, 99, 92))
                } else {
                    Style::default().fg(self.theme.fg)
                };
                if i == self.menu.selected() {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                ListItem::new(format!(" {} ", action.label())).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::bordered()
                .title(" Post ")
                .border_style(Style::default().fg(self.theme.border))
                .style(Style::default().bg(self.theme.panel_bg)),
        );

        Widget::render(list, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::settings::Settings;

    #[test]
    fn test_renders_all_actions() {
        let menu = MenuState::default();
        let theme = Theme::from_settings(&Settings::default());
        let area = Rect::new(0, 0, PostMenu::width(), PostMenu::height());
        let mut buf = Buffer::empty(area);

        PostMenu::new(&menu, &theme).render(area, &mut buf);

        let content: String = buf.content.iter().map(|c| c.symbol()).collect();
        for action in MenuAction::ALL {
            let first_word = action.label().split(' ').next().unwrap_or_default();
            assert!(content.contains(first_word), "missing {first_word}");
        }
    }
}
