use ratatui::style::{Color, Modifier, Style};

use crate::core::state::settings::{Accent, Background, Settings};
use crate::core::state::system::NotificationVariant;

/// Palette derived from the pending settings (live preview).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub accent: Color,
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub faint: Color,
    pub border: Color,
    pub panel_bg: Color,
}

impl Theme {
    pub fn from_settings(settings: &Settings) -> Self {
        let accent = accent_color(settings.accent);
        match settings.background {
            Background::Dark => Self {
                accent,
                bg: Color::Rgb(16, 16, 24),
                fg: Color::Rgb(228, 228, 235),
                dim: Color::Rgb(140, 140, 155),
                faint: Color::Rgb(80, 80, 95),
                border: Color::Rgb(55, 55, 70),
                panel_bg: Color::Rgb(26, 26, 38),
            },
            Background::Light => Self {
                accent,
                bg: Color::Rgb(245, 246, 248),
                fg: Color::Rgb(32, 34, 42),
                dim: Color::Rgb(110, 115, 130),
                faint: Color::Rgb(175, 180, 192),
                border: Color::Rgb(205, 208, 216),
                panel_bg: Color::Rgb(233, 235, 240),
            },
            Background::Glass => Self {
                accent,
                bg: Color::Rgb(22, 26, 38),
                fg: Color::Rgb(222, 228, 240),
                dim: Color::Rgb(150, 158, 178),
                faint: Color::Rgb(92, 100, 122),
                border: Color::Rgb(86, 96, 124),
                panel_bg: Color::Rgb(32, 38, 56),
            },
        }
    }

    /// Text style for a card at the given computed opacity.
    pub fn opacity_style(&self, opacity: f32) -> Style {
        let fg = if opacity >= 0.8 {
            self.fg
        } else if opacity >= 0.55 {
            self.dim
        } else {
            self.faint
        };
        Style::default().fg(fg)
    }

    pub fn notification_style(&self, variant: NotificationVariant) -> Style {
        let fg = match variant {
            NotificationVariant::Info => self.fg,
            NotificationVariant::Success => Color::Rgb(0, 184, 148),
            NotificationVariant::Danger => Color::Rgb(255, 99, 92),
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }
}

fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Indigo => Color::Rgb(108, 92, 231),
        Accent::Crimson => Color::Rgb(214, 48, 49),
        Accent::Emerald => Color::Rgb(0, 184, 148),
        Accent::Amber => Color::Rgb(253, 203, 110),
        Accent::Violet => Color::Rgb(162, 155, 254),
        Accent::Cyan => Color::Rgb(0, 206, 201),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_backgrounds_have_distinct_palettes() {
        let dark = Theme::from_settings(&Settings {
            background: Background::Dark,
            ..Default::default()
        });
        let light = Theme::from_settings(&Settings {
            background: Background::Light,
            ..Default::default()
        });
        let glass = Theme::from_settings(&Settings {
            background: Background::Glass,
            ..Default::default()
        });

        assert_ne!(dark.bg, light.bg);
        assert_ne!(dark.bg, glass.bg);
        assert_ne!(light.bg, glass.bg);
    }

    #[test]
    fn test_accent_follows_setting() {
        let crimson = Theme::from_settings(&Settings {
            accent: Accent::Crimson,
            ..Default::default()
        });
        assert_eq!(crimson.accent, Color::Rgb(214, 48, 49));
    }

    #[test]
    fn test_opacity_buckets() {
        let theme = Theme::from_settings(&Settings::default());
        assert_eq!(theme.opacity_style(1.0).fg, Some(theme.fg));
        assert_eq!(theme.opacity_style(0.6).fg, Some(theme.dim));
        assert_eq!(theme.opacity_style(0.4).fg, Some(theme.faint));
    }
}
