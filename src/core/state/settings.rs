use serde::{Deserialize, Serialize};

use crate::domain::mode::ScrollMode;

/// Highest card gap the panel slider allows, rows.
pub const MAX_CARD_GAP: u16 = 3;

/// The accent color swatches offered by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    #[default]
    Indigo,
    Crimson,
    Emerald,
    Amber,
    Violet,
    Cyan,
}

impl Accent {
    pub const ALL: [Accent; 6] = [
        Accent::Indigo,
        Accent::Crimson,
        Accent::Emerald,
        Accent::Amber,
        Accent::Violet,
        Accent::Cyan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Accent::Indigo => "Indigo",
            Accent::Crimson => "Crimson",
            Accent::Emerald => "Emerald",
            Accent::Amber => "Amber",
            Accent::Violet => "Violet",
            Accent::Cyan => "Cyan",
        }
    }

    pub fn next(&self) -> Accent {
        let i = Self::ALL.iter().position(|a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Accent {
        let i = Self::ALL.iter().position(|a| a == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Background styles mirroring the mockup's body classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Background {
    #[default]
    Dark,
    Light,
    Glass,
}

impl Background {
    pub const ALL: [Background; 3] = [Background::Dark, Background::Light, Background::Glass];

    pub fn label(&self) -> &'static str {
        match self {
            Background::Dark => "Dark",
            Background::Light => "Light",
            Background::Glass => "Glass",
        }
    }

    pub fn next(&self) -> Background {
        let i = Self::ALL.iter().position(|b| b == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Background {
        let i = Self::ALL.iter().position(|b| b == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// One snapshot of the user-adjustable appearance options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub accent: Accent,
    pub mode: ScrollMode,
    pub background: Background,
    pub card_gap: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accent: Accent::default(),
            mode: ScrollMode::default(),
            background: Background::default(),
            card_gap: 1,
        }
    }
}

/// The panel field currently focused for editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SettingsField {
    #[default]
    Accent,
    ScrollStyle,
    Background,
    CardGap,
}

impl SettingsField {
    pub const ALL: [SettingsField; 4] = [
        SettingsField::Accent,
        SettingsField::ScrollStyle,
        SettingsField::Background,
        SettingsField::CardGap,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::Accent => "Accent color",
            SettingsField::ScrollStyle => "Scroll style",
            SettingsField::Background => "Background",
            SettingsField::CardGap => "Card gap",
        }
    }

    pub fn next(&self) -> SettingsField {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> SettingsField {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Pending vs applied settings.
///
/// `pending` is what the panel edits and what the renderer shows (live
/// preview); `applied` is the last confirmed snapshot. Outside an editing
/// session the two are equal, so reading `pending` everywhere preserves the
/// applied semantics.
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    pub pending: Settings,
    pub applied: Settings,
    pub panel_open: bool,
    pub focused: SettingsField,
}

impl SettingsState {
    pub fn with_defaults(defaults: Settings) -> Self {
        Self {
            pending: defaults,
            applied: defaults,
            ..Default::default()
        }
    }

    pub fn has_unapplied_edits(&self) -> bool {
        self.pending != self.applied
    }

    /// Adjust the focused field one step. Returns true when pending changed.
    pub fn adjust(&mut self, forward: bool) -> bool {
        let before = self.pending;
        match self.focused {
            SettingsField::Accent => {
                self.pending.accent = if forward {
                    self.pending.accent.next()
                } else {
                    self.pending.accent.prev()
                };
            }
            SettingsField::ScrollStyle => {
                self.pending.mode = if forward {
                    self.pending.mode.next()
                } else {
                    self.pending.mode.prev()
                };
            }
            SettingsField::Background => {
                self.pending.background = if forward {
                    self.pending.background.next()
                } else {
                    self.pending.background.prev()
                };
            }
            SettingsField::CardGap => {
                self.pending.card_gap = if forward {
                    (self.pending.card_gap + 1).min(MAX_CARD_GAP)
                } else {
                    self.pending.card_gap.saturating_sub(1)
                };
            }
        }
        self.pending != before
    }

    pub fn apply(&mut self) {
        self.applied = self.pending;
    }

    pub fn revert(&mut self) {
        self.pending = self.applied;
    }
}
