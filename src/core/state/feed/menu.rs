//! The per-post overflow menu.

use serde::{Deserialize, Serialize};

/// Actions offered by the post menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    Share,
    Save,
    CopyLink,
    Report,
    Delete,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::Share,
        MenuAction::Save,
        MenuAction::CopyLink,
        MenuAction::Report,
        MenuAction::Delete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Share => "Share",
            MenuAction::Save => "Save Post",
            MenuAction::CopyLink => "Copy Link",
            MenuAction::Report => "Report",
            MenuAction::Delete => "Delete",
        }
    }

    /// Toast shown when the action runs.
    pub fn message(&self) -> &'static str {
        match self {
            MenuAction::Share => "Share options opened",
            MenuAction::Save => "Post saved successfully!",
            MenuAction::CopyLink => "Link copied to clipboard!",
            MenuAction::Report => "Post reported",
            MenuAction::Delete => "Post deleted",
        }
    }

    pub fn is_danger(&self) -> bool {
        matches!(self, MenuAction::Delete)
    }
}

/// Open-menu state: which entry is highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn action(&self) -> MenuAction {
        MenuAction::ALL[self.selected]
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        self.selected = (self.selected + 1).min(MenuAction::ALL.len() - 1);
    }
}
