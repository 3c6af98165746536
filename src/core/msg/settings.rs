use serde::{Deserialize, Serialize};

use crate::core::state::settings::{Accent, Background};
use crate::domain::mode::ScrollMode;

/// Settings panel messages (live preview edits, apply/revert)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettingsMsg {
    TogglePanel,
    ClosePanel,

    // Panel navigation
    FocusNext,
    FocusPrev,

    // Adjust the focused field (live preview)
    Increase,
    Decrease,

    // Direct edits (also live preview)
    SetScrollMode(ScrollMode),
    SetAccent(Accent),
    SetBackground(Background),
    SetCardGap(u16),

    /// Copy pending into applied.
    Apply,
    /// Discard pending edits, back to applied.
    Revert,
}
