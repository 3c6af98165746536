use serde::{Deserialize, Serialize};

use crate::core::state::system::NotificationVariant;

/// System-level messages (lifecycle, toasts)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
    Tick,

    /// Surface a transient toast.
    Notify {
        message: String,
        variant: NotificationVariant,
    },
    DismissNotification,

    ShowError(String),
}
