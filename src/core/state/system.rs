use serde::{Deserialize, Serialize};

use crate::core::{cmd::Cmd, msg::system::SystemMsg};

/// Ticks a toast stays on screen (~3s at the default 4Hz tick rate).
pub const NOTIFICATION_TICKS: u64 = 12;

/// Styling variant for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NotificationVariant {
    #[default]
    Info,
    Success,
    Danger,
}

/// A transient toast surfaced above the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub variant: NotificationVariant,
    shown_at: u64,
}

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub notification: Option<Notification>,
    pub ticks: u64,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            // Viewport bookkeeping happens in the central update; nothing here.
            SystemMsg::Resize(_, _) => vec![],

            SystemMsg::Tick => {
                self.ticks += 1;
                let expired = self
                    .notification
                    .as_ref()
                    .is_some_and(|n| self.ticks.saturating_sub(n.shown_at) >= NOTIFICATION_TICKS);
                if expired {
                    self.notification = None;
                }
                vec![]
            }

            SystemMsg::Notify { message, variant } => {
                self.notification = Some(Notification {
                    message,
                    variant,
                    shown_at: self.ticks,
                });
                vec![]
            }

            SystemMsg::DismissNotification => {
                self.notification = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.notification = Some(Notification {
                    message: format!("Error: {error}"),
                    variant: NotificationVariant::Danger,
                    shown_at: self.ticks,
                });
                vec![]
            }
        }
    }
}
