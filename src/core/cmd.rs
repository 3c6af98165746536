use serde::{Deserialize, Serialize};

use crate::core::state::system::NotificationVariant;

/// Elm-like command definitions
/// Represents side effects executed outside the pure update cycle: the
/// momentum decay task, simulated network latency, and toast routing. Every
/// command feeds its outcome back into the loop as a message, never by
/// touching state directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cmd {
    /// Spawn the cancellable decay repeat task.
    StartMomentum,
    /// Cancel the decay repeat task (threshold reached or mode torn down).
    StopMomentum,

    /// Simulate fetching one page of posts after `delay_ms`.
    LoadPosts {
        page: u32,
        count: usize,
        delay_ms: u64,
    },
    /// Simulate a feed refresh round-trip.
    RefreshFeed { delay_ms: u64 },

    /// Surface a toast; fire-and-forget.
    Notify {
        message: String,
        variant: NotificationVariant,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command spawns work that outlives the current update
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::StartMomentum | Cmd::LoadPosts { .. } | Cmd::RefreshFeed { .. } => true,

            Cmd::StopMomentum | Cmd::Notify { .. } | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(Cmd::is_async),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cmd_batch_empty() {
        let cmd = Cmd::batch(vec![]);
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn test_cmd_batch_single() {
        let original_cmd = Cmd::StopMomentum;
        let cmd = Cmd::batch(vec![original_cmd.clone()]);
        assert_eq!(cmd, original_cmd);
    }

    #[test]
    fn test_cmd_batch_multiple() {
        // Batch should wrap when there are 2+ commands
        let cmds = vec![Cmd::StartMomentum, Cmd::StopMomentum];
        let batch_cmd = Cmd::batch(cmds.clone());
        assert_eq!(batch_cmd, Cmd::Batch(cmds));
    }

    #[test]
    fn test_cmd_is_async() {
        assert!(Cmd::StartMomentum.is_async());
        assert!(Cmd::LoadPosts {
            page: 2,
            count: 3,
            delay_ms: 1500
        }
        .is_async());
        assert!(!Cmd::StopMomentum.is_async());
        assert!(!Cmd::Notify {
            message: "test".to_string(),
            variant: NotificationVariant::Info
        }
        .is_async());
    }

    #[test]
    fn test_cmd_batch_is_async() {
        let sync_batch = Cmd::Batch(vec![Cmd::StopMomentum]);
        assert!(!sync_batch.is_async());

        let async_batch = Cmd::Batch(vec![Cmd::StopMomentum, Cmd::RefreshFeed { delay_ms: 10 }]);
        assert!(async_batch.is_async());
    }

    #[test]
    fn test_cmd_serialization() {
        let cmd = Cmd::LoadPosts {
            page: 3,
            count: 3,
            delay_ms: 1500,
        };

        let serialized = serde_json::to_string(&cmd).unwrap();
        let deserialized: Cmd = serde_json::from_str(&serialized).unwrap();
        assert_eq!(cmd, deserialized);
    }
}
