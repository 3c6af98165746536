use serde::{Deserialize, Serialize};

pub mod feed;
pub mod scroll;
pub mod settings;
pub mod system;

use feed::FeedMsg;
use scroll::ScrollMsg;
use settings::SettingsMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // Feed operations (delegated to FeedState)
    Feed(FeedMsg),

    // Scroll-mode operations (delegated to ScrollState)
    Scroll(ScrollMsg),

    // Settings panel operations (coordinated in update)
    Settings(SettingsMsg),

    // System operations (delegated to SystemState)
    System(SystemMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            Msg::System(SystemMsg::Tick) | Msg::Scroll(ScrollMsg::MomentumTick)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::System(SystemMsg::Tick).is_frequent());
        assert!(Msg::Scroll(ScrollMsg::MomentumTick).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Feed(FeedMsg::SelectDown).is_frequent());
    }

    #[test]
    fn test_msg_serialization() {
        let msg = Msg::Feed(FeedMsg::SelectDown);
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: Msg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}
