use serde::{Deserialize, Serialize};

use crate::domain::mode::ScrollMode;

/// Scroll-mode controller messages
///
/// Drag messages carry milliseconds since app start; the velocity estimate
/// needs sample timing and the update function stays pure by receiving it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScrollMsg {
    /// Tear down the active mode and install `0`.
    Activate(ScrollMode),

    /// Direct scrolling (keys, wheel), in rows.
    ScrollBy(f32),
    PageUp,
    PageDown,

    // Drag gesture samples (momentum input, pull-to-refresh)
    DragStart { row: u16, at_ms: u64 },
    DragMove { row: u16, at_ms: u64 },
    DragEnd { at_ms: u64 },

    /// One frame of the decay loop, sent by the momentum task.
    MomentumTick,
}
