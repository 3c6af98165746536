use serde::{Deserialize, Serialize};

use crate::domain::post::Post;

/// Feed-related messages (selection, card interactions, pagination results)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedMsg {
    // Selection / navigation
    SelectUp,
    SelectDown,
    SelectTop,
    SelectBottom,
    Deselect,

    // Card interactions on the selection
    Upvote,
    Downvote,
    ToggleExpand,

    // Post menu on the selection
    OpenMenu,
    CloseMenu,
    MenuUp,
    MenuDown,
    MenuConfirm,

    // Pagination / refresh flow
    Refresh,
    Refreshed,
    PostsLoaded(Vec<Post>),
}
