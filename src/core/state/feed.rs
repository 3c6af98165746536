pub mod menu;
pub mod pagination;

use menu::MenuState;
use pagination::PaginationState;

use crate::core::cmd::Cmd;
use crate::core::msg::feed::FeedMsg;
use crate::core::state::system::NotificationVariant;
use crate::domain::layout::{self, CardRect, Viewport};
use crate::domain::post::Post;
use crate::domain::visual::{CardSurface, VisualState};

/// Cards appended per completed infinite-scroll load.
pub const POSTS_PER_PAGE: usize = 3;
/// Rows of fixed chrome around the feed (header and status bar).
pub const FEED_CHROME_ROWS: u16 = 5;
/// Simulated network latency for pagination and refresh, ms.
pub const LOAD_DELAY_MS: u64 = 1500;

/// Feed-related state: the cards, the selection, and the window over them.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub selected_index: Option<usize>,
    pub viewport: Viewport,
    /// Blank rows between cards; follows the pending card-gap setting.
    pub card_gap: u16,
    pub pagination: PaginationState,
    pub menu: Option<MenuState>,
}

impl FeedState {
    pub fn new(viewport: Viewport, card_gap: u16) -> Self {
        Self {
            viewport,
            card_gap,
            ..Default::default()
        }
    }

    /// Feed-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FeedMsg) -> Vec<Cmd> {
        match msg {
            FeedMsg::SelectUp => {
                self.select_up();
                self.ensure_selected_visible();
                vec![]
            }
            FeedMsg::SelectDown => {
                self.select_down();
                self.ensure_selected_visible();
                vec![]
            }
            FeedMsg::SelectTop => {
                self.select_top();
                self.ensure_selected_visible();
                vec![]
            }
            FeedMsg::SelectBottom => {
                self.select_bottom();
                self.ensure_selected_visible();
                vec![]
            }
            FeedMsg::Deselect => {
                self.selected_index = None;
                self.menu = None;
                vec![]
            }

            FeedMsg::Upvote => match self.selected_post_mut() {
                Some(post) => {
                    post.upvote();
                    vec![Cmd::Notify {
                        message: "+1".to_string(),
                        variant: NotificationVariant::Success,
                    }]
                }
                None => vec![no_selection_notice()],
            },
            FeedMsg::Downvote => match self.selected_post_mut() {
                Some(post) => {
                    post.downvote();
                    vec![Cmd::Notify {
                        message: "-1".to_string(),
                        variant: NotificationVariant::Danger,
                    }]
                }
                None => vec![no_selection_notice()],
            },
            FeedMsg::ToggleExpand => {
                if let Some(post) = self.selected_post_mut() {
                    post.toggle_expanded();
                }
                vec![]
            }

            FeedMsg::OpenMenu => {
                if self.selected_index.is_some() {
                    self.menu = Some(MenuState::default());
                    vec![]
                } else {
                    vec![no_selection_notice()]
                }
            }
            FeedMsg::CloseMenu => {
                self.menu = None;
                vec![]
            }
            FeedMsg::MenuUp => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.select_up();
                }
                vec![]
            }
            FeedMsg::MenuDown => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.select_down();
                }
                vec![]
            }
            FeedMsg::MenuConfirm => self.confirm_menu(),

            FeedMsg::Refresh => vec![
                Cmd::Notify {
                    message: "Refreshing feed...".to_string(),
                    variant: NotificationVariant::Info,
                },
                Cmd::RefreshFeed {
                    delay_ms: LOAD_DELAY_MS,
                },
            ],
            FeedMsg::Refreshed => vec![Cmd::Notify {
                message: "Feed updated!".to_string(),
                variant: NotificationVariant::Success,
            }],

            FeedMsg::PostsLoaded(posts) => {
                self.posts.extend(posts);
                self.pagination.finish_loading();
                vec![Cmd::Notify {
                    message: "New posts loaded!".to_string(),
                    variant: NotificationVariant::Success,
                }]
            }
        }
    }

    fn confirm_menu(&mut self) -> Vec<Cmd> {
        let Some(menu) = self.menu.take() else {
            return vec![];
        };
        let action = menu.action();
        if action == menu::MenuAction::Delete {
            self.remove_selected();
        }
        let variant = if action.is_danger() {
            NotificationVariant::Danger
        } else {
            NotificationVariant::Success
        };
        vec![Cmd::Notify {
            message: action.message().to_string(),
            variant,
        }]
    }

    // --- selection -------------------------------------------------------

    pub fn selected_post(&self) -> Option<&Post> {
        self.selected_index.and_then(|i| self.posts.get(i))
    }

    pub fn selected_post_mut(&mut self) -> Option<&mut Post> {
        self.selected_index.and_then(|i| self.posts.get_mut(i))
    }

    fn select_up(&mut self) {
        self.selected_index = match self.selected_index {
            _ if self.posts.is_empty() => None,
            Some(i) if i > 1 => Some(i - 1),
            _ => Some(0),
        };
    }

    fn select_down(&mut self) {
        self.selected_index = match self.selected_index {
            _ if self.posts.is_empty() => None,
            Some(i) if i < self.posts.len() - 1 => Some(i + 1),
            Some(_) => Some(self.posts.len() - 1),
            None if self.posts.len() > 1 => Some(1),
            None => Some(0),
        };
    }

    fn select_top(&mut self) {
        self.selected_index = match self.selected_index {
            _ if self.posts.is_empty() => None,
            _ => Some(0),
        };
    }

    fn select_bottom(&mut self) {
        self.selected_index = match self.selected_index {
            _ if self.posts.is_empty() => None,
            _ => Some(self.posts.len() - 1),
        };
    }

    fn remove_selected(&mut self) {
        if let Some(i) = self.selected_index {
            if i < self.posts.len() {
                self.posts.remove(i);
            }
            self.selected_index = if self.posts.is_empty() {
                None
            } else {
                Some(i.min(self.posts.len() - 1))
            };
        }
    }

    // --- geometry --------------------------------------------------------

    pub fn layouts(&self) -> Vec<CardRect> {
        layout::layout_cards(&self.posts, self.viewport.width, self.card_gap)
    }

    pub fn content_height(&self) -> f32 {
        layout::content_height(&self.layouts())
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content_height() - f32::from(self.viewport.height)).max(0.0)
    }

    /// Move the window by `delta` rows. Returns true when the offset moved.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        let before = self.viewport.offset;
        self.viewport.offset = (before + delta).clamp(0.0, self.max_scroll());
        self.viewport.offset != before
    }

    /// Align the offset with the nearest card top (snap-style modes).
    pub fn snap_to_nearest(&mut self) {
        let snapped = layout::nearest_card_top(&self.layouts(), self.viewport.offset);
        self.viewport.offset = snapped.clamp(0.0, self.max_scroll());
    }

    /// Scroll just far enough to bring the selection fully on screen.
    pub fn ensure_selected_visible(&mut self) {
        let Some(i) = self.selected_index else {
            return;
        };
        let Some(rect) = self.layouts().get(i).copied() else {
            return;
        };
        if rect.top < self.viewport.offset {
            self.viewport.offset = rect.top;
        } else if rect.bottom() > self.viewport.bottom() {
            let offset = rect.bottom() - f32::from(self.viewport.height);
            self.viewport.offset = offset.clamp(0.0, self.max_scroll());
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.viewport.offset = self.viewport.offset.clamp(0.0, self.max_scroll());
    }

    pub fn set_card_gap(&mut self, gap: u16) {
        self.card_gap = gap;
        self.viewport.offset = self.viewport.offset.clamp(0.0, self.max_scroll());
    }

    /// Rows left between the window bottom and the end of the content.
    pub fn remaining_rows(&self) -> f32 {
        (self.content_height() - self.viewport.bottom()).max(0.0)
    }
}

impl CardSurface for FeedState {
    fn card_count(&self) -> usize {
        self.posts.len()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn card_rect(&self, index: usize) -> Option<CardRect> {
        self.layouts().get(index).copied()
    }

    fn apply_visual(&mut self, index: usize, visual: VisualState) {
        if let Some(post) = self.posts.get_mut(index) {
            post.visual = Some(visual);
        }
    }

    fn clear_visual(&mut self, index: usize) {
        if let Some(post) = self.posts.get_mut(index) {
            post.visual = None;
        }
    }

    fn set_in_view(&mut self, index: usize, in_view: bool) {
        if let Some(post) = self.posts.get_mut(index) {
            post.in_view = in_view;
        }
    }
}

fn no_selection_notice() -> Cmd {
    Cmd::Notify {
        message: "No post selected".to_string(),
        variant: NotificationVariant::Info,
    }
}
