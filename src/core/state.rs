pub mod feed;
pub mod scroll;
pub mod settings;
pub mod system;

use feed::FeedState;
use scroll::ScrollState;
use settings::{Settings, SettingsState};
use system::SystemState;

use crate::domain::layout::Viewport;
use crate::domain::post::Post;
use crate::infrastructure::config::Config;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub feed: FeedState,
    pub scroll: ScrollState,
    pub settings: SettingsState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds the loaded keybindings and startup defaults
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
}

impl AppState {
    /// Build the startup state: configured defaults, seeded cards, and the
    /// configured scroll mode already active.
    pub fn new(defaults: Settings, viewport: Viewport, seed_posts: Vec<Post>) -> Self {
        let mut state = Self {
            feed: FeedState::new(viewport, defaults.card_gap),
            settings: SettingsState::with_defaults(defaults),
            ..Default::default()
        };
        state.feed.posts = seed_posts;
        state.scroll.activate(defaults.mode, &mut state.feed);
        state
    }

    /// Like [`AppState::new`], carrying the full config for keybinding lookup.
    pub fn new_with_config(config: Config, viewport: Viewport, seed_posts: Vec<Post>) -> Self {
        let mut state = Self::new(config.settings, viewport, seed_posts);
        state.config = ConfigState { config };
        state
    }

    pub fn feed_len(&self) -> usize {
        self.feed.posts.len()
    }

    pub fn feed_is_empty(&self) -> bool {
        self.feed.posts.is_empty()
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.feed.selected_post()
    }
}
