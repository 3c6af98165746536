pub mod momentum;

use momentum::MomentumTracker;

use crate::core::cmd::Cmd;
use crate::core::msg::scroll::ScrollMsg;
use crate::core::state::feed::{FeedState, LOAD_DELAY_MS, POSTS_PER_PAGE};
use crate::core::state::system::NotificationVariant;
use crate::domain::mode::ScrollMode;
use crate::domain::motion::{
    apply_elastic, apply_parallax, refresh_in_view, INFINITE_MARGIN_ROWS,
};
use crate::domain::visual::CardSurface;

/// Scrolling down past this offset hides the header.
pub const HEADER_HIDE_THRESHOLD: f32 = 3.0;
/// Downward drag rows at the top that arm pull-to-refresh.
pub const PULL_REFRESH_ROWS: f32 = 5.0;
/// Rows kept from the previous page on page-up/page-down.
const PAGE_OVERLAP_ROWS: f32 = 2.0;

/// The scroll-mode controller.
///
/// Owns the single active mode and every piece of runtime state a mode can
/// install (the drag tracker, the decay loop handle, per-card overrides via
/// the surface). All registration and deregistration flows through
/// [`ScrollState::activate`], so stale handler state cannot outlive a switch.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    active: ScrollMode,
    momentum: MomentumTracker,
    /// Anchor row of an in-progress drag, any mode.
    drag_row: Option<f32>,
    /// Start row of a drag that began with the feed at the very top.
    pull_origin: Option<f32>,
    pull_distance: f32,
    header_hidden: bool,
    last_offset: f32,
}

impl ScrollState {
    pub fn active(&self) -> ScrollMode {
        self.active
    }

    pub fn header_hidden(&self) -> bool {
        self.header_hidden
    }

    pub fn is_momentum_decaying(&self) -> bool {
        self.momentum.is_decaying()
    }

    /// Scroll-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: ScrollMsg, feed: &mut FeedState) -> Vec<Cmd> {
        match msg {
            ScrollMsg::Activate(mode) => self.activate(mode, feed),

            ScrollMsg::ScrollBy(delta) => {
                if feed.scroll_by(delta) {
                    self.after_offset_change(feed)
                } else {
                    vec![]
                }
            }

            ScrollMsg::PageDown => {
                let page = (f32::from(feed.viewport.height) - PAGE_OVERLAP_ROWS).max(1.0);
                if feed.scroll_by(page) {
                    self.after_offset_change(feed)
                } else {
                    vec![]
                }
            }

            ScrollMsg::PageUp => {
                let page = (f32::from(feed.viewport.height) - PAGE_OVERLAP_ROWS).max(1.0);
                if feed.scroll_by(-page) {
                    self.after_offset_change(feed)
                } else {
                    vec![]
                }
            }

            ScrollMsg::DragStart { row, at_ms } => {
                self.drag_row = Some(f32::from(row));
                if self.active == ScrollMode::Momentum {
                    self.momentum.begin(f32::from(row), at_ms);
                }
                if feed.viewport.offset == 0.0 {
                    self.pull_origin = Some(f32::from(row));
                    self.pull_distance = 0.0;
                }
                vec![]
            }

            ScrollMsg::DragMove { row, at_ms } => {
                let row = f32::from(row);
                let mut cmds = vec![];
                if let Some(prev) = self.drag_row {
                    // Content follows the finger: dragging up scrolls down.
                    if feed.scroll_by(prev - row) {
                        cmds = self.after_offset_change(feed);
                    }
                }
                self.drag_row = Some(row);
                if self.active == ScrollMode::Momentum {
                    self.momentum.track(row, at_ms);
                }
                if let Some(origin) = self.pull_origin {
                    if feed.viewport.offset == 0.0 {
                        self.pull_distance = (row - origin).max(0.0);
                    } else {
                        self.pull_origin = None;
                        self.pull_distance = 0.0;
                    }
                }
                cmds
            }

            ScrollMsg::DragEnd { at_ms: _ } => {
                self.drag_row = None;
                let mut cmds = vec![];
                if self.active == ScrollMode::Momentum && self.momentum.release() {
                    cmds.push(Cmd::StartMomentum);
                }
                if self.pull_origin.take().is_some()
                    && self.pull_distance >= PULL_REFRESH_ROWS
                    && feed.viewport.offset == 0.0
                {
                    cmds.push(Cmd::Notify {
                        message: "Refreshing feed...".to_string(),
                        variant: NotificationVariant::Info,
                    });
                    cmds.push(Cmd::RefreshFeed {
                        delay_ms: LOAD_DELAY_MS,
                    });
                }
                self.pull_distance = 0.0;
                cmds
            }

            ScrollMsg::MomentumTick => {
                // Owning-mode check: a tick that outlives its mode stops the loop.
                if self.active != ScrollMode::Momentum {
                    self.momentum.stop();
                    return vec![Cmd::StopMomentum];
                }
                match self.momentum.decay_tick() {
                    Some(delta) => {
                        feed.scroll_by(delta);
                        let mut cmds = self.after_offset_change(feed);
                        if !self.momentum.is_decaying() {
                            cmds.push(Cmd::StopMomentum);
                        }
                        cmds
                    }
                    None => vec![Cmd::StopMomentum],
                }
            }
        }
    }

    /// Switch to `mode`: teardown first, always, then install.
    ///
    /// Invoking this twice with the same mode is idempotent; exactly one
    /// handler set is live afterwards either way.
    pub fn activate(&mut self, mode: ScrollMode, feed: &mut FeedState) -> Vec<Cmd> {
        let cmds = self.teardown(feed);
        self.active = mode;
        self.install(feed);
        cmds
    }

    /// Undo everything the active mode may have installed.
    fn teardown(&mut self, feed: &mut FeedState) -> Vec<Cmd> {
        feed.clear_overrides();
        self.drag_row = None;
        self.pull_origin = None;
        self.pull_distance = 0.0;
        let mut cmds = vec![];
        if self.active == ScrollMode::Momentum {
            // The decay task may still be scheduled; cancel it explicitly.
            self.momentum.stop();
            cmds.push(Cmd::StopMomentum);
        }
        cmds
    }

    fn install(&mut self, feed: &mut FeedState) {
        if feed.posts.is_empty() || feed.viewport.is_degenerate() {
            // Nothing to animate; the mode switch itself still happened.
            return;
        }
        if self.active.snaps() {
            feed.snap_to_nearest();
        }
        self.refresh_effects(feed);
    }

    /// Recompute the active mode's per-card effects (no pagination check).
    /// Called after content or layout changes.
    pub fn refresh_effects(&self, feed: &mut FeedState) {
        match self.active {
            ScrollMode::Parallax => apply_parallax(feed),
            ScrollMode::Elastic => apply_elastic(feed),
            ScrollMode::Cinematic => refresh_in_view(feed),
            _ => {}
        }
    }

    /// Everything that reacts to the offset actually moving.
    pub fn after_offset_change(&mut self, feed: &mut FeedState) -> Vec<Cmd> {
        if self.active.snaps() {
            feed.snap_to_nearest();
        }
        self.refresh_effects(feed);

        let mut cmds = vec![];
        if self.active == ScrollMode::Infinite
            && !feed.pagination.is_loading()
            && feed.remaining_rows() <= INFINITE_MARGIN_ROWS
        {
            let page = feed.pagination.start_loading();
            cmds.push(Cmd::Notify {
                message: "Loading more posts...".to_string(),
                variant: NotificationVariant::Info,
            });
            cmds.push(Cmd::LoadPosts {
                page,
                count: POSTS_PER_PAGE,
                delay_ms: LOAD_DELAY_MS,
            });
        }

        let offset = feed.viewport.offset;
        self.header_hidden = offset > self.last_offset && offset > HEADER_HIDE_THRESHOLD;
        self.last_offset = offset;

        cmds
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::layout::Viewport;
    use crate::domain::post::test_posts;

    fn feed_with(count: usize) -> FeedState {
        let mut feed = FeedState::new(Viewport::new(40, 20), 1);
        feed.posts = test_posts(count);
        feed
    }

    fn fling(scroll: &mut ScrollState, feed: &mut FeedState) -> Vec<Cmd> {
        feed.viewport.offset = 30.0;
        scroll.update(ScrollMsg::DragStart { row: 30, at_ms: 0 }, feed);
        scroll.update(ScrollMsg::DragMove { row: 10, at_ms: 10 }, feed);
        scroll.update(ScrollMsg::DragEnd { at_ms: 12 }, feed)
    }

    #[test]
    fn test_activate_parallax_applies_overrides() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(5);

        scroll.activate(ScrollMode::Parallax, &mut feed);

        assert_eq!(scroll.active(), ScrollMode::Parallax);
        assert!(feed.posts.iter().all(|p| p.visual.is_some()));
    }

    #[test]
    fn test_switch_clears_previous_mode_overrides() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(5);
        scroll.activate(ScrollMode::Parallax, &mut feed);

        scroll.activate(ScrollMode::Snap, &mut feed);

        assert!(feed.posts.iter().all(|p| p.visual.is_none()));
        assert!(feed.posts.iter().all(|p| !p.in_view));
    }

    #[test]
    fn test_switch_from_momentum_stops_decay_task() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(10);
        scroll.activate(ScrollMode::Momentum, &mut feed);
        fling(&mut scroll, &mut feed);
        assert!(scroll.is_momentum_decaying());

        let cmds = scroll.activate(ScrollMode::Default, &mut feed);

        assert!(cmds.contains(&Cmd::StopMomentum));
        assert!(!scroll.is_momentum_decaying());
    }

    #[test]
    fn test_reactivate_same_mode_is_idempotent() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(5);

        scroll.activate(ScrollMode::Cinematic, &mut feed);
        let first: Vec<bool> = feed.posts.iter().map(|p| p.in_view).collect();
        scroll.activate(ScrollMode::Cinematic, &mut feed);
        let second: Vec<bool> = feed.posts.iter().map(|p| p.in_view).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_activate_on_empty_feed_is_noop() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(0);

        let cmds = scroll.activate(ScrollMode::Parallax, &mut feed);

        assert_eq!(scroll.active(), ScrollMode::Parallax);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_momentum_fling_starts_decay() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(10);
        scroll.activate(ScrollMode::Momentum, &mut feed);

        let cmds = fling(&mut scroll, &mut feed);

        assert!(cmds.contains(&Cmd::StartMomentum));
        assert!(scroll.is_momentum_decaying());
    }

    #[test]
    fn test_momentum_tick_in_other_mode_stops_loop() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(10);
        scroll.activate(ScrollMode::Parallax, &mut feed);

        let cmds = scroll.update(ScrollMsg::MomentumTick, &mut feed);

        assert_eq!(cmds, vec![Cmd::StopMomentum]);
    }

    #[test]
    fn test_momentum_ticks_decay_to_stop() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(30);
        scroll.activate(ScrollMode::Momentum, &mut feed);
        fling(&mut scroll, &mut feed);

        let mut ticks = 0;
        loop {
            let cmds = scroll.update(ScrollMsg::MomentumTick, &mut feed);
            ticks += 1;
            assert!(ticks < 1000, "decay must terminate");
            if cmds.contains(&Cmd::StopMomentum) {
                break;
            }
        }
        assert!(!scroll.is_momentum_decaying());
    }

    #[test]
    fn test_drag_scrolls_in_any_mode() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(10);
        scroll.activate(ScrollMode::Default, &mut feed);
        feed.viewport.offset = 5.0;

        scroll.update(ScrollMsg::DragStart { row: 20, at_ms: 0 }, &mut feed);
        scroll.update(ScrollMsg::DragMove { row: 15, at_ms: 16 }, &mut feed);

        assert_eq!(feed.viewport.offset, 10.0);
        // But releasing never flings outside momentum mode.
        let cmds = scroll.update(ScrollMsg::DragEnd { at_ms: 20 }, &mut feed);
        assert!(!cmds.contains(&Cmd::StartMomentum));
    }

    #[test]
    fn test_snap_mode_aligns_to_card_tops() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(10);
        scroll.activate(ScrollMode::Snap, &mut feed);

        scroll.update(ScrollMsg::ScrollBy(7.3), &mut feed);

        let tops: Vec<f32> = feed.layouts().iter().map(|r| r.top).collect();
        assert!(tops.contains(&feed.viewport.offset));
    }

    #[test]
    fn test_infinite_triggers_once_near_bottom() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(6);
        scroll.activate(ScrollMode::Infinite, &mut feed);

        let cmds = scroll.update(ScrollMsg::ScrollBy(feed.max_scroll()), &mut feed);
        assert!(cmds
            .iter()
            .any(|cmd| matches!(cmd, Cmd::LoadPosts { page: 2, .. })));
        assert!(feed.pagination.is_loading());

        // Re-triggering while busy is a no-op.
        feed.viewport.offset = 0.0;
        let cmds = scroll.update(ScrollMsg::ScrollBy(feed.max_scroll()), &mut feed);
        assert!(!cmds.iter().any(|cmd| matches!(cmd, Cmd::LoadPosts { .. })));
    }

    #[test]
    fn test_header_hides_scrolling_down_shows_scrolling_up() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(20);
        scroll.activate(ScrollMode::Default, &mut feed);

        scroll.update(ScrollMsg::ScrollBy(10.0), &mut feed);
        assert!(scroll.header_hidden());

        scroll.update(ScrollMsg::ScrollBy(-2.0), &mut feed);
        assert!(!scroll.header_hidden());
    }

    #[test]
    fn test_pull_to_refresh_at_top() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(10);
        scroll.activate(ScrollMode::Default, &mut feed);

        scroll.update(ScrollMsg::DragStart { row: 5, at_ms: 0 }, &mut feed);
        scroll.update(ScrollMsg::DragMove { row: 12, at_ms: 40 }, &mut feed);
        let cmds = scroll.update(ScrollMsg::DragEnd { at_ms: 50 }, &mut feed);

        assert!(cmds.iter().any(|c| matches!(c, Cmd::RefreshFeed { .. })));
    }

    #[test]
    fn test_short_pull_does_not_refresh() {
        let mut scroll = ScrollState::default();
        let mut feed = feed_with(10);
        scroll.activate(ScrollMode::Default, &mut feed);

        scroll.update(ScrollMsg::DragStart { row: 5, at_ms: 0 }, &mut feed);
        scroll.update(ScrollMsg::DragMove { row: 7, at_ms: 40 }, &mut feed);
        let cmds = scroll.update(ScrollMsg::DragEnd { at_ms: 50 }, &mut feed);

        assert!(!cmds.iter().any(|c| matches!(c, Cmd::RefreshFeed { .. })));
    }
}
