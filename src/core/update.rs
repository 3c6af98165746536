use crate::core::cmd::Cmd;
use crate::core::msg::{feed::FeedMsg, settings::SettingsMsg, system::SystemMsg, Msg};
use crate::core::state::feed::FEED_CHROME_ROWS;
use crate::core::state::system::NotificationVariant;
use crate::core::state::AppState;

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Scroll messages (delegated to the controller, which owns the feed window)
        Msg::Scroll(scroll_msg) => {
            let commands = state.scroll.update(scroll_msg, &mut state.feed);
            (state, commands)
        }

        // Feed messages (delegated to FeedState, with mode reactions afterwards)
        Msg::Feed(feed_msg) => {
            // Selection moves scroll the window; content edits only reshape it.
            let scrolls = matches!(
                feed_msg,
                FeedMsg::SelectUp | FeedMsg::SelectDown | FeedMsg::SelectTop | FeedMsg::SelectBottom
            );
            let reshapes = matches!(
                feed_msg,
                FeedMsg::PostsLoaded(_) | FeedMsg::MenuConfirm | FeedMsg::ToggleExpand
            );

            let mut commands = state.feed.update(feed_msg);
            if scrolls {
                commands.extend(state.scroll.after_offset_change(&mut state.feed));
            } else if reshapes {
                state.scroll.refresh_effects(&mut state.feed);
            }
            (state, commands)
        }

        // Settings messages (coordinated here: live preview touches feed and scroll)
        Msg::Settings(settings_msg) => {
            let commands = update_settings(settings_msg, &mut state);
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            if let SystemMsg::Resize(width, height) = system_msg {
                state
                    .feed
                    .resize(width, height.saturating_sub(FEED_CHROME_ROWS));
                state.scroll.refresh_effects(&mut state.feed);
            }
            let commands = state.system.update(system_msg);
            (state, commands)
        }
    }
}

fn update_settings(msg: SettingsMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        SettingsMsg::TogglePanel => {
            if state.settings.panel_open {
                close_panel(state)
            } else {
                state.settings.panel_open = true;
                vec![]
            }
        }

        SettingsMsg::ClosePanel => close_panel(state),

        SettingsMsg::FocusNext => {
            state.settings.focused = state.settings.focused.next();
            vec![]
        }

        SettingsMsg::FocusPrev => {
            state.settings.focused = state.settings.focused.prev();
            vec![]
        }

        SettingsMsg::Increase => {
            if state.settings.adjust(true) {
                sync_appearance(state)
            } else {
                vec![]
            }
        }

        SettingsMsg::Decrease => {
            if state.settings.adjust(false) {
                sync_appearance(state)
            } else {
                vec![]
            }
        }

        SettingsMsg::SetScrollMode(mode) => {
            state.settings.pending.mode = mode;
            sync_appearance(state)
        }

        SettingsMsg::SetAccent(accent) => {
            state.settings.pending.accent = accent;
            vec![]
        }

        SettingsMsg::SetBackground(background) => {
            state.settings.pending.background = background;
            vec![]
        }

        SettingsMsg::SetCardGap(gap) => {
            state.settings.pending.card_gap = gap;
            sync_appearance(state)
        }

        SettingsMsg::Apply => {
            state.settings.apply();
            vec![Cmd::Notify {
                message: "Settings applied".to_string(),
                variant: NotificationVariant::Success,
            }]
        }

        SettingsMsg::Revert => {
            state.settings.revert();
            sync_appearance(state)
        }
    }
}

/// Closing without applying discards the preview.
fn close_panel(state: &mut AppState) -> Vec<Cmd> {
    state.settings.panel_open = false;
    if state.settings.has_unapplied_edits() {
        state.settings.revert();
        sync_appearance(state)
    } else {
        vec![]
    }
}

/// Bring feed layout and the active mode in line with the pending settings.
fn sync_appearance(state: &mut AppState) -> Vec<Cmd> {
    let pending = state.settings.pending;
    if state.feed.card_gap != pending.card_gap {
        state.feed.set_card_gap(pending.card_gap);
        state.scroll.refresh_effects(&mut state.feed);
    }
    if state.scroll.active() != pending.mode {
        return state.scroll.activate(pending.mode, &mut state.feed);
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::msg::scroll::ScrollMsg;
    use crate::core::state::settings::{Settings, SettingsField};
    use crate::domain::layout::Viewport;
    use crate::domain::mode::ScrollMode;
    use crate::domain::post::test_posts;

    fn create_test_state() -> AppState {
        AppState::new(Settings::default(), Viewport::new(40, 20), test_posts(8))
    }

    #[test]
    fn test_update_quit() {
        let state = create_test_state();
        let (new_state, cmds) = update(Msg::System(SystemMsg::Quit), state);

        assert!(new_state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_selection_scroll_drives_mode_reaction() {
        let mut state = create_test_state();
        state
            .scroll
            .activate(ScrollMode::Parallax, &mut state.feed);
        let before: Vec<_> = state.feed.posts.iter().map(|p| p.visual).collect();

        let (new_state, _) = update(Msg::Feed(FeedMsg::SelectBottom), state);

        assert!(new_state.feed.viewport.offset > 0.0);
        let after: Vec<_> = new_state.feed.posts.iter().map(|p| p.visual).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let state = create_test_state();
        let (new_state, _) = update(Msg::System(SystemMsg::Resize(100, 45)), state);

        assert_eq!(new_state.feed.viewport.width, 100);
        assert_eq!(
            new_state.feed.viewport.height,
            45 - FEED_CHROME_ROWS
        );
    }

    #[test]
    fn test_settings_preview_activates_pending_mode() {
        let mut state = create_test_state();
        state.settings.panel_open = true;
        state.settings.focused = SettingsField::ScrollStyle;

        let (new_state, _) = update(Msg::Settings(SettingsMsg::Increase), state);

        assert_eq!(new_state.settings.pending.mode, ScrollMode::Smooth);
        assert_eq!(new_state.scroll.active(), ScrollMode::Smooth);
        // Applied is untouched until confirmation.
        assert_eq!(new_state.settings.applied.mode, ScrollMode::Default);
    }

    #[test]
    fn test_settings_apply_confirms_pending() {
        let mut state = create_test_state();
        state.settings.panel_open = true;
        let (state, _) = update(
            Msg::Settings(SettingsMsg::SetScrollMode(ScrollMode::Cinematic)),
            state,
        );
        let (state, cmds) = update(Msg::Settings(SettingsMsg::Apply), state);

        assert_eq!(state.settings.applied.mode, ScrollMode::Cinematic);
        assert!(!state.settings.has_unapplied_edits());
        assert!(matches!(cmds[0], Cmd::Notify { .. }));
    }

    #[test]
    fn test_close_without_apply_reverts_preview() {
        let mut state = create_test_state();
        state.settings.panel_open = true;
        let (state, _) = update(
            Msg::Settings(SettingsMsg::SetScrollMode(ScrollMode::Parallax)),
            state,
        );
        assert_eq!(state.scroll.active(), ScrollMode::Parallax);

        let (state, _) = update(Msg::Settings(SettingsMsg::ClosePanel), state);

        assert!(!state.settings.panel_open);
        assert_eq!(state.settings.pending.mode, ScrollMode::Default);
        assert_eq!(state.scroll.active(), ScrollMode::Default);
        assert!(state.feed.posts.iter().all(|p| p.visual.is_none()));
    }

    #[test]
    fn test_card_gap_preview_reshapes_feed() {
        let mut state = create_test_state();
        state.settings.panel_open = true;
        let before = state.feed.content_height();

        let (state, _) = update(Msg::Settings(SettingsMsg::SetCardGap(3)), state);

        assert_eq!(state.feed.card_gap, 3);
        assert!(state.feed.content_height() > before);
    }

    #[test]
    fn test_momentum_tick_routes_to_controller() {
        let mut state = create_test_state();
        state
            .scroll
            .activate(ScrollMode::Parallax, &mut state.feed);

        let (_, cmds) = update(Msg::Scroll(ScrollMsg::MomentumTick), state);

        assert_eq!(cmds, vec![Cmd::StopMomentum]);
    }
}
