use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::{
    msg::{feed::FeedMsg, scroll::ScrollMsg, settings::SettingsMsg, system::SystemMsg, Msg},
    raw_msg::RawMsg,
    state::AppState,
};
use crate::infrastructure::config::Action;

/// Rows scrolled per mouse-wheel notch.
const WHEEL_SCROLL_ROWS: f32 = 3.0;

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Tick => vec![Msg::System(SystemMsg::Tick)],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse { event, at_ms } => translate_mouse_event(event, at_ms),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Rendering is orchestrated by the runner, not the domain
        RawMsg::Render => vec![],
    }
}

/// Translates keyboard input based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    if state.feed.menu.is_some() {
        translate_menu_keys(key)
    } else if state.settings.panel_open {
        translate_panel_keys(key)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while the post menu is open (not rebindable)
fn translate_menu_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') => {
            vec![Msg::Feed(FeedMsg::CloseMenu)]
        }
        KeyCode::Up | KeyCode::Char('k') => vec![Msg::Feed(FeedMsg::MenuUp)],
        KeyCode::Down | KeyCode::Char('j') => vec![Msg::Feed(FeedMsg::MenuDown)],
        KeyCode::Enter => vec![Msg::Feed(FeedMsg::MenuConfirm)],
        _ => vec![],
    }
}

/// Key bindings while the settings panel is open (not rebindable)
fn translate_panel_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('s') => vec![Msg::Settings(SettingsMsg::ClosePanel)],
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
            vec![Msg::Settings(SettingsMsg::FocusNext)]
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
            vec![Msg::Settings(SettingsMsg::FocusPrev)]
        }
        KeyCode::Left | KeyCode::Char('h') => vec![Msg::Settings(SettingsMsg::Decrease)],
        KeyCode::Right | KeyCode::Char('l') => vec![Msg::Settings(SettingsMsg::Increase)],
        KeyCode::Enter => vec![Msg::Settings(SettingsMsg::Apply)],
        _ => vec![],
    }
}

/// Key bindings in normal navigation mode (flat configured mapping)
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::SelectUp => vec![Msg::Feed(FeedMsg::SelectUp)],
        Action::SelectDown => vec![Msg::Feed(FeedMsg::SelectDown)],
        Action::SelectTop => vec![Msg::Feed(FeedMsg::SelectTop)],
        Action::SelectBottom => vec![Msg::Feed(FeedMsg::SelectBottom)],
        Action::Deselect => vec![Msg::Feed(FeedMsg::Deselect)],
        Action::PageUp => vec![Msg::Scroll(ScrollMsg::PageUp)],
        Action::PageDown => vec![Msg::Scroll(ScrollMsg::PageDown)],
        Action::Upvote => vec![Msg::Feed(FeedMsg::Upvote)],
        Action::Downvote => vec![Msg::Feed(FeedMsg::Downvote)],
        Action::ToggleExpand => vec![Msg::Feed(FeedMsg::ToggleExpand)],
        Action::OpenMenu => vec![Msg::Feed(FeedMsg::OpenMenu)],
        Action::ToggleSettings => vec![Msg::Settings(SettingsMsg::TogglePanel)],
        Action::Refresh => vec![Msg::Feed(FeedMsg::Refresh)],
    }
}

/// Wheel scrolls; left-button drags feed the gesture messages.
fn translate_mouse_event(event: MouseEvent, at_ms: u64) -> Vec<Msg> {
    match event.kind {
        MouseEventKind::ScrollDown => vec![Msg::Scroll(ScrollMsg::ScrollBy(WHEEL_SCROLL_ROWS))],
        MouseEventKind::ScrollUp => vec![Msg::Scroll(ScrollMsg::ScrollBy(-WHEEL_SCROLL_ROWS))],
        MouseEventKind::Down(MouseButton::Left) => vec![Msg::Scroll(ScrollMsg::DragStart {
            row: event.row,
            at_ms,
        })],
        MouseEventKind::Drag(MouseButton::Left) => vec![Msg::Scroll(ScrollMsg::DragMove {
            row: event.row,
            at_ms,
        })],
        MouseEventKind::Up(MouseButton::Left) => vec![Msg::Scroll(ScrollMsg::DragEnd { at_ms })],
        _ => vec![],
    }
}
