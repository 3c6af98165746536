use std::time::Instant;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::{
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::{feed::FEED_CHROME_ROWS, AppState},
    translator::translate_raw_to_domain,
    update::update,
};
use crate::domain::{layout::Viewport, post::generate_batch};
use crate::infrastructure::{
    config::Config,
    tui::{Event, TuiLike},
};
use crate::presentation::components;

/// Cards seeded into the feed at startup (the mockup's initial markup).
pub const INITIAL_POSTS: usize = 6;

/// Drives the Elm core: terminal events in, update cycle, commands out,
/// render once per frame event.
pub struct AppRunner {
    state: AppState,
    executor: CmdExecutor,
    /// Feedback from executed commands (momentum ticks, loaded pages).
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    tui: Box<dyn TuiLike>,
    started: Instant,
}

impl AppRunner {
    pub fn new(config: Config, tui: Box<dyn TuiLike>) -> Result<Self> {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (width, height) = tui.size()?;
        let viewport = Viewport::new(width, height.saturating_sub(FEED_CHROME_ROWS));
        let seed = generate_batch(&mut rand::rng(), 1, INITIAL_POSTS);
        let state = AppState::new_with_config(config, viewport, seed);

        Ok(Self {
            state,
            executor: CmdExecutor::new(msg_tx),
            msg_rx,
            tui,
            started: Instant::now(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main loop: handle TUI events, update state, execute commands,
    /// render.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        loop {
            let Some(event) = self.tui.next().await else {
                // Event source closed (or a test queue ran dry).
                break;
            };

            match event {
                Event::Quit => self.process_raw(RawMsg::Quit)?,
                Event::Tick => self.process_raw(RawMsg::Tick)?,
                Event::Render => self.render()?,
                Event::Resize(w, h) => {
                    self.tui.resize(ratatui::prelude::Rect::new(0, 0, w, h))?;
                    self.process_raw(RawMsg::Resize(w, h))?;
                    self.render()?;
                }
                Event::Key(key) => self.process_raw(RawMsg::Key(key))?,
                Event::Mouse(mouse) => {
                    let at_ms = self.started.elapsed().as_millis() as u64;
                    self.process_raw(RawMsg::Mouse {
                        event: mouse,
                        at_ms,
                    })?;
                }
                Event::Error => self.process_raw(RawMsg::Error("event source error".into()))?,
                Event::Init
                | Event::Closed
                | Event::FocusGained
                | Event::FocusLost
                | Event::Paste(_) => {}
            }

            // Drain command feedback so it lands before the next input.
            while let Ok(msg) = self.msg_rx.try_recv() {
                self.process(msg)?;
            }

            if self.state.system.should_suspend {
                self.tui.suspend()?;
                self.process_raw(RawMsg::Resume)?;
                self.tui.enter()?;
            } else if self.state.system.should_quit {
                break;
            }
        }

        self.tui.exit()
    }

    /// Translate one raw event and run the update cycle for each message.
    pub fn process_raw(&mut self, raw: RawMsg) -> Result<()> {
        let msgs = translate_raw_to_domain(raw, &self.state);
        for msg in msgs {
            self.process(msg)?;
        }
        Ok(())
    }

    fn process(&mut self, msg: Msg) -> Result<()> {
        if !msg.is_frequent() {
            log::debug!("{msg:?}");
        }
        let state = std::mem::take(&mut self.state);
        let (state, cmds) = update(msg, state);
        self.state = state;
        self.executor.execute_commands(cmds)
    }

    fn render(&mut self) -> Result<()> {
        let state = &self.state;
        self.tui.draw(&mut |frame| components::render(frame, state))
    }
}
