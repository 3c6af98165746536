use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::core::cmd::Cmd;
use crate::core::msg::{feed::FeedMsg, scroll::ScrollMsg, system::SystemMsg, Msg};
use crate::domain::motion::MOMENTUM_FRAME_MS;
use crate::domain::post::generate_batch;

/// Executes commands produced by the update cycle.
///
/// Side effects never mutate state: every outcome is fed back into the loop
/// as a message. The momentum repeat task is the one long-lived effect and is
/// held behind a cancellation token so teardown can stop it mid-flight;
/// pagination sleeps are deliberately not cancellable (completion only
/// appends content and clears the busy flag).
pub struct CmdExecutor {
    msg_sender: UnboundedSender<Msg>,
    momentum_task: Option<CancellationToken>,
}

impl CmdExecutor {
    pub fn new(msg_sender: UnboundedSender<Msg>) -> Self {
        Self {
            msg_sender,
            momentum_task: None,
        }
    }

    /// Whether a decay repeat task is currently scheduled.
    pub fn has_live_momentum_task(&self) -> bool {
        self.momentum_task.is_some()
    }

    /// Execute a single command
    pub fn execute_command(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::StartMomentum => self.start_momentum(),

            Cmd::StopMomentum => self.stop_momentum(),

            Cmd::LoadPosts {
                page,
                count,
                delay_ms,
            } => {
                let tx = self.msg_sender.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    let posts = generate_batch(&mut rand::rng(), page, count);
                    let _ = tx.send(Msg::Feed(FeedMsg::PostsLoaded(posts)));
                });
            }

            Cmd::RefreshFeed { delay_ms } => {
                let tx = self.msg_sender.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    let _ = tx.send(Msg::Feed(FeedMsg::Refreshed));
                });
            }

            Cmd::Notify { message, variant } => {
                self.msg_sender
                    .send(Msg::System(SystemMsg::Notify { message, variant }))?;
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&mut self, commands: Vec<Cmd>) -> Result<()> {
        for cmd in commands {
            self.execute_command(cmd)?;
        }
        Ok(())
    }

    fn start_momentum(&mut self) {
        // Replace any live task so re-activation never doubles the tick rate.
        self.stop_momentum();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.msg_sender.clone();
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_millis(MOMENTUM_FRAME_MS as u64));
            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(Msg::Scroll(ScrollMsg::MomentumTick)).is_err() {
                            break;
                        }
                    }
                }
            }
        });
        self.momentum_task = Some(token);
    }

    fn stop_momentum(&mut self) {
        if let Some(token) = self.momentum_task.take() {
            token.cancel();
        }
    }
}

impl Drop for CmdExecutor {
    fn drop(&mut self) {
        self.stop_momentum();
    }
}
