//! Session worker that owns the authoritative [`StateStore`].
//!
//! Receives commands from [`crate::RuntimeHandle`], executes them through
//! [`GameEngine`], drives the reveal ticker from the returned timer
//! directive, and publishes every outcome to the [`EventBus`].
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, trace, warn};

use game_core::{
    Command as GameCommand, Disposition, GameEngine, GameError, GameState, StateStore,
    TimerDirective,
};

use super::ticker::RevealTicker;
use crate::api::{ExecutionReport, Result};
use crate::events::{DialogueEvent, Event, EventBus, GameStateEvent};
use crate::oracle::OracleBundle;

/// Commands that can be sent to the session worker
pub enum Command {
    /// Execute a game command and reply with the outcome.
    Execute {
        command: GameCommand,
        reply: oneshot::Sender<Result<ExecutionReport>>,
    },
    /// Reveal one more character; sent by the ticker, no reply.
    RevealTick,
    /// Query the current snapshot (read-only).
    QueryState {
        reply: oneshot::Sender<Arc<GameState>>,
    },
    /// Stop processing commands.
    Shutdown,
}

/// Background task that processes gameplay commands one at a time.
pub struct SessionWorker {
    store: StateStore,
    oracles: OracleBundle,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    ticker: Option<RevealTicker>,
}

impl SessionWorker {
    /// Creates a new session worker. Without a ticker, reveals only advance
    /// through explicit tick or skip commands.
    pub fn new(
        store: StateStore,
        oracles: OracleBundle,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        ticker: Option<RevealTicker>,
    ) -> Self {
        info!(
            seed = store.current().game_seed,
            auto_reveal = ticker.is_some(),
            "SessionWorker initialized"
        );

        Self {
            store,
            oracles,
            command_rx,
            event_bus,
            ticker,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    if !self.handle_command(cmd) {
                        break;
                    }
                }
                else => break,
            }
        }

        if let Some(ticker) = self.ticker.as_mut() {
            ticker.stop();
        }
        info!(version = self.store.version(), "SessionWorker stopped");
    }

    /// Returns `false` once the worker should stop.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Execute { command, reply } => {
                let result = self.execute(command);
                if reply.send(result).is_err() {
                    debug!("Execute reply channel closed (caller dropped)");
                }
            }
            Command::RevealTick => {
                if let Err(err) = self.execute(GameCommand::DialogueTick) {
                    warn!(error = %err, "reveal tick failed");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.store.snapshot()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => {
                debug!("Shutdown requested");
                return false;
            }
        }
        true
    }

    fn execute(&mut self, command: GameCommand) -> Result<ExecutionReport> {
        let env = self.oracles.as_game_env();
        let result = GameEngine::new(&mut self.store).execute(&env, &command);

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(
                    %command,
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    error = %err,
                    "command failed"
                );
                self.event_bus
                    .publish(Event::GameState(GameStateEvent::CommandFailed {
                        command,
                        code: err.error_code().to_string(),
                        error: err.to_string(),
                    }));
                return Err(err.into());
            }
        };

        match outcome.disposition {
            Disposition::Applied { version } => {
                let phase = self.store.current().dialogue.phase;
                if command == GameCommand::DialogueTick {
                    trace!(version, %phase, "tick applied");
                } else {
                    debug!(%command, version, %phase, "command applied");
                }
                self.event_bus
                    .publish(Event::GameState(GameStateEvent::StateReplaced {
                        version,
                        command,
                        phase,
                    }));
            }
            Disposition::Ignored => {
                if command == GameCommand::DialogueTick {
                    trace!("tick ignored");
                } else {
                    debug!(%command, "command ignored");
                    self.event_bus
                        .publish(Event::GameState(GameStateEvent::CommandIgnored { command }));
                }
            }
        }

        self.apply_timer(outcome.timer);

        Ok(ExecutionReport {
            outcome,
            snapshot: self.store.snapshot(),
        })
    }

    fn apply_timer(&mut self, directive: TimerDirective) {
        let Some(ticker) = self.ticker.as_mut() else {
            return;
        };

        match directive {
            TimerDirective::Start => {
                ticker.start();
                let cadence_ms = u64::try_from(ticker.cadence().as_millis()).unwrap_or(u64::MAX);
                debug!(cadence_ms, "reveal ticker started");
                self.event_bus
                    .publish(Event::Dialogue(DialogueEvent::RevealStarted { cadence_ms }));
            }
            TimerDirective::Cancel => {
                if ticker.stop() {
                    debug!("reveal ticker cancelled");
                    self.event_bus
                        .publish(Event::Dialogue(DialogueEvent::RevealStopped));
                }
            }
            TimerDirective::Keep => {}
        }
    }
}
