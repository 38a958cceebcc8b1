//! Interactive read-eval loop over stdin.
use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use game_core::{Command, DialoguePhase, Disposition, GameError, GameState};
use runtime::{Event, GameStateEvent, OracleBundle, RuntimeError, RuntimeHandle, Topic};

use crate::config::ClientConfig;
use crate::input::{HELP, Input, InputError, parse_line};
use crate::render;

pub struct CliApp {
    handle: RuntimeHandle,
    oracles: OracleBundle,
    config: ClientConfig,
}

impl CliApp {
    pub fn new(handle: RuntimeHandle, oracles: OracleBundle, config: ClientConfig) -> Self {
        Self {
            handle,
            oracles,
            config,
        }
    }

    /// Runs until `quit` or end of input.
    pub async fn run(&self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("Welcome to DevLife. Type `help` for commands.");
        self.print_status().await?;

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
                break;
            };

            match parse_line(&line) {
                Ok(Input::Quit) => break,
                Ok(Input::Help) => println!("{HELP}"),
                Ok(Input::State) => {
                    let snapshot = self.handle.snapshot().await?;
                    println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?);
                }
                Ok(Input::Game(command)) => self.dispatch(command).await?,
                Err(InputError::Empty) => {}
                Err(err) => println!("{err}"),
            }
        }

        info!("Input closed, leaving session");
        Ok(())
    }

    async fn dispatch(&self, command: Command) -> Result<()> {
        // Subscribe first so no reveal tick of this command is missed.
        let mut state_rx = self.handle.subscribe(Topic::GameState);

        let report = match self.handle.execute(command).await {
            Ok(report) => report,
            Err(RuntimeError::Execute(err)) => {
                warn!(%command, code = err.error_code(), "command rejected");
                println!("! {err}");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        if report.outcome.disposition == Disposition::Ignored {
            debug!(%command, "command ignored");
            println!("(nothing happens)");
            return Ok(());
        }

        let snapshot = if report.snapshot.dialogue.phase == DialoguePhase::Revealing {
            self.reveal(report.snapshot, &mut state_rx).await?
        } else {
            if let Some(message) = report.snapshot.dialogue.current_message() {
                println!("{message}");
            }
            report.snapshot
        };

        match render::dialogue_footer(&snapshot) {
            Some(footer) => println!("{footer}"),
            None => println!("{}", render::status_line(&snapshot, self.oracles.catalog())),
        }
        Ok(())
    }

    /// Prints the current message as it is revealed and returns the settled snapshot.
    async fn reveal(
        &self,
        mut snapshot: Arc<GameState>,
        state_rx: &mut broadcast::Receiver<Event>,
    ) -> Result<Arc<GameState>> {
        if !self.config.auto_reveal {
            let report = self.handle.execute(Command::DialogueSkip).await?;
            if let Some(message) = report.snapshot.dialogue.current_message() {
                println!("{message}");
            }
            return Ok(report.snapshot);
        }

        let mut printed = 0;
        loop {
            let fresh = render::revealed_since(&snapshot, printed);
            printed += fresh.chars().count();
            print!("{fresh}");
            std::io::stdout().flush()?;

            if snapshot.dialogue.phase != DialoguePhase::Revealing {
                break;
            }

            match state_rx.recv().await {
                Ok(Event::GameState(GameStateEvent::StateReplaced { .. }))
                | Err(broadcast::error::RecvError::Lagged(_)) => {
                    snapshot = self.handle.snapshot().await?;
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        println!();
        Ok(snapshot)
    }

    async fn print_status(&self) -> Result<()> {
        let snapshot = self.handle.snapshot().await?;
        println!("{}", render::status_line(&snapshot, self.oracles.catalog()));
        Ok(())
    }
}
