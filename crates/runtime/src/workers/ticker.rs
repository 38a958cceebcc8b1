//! Typewriter ticker for dialogue reveals.
//!
//! The ticker holds only a weak sender to the session worker, so a running
//! ticker never keeps the command channel alive on its own.
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::trace;

use super::session::Command;

pub struct RevealTicker {
    command_tx: mpsc::WeakSender<Command>,
    cadence: Duration,
    task: Option<JoinHandle<()>>,
}

impl RevealTicker {
    pub fn new(command_tx: mpsc::WeakSender<Command>, cadence: Duration) -> Self {
        Self {
            command_tx,
            cadence: cadence.max(Duration::from_millis(1)),
            task: None,
        }
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Spawns the tick loop, replacing any loop still running.
    pub fn start(&mut self) {
        self.stop();

        let command_tx = self.command_tx.clone();
        let cadence = self.cadence;
        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(cadence);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            interval.tick().await;

            loop {
                interval.tick().await;
                let Some(tx) = command_tx.upgrade() else {
                    break;
                };
                if tx.send(Command::RevealTick).await.is_err() {
                    break;
                }
                trace!("reveal tick sent");
            }
        }));
    }

    /// Aborts the tick loop. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for RevealTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
