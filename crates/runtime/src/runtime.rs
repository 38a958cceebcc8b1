//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive a session.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use game_content::ContentFactory;
use game_core::{GameConfig, GameState, StateStore};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::oracle::OracleBundle;
use crate::workers::{RevealTicker, SessionWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Catalog directory; the bundled catalog is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Game seed; drawn at random when unset.
    pub seed: Option<u64>,
    /// Overrides `inventory_slots` from the content config.
    pub inventory_slots: Option<u16>,
    /// Overrides `reveal_cadence_ms` from the content config.
    pub reveal_cadence_ms: Option<u64>,
    /// Let the ticker drive dialogue reveals (default: true)
    pub auto_reveal: bool,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed: None,
            inventory_slots: None,
            reveal_cadence_ms: None,
            auto_reveal: true,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DEVLIFE_DATA_DIR` - Catalog directory (default: bundled catalog)
    /// - `DEVLIFE_SEED` - Game seed (default: random)
    /// - `DEVLIFE_REVEAL_MS` - Reveal cadence in milliseconds (default: content config)
    /// - `DEVLIFE_INVENTORY_SLOTS` - Inventory capacity (default: content config)
    /// - `DEVLIFE_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `DEVLIFE_EVENT_BUFFER` - Event channel capacity per topic (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("DEVLIFE_DATA_DIR").ok().map(PathBuf::from);
        config.seed = read_env::<u64>("DEVLIFE_SEED");
        config.reveal_cadence_ms = read_env::<u64>("DEVLIFE_REVEAL_MS");
        config.inventory_slots = read_env::<u16>("DEVLIFE_INVENTORY_SLOTS");

        if let Some(capacity) = read_env::<usize>("DEVLIFE_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("DEVLIFE_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }

    /// Resolves the game config: content defaults, then overrides.
    fn resolve_game_config(&self) -> Result<GameConfig> {
        let base = match &self.data_dir {
            Some(dir) => ContentFactory::new(dir).load_config(),
            None => ContentFactory::bundled_config(),
        }
        .map_err(RuntimeError::Content)?;

        let mut config = base;
        if let Some(slots) = self.inventory_slots {
            config = config.with_inventory_slots(slots);
        }
        if let Some(cadence) = self.reveal_cadence_ms {
            config = config.with_reveal_cadence_ms(cadence);
        }
        Ok(config)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that hosts one game session
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    game_config: GameConfig,
    oracles: OracleBundle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Build a runtime from configuration alone.
    pub async fn start(config: RuntimeConfig) -> Result<Self> {
        Self::builder().config(config).build().await
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Effective game configuration after content defaults and overrides.
    pub fn game_config(&self) -> &GameConfig {
        &self.game_config
    }

    /// Read-only catalog the session runs against.
    pub fn oracles(&self) -> &OracleBundle {
        &self.oracles
    }

    /// Shutdown the runtime gracefully
    ///
    /// Stops the worker even if cloned handles are still alive; their later
    /// calls fail with [`RuntimeError::CommandChannelClosed`].
    pub async fn shutdown(self) -> Result<()> {
        self.handle.request_shutdown().await;
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;

        info!("Runtime shut down");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    oracles: Option<OracleBundle>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            oracles: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Provide an already loaded catalog instead of reading `data_dir`.
    pub fn oracles(mut self, oracles: OracleBundle) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let game_config = self.config.resolve_game_config()?;

        let oracles = match (self.oracles, &self.config.data_dir) {
            (Some(oracles), _) => oracles,
            (None, Some(dir)) => OracleBundle::from_dir(dir)?,
            (None, None) => OracleBundle::bundled()?,
        };

        let initial_state = match self.state {
            Some(state) => state,
            None => {
                let seed = self.config.seed.unwrap_or_else(rand::random);
                GameState::with_seed(&game_config, seed)
            }
        };

        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let ticker = self.config.auto_reveal.then(|| {
            RevealTicker::new(
                command_tx.downgrade(),
                Duration::from_millis(game_config.reveal_cadence_ms),
            )
        });

        info!(
            seed = initial_state.game_seed,
            inventory_slots = game_config.inventory_slots,
            reveal_cadence_ms = game_config.reveal_cadence_ms,
            "Starting DevLife session"
        );

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        debug!("Spawning session worker...");
        let worker = SessionWorker::new(
            StateStore::new(initial_state),
            oracles.clone(),
            command_rx,
            event_bus,
            ticker,
        );
        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            game_config,
            oracles,
            worker_handle,
        })
    }
}
