//! Terminal client for DevLife.
//!
//! The binary is the composition root: it loads configuration, installs
//! logging, builds the [`runtime::Runtime`] and hands its handle to the
//! line-oriented [`app::CliApp`].

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;

pub use app::CliApp;
pub use config::ClientConfig;
