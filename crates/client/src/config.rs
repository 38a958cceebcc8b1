//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Presentation-side settings; session rules live in [`runtime::RuntimeConfig`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    /// Let the reveal ticker type messages out instead of showing them at once.
    pub auto_reveal: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            session_id: None,
            log_dir: None,
            auto_reveal: true,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DEVLIFE_SESSION_ID` - Session identifier for the log directory (default: timestamp)
    /// - `DEVLIFE_LOG_DIR` - Root log directory (default: platform cache dir)
    /// - `DEVLIFE_AUTO_REVEAL` - Typewriter reveal (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.session_id = env::var("DEVLIFE_SESSION_ID").ok();
        config.log_dir = env::var("DEVLIFE_LOG_DIR").ok().map(PathBuf::from);

        if let Some(enable) = read_env::<bool>("DEVLIFE_AUTO_REVEAL") {
            config.auto_reveal = enable;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
