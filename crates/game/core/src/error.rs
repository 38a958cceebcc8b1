//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`DialogueError`, `StateError`, `OracleError`,
//! `InteractionError`) live next to the code that raises them and share the
//! [`GameError`] trait defined here.
//!
//! Narrative refusals ("you're too tired") are never errors: they are regular
//! resolver results that open a dialogue. Errors are reserved for invariant
//! violations and malformed commands.

use crate::state::LocationId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the command can be retried later (e.g. inventory full)
/// - **Validation**: malformed input from the host, should not be retried
/// - **Internal**: unexpected state inconsistency, indicates a bug
/// - **Fatal**: the session cannot continue (e.g. missing catalog data)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Contextual information attached to errors for debugging and diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    /// Location of the player when the error was raised.
    pub location: Option<LocationId>,

    /// Number of commands applied before the failing one.
    pub nonce: u64,

    /// Optional static message providing additional context.
    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(nonce: u64) -> Self {
        Self {
            location: None,
            nonce,
            message: None,
        }
    }

    #[must_use]
    pub const fn with_location(mut self, location: LocationId) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Common trait for all game-core errors.
///
/// All error enums implement this trait alongside `thiserror::Error` so that
/// hosts can classify failures without matching on every concrete type.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Returns a stable identifier for this error variant (used in logs and tests).
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
