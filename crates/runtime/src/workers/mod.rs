//! Worker tasks that back the runtime orchestration.
//!
//! The session worker executes gameplay commands; the reveal ticker feeds it
//! `DialogueTick` commands while a message is being revealed.

mod session;
mod ticker;

pub use session::{Command, SessionWorker};
pub use ticker::RevealTicker;
