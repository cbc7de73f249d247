//! Interactive conversational translation mode.
//!
//! A REPL with slash commands, an append-only transcript, and structured
//! rendering of every reply.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod transcript;
mod ui;

pub use session::{ChatSession, SessionConfig};
pub use transcript::{ChatMessage, MessageContent, Role, Transcript};
pub use ui::{QUICK_COMMANDS, print_translation};
