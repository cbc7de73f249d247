//! Subcommand implementations.

pub mod chat;
pub mod providers;
pub mod translate;
