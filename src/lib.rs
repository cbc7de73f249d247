//! # lingo - Conversational Translation CLI
//!
//! `lingo` is a command-line tool for translating text, images, and text
//! files through a hosted large-language-model API. Replies come back as a
//! structured result: the primary translation, formal/casual/simple tone
//! variants, alternative phrasings, a cultural note, and a confidence
//! estimate.
//!
//! ## Features
//!
//! - **Conversational sessions**: chat mode keeps context across turns and
//!   transparently starts a fresh session when the target language changes
//! - **Multimodal input**: attach images or .txt files to a request
//! - **Structured replies**: the model is pinned to a JSON schema, and
//!   every reply (including failures) renders as the same result shape
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file
//! lingo ./notes.txt --to ja
//!
//! # Translate from stdin
//! echo "good morning" | lingo --to es
//!
//! # Translate an image
//! lingo --attach menu.png --to en
//!
//! # Interactive chat mode
//! lingo chat
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/lingo/config.toml`:
//!
//! ```toml
//! [lingo]
//! provider = "google"
//! model = "gemini-3-flash-preview"
//! to = "ja"
//!
//! [providers.google]
//! endpoint = "https://generativelanguage.googleapis.com"
//! api_key_env = "GEMINI_API_KEY"
//! models = ["gemini-3-flash-preview"]
//! ```

/// Interactive conversational translation mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Input reading: source text and file attachments.
pub mod input;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Speech output capability seam.
pub mod speech;

/// The translation core: sessions, requests, client, normalization.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
