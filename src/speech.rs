//! Speech output as an optional, platform-provided capability.
//!
//! Text-to-speech is abstracted behind [`SpeechEngine`] so the chat layer
//! (and its tests) never probe a particular host environment. The CLI build
//! ships only [`UnsupportedSpeech`]; a platform integration can slot in a
//! real engine without touching the callers.

use anyhow::{Result, bail};

/// Capability seam for speaking a translation out loud.
pub trait SpeechEngine {
    /// Short human-readable engine name.
    fn name(&self) -> &str;

    /// Speaks `text` in the given language.
    ///
    /// # Errors
    ///
    /// Returns an error when the engine cannot speak (including the
    /// unsupported engine, which always errors).
    fn speak(&self, text: &str, language: &str) -> Result<()>;
}

/// The "no speech available" engine.
pub struct UnsupportedSpeech;

impl SpeechEngine for UnsupportedSpeech {
    fn name(&self) -> &str {
        "unsupported"
    }

    fn speak(&self, _text: &str, _language: &str) -> Result<()> {
        bail!("Speech output is not supported in this environment")
    }
}

/// Picks the best available engine for this build.
pub fn detect_engine() -> Box<dyn SpeechEngine> {
    Box::new(UnsupportedSpeech)
}
