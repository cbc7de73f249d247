//! Session lifecycle and the single send operation.
//!
//! A [`Session`] is the rolling handle to one remote conversation: the
//! system instruction for the chosen target language plus the accumulated
//! turn history. [`SessionManager`] owns at most one live session and
//! rebuilds it whenever the target language changes; [`Translator`] bundles
//! the manager with a client and exposes the one operation the presentation
//! layer calls.

use super::client::{Content, ModelClient};
use super::normalize::normalize;
use super::prompt::build_system_instruction;
use super::request::build_parts;
use super::result::TranslationResult;
use crate::input::Attachment;

/// One remote conversation.
///
/// The id increases monotonically across the owning manager's lifetime, so
/// recreation is observable.
#[derive(Debug)]
pub struct Session {
    id: u64,
    target_language: String,
    system_instruction: String,
    history: Vec<Content>,
}

impl Session {
    fn new(id: u64, target_language: &str) -> Self {
        Self {
            id,
            target_language: target_language.to_string(),
            system_instruction: build_system_instruction(target_language),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Number of recorded turns (user and model combined).
    pub fn turn_count(&self) -> usize {
        self.history.len()
    }

    fn record_exchange(&mut self, user_turn: Content, reply_text: Option<&str>) {
        self.history.push(user_turn);
        if let Some(text) = reply_text {
            self.history.push(Content::model_text(text));
        }
    }
}

/// Owns the single live session.
#[derive(Debug, Default)]
pub struct SessionManager {
    current: Option<Session>,
    created: u64,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the live session, discarding and rebuilding it first when no
    /// session exists or the remembered target language differs.
    pub fn get_or_create(&mut self, target_language: &str) -> &mut Session {
        let stale = self
            .current
            .as_ref()
            .is_none_or(|session| session.target_language != target_language);

        if stale {
            self.created += 1;
            self.current = Some(Session::new(self.created, target_language));
        }

        match self.current.as_mut() {
            Some(session) => session,
            // The branch above guarantees a live session.
            None => unreachable!(),
        }
    }

    /// Drops the live session and its remembered language. The next send
    /// starts a fresh remote conversation with no carried-over context.
    pub fn reset(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}

/// The sending facade: one client, one session manager, one operation.
///
/// `send` takes `&mut self`, so a second request cannot be issued while one
/// is outstanding: the single-in-flight rule is enforced by the borrow
/// checker rather than a busy flag.
pub struct Translator {
    client: ModelClient,
    sessions: SessionManager,
}

impl Translator {
    pub fn new(client: ModelClient) -> Self {
        Self {
            client,
            sessions: SessionManager::new(),
        }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub fn session_id(&self) -> Option<u64> {
        self.sessions.current().map(Session::id)
    }

    /// Clears the conversation handle; called when the user clears history.
    pub fn reset(&mut self) {
        self.sessions.reset();
    }

    /// Sends one translation request and returns a fully-populated result.
    ///
    /// This is the whole state machine for a send: exactly one remote round
    /// trip, terminating in a parsed result, a blocked/unparsable fallback,
    /// or a transport-failure result. It never returns an error.
    pub async fn send(
        &mut self,
        text: &str,
        attachments: &[Attachment],
        target_language: &str,
    ) -> TranslationResult {
        let session = self.sessions.get_or_create(target_language);

        let user_turn = Content::user(build_parts(text, attachments, target_language));

        let mut contents = session.history.clone();
        contents.push(user_turn.clone());

        match self
            .client
            .generate(session.system_instruction(), &contents)
            .await
        {
            Ok(reply) => {
                // Keep the raw exchange in the rolling history even when the
                // reply fails to parse; the remote model saw it either way.
                session.record_exchange(user_turn, reply.text.as_deref());
                normalize(reply.text.as_deref(), reply.finish_reason.as_deref(), text)
            }
            Err(error) => TranslationResult::transport_error(text, &format!("{error:#}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_reuses_session_for_same_language() {
        let mut manager = SessionManager::new();
        let first = manager.get_or_create("Japanese").id();
        let second = manager.get_or_create("Japanese").id();
        assert_eq!(first, second);
    }

    #[test]
    fn test_language_change_rebuilds_session() {
        let mut manager = SessionManager::new();
        let first = manager.get_or_create("Japanese").id();
        let second = manager.get_or_create("Spanish").id();
        assert_ne!(first, second);
        assert_eq!(
            manager.current().unwrap().target_language(),
            "Spanish"
        );
    }

    #[test]
    fn test_reset_forces_fresh_session() {
        let mut manager = SessionManager::new();
        let first = manager.get_or_create("Japanese").id();
        manager.reset();
        assert!(manager.current().is_none());

        let second = manager.get_or_create("Japanese").id();
        assert_ne!(first, second);
        assert_eq!(manager.get_or_create("Japanese").turn_count(), 0);
    }

    #[test]
    fn test_session_instruction_reflects_language() {
        let mut manager = SessionManager::new();
        let session = manager.get_or_create("Spanish");
        assert!(
            session
                .system_instruction()
                .contains("Current Target Language: Spanish.")
        );
    }

    #[test]
    fn test_record_exchange_appends_both_turns() {
        let mut session = Session::new(1, "Japanese");
        session.record_exchange(
            Content::user(vec![super::super::request::Part::text("hi")]),
            Some("{}"),
        );
        assert_eq!(session.turn_count(), 2);

        // An empty reply records only the user turn.
        session.record_exchange(
            Content::user(vec![super::super::request::Part::text("again")]),
            None,
        );
        assert_eq!(session.turn_count(), 3);
    }

    #[tokio::test]
    async fn test_send_maps_connection_failure_into_result() {
        // Nothing listens on port 9; the round trip fails fast and must
        // come back as a transport-failure result, not an error.
        let client = ModelClient::new(
            "http://127.0.0.1:9".to_string(),
            "test-model".to_string(),
            None,
        );
        let mut translator = Translator::new(client);

        let result = translator.send("hello", &[], "Japanese").await;
        assert_eq!(
            result.primary_translation,
            "An error occurred while communicating with the AI service."
        );
        assert_eq!(result.confidence, "0%");
        assert!(!result.cultural_note.is_empty());
    }

    #[tokio::test]
    async fn test_language_switch_between_sends_recreates_session() {
        let client = ModelClient::new(
            "http://127.0.0.1:9".to_string(),
            "test-model".to_string(),
            None,
        );
        let mut translator = Translator::new(client);

        translator.send("hello", &[], "Japanese").await;
        let first = translator.session_id().unwrap();

        translator.send("hello", &[], "Spanish").await;
        let second = translator.session_id().unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_reset_between_sends_recreates_session() {
        let client = ModelClient::new(
            "http://127.0.0.1:9".to_string(),
            "test-model".to_string(),
            None,
        );
        let mut translator = Translator::new(client);

        translator.send("hello", &[], "Japanese").await;
        let first = translator.session_id().unwrap();

        translator.reset();
        translator.send("hello", &[], "Japanese").await;
        let second = translator.session_id().unwrap();

        assert_ne!(first, second);
    }
}
