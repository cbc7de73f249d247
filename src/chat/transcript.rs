//! The in-memory conversation transcript.
//!
//! Append-only: messages are never edited; the only other operation is
//! clearing the whole sequence. An assistant message always carries a
//! fully-populated [`TranslationResult`], never a bare error string.

use std::time::SystemTime;

use crate::input::Attachment;
use crate::translation::TranslationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Message payload: users send plain text, the assistant replies with the
/// structured result.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
    Text(String),
    Translation(TranslationResult),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: MessageContent,
    pub attachments: Vec<Attachment>,
    pub timestamp: SystemTime,
}

/// The append-only message sequence for one chat run.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: &str, attachments: Vec<Attachment>) -> u64 {
        self.push(Role::User, MessageContent::Text(text.to_string()), attachments)
    }

    pub fn push_assistant(&mut self, result: TranslationResult) -> u64 {
        self.push(Role::Assistant, MessageContent::Translation(result), Vec::new())
    }

    fn push(&mut self, role: Role, content: MessageContent, attachments: Vec<Attachment>) -> u64 {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            content,
            attachments,
            timestamp: SystemTime::now(),
        });
        self.next_id
    }

    /// Empties the sequence. Ids keep increasing so old and new messages
    /// stay distinguishable.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent assistant result, if any.
    pub fn last_translation(&self) -> Option<&TranslationResult> {
        self.messages.iter().rev().find_map(|message| {
            match (&message.role, &message.content) {
                (Role::Assistant, MessageContent::Translation(result)) => Some(result),
                _ => None,
            }
        })
    }
}
