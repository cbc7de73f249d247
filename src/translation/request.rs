//! Request construction: turning user input and staged attachments into the
//! ordered content parts of a single model turn.

use serde::Serialize;

use crate::input::{Attachment, AttachmentKind};

/// One content part of a user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64-encoded binary content with its declared media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Builds the ordered part list for one send: the instruction first, then
/// the attachments in the order the user added them.
///
/// An entirely empty send still produces one greeting part; the remote
/// call is never issued with zero parts.
pub fn build_parts(text: &str, attachments: &[Attachment], target_language: &str) -> Vec<Part> {
    let mut parts = Vec::with_capacity(1 + attachments.len());

    if !text.trim().is_empty() {
        parts.push(Part::text(format!("Translate to {target_language}: {text}")));
    } else if !attachments.is_empty() {
        parts.push(Part::text(format!(
            "Translate the content of this file to {target_language}."
        )));
    }

    for attachment in attachments {
        match attachment.kind {
            AttachmentKind::Image => parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: attachment.mime_type.clone(),
                    data: attachment.content.clone(),
                },
            }),
            AttachmentKind::Text => {
                parts.push(Part::text(format!(
                    "\n[File Content]: {}",
                    attachment.content
                )));
            }
        }
    }

    if parts.is_empty() {
        parts.push(Part::text("Hello"));
    }

    parts
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn image_attachment() -> Attachment {
        Attachment {
            kind: AttachmentKind::Image,
            name: "photo.png".to_string(),
            mime_type: "image/png".to_string(),
            content: "aGVsbG8=".to_string(),
        }
    }

    fn text_attachment() -> Attachment {
        Attachment {
            kind: AttachmentKind::Text,
            name: "notes.txt".to_string(),
            mime_type: "text/plain".to_string(),
            content: "bonjour".to_string(),
        }
    }

    #[test]
    fn test_text_only_builds_instruction() {
        let parts = build_parts("good morning", &[], "Japanese");
        assert_eq!(
            parts,
            vec![Part::text("Translate to Japanese: good morning")]
        );
    }

    #[test]
    fn test_attachments_follow_instruction_in_order() {
        let attachments = vec![image_attachment(), text_attachment()];
        let parts = build_parts("what does this say", &attachments, "Spanish");

        assert_eq!(parts.len(), 3);
        assert!(
            matches!(&parts[0], Part::Text { text } if text.starts_with("Translate to Spanish:"))
        );
        assert!(
            matches!(&parts[1], Part::InlineData { inline_data } if inline_data.mime_type == "image/png")
        );
        assert!(
            matches!(&parts[2], Part::Text { text } if text.contains("[File Content]: bonjour"))
        );
    }

    #[test]
    fn test_attachments_without_text_get_file_instruction() {
        let attachments = vec![text_attachment()];
        let parts = build_parts("", &attachments, "German");
        assert!(
            matches!(&parts[0], Part::Text { text } if text == "Translate the content of this file to German.")
        );
    }

    #[test]
    fn test_empty_send_produces_single_greeting_part() {
        let parts = build_parts("", &[], "French");
        assert_eq!(parts, vec![Part::text("Hello")]);

        let parts = build_parts("   ", &[], "French");
        assert_eq!(parts, vec![Part::text("Hello")]);
    }

    #[test]
    fn test_image_part_serializes_as_inline_data() {
        let parts = build_parts("", &[image_attachment()], "Korean");
        let json = serde_json::to_string(&parts[1]).unwrap();
        assert!(json.contains("\"inlineData\""));
        assert!(json.contains("\"mimeType\":\"image/png\""));
        assert!(json.contains("\"data\":\"aGVsbG8=\""));
    }
}
