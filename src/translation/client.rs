//! HTTP client for the `generateContent`-style translation endpoint.
//!
//! The wire format is the Gemini REST dialect: a system instruction, the
//! rolling `contents` history, a generation config pinning the reply to the
//! structured JSON schema, and permissive safety thresholds so translation
//! input is not refused on the standard harm categories.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::request::Part;
use super::schema::translation_schema;

/// Harm categories relaxed to `BLOCK_NONE` for every session.
const HARM_CATEGORIES: &[&str] = &[
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
    "HARM_CATEGORY_CIVIC_INTEGRITY",
];

/// One turn of the rolling conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: "user",
            parts,
        }
    }

    pub fn model_text(text: impl Into<String>) -> Self {
        Self {
            role: "model",
            parts: vec![Part::text(text)],
        }
    }
}

/// What the caller needs from a successful round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelReply {
    /// Concatenated candidate text; `None` when the service produced none.
    pub text: Option<String>,
    /// The service's stop reason, e.g. "STOP" or "SAFETY".
    pub finish_reason: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: InstructionContent<'a>,
    contents: &'a [Content],
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Serialize)]
struct InstructionContent<'a> {
    parts: [InstructionPart<'a>; 1],
}

#[derive(Serialize)]
struct InstructionPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Client for one provider endpoint.
pub struct ModelClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ModelClient {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
            api_key,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Performs one `generateContent` round trip.
    ///
    /// `contents` is the full session history followed by the new user turn.
    ///
    /// # Errors
    ///
    /// Returns an error for connection, HTTP-status, and body-decoding
    /// failures; callers map these into the transport-failure result.
    pub async fn generate(
        &self,
        system_instruction: &str,
        contents: &[Content],
    ) -> Result<ModelReply> {
        let url = self.request_url();

        let body = GenerateContentRequest {
            system_instruction: InstructionContent {
                parts: [InstructionPart {
                    text: system_instruction,
                }],
            },
            contents,
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: translation_schema(),
            },
            safety_settings: HARM_CATEGORIES
                .iter()
                .copied()
                .map(|category| SafetySetting {
                    category,
                    threshold: "BLOCK_NONE",
                })
                .collect(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to API endpoint: {}",
                    self.endpoint.trim_end_matches('/')
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to decode API response body")?;

        Ok(extract_reply(parsed))
    }

    fn request_url(&self) -> String {
        let mut url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );
        if let Some(key) = &self.api_key {
            url.push_str("?key=");
            url.push_str(key);
        }
        url
    }
}

fn extract_reply(response: GenerateContentResponse) -> ModelReply {
    let Some(candidate) = response
        .candidates
        .and_then(|mut candidates| (!candidates.is_empty()).then(|| candidates.remove(0)))
    else {
        return ModelReply {
            text: None,
            finish_reason: None,
        };
    };

    let text: String = candidate
        .content
        .and_then(|content| content.parts)
        .into_iter()
        .flatten()
        .filter_map(|part| part.text)
        .collect();

    ModelReply {
        text: (!text.is_empty()).then_some(text),
        finish_reason: candidate.finish_reason,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn decode(json: &str) -> ModelReply {
        extract_reply(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_extract_reply_concatenates_parts() {
        let reply = decode(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\""},{"text":":1}"}]},"finishReason":"STOP"}]}"#,
        );
        assert_eq!(reply.text.as_deref(), Some("{\"a\":1}"));
        assert_eq!(reply.finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn test_extract_reply_safety_block_has_reason_but_no_text() {
        let reply = decode(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#);
        assert_eq!(reply.text, None);
        assert_eq!(reply.finish_reason.as_deref(), Some("SAFETY"));
    }

    #[test]
    fn test_extract_reply_no_candidates() {
        let reply = decode(r"{}");
        assert_eq!(reply.text, None);
        assert_eq!(reply.finish_reason, None);
    }

    #[test]
    fn test_request_url_appends_key_when_present() {
        let client = ModelClient::new(
            "https://example.com/".to_string(),
            "gemini-3-flash-preview".to_string(),
            Some("secret".to_string()),
        );
        assert_eq!(
            client.request_url(),
            "https://example.com/v1beta/models/gemini-3-flash-preview:generateContent?key=secret"
        );
    }

    #[test]
    fn test_request_url_without_key() {
        let client = ModelClient::new(
            "http://localhost:9000".to_string(),
            "test-model".to_string(),
            None,
        );
        assert_eq!(
            client.request_url(),
            "http://localhost:9000/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn test_request_body_declares_json_reply_and_permissive_safety() {
        let body = GenerateContentRequest {
            system_instruction: InstructionContent {
                parts: [InstructionPart { text: "instruct" }],
            },
            contents: &[Content::user(vec![Part::text("hi")])],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: translation_schema(),
            },
            safety_settings: HARM_CATEGORIES
                .iter()
                .copied()
                .map(|category| SafetySetting {
                    category,
                    threshold: "BLOCK_NONE",
                })
                .collect(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(json["safetySettings"].as_array().unwrap().len(), 5);
        assert_eq!(json["safetySettings"][0]["threshold"], "BLOCK_NONE");
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
    }
}
