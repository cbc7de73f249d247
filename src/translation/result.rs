//! The structured translation reply and its failure-path constructors.
//!
//! Every send operation resolves to a [`TranslationResult`], whether the
//! model cooperated or not. Failure modes fill the same shape with
//! placeholder values so the rendering layer never special-cases errors.

use serde::{Deserialize, Serialize};

/// The three alternate phrasings returned alongside the primary translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneVariants {
    pub formal: String,
    pub casual: String,
    pub simple: String,
}

impl ToneVariants {
    fn uniform(placeholder: &str) -> Self {
        Self {
            formal: placeholder.to_string(),
            casual: placeholder.to_string(),
            simple: placeholder.to_string(),
        }
    }
}

/// A fully-populated translation reply.
///
/// Deserialization is strict: a reply missing any required field fails to
/// decode, which the normalizer treats the same as malformed JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// The text the user asked to translate.
    pub original: String,
    /// The language the model detected in the input.
    pub detected_language: String,
    /// The most natural, context-aware translation.
    pub primary_translation: String,
    /// Formal, casual, and simplified variants.
    pub tones: ToneVariants,
    /// Alternative phrasings, usually two or three.
    pub alternatives: Vec<String>,
    /// Idiom, culture, or context notes; "None" when not applicable.
    pub cultural_note: String,
    /// Confidence as a display string (e.g. "98%").
    pub confidence: String,
}

impl TranslationResult {
    /// Result for a reply the model produced no text for, usually a safety
    /// block. `finish_reason` is the service's stated reason, if any.
    pub fn blocked(original: &str, finish_reason: Option<&str>) -> Self {
        let reason = finish_reason.unwrap_or("Unknown");
        Self {
            original: label_or(original, "Input"),
            detected_language: "Unknown".to_string(),
            primary_translation: format!("Translation could not be completed. (Reason: {reason})"),
            tones: ToneVariants::uniform("-"),
            alternatives: Vec::new(),
            cultural_note: "The model blocked the response, likely due to safety filters."
                .to_string(),
            confidence: "0%".to_string(),
        }
    }

    /// Result for a reply that did not decode as the expected object. The
    /// cleaned text is surfaced verbatim so the user still sees something.
    pub fn unparsed(original: &str, raw_text: &str) -> Self {
        Self {
            original: label_or(original, "File Content"),
            detected_language: "Unknown".to_string(),
            primary_translation: raw_text.to_string(),
            tones: ToneVariants::uniform("Not available"),
            alternatives: Vec::new(),
            cultural_note: "Structured data parsing failed. Showing raw output.".to_string(),
            confidence: "Low".to_string(),
        }
    }

    /// Result for a failed remote call (network, auth, quota). The error
    /// detail lands in `cultural_note`.
    pub fn transport_error(original: &str, detail: &str) -> Self {
        Self {
            original: label_or(original, "Input"),
            detected_language: "Unknown".to_string(),
            primary_translation: "An error occurred while communicating with the AI service."
                .to_string(),
            tones: ToneVariants::uniform("-"),
            alternatives: Vec::new(),
            cultural_note: detail.to_string(),
            confidence: "0%".to_string(),
        }
    }
}

fn label_or(original: &str, fallback: &str) -> String {
    if original.trim().is_empty() {
        fallback.to_string()
    } else {
        original.to_string()
    }
}
