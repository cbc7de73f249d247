//! Reply normalization: turning whatever the model sent back into a
//! [`TranslationResult`].
//!
//! The model is instructed to return a bare JSON object, but in practice it
//! sometimes wraps it in a markdown fence or pads it with prose. Each send
//! ends in exactly one of four outcomes (parsed, blocked, unparsable,
//! transport failure); the first three are decided here, the fourth in
//! [`super::Translator::send`]. None of them escape as errors.

use super::result::TranslationResult;

/// Internal classification of a completed round trip.
#[derive(Debug)]
enum Outcome {
    Parsed(TranslationResult),
    Blocked(Option<String>),
    Unparsed(String),
}

/// Normalizes a raw model reply.
///
/// `raw_text` is the concatenated candidate text (`None` or empty when the
/// service returned nothing, usually a safety block), `finish_reason` the
/// service's stated stop reason, and `original_text` the user input echoed
/// into fallback results.
pub fn normalize(
    raw_text: Option<&str>,
    finish_reason: Option<&str>,
    original_text: &str,
) -> TranslationResult {
    match classify(raw_text, finish_reason) {
        Outcome::Parsed(result) => result,
        Outcome::Blocked(reason) => TranslationResult::blocked(original_text, reason.as_deref()),
        Outcome::Unparsed(text) => TranslationResult::unparsed(original_text, &text),
    }
}

fn classify(raw_text: Option<&str>, finish_reason: Option<&str>) -> Outcome {
    let Some(raw) = raw_text.filter(|text| !text.is_empty()) else {
        return Outcome::Blocked(finish_reason.map(str::to_string));
    };

    let candidate = extract_object(strip_code_fences(raw));

    // Strict decode: a syntactically valid object missing required fields
    // falls through to the raw-text fallback as well.
    match serde_json::from_str::<TranslationResult>(candidate) {
        Ok(result) => Outcome::Parsed(result),
        Err(_) => Outcome::Unparsed(candidate.to_string()),
    }
}

/// Strips a surrounding markdown code fence, tolerating a case-insensitive
/// `json` tag on the opening fence.
fn strip_code_fences(text: &str) -> &str {
    let mut text = text.trim();

    if let Some(rest) = text.strip_prefix("```") {
        let rest = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
        text = rest.trim_start();
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }

    text
}

/// Slices from the first `{` to the last `}`, tolerating prose the model
/// adds around the object. Returns the input unchanged when no braces exist.
fn extract_object(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}
