//! Response schema declared to the model so it returns the structured
//! translation shape instead of free-form prose.

use serde_json::{Value, json};

/// Builds the JSON schema for [`super::TranslationResult`] in the
/// `generateContent` response-schema dialect (uppercase type names).
pub fn translation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "original": {
                "type": "STRING",
                "description": "The original text provided by the user."
            },
            "detectedLanguage": {
                "type": "STRING",
                "description": "The detected language of the input."
            },
            "primaryTranslation": {
                "type": "STRING",
                "description": "The best, most natural translation."
            },
            "tones": {
                "type": "OBJECT",
                "properties": {
                    "formal": {
                        "type": "STRING",
                        "description": "Formal business/official version."
                    },
                    "casual": {
                        "type": "STRING",
                        "description": "Casual/social version."
                    },
                    "simple": {
                        "type": "STRING",
                        "description": "Simplified version for children or beginners."
                    }
                },
                "required": ["formal", "casual", "simple"]
            },
            "alternatives": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "2-3 alternative phrasings."
            },
            "culturalNote": {
                "type": "STRING",
                "description": "Explanation of idioms, culture, or context if applicable. Use 'None' if not applicable."
            },
            "confidence": {
                "type": "STRING",
                "description": "Confidence percentage (e.g., '98%')."
            }
        },
        "required": [
            "original",
            "detectedLanguage",
            "primaryTranslation",
            "tones",
            "alternatives",
            "culturalNote",
            "confidence"
        ]
    })
}
