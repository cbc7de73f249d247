//! Language catalog and target-language validation.

use anyhow::Result;

use crate::ui::Style;

/// Selectable target languages: `(code, display name)`.
///
/// The `auto` entry is only meaningful for detection and is filtered out of
/// target-language pickers.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("auto", "Auto Detect"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("ru", "Russian"),
    ("ar", "Arabic"),
    ("zh-CN", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("hi", "Hindi"),
    ("bn", "Bengali"),
    ("te", "Telugu"),
    ("ta", "Tamil"),
    ("mr", "Marathi"),
    ("gu", "Gujarati"),
    ("kn", "Kannada"),
    ("ml", "Malayalam"),
    ("pa", "Punjabi"),
    ("ur", "Urdu"),
    ("or", "Odia"),
    ("as", "Assamese"),
    ("sa", "Sanskrit"),
    ("ne", "Nepali"),
    ("sd", "Sindhi"),
    ("ks", "Kashmiri"),
    ("gom", "Konkani"),
    ("mai", "Maithili"),
    ("doi", "Dogri"),
    ("brx", "Bodo"),
    ("mni", "Manipuri (Meitei)"),
    ("sat", "Santali"),
    ("tr", "Turkish"),
    ("pl", "Polish"),
    ("uk", "Ukrainian"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("no", "Norwegian"),
    ("fi", "Finnish"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("tl", "Filipino"),
    ("el", "Greek"),
    ("he", "Hebrew"),
    ("cs", "Czech"),
    ("ro", "Romanian"),
    ("hu", "Hungarian"),
    ("sw", "Swahili"),
    ("fa", "Persian"),
    ("si", "Sinhala"),
    ("my", "Burmese"),
];

/// Looks up the display name for a language code.
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, name)| *name)
}

/// Resolves a code to the name interpolated into prompts, falling back to
/// the code itself for anything not in the catalog.
pub fn display_name(code: &str) -> &str {
    language_name(code).unwrap_or(code)
}

/// Prints the catalog to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported target languages"));
    for (code, name) in LANGUAGES {
        if *code == "auto" {
            continue;
        }
        println!("  {:6} {}", Style::code(code), Style::secondary(name));
    }
}

/// Validates that the given code names a selectable target language.
///
/// # Errors
///
/// Returns an error for unknown codes and for `auto`, which is not a valid
/// translation target.
pub fn validate_language(code: &str) -> Result<()> {
    if code != "auto" && language_name(code).is_some() {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{code}'\n\n\
             Valid codes include: en, ja, es, fr, de, zh-CN, ...\n\
             Run 'lingo languages' to see all supported codes."
        )
    }
}
