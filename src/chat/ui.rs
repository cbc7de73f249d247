//! Chat mode rendering: header, help, and the translation card.

use crate::translation::TranslationResult;
use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Conversation starters shown to first-time users.
pub const QUICK_COMMANDS: &[&str] = &[
    "Make it more formal",
    "Simplify for kids",
    "Explain this idiom",
    "Translate back to English",
];

pub fn print_header(config: &SessionConfig) {
    println!(
        "{} {} - Conversational Translation Mode",
        Style::header("lingo"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::hint(format!(
            "Translating to {} - /to <lang> to switch, /help for commands",
            config.target_language_name()
        ))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("provider"),
        Style::value(&config.provider_name)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}         {} {}",
        Style::label("to"),
        Style::value(&config.to),
        Style::secondary(format!("({})", config.target_language_name()))
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("/attach <file>"),
        Style::secondary("Stage an image or .txt file for the next send")
    );
    println!(
        "  {}          {}",
        Style::command("/clear"),
        Style::secondary("Clear the conversation and start fresh")
    );
    println!(
        "  {}         {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}      {}",
        Style::command("/languages"),
        Style::secondary("List supported target languages")
    );
    println!(
        "  {}            {}",
        Style::command("/say"),
        Style::secondary("Speak the last translation out loud")
    );
    println!(
        "  {}      {}",
        Style::command("/to <lang>"),
        Style::secondary("Switch the target language")
    );
    println!(
        "  {}           {}",
        Style::command("/quit"),
        Style::secondary("Exit chat mode")
    );
    println!();
    println!("{}", Style::header("Try asking"));
    for command in QUICK_COMMANDS {
        println!("  {}", Style::hint(format!("\"{command}\"")));
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

pub fn print_attachment_staged(name: &str, mime_type: &str) {
    println!(
        "{} Attached {} {}",
        Style::success("✓"),
        Style::value(name),
        Style::secondary(format!("({mime_type})"))
    );
    println!();
}

/// Renders one translation result as a card.
///
/// This renderer has no failure mode of its own: whatever happened upstream
/// arrived as a fully-populated result.
pub fn print_translation(result: &TranslationResult) {
    println!("{}", Style::value(&result.primary_translation));
    println!(
        "{}",
        Style::secondary(format!(
            "detected {} - confidence {}",
            result.detected_language, result.confidence
        ))
    );
    println!();

    println!("{}", Style::header("Tones"));
    println!(
        "  {}  {}",
        Style::label("formal"),
        result.tones.formal
    );
    println!(
        "  {}  {}",
        Style::label("casual"),
        result.tones.casual
    );
    println!(
        "  {}  {}",
        Style::label("simple"),
        result.tones.simple
    );

    if !result.alternatives.is_empty() {
        println!();
        println!("{}", Style::header("Alternatives"));
        for alternative in &result.alternatives {
            println!("  - {alternative}");
        }
    }

    if !result.cultural_note.is_empty() && result.cultural_note != "None" {
        println!();
        println!("{}", Style::note(&result.cultural_note));
    }

    println!();
}
