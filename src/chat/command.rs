//! Slash command parsing and autocomplete for chat mode.

use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/attach", "Stage a file for the next send"),
    ("/clear", "Clear the conversation and start fresh"),
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/languages", "List supported target languages"),
    ("/say", "Speak the last translation out loud"),
    ("/to", "Switch the target language"),
    ("/quit", "Exit chat mode"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone)]
pub enum SlashCommand {
    Attach { path: Option<String> },
    Clear,
    Config,
    Help,
    Languages,
    Say,
    To { language: Option<String> },
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let mut parts = cmd.split_whitespace();

    let command = match parts.next() {
        Some("attach") => SlashCommand::Attach {
            path: parts.next().map(str::to_string),
        },
        Some("clear") => SlashCommand::Clear,
        Some("config") => SlashCommand::Config,
        Some("help") => SlashCommand::Help,
        Some("languages") => SlashCommand::Languages,
        Some("say") => SlashCommand::Say,
        Some("to") => SlashCommand::To {
            language: parts.next().map(str::to_string),
        },
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(cmd.split_whitespace().collect::<Vec<_>>().join(" ")),
    };

    Input::Command(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_input(""), Input::Empty));
        assert!(matches!(parse_input("   "), Input::Empty));
    }

    #[test]
    fn test_parse_text_input() {
        match parse_input("Good morning!") {
            Input::Text(text) => assert_eq!(text, "Good morning!"),
            _ => panic!("Expected Input::Text"),
        }
    }

    #[test]
    fn test_parse_clear_command() {
        assert!(matches!(
            parse_input("/clear"),
            Input::Command(SlashCommand::Clear)
        ));
    }

    #[test]
    fn test_parse_to_command_with_language() {
        match parse_input("/to ja") {
            Input::Command(SlashCommand::To { language }) => {
                assert_eq!(language.as_deref(), Some("ja"));
            }
            _ => panic!("Expected Input::Command(SlashCommand::To)"),
        }
    }

    #[test]
    fn test_parse_to_command_without_language() {
        match parse_input("/to") {
            Input::Command(SlashCommand::To { language }) => assert!(language.is_none()),
            _ => panic!("Expected Input::Command(SlashCommand::To)"),
        }
    }

    #[test]
    fn test_parse_attach_command() {
        match parse_input("/attach photo.png") {
            Input::Command(SlashCommand::Attach { path }) => {
                assert_eq!(path.as_deref(), Some("photo.png"));
            }
            _ => panic!("Expected Input::Command(SlashCommand::Attach)"),
        }
    }

    #[test]
    fn test_parse_quit_commands() {
        for cmd in ["/quit", "/exit", "/q"] {
            assert!(matches!(
                parse_input(cmd),
                Input::Command(SlashCommand::Quit)
            ));
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        match parse_input("/unknown") {
            Input::Command(SlashCommand::Unknown(cmd)) => assert_eq!(cmd, "unknown"),
            _ => panic!("Expected Input::Command(SlashCommand::Unknown)"),
        }
    }

    // SlashCommandCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        assert!(completer.get_suggestions("hello").unwrap().is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/cl").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/clear"));

        let suggestions = completer.get_suggestions("/c").unwrap();
        assert_eq!(suggestions.len(), 2); // /clear, /config
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/attach  Stage a file for the next send".to_string();
        let completion = completer.get_completion("/a", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/attach".to_string()));
    }
}
