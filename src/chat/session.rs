//! The interactive chat loop.
//!
//! A REPL around the translation core: free text is sent for translation,
//! slash commands adjust the session. One request is in flight at a time;
//! the prompt blocks until the reply has been rendered.

use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::transcript::Transcript;
use super::ui;
use crate::input::Attachment;
use crate::speech::{SpeechEngine, detect_engine};
use crate::translation::{
    ModelClient, Translator, display_name, print_languages, validate_language,
};
use crate::ui::{Spinner, Style};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use.
    pub model: String,
    /// The API key (if required).
    pub api_key: Option<String>,
    /// The target language code.
    pub to: String,
}

impl SessionConfig {
    pub fn new(
        provider_name: String,
        endpoint: String,
        model: String,
        api_key: Option<String>,
        to: String,
    ) -> Self {
        Self {
            provider_name,
            endpoint,
            model,
            api_key,
            to,
        }
    }

    /// Display name of the current target language.
    pub fn target_language_name(&self) -> &str {
        display_name(&self.to)
    }
}

/// An interactive conversational translation session.
pub struct ChatSession {
    config: SessionConfig,
    translator: Translator,
    transcript: Transcript,
    staged: Vec<Attachment>,
    speech: Box<dyn SpeechEngine>,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        let client = ModelClient::new(
            config.endpoint.clone(),
            config.model.clone(),
            config.api_key.clone(),
        );
        Self {
            config,
            translator: Translator::new(client),
            transcript: Transcript::new(),
            staged: Vec::new(),
            speech: detect_engine(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.translate_and_print(&text).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Attach { path } => {
                self.handle_attach(path.as_deref());
                true
            }
            SlashCommand::Clear => {
                self.handle_clear();
                true
            }
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Languages => {
                print_languages();
                println!();
                true
            }
            SlashCommand::Say => {
                self.handle_say();
                true
            }
            SlashCommand::To { language } => {
                self.handle_to(language.as_deref());
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    fn handle_attach(&mut self, path: Option<&str>) {
        let Some(path) = path else {
            ui::print_error("Usage: /attach <file>");
            return;
        };

        match Attachment::from_path(path) {
            Ok(attachment) => {
                ui::print_attachment_staged(&attachment.name, &attachment.mime_type);
                self.staged.push(attachment);
            }
            Err(e) => ui::print_error(&format!("{e:#}")),
        }
    }

    /// Clears the transcript and drops the remote conversation so the next
    /// send starts with no leaked context.
    fn handle_clear(&mut self) {
        self.transcript.clear();
        self.staged.clear();
        self.translator.reset();
        println!("{} Conversation cleared", Style::success("✓"));
        println!();
    }

    fn handle_say(&self) {
        let Some(result) = self.transcript.last_translation() else {
            ui::print_error("Nothing to speak yet - translate something first");
            return;
        };

        if let Err(e) = self
            .speech
            .speak(&result.primary_translation, &result.detected_language)
        {
            ui::print_error(&e.to_string());
        }
    }

    fn handle_to(&mut self, language: Option<&str>) {
        let Some(language) = language else {
            ui::print_error("Usage: /to <language>");
            return;
        };

        if let Err(e) = validate_language(language) {
            ui::print_error(&e.to_string());
            return;
        }

        // The session manager notices the change on the next send and
        // rebuilds the remote conversation for the new language.
        self.config.to = language.to_string();
        println!(
            "{} Target language set to {}",
            Style::success("✓"),
            Style::value(display_name(language))
        );
        println!();
    }

    async fn translate_and_print(&mut self, text: &str) {
        let attachments = std::mem::take(&mut self.staged);
        self.transcript.push_user(text, attachments.clone());

        let spinner = Spinner::new("Translating...");
        let result = self
            .translator
            .send(text, &attachments, display_name(&self.config.to))
            .await;
        spinner.stop();

        ui::print_translation(&result);
        self.transcript.push_assistant(result);
    }
}
