//! One-shot translation: read input, send once, render the result.

use anyhow::{Result, bail};

use crate::chat::print_translation;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::{Attachment, read_source};
use crate::translation::{ModelClient, Translator, display_name};
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub file: Option<String>,
    pub to: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub attach: Vec<String>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config_file = ConfigManager::new().load_or_default();
    let resolved = resolve_config(
        &ResolveOptions {
            to: options.to,
            provider: options.provider,
            model: options.model,
        },
        &config_file,
    )?;

    let attachments = options
        .attach
        .iter()
        .map(|path| Attachment::from_path(path))
        .collect::<Result<Vec<_>>>()?;

    // With attachments staged, an empty stdin/file is a valid send; with
    // nothing at all there is nothing to translate.
    let source_text = if options.file.is_none() && !attachments.is_empty() {
        String::new()
    } else {
        read_source(options.file.as_deref())?
    };

    if source_text.trim().is_empty() && attachments.is_empty() {
        bail!("Input is empty");
    }

    let client = ModelClient::new(resolved.endpoint, resolved.model, resolved.api_key);
    let mut translator = Translator::new(client);

    let spinner = Spinner::new("Translating...");
    let result = translator
        .send(
            &source_text,
            &attachments,
            display_name(&resolved.target_language),
        )
        .await;
    spinner.stop();

    print_translation(&result);
    Ok(())
}
