//! Provider listing command handler.

use anyhow::Result;

use crate::config::{ConfigManager, DEFAULT_PROVIDER};
use crate::ui::Style;

/// Prints configured providers to stdout.
///
/// With a name, shows detail for that provider; otherwise lists all of
/// them, marking the default.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    if config.providers.is_empty() {
        println!("No providers configured.");
        println!(
            "{}",
            Style::secondary(format!(
                "Using the built-in '{DEFAULT_PROVIDER}' provider; add others to ~/.config/lingo/config.toml"
            ))
        );
        return Ok(());
    }

    let default_provider = config
        .lingo
        .provider
        .as_deref()
        .unwrap_or(DEFAULT_PROVIDER);

    if let Some(provider_name) = specific_provider {
        let Some(provider) = config.providers.get(provider_name) else {
            anyhow::bail!("Provider '{provider_name}' not found");
        };

        let marker = if default_provider == provider_name {
            format!(" {}", Style::secondary("(default)"))
        } else {
            String::new()
        };
        println!("{}{marker}", Style::header(provider_name));
        println!(
            "  {} {}",
            Style::label("endpoint"),
            Style::secondary(&provider.endpoint)
        );
        if provider.api_key_env.is_some() || provider.api_key.is_some() {
            let has_key = provider.get_api_key().is_some();
            println!(
                "  {} {}",
                Style::label("api_key "),
                if has_key { "(set)" } else { "(not set)" }
            );
        }
        if provider.models.is_empty() {
            println!("  {} (none configured)", Style::label("models  "));
        } else {
            println!("  {}", Style::label("models"));
            for model in &provider.models {
                println!("    - {}", Style::value(model));
            }
        }
    } else {
        println!("{}", Style::header("Configured providers"));
        println!();
        for (name, provider) in &config.providers {
            let marker = if default_provider == name {
                format!(" {}", Style::secondary("(default)"))
            } else {
                String::new()
            };
            println!("  {}{marker}", Style::value(name));
            println!(
                "    {} {}",
                Style::label("endpoint:"),
                Style::secondary(&provider.endpoint)
            );
            if !provider.models.is_empty() {
                println!(
                    "    {} {}",
                    Style::label("models:  "),
                    provider.models.join(", ")
                );
            }
        }
    }

    Ok(())
}
