use anyhow::Result;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};

pub struct ChatOptions {
    pub to: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config_file = ConfigManager::new().load_or_default();
    let resolved = resolve_config(
        &ResolveOptions {
            to: options.to,
            provider: options.provider,
            model: options.model,
        },
        &config_file,
    )?;

    let config = SessionConfig::new(
        resolved.provider_name,
        resolved.endpoint,
        resolved.model,
        resolved.api_key,
        resolved.target_language,
    );

    let mut session = ChatSession::new(config);
    session.run().await
}
