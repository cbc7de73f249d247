use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Built-in provider used when no configuration exists: the public Gemini
/// endpoint with the key taken from `GEMINI_API_KEY`.
pub const DEFAULT_PROVIDER: &str = "google";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Default settings in the `[lingo]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defaults {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default model name.
    pub model: Option<String>,
    /// Default target language code.
    pub to: Option<String>,
}

/// Configuration for one translation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The `generateContent`-compatible API endpoint URL.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// List of available models for this provider.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// Gets the API key, preferring the environment variable over the
    /// config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    fn builtin_default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            api_key_env: Some(DEFAULT_API_KEY_ENV.to_string()),
            models: vec![DEFAULT_MODEL.to_string()],
        }
    }
}

/// The complete configuration file, `~/.config/lingo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub lingo: Defaults,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

/// Resolved configuration after merging CLI arguments, config file, and
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub provider_name: String,
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub target_language: String,
}

/// CLI overrides; each takes precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub to: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
}

/// Merges CLI options with the config file, falling back to the built-in
/// provider when nothing is configured.
///
/// # Errors
///
/// Returns an error when a named provider is not configured, or when the
/// selected provider declares an API key source that yields no key.
pub fn resolve_config(options: &ResolveOptions, config: &ConfigFile) -> Result<ResolvedConfig> {
    let provider_name = options
        .provider
        .clone()
        .or_else(|| config.lingo.provider.clone())
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    let provider = match config.providers.get(&provider_name) {
        Some(provider) => provider.clone(),
        None if provider_name == DEFAULT_PROVIDER => ProviderConfig::builtin_default(),
        None => {
            let mut available: Vec<&str> =
                config.providers.keys().map(String::as_str).collect();
            available.sort_unstable();
            bail!(
                "Provider '{provider_name}' not found\n\n\
                 Configured providers: {}\n\
                 Add providers to ~/.config/lingo/config.toml",
                if available.is_empty() {
                    "(none)".to_string()
                } else {
                    available.join(", ")
                }
            );
        }
    };

    let model = options
        .model
        .clone()
        .or_else(|| config.lingo.model.clone())
        .or_else(|| provider.models.first().cloned())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let target_language = options
        .to
        .clone()
        .or_else(|| config.lingo.to.clone())
        .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string());

    let api_key = provider.get_api_key();
    if api_key.is_none()
        && let Some(env_var) = &provider.api_key_env
    {
        bail!(
            "Provider '{provider_name}' requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/lingo/config.toml"
        );
    }

    Ok(ResolvedConfig {
        provider_name,
        endpoint: provider.endpoint,
        model,
        api_key,
        target_language,
    })
}

/// Loads and saves the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    fn create_test_config() -> ConfigFile {
        let mut providers = HashMap::new();
        providers.insert(
            "local".to_string(),
            ProviderConfig {
                endpoint: "http://localhost:9000".to_string(),
                api_key: None,
                api_key_env: None,
                models: vec!["test-model".to_string()],
            },
        );

        ConfigFile {
            lingo: Defaults {
                provider: Some("local".to_string()),
                model: Some("test-model".to_string()),
                to: Some("ja".to_string()),
            },
            providers,
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        manager.save(&create_test_config()).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.lingo.provider, Some("local".to_string()));
        assert_eq!(loaded.lingo.to, Some("ja".to_string()));
        assert!(loaded.providers.contains_key("local"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        assert!(manager.load().is_err());
    }

    #[test]
    fn test_resolve_cli_overrides_file() {
        let options = ResolveOptions {
            to: Some("fr".to_string()),
            provider: None,
            model: Some("other-model".to_string()),
        };

        let resolved = resolve_config(&options, &create_test_config()).unwrap();
        assert_eq!(resolved.provider_name, "local");
        assert_eq!(resolved.model, "other-model");
        assert_eq!(resolved.target_language, "fr");
    }

    #[test]
    fn test_resolve_falls_back_to_file_defaults() {
        let resolved =
            resolve_config(&ResolveOptions::default(), &create_test_config()).unwrap();
        assert_eq!(resolved.endpoint, "http://localhost:9000");
        assert_eq!(resolved.model, "test-model");
        assert_eq!(resolved.target_language, "ja");
        assert!(resolved.api_key.is_none());
    }

    #[test]
    fn test_resolve_unknown_provider_fails() {
        let options = ResolveOptions {
            provider: Some("nonexistent".to_string()),
            ..ResolveOptions::default()
        };

        let result = resolve_config(&options, &create_test_config());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_resolve_model_falls_back_to_provider_list() {
        let mut config = create_test_config();
        config.lingo.model = None;

        let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();
        assert_eq!(resolved.model, "test-model");
    }

    #[test]
    #[serial]
    fn test_resolve_builtin_default_provider() {
        unsafe { std::env::set_var(DEFAULT_API_KEY_ENV, "test-key") };

        let resolved =
            resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();
        assert_eq!(resolved.provider_name, DEFAULT_PROVIDER);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.model, DEFAULT_MODEL);
        assert_eq!(resolved.target_language, DEFAULT_TARGET_LANGUAGE);
        assert_eq!(resolved.api_key, Some("test-key".to_string()));

        unsafe { std::env::remove_var(DEFAULT_API_KEY_ENV) };
    }

    #[test]
    #[serial]
    fn test_resolve_missing_api_key_fails() {
        unsafe { std::env::remove_var(DEFAULT_API_KEY_ENV) };

        let result = resolve_config(&ResolveOptions::default(), &ConfigFile::default());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key"));
    }

    #[test]
    #[serial]
    fn test_provider_api_key_env_beats_config_value() {
        unsafe { std::env::set_var("LINGO_TEST_API_KEY", "env-key") };

        let provider = ProviderConfig {
            endpoint: "https://api.example.com".to_string(),
            api_key: Some("file-key".to_string()),
            api_key_env: Some("LINGO_TEST_API_KEY".to_string()),
            models: vec![],
        };
        assert_eq!(provider.get_api_key(), Some("env-key".to_string()));

        unsafe { std::env::remove_var("LINGO_TEST_API_KEY") };
        assert_eq!(provider.get_api_key(), Some("file-key".to_string()));
    }
}
