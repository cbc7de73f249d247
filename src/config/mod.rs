//! Configuration file management and provider settings.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_MODEL, DEFAULT_PROVIDER, DEFAULT_TARGET_LANGUAGE, Defaults,
    ProviderConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
