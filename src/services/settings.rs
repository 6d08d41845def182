use crate::domain::constants::API_KEY_ENV;
use crate::services::storage::settings_path;
use serde::Deserialize;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("JINA_API_KEY is not set; export the content-fetch API key before running")]
    MissingApiKey,
}

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub general: General,
}

#[derive(Debug, Deserialize, Default)]
pub struct General {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub fetch_timeout_ms: Option<u64>,
    #[serde(default)]
    pub fetch_base_url: Option<String>,
}

/// Optional overrides from `~/.config/artgen/config.toml`; defaults apply
/// when the file is absent.
pub fn load_settings() -> anyhow::Result<Settings> {
    let path = settings_path()?;
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// The fetch credential is never stored in source or config; it must arrive
/// through the environment at process start.
pub fn resolve_api_key() -> Result<String, ConfigError> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey),
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;

    #[test]
    fn settings_parse_with_partial_general_table() {
        let s: Settings = toml::from_str(
            r#"[general]
fetch_timeout_ms = 5000
"#,
        )
        .expect("parse settings");
        assert_eq!(s.general.fetch_timeout_ms, Some(5000));
        assert!(s.general.author.is_none());
        assert!(s.general.fetch_base_url.is_none());
    }

    #[test]
    fn settings_default_when_empty() {
        let s: Settings = toml::from_str("").expect("parse empty settings");
        assert!(s.general.author.is_none());
    }
}
