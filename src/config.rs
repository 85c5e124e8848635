use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    /// Grid column count; also bounds the favorites row.
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Forced 2-letter locale, overriding $LANG.
    #[serde(default)]
    pub locale: Option<String>,
}

fn default_columns() -> usize {
    6
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            locale: None,
        }
    }
}

pub fn load_config() -> Result<Config> {
    let proj_dirs = ProjectDirs::from("org", "gridrun", "gridrun");
    let config_path = if let Some(dirs) = &proj_dirs {
        dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config.toml")
    };

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// The locale used for descriptor parsing: a forced value wins, then
/// the config file, then the first two characters of $LANG, then "en".
pub fn resolve_locale(config: &Config, forced: Option<&str>) -> String {
    if let Some(lang) = forced {
        return lang.to_string();
    }
    if let Some(lang) = &config.general.locale {
        return lang.clone();
    }
    env::var("LANG")
        .ok()
        .and_then(|lang| locale_from_lang(&lang))
        .unwrap_or_else(|| "en".to_string())
}

fn locale_from_lang(lang: &str) -> Option<String> {
    lang.get(..2).map(String::from)
}
