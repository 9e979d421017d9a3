//! User configuration: a small YAML file under the platform config dir,
//! overridable from the command line.
//!
//! ```text
//! # ~/.config/customer-desk/config.yaml
//! customers_url: https://example.com/settings.json
//! language: fr
//! request_timeout_secs: 10
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_CUSTOMERS_URL, DEFAULT_TIMEOUT_SECS};

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub customers_url: String,
    pub language: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            customers_url: String::from(DEFAULT_CUSTOMERS_URL),
            language: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// CLI flags win over the file
    pub fn apply(&mut self, args: &CliArgs) {
        if let Some(url) = &args.url {
            self.customers_url = url.clone();
        }
        if let Some(lang) = &args.lang {
            self.language = Some(lang.clone());
        }
    }
}

/// Command-line flags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub url: Option<String>,
    pub lang: Option<String>,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    pub fn from_env() -> Result<Self> {
        Self::parse(pico_args::Arguments::from_env())
    }

    pub fn from_vec(args: Vec<OsString>) -> Result<Self> {
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let parsed = CliArgs {
            url: args.opt_value_from_str("--url")?,
            lang: args.opt_value_from_str("--lang")?,
            config: args.opt_value_from_str("--config")?,
        };

        let remaining = args.finish();
        if !remaining.is_empty() {
            anyhow::bail!("Unexpected arguments: {:?}", remaining);
        }
        Ok(parsed)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE))
}

/// Load from the default location; defaults when there is none
pub fn load() -> Result<Config> {
    match default_config_path() {
        Some(path) => load_from_path(&path),
        None => Ok(Config::default()),
    }
}

/// Load from `path`; a missing file yields defaults
pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_yaml::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_yaml::to_string(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from_path(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = Config {
            customers_url: "http://localhost:8080/customers".into(),
            language: Some("fr".into()),
            request_timeout_secs: 5,
        };
        save_to_path(&config, &path).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "language: fr\n").unwrap();
        let config = load_from_path(&path).unwrap();
        assert_eq!(config.language.as_deref(), Some("fr"));
        assert_eq!(config.customers_url, DEFAULT_CUSTOMERS_URL);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "request_timeout_secs: [oops").unwrap();
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs::from_vec(vec![
            "--url".into(),
            "http://127.0.0.1:9000/c.json".into(),
            "--lang".into(),
            "en-US".into(),
        ])
        .unwrap();
        let mut config = Config {
            language: Some("fr".into()),
            ..Config::default()
        };
        config.apply(&args);
        assert_eq!(config.customers_url, "http://127.0.0.1:9000/c.json");
        assert_eq!(config.language.as_deref(), Some("en-US"));
        assert!(args.config.is_none());

        assert!(CliArgs::from_vec(vec!["--bogus".into()]).is_err());
    }
}
