//! Target and token configuration
//!
//! Values are layered: config file, then the legacy `~/.tsuru_target` and
//! `~/.tsuru_token` files for anything still missing, then environment
//! variables, then the `--target` flag.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tsuru_admin_client::{ClientError, HttpClient};

const CONFIG_ENV: &str = "TSURU_ADMIN_CONFIG";
const TARGET_ENV: &str = "TSURU_TARGET";
const TOKEN_ENV: &str = "TSURU_TOKEN";

/// Process-wide CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the tsuru API
    #[serde(default)]
    pub target: Option<String>,
    /// Token sent in the `Authorization` header
    #[serde(default)]
    pub token: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from the default locations and the process environment
    ///
    /// # Errors
    /// Returns error if an existing config file cannot be read or parsed
    pub fn load_default() -> eyre::Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("tsuru-admin/config.toml")));
        Self::load_layered(path.as_deref(), dirs::home_dir().as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Resolve configuration from explicit sources
    ///
    /// # Errors
    /// Returns error if `config_path` exists but cannot be parsed
    pub fn load_layered(
        config_path: Option<&Path>,
        home: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> eyre::Result<Self> {
        let mut config = match config_path {
            Some(path) if path.exists() => Self::load(path)?,
            _ => {
                tracing::debug!("no config file found");
                Config::default()
            }
        };

        if let Some(home) = home {
            if config.target.is_none() {
                config.target = read_legacy(&home.join(".tsuru_target"));
            }
            if config.token.is_none() {
                config.token = read_legacy(&home.join(".tsuru_token"));
            }
        }

        if let Some(target) = env(TARGET_ENV).filter(|v| !v.trim().is_empty()) {
            config.target = Some(target);
        }
        if let Some(token) = env(TOKEN_ENV).filter(|v| !v.trim().is_empty()) {
            config.token = Some(token);
        }

        Ok(config)
    }

    /// Override the target, typically from the command line
    #[must_use]
    pub fn with_target(mut self, target: Option<&str>) -> Self {
        if let Some(target) = target {
            self.target = Some(target.to_string());
        }
        self
    }

    /// Build the API client for this configuration
    ///
    /// # Errors
    /// Returns [`ClientError::MissingTarget`] when no target is set, or a URL
    /// error when the target is invalid.
    pub fn client(&self) -> Result<HttpClient, ClientError> {
        let target = self
            .target
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ClientError::MissingTarget)?;
        let client = HttpClient::new(target)?;
        Ok(match &self.token {
            Some(token) => client.with_token(token.clone()),
            None => client,
        })
    }
}

fn read_legacy(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let value = content.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "target = \"http://tsuru.example.com\"\ntoken = \"abc\"\n").unwrap();

        let config = Config::load_layered(Some(&path), None, no_env).unwrap();
        assert_eq!(config.target.as_deref(), Some("http://tsuru.example.com"));
        assert_eq!(config.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_legacy_files_fill_missing_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "token = \"from-file\"\n").unwrap();
        fs::write(dir.path().join(".tsuru_target"), "http://localhost\n").unwrap();
        fs::write(dir.path().join(".tsuru_token"), "legacy").unwrap();

        let config = Config::load_layered(Some(&path), Some(dir.path()), no_env).unwrap();
        assert_eq!(config.target.as_deref(), Some("http://localhost"));
        assert_eq!(config.token.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_env_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".tsuru_target"), "http://localhost").unwrap();
        let env: HashMap<&str, String> = HashMap::from([
            (TARGET_ENV, "http://env.example.com".to_string()),
            (TOKEN_ENV, String::new()),
        ]);

        let config = Config::load_layered(None, Some(dir.path()), |key| env.get(key).cloned())
            .unwrap();
        assert_eq!(config.target.as_deref(), Some("http://env.example.com"));
        assert_eq!(config.token, None);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "target = [").unwrap();

        assert!(Config::load_layered(Some(&path), None, no_env).is_err());
    }

    #[test]
    fn test_client_requires_target() {
        let err = Config::default().client().unwrap_err();
        assert!(matches!(err, ClientError::MissingTarget));

        let config = Config::default().with_target(Some("http://localhost:8080"));
        assert!(config.client().is_ok());
    }
}
