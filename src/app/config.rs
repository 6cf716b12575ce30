use crate::app::keys::KeyConfig;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Environment variable holding the playlist API base URL.
pub const ENV_API_BASE_URL: &str = "VIBELIST_API_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("no playlist API base URL: pass --api-url, set VIBELIST_API_BASE_URL or add api_base_url to config.toml")]
    MissingApiUrl,
}

/// User-editable configuration, stored in `config.toml`.
/// Read once at startup; nothing is written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    pub keys: KeyConfig,
    pub theme: Theme,
}

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("vibelist")
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    /// Missing file → defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the user config from its standard location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::get_config_path())
    }

    /// Template printed by `--generate-config`.
    pub fn default_toml() -> String {
        let body = toml::to_string_pretty(&Self::default()).unwrap_or_default();
        format!("# api_base_url = \"http://localhost:8000\"\n\n{body}")
    }
}

/// First non-blank of: CLI flag, environment, config file.
pub fn resolve_api_base_url(
    cli: Option<&str>,
    env: Option<&str>,
    file: Option<&str>,
) -> Result<String, ConfigError> {
    [cli, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::MissingApiUrl)
}

/// Settles the config and API base URL at startup. A config file that
/// fails to load falls back to defaults, unless it was the only place the
/// URL could have come from; then its own error is returned.
pub fn resolve_startup(
    cli: Option<&str>,
    env: Option<&str>,
    loaded: Result<AppConfig, ConfigError>,
) -> Result<(AppConfig, String), ConfigError> {
    match loaded {
        Ok(config) => {
            let url = resolve_api_base_url(cli, env, config.api_base_url.as_deref())?;
            Ok((config, url))
        }
        Err(e) => {
            let Ok(url) = resolve_api_base_url(cli, env, None) else {
                return Err(e);
            };
            warn!(error = %e, "using default configuration");
            Ok((AppConfig::default(), url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolution_order() {
        assert_eq!(
            resolve_api_base_url(Some("http://cli"), Some("http://env"), Some("http://file"))
                .unwrap(),
            "http://cli"
        );
        assert_eq!(
            resolve_api_base_url(None, Some("http://env"), Some("http://file")).unwrap(),
            "http://env"
        );
        assert_eq!(
            resolve_api_base_url(Some("  "), None, Some(" http://file ")).unwrap(),
            "http://file"
        );
        assert!(matches!(
            resolve_api_base_url(None, Some(""), None),
            Err(ConfigError::MissingApiUrl)
        ));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_base_url = \"http://localhost:8000\"\n\n[keys]\nquit = \"x\""
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.api_base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.keys.quit, "x");
        assert_eq!(config.keys.generate, "g");
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url = [").unwrap();
        assert!(matches!(
            AppConfig::load_from(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_default_template_parses_back() {
        let template = AppConfig::default_toml();
        assert!(template.starts_with("# api_base_url"));
        let parsed: AppConfig = toml::from_str(&template).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_broken_file_without_other_url_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url = \"http://localhost:8000\"\n[keys\n").unwrap();

        let result = resolve_startup(None, None, AppConfig::load_from(file.path()));
        match result {
            Err(e @ ConfigError::Parse { .. }) => {
                assert!(e.to_string().contains("failed to parse"), "{e}");
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_broken_file_falls_back_when_url_given_elsewhere() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url = [").unwrap();

        let (config, url) =
            resolve_startup(None, Some("http://env"), AppConfig::load_from(file.path())).unwrap();
        assert_eq!(url, "http://env");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_startup_uses_file_url() {
        let config = AppConfig {
            api_base_url: Some("http://file".into()),
            ..AppConfig::default()
        };
        let (_, url) = resolve_startup(None, None, Ok(config)).unwrap();
        assert_eq!(url, "http://file");
        assert!(matches!(
            resolve_startup(None, None, Ok(AppConfig::default())),
            Err(ConfigError::MissingApiUrl)
        ));
    }
}
