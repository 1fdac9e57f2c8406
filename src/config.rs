//! Startup configuration.
//!
//! Values come from a TOML file; every key is optional. The file is chosen
//! in this order:
//!
//! 1. `--config <path>` on the command line
//! 2. `SENTINEL_CONFIG` environment variable
//! 3. `$XDG_CONFIG_HOME/sentinel-console/config.toml`, falling back to
//!    `~/.config/sentinel-console/config.toml`, only if it exists
//!
//! With none of these the built-in defaults apply. An explicitly named file
//! that cannot be read is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const CONFIG_ENV: &str = "SENTINEL_CONFIG";
const APP_DIR: &str = "sentinel-console";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "CyberSentinel".into(),
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppearanceConfig {
    pub theme: Theme,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DataConfig {
    /// JSON catalog replacing the built-in sample data.
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub appearance: AppearanceConfig,
    pub data: DataConfig,
}

impl AppConfig {
    pub fn from_toml_str(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw, path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        if !(w.width.is_finite() && w.width >= 320.0) {
            return Err(ConfigError::InvalidValue {
                field: "window.width",
                reason: format!("{} is below the 320px minimum", w.width),
            });
        }
        if !(w.height.is_finite() && w.height >= 240.0) {
            return Err(ConfigError::InvalidValue {
                field: "window.height",
                reason: format!("{} is below the 240px minimum", w.height),
            });
        }
        if w.title.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "window.title",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

/// Where the config file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Cli(PathBuf),
    Env(PathBuf),
    UserDir(PathBuf),
    Defaults,
}

/// Pick the config file without reading it.
pub fn resolve_source(
    cli: Option<&Path>,
    env: Option<PathBuf>,
    user_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(path) = cli {
        return ConfigSource::Cli(path.to_path_buf());
    }
    if let Some(path) = env.filter(|p| !p.as_os_str().is_empty()) {
        return ConfigSource::Env(path);
    }
    match user_dir {
        Some(path) if path.is_file() => ConfigSource::UserDir(path),
        _ => ConfigSource::Defaults,
    }
}

/// `$XDG_CONFIG_HOME/sentinel-console/config.toml` or the `~/.config` equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join(APP_DIR).join(CONFIG_FILE));
    }
    let home = std::env::var_os("HOME").filter(|h| !h.is_empty())?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILE),
    )
}

pub fn load_from(source: &ConfigSource) -> Result<AppConfig, ConfigError> {
    let config = match source {
        ConfigSource::Cli(path) | ConfigSource::Env(path) | ConfigSource::UserDir(path) => {
            AppConfig::from_file(path)?
        }
        ConfigSource::Defaults => AppConfig::default(),
    };
    info!(?source, "configuration resolved");
    debug!(?config, "effective configuration");
    Ok(config)
}

/// Resolve and load using the process environment.
pub fn load(cli: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let source = resolve_source(cli, env, default_config_path());
    load_from(&source)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = AppConfig::from_toml_str("", Path::new("empty.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.window.title, "CyberSentinel");
        assert_eq!(config.appearance.theme, Theme::Dark);
        assert!(config.data.catalog.is_none());
    }

    #[test]
    fn partial_file_overrides_named_keys() {
        let raw = r#"
            [window]
            width = 1600.0

            [appearance]
            theme = "light"

            [data]
            catalog = "/srv/soc/catalog.json"
        "#;
        let config = AppConfig::from_toml_str(raw, Path::new("c.toml")).unwrap();
        assert_eq!(config.window.width, 1600.0);
        assert_eq!(config.window.height, 800.0);
        assert_eq!(config.appearance.theme, Theme::Light);
        assert_eq!(
            config.data.catalog.as_deref(),
            Some(Path::new("/srv/soc/catalog.json"))
        );
    }

    #[test]
    fn bad_theme_is_a_parse_error() {
        let err = AppConfig::from_toml_str("[appearance]\ntheme = \"neon\"", Path::new("c.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config c.toml"));
    }

    #[test]
    fn tiny_window_is_rejected() {
        let err =
            AppConfig::from_toml_str("[window]\nwidth = 10.0", Path::new("c.toml")).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "window.width",
                ..
            }
        ));
    }

    #[test]
    fn cli_beats_env_beats_user_dir() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("config.toml");
        std::fs::write(&user, "").unwrap();

        let cli = PathBuf::from("/cli.toml");
        let env = PathBuf::from("/env.toml");

        assert_eq!(
            resolve_source(Some(&cli), Some(env.clone()), Some(user.clone())),
            ConfigSource::Cli(cli)
        );
        assert_eq!(
            resolve_source(None, Some(env.clone()), Some(user.clone())),
            ConfigSource::Env(env)
        );
        assert_eq!(
            resolve_source(None, Some(PathBuf::new()), Some(user.clone())),
            ConfigSource::UserDir(user)
        );
    }

    #[test]
    fn missing_user_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("nope.toml");
        let source = resolve_source(None, None, Some(absent));
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(load_from(&source).unwrap(), AppConfig::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = ConfigSource::Cli(dir.path().join("missing.toml"));
        assert!(matches!(load_from(&source), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window]\ntitle = \"Night Shift\"").unwrap();
        let config = load_from(&ConfigSource::Env(file.path().to_path_buf())).unwrap();
        assert_eq!(config.window.title, "Night Shift");
    }
}
