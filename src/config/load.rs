use std::{env, path::PathBuf};

use super::schema::Settings;

const LOCAL_CONFIG_FILE: &str = "music-catalog.toml";

/// Configuration loading helpers.
///
/// `Settings::load` layers an optional config file under environment variables
/// (prefix `MUSIC_CATALOG__`) and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MUSIC_CATALOG")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("catalog.extensions")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.normalized_extensions().is_empty() {
            return Err("catalog.extensions must contain at least one extension".to_string());
        }
        if self.catalog.output.as_os_str().is_empty() {
            return Err("catalog.output must not be empty".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `MUSIC_CATALOG_CONFIG_PATH`, a
/// `music-catalog.toml` in the working directory, or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MUSIC_CATALOG_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/music-catalog/config.toml`
/// or `~/.config/music-catalog/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("music-catalog").join("config.toml"))
}
