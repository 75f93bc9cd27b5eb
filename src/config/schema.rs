use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `music-catalog.toml`.
///
/// File format: TOML
/// Lookup: `MUSIC_CATALOG_CONFIG_PATH`, then `./music-catalog.toml`, then
/// `$XDG_CONFIG_HOME/music-catalog/config.toml` or `~/.config/music-catalog/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MUSIC_CATALOG__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Root of the album tree that gets scanned.
    pub songs_dir: PathBuf,
    /// Manifest file, overwritten on every run.
    pub output: PathBuf,
    /// Directory the manifest's image paths point into. Never read.
    pub image_dir: String,
    /// Segment prepended to every track path written to the manifest.
    pub track_path_prefix: String,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            songs_dir: PathBuf::from("sounds"),
            output: PathBuf::from("albums.txt"),
            image_dir: "media".to_string(),
            track_path_prefix: "sounds".to_string(),
            extensions: vec!["mp3".into()],
            follow_links: false,
            include_hidden: true,
        }
    }
}

impl CatalogSettings {
    /// Normalized extension list: lowercase, no leading dot, blanks dropped.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    }
}
