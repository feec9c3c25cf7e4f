use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::{Series, SeriesType};
use crate::editor::{FieldOptions, NamedOption};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Tracks and renders the language profile field.
    pub show_language_profile: bool,
    pub options: FieldOptions,
    /// Seed records for the in-memory backend.
    pub series: Vec<Series>,
}

impl AppConfig {
    /// Starter config written by `init-config`.
    pub fn sample() -> Self {
        let series = |id: i32, title: &str| Series {
            id,
            title: title.to_string(),
            monitored: true,
            quality_profile_id: 1,
            language_profile_id: Some(1),
            series_type: SeriesType::Standard,
            season_folder: true,
            root_folder_path: "/tv".to_string(),
            tags: Default::default(),
        };

        Self {
            show_language_profile: true,
            options: FieldOptions {
                quality_profiles: vec![
                    NamedOption {
                        id: 1,
                        name: "Any".into(),
                    },
                    NamedOption {
                        id: 2,
                        name: "HD-1080p".into(),
                    },
                ],
                language_profiles: vec![NamedOption {
                    id: 1,
                    name: "English".into(),
                }],
                root_folders: vec!["/tv".into(), "/anime".into()],
            },
            series: vec![series(1, "The Expanse"), series(2, "Dark"), series(3, "Severance")],
        }
    }
}

pub fn load_config() -> AppConfig {
    let path = config_path();
    if !path.exists() {
        return AppConfig::default();
    }
    load_config_from(&path).unwrap_or_else(|err| {
        log::warn!("Ignoring unreadable config {}: {err:#}", path.display());
        AppConfig::default()
    })
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("Failed to parse config {}", path.display()))
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(&config_path(), config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SERIES_EDITOR_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    if let Some(dir) = dirs::config_dir() {
        return dir.join("series-editor").join("config.toml");
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".series-editor")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sample_config_round_trips_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        save_config_to(&path, &AppConfig::sample()).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded, AppConfig::sample());
    }

    #[test]
    fn partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "show_language_profile = true\n").unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert!(loaded.show_language_profile);
        assert!(loaded.series.is_empty());
        assert!(loaded.options.root_folders.is_empty());
    }

    #[test]
    fn malformed_config_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "show_language_profile = \"sometimes\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }
}
