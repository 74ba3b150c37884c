//! Persisted user preferences.
//!
//! Stored as a flat JSON object in `~/.hnr/settings.json`:
//!
//! ```json
//! { "theme": "dark", "category": "best" }
//! ```
//!
//! Missing, unreadable or invalid values fall back to defaults; the file is
//! never a reason to refuse to start.

use serde_json::{Map, Value};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::SettingsError;
use crate::models::Category;

/// The settings file name.
const SETTINGS_FILE: &str = "settings.json";

pub const THEME_KEY: &str = "theme";
pub const CATEGORY_KEY: &str = "category";

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// The two durable preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub theme: Theme,
    pub category: Category,
}

/// Key-value store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at `settings.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SETTINGS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw string value for `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.read_map()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Set `key` to `value`, keeping every other key in the file.
    pub fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut map = self.read_map();
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map)
    }

    /// Typed view with per-key fallbacks (`light`, `top`).
    pub fn load(&self) -> Settings {
        let theme = self
            .get(THEME_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let category = self
            .get(CATEGORY_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Settings { theme, category }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let mut map = self.read_map();
        map.insert(
            THEME_KEY.to_string(),
            Value::String(settings.theme.as_str().to_string()),
        );
        map.insert(
            CATEGORY_KEY.to_string(),
            Value::String(settings.category.as_str().to_string()),
        );
        self.write_map(&map)
    }

    fn read_map(&self) -> Map<String, Value> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return Map::new(),
        };

        match serde_json::from_reader::<_, Value>(BufReader::new(file)) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::warn!("Ignoring unreadable settings file {}", self.path.display());
                Map::new()
            }
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| SettingsError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let write_err = |source| SettingsError::Write {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, map)?;
        writer.flush().map_err(write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> SettingsStore {
        SettingsStore::in_dir(temp_dir.path().join(".hnr"))
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = store(&temp_dir).load();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.category, Category::Top);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        let settings = Settings {
            theme: Theme::Dark,
            category: Category::Show,
        };

        store.save(&settings).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_invalid_category_falls_back_to_top() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        store.set(THEME_KEY, "dark").unwrap();
        store.set(CATEGORY_KEY, "frontpage").unwrap();

        let settings = store.load();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.category, Category::Top);
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_set_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        store.set("extra", "kept").unwrap();
        store.set(THEME_KEY, "dark").unwrap();

        assert_eq!(store.get("extra"), Some("kept".to_string()));
        assert_eq!(store.get(THEME_KEY), Some("dark".to_string()));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_non_string_value_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"theme": 1, "category": "ask"}"#).unwrap();

        let settings = store.load();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.category, Category::Ask);
    }

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
