//! Durable storage for the user's preferences.
//!
//! One JSON record lives at `~/.prelude/config.json`. Loading never fails the
//! caller: a missing or broken file falls back to the defaults. There is no
//! caching and no locking; each invocation re-reads the file, and concurrent
//! invocations race with last-writer-wins semantics.

use std::{
    fs,
    path::{Path, PathBuf},
};

use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

/// Directory holding the configuration, under the user's home.
pub const CONFIG_DIR_NAME: &str = ".prelude";

/// File name of the settings record inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.json";

/// The persisted user preferences.
///
/// Every field falls back to its default when missing from the file, so a
/// loaded record is always fully populated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Whether a message is shown when `prelude` runs with no arguments.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Whether ANSI styling is applied at all.
    #[serde(default = "default_true")]
    pub colorful: bool,
    /// Whether a box border is drawn around the message.
    #[serde(default = "default_true")]
    pub border: bool,
    /// The user's message; empty means "use the default message".
    #[serde(default)]
    pub custom_message: String,
    /// A named color, `random`, `default`, or a `#` hex value.
    #[serde(default = "default_color")]
    pub border_color: String,
    /// A named color, `default`, or a `#` hex value.
    #[serde(default = "default_color")]
    pub text_color: String,
}

const fn default_true() -> bool {
    true
}

fn default_color() -> String {
    "default".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            colorful: true,
            border: true,
            custom_message: String::new(),
            border_color: default_color(),
            text_color: default_color(),
        }
    }
}

/// `~/.prelude`, or a relative fallback when the home directory is unknown.
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// The settings file path, `~/.prelude/config.json`.
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Reads the settings from the default location.
pub fn load() -> Settings {
    load_from(&config_file())
}

/// Reads the settings from `path`.
///
/// A missing file yields the defaults silently; an unreadable or unparsable
/// file yields the defaults with a diagnostic.
pub fn load_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{}: loading config: {err}", "error".red());
            return Settings::default();
        }
    };
    match serde_json::from_str(&text) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}: loading config: {err}", "error".red());
            Settings::default()
        }
    }
}

/// Writes the settings to the default location, creating `~/.prelude` first
/// if needed.
pub fn save(settings: &Settings) -> bool {
    save_to(settings, &config_file())
}

/// Writes the settings to `path`.
///
/// Returns whether the write succeeded. A failed write prints a diagnostic
/// and leaves the previous on-disk state as it was.
pub fn save_to(settings: &Settings, path: &Path) -> bool {
    if let Some(dir) = path.parent() {
        if let Err(err) = fs::create_dir_all(dir) {
            eprintln!("{}: saving config: {err}", "error".red());
            return false;
        }
    }
    let json = match serde_json::to_string_pretty(settings) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("{}: saving config: {err}", "error".red());
            return false;
        }
    };
    if let Err(err) = fs::write(path, json) {
        eprintln!("{}: saving config: {err}", "error".red());
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_file_yields_the_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_from(&dir.path().join("config.json"));
        assert_eq!(settings, Settings::default());
        assert!(settings.enabled);
        assert!(settings.colorful);
        assert!(settings.border);
        assert_eq!(settings.custom_message, "");
        assert_eq!(settings.border_color, "default");
        assert_eq!(settings.text_color, "default");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);

        let settings = Settings {
            enabled: false,
            colorful: true,
            border: false,
            custom_message: "Code with confidence".to_string(),
            border_color: "#00ff00".to_string(),
            text_color: "gray".to_string(),
        };
        assert!(save_to(&settings, &path));
        assert_eq!(load_from(&path), settings);
    }

    #[test]
    fn save_creates_the_config_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        assert!(save_to(&Settings::default(), &path));
        assert!(path.exists());
    }

    #[test]
    fn unparsable_file_yields_the_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json at all {").unwrap();
        assert_eq!(load_from(&path), Settings::default());
    }

    #[test]
    fn missing_fields_fall_back_to_their_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "enabled": false }"#).unwrap();

        let settings = load_from(&path);
        assert!(!settings.enabled);
        assert!(settings.colorful);
        assert!(settings.border);
        assert_eq!(settings.border_color, "default");
    }

    #[test]
    fn fields_are_camel_case_on_disk() {
        let json = serde_json::to_string_pretty(&Settings::default()).unwrap();
        assert!(json.contains("\"customMessage\""));
        assert!(json.contains("\"borderColor\""));
        assert!(json.contains("\"textColor\""));
    }
}
