//! Application settings.
//!
//! What the original app kept as ambient globals (username, theme preset,
//! font size, pomodoro durations) is one explicit state object here, with
//! load/save accessors. Each value still lives under its own store key so
//! the per-key storage contract and the backup format stay unchanged.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{keys, Store};

/// Pomodoro durations, persisted under `pomodoro_settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PomodoroSettings {
    pub focus_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub sessions_before_long_break: u32,
    pub auto_start_breaks: bool,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            sessions_before_long_break: 4,
            auto_start_breaks: false,
        }
    }
}

/// Explicit application state object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub username: Option<String>,
    pub theme_preset: String,
    pub font_size: u32,
    pub pomodoro: PomodoroSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            username: None,
            theme_preset: default_theme(),
            font_size: default_font_size(),
            pomodoro: PomodoroSettings::default(),
        }
    }
}

fn default_theme() -> String {
    "classic".to_string()
}

fn default_font_size() -> u32 {
    16
}

/// Lenient scalar wrappers: a malformed stored value falls back to the
/// field default instead of poisoning the whole settings object.
#[derive(Default, Serialize, Deserialize)]
struct StoredString(Option<String>);

#[derive(Default, Serialize, Deserialize)]
struct StoredU32(Option<u32>);

impl AppSettings {
    /// Read all settings keys, substituting defaults for anything absent
    /// or malformed.
    ///
    /// # Errors
    /// Returns an error only if a store query fails.
    pub fn load(store: &Store) -> Result<Self> {
        let StoredString(username) = store.get_json(keys::USERNAME)?;
        let StoredString(theme) = store.get_json(keys::THEME_PRESET)?;
        let StoredU32(font_size) = store.get_json(keys::FONT_SIZE)?;
        let pomodoro: PomodoroSettings = store.get_json(keys::POMODORO_SETTINGS)?;
        Ok(Self {
            username,
            theme_preset: theme.unwrap_or_else(default_theme),
            font_size: font_size.unwrap_or_else(default_font_size),
            pomodoro,
        })
    }

    /// Write every settings value back under its own key.
    ///
    /// # Errors
    /// Returns an error if any write fails.
    pub fn save(&self, store: &Store) -> Result<()> {
        store.put_json(keys::USERNAME, &self.username)?;
        store.put_json(keys::THEME_PRESET, &self.theme_preset)?;
        store.put_json(keys::FONT_SIZE, &self.font_size)?;
        store.put_json(keys::POMODORO_SETTINGS, &self.pomodoro)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_store_empty() {
        let store = Store::open_memory().unwrap();
        let settings = AppSettings::load(&store).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.theme_preset, "classic");
        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.pomodoro.focus_minutes, 25);
    }

    #[test]
    fn save_load_roundtrip() {
        let store = Store::open_memory().unwrap();
        let settings = AppSettings {
            username: Some("sam".to_string()),
            theme_preset: "midnight".to_string(),
            font_size: 18,
            pomodoro: PomodoroSettings {
                focus_minutes: 50,
                ..PomodoroSettings::default()
            },
        };
        settings.save(&store).unwrap();
        assert_eq!(AppSettings::load(&store).unwrap(), settings);
    }

    #[test]
    fn values_land_under_their_own_keys() {
        let store = Store::open_memory().unwrap();
        let mut settings = AppSettings::default();
        settings.username = Some("sam".to_string());
        settings.save(&store).unwrap();
        assert_eq!(
            store.get_raw(keys::USERNAME).unwrap().as_deref(),
            Some("\"sam\"")
        );
        assert_eq!(store.get_raw(keys::FONT_SIZE).unwrap().as_deref(), Some("16"));
    }

    #[test]
    fn malformed_scalar_falls_back_to_default() {
        let store = Store::open_memory().unwrap();
        store.put_raw(keys::FONT_SIZE, "\"huge\"").unwrap();
        store.put_raw(keys::POMODORO_SETTINGS, "[]").unwrap();
        let settings = AppSettings::load(&store).unwrap();
        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.pomodoro, PomodoroSettings::default());
    }
}
