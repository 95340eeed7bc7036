//! Startup configuration, read from the environment.

use std::path::PathBuf;

use tasklist::{InputPolicy, JsonFilePreferences, MemoryPreferences, PreferenceStore};

/// Overrides the preference file location.
pub const PREFS_PATH_VAR: &str = "TASKLIST_PREFS";
/// `1`/`true`/`yes` rejects whitespace-only tasks and trims input.
pub const TRIM_INPUT_VAR: &str = "TASKLIST_TRIM_INPUT";
/// Log filter used when `RUST_LOG` is not set.
pub const LOG_VAR: &str = "TASKLIST_LOG";

/// Application config.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where the theme preference lives. `None` keeps it in memory only.
    pub prefs_path: Option<PathBuf>,
    pub input_policy: InputPolicy,
    pub log_filter: String,
}

impl AppConfig {
    pub const APP_NAME: &'static str = "Task List";
    pub const WINDOW_SIZE: [f32; 2] = [360.0, 560.0];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [280.0, 360.0];

    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let prefs_path = var(PREFS_PATH_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .or_else(default_prefs_path);

        let input_policy = if var(TRIM_INPUT_VAR).is_some_and(|v| parse_flag(&v)) {
            InputPolicy::TrimmedEmpty
        } else {
            InputPolicy::LiteralEmpty
        };

        let log_filter = var(LOG_VAR)
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| "info".to_owned());

        Self {
            prefs_path,
            input_policy,
            log_filter,
        }
    }

    /// Open the configured preference store.
    pub fn preferences(&self) -> Box<dyn PreferenceStore> {
        match &self.prefs_path {
            Some(path) => Box::new(JsonFilePreferences::open_or_default(path)),
            None => {
                tracing::warn!("no config directory, theme preference will not be saved");
                Box::new(MemoryPreferences::default())
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

fn default_prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tasklist").join("preferences.json"))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
