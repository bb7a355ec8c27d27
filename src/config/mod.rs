//! Configuration for the composer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/commitpad/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! The config file doubles as the theme store: toggling the theme in the
//! TUI rewrites the `theme` key in place. Every read or write failure here
//! degrades to defaults - a missing or broken store must never keep the
//! composer from starting.

use crate::tui::theme::ThemeKind;
use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default delay before an edited form re-renders the preview
const DEFAULT_PREVIEW_DEBOUNCE_MS: u64 = 50;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Active theme: "dark" or "light", persisted across runs
    pub theme: ThemeKind,

    /// Milliseconds of input quiet time before the preview re-renders
    pub preview_debounce_ms: u64,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeKind::default(),
            preview_debounce_ms: DEFAULT_PREVIEW_DEBOUNCE_MS,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level when RUST_LOG is unset: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Also write logs to rotating files
    pub file_enabled: bool,

    /// Directory for rotated log files
    pub file_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (everything optional, unknown keys ignored)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    theme: Option<String>,
    preview_debounce_ms: Option<u64>,
    logging: Option<FileLogging>,
}

/// Optional [logging] section
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/commitpad/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("commitpad").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write config template (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if present; any failure falls back to defaults
    ///
    /// The composer keeps running on a broken file: the theme store being
    /// unavailable only costs persistence.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return FileConfig::default();
            }
            Err(e) => {
                eprintln!("Warning: cannot read {}: {e}", path.display());
                return FileConfig::default();
            }
        };

        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: ignoring malformed {}: {e}", path.display());
                FileConfig::default()
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();

        // Theme: env > file > default (dark). Unknown values fall back
        // to dark rather than erroring out.
        let theme = std::env::var("COMMITPAD_THEME")
            .ok()
            .or(file.theme)
            .as_deref()
            .and_then(ThemeKind::from_config_str)
            .unwrap_or_default();

        // Preview debounce: env > file > default
        let preview_debounce_ms = std::env::var("COMMITPAD_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.preview_debounce_ms)
            .unwrap_or(DEFAULT_PREVIEW_DEBOUNCE_MS);

        let file_logging = file.logging.unwrap_or_default();
        let defaults = LoggingConfig::default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.level),
            file_enabled: file_logging.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
        };

        Self {
            theme,
            preview_debounce_ms,
            logging,
        }
    }

    /// Render the commented config template (also the first-run file)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# commitpad configuration
# Delete this file to restore defaults.

# Color theme: "dark" or "light". The TUI rewrites this key when the
# theme is toggled, so edits made while commitpad runs may be overwritten.
theme = "{theme}"

# Milliseconds of input quiet time before the preview re-renders.
preview_debounce_ms = {debounce}

[logging]
# Log level when RUST_LOG is unset: error, warn, info, debug, trace
level = "{level}"
# Also write logs to rotating files in file_dir
file_enabled = {file_enabled}
file_dir = "{file_dir}"
"#,
            theme = self.theme.config_str(),
            debounce = self.preview_debounce_ms,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme persistence
// ─────────────────────────────────────────────────────────────────────────────

/// Rewrite the `theme` key inside existing config contents
///
/// Parses the file as a TOML table so every other key and section survives.
/// Returns None when the contents cannot be parsed.
fn set_theme_key(contents: &str, theme: ThemeKind) -> Option<String> {
    let mut table: toml::Table = contents.parse().ok()?;
    table.insert(
        "theme".to_string(),
        toml::Value::String(theme.config_str().to_string()),
    );
    toml::to_string(&table).ok()
}

/// Persist the theme preference, tolerating every failure silently
///
/// A read-only filesystem or missing home directory costs nothing but
/// persistence: the session keeps the toggled theme in memory.
pub fn persist_theme(theme: ThemeKind) {
    let Some(path) = Config::config_path() else {
        return;
    };

    let updated = match std::fs::read_to_string(&path) {
        // Rewrite just the theme key, preserving user edits elsewhere
        Ok(contents) => set_theme_key(&contents, theme),
        Err(_) => None,
    }
    .unwrap_or_else(|| {
        // No file (or unparseable one): start over from the template
        let config = Config {
            theme,
            ..Config::default()
        };
        config.to_toml()
    });

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Err(e) = std::fs::write(&path, updated) {
        tracing::debug!("theme preference not persisted: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_back() {
        let config = Config::default();
        let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
        assert_eq!(file.theme.as_deref(), Some("dark"));
        assert_eq!(file.preview_debounce_ms, Some(DEFAULT_PREVIEW_DEBOUNCE_MS));
        let logging = file.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("info"));
        assert_eq!(logging.file_enabled, Some(false));
    }

    #[test]
    fn partial_file_leaves_defaults_in_place() {
        let file: FileConfig = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(file.theme.as_deref(), Some("light"));
        assert!(file.preview_debounce_ms.is_none());
        assert!(file.logging.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let file: FileConfig =
            toml::from_str("theme = \"dark\"\nfuture_knob = 3\n[logging]\nlevel = \"debug\"")
                .unwrap();
        assert_eq!(file.theme.as_deref(), Some("dark"));
        assert_eq!(file.logging.unwrap().level.as_deref(), Some("debug"));
    }

    #[test]
    fn set_theme_key_preserves_other_keys() {
        let contents =
            "theme = \"dark\"\npreview_debounce_ms = 120\n\n[logging]\nlevel = \"warn\"\n";
        let updated = set_theme_key(contents, ThemeKind::Light).unwrap();
        let file: FileConfig = toml::from_str(&updated).unwrap();
        assert_eq!(file.theme.as_deref(), Some("light"));
        assert_eq!(file.preview_debounce_ms, Some(120));
        assert_eq!(file.logging.unwrap().level.as_deref(), Some("warn"));
    }

    #[test]
    fn set_theme_key_rejects_garbage() {
        assert!(set_theme_key("not = [valid", ThemeKind::Dark).is_none());
    }
}
