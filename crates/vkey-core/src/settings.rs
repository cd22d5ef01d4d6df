// Vkey Settings Module
// User-configurable device and typing options loaded from TOML

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default name advertised by the virtual device
pub const DEFAULT_DEVICE_NAME: &str = "virtual-keyboard";

/// uinput allows at most 80 bytes including the terminating NUL
const MAX_DEVICE_NAME_LEN: usize = 79;

/// Settings for the virtual keyboard
///
/// These settings are loaded from a TOML file (default:
/// ~/.config/vkey/settings.toml). Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Name the virtual device advertises to the input subsystem
    device_name: String,

    /// Wait after creating the device before sending events
    settle_delay_ms: u64,

    /// Pause between typed characters
    char_delay_ms: u64,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    device: Option<DeviceSettings>,

    #[serde(default)]
    typing: Option<TypingSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct DeviceSettings {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    settle_ms: Option<u64>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TypingSettings {
    #[serde(default)]
    char_delay_ms: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create settings with built-in defaults
    pub fn new() -> Self {
        Self {
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            settle_delay_ms: 0,
            char_delay_ms: 0,
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        log::debug!("loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(device) = toml_settings.device {
            if let Some(name) = device.name {
                validate_device_name(&name)?;
                settings.device_name = name;
            }
            if let Some(settle_ms) = device.settle_ms {
                settings.settle_delay_ms = settle_ms;
            }
        }

        if let Some(typing) = toml_settings.typing {
            if let Some(char_delay_ms) = typing.char_delay_ms {
                settings.char_delay_ms = char_delay_ms;
            }
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vkey").join("settings.toml"))
    }

    /// Load from default location (~/.config/vkey/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        // Return default settings if file doesn't exist
        Ok(Self::new())
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn char_delay(&self) -> Duration {
        Duration::from_millis(self.char_delay_ms)
    }

    /// File these settings were read from, if any
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}

fn validate_device_name(name: &str) -> Result<(), SettingsError> {
    if name.trim().is_empty() {
        return Err(SettingsError::InvalidValue(
            "device name cannot be empty".to_string(),
        ));
    }
    if name.len() > MAX_DEVICE_NAME_LEN {
        return Err(SettingsError::InvalidValue(format!(
            "device name is {} bytes, at most {} allowed",
            name.len(),
            MAX_DEVICE_NAME_LEN
        )));
    }
    if name.contains('\0') {
        return Err(SettingsError::InvalidValue(
            "device name cannot contain NUL".to_string(),
        ));
    }
    Ok(())
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Vkey Settings
# Place this file at: ~/.config/vkey/settings.toml

[device]
# Name advertised by the virtual keyboard
name = "virtual-keyboard"
# Milliseconds to wait after creating the device before sending keys.
# Raise this if the first keystrokes get lost.
settle_ms = 0

[typing]
# Milliseconds to pause between typed characters
char_delay_ms = 0
"#
}
