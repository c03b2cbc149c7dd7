//! `BrowserSettings` persisted as pretty JSON, by default at
//! `<config dir>/settings.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::BrowserSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<BrowserSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &BrowserSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: BrowserSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise uses `settings.json` inside the platform config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: BrowserSettings::default(),
        }
    }

    fn write_file(&self, settings: &BrowserSettings) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| SettingsError::Io(format!("cannot create {}: {}", dir.display(), e)))?;
        }
        let body = serde_json::to_string_pretty(settings)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;
        fs::write(path, body)
            .map_err(|e| SettingsError::Io(format!("cannot write {}: {}", self.config_path, e)))
    }
}

/// Turns `search.engine_name` into the JSON pointer `/search/engine_name`.
fn pointer_for(key: &str) -> Result<String, SettingsError> {
    let well_formed = !key.is_empty()
        && key.split('.').all(|seg| !seg.is_empty())
        && !key.contains(['/', '~']);
    if !well_formed {
        return Err(SettingsError::InvalidKey(format!("malformed key '{}'", key)));
    }
    Ok(format!("/{}", key.replace('.', "/")))
}

impl SettingsEngineTrait for SettingsEngine {
    /// Reads the config file. A missing file means defaults.
    fn load(&mut self) -> Result<BrowserSettings, SettingsError> {
        self.settings = match fs::read_to_string(&self.config_path) {
            Ok(body) => serde_json::from_str(&body).map_err(|e| {
                SettingsError::Serialization(format!("{}: {}", self.config_path, e))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", self.config_path);
                BrowserSettings::default()
            }
            Err(e) => {
                return Err(SettingsError::Io(format!(
                    "cannot read {}: {}",
                    self.config_path, e
                )))
            }
        };
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        self.write_file(&self.settings)
    }

    fn get_settings(&self) -> &BrowserSettings {
        &self.settings
    }

    /// Replaces one leaf, e.g. `navigation.reload_pulse_ms`, and persists.
    ///
    /// Only existing leaves can be set, and the result must still
    /// deserialize as `BrowserSettings`.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        let pointer = pointer_for(key)?;
        let mut tree = serde_json::to_value(&self.settings)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;

        match tree.pointer_mut(&pointer) {
            Some(slot) if !slot.is_object() => *slot = value,
            Some(_) => {
                return Err(SettingsError::InvalidKey(format!(
                    "'{}' is a section, not a value",
                    key
                )))
            }
            None => return Err(SettingsError::InvalidKey(format!("unknown key '{}'", key))),
        }

        let updated: BrowserSettings = serde_json::from_value(tree)
            .map_err(|e| SettingsError::InvalidValue(format!("{}: {}", key, e)))?;
        self.write_file(&updated)?;
        self.settings = updated;
        Ok(())
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = BrowserSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
