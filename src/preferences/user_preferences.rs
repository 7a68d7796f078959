use std::cell::Cell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::constants;
use super::preferences_error::PreferencesError;
use super::store::PreferencesStore;
use crate::app::error_message::ErrorMessage;

/// In-memory preferences, optionally attached to a `NAME=value` file.
///
/// Values only reach the disk when `save()` is called.
#[derive(Debug)]
pub struct Preferences {
    dht_enabled: Cell<bool>,
    alt_bandwidth_enabled: Cell<bool>,
    scheduler_enabled: Cell<bool>,
    global_download_limit: Cell<Option<f64>>,
    global_upload_limit: Cell<Option<f64>>,
    alt_download_limit: Cell<Option<f64>>,
    alt_upload_limit: Cell<Option<f64>>,
    file_path: Option<PathBuf>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dht_enabled: Cell::new(true),
            alt_bandwidth_enabled: Cell::new(false),
            scheduler_enabled: Cell::new(false),
            global_download_limit: Cell::new(None),
            global_upload_limit: Cell::new(None),
            alt_download_limit: Cell::new(Some(constants::DEFAULT_ALT_DOWNLOAD_LIMIT_KIB)),
            alt_upload_limit: Cell::new(Some(constants::DEFAULT_ALT_UPLOAD_LIMIT_KIB)),
            file_path: None,
        }
    }
}

impl Preferences {
    /// Creates default preferences that are not backed by any file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the preferences stored at `path`.
    ///
    /// A missing file is not an error: defaults are returned, attached to
    /// `path` so a later `save()` creates it.
    ///
    /// # Errors
    /// - `ReadError` if the file exists but could not be read.
    /// - `InvalidSetting` if a line is malformed, a name is unknown or a value can't be parsed.
    pub fn load(path: &str) -> Result<Self, PreferencesError> {
        let mut preferences = Self {
            file_path: Some(PathBuf::from(path)),
            ..Self::default()
        };

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(preferences),
            Err(err) => return Err(PreferencesError::ReadError(err)),
        };

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let setting: Vec<&str> = line.split('=').collect();
            if setting.len() != 2 {
                return Err(invalid(format!("Invalid preferences input: {}", line)));
            }
            preferences = preferences.load_setting(setting[0].trim(), setting[1].trim())?;
        }
        Ok(preferences)
    }

    /// Writes every preference to the attached file.
    ///
    /// # Errors
    /// - `NoFileAttached` if the preferences were not created with `load()`.
    /// - `WriteError` if the file could not be written.
    pub fn save(&self) -> Result<(), PreferencesError> {
        let path = self
            .file_path
            .as_ref()
            .ok_or(PreferencesError::NoFileAttached)?;
        fs::write(path, self.serialize()).map_err(PreferencesError::WriteError)
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn set_dht_enabled(&self, enabled: bool) {
        self.dht_enabled.set(enabled);
    }

    fn load_setting(self, name: &str, value: &str) -> Result<Self, PreferencesError> {
        match name {
            constants::DHT_ENABLED => self.dht_enabled.set(parse_bool(name, value)?),
            constants::ALT_BANDWIDTH_ENABLED => {
                self.alt_bandwidth_enabled.set(parse_bool(name, value)?)
            }
            constants::SCHEDULER_ENABLED => self.scheduler_enabled.set(parse_bool(name, value)?),
            constants::GLOBAL_DOWNLOAD_LIMIT => {
                self.global_download_limit.set(parse_limit(name, value)?)
            }
            constants::GLOBAL_UPLOAD_LIMIT => {
                self.global_upload_limit.set(parse_limit(name, value)?)
            }
            constants::ALT_DOWNLOAD_LIMIT => self.alt_download_limit.set(parse_limit(name, value)?),
            constants::ALT_UPLOAD_LIMIT => self.alt_upload_limit.set(parse_limit(name, value)?),
            _ => return Err(invalid(format!("Invalid preferences setting name: {}", name))),
        }
        Ok(self)
    }

    fn serialize(&self) -> String {
        [
            (constants::DHT_ENABLED, self.dht_enabled.get().to_string()),
            (
                constants::ALT_BANDWIDTH_ENABLED,
                self.alt_bandwidth_enabled.get().to_string(),
            ),
            (
                constants::SCHEDULER_ENABLED,
                self.scheduler_enabled.get().to_string(),
            ),
            (
                constants::GLOBAL_DOWNLOAD_LIMIT,
                format_limit(self.global_download_limit.get()),
            ),
            (
                constants::GLOBAL_UPLOAD_LIMIT,
                format_limit(self.global_upload_limit.get()),
            ),
            (
                constants::ALT_DOWNLOAD_LIMIT,
                format_limit(self.alt_download_limit.get()),
            ),
            (
                constants::ALT_UPLOAD_LIMIT,
                format_limit(self.alt_upload_limit.get()),
            ),
        ]
        .iter()
        .map(|(name, value)| format!("{}={}\n", name, value))
        .collect()
    }
}

impl PreferencesStore for Preferences {
    fn is_dht_enabled(&self) -> bool {
        self.dht_enabled.get()
    }

    fn is_alt_bandwidth_enabled(&self) -> bool {
        self.alt_bandwidth_enabled.get()
    }

    fn set_alt_bandwidth_enabled(&self, enabled: bool) {
        self.alt_bandwidth_enabled.set(enabled);
    }

    fn is_scheduler_enabled(&self) -> bool {
        self.scheduler_enabled.get()
    }

    fn set_scheduler_enabled(&self, enabled: bool) {
        self.scheduler_enabled.set(enabled);
    }

    fn global_download_limit(&self) -> Option<f64> {
        self.global_download_limit.get()
    }

    fn set_global_download_limit(&self, kib_per_second: Option<f64>) {
        self.global_download_limit
            .set(normalize_limit(kib_per_second));
    }

    fn global_upload_limit(&self) -> Option<f64> {
        self.global_upload_limit.get()
    }

    fn set_global_upload_limit(&self, kib_per_second: Option<f64>) {
        self.global_upload_limit.set(normalize_limit(kib_per_second));
    }

    fn alt_download_limit(&self) -> Option<f64> {
        self.alt_download_limit.get()
    }

    fn alt_upload_limit(&self) -> Option<f64> {
        self.alt_upload_limit.get()
    }
}

fn invalid(message: String) -> PreferencesError {
    PreferencesError::InvalidSetting(ErrorMessage::new(message))
}

fn normalize_limit(kib_per_second: Option<f64>) -> Option<f64> {
    kib_per_second.filter(|kib| kib.is_finite() && *kib > 0.0)
}

fn parse_bool(name: &str, value: &str) -> Result<bool, PreferencesError> {
    value
        .parse::<bool>()
        .map_err(|_| invalid(format!("{} must be true or false: {}", name, value)))
}

fn parse_limit(name: &str, value: &str) -> Result<Option<f64>, PreferencesError> {
    value
        .parse::<f64>()
        .map(|kib| normalize_limit(Some(kib)))
        .map_err(|_| invalid(format!("{} is not a number: {}", name, value)))
}

fn format_limit(kib_per_second: Option<f64>) -> String {
    kib_per_second
        .unwrap_or(constants::UNLIMITED)
        .to_string()
}
