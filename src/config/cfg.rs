use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::time::Duration;

use super::constants;
use crate::logger::log_level::LogLevel;

/// Cfg struct containing the config file information, previusly created with Cfg::new.
///
/// log_directory: String,
/// preferences_file: String,
/// refresh_interval_ms: u64,
/// log_level: LogLevel,
#[derive(Debug, Clone)]
pub struct Cfg {
    pub log_directory: String,
    pub preferences_file: String,
    pub refresh_interval_ms: u64,
    pub log_level: LogLevel,
}

impl Cfg {
    /// Builds a Cfg struct containing the config file information by the given path.
    /// The format of the config file must be: {config_name}={config_value} (without brackets).
    /// Blank lines and lines starting with `#` are skipped.
    /// In case of success it returns a Cfg struct.
    ///
    /// It returns an io::Error if:
    /// - The path to the config file does not exist or could not be open/readed.
    /// - The confing file has wrong format.
    /// - A wrong config_name was in the config file.
    /// - REFRESH_INTERVAL_MS is not a positive number.
    /// - LOG_LEVEL is not one of debug, info, warn or error.
    /// - LOG_DIRECTORY or PREFERENCES_FILE is missing.
    pub fn new(path: &str) -> io::Result<Self> {
        let mut cfg = Self {
            log_directory: String::from(""),
            preferences_file: String::from(""),
            refresh_interval_ms: constants::DEFAULT_REFRESH_INTERVAL_MS,
            log_level: LogLevel::default(),
        };

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let current_line = line?;
            let trimmed = current_line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let setting: Vec<&str> = trimmed.split('=').collect();

            if setting.len() != 2 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid config input: {}", current_line),
                ));
            }
            cfg = Self::load_setting(cfg, setting[0].trim(), setting[1].trim())?;
        }

        for (name, value) in [
            (constants::LOG_DIRECTORY, &cfg.log_directory),
            (constants::PREFERENCES_FILE, &cfg.preferences_file),
        ] {
            if value.is_empty() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Missing required setting: {}", name),
                ));
            }
        }
        Ok(cfg)
    }

    /// Period between two status bar refreshes.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    fn load_setting(mut self, name: &str, value: &str) -> io::Result<Self> {
        match name {
            constants::REFRESH_INTERVAL_MS => match value.parse::<u64>() {
                Ok(parse) if parse > 0 => self.refresh_interval_ms = parse,
                _ => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!(
                            "Invalid config, REFRESH_INTERVAL_MS is not a positive number: {}",
                            value
                        ),
                    ));
                }
            },
            constants::LOG_LEVEL => {
                self.log_level = value.parse::<LogLevel>().map_err(|err| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Invalid config, {}", err),
                    )
                })?
            }
            constants::LOG_DIRECTORY => self.log_directory = String::from(value),

            constants::PREFERENCES_FILE => self.preferences_file = String::from(value),

            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid config setting name: {}", name),
                ))
            }
        }
        Ok(self)
    }
}
