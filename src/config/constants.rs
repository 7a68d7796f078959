pub const LOG_DIRECTORY: &str = "LOG_DIRECTORY";
pub const PREFERENCES_FILE: &str = "PREFERENCES_FILE";
pub const REFRESH_INTERVAL_MS: &str = "REFRESH_INTERVAL_MS";
pub const LOG_LEVEL: &str = "LOG_LEVEL";

pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1500;
