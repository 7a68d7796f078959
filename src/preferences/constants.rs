pub const DHT_ENABLED: &str = "DHT_ENABLED";
pub const ALT_BANDWIDTH_ENABLED: &str = "ALT_BANDWIDTH_ENABLED";
pub const SCHEDULER_ENABLED: &str = "SCHEDULER_ENABLED";
pub const GLOBAL_DOWNLOAD_LIMIT: &str = "GLOBAL_DOWNLOAD_LIMIT";
pub const GLOBAL_UPLOAD_LIMIT: &str = "GLOBAL_UPLOAD_LIMIT";
pub const ALT_DOWNLOAD_LIMIT: &str = "ALT_DOWNLOAD_LIMIT";
pub const ALT_UPLOAD_LIMIT: &str = "ALT_UPLOAD_LIMIT";

/// Value written to the preferences file for an unlimited rate.
pub const UNLIMITED: f64 = -1.0;

pub const DEFAULT_ALT_DOWNLOAD_LIMIT_KIB: f64 = 10.0;
pub const DEFAULT_ALT_UPLOAD_LIMIT_KIB: f64 = 10.0;
