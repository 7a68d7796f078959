use super::rate_limit::RateLimit;

/// Read-only snapshot of the session engine, taken once per refresh.
///
/// Rates are in bytes per second, totals in bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStatus {
    pub is_listening: bool,
    pub has_incoming_connections: bool,
    pub dht_nodes: u32,
    pub download_rate: f64,
    pub download_rate_limit: RateLimit,
    pub total_download: u64,
    pub upload_rate: f64,
    pub upload_rate_limit: RateLimit,
    pub total_upload: u64,
}
