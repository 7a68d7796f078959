use super::connection::ConnectionState;
use super::formatters::{friendly_size, friendly_speed};
use crate::session::rate_limit::RateLimit;
use crate::session::session_status::SessionStatus;

/// Everything the bar displays, derived from one session status and the DHT preference.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSnapshot {
    pub connection: ConnectionState,
    /// `None` when DHT is disabled and the counter is hidden.
    pub dht_nodes: Option<u32>,
    pub download_text: String,
    pub upload_text: String,
}

impl BarSnapshot {
    pub fn compute(status: &SessionStatus, dht_enabled: bool) -> Self {
        Self {
            connection: ConnectionState::from_status(status),
            dht_nodes: if dht_enabled {
                Some(status.dht_nodes)
            } else {
                None
            },
            download_text: speed_label(
                status.download_rate,
                status.total_download,
                status.download_rate_limit,
            ),
            upload_text: speed_label(
                status.upload_rate,
                status.total_upload,
                status.upload_rate_limit,
            ),
        }
    }

    pub fn dht_text(&self) -> Option<String> {
        self.dht_nodes
            .map(|nodes| format!("DHT: {} nodes", nodes))
    }
}

/// `"{rate} ({total})"`, prefixed by `"[{limit}] "` when the direction is capped.
pub fn speed_label(rate: f64, total: u64, limit: RateLimit) -> String {
    let label = format!("{} ({})", friendly_speed(rate), friendly_size(total));
    match limit.bytes_per_second() {
        Some(bytes) => format!("[{}] {}", friendly_speed(bytes as f64), label),
        None => label,
    }
}
