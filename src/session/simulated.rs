use super::engine::{AltSpeedsCallback, AltSpeedsObservers, SessionEngine, SubscriptionId};
use super::rate_limit::RateLimit;
use super::session_status::SessionStatus;
use crate::logger::logger_sender::LoggerSender;
use crate::preferences::store::PreferencesStore;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

const MAX_SIMULATED_DOWNLOAD_RATE: f64 = 4.0 * 1024.0 * 1024.0;
const MAX_SIMULATED_UPLOAD_RATE: f64 = 1024.0 * 1024.0;
const INITIAL_DHT_NODES: u32 = 8;
const MAX_DHT_NODES: u32 = 400;

/// A stand-in session engine producing random traffic, used by the desktop demo.
///
/// Rates always respect the active limits. Switching the alternative mode
/// updates the preferences, applies the matching pair of limits and notifies
/// every subscriber.
pub struct SimulatedSession {
    preferences: Rc<dyn PreferencesStore>,
    logger_sender: LoggerSender,
    listening: Cell<bool>,
    incoming_connections: Cell<bool>,
    dht_nodes: Cell<u32>,
    download_rate: Cell<f64>,
    upload_rate: Cell<f64>,
    total_download: Cell<u64>,
    total_upload: Cell<u64>,
    download_limit: Cell<RateLimit>,
    upload_limit: Cell<RateLimit>,
    observers: AltSpeedsObservers,
}

impl SimulatedSession {
    /// Creates a listening session with the limits matching the current alternative mode.
    pub fn new(preferences: Rc<dyn PreferencesStore>, logger_sender: LoggerSender) -> Self {
        let session = Self {
            preferences,
            logger_sender,
            listening: Cell::new(true),
            incoming_connections: Cell::new(false),
            dht_nodes: Cell::new(INITIAL_DHT_NODES),
            download_rate: Cell::new(0.0),
            upload_rate: Cell::new(0.0),
            total_download: Cell::new(0),
            total_upload: Cell::new(0),
            download_limit: Cell::new(RateLimit::Unlimited),
            upload_limit: Cell::new(RateLimit::Unlimited),
            observers: AltSpeedsObservers::new(),
        };
        session.apply_limits(session.preferences.is_alt_bandwidth_enabled());
        session
    }

    pub fn set_listening(&self, listening: bool) {
        self.listening.set(listening);
    }

    /// Advances the simulation by `elapsed`: picks new rates under the limits,
    /// accumulates totals and lets the DHT routing table drift.
    pub fn tick(&self, elapsed: Duration) {
        let mut rng = rand::thread_rng();

        let download_rate = capped(
            rng.gen_range(0.0..MAX_SIMULATED_DOWNLOAD_RATE),
            self.download_limit.get(),
        );
        let upload_rate = capped(
            rng.gen_range(0.0..MAX_SIMULATED_UPLOAD_RATE),
            self.upload_limit.get(),
        );
        self.download_rate.set(download_rate);
        self.upload_rate.set(upload_rate);

        let seconds = elapsed.as_secs_f64();
        self.total_download
            .set(self.total_download.get() + (download_rate * seconds) as u64);
        self.total_upload
            .set(self.total_upload.get() + (upload_rate * seconds) as u64);

        let nodes = self.dht_nodes.get();
        let drift: i64 = rng.gen_range(-2..=6);
        self.dht_nodes
            .set((nodes as i64 + drift).clamp(0, MAX_DHT_NODES as i64) as u32);

        if self.listening.get() && !self.incoming_connections.get() && rng.gen_bool(0.2) {
            self.incoming_connections.set(true);
            self.logger_sender.info("Received the first incoming connection.");
        }
    }

    fn apply_limits(&self, alternative: bool) {
        let (download, upload) = if alternative {
            (
                self.preferences.alt_download_limit(),
                self.preferences.alt_upload_limit(),
            )
        } else {
            (
                self.preferences.global_download_limit(),
                self.preferences.global_upload_limit(),
            )
        };
        self.download_limit
            .set(RateLimit::from_kib_per_second(download));
        self.upload_limit.set(RateLimit::from_kib_per_second(upload));
    }
}

impl SessionEngine for SimulatedSession {
    fn status(&self) -> SessionStatus {
        SessionStatus {
            is_listening: self.listening.get(),
            has_incoming_connections: self.incoming_connections.get(),
            dht_nodes: self.dht_nodes.get(),
            download_rate: self.download_rate.get(),
            download_rate_limit: self.download_limit.get(),
            total_download: self.total_download.get(),
            upload_rate: self.upload_rate.get(),
            upload_rate_limit: self.upload_limit.get(),
            total_upload: self.total_upload.get(),
        }
    }

    fn download_rate_limit(&self) -> RateLimit {
        self.download_limit.get()
    }

    fn upload_rate_limit(&self) -> RateLimit {
        self.upload_limit.get()
    }

    fn set_download_rate_limit(&self, limit: RateLimit) {
        self.download_limit.set(limit);
    }

    fn set_upload_rate_limit(&self, limit: RateLimit) {
        self.upload_limit.set(limit);
    }

    fn use_alternative_speeds_limit(&self, alternative: bool) {
        if alternative {
            self.logger_sender.info("Switching to alternative speed limits.");
        } else {
            self.logger_sender.info("Switching to regular speed limits.");
        }
        self.preferences.set_alt_bandwidth_enabled(alternative);
        self.apply_limits(alternative);
        self.observers.notify(alternative);
    }

    fn subscribe_alt_speeds_changed(&self, callback: AltSpeedsCallback) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.observers.unsubscribe(id);
    }
}

fn capped(rate: f64, limit: RateLimit) -> f64 {
    match limit.bytes_per_second() {
        Some(bytes) => rate.min(bytes as f64),
        None => rate,
    }
}
