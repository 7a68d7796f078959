/// Persistent user preferences read and written by the status bar.
///
/// Speed limits are expressed in KiB/s; `None` means unlimited.
pub trait PreferencesStore {
    fn is_dht_enabled(&self) -> bool;

    fn is_alt_bandwidth_enabled(&self) -> bool;

    fn set_alt_bandwidth_enabled(&self, enabled: bool);

    fn is_scheduler_enabled(&self) -> bool;

    fn set_scheduler_enabled(&self, enabled: bool);

    fn global_download_limit(&self) -> Option<f64>;

    fn set_global_download_limit(&self, kib_per_second: Option<f64>);

    fn global_upload_limit(&self) -> Option<f64>;

    fn set_global_upload_limit(&self, kib_per_second: Option<f64>);

    fn alt_download_limit(&self) -> Option<f64>;

    fn alt_upload_limit(&self) -> Option<f64>;
}
