use super::snapshot::BarSnapshot;
use std::time::Duration;

/// How the alternative speed limits button looks for a given mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltSpeedsButton {
    pub icon_name: &'static str,
    pub tooltip: &'static str,
    pub pressed: bool,
}

impl AltSpeedsButton {
    pub fn for_mode(alternative: bool) -> Self {
        if alternative {
            Self {
                icon_name: "media-seek-backward",
                tooltip: "Click to switch to regular speed limits",
                pressed: true,
            }
        } else {
            Self {
                icon_name: "media-seek-forward",
                tooltip: "Click to switch to alternative speed limits",
                pressed: false,
            }
        }
    }
}

/// Warning inserted at the start of the bar when the application must be restarted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartBanner {
    pub icon_name: &'static str,
    pub text: &'static str,
}

/// Display surface the status bar pushes its state into.
pub trait BarView {
    fn render(&self, snapshot: &BarSnapshot);

    fn set_dht_visible(&self, visible: bool);

    fn set_alt_speeds_button(&self, button: &AltSpeedsButton);

    /// Shows `message` in the bar's message area and removes it after `timeout`.
    fn show_message(&self, message: &str, timeout: Duration);

    /// Inserts `banner` before every other element. Each call inserts a new one.
    fn insert_restart_banner(&self, banner: &RestartBanner);
}
