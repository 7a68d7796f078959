use super::prompt::LimitPrompt;
use super::snapshot::BarSnapshot;
use super::timer::RepeatingTimer;
use super::view::{AltSpeedsButton, BarView, RestartBanner};
use crate::config::constants::DEFAULT_REFRESH_INTERVAL_MS;
use crate::logger::logger_sender::LoggerSender;
use crate::preferences::store::PreferencesStore;
use crate::session::engine::{SessionEngine, SubscriptionId};
use crate::session::rate_limit::RateLimit;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub const SCHEDULER_NOTICE_TIMEOUT: Duration = Duration::from_millis(5000);

pub const SCHEDULER_DISABLED_MESSAGE: &str =
    "Manual change of rate limits mode. The scheduler is disabled.";

pub const RESTART_REQUIRED_TEXT: &str = "dTorrent needs to be restarted";

pub const RESTART_CONSOLE_MESSAGE: &str =
    "dTorrent was just updated and needs to be restarted for the changes to be effective.";

/// Everything the status bar talks to, handed over at construction.
pub struct Collaborators {
    pub session: Rc<dyn SessionEngine>,
    pub preferences: Rc<dyn PreferencesStore>,
    pub view: Rc<dyn BarView>,
    pub prompt: Rc<dyn LimitPrompt>,
    pub timer: Rc<dyn RepeatingTimer>,
    pub logger_sender: LoggerSender,
}

/// Transfer direction of a speed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Download,
    Upload,
}

impl Direction {
    fn name(&self) -> &'static str {
        match self {
            Direction::Download => "download",
            Direction::Upload => "upload",
        }
    }

    pub fn prompt_title(&self) -> &'static str {
        match self {
            Direction::Download => "Global Download Speed Limit",
            Direction::Upload => "Global Upload Speed Limit",
        }
    }

    fn engine_limit(&self, session: &dyn SessionEngine) -> RateLimit {
        match self {
            Direction::Download => session.download_rate_limit(),
            Direction::Upload => session.upload_rate_limit(),
        }
    }

    fn set_engine_limit(&self, session: &dyn SessionEngine, limit: RateLimit) {
        match self {
            Direction::Download => session.set_download_rate_limit(limit),
            Direction::Upload => session.set_upload_rate_limit(limit),
        }
    }

    fn persist_default(&self, preferences: &dyn PreferencesStore, limit: RateLimit) {
        match self {
            Direction::Download => preferences.set_global_download_limit(limit.as_kib_per_second()),
            Direction::Upload => preferences.set_global_upload_limit(limit.as_kib_per_second()),
        }
    }
}

/**
The status bar of the client window.

Shows the connection state, the DHT node count, both transfer speeds with their
limits, and the alternative speed limits toggle. It holds no state of its own:
every refresh pulls a fresh `SessionStatus` and re-derives the whole display.

To create one use `StatusBar::new(collaborators)` and then call `initialize()`
once the view is on screen. Call `stop_refresh()` before the session or the view
go away; dropping the bar does the same.
*/
pub struct StatusBar {
    session: Rc<dyn SessionEngine>,
    preferences: Rc<dyn PreferencesStore>,
    view: Rc<dyn BarView>,
    prompt: Rc<dyn LimitPrompt>,
    timer: Rc<dyn RepeatingTimer>,
    logger_sender: LoggerSender,
    refresh_interval: Duration,
    subscription: Cell<Option<SubscriptionId>>,
}

impl StatusBar {
    pub fn new(collaborators: Collaborators) -> Rc<Self> {
        Self::with_refresh_interval(
            collaborators,
            Duration::from_millis(DEFAULT_REFRESH_INTERVAL_MS),
        )
    }

    pub fn with_refresh_interval(collaborators: Collaborators, refresh_interval: Duration) -> Rc<Self> {
        Rc::new(Self {
            session: collaborators.session,
            preferences: collaborators.preferences,
            view: collaborators.view,
            prompt: collaborators.prompt,
            timer: collaborators.timer,
            logger_sender: collaborators.logger_sender,
            refresh_interval,
            subscription: Cell::new(None),
        })
    }

    /// Paints the initial state, subscribes to alternative mode changes, starts
    /// the periodic refresh and refreshes once right away.
    pub fn initialize(self: &Rc<Self>) {
        self.view.set_dht_visible(self.preferences.is_dht_enabled());
        self.view.set_alt_speeds_button(&AltSpeedsButton::for_mode(
            self.preferences.is_alt_bandwidth_enabled(),
        ));

        let weak_bar = Rc::downgrade(self);
        let subscription = self
            .session
            .subscribe_alt_speeds_changed(Rc::new(move |alternative: bool| {
                if let Some(bar) = weak_bar.upgrade() {
                    bar.on_alternative_mode_changed(alternative);
                }
            }));
        if let Some(previous) = self.subscription.replace(Some(subscription)) {
            self.session.unsubscribe(previous);
        }

        let weak_bar = Rc::downgrade(self);
        self.timer.start(
            self.refresh_interval,
            Box::new(move || {
                if let Some(bar) = weak_bar.upgrade() {
                    bar.refresh();
                }
            }),
        );

        self.refresh();
    }

    /// Current display state, without pushing it to the view.
    pub fn snapshot(&self) -> BarSnapshot {
        BarSnapshot::compute(&self.session.status(), self.preferences.is_dht_enabled())
    }

    pub fn refresh(&self) {
        self.view.render(&self.snapshot());
    }

    /// Reacts to the session switching between regular and alternative limits,
    /// whoever asked for it.
    pub fn on_alternative_mode_changed(&self, alternative: bool) {
        self.view
            .set_alt_speeds_button(&AltSpeedsButton::for_mode(alternative));
        self.refresh();
    }

    /// A manual switch overrides the scheduler, which gets disabled.
    pub fn toggle_alternative_speeds(&self) {
        if self.preferences.is_scheduler_enabled() {
            self.preferences.set_scheduler_enabled(false);
            self.view
                .show_message(SCHEDULER_DISABLED_MESSAGE, SCHEDULER_NOTICE_TIMEOUT);
            self.logger_sender.info(SCHEDULER_DISABLED_MESSAGE);
        }
        self.session
            .use_alternative_speeds_limit(!self.preferences.is_alt_bandwidth_enabled());
    }

    pub fn prompt_download_limit(&self) {
        self.cap_speed(Direction::Download);
    }

    pub fn prompt_upload_limit(&self) {
        self.cap_speed(Direction::Upload);
    }

    pub fn show_restart_required(&self) {
        self.view.insert_restart_banner(&RestartBanner {
            icon_name: "dialog-warning",
            text: RESTART_REQUIRED_TEXT,
        });
        self.logger_sender.warn(RESTART_CONSOLE_MESSAGE);
    }

    /// Stops the periodic refresh and the alternative mode subscription.
    pub fn stop_refresh(&self) {
        self.timer.stop();
        if let Some(subscription) = self.subscription.take() {
            self.session.unsubscribe(subscription);
        }
    }

    // The regular limits are only persisted outside alternative mode, for both
    // capping and clearing.
    fn cap_speed(&self, direction: Direction) {
        let current = direction.engine_limit(&*self.session);
        let new_limit = match self.prompt.ask_speed_limit(direction.prompt_title(), current) {
            Some(new_limit) => RateLimit::from_raw(new_limit),
            None => return,
        };

        match new_limit.as_kib_per_second() {
            Some(kib) => self.logger_sender.debug(&format!(
                "Setting global {} rate limit to {:.1}KiB/s",
                direction.name(),
                kib
            )),
            None => self.logger_sender.debug(&format!(
                "Setting global {} rate limit to Unlimited",
                direction.name()
            )),
        }

        direction.set_engine_limit(&*self.session, new_limit);
        if !self.preferences.is_alt_bandwidth_enabled() {
            direction.persist_default(&*self.preferences, new_limit);
        }
        self.refresh();
    }
}

impl Drop for StatusBar {
    fn drop(&mut self) {
        self.stop_refresh();
    }
}
