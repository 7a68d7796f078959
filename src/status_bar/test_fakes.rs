use super::prompt::LimitPrompt;
use super::snapshot::BarSnapshot;
use super::statusbar::{Collaborators, StatusBar};
use super::timer::RepeatingTimer;
use super::view::{AltSpeedsButton, BarView, RestartBanner};
use crate::logger::log_level::LogRecord;
use crate::logger::logger_sender::LoggerSender;
use crate::preferences::user_preferences::Preferences;
use crate::preferences::store::PreferencesStore;
use crate::session::engine::{AltSpeedsCallback, AltSpeedsObservers, SessionEngine, SubscriptionId};
use crate::session::rate_limit::RateLimit;
use crate::session::session_status::SessionStatus;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

/// Session whose status is set by hand. Switching modes behaves like the real
/// engine: the preference is updated, then subscribers are notified.
pub struct FakeSession {
    preferences: Rc<Preferences>,
    status: RefCell<SessionStatus>,
    download_limit: Cell<RateLimit>,
    upload_limit: Cell<RateLimit>,
    pub alt_requests: RefCell<Vec<bool>>,
    pub observers: AltSpeedsObservers,
}

impl FakeSession {
    pub fn update_status<F: FnOnce(&mut SessionStatus)>(&self, update: F) {
        update(&mut *self.status.borrow_mut());
    }
}

impl SessionEngine for FakeSession {
    fn status(&self) -> SessionStatus {
        SessionStatus {
            download_rate_limit: self.download_limit.get(),
            upload_rate_limit: self.upload_limit.get(),
            ..self.status.borrow().clone()
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
        self.alt_requests.borrow_mut().push(alternative);
        self.preferences.set_alt_bandwidth_enabled(alternative);
        self.observers.notify(alternative);
    }

    fn subscribe_alt_speeds_changed(&self, callback: AltSpeedsCallback) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.observers.unsubscribe(id);
    }
}

#[derive(Default)]
pub struct RecordingView {
    pub renders: RefCell<Vec<BarSnapshot>>,
    pub dht_visible: Cell<Option<bool>>,
    pub alt_button: RefCell<Option<AltSpeedsButton>>,
    pub messages: RefCell<Vec<(String, Duration)>>,
    pub banners: RefCell<Vec<RestartBanner>>,
}

impl RecordingView {
    pub fn last_render(&self) -> BarSnapshot {
        self.renders
            .borrow()
            .last()
            .cloned()
            .expect("The view was never rendered")
    }
}

impl BarView for RecordingView {
    fn render(&self, snapshot: &BarSnapshot) {
        self.renders.borrow_mut().push(snapshot.clone());
    }

    fn set_dht_visible(&self, visible: bool) {
        self.dht_visible.set(Some(visible));
    }

    fn set_alt_speeds_button(&self, button: &AltSpeedsButton) {
        *self.alt_button.borrow_mut() = Some(button.clone());
    }

    fn show_message(&self, message: &str, timeout: Duration) {
        self.messages
            .borrow_mut()
            .push((message.to_string(), timeout));
    }

    fn insert_restart_banner(&self, banner: &RestartBanner) {
        self.banners.borrow_mut().push(banner.clone());
    }
}

/// Answers prompts from a queue; an empty queue cancels.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<Option<i64>>>,
    pub asked: RefCell<Vec<(String, RateLimit)>>,
}

impl ScriptedPrompt {
    pub fn answer(&self, answer: Option<i64>) {
        self.answers.borrow_mut().push_back(answer);
    }
}

impl LimitPrompt for ScriptedPrompt {
    fn ask_speed_limit(&self, title: &str, current: RateLimit) -> Option<i64> {
        self.asked.borrow_mut().push((title.to_string(), current));
        self.answers.borrow_mut().pop_front().flatten()
    }
}

/// Timer fired by the test itself.
#[derive(Default)]
pub struct ManualTimer {
    tick: RefCell<Option<Box<dyn FnMut()>>>,
    running: Cell<bool>,
    pub period: Cell<Option<Duration>>,
}

impl ManualTimer {
    pub fn fire(&self) {
        let tick = self.tick.borrow_mut().take();
        if let Some(mut tick) = tick {
            tick();
            if self.running.get() && self.tick.borrow().is_none() {
                *self.tick.borrow_mut() = Some(tick);
            }
        }
    }
}

impl RepeatingTimer for ManualTimer {
    fn start(&self, period: Duration, tick: Box<dyn FnMut()>) {
        self.period.set(Some(period));
        *self.tick.borrow_mut() = Some(tick);
        self.running.set(true);
    }

    fn stop(&self) {
        self.running.set(false);
        self.tick.borrow_mut().take();
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }
}

pub struct BarFixture {
    pub bar: Rc<StatusBar>,
    pub session: Rc<FakeSession>,
    pub preferences: Rc<Preferences>,
    pub view: Rc<RecordingView>,
    pub prompt: Rc<ScriptedPrompt>,
    pub timer: Rc<ManualTimer>,
    pub logger_sender: LoggerSender,
    pub log: Receiver<LogRecord>,
}

impl BarFixture {
    /// A second set of collaborators sharing the same fakes.
    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            session: self.session.clone(),
            preferences: self.preferences.clone(),
            view: self.view.clone(),
            prompt: self.prompt.clone(),
            timer: self.timer.clone(),
            logger_sender: self.logger_sender.clone(),
        }
    }

    pub fn logged(&self) -> Vec<String> {
        self.log.try_iter().map(|record| record.to_string()).collect()
    }
}

/// A status bar over a non listening session, default preferences and unlimited rates.
pub fn create_status_bar() -> BarFixture {
    let preferences = Rc::new(Preferences::new());
    let session = Rc::new(FakeSession {
        preferences: preferences.clone(),
        status: RefCell::new(SessionStatus::default()),
        download_limit: Cell::new(RateLimit::Unlimited),
        upload_limit: Cell::new(RateLimit::Unlimited),
        alt_requests: RefCell::new(Vec::new()),
        observers: AltSpeedsObservers::new(),
    });
    let view = Rc::new(RecordingView::default());
    let prompt = Rc::new(ScriptedPrompt::default());
    let timer = Rc::new(ManualTimer::default());
    let (sender, log) = channel();
    let logger_sender = LoggerSender::new(sender);

    let bar = StatusBar::new(Collaborators {
        session: session.clone(),
        preferences: preferences.clone(),
        view: view.clone(),
        prompt: prompt.clone(),
        timer: timer.clone(),
        logger_sender: logger_sender.clone(),
    });

    BarFixture {
        bar,
        session,
        preferences,
        view,
        prompt,
        timer,
        logger_sender,
        log,
    }
}
