use super::rate_limit::RateLimit;
use super::session_status::SessionStatus;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Callback invoked with the new mode every time the alternative speed limits are switched.
pub type AltSpeedsCallback = Rc<dyn Fn(bool)>;

/// Handle returned by `SessionEngine::subscribe_alt_speeds_changed`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// The torrent session as seen from the UI thread.
///
/// Implementors must not hold any internal borrow while invoking the
/// alternative speeds callbacks, since callbacks read the session back.
pub trait SessionEngine {
    fn status(&self) -> SessionStatus;

    fn download_rate_limit(&self) -> RateLimit;

    fn upload_rate_limit(&self) -> RateLimit;

    fn set_download_rate_limit(&self, limit: RateLimit);

    fn set_upload_rate_limit(&self, limit: RateLimit);

    /// Switches between the regular and the alternative speed limits and
    /// notifies every subscriber.
    fn use_alternative_speeds_limit(&self, alternative: bool);

    fn subscribe_alt_speeds_changed(&self, callback: AltSpeedsCallback) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);
}

/// Subscriber list for the "alternative speeds mode changed" notification.
#[derive(Default)]
pub struct AltSpeedsObservers {
    next_id: Cell<u64>,
    callbacks: RefCell<Vec<(SubscriptionId, AltSpeedsCallback)>>,
}

impl AltSpeedsObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: AltSpeedsCallback) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.callbacks.borrow_mut().push((id, callback));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.callbacks
            .borrow_mut()
            .retain(|(subscription, _)| *subscription != id);
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls every subscriber. The list is copied first so a callback may
    /// subscribe or unsubscribe while being notified.
    pub fn notify(&self, alternative: bool) {
        let callbacks: Vec<AltSpeedsCallback> = self
            .callbacks
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback(alternative);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_reaches_every_subscriber() {
        let observers = AltSpeedsObservers::new();
        let received = Rc::new(RefCell::new(Vec::new()));

        for name in ["first", "second"] {
            let received = received.clone();
            observers.subscribe(Rc::new(move |alternative: bool| {
                received.borrow_mut().push((name, alternative))
            }));
        }
        observers.notify(true);

        assert_eq!(*received.borrow(), vec![("first", true), ("second", true)]);
    }

    #[test]
    fn test_unsubscribed_callback_is_not_called() {
        let observers = AltSpeedsObservers::new();
        let calls = Rc::new(Cell::new(0));

        let calls_clone = calls.clone();
        let id = observers.subscribe(Rc::new(move |_: bool| calls_clone.set(calls_clone.get() + 1)));
        observers.notify(false);
        observers.unsubscribe(id);
        observers.notify(true);

        assert_eq!(calls.get(), 1);
        assert!(observers.is_empty());
    }

    #[test]
    fn test_subscription_ids_are_unique() {
        let observers = AltSpeedsObservers::new();

        let first = observers.subscribe(Rc::new(|_: bool| {}));
        let second = observers.subscribe(Rc::new(|_: bool| {}));

        assert_ne!(first, second);
        assert_eq!(observers.len(), 2);
    }

    #[test]
    fn test_callback_can_unsubscribe_itself() {
        let observers = Rc::new(AltSpeedsObservers::new());
        let own_id = Rc::new(Cell::new(None));

        let observers_clone = observers.clone();
        let own_id_clone = own_id.clone();
        let id = observers.subscribe(Rc::new(move |_: bool| {
            if let Some(id) = own_id_clone.get() {
                observers_clone.unsubscribe(id);
            }
        }));
        own_id.set(Some(id));
        observers.notify(true);

        assert!(observers.is_empty());
    }
}
