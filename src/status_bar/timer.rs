use std::time::Duration;

/// A repeating task bound to the UI thread.
///
/// Starting an already running timer replaces its previous task.
pub trait RepeatingTimer {
    fn start(&self, period: Duration, tick: Box<dyn FnMut()>);

    fn stop(&self);

    fn is_running(&self) -> bool;
}
