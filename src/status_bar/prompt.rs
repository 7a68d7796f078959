use crate::session::rate_limit::RateLimit;

/// Blocking numeric input used to edit a global speed limit.
pub trait LimitPrompt {
    /// Asks for a new limit in bytes per second, pre-filled with `current`.
    ///
    /// Returns `None` when the user cancels. A non-positive answer means unlimited.
    fn ask_speed_limit(&self, title: &str, current: RateLimit) -> Option<i64>;
}
