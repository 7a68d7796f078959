/// A transfer rate cap as enforced by the session engine.
///
/// Raw engine values use a non-positive sentinel for "no cap"; `from_raw`
/// folds every such value into `Unlimited`, so a `BytesPerSecond` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimit {
    Unlimited,
    BytesPerSecond(u32),
}

impl RateLimit {
    pub fn from_raw(raw: i64) -> Self {
        if raw <= 0 {
            RateLimit::Unlimited
        } else {
            RateLimit::BytesPerSecond(raw.min(u32::MAX as i64) as u32)
        }
    }

    /// Builds a limit from a preference value expressed in KiB/s.
    pub fn from_kib_per_second(kib_per_second: Option<f64>) -> Self {
        match kib_per_second {
            Some(kib) if kib.is_finite() && kib > 0.0 => {
                Self::from_raw((kib * 1024_f64).round() as i64)
            }
            _ => RateLimit::Unlimited,
        }
    }

    pub fn bytes_per_second(&self) -> Option<u32> {
        match self {
            RateLimit::Unlimited => None,
            RateLimit::BytesPerSecond(bytes) => Some(*bytes),
        }
    }

    pub fn as_kib_per_second(&self) -> Option<f64> {
        self.bytes_per_second()
            .map(|bytes| bytes as f64 / 1024_f64)
    }
}

impl Default for RateLimit {
    fn default() -> Self {
        RateLimit::Unlimited
    }
}
