//! Wall clock that never hands out a reading earlier than a previous one.
//!
//! Handlers read the clock once per request and derive every time field of the
//! response from that single reading. Readings are truncated to milliseconds,
//! which is the resolution of the epoch timestamps the services emit.
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, Utc};

type Source = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Cheap to clone; clones share the same high-water mark.
#[derive(Clone)]
pub struct MonotonicClock {
    source: Source,
    high_water: Arc<AtomicI64>,
}

impl MonotonicClock {
    pub fn system() -> Self {
        Self::with_source(Utc::now)
    }

    pub fn with_source<F>(source: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self {
            source: Arc::new(source),
            high_water: Arc::new(AtomicI64::new(i64::MIN)),
        }
    }

    /// Current time in the host's zone, never earlier than any prior reading.
    pub fn now(&self) -> DateTime<Local> {
        let observed = (self.source)();
        let millis = observed.timestamp_millis();
        let previous = self.high_water.fetch_max(millis, Ordering::AcqRel);

        DateTime::from_timestamp_millis(previous.max(millis))
            .unwrap_or(observed)
            .with_timezone(&Local)
    }

    /// Epoch milliseconds of [`MonotonicClock::now`].
    pub fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for MonotonicClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonotonicClock")
            .field("high_water", &self.high_water.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Zone identifier reported to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemZone {
    /// IANA name, e.g. `Europe/Madrid`.
    Named(String),
    /// No name could be resolved; the offset of each reading is reported.
    LocalOffset,
}

impl SystemZone {
    /// `TZ` wins when set (a leading `:` is stripped, as libc allows), then
    /// the host's configured zone.
    pub fn detect(tz: Option<&str>) -> Self {
        Self::detect_with(tz, || iana_time_zone::get_timezone().ok())
    }

    pub fn detect_with<F>(tz: Option<&str>, lookup: F) -> Self
    where
        F: FnOnce() -> Option<String>,
    {
        match tz.map(|v| v.trim().trim_start_matches(':')) {
            Some(id) if !id.is_empty() => Self::Named(id.to_string()),
            _ => match lookup() {
                Some(id) if !id.trim().is_empty() => Self::Named(id.trim().to_string()),
                _ => Self::LocalOffset,
            },
        }
    }

    pub fn named(id: impl Into<String>) -> Self {
        Self::Named(id.into())
    }

    /// Zone id for `now`. An offset fallback follows daylight-saving changes
    /// because it is taken from the reading itself.
    pub fn id_at(&self, now: &DateTime<Local>) -> String {
        match self {
            Self::Named(id) => id.clone(),
            Self::LocalOffset => now.offset().to_string(),
        }
    }
}
