use chrono::TimeDelta;

pub(crate) const MS_PER_SECOND: i64 = 1_000;
pub(crate) const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub(crate) const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub(crate) const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// A recognized span of elapsed time.
///
/// The engine keeps a single exact millisecond total rather than a bag of
/// calendar fields. The component accessors ([`days`](Self::days),
/// [`hours`](Self::hours), ...) derive their answer from that total on
/// demand, so they can never drift out of sync with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationValue {
    millis: f64,
}

impl DurationValue {
    pub(crate) fn from_millis(millis: f64) -> Self {
        DurationValue { millis }
    }

    /// `from_millis` gated on [`as_millis`](Self::as_millis) being able to
    /// report the rounded total undistorted: finite, below `i64::MAX`.
    pub(crate) fn checked_from_millis(millis: f64) -> Option<Self> {
        (millis.is_finite() && millis.round() < i64::MAX as f64)
            .then(|| DurationValue::from_millis(millis))
    }

    /// Total length in milliseconds, rounded to the nearest whole.
    pub fn as_millis(&self) -> i64 {
        self.millis.round() as i64
    }

    /// Whole days in the total.
    pub fn days(&self) -> i64 {
        self.as_millis() / MS_PER_DAY
    }

    /// Hours left over after the whole days (`0..24`).
    pub fn hours(&self) -> i64 {
        self.as_millis() % MS_PER_DAY / MS_PER_HOUR
    }

    /// Minutes left over after the whole hours (`0..60`).
    pub fn minutes(&self) -> i64 {
        self.as_millis() % MS_PER_HOUR / MS_PER_MINUTE
    }

    /// Seconds left over after the whole minutes (`0..60`).
    pub fn seconds(&self) -> i64 {
        self.as_millis() % MS_PER_MINUTE / MS_PER_SECOND
    }

    /// Milliseconds left over after the whole seconds (`0..1000`).
    pub fn subsec_millis(&self) -> i64 {
        self.as_millis() % MS_PER_SECOND
    }

    /// Convert to a [`chrono::TimeDelta`] for calendar arithmetic.
    pub fn to_time_delta(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.as_millis())
    }
}
