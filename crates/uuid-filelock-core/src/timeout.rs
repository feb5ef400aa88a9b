//! Timeout value helpers.

use std::time::{Duration, Instant};

/// Represents a timeout duration for lock operations.
///
/// - `Some(duration)` - Wait up to this duration
/// - `None` - Wait indefinitely
pub type Timeout = Option<Duration>;

/// Internal helper for timeout calculations.
///
/// Keeps the exact duration; the deadline is never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutValue {
    duration: Option<Duration>, // None for infinite
}

impl TimeoutValue {
    pub const INFINITE: Self = Self { duration: None };
    pub const ZERO: Self = Self {
        duration: Some(Duration::ZERO),
    };

    /// Builds a timeout from signed seconds. Any negative value is infinite.
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_nan() || secs < 0.0 {
            Self::INFINITE
        } else {
            Self::from(Some(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)))
        }
    }

    pub fn is_infinite(&self) -> bool {
        self.duration.is_none()
    }

    pub fn is_zero(&self) -> bool {
        self.duration == Some(Duration::ZERO)
    }

    pub fn as_duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns the timeout duration if it has fully elapsed since `start`.
    ///
    /// Always `None` for an infinite timeout.
    pub fn expired_since(&self, start: Instant) -> Option<Duration> {
        self.duration
            .filter(|timeout| start.elapsed() >= *timeout)
    }
}

impl From<Option<Duration>> for TimeoutValue {
    fn from(timeout: Option<Duration>) -> Self {
        Self { duration: timeout }
    }
}

impl From<TimeoutValue> for Timeout {
    fn from(value: TimeoutValue) -> Self {
        value.as_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_seconds_are_infinite() {
        assert!(TimeoutValue::from_secs_f64(-1.0).is_infinite());
        assert!(TimeoutValue::from_secs_f64(f64::NAN).is_infinite());
        assert_eq!(TimeoutValue::from_secs_f64(-0.5).as_duration(), None);
    }

    #[test]
    fn test_seconds_convert_exactly() {
        let value = TimeoutValue::from_secs_f64(2.5);
        assert_eq!(value.as_duration(), Some(Duration::from_millis(2500)));
        assert!(TimeoutValue::from_secs_f64(0.0).is_zero());
        assert_eq!(
            TimeoutValue::from_secs_f64(f64::INFINITY).as_duration(),
            Some(Duration::MAX)
        );
    }

    #[test]
    fn test_sub_millisecond_precision_kept() {
        let timeout = Duration::from_micros(1999);
        assert_eq!(TimeoutValue::from(Some(timeout)).as_duration(), Some(timeout));
    }

    #[test]
    fn test_zero_timeout_expires_immediately() {
        let start = Instant::now();
        assert_eq!(TimeoutValue::ZERO.expired_since(start), Some(Duration::ZERO));
        assert_eq!(TimeoutValue::INFINITE.expired_since(start), None);
    }

    #[test]
    fn test_long_timeout_not_expired() {
        let value = TimeoutValue::from(Some(Duration::from_secs(60)));
        assert_eq!(value.expired_since(Instant::now()), None);
        assert_eq!(Timeout::from(value), Some(Duration::from_secs(60)));
    }
}
