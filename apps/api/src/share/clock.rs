use chrono::{DateTime, Utc};

/// Wall-clock source for `_meta.created` and published-link timestamps.
///
/// Carried in `AppState` as `Arc<dyn Clock>` so tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// An instant already read from another clock. Lets one request stamp
/// several values with the same time.
impl Clock for DateTime<Utc> {
    fn now(&self) -> DateTime<Utc> {
        *self
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_millis() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(FixedClock(at).now_millis(), 1_709_294_400_000);
    }

    #[test]
    fn test_instant_is_its_own_clock() {
        let at = Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap();
        assert_eq!(at.now(), at);
        assert_eq!(at.now_millis(), 1_741_615_200_000);
    }

    #[test]
    fn test_system_clock_is_after_epoch() {
        assert!(SystemClock.now_millis() > 0);
    }
}
