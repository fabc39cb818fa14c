//! Fixed daily quota for the public, unauthenticated generation endpoint.
//!
//! A single in-process counter that resets when the UTC day changes. The
//! ceiling bounds completion-API cost exposure and is scoped to the one
//! route that needs it; it is not a general rate limiter.

use chrono::NaiveDate;

/// Requests per UTC day allowed through the public generation endpoint.
pub const PUBLIC_GENERATE_DAILY_LIMIT: u32 = 100;

#[derive(Debug)]
pub struct DailyQuota {
    limit: u32,
    day: NaiveDate,
    used: u32,
}

impl DailyQuota {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            day: NaiveDate::MIN,
            used: 0,
        }
    }

    /// Consume one slot for `today`. Returns false when the day's budget is
    /// exhausted.
    pub fn try_acquire(&mut self, today: NaiveDate) -> bool {
        if today != self.day {
            self.day = today;
            self.used = 0;
        }

        if self.used >= self.limit {
            return false;
        }

        self.used += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, n).unwrap()
    }

    #[test]
    fn allows_up_to_limit() {
        let mut quota = DailyQuota::new(3);
        assert!(quota.try_acquire(day(1)));
        assert!(quota.try_acquire(day(1)));
        assert!(quota.try_acquire(day(1)));
        assert!(!quota.try_acquire(day(1)));
    }

    #[test]
    fn resets_on_new_day() {
        let mut quota = DailyQuota::new(1);
        assert!(quota.try_acquire(day(1)));
        assert!(!quota.try_acquire(day(1)));
        assert!(quota.try_acquire(day(2)));
    }

    #[test]
    fn zero_limit_rejects_everything() {
        let mut quota = DailyQuota::new(0);
        assert!(!quota.try_acquire(day(1)));
    }
}
