//! Renewal projection
//!
//! Signed day offsets from "today" to a renewal date, and the labels and
//! urgency buckets display layers derive from them.

use chrono::{Local, NaiveDate};

use crate::model::SubscriptionStatus;

/// Signed whole-day offset from `today` to `target`: positive is in the
/// future, zero is today, negative is overdue.
///
/// Working on calendar dates rather than instants normalizes both sides
/// to midnight, so the result is stable under repeated calls within the
/// same day and immune to time-of-day and DST drift.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// [`days_until`] against the local calendar day.
pub fn days_until_today(target: NaiveDate) -> i64 {
    days_until(target, Local::now().date_naive())
}

/// Badge label for a subscription's renewal state.
///
/// Non-active subscriptions show their status name regardless of the
/// offset. An active subscription whose date has passed without a status
/// change is inferred to have been paid.
pub fn renewal_label(status: SubscriptionStatus, days: i64) -> String {
    match status {
        SubscriptionStatus::Active => {
            if days > 0 {
                format!("Renews in {days} days")
            } else if days == 0 {
                "Renews today".to_string()
            } else {
                "Paid".to_string()
            }
        }
        other => other.label().to_string(),
    }
}

/// Urgency bucket used for badge styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Active, renewal more than a week out
    Scheduled,
    /// Active, renewal within seven days (or overdue)
    Imminent,
    Paused,
    Canceled,
    Disabled,
}

/// Classify a subscription for badge styling.
pub fn urgency(status: SubscriptionStatus, days: i64) -> Urgency {
    match status {
        SubscriptionStatus::Paused => Urgency::Paused,
        SubscriptionStatus::Canceled => Urgency::Canceled,
        SubscriptionStatus::Disabled => Urgency::Disabled,
        SubscriptionStatus::Active => {
            if days <= 7 {
                Urgency::Imminent
            } else {
                Urgency::Scheduled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn day_offsets_around_today() {
        assert_eq!(days_until(today(), today()), 0);
        assert_eq!(days_until(today() + Duration::days(1), today()), 1);
        assert_eq!(days_until(today() - Duration::days(1), today()), -1);
        assert_eq!(days_until(today() + Duration::days(365), today()), 365);
    }

    #[test]
    fn active_labels_follow_the_offset() {
        let active = SubscriptionStatus::Active;
        assert_eq!(renewal_label(active, 5), "Renews in 5 days");
        assert_eq!(renewal_label(active, 0), "Renews today");
        assert_eq!(renewal_label(active, -1), "Paid");
    }

    #[test]
    fn non_active_labels_ignore_the_offset() {
        assert_eq!(renewal_label(SubscriptionStatus::Paused, 3), "Paused");
        assert_eq!(renewal_label(SubscriptionStatus::Canceled, -10), "Canceled");
        assert_eq!(renewal_label(SubscriptionStatus::Disabled, 0), "Disabled");
    }

    #[test]
    fn urgency_buckets() {
        let active = SubscriptionStatus::Active;
        assert_eq!(urgency(active, 30), Urgency::Scheduled);
        assert_eq!(urgency(active, 7), Urgency::Imminent);
        assert_eq!(urgency(active, -2), Urgency::Imminent);
        assert_eq!(urgency(SubscriptionStatus::Paused, 30), Urgency::Paused);
    }
}
