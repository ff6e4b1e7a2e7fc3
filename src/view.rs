//! List views and calendar projection
//!
//! Filtering and ordering for the list layout, plus the month projection
//! backing the calendar layout. Everything here is a pure function of the
//! collection and an explicit "today".

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::billing;
use crate::model::{Subscription, SubscriptionStatus};
use crate::renewal;

/// Category filter for the list layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filtering
    All,
    /// Exact category match
    Category(String),
}

impl CategoryFilter {
    fn matches(&self, subscription: &Subscription) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => subscription.category == *category,
        }
    }
}

/// Sort order for the list layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive by name
    Name,
    /// Most expensive first, compared on monthly-equivalents
    PriceHigh,
    /// Cheapest first, compared on monthly-equivalents
    PriceLow,
    /// Soonest renewal first
    ExpiringSoon,
    /// Furthest renewal first
    LongestRemaining,
}

/// Filtered, ordered copy of the collection for the list layout.
///
/// Price sorts compare monthly-equivalents rather than raw prices so
/// subscriptions on different cadences compare fairly; date sorts use the
/// signed day offset from `today`.
pub fn filter_and_sort(
    subscriptions: &[Subscription],
    filter: &CategoryFilter,
    sort: SortKey,
    today: NaiveDate,
) -> Vec<Subscription> {
    let mut view: Vec<Subscription> = subscriptions
        .iter()
        .filter(|subscription| filter.matches(subscription))
        .cloned()
        .collect();

    match sort {
        SortKey::Name => {
            view.sort_by_key(|subscription| subscription.name.to_lowercase());
        }
        SortKey::PriceHigh => view.sort_by(|a, b| cmp_monthly(b, a)),
        SortKey::PriceLow => view.sort_by(|a, b| cmp_monthly(a, b)),
        SortKey::ExpiringSoon => view.sort_by_key(|subscription| {
            renewal::days_until(subscription.next_payment_date, today)
        }),
        SortKey::LongestRemaining => view.sort_by_key(|subscription| {
            -renewal::days_until(subscription.next_payment_date, today)
        }),
    }

    view
}

fn cmp_monthly(a: &Subscription, b: &Subscription) -> Ordering {
    let a = billing::monthly_equivalent(a.price, &a.billing_cycle);
    let b = billing::monthly_equivalent(b.price, &b.billing_cycle);
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Shape of one month for a calendar layout: how many blank cells precede
/// day 1 in a Sunday-first week grid, and how many days the month has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub leading_blanks: u32,
    pub days_in_month: u32,
}

/// Grid metrics for a year/month, or None for an invalid month number.
pub fn month_grid(year: i32, month: u32) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = next_month.pred_opt()?;

    Some(MonthGrid {
        leading_blanks: first.weekday().num_days_from_sunday(),
        days_in_month: last.day(),
    })
}

/// Active subscriptions renewing in the given month, keyed by day of
/// month. Non-active subscriptions do not appear on the calendar.
pub fn renewals_in_month(
    subscriptions: &[Subscription],
    year: i32,
    month: u32,
) -> BTreeMap<u32, Vec<Subscription>> {
    let mut by_day: BTreeMap<u32, Vec<Subscription>> = BTreeMap::new();

    for subscription in subscriptions {
        if subscription.status != SubscriptionStatus::Active {
            continue;
        }
        let date = subscription.next_payment_date;
        if date.year() == year && date.month() == month {
            by_day.entry(date.day()).or_default().push(subscription.clone());
        }
    }

    by_day
}
