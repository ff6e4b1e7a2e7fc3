//! Aggregation over a subscription collection
//!
//! A pure fold producing total and per-category spend, status counts, and
//! the dominant display currency. Amounts in different currencies are
//! summed as same-scale numbers; there is no conversion step. The
//! dominant currency exists purely to pick display formatting.

use std::cmp::Ordering;

use crate::billing;
use crate::model::{Currency, Subscription, SubscriptionStatus};

/// Monthly and yearly spend attributed to one category
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategorySpend {
    pub monthly: f64,
    pub yearly: f64,
}

/// Subscription counts by status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    pub active: usize,
    pub paused: usize,
    pub canceled: usize,
    pub disabled: usize,
}

/// Output of [`summarize`]
#[derive(Debug, Clone, PartialEq)]
pub struct SpendSummary {
    /// Total monthly spend over active subscriptions
    pub monthly_total: f64,
    /// Total yearly spend over active subscriptions
    pub yearly_total: f64,
    /// Per-category spend over active subscriptions, sorted descending by
    /// monthly amount; ties keep first-encounter order
    pub by_category: Vec<(String, CategorySpend)>,
    /// Most frequent currency across all subscriptions, active or not;
    /// ties keep first-encounter order, empty input defaults to USD
    pub dominant_currency: Currency,
    pub status_counts: StatusCounts,
}

/// Fold a subscription collection into a [`SpendSummary`].
///
/// Totals and the category breakdown cover active subscriptions only;
/// the currency tally and status counts cover everything.
pub fn summarize(subscriptions: &[Subscription]) -> SpendSummary {
    let mut monthly_total = 0.0;
    let mut yearly_total = 0.0;
    let mut by_category: Vec<(String, CategorySpend)> = Vec::new();
    let mut currency_counts: Vec<(Currency, usize)> = Vec::new();
    let mut status_counts = StatusCounts::default();

    for subscription in subscriptions {
        status_counts.total += 1;
        match subscription.status {
            SubscriptionStatus::Active => status_counts.active += 1,
            SubscriptionStatus::Paused => status_counts.paused += 1,
            SubscriptionStatus::Canceled => status_counts.canceled += 1,
            SubscriptionStatus::Disabled => status_counts.disabled += 1,
        }

        match currency_counts
            .iter_mut()
            .find(|(currency, _)| *currency == subscription.currency)
        {
            Some((_, count)) => *count += 1,
            None => currency_counts.push((subscription.currency, 1)),
        }

        if subscription.status != SubscriptionStatus::Active {
            continue;
        }

        let monthly = billing::monthly_equivalent(subscription.price, &subscription.billing_cycle);
        let yearly = billing::yearly_equivalent(subscription.price, &subscription.billing_cycle);
        monthly_total += monthly;
        yearly_total += yearly;

        let slot = match by_category
            .iter()
            .position(|(category, _)| *category == subscription.category)
        {
            Some(index) => index,
            None => {
                by_category.push((subscription.category.clone(), CategorySpend::default()));
                by_category.len() - 1
            }
        };
        by_category[slot].1.monthly += monthly;
        by_category[slot].1.yearly += yearly;
    }

    // Stable sort keeps first-encounter order on equal amounts.
    by_category.sort_by(|a, b| {
        b.1.monthly
            .partial_cmp(&a.1.monthly)
            .unwrap_or(Ordering::Equal)
    });

    let mut dominant_currency = Currency::Usd;
    let mut max_count = 0;
    for (currency, count) in currency_counts {
        if count > max_count {
            max_count = count;
            dominant_currency = currency;
        }
    }

    SpendSummary {
        monthly_total,
        yearly_total,
        by_category,
        dominant_currency,
        status_counts,
    }
}
