//! Demo data for first-run exploration

use chrono::{Datelike, Duration, Months, NaiveDate};
use uuid::Uuid;

use crate::model::{
    BillingCycle, Currency, PaymentMethod, Subscription, SubscriptionStatus,
};

/// Anchor a start date `months` back on a fixed day of month, clamping to
/// the month's length when needed.
fn start_date(today: NaiveDate, months: u32, day: u32) -> NaiveDate {
    let shifted = today - Months::new(months);
    shifted.with_day(day).unwrap_or(shifted)
}

/// The two demo subscriptions seeded when sample data is enabled. All
/// entries carry the `sample` marker so they can be removed without
/// touching user data.
pub fn generate_sample_data(today: NaiveDate) -> Vec<Subscription> {
    vec![
        Subscription {
            id: Uuid::new_v4().to_string(),
            name: "Netflix".to_string(),
            price: 15.99,
            currency: Currency::Usd,
            billing_cycle: BillingCycle::monthly(),
            automatically_renews: true,
            start_date: start_date(today, 2, 15),
            next_payment_date: today + Duration::days(5),
            payment_method: PaymentMethod::CreditCard,
            paid_by: String::new(),
            category: "Entertainment".to_string(),
            url: Some("https://netflix.com".to_string()),
            notes: None,
            status: SubscriptionStatus::Active,
            sample: true,
        },
        Subscription {
            id: Uuid::new_v4().to_string(),
            name: "Spotify".to_string(),
            price: 9.99,
            currency: Currency::Usd,
            billing_cycle: BillingCycle::monthly(),
            automatically_renews: true,
            start_date: start_date(today, 5, 10),
            next_payment_date: today + Duration::days(12),
            payment_method: PaymentMethod::Paypal,
            paid_by: String::new(),
            category: "Music".to_string(),
            url: Some("https://spotify.com".to_string()),
            notes: None,
            status: SubscriptionStatus::Active,
            sample: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_marked_and_dated_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let samples = generate_sample_data(today);

        assert_eq!(samples.len(), 2);
        assert!(samples.iter().all(|s| s.sample));
        assert!(samples.iter().all(|s| s.status == SubscriptionStatus::Active));
        assert_eq!(samples[0].next_payment_date, today + Duration::days(5));
        assert_eq!(samples[1].next_payment_date, today + Duration::days(12));
        assert_eq!(samples[0].start_date, NaiveDate::from_ymd_opt(2026, 6, 15).unwrap());
        // Ids are generated per call.
        assert_ne!(samples[0].id, samples[1].id);
    }
}
