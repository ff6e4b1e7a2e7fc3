//! In-memory subscription model
//!
//! These are the shapes the engines operate on. The backend-facing wire
//! shape lives in [`wire`] together with the bidirectional mapping.

pub mod wire;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories offered by the entry form. The field itself is free text;
/// nothing constrains a subscription to this set.
pub const SUGGESTED_CATEGORIES: [&str; 11] = [
    "Entertainment",
    "Education",
    "Utilities",
    "Software",
    "Gaming",
    "Music",
    "News",
    "Streaming",
    "Food",
    "Fitness",
    "Other",
];

/// Unit of a billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    /// Plural noun as rendered in cadence labels ("every 3 months")
    pub fn plural(&self) -> &'static str {
        match self {
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plural())
    }
}

/// How often a subscription bills: every `interval` `unit`s.
///
/// Invariant: `interval >= 1`, enforced at the entry boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingCycle {
    pub interval: u32,
    pub unit: TimeUnit,
}

impl BillingCycle {
    pub fn new(interval: u32, unit: TimeUnit) -> Self {
        Self { interval, unit }
    }

    /// A monthly cycle, the entry form's default
    pub fn monthly() -> Self {
        Self::new(1, TimeUnit::Months)
    }
}

/// Currency a subscription is billed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Mdl,
    Jpy,
    Aud,
    Cad,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Mdl => "MDL",
            Currency::Jpy => "JPY",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
        }
    }

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Mdl => "L",
            Currency::Jpy => "¥",
            Currency::Aud => "A$",
            Currency::Cad => "C$",
        }
    }

    /// Fraction digits shown for amounts; yen has none
    pub fn decimals(&self) -> usize {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }

    /// Format an amount for display, e.g. `$15.99` or `¥1500`
    pub fn format(&self, amount: f64) -> String {
        format!("{}{:.*}", self.symbol(), self.decimals(), amount)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How a subscription is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
    BankTransfer,
    ApplePay,
    GooglePay,
    Other,
}

/// Subscription lifecycle status.
///
/// A flat enumeration: any status is reachable from any other, there are
/// no guarded transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Paused,
    Canceled,
    Disabled,
}

impl SubscriptionStatus {
    /// Capitalized name as shown on list badges
    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Paused => "Paused",
            SubscriptionStatus::Canceled => "Canceled",
            SubscriptionStatus::Disabled => "Disabled",
        }
    }
}

/// A recorded recurring payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Opaque id, unique within an owner's collection. Assigned by the
    /// backend, or generated client-side in demo mode.
    pub id: String,
    pub name: String,
    /// Non-negative; enforced at the entry boundary
    pub price: f64,
    pub currency: Currency,
    pub billing_cycle: BillingCycle,
    pub automatically_renews: bool,
    pub start_date: NaiveDate,
    pub next_payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
    /// Free-text payer label; empty when the owner pays
    pub paid_by: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: SubscriptionStatus,
    /// Marks demo data so it can be removed without touching user entries
    #[serde(default)]
    pub sample: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_formatting_follows_fraction_digits() {
        assert_eq!(Currency::Usd.format(15.99), "$15.99");
        assert_eq!(Currency::Jpy.format(1500.0), "¥1500");
        assert_eq!(Currency::Eur.format(4.0), "€4.00");
    }

    #[test]
    fn enums_serialize_in_local_store_shape() {
        let json = serde_json::to_string(&TimeUnit::Months).unwrap();
        assert_eq!(json, "\"months\"");
        let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
        assert_eq!(json, "\"credit_card\"");
        let json = serde_json::to_string(&SubscriptionStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let json = serde_json::to_string(&Currency::Usd).unwrap();
        assert_eq!(json, "\"USD\"");
    }
}
