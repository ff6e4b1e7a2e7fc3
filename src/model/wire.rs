//! Backend-facing wire shape and the mapping to the in-memory model
//!
//! The backend transmits enumerated fields upper-cased and underscored
//! ("CREDIT_CARD", "MONTHS"), dates as ISO-8601 strings, and the billing
//! cycle flattened into `billingInterval`/`billingUnit`. The client owns
//! the bidirectional mapping; unknown enum strings are rejected here, at
//! the boundary, so the engines only ever see well-formed values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    BillingCycle, Currency, PaymentMethod, Subscription, SubscriptionStatus, TimeUnit,
};
use crate::error::Error;

impl TimeUnit {
    /// Wire spelling, e.g. `MONTHS`
    pub fn wire_name(&self) -> &'static str {
        match self {
            TimeUnit::Days => "DAYS",
            TimeUnit::Weeks => "WEEKS",
            TimeUnit::Months => "MONTHS",
            TimeUnit::Years => "YEARS",
        }
    }

    /// Parse the wire spelling
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "DAYS" => Some(TimeUnit::Days),
            "WEEKS" => Some(TimeUnit::Weeks),
            "MONTHS" => Some(TimeUnit::Months),
            "YEARS" => Some(TimeUnit::Years),
            _ => None,
        }
    }
}

impl PaymentMethod {
    /// Wire spelling, e.g. `CREDIT_CARD`
    pub fn wire_name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::DebitCard => "DEBIT_CARD",
            PaymentMethod::Paypal => "PAYPAL",
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
            PaymentMethod::ApplePay => "APPLE_PAY",
            PaymentMethod::GooglePay => "GOOGLE_PAY",
            PaymentMethod::Other => "OTHER",
        }
    }

    /// Parse the wire spelling
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "CREDIT_CARD" => Some(PaymentMethod::CreditCard),
            "DEBIT_CARD" => Some(PaymentMethod::DebitCard),
            "PAYPAL" => Some(PaymentMethod::Paypal),
            "BANK_TRANSFER" => Some(PaymentMethod::BankTransfer),
            "APPLE_PAY" => Some(PaymentMethod::ApplePay),
            "GOOGLE_PAY" => Some(PaymentMethod::GooglePay),
            "OTHER" => Some(PaymentMethod::Other),
            _ => None,
        }
    }
}

impl SubscriptionStatus {
    /// Wire spelling, e.g. `ACTIVE`
    pub fn wire_name(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "ACTIVE",
            SubscriptionStatus::Paused => "PAUSED",
            SubscriptionStatus::Canceled => "CANCELED",
            SubscriptionStatus::Disabled => "DISABLED",
        }
    }

    /// Parse the wire spelling
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "ACTIVE" => Some(SubscriptionStatus::Active),
            "PAUSED" => Some(SubscriptionStatus::Paused),
            "CANCELED" => Some(SubscriptionStatus::Canceled),
            "DISABLED" => Some(SubscriptionStatus::Disabled),
            _ => None,
        }
    }
}

/// Subscription as the backend sends and receives it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    /// Absent on create; assigned by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub currency: Currency,
    pub billing_interval: u32,
    pub billing_unit: String,
    pub automatically_renews: bool,
    pub start_date: String,
    pub next_payment_date: String,
    pub payment_method: String,
    pub paid_by: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: String,
    pub owner_id: i64,
}

/// Render a date in the wire format. The backend works with full
/// timestamps; days are pinned to midnight UTC.
pub fn encode_wire_date(date: NaiveDate) -> String {
    format!("{}T00:00:00Z", date.format("%Y-%m-%d"))
}

/// Parse a wire date, accepting both bare dates and full timestamps.
pub fn decode_wire_date(value: &str) -> Result<NaiveDate, Error> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    let head = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(head, "%Y-%m-%d")
        .map_err(|_| Error::decode(format!("unparseable date {value:?}")))
}

impl SubscriptionRecord {
    /// Map the in-memory shape to the wire shape, scoped to an owner
    /// context. The internal string id carries over only when it is
    /// numeric; demo-mode uuids stay local.
    pub fn from_subscription(subscription: &Subscription, owner_id: i64) -> Self {
        Self {
            id: subscription.id.parse::<i64>().ok(),
            name: subscription.name.clone(),
            price: subscription.price,
            currency: subscription.currency,
            billing_interval: subscription.billing_cycle.interval,
            billing_unit: subscription.billing_cycle.unit.wire_name().to_string(),
            automatically_renews: subscription.automatically_renews,
            start_date: encode_wire_date(subscription.start_date),
            next_payment_date: encode_wire_date(subscription.next_payment_date),
            payment_method: subscription.payment_method.wire_name().to_string(),
            paid_by: subscription.paid_by.clone(),
            category: subscription.category.clone(),
            url: subscription.url.clone(),
            notes: subscription.notes.clone(),
            status: subscription.status.wire_name().to_string(),
            owner_id,
        }
    }

    /// Map the wire shape back to the in-memory shape. Unknown enum
    /// spellings and malformed dates are rejected.
    pub fn into_subscription(self) -> Result<Subscription, Error> {
        let unit = TimeUnit::from_wire(&self.billing_unit)
            .ok_or_else(|| Error::decode(format!("unknown billing unit {:?}", self.billing_unit)))?;
        let payment_method = PaymentMethod::from_wire(&self.payment_method).ok_or_else(|| {
            Error::decode(format!("unknown payment method {:?}", self.payment_method))
        })?;
        let status = SubscriptionStatus::from_wire(&self.status)
            .ok_or_else(|| Error::decode(format!("unknown status {:?}", self.status)))?;

        Ok(Subscription {
            id: self.id.map(|id| id.to_string()).unwrap_or_default(),
            name: self.name,
            price: self.price,
            currency: self.currency,
            billing_cycle: BillingCycle::new(self.billing_interval, unit),
            automatically_renews: self.automatically_renews,
            start_date: decode_wire_date(&self.start_date)?,
            next_payment_date: decode_wire_date(&self.next_payment_date)?,
            payment_method,
            paid_by: self.paid_by,
            category: self.category,
            url: self.url,
            notes: self.notes,
            status,
            sample: false,
        })
    }
}
