//! Dashboard state container
//!
//! Owns the in-memory subscription list and applies the user-triggered
//! mutations (add, edit, delete, status change, demo data on/off). Reads
//! go through the pure engines; the container itself holds no derived
//! state. When a local store is attached (demo mode) every mutation
//! persists synchronously.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{Error, FormField};
use crate::model::{Subscription, SubscriptionStatus};
use crate::sample;
use crate::stats::{self, SpendSummary};
use crate::store::LocalStore;
use crate::validate;
use crate::view::{self, CategoryFilter, SortKey};

/// In-memory subscription collection with optional local persistence
pub struct Dashboard {
    subscriptions: Vec<Subscription>,
    sample_data_active: bool,
    store: Option<LocalStore>,
}

impl Dashboard {
    /// Empty dashboard with no persistence
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            sample_data_active: false,
            store: None,
        }
    }

    /// Dashboard backed by a local store: previously saved state wins;
    /// otherwise an active demo flag seeds the sample data; otherwise the
    /// dashboard starts empty.
    pub fn with_store(store: LocalStore, today: NaiveDate) -> Result<Self, Error> {
        let saved = store.load_subscriptions()?;
        let flag = store.sample_data_active()?;

        let (subscriptions, sample_data_active) = match saved {
            Some(list) => (list, flag),
            None if flag => {
                let samples = sample::generate_sample_data(today);
                store.save_subscriptions(&samples)?;
                (samples, true)
            }
            None => (Vec::new(), false),
        };

        Ok(Self {
            subscriptions,
            sample_data_active,
            store: Some(store),
        })
    }

    /// Replace the collection wholesale, e.g. after a backend fetch.
    pub fn set_subscriptions(&mut self, subscriptions: Vec<Subscription>) -> Result<(), Error> {
        self.subscriptions = subscriptions;
        self.persist()
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn sample_data_active(&self) -> bool {
        self.sample_data_active
    }

    fn persist(&self) -> Result<(), Error> {
        if let Some(store) = &self.store {
            store.save_subscriptions(&self.subscriptions)?;
        }
        Ok(())
    }

    fn check_entry(subscription: &Subscription) -> Result<(), Error> {
        validate::required(FormField::General, &subscription.name)?;
        if subscription.price < 0.0 {
            return Err(Error::validation(
                FormField::General,
                "Price cannot be negative.",
            ));
        }
        if subscription.billing_cycle.interval < 1 {
            return Err(Error::validation(
                FormField::General,
                "Billing interval must be at least 1.",
            ));
        }
        Ok(())
    }

    /// Add a subscription, assigning a fresh client-side id. Returns the
    /// assigned id.
    pub fn add(&mut self, mut subscription: Subscription) -> Result<String, Error> {
        Self::check_entry(&subscription)?;
        subscription.id = Uuid::new_v4().to_string();
        let id = subscription.id.clone();
        self.subscriptions.push(subscription);
        self.persist()?;
        Ok(id)
    }

    /// Replace the subscription with the same id. Unknown ids are a
    /// no-op, matching edit-after-delete races.
    pub fn update(&mut self, subscription: Subscription) -> Result<(), Error> {
        Self::check_entry(&subscription)?;
        if let Some(existing) = self
            .subscriptions
            .iter_mut()
            .find(|s| s.id == subscription.id)
        {
            *existing = subscription;
        }
        self.persist()
    }

    /// Remove a subscription by id.
    pub fn delete(&mut self, id: &str) -> Result<(), Error> {
        self.subscriptions.retain(|s| s.id != id);
        self.persist()
    }

    /// Change a subscription's status in place. Transitions are
    /// unconstrained.
    pub fn set_status(&mut self, id: &str, status: SubscriptionStatus) -> Result<(), Error> {
        if let Some(subscription) = self.subscriptions.iter_mut().find(|s| s.id == id) {
            subscription.status = status;
        }
        self.persist()
    }

    /// Append the demo subscriptions and mark demo mode active.
    pub fn enable_sample_data(&mut self, today: NaiveDate) -> Result<(), Error> {
        if self.sample_data_active {
            return Ok(());
        }
        self.subscriptions.extend(sample::generate_sample_data(today));
        self.sample_data_active = true;
        if let Some(store) = &self.store {
            store.set_sample_data_active(true)?;
        }
        self.persist()
    }

    /// Drop all sample-marked entries and clear the demo flag; user
    /// entries are untouched.
    pub fn remove_sample_data(&mut self) -> Result<(), Error> {
        self.subscriptions.retain(|s| !s.sample);
        self.sample_data_active = false;
        if let Some(store) = &self.store {
            store.set_sample_data_active(false)?;
        }
        self.persist()
    }

    /// Spend summary over the current collection
    pub fn summary(&self) -> SpendSummary {
        stats::summarize(&self.subscriptions)
    }

    /// Filtered, sorted copy for the list layout
    pub fn list_view(
        &self,
        filter: &CategoryFilter,
        sort: SortKey,
        today: NaiveDate,
    ) -> Vec<Subscription> {
        view::filter_and_sort(&self.subscriptions, filter, sort, today)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
